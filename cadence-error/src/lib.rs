// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the cadence call throttling library
//!
//! Throttling itself never fails: a wrapped callback that panics unwinds
//! straight through `invoke()` and is not represented here. The errors below
//! cover the surrounding plumbing, i.e. handing a deferred check to the host
//! runtime and validating configuration.
//!
//! # Examples
//!
//! ```
//! use cadence_error::{CadenceError, Result};
//!
//! fn interval_from(millis: i64) -> Result<u64> {
//!     u64::try_from(millis).map_err(|_| CadenceError::invalid_interval(millis))
//! }
//!
//! assert!(interval_from(-5).is_err());
//! ```

/// Root error type for all cadence operations
#[derive(Debug, thiserror::Error)]
pub enum CadenceError {
    /// A deferred check could not be handed to the host runtime
    ///
    /// Typically raised when `invoke()` needs to arm its timer outside of any
    /// executor context.
    #[error("Scheduling error: {context}")]
    SchedulingError {
        /// Why the runtime refused the task
        context: String,
    },

    /// A throttle interval was negative
    #[error("Invalid interval: {millis}ms is negative")]
    InvalidInterval {
        /// The rejected value, in milliseconds
        millis: i64,
    },

    /// Configuration values are inconsistent or out of range
    #[error("Configuration error: {context}")]
    ConfigError {
        /// Which setting was rejected and why
        context: String,
    },

    /// Custom error from user code
    ///
    /// Wraps foreign errors so they can travel through cadence results.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl CadenceError {
    /// Create a scheduling error with the given context
    pub fn scheduling_error(context: impl Into<String>) -> Self {
        Self::SchedulingError {
            context: context.into(),
        }
    }

    /// Create an invalid interval error
    #[must_use]
    pub const fn invalid_interval(millis: i64) -> Self {
        Self::InvalidInterval { millis }
    }

    /// Create a configuration error with the given context
    pub fn config_error(context: impl Into<String>) -> Self {
        Self::ConfigError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Check if this error indicates a permanent failure
    #[must_use]
    pub const fn is_permanent(&self) -> bool {
        matches!(
            self,
            Self::InvalidInterval { .. } | Self::ConfigError { .. }
        )
    }
}

/// Specialized Result type for cadence operations
pub type Result<T> = std::result::Result<T, CadenceError>;

/// Extension trait for converting errors into `CadenceError`
pub trait IntoCadenceError {
    /// Convert this error into a `CadenceError` with additional context
    fn into_cadence_error(self, context: &str) -> CadenceError;

    /// Convert this error into a `CadenceError` without additional context
    fn into_cadence(self) -> CadenceError
    where
        Self: Sized,
    {
        self.into_cadence_error("")
    }
}

impl<E: std::error::Error + Send + Sync + 'static> IntoCadenceError for E {
    fn into_cadence_error(self, context: &str) -> CadenceError {
        if context.is_empty() {
            CadenceError::user_error(self)
        } else {
            CadenceError::ConfigError {
                context: format!("{context}: {self}"),
            }
        }
    }
}
