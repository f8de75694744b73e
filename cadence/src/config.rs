// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence_error::{CadenceError, Result};
use core::fmt;
use core::time::Duration;
use std::sync::Arc;

/// Receives one human-readable line per throttling decision.
pub type LogSink = Arc<dyn Fn(&str) + Send + Sync>;

const ANONYMOUS: &str = "anonymous";

/// Settings for a single throttle instance.
///
/// The interval is fixed for the lifetime of the instance. The name only
/// appears in diagnostic messages.
#[derive(Clone)]
pub struct ThrottleConfig {
    interval: Duration,
    name: String,
    log_sink: Option<LogSink>,
}

impl ThrottleConfig {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            name: ANONYMOUS.to_string(),
            log_sink: None,
        }
    }

    /// Builds a config from a signed millisecond count.
    ///
    /// # Errors
    /// Returns [`CadenceError::InvalidInterval`] for negative values.
    pub fn try_from_millis(millis: i64) -> Result<Self> {
        let millis = u64::try_from(millis).map_err(|_| CadenceError::invalid_interval(millis))?;
        Ok(Self::new(Duration::from_millis(millis)))
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Attaches a diagnostic sink. It observes decisions and never alters them.
    #[must_use]
    pub fn with_log_sink<F>(mut self, sink: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.log_sink = Some(Arc::new(sink));
        self
    }

    #[must_use]
    pub fn with_shared_log_sink(mut self, sink: LogSink) -> Self {
        self.log_sink = Some(sink);
        self
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn log_sink(&self) -> Option<&LogSink> {
        self.log_sink.as_ref()
    }
}

impl fmt::Debug for ThrottleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThrottleConfig")
            .field("interval", &self.interval)
            .field("name", &self.name)
            .field("log_sink", &self.log_sink.is_some())
            .finish()
    }
}
