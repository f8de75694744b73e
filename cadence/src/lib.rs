// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Call throttling for zero-argument callbacks.
//!
//! [`throttle`] wraps a callback and returns a [`Throttled`] handle. Calling
//! [`Throttled::invoke`] runs the callback immediately when it has not run for
//! at least the configured interval, and otherwise coalesces every further
//! attempt into one deferred execution scheduled on the host runtime.
//!
//! # Overview
//!
//! - **[`throttle`] / [`throttle_with_config`]** - Factories for a throttled handle
//! - **[`Throttled`]** - Cloneable invocation handle with state accessors
//! - **[`Invocation`]** - Outcome of a single `invoke()` call
//! - **[`ThrottleConfig`]** - Interval, diagnostic name and optional [`LogSink`]
//!
//! # Runtime Support
//!
//! Deferred checks run on the runtime selected by [`DefaultRuntime`] (tokio).
//! Other hosts plug in through [`cadence_runtime::runtime::Runtime`] and
//! [`Throttled::new`].

mod config;
mod logging;
pub mod throttle;

pub use config::{LogSink, ThrottleConfig};
pub use throttle::{throttle, throttle_with_config, Invocation, Throttled};

pub use cadence_runtime::impls::tokio::{TokioRuntime, TokioTimer};

/// Runtime used by [`throttle`] and by `Throttled` without a type argument.
pub type DefaultRuntime = TokioRuntime;
