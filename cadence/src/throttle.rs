// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Wraps a zero-argument callback so it runs at most once per interval.
//!
//! This implements **leading throttle with a deferred flush**:
//! - When `invoke()` is called and nothing is pending:
//!   - If the callback never ran, or ran at least `interval` ago, run it now
//!   - Otherwise mark the instance as waiting and arm a deferred check for a
//!     full `interval` from now
//! - While waiting, further `invoke()` calls are ignored
//! - When the deferred check fires, waiting ends and `invoke()` runs again,
//!   which executes the callback
//!
//! The deferred check always waits the whole interval, not only the time left
//! since the last execution, so the gap between the leading and trailing
//! executions may exceed `interval`.
//!
//! # Example
//!
//! ```rust
//! use cadence::{throttle, Invocation};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> cadence_error::Result<()> {
//! let count = Arc::new(AtomicUsize::new(0));
//! let counter = count.clone();
//! let update = throttle(
//!     move || {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     },
//!     Duration::from_millis(100),
//! );
//!
//! assert_eq!(update.invoke()?, Invocation::Executed);
//! assert_eq!(update.invoke()?, Invocation::Deferred);
//! assert_eq!(update.invoke()?, Invocation::Ignored);
//! assert_eq!(count.load(Ordering::SeqCst), 1);
//! # Ok(())
//! # }
//! ```

mod implementation;

pub use implementation::{throttle, throttle_with_config, Invocation, Throttled};
