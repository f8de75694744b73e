// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::timer::Timer;
use cadence_error::Result;
use core::cmp::Ord;
use core::default::Default;
use core::fmt::Debug;
use core::future::Future;
use core::marker::{Copy, Send, Sync};
use core::ops::{Add, Sub};
use core::time::Duration;

pub trait Runtime: 'static {
    type Timer: Timer<Instant = Self::Instant> + Default;
    type Instant: Copy
        + Ord
        + Send
        + Sync
        + Debug
        + Add<Duration, Output = Self::Instant>
        + Sub<Self::Instant, Output = Duration>;

    /// Runs `future` to completion on the host executor.
    ///
    /// The task is fire-and-forget: no handle is returned and it cannot be
    /// cancelled once accepted.
    ///
    /// # Errors
    /// Returns [`cadence_error::CadenceError::SchedulingError`] when no
    /// executor is available to accept the task.
    fn spawn_detached<F>(future: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static;
}
