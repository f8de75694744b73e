// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;
use tokio::time::sleep;

/// Lets `ms` milliseconds pass on the tokio clock.
///
/// Under a paused clock this auto-advances time and runs every task whose
/// timer falls inside the window, in deadline order.
pub async fn elapse(ms: u64) {
    sleep(Duration::from_millis(ms)).await;
}

/// Calls `step` `times` times, letting `spacing_ms` pass after each call.
pub async fn repeat_every<F>(times: usize, spacing_ms: u64, mut step: F)
where
    F: FnMut(usize),
{
    for i in 0..times {
        step(i);
        elapse(spacing_ms).await;
    }
}
