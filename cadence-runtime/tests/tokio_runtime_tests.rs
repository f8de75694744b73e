// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence_error::CadenceError;
use cadence_runtime::impls::tokio::{TokioRuntime, TokioTimer};
use cadence_runtime::runtime::Runtime;
use cadence_runtime::timer::Timer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

#[tokio::test(start_paused = true)]
async fn test_now_follows_paused_clock() {
    // Arrange
    let timer = TokioTimer;
    let start = timer.now();

    // Act
    sleep(Duration::from_millis(250)).await;

    // Assert
    assert_eq!(timer.now() - start, Duration::from_millis(250));
}

#[tokio::test(start_paused = true)]
async fn test_sleep_future_completes_after_duration() {
    // Arrange
    let timer = TokioTimer;
    let start = timer.now();

    // Act
    timer.sleep_future(Duration::from_secs(1)).await;

    // Assert
    assert!(timer.now() - start >= Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn test_spawn_detached_runs_after_caller_yields() -> anyhow::Result<()> {
    // Arrange
    let ran = Arc::new(AtomicBool::new(false));
    let ran_clone = ran.clone();

    // Act
    TokioRuntime::spawn_detached(async move {
        ran_clone.store(true, Ordering::SeqCst);
    })?;

    // Assert
    assert!(!ran.load(Ordering::SeqCst));
    sleep(Duration::from_millis(1)).await;
    assert!(ran.load(Ordering::SeqCst));

    Ok(())
}

#[test]
fn test_spawn_detached_outside_runtime_fails() {
    // Act
    let result = TokioRuntime::spawn_detached(async {});

    // Assert
    assert!(matches!(result, Err(CadenceError::SchedulingError { .. })));
}
