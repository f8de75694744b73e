// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence::{throttle, Invocation};
use cadence_test_utils::helpers::{elapse, repeat_every};
use cadence_test_utils::CallRecorder;
use std::time::Duration;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_throttle_single_call_executes_without_timer() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let throttled = throttle(recorder.callback(), Duration::from_secs(1));

    // Act
    let outcome = throttled.invoke()?;

    // Assert
    assert_eq!(outcome, Invocation::Executed);
    assert_eq!(recorder.count(), 1);
    assert!(!throttled.is_waiting());

    elapse(5_000).await;
    assert_eq!(recorder.count(), 1);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_throttle_calls_spaced_by_interval_execute_synchronously() -> anyhow::Result<()> {
    // Arrange
    let origin = Instant::now();
    let recorder = CallRecorder::new();
    let throttled = throttle(recorder.callback(), Duration::from_secs(1));

    // Act & Assert
    for expected in 1..=4 {
        assert_eq!(throttled.invoke()?, Invocation::Executed);
        assert_eq!(recorder.count(), expected);
        elapse(1_000).await;
    }

    assert_eq!(recorder.offsets_ms(origin), vec![0, 1_000, 2_000, 3_000]);
    assert!(!throttled.is_waiting());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_throttle_suppressed_call_fires_one_interval_later() -> anyhow::Result<()> {
    // Arrange
    let origin = Instant::now();
    let recorder = CallRecorder::new();
    let throttled = throttle(recorder.callback(), Duration::from_secs(1));

    // Act
    assert_eq!(throttled.invoke()?, Invocation::Executed);
    elapse(100).await;
    assert_eq!(throttled.invoke()?, Invocation::Deferred);

    // Assert
    assert!(throttled.is_waiting());
    elapse(999).await;
    assert_eq!(recorder.count(), 1);
    assert!(throttled.is_waiting());

    elapse(2).await;
    assert_eq!(recorder.count(), 2);
    assert!(!throttled.is_waiting());
    assert_eq!(recorder.offsets_ms(origin), vec![0, 1_100]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_throttle_rapid_fire_coalesces_into_two_executions() -> anyhow::Result<()> {
    // Arrange
    let origin = Instant::now();
    let recorder = CallRecorder::new();
    let throttled = throttle(recorder.callback(), Duration::from_secs(1));
    let mut outcomes = Vec::new();

    // Act
    repeat_every(100, 10, |_| outcomes.push(throttled.invoke().unwrap())).await;

    // Assert
    assert_eq!(outcomes[0], Invocation::Executed);
    assert_eq!(outcomes[1], Invocation::Deferred);
    assert!(outcomes[2..].iter().all(|o| *o == Invocation::Ignored));

    elapse(9).await;
    assert_eq!(recorder.count(), 1);

    elapse(2).await;
    assert_eq!(recorder.offsets_ms(origin), vec![0, 1_010]);

    elapse(10_000).await;
    assert_eq!(recorder.count(), 2);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_throttle_deferred_check_waits_full_interval() -> anyhow::Result<()> {
    // Arrange
    let origin = Instant::now();
    let recorder = CallRecorder::new();
    let throttled = throttle(recorder.callback(), Duration::from_secs(1));

    // Act
    throttled.invoke()?;
    elapse(900).await;
    assert_eq!(throttled.invoke()?, Invocation::Deferred);

    // Assert - not flushed once the interval since the leading call is over
    elapse(600).await;
    assert_eq!(recorder.count(), 1);

    elapse(401).await;
    assert_eq!(recorder.offsets_ms(origin), vec![0, 1_900]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_throttle_call_after_flush_is_checked_against_new_last_call() -> anyhow::Result<()> {
    // Arrange
    let origin = Instant::now();
    let recorder = CallRecorder::new();
    let throttled = throttle(recorder.callback(), Duration::from_secs(1));

    throttled.invoke()?;
    elapse(100).await;
    throttled.invoke()?;
    elapse(1_001).await;
    assert_eq!(recorder.count(), 2);
    let flushed_at = throttled.last_call_time().expect("flush recorded");
    assert_eq!(flushed_at.duration_since(origin), Duration::from_millis(1_100));

    // Act
    let outcome = throttled.invoke()?;

    // Assert
    assert_eq!(outcome, Invocation::Deferred);
    assert_eq!(throttled.last_call_time(), Some(flushed_at));

    elapse(1_001).await;
    assert_eq!(recorder.offsets_ms(origin), vec![0, 1_100, 2_101]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_throttle_ignored_calls_do_not_extend_pending_check() -> anyhow::Result<()> {
    // Arrange
    let origin = Instant::now();
    let recorder = CallRecorder::new();
    let throttled = throttle(recorder.callback(), Duration::from_millis(500));

    throttled.invoke()?;
    elapse(50).await;
    assert_eq!(throttled.invoke()?, Invocation::Deferred);

    // Act
    for _ in 0..4 {
        elapse(100).await;
        assert_eq!(throttled.invoke()?, Invocation::Ignored);
    }

    // Assert
    elapse(101).await;
    assert_eq!(recorder.offsets_ms(origin), vec![0, 550]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_throttle_zero_interval_never_defers() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let throttled = throttle(recorder.callback(), Duration::ZERO);

    // Act & Assert
    for _ in 0..10 {
        assert_eq!(throttled.invoke()?, Invocation::Executed);
    }
    assert_eq!(recorder.count(), 10);
    assert!(!throttled.is_waiting());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_throttle_instance_outlives_dropped_handle_while_pending() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::new();
    let throttled = throttle(recorder.callback(), Duration::from_millis(200));
    throttled.invoke()?;
    throttled.invoke()?;

    // Act
    drop(throttled);
    elapse(201).await;

    // Assert
    assert_eq!(recorder.count(), 2);

    Ok(())
}
