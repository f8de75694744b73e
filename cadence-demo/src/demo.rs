// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence::{throttle_with_config, ThrottleConfig, Throttled};
use cadence_error::Result;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::time::Instant;

/// A counter updated either directly or through a throttle.
///
/// Both paths share the same `update` action, so switching mid-flight keeps
/// a pending throttled flush alive; it still lands on the counter.
pub struct ThrottleDemo {
    times_updated: Arc<AtomicU64>,
    started: Instant,
    update: Arc<dyn Fn() + Send + Sync>,
    throttled: Throttled,
    throttling: bool,
}

impl ThrottleDemo {
    pub fn new(config: ThrottleConfig, start_throttled: bool) -> Self {
        let times_updated = Arc::new(AtomicU64::new(0));
        let counter = times_updated.clone();
        let update: Arc<dyn Fn() + Send + Sync> = Arc::new(move || {
            counter.fetch_add(1, Ordering::Relaxed);
        });
        let throttled_update = update.clone();
        let throttled = throttle_with_config(move || throttled_update(), config);

        Self {
            times_updated,
            started: Instant::now(),
            update,
            throttled,
            throttling: start_throttled,
        }
    }

    /// Calls the update through whichever path is active.
    pub fn tick(&self) -> Result<()> {
        if self.throttling {
            self.throttled.invoke()?;
        } else {
            (self.update)();
        }
        Ok(())
    }

    pub fn toggle(&mut self) {
        self.throttling = !self.throttling;
    }

    pub fn is_throttling(&self) -> bool {
        self.throttling
    }

    pub fn times_updated(&self) -> u64 {
        self.times_updated.load(Ordering::Relaxed)
    }

    pub fn button_label(&self) -> &'static str {
        if self.throttling {
            "Stop Throttling"
        } else {
            "Start Throttling"
        }
    }

    pub fn render(&self) -> String {
        let seconds = self.started.elapsed().as_secs();
        format!(
            "Updated {} times in {} seconds.",
            self.times_updated(),
            seconds
        )
    }
}
