// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;
use tokio::time::Instant;

/// Records the tokio instant of every call made through [`CallRecorder::callback`].
#[derive(Clone, Debug, Default)]
pub struct CallRecorder {
    calls: Arc<Mutex<Vec<Instant>>>,
}

impl CallRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A zero-argument callback suitable for wrapping in a throttle.
    pub fn callback(&self) -> impl Fn() + Send + Sync + 'static {
        let calls = self.calls.clone();
        move || calls.lock().push(Instant::now())
    }

    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Milliseconds between `origin` and each recorded call, in call order.
    pub fn offsets_ms(&self, origin: Instant) -> Vec<u128> {
        self.calls
            .lock()
            .iter()
            .map(|at| at.duration_since(origin).as_millis())
            .collect()
    }
}
