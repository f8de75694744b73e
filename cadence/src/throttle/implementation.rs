// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::config::ThrottleConfig;
use crate::logging::{trace, warn};
use crate::DefaultRuntime;
use cadence_error::Result;
use cadence_runtime::runtime::Runtime;
use cadence_runtime::timer::Timer;
use core::fmt;
use core::time::Duration;
use parking_lot::Mutex;
use std::sync::Arc;

type Callback = Arc<dyn Fn() + Send + Sync>;

/// What a single `invoke()` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    /// The callback ran synchronously inside this call.
    Executed,
    /// The call came too soon; a deferred check was armed.
    Deferred,
    /// A deferred check was already pending; nothing happened.
    Ignored,
}

/// Creates a throttled handle around `callback` on the default runtime.
///
/// See the [module documentation](mod@crate::throttle) for the policy.
pub fn throttle<F>(callback: F, interval: Duration) -> Throttled
where
    F: Fn() + Send + Sync + 'static,
{
    Throttled::new(callback, ThrottleConfig::new(interval))
}

/// Like [`throttle`], with a name and an optional diagnostic sink.
pub fn throttle_with_config<F>(callback: F, config: ThrottleConfig) -> Throttled
where
    F: Fn() + Send + Sync + 'static,
{
    Throttled::new(callback, config)
}

struct ThrottleState<I> {
    waiting: bool,
    last_call_time: Option<I>,
}

enum Decision {
    Execute,
    Defer { elapsed: Duration },
}

struct Shared<R: Runtime> {
    callback: Callback,
    config: ThrottleConfig,
    timer: R::Timer,
    state: Mutex<ThrottleState<R::Instant>>,
}

/// Invocation handle of a throttle instance.
///
/// Clones share the same state. A pending deferred check keeps the instance
/// alive until it has fired.
pub struct Throttled<R: Runtime = DefaultRuntime> {
    shared: Arc<Shared<R>>,
}

impl<R: Runtime> Clone for Throttled<R> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<R: Runtime> fmt::Debug for Throttled<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.lock();
        f.debug_struct("Throttled")
            .field("config", &self.shared.config)
            .field("waiting", &state.waiting)
            .field("last_call_time", &state.last_call_time)
            .finish()
    }
}

impl<R: Runtime> Throttled<R> {
    pub fn new<F>(callback: F, config: ThrottleConfig) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            shared: Arc::new(Shared {
                callback: Arc::new(callback),
                config,
                timer: R::Timer::default(),
                state: Mutex::new(ThrottleState {
                    waiting: false,
                    last_call_time: None,
                }),
            }),
        }
    }

    /// Applies the throttling policy once.
    ///
    /// A panicking callback unwinds out of this call. `last_call_time` is
    /// already updated at that point.
    ///
    /// # Errors
    /// Returns [`cadence_error::CadenceError::SchedulingError`] if the call
    /// had to be deferred but the runtime refused the deferred check. The
    /// instance is left not waiting.
    pub fn invoke(&self) -> Result<Invocation> {
        let (decision, now) = {
            let mut state = self.shared.state.lock();
            if state.waiting {
                return Ok(Invocation::Ignored);
            }
            self.decide(&mut state)
        };
        self.act(decision, now)
    }

    #[must_use]
    pub fn is_waiting(&self) -> bool {
        self.shared.state.lock().waiting
    }

    #[must_use]
    pub fn last_call_time(&self) -> Option<R::Instant> {
        self.shared.state.lock().last_call_time
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.shared.config.interval()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.shared.config.name()
    }

    fn decide(&self, state: &mut ThrottleState<R::Instant>) -> (Decision, R::Instant) {
        let now = self.shared.timer.now();
        match state.last_call_time {
            Some(last) if now - last < self.interval() => {
                state.waiting = true;
                (Decision::Defer { elapsed: now - last }, now)
            }
            _ => {
                state.last_call_time = Some(now);
                (Decision::Execute, now)
            }
        }
    }

    fn act(&self, decision: Decision, now: R::Instant) -> Result<Invocation> {
        match decision {
            Decision::Execute => {
                self.report(&format!("Calling function {}", self.name()));
                (self.shared.callback)();
                Ok(Invocation::Executed)
            }
            Decision::Defer { elapsed } => {
                self.arm_deferred_check(now)?;
                self.report(&format!(
                    "Throttling function {}: last change too recent ({}ms ago)",
                    self.name(),
                    elapsed.as_millis()
                ));
                Ok(Invocation::Deferred)
            }
        }
    }

    fn arm_deferred_check(&self, armed_at: R::Instant) -> Result<()> {
        let pending = PendingCheck {
            throttled: Some(self.clone()),
        };
        let deadline = armed_at + self.interval();
        R::spawn_detached(async move {
            let mut pending = pending;
            if let Some(this) = pending.throttled.as_ref() {
                let remaining = deadline - this.shared.timer.now();
                this.shared.timer.sleep_future(remaining).await;
            }
            if let Some(this) = pending.throttled.take() {
                this.on_done_waiting();
            }
        })
        .inspect_err(|_| self.shared.state.lock().waiting = false)
    }

    fn on_done_waiting(&self) {
        let (decision, now) = {
            let mut state = self.shared.state.lock();
            if !state.waiting {
                drop(state);
                self.report(&format!(
                    "No longer waiting on function {}, returning",
                    self.name()
                ));
                return;
            }
            state.waiting = false;
            self.decide(&mut state)
        };
        self.report(&format!("Done waiting to call function {}", self.name()));

        if let Err(error) = self.act(decision, now) {
            warn!("deferred call of {} could not be re-armed: {error}", self.name());
        }
    }

    fn report(&self, message: &str) {
        trace!("{message}");
        if let Some(sink) = self.shared.config.log_sink() {
            sink(message);
        }
    }
}

/// Deferred check owned by the spawned task.
///
/// If the host drops the task before it fires (runtime shutdown), `waiting`
/// is cleared so the instance does not ignore every later call.
struct PendingCheck<R: Runtime> {
    throttled: Option<Throttled<R>>,
}

impl<R: Runtime> Drop for PendingCheck<R> {
    fn drop(&mut self) {
        if let Some(throttled) = self.throttled.take() {
            throttled.shared.state.lock().waiting = false;
            warn!(
                "deferred check of {} dropped before firing",
                throttled.name()
            );
        }
    }
}
