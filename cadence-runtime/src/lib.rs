// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Host facilities required by the cadence throttle.
//!
//! A throttle needs exactly two things from its environment: a monotonic clock
//! with one-shot sleeps ([`timer::Timer`]) and a way to run a deferred check
//! after the current call returns ([`runtime::Runtime::spawn_detached`]).

pub mod impls;
pub mod runtime;
pub mod timer;
