// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod call_recorder;
pub mod helpers;
pub mod log_recorder;

pub use call_recorder::CallRecorder;
pub use log_recorder::LogRecorder;
