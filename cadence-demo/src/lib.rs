// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Terminal rendition of the throttle demo: a tick driver calls an update
//! function at a fixed cadence, either directly or through a throttle, and a
//! status line shows how often the counter actually moved.

pub mod cli;
pub mod config;
pub mod demo;
pub mod driver;
pub mod logging;
