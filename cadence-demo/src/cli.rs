// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use clap::Parser;

/// Drives a counter at a fixed cadence, with or without throttling.
///
/// Press Enter to toggle throttling. Ctrl-C stops the demo.
#[derive(Parser, Debug, Default)]
#[command(name = "cadence-demo", version)]
pub struct Cli {
    /// Milliseconds between two ticks of the driver
    #[arg(long)]
    pub tick_interval_ms: Option<u64>,

    /// Minimum milliseconds between two throttled updates
    #[arg(long, allow_negative_numbers = true)]
    pub throttle_interval_ms: Option<i64>,

    /// Start with throttling disabled
    #[arg(long)]
    pub unthrottled: bool,

    /// Toggle throttling automatically every N seconds
    #[arg(long)]
    pub toggle_every_secs: Option<u64>,

    /// Stop after N seconds
    #[arg(long)]
    pub run_for_secs: Option<u64>,

    /// Log every throttling decision at debug level
    #[arg(long)]
    pub trace_decisions: bool,
}
