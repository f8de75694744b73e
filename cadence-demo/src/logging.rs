// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Target of the throttle decisions routed from `--trace-decisions`.
pub const DECISIONS_TARGET: &str = "cadence_demo::decisions";

/// `RUST_LOG` (default `info`), plus debug for decisions when requested.
pub fn env_filter(cli: &Cli) -> anyhow::Result<EnvFilter> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if !cli.trace_decisions {
        return Ok(filter);
    }
    Ok(filter.add_directive(format!("{DECISIONS_TARGET}=debug").parse()?))
}
