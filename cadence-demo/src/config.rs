// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::cli::Cli;
use cadence::ThrottleConfig;
use cadence_error::{CadenceError, IntoCadenceError, Result};
use serde::Deserialize;
use std::time::Duration;

/// Complete demo configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    pub tick_interval_ms: u64,
    pub throttle_interval_ms: i64,
    pub start_throttled: bool,
    pub toggle_every_secs: Option<u64>,
    pub run_for_secs: Option<u64>,
}

impl DemoConfig {
    /// Load configuration from the embedded TOML file
    pub fn load() -> Result<Self> {
        Self::from_toml_str(include_str!("../config.toml"))
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| e.into_cadence_error("parsing demo configuration"))
    }

    /// Command-line values win over file values.
    #[must_use]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(tick) = cli.tick_interval_ms {
            self.tick_interval_ms = tick;
        }
        if let Some(interval) = cli.throttle_interval_ms {
            self.throttle_interval_ms = interval;
        }
        if cli.unthrottled {
            self.start_throttled = false;
        }
        if cli.toggle_every_secs.is_some() {
            self.toggle_every_secs = cli.toggle_every_secs;
        }
        if cli.run_for_secs.is_some() {
            self.run_for_secs = cli.run_for_secs;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(CadenceError::config_error(
                "tick_interval_ms must be greater than zero",
            ));
        }
        if self.throttle_interval_ms < 0 {
            return Err(CadenceError::invalid_interval(self.throttle_interval_ms));
        }
        if self.toggle_every_secs == Some(0) {
            return Err(CadenceError::config_error(
                "toggle_every_secs must be greater than zero",
            ));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn toggle_period(&self) -> Option<Duration> {
        self.toggle_every_secs.map(Duration::from_secs)
    }

    pub fn run_for(&self) -> Option<Duration> {
        self.run_for_secs.map(Duration::from_secs)
    }

    /// Throttle settings for the demo's `update` callback.
    pub fn throttle_config(&self) -> Result<ThrottleConfig> {
        Ok(ThrottleConfig::try_from_millis(self.throttle_interval_ms)?.with_name("update"))
    }
}
