// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence_demo::cli::Cli;
use cadence_demo::config::DemoConfig;
use cadence_demo::demo::ThrottleDemo;
use cadence_demo::driver::{run, spawn_stdin_toggles};
use cadence_demo::logging::{env_filter, DECISIONS_TARGET};
use clap::Parser;
use tracing::{debug, info, warn};

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(cli)?)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;
    let config = DemoConfig::load()?.with_overrides(&cli);
    config.validate()?;

    info!(
        tick_interval_ms = config.tick_interval_ms,
        throttle_interval_ms = config.throttle_interval_ms,
        start_throttled = config.start_throttled,
        "throttle demo starting"
    );

    let mut throttle_config = config.throttle_config()?;
    if cli.trace_decisions {
        throttle_config = throttle_config
            .with_log_sink(|line| debug!(target: DECISIONS_TARGET, "{line}"));
    }
    let mut demo = ThrottleDemo::new(throttle_config, config.start_throttled);

    let shutdown = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            warn!("cannot listen for Ctrl-C: {error}");
            std::future::pending::<()>().await;
        }
    };
    let mut stdout = std::io::stdout();
    run(&mut demo, &config, spawn_stdin_toggles(), &mut stdout, shutdown).await?;

    info!(times_updated = demo.times_updated(), "throttle demo stopped");
    Ok(())
}
