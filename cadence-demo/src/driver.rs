// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::config::DemoConfig;
use crate::demo::ThrottleDemo;
use std::future::{pending, Future};
use std::io::{BufRead, Write};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tokio::time::{interval_at, sleep_until, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info};

/// Forwards one toggle request per line read on stdin.
///
/// The reader lives on a plain thread so a blocked read never holds up
/// runtime shutdown. The channel closes on EOF.
pub fn spawn_stdin_toggles() -> UnboundedReceiver<()> {
    let (tx, rx) = unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            if line.is_err() || tx.send(()).is_err() {
                break;
            }
        }
    });
    rx
}

/// Runs the tick loop until `shutdown` resolves, the configured run time is
/// over, or the toggle input closes while nothing else can end the demo.
pub async fn run<W, S>(
    demo: &mut ThrottleDemo,
    config: &DemoConfig,
    mut toggles: UnboundedReceiver<()>,
    out: &mut W,
    shutdown: S,
) -> anyhow::Result<()>
where
    W: Write,
    S: Future<Output = ()>,
{
    let start = Instant::now();
    let mut ticks = interval_at(start + config.tick_interval(), config.tick_interval());
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut auto_toggles = config
        .toggle_period()
        .map(|period| interval_at(start + period, period));
    let deadline = config.run_for().map(|run_for| start + run_for);
    let mut input_open = true;
    tokio::pin!(shutdown);

    render(demo, out)?;
    loop {
        tokio::select! {
            _ = ticks.tick() => {
                demo.tick()?;
                render(demo, out)?;
            }
            Some(_) = next_auto_toggle(&mut auto_toggles) => {
                toggle(demo, out, "timer")?;
            }
            request = toggles.recv(), if input_open => match request {
                Some(()) => toggle(demo, out, "input")?,
                None => {
                    input_open = false;
                    if auto_toggles.is_none() && deadline.is_none() {
                        debug!("toggle input closed, stopping");
                        break;
                    }
                }
            },
            () = wait_until(deadline) => {
                debug!("run time elapsed, stopping");
                break;
            }
            () = &mut shutdown => {
                debug!("shutdown requested, stopping");
                break;
            }
        }
    }

    writeln!(out)?;
    Ok(())
}

fn toggle<W: Write>(demo: &mut ThrottleDemo, out: &mut W, source: &str) -> anyhow::Result<()> {
    demo.toggle();
    info!(throttling = demo.is_throttling(), source, "throttling toggled");
    render(demo, out)
}

fn render<W: Write>(demo: &ThrottleDemo, out: &mut W) -> anyhow::Result<()> {
    write!(out, "\r{}  [{}]", demo.render(), demo.button_label())?;
    out.flush()?;
    Ok(())
}

async fn next_auto_toggle(toggles: &mut Option<Interval>) -> Option<Instant> {
    match toggles {
        Some(toggles) => Some(toggles.tick().await),
        None => pending().await,
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => pending().await,
    }
}
