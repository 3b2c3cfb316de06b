//! Terminal host for the RFID simulator state machine.
//!
//! DESIGN
//! ======
//! The simulator's heartbeat timer is a spawned `tokio` task that only
//! produces ticks; the main task owns the simulator and performs every
//! request, so state transitions stay single-threaded as in the browser.
//! Cancelling the timer aborts the task.

#[cfg(test)]
#[path = "simulate_test.rs"]
mod simulate_test;

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use views::simulator::{HeartbeatRequest, RfidSimulator, TimerHandle};
use wire::{LogoutOutcome, ScanVerdict};

use crate::CliError;
use crate::api::ApiClient;

/// Heartbeat ticker backed by a spawned task.
#[derive(Debug)]
pub struct TaskTimer {
    task: JoinHandle<()>,
}

impl TaskTimer {
    /// Send a tick on `ticks` every `every`, starting one period from now.
    pub fn spawn(every: Duration, ticks: mpsc::UnboundedSender<()>) -> Self {
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + every, every);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if ticks.send(()).is_err() {
                    break;
                }
            }
        });
        Self { task }
    }
}

impl TimerHandle for TaskTimer {
    fn cancel(self) {
        self.task.abort();
    }
}

pub type Simulator = RfidSimulator<TaskTimer>;

/// Options for one `simulate` run.
#[derive(Debug, Clone)]
pub struct SimulateArgs {
    pub machine_id: String,
    pub rfid: String,
    pub heartbeat: Duration,
    /// Stop after this many heartbeats; `None` runs until Ctrl-C.
    pub beats: Option<usize>,
}

fn report(sim: &Simulator) {
    let status = sim.status();
    tracing::info!(tone = status.tone.css_class(), "{}: {}", sim.last_action(), status.message);
}

/// Scan `rfid` at `machine_id` through the simulator; returns the verdict
/// the server gave.
pub async fn scan(api: &ApiClient, sim: &mut Simulator, rfid: &str) -> Result<ScanVerdict, CliError> {
    let request = sim.begin_scan(rfid)?;
    let verdict = match api.get_text(&request.endpoint()).await {
        Ok(body) => ScanVerdict::from_body(&body),
        Err(err) => {
            sim.scan_failed(&err.to_string());
            report(sim);
            return Err(err);
        }
    };
    sim.finish_scan(&request, verdict.clone());
    report(sim);
    Ok(verdict)
}

/// Log the recorded tag out through the simulator.
pub async fn logout(api: &ApiClient, sim: &mut Simulator) -> Result<LogoutOutcome, CliError> {
    let request = sim.begin_logout()?;
    let outcome = match api.get_text(&request.endpoint()).await {
        Ok(body) => LogoutOutcome::from_body(&body),
        Err(err) => {
            sim.logout_failed(&err.to_string());
            report(sim);
            return Err(err);
        }
    };
    sim.finish_logout(&request, outcome.clone());
    report(sim);
    Ok(outcome)
}

async fn beat(api: &ApiClient, sim: &mut Simulator, request: HeartbeatRequest) {
    match api.get_text(&request.endpoint()).await {
        Ok(_) => tracing::info!(machine = %request.machine_id, "heartbeat sent"),
        Err(err) => {
            tracing::warn!(machine = %request.machine_id, error = %err, "heartbeat failed");
            sim.heartbeat_failed(&err.to_string());
        }
    }
}

/// Whether the run has sent its requested number of heartbeats.
pub fn beats_done(limit: Option<usize>, sent: usize) -> bool {
    limit.is_some_and(|n| sent >= n)
}

/// Scan in, heartbeat until Ctrl-C or the beat limit, then log out.
pub async fn run(api: &ApiClient, args: SimulateArgs) -> Result<(), CliError> {
    let mut sim = Simulator::new().with_heartbeat_interval(args.heartbeat);
    sim.select_machine(&args.machine_id);

    match scan(api, &mut sim, &args.rfid).await? {
        ScanVerdict::Allow => {}
        ScanVerdict::Deny => return Err(CliError::Denied(args.rfid)),
        ScanVerdict::Unknown(text) => return Err(CliError::UnknownVerdict(text)),
    }

    let (tick_tx, mut ticks) = mpsc::unbounded_channel();
    let first = sim.start_activity(|every| TaskTimer::spawn(every, tick_tx))?;
    tracing::info!(machine = %args.machine_id, every = ?args.heartbeat, "activity simulation started");
    beat(api, &mut sim, first).await;
    let mut sent = 1;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    while !beats_done(args.beats, sent) {
        tokio::select! {
            tick = ticks.recv() => {
                if tick.is_none() {
                    break;
                }
                if let Some(request) = sim.heartbeat() {
                    beat(api, &mut sim, request).await;
                    sent += 1;
                }
            }
            signal = &mut ctrl_c => {
                signal?;
                tracing::info!("interrupted");
                break;
            }
        }
    }

    sim.stop_activity();
    tracing::info!(sent, "activity simulation stopped");
    match logout(api, &mut sim).await? {
        LogoutOutcome::LoggedOut => Ok(()),
        LogoutOutcome::Unexpected(text) => Err(CliError::UnknownVerdict(text)),
    }
}
