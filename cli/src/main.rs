//! `tracker-cli`: probe the machine tracker API and drive the RFID simulator
//! without reader hardware.

mod api;
mod report;
mod simulate;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use views::simulator::{HEARTBEAT_INTERVAL, SimError};
use views::summary::{StatusCounts, summarize_areas};
use wire::{Endpoint, LogoutOutcome, ScanVerdict};

use crate::api::ApiClient;
use crate::simulate::{SimulateArgs, Simulator};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("server returned status {status} for {path}")]
    Status { status: u16, path: &'static str },
    #[error("unexpected response: {0}")]
    Wire(#[from] wire::WireError),
    #[error("{0}")]
    Simulator(#[from] SimError),
    #[error("access denied for tag {0}")]
    Denied(String),
    #[error("unrecognised reader response: {0}")]
    UnknownVerdict(String),
    #[error("signal handler failed: {0}")]
    Signal(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "tracker-cli", about = "Machine tracker API probe and RFID simulator")]
struct Cli {
    #[arg(long, env = "TRACKER_BASE_URL", default_value = "http://127.0.0.1:5000")]
    base_url: String,

    /// Value of the `session` cookie from a logged-in browser.
    #[arg(long, env = "TRACKER_SESSION_COOKIE")]
    session_cookie: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// List the areas the session may access.
    Areas,
    /// Print the area/zone hierarchy.
    Hierarchy,
    /// Print every machine plus the area summary.
    Status,
    /// Scan a tag at a machine once.
    Scan { machine_id: String, rfid: String },
    /// Log a tag out of a machine.
    Logout { machine_id: String, rfid: String },
    /// Send one activity heartbeat.
    Heartbeat { machine_id: String },
    /// Scan in, send heartbeats until Ctrl-C, then log out.
    Simulate {
        machine_id: String,
        rfid: String,
        /// Stop after this many heartbeats.
        #[arg(long)]
        beats: Option<usize>,
        /// Seconds between heartbeats.
        #[arg(long, default_value_t = HEARTBEAT_INTERVAL.as_secs())]
        every: u64,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let api = ApiClient::new(&cli.base_url, cli.session_cookie.as_deref())?;
    tracing::debug!(base_url = %cli.base_url, "tracker-cli starting");

    match cli.command {
        Command::Areas => run_areas(&api).await,
        Command::Hierarchy => run_hierarchy(&api).await,
        Command::Status => run_status(&api).await,
        Command::Scan { machine_id, rfid } => run_scan(&api, &machine_id, &rfid).await,
        Command::Logout { machine_id, rfid } => run_logout(&api, &machine_id, &rfid).await,
        Command::Heartbeat { machine_id } => run_heartbeat(&api, &machine_id).await,
        Command::Simulate {
            machine_id,
            rfid,
            beats,
            every,
        } => {
            let args = SimulateArgs {
                machine_id,
                rfid,
                heartbeat: Duration::from_secs(every.max(1)),
                beats,
            };
            simulate::run(&api, args).await
        }
    }
}

async fn run_areas(api: &ApiClient) -> Result<(), CliError> {
    let areas = api.areas().await?;
    if areas.is_empty() {
        println!("no accessible areas");
    }
    for area in &areas {
        println!("{}", report::area_line(area));
    }
    Ok(())
}

async fn run_hierarchy(api: &ApiClient) -> Result<(), CliError> {
    for area in api.hierarchy().await? {
        println!("{:>4}  {}", area.id, area.name);
        for zone in &area.zones {
            println!("      {:>4}  {}", zone.id, zone.name);
        }
    }
    Ok(())
}

async fn run_status(api: &ApiClient) -> Result<(), CliError> {
    let (machines, hierarchy) = tokio::try_join!(api.machines(), api.hierarchy())?;
    for machine in &machines {
        println!("{}", report::machine_line(machine));
    }
    println!();
    println!("{}", report::counts_line(&StatusCounts::tally(&machines)));
    for line in report::summary_lines(&summarize_areas(&hierarchy, &machines)) {
        println!("{line}");
    }
    Ok(())
}

async fn run_scan(api: &ApiClient, machine_id: &str, rfid: &str) -> Result<(), CliError> {
    let mut sim = Simulator::new();
    sim.select_machine(machine_id);
    match simulate::scan(api, &mut sim, rfid).await? {
        ScanVerdict::Allow => println!("ALLOW"),
        ScanVerdict::Deny => println!("DENY"),
        ScanVerdict::Unknown(text) => return Err(CliError::UnknownVerdict(text)),
    }
    Ok(())
}

async fn run_logout(api: &ApiClient, machine_id: &str, rfid: &str) -> Result<(), CliError> {
    let body = api.get_text(&Endpoint::logout(rfid, machine_id)).await?;
    match LogoutOutcome::from_body(&body) {
        LogoutOutcome::LoggedOut => {
            println!("LOGOUT");
            Ok(())
        }
        LogoutOutcome::Unexpected(text) => Err(CliError::UnknownVerdict(text)),
    }
}

async fn run_heartbeat(api: &ApiClient, machine_id: &str) -> Result<(), CliError> {
    api.get_text(&Endpoint::heartbeat(machine_id)).await?;
    tracing::info!(machine = %machine_id, "heartbeat sent");
    Ok(())
}
