use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("tracker-cli").chain(args.iter().copied())).expect("valid args")
}

// =============================================================
// Argument parsing
// =============================================================

#[test]
fn areas_command_keeps_base_url() {
    let cli = parse(&["--base-url", "http://127.0.0.1:5000", "areas"]);
    assert_eq!(cli.base_url, "http://127.0.0.1:5000");
    assert_eq!(cli.command, Command::Areas);
}

#[test]
fn simulate_defaults_to_fifteen_second_heartbeats() {
    let cli = parse(&["--base-url", "http://t", "simulate", "07", "ABC123"]);
    assert_eq!(
        cli.command,
        Command::Simulate {
            machine_id: "07".to_owned(),
            rfid: "ABC123".to_owned(),
            beats: None,
            every: 15,
        }
    );
}

#[test]
fn simulate_accepts_beat_limit() {
    let cli = parse(&["--base-url", "http://t", "simulate", "07", "ABC123", "--beats", "3", "--every", "1"]);
    let Command::Simulate { beats, every, .. } = cli.command else {
        panic!("expected simulate");
    };
    assert_eq!(beats, Some(3));
    assert_eq!(every, 1);
}

#[test]
fn scan_requires_machine_and_tag() {
    assert!(Cli::try_parse_from(["tracker-cli", "scan", "07"]).is_err());
}

// =============================================================
// Errors
// =============================================================

#[test]
fn simulator_errors_keep_their_operator_message() {
    let err = CliError::from(SimError::MissingTag);
    assert_eq!(err.to_string(), "Please select a machine and enter an RFID tag ID");
}

#[test]
fn status_error_names_the_endpoint() {
    let err = CliError::Status {
        status: 403,
        path: "/api/areas",
    };
    assert_eq!(err.to_string(), "server returned status 403 for /api/areas");
}
