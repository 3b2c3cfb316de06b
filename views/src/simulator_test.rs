use std::cell::Cell;
use std::rc::Rc;

use super::*;

/// Counts live timers through a shared cell.
#[derive(Debug)]
struct FakeTimer {
    live: Rc<Cell<usize>>,
}

impl TimerHandle for FakeTimer {
    fn cancel(self) {
        self.live.set(self.live.get() - 1);
    }
}

fn scheduler(live: &Rc<Cell<usize>>, scheduled: &Rc<Cell<Vec<Duration>>>) -> impl FnOnce(Duration) -> FakeTimer {
    let live = live.clone();
    let scheduled = scheduled.clone();
    move |every| {
        let mut seen = scheduled.take();
        seen.push(every);
        scheduled.set(seen);
        live.set(live.get() + 1);
        FakeTimer { live }
    }
}

fn logged_in(machine: &str, tag: &str) -> RfidSimulator<FakeTimer> {
    let mut sim = RfidSimulator::new();
    sim.select_machine(machine);
    let req = sim.begin_scan(tag).expect("scan request");
    assert!(sim.finish_scan(&req, ScanVerdict::Allow));
    sim
}

// =============================================================
// Machine selection
// =============================================================

#[test]
fn starts_without_machine_and_ready_status() {
    let sim: RfidSimulator<FakeTimer> = RfidSimulator::new();
    assert_eq!(sim.phase(), SimPhase::NoMachine);
    assert_eq!(sim.status().message, "Ready");
    assert_eq!(sim.last_action(), "None");
    assert_eq!(sim.buttons(), ButtonStates::default());
}

#[test]
fn selecting_machine_clears_recorded_tag() {
    let mut sim = logged_in("07", "ABC123");
    assert_eq!(sim.phase(), SimPhase::UserLoggedIn);

    sim.select_machine("08");
    assert_eq!(sim.phase(), SimPhase::MachineSelected);
    assert_eq!(sim.rfid(), None);

    sim.select_machine("  ");
    assert_eq!(sim.phase(), SimPhase::NoMachine);
}

#[test]
fn reselecting_same_machine_keeps_tag() {
    let mut sim = logged_in("07", "ABC123");
    sim.select_machine("07");
    assert_eq!(sim.rfid(), Some("ABC123"));
}

// =============================================================
// Scanning
// =============================================================

#[test]
fn allow_then_deny_keeps_first_tag_and_buttons() {
    let mut sim = logged_in("07", "ABC123");
    assert_eq!(sim.rfid(), Some("ABC123"));
    let after_allow = sim.buttons();
    assert!(after_allow.logout);
    assert!(after_allow.start_activity);

    let req = sim.begin_scan("ZZZ999").expect("scan request");
    assert!(sim.finish_scan(&req, ScanVerdict::Deny));
    assert_eq!(sim.rfid(), Some("ABC123"));
    assert_eq!(sim.buttons(), after_allow);
    assert_eq!(sim.status().tone, Tone::Danger);
}

#[test]
fn unknown_verdict_is_warning_without_state_change() {
    let mut sim: RfidSimulator<FakeTimer> = RfidSimulator::new();
    sim.select_machine("07");
    let req = sim.begin_scan("ABC123").expect("scan request");
    assert!(sim.finish_scan(&req, ScanVerdict::Unknown("MAYBE".to_owned())));
    assert_eq!(sim.phase(), SimPhase::MachineSelected);
    assert_eq!(sim.status().message, "Unknown response: MAYBE");
    assert_eq!(sim.status().tone.css_class(), "text-warning");
}

#[test]
fn scan_requires_machine_and_tag() {
    let mut sim: RfidSimulator<FakeTimer> = RfidSimulator::new();
    assert_eq!(sim.begin_scan("ABC"), Err(SimError::NoMachine));
    assert_eq!(sim.begin_scan(""), Err(SimError::MissingTag));
    sim.select_machine("07");
    assert_eq!(sim.begin_scan("   "), Err(SimError::MissingTag));
    assert_eq!(sim.status().tone, Tone::Warning);
}

#[test]
fn scan_request_trims_and_targets_endpoint() {
    let mut sim: RfidSimulator<FakeTimer> = RfidSimulator::new();
    sim.select_machine("07");
    let req = sim.begin_scan(" ABC123 ").expect("scan request");
    assert_eq!(req.endpoint(), Endpoint::check_user("ABC123", "07"));
}

#[test]
fn verdict_for_previous_machine_is_ignored() {
    let mut sim: RfidSimulator<FakeTimer> = RfidSimulator::new();
    sim.select_machine("07");
    let req = sim.begin_scan("ABC123").expect("scan request");
    sim.select_machine("08");
    assert!(!sim.finish_scan(&req, ScanVerdict::Allow));
    assert_eq!(sim.rfid(), None);
}

#[test]
fn scan_failure_reports_error_without_state_change() {
    let mut sim: RfidSimulator<FakeTimer> = RfidSimulator::new();
    sim.select_machine("07");
    sim.scan_failed("Server returned status 500");
    assert_eq!(sim.phase(), SimPhase::MachineSelected);
    assert_eq!(sim.status().message, "Error: Server returned status 500");
    assert_eq!(sim.last_action(), "RFID scan - Error");
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_requires_recorded_tag() {
    let mut sim: RfidSimulator<FakeTimer> = RfidSimulator::new();
    sim.select_machine("07");
    assert_eq!(sim.begin_logout(), Err(SimError::NoUser));
}

#[test]
fn logout_clears_tag_and_stops_activity_together() {
    let live = Rc::new(Cell::new(0));
    let scheduled = Rc::new(Cell::new(Vec::new()));
    let mut sim = logged_in("07", "ABC123");
    sim.start_activity(scheduler(&live, &scheduled)).expect("start");
    assert_eq!(live.get(), 1);

    let req = sim.begin_logout().expect("logout request");
    assert_eq!(req.endpoint(), Endpoint::logout("ABC123", "07"));
    assert!(sim.finish_logout(&req, LogoutOutcome::LoggedOut));

    assert_eq!(sim.rfid(), None);
    assert!(!sim.is_activity_running());
    assert_eq!(live.get(), 0);
    assert_eq!(sim.heartbeat(), None);
    assert_eq!(sim.status().message, "User logged out successfully");
}

#[test]
fn unexpected_logout_text_keeps_user() {
    let mut sim = logged_in("07", "ABC123");
    let req = sim.begin_logout().expect("logout request");
    assert!(sim.finish_logout(&req, LogoutOutcome::Unexpected("huh".to_owned())));
    assert_eq!(sim.rfid(), Some("ABC123"));
    assert_eq!(sim.status().tone, Tone::Warning);
}

// =============================================================
// Activity simulation
// =============================================================

#[test]
fn start_requires_machine() {
    let live = Rc::new(Cell::new(0));
    let scheduled = Rc::new(Cell::new(Vec::new()));
    let mut sim: RfidSimulator<FakeTimer> = RfidSimulator::new();
    assert_eq!(sim.start_activity(scheduler(&live, &scheduled)), Err(SimError::NoMachine));
    assert_eq!(live.get(), 0);
}

#[test]
fn starting_twice_leaves_exactly_one_timer() {
    let live = Rc::new(Cell::new(0));
    let scheduled = Rc::new(Cell::new(Vec::new()));
    let mut sim = logged_in("07", "ABC123");

    let first = sim.start_activity(scheduler(&live, &scheduled)).expect("start");
    let second = sim.start_activity(scheduler(&live, &scheduled)).expect("restart");

    assert_eq!(live.get(), 1);
    assert_eq!(first.machine_id, "07");
    assert_eq!(second.endpoint(), Endpoint::heartbeat("07"));
    assert_eq!(scheduled.take(), vec![HEARTBEAT_INTERVAL, HEARTBEAT_INTERVAL]);
    assert_eq!(HEARTBEAT_INTERVAL, Duration::from_secs(15));
}

#[test]
fn custom_heartbeat_interval_reaches_scheduler() {
    let live = Rc::new(Cell::new(0));
    let scheduled = Rc::new(Cell::new(Vec::new()));
    let mut sim = logged_in("07", "ABC123").with_heartbeat_interval(Duration::from_secs(2));
    sim.start_activity(scheduler(&live, &scheduled)).expect("start");
    assert_eq!(scheduled.take(), vec![Duration::from_secs(2)]);
}

#[test]
fn stop_is_noop_when_idle_and_cancels_when_running() {
    let live = Rc::new(Cell::new(0));
    let scheduled = Rc::new(Cell::new(Vec::new()));
    let mut sim = logged_in("07", "ABC123");
    assert!(!sim.stop_activity());
    assert_eq!(sim.status().message, "Access granted");

    sim.start_activity(scheduler(&live, &scheduled)).expect("start");
    assert!(sim.buttons().stop_activity);
    assert!(!sim.buttons().start_activity);
    assert!(sim.stop_activity());
    assert_eq!(live.get(), 0);
    assert!(!sim.buttons().stop_activity);
}

#[test]
fn heartbeat_failure_keeps_timer_running() {
    let live = Rc::new(Cell::new(0));
    let scheduled = Rc::new(Cell::new(Vec::new()));
    let mut sim = logged_in("07", "ABC123");
    sim.start_activity(scheduler(&live, &scheduled)).expect("start");

    sim.heartbeat_failed("network down");
    assert!(sim.is_activity_running());
    assert_eq!(sim.heartbeat().map(|h| h.machine_id), Some("07".to_owned()));
    assert_eq!(sim.status().message, "Error sending activity heartbeat: network down");
}

#[test]
fn changing_machine_stops_activity() {
    let live = Rc::new(Cell::new(0));
    let scheduled = Rc::new(Cell::new(Vec::new()));
    let mut sim = logged_in("07", "ABC123");
    sim.start_activity(scheduler(&live, &scheduled)).expect("start");
    sim.select_machine("08");
    assert_eq!(live.get(), 0);
    assert!(!sim.is_activity_running());
}

// =============================================================
// Button enablement
// =============================================================

#[test]
fn machine_alone_does_not_enable_logout_or_activity() {
    let machine_only = button_states(true, false, false);
    assert!(!machine_only.logout);
    assert!(!machine_only.start_activity);

    let both = button_states(true, true, false);
    assert!(both.logout);
    assert!(both.start_activity);
    assert!(!both.stop_activity);

    let running = button_states(true, true, true);
    assert!(running.stop_activity);
    assert!(!running.start_activity);
}
