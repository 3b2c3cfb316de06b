//! RFID scan simulator widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lets an administrator exercise the reader endpoints without hardware:
//! pick a machine, "scan" a tag, log the user out, and send periodic
//! activity heartbeats. All state transitions go through
//! `views::simulator::RfidSimulator`; this module only performs the I/O.
//!
//! DESIGN
//! ======
//! The simulator owns a `gloo` interval, which is `!Send`, so it sits in a
//! local `StoredValue`. Every transition republishes a [`SimulatorView`]
//! snapshot into a regular signal that drives rendering.

use std::time::Duration;

use leptos::prelude::*;

use views::simulator::{HeartbeatRequest, RfidSimulator};
use wire::{LogoutOutcome, ScanVerdict};

use crate::net::api;
use crate::state::simulator::{MachineOption, SimulatorView, TesterLoad};
use crate::util::task::spawn;
use crate::util::timer::IntervalTimer;

type Simulator = RfidSimulator<IntervalTimer>;

#[derive(Clone, Copy)]
struct SimHandle {
    sim: StoredValue<Simulator, LocalStorage>,
    view: RwSignal<SimulatorView>,
}

impl SimHandle {
    fn new(heartbeat: Duration) -> Self {
        Self {
            sim: StoredValue::new_local(Simulator::new().with_heartbeat_interval(heartbeat)),
            view: RwSignal::new(SimulatorView::default()),
        }
    }

    /// Run one transition and publish the resulting view.
    fn update<R>(self, transition: impl FnOnce(&mut Simulator) -> R) -> Option<R> {
        let out = self.sim.try_update_value(transition);
        if let Some(next) = self.sim.try_with_value(SimulatorView::of) {
            self.view.set(next);
        }
        out
    }
}

fn send_heartbeat(handle: SimHandle, request: HeartbeatRequest) {
    spawn(async move {
        if let Err(err) = api::send_heartbeat(&request.machine_id).await {
            log::error!("Error sending heartbeat for machine {}: {err}", request.machine_id);
            handle.update(|s| s.heartbeat_failed(&err));
        }
    });
}

fn heartbeat_tick(handle: SimHandle) {
    let Some(Some(request)) = handle.sim.try_with_value(Simulator::heartbeat) else {
        return;
    };
    send_heartbeat(handle, request);
}

fn scan(handle: SimHandle, tag: String) {
    let Some(Ok(request)) = handle.update(|s| s.begin_scan(&tag)) else {
        return;
    };
    spawn(async move {
        match api::get_text(&request.endpoint()).await {
            Ok(body) => {
                let verdict = ScanVerdict::from_body(&body);
                if handle.update(|s| s.finish_scan(&request, verdict)) == Some(false) {
                    log::debug!("scan verdict for machine {} ignored after machine change", request.machine_id);
                }
            }
            Err(err) => {
                log::error!("Error scanning RFID: {err}");
                handle.update(|s| s.scan_failed(&err));
            }
        }
    });
}

fn logout(handle: SimHandle) {
    let Some(Ok(request)) = handle.update(Simulator::begin_logout) else {
        return;
    };
    spawn(async move {
        match api::get_text(&request.endpoint()).await {
            Ok(body) => {
                let outcome = LogoutOutcome::from_body(&body);
                if handle.update(|s| s.finish_logout(&request, outcome)) == Some(false) {
                    log::debug!("logout response for machine {} ignored after state change", request.machine_id);
                }
            }
            Err(err) => {
                log::error!("Error logging out: {err}");
                handle.update(|s| s.logout_failed(&err));
            }
        }
    });
}

fn start_activity(handle: SimHandle) {
    let started = handle.update(|s| {
        s.start_activity(|every| IntervalTimer::start(every, move || heartbeat_tick(handle)))
    });
    if let Some(Ok(first)) = started {
        send_heartbeat(handle, first);
    }
}

/// Simulator widget. Loads the machine list once on mount.
#[component]
pub fn RfidTester(heartbeat: Duration) -> impl IntoView {
    let handle = SimHandle::new(heartbeat);
    let load = RwSignal::new(TesterLoad::Loading);

    spawn(async move {
        match api::fetch_machines().await {
            Ok(machines) => load.set(TesterLoad::Ready(machines.iter().map(MachineOption::from).collect())),
            Err(err) => {
                log::error!("Error loading machines: {err}");
                load.set(TesterLoad::Failed);
            }
        }
    });

    move || match load.get() {
        TesterLoad::Loading => view! { <p class="text-muted">"Loading machines..."</p> }.into_any(),
        TesterLoad::Failed => view! {
            <div class="alert alert-danger">
                <i class="fas fa-exclamation-triangle me-2"></i>
                "Error loading machines. Please refresh the page or check server connectivity."
            </div>
        }
        .into_any(),
        TesterLoad::Ready(options) => view! { <TesterControls handle=handle options=options/> }.into_any(),
    }
}

#[component]
fn TesterControls(handle: SimHandle, options: Vec<MachineOption>) -> impl IntoView {
    let tag_input = RwSignal::new(String::new());
    let view_state = handle.view;

    let on_machine = move |ev| {
        let machine_id = event_target_value(&ev);
        handle.update(|s| s.select_machine(&machine_id));
    };

    view! {
        <select id="machine-select" class="form-select mb-3" on:change=on_machine>
            <option value="">"Select a machine..."</option>
            {options
                .into_iter()
                .map(|o| view! { <option value=o.value>{o.label}</option> })
                .collect_view()}
        </select>

        <div class="input-group mb-3">
            <span class="input-group-text"><i class="fas fa-id-card"></i></span>
            <input
                type="text"
                id="rfid-input"
                class="form-control"
                placeholder="Enter RFID tag ID"
                prop:value=move || tag_input.get()
                on:input=move |ev| tag_input.set(event_target_value(&ev))
            />
            <button id="scan-rfid" class="btn btn-primary" on:click=move |_| scan(handle, tag_input.get_untracked())>
                "Scan Tag"
            </button>
        </div>

        <div class="card mb-3">
            <div class="card-header">
                <h5 class="mb-0">"Actions"</h5>
            </div>
            <div class="card-body">
                <div class="mb-3">
                    <button
                        id="logout-btn"
                        class="btn btn-warning me-2"
                        disabled=move || view_state.with(|v| !v.buttons.logout)
                        on:click=move |_| logout(handle)
                    >
                        <i class="fas fa-sign-out-alt me-1"></i>
                        " Logout User"
                    </button>
                    <button
                        id="simulate-activity-btn"
                        class="btn btn-success me-2"
                        disabled=move || view_state.with(|v| !v.buttons.start_activity)
                        on:click=move |_| start_activity(handle)
                    >
                        <i class="fas fa-cog me-1"></i>
                        " Simulate Activity"
                    </button>
                    <button
                        id="stop-activity-btn"
                        class="btn btn-danger"
                        disabled=move || view_state.with(|v| !v.buttons.stop_activity)
                        on:click=move |_| {
                            handle.update(Simulator::stop_activity);
                        }
                    >
                        <i class="fas fa-stop me-1"></i>
                        " Stop Activity"
                    </button>
                </div>
            </div>
        </div>

        <div class="card">
            <div class="card-header">
                <h5 class="mb-0">"Status"</h5>
            </div>
            <div class="card-body">
                <p><strong>"Current Machine:"</strong> " " <span id="current-machine">{move || view_state.with(|v| v.machine.clone())}</span></p>
                <p><strong>"Current RFID:"</strong> " " <span id="current-rfid">{move || view_state.with(|v| v.rfid.clone())}</span></p>
                <p><strong>"Last Action:"</strong> " " <span id="last-action">{move || view_state.with(|v| v.last_action.clone())}</span></p>
                <p>
                    <strong>"Status:"</strong>
                    " "
                    <span id="status-message" class=move || view_state.with(|v| v.status_class)>
                        {move || view_state.with(|v| v.status_message.clone())}
                    </span>
                </p>
            </div>
        </div>
    }
}
