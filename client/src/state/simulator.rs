//! Render state for the RFID tester widget.
//!
//! The simulator itself owns a `!Send` timer handle, so it lives in local
//! storage; the widget renders from a plain snapshot published after every
//! transition.

#[cfg(test)]
#[path = "simulator_test.rs"]
mod simulator_test;

use views::simulator::{ButtonStates, RfidSimulator, TimerHandle, Tone};
use wire::MachineSnapshot;

/// One `<option>` of the machine picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MachineOption {
    pub value: String,
    pub label: String,
}

impl From<&MachineSnapshot> for MachineOption {
    fn from(machine: &MachineSnapshot) -> Self {
        Self {
            value: machine.machine_id.clone(),
            label: machine.picker_label(),
        }
    }
}

/// Loading phase of the machine picker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TesterLoad {
    #[default]
    Loading,
    Ready(Vec<MachineOption>),
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulatorView {
    pub machine: String,
    pub rfid: String,
    pub last_action: String,
    pub status_message: String,
    pub status_class: &'static str,
    pub buttons: ButtonStates,
}

impl Default for SimulatorView {
    fn default() -> Self {
        Self {
            machine: "None".to_owned(),
            rfid: "None".to_owned(),
            last_action: "None".to_owned(),
            status_message: "Ready".to_owned(),
            status_class: Tone::Info.css_class(),
            buttons: ButtonStates::default(),
        }
    }
}

impl SimulatorView {
    pub fn of<H: TimerHandle>(sim: &RfidSimulator<H>) -> Self {
        Self {
            machine: sim.machine().unwrap_or("None").to_owned(),
            rfid: sim.rfid().unwrap_or("None").to_owned(),
            last_action: sim.last_action().to_owned(),
            status_message: sim.status().message.clone(),
            status_class: sim.status().tone.css_class(),
            buttons: sim.buttons(),
        }
    }
}
