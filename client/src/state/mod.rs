//! Shared reactive state for the mounted components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page mounts several independent Leptos roots into server-rendered
//! containers. They share state through [`AppState`], a bundle of signals
//! created once at boot and passed to every root.

pub mod area;
pub mod dashboard;
pub mod simulator;

use leptos::prelude::*;

use area::AreaState;
use dashboard::DashboardState;

/// Signals shared across every mounted root on the page.
#[derive(Clone, Copy)]
pub struct AppState {
    pub area: RwSignal<AreaState>,
    pub dashboard: RwSignal<DashboardState>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            area: RwSignal::new(AreaState::default()),
            dashboard: RwSignal::new(DashboardState::default()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
