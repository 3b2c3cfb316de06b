//! Boot sequence: attach Leptos roots to the server-rendered page.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no client-side router. Each page template exposes a subset of
//! known containers, and a root is mounted into whichever of them exist:
//!
//! - `#area-dropdown-menu` and `#current-area-name` in the navbar
//! - `#area-summary` on the dashboard
//! - `#rfid-tester` on the simulator page
//!
//! The roots share one [`AppState`] and one reactive owner that lives for the
//! life of the page.

use leptos::prelude::*;

use crate::components::area_menu::{AreaMenu, CurrentAreaName};
use crate::components::area_summary::AreaSummaryPanel;
use crate::components::rfid_tester::RfidTester;
use crate::config::ClientConfig;
use crate::pages::{areas, dashboard};
use crate::state::AppState;
use crate::util::{admin_forms, card_dom, clock, dom};

/// Mount into `id`, appending after any server-rendered children.
fn mount_into<F, N>(id: &str, view: F)
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    if let Some(el) = dom::html_by_id(id) {
        leptos::mount::mount_to(el, view).forget();
    }
}

/// Mount into `id`, replacing its server-rendered placeholder.
fn replace_into<F, N>(id: &str, view: F)
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    if let Some(el) = dom::html_by_id(id) {
        el.set_inner_html("");
        leptos::mount::mount_to(el, view).forget();
    }
}

pub fn mount() {
    let config = ClientConfig::from_document();
    let owner = Owner::new();
    owner.with(|| {
        let state = AppState::new();

        areas::restore(state.area);
        areas::listen(state.area);
        areas::load(state.area);

        let area = state.area;
        mount_into("area-dropdown-menu", move || view! { <AreaMenu area=area/> });
        replace_into("current-area-name", move || view! { <CurrentAreaName area=area/> });

        let summary = state.dashboard;
        replace_into("area-summary", move || view! { <AreaSummaryPanel dashboard=summary/> });

        let heartbeat = config.heartbeat_interval;
        mount_into("rfid-tester", move || view! { <RfidTester heartbeat=heartbeat/> });

        card_dom::format_timestamps(&clock::now());
        dashboard::start(state, config.refresh_interval, dashboard::targets());
        admin_forms::bind_all();
    });
    // Page-lifetime owner; the roots above hold no other handle to it.
    std::mem::forget(owner);
}
