//! Dashboard polling loop.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard page ships with one server-rendered card per machine. This
//! module keeps those cards current: it polls `/api/machines/status` and
//! `/api/areas/hierarchy` on a fixed cadence, patches the cards in place,
//! refreshes the headline counters, and lets the area summary component
//! re-render from shared state.
//!
//! TRADE-OFFS
//! ==========
//! The two fetches run independently and may overlap with the next tick.
//! Each carries a sequence number, so a slow response that lands after a
//! newer one is dropped instead of rolling the page back.

use std::time::Duration;

use leptos::prelude::*;

use views::clock::Clock;

use crate::net::api;
use crate::pages::areas::reapply_filter;
use crate::state::AppState;
use crate::state::dashboard::RefreshTargets;
use crate::util::{card_dom, clock, dom, task::spawn};

/// What the current page has to keep fresh.
pub fn targets() -> RefreshTargets {
    RefreshTargets {
        cards: !dom::query_all(".machine-card").is_empty(),
        summary: dom::by_id("area-summary").is_some(),
    }
}

/// Refresh immediately, then every `every` for the life of the page.
/// Does nothing on pages without cards or a summary.
pub fn start(state: AppState, every: Duration, targets: RefreshTargets) {
    if !targets.polls_machines() {
        return;
    }
    log::info!("dashboard refresh every {}s ({targets:?})", every.as_secs());
    spawn(async move {
        loop {
            refresh(state, targets);
            gloo_timers::future::sleep(every).await;
        }
    });
}

fn refresh(state: AppState, targets: RefreshTargets) {
    if targets.polls_machines() {
        spawn(refresh_machines(state));
    }
    if targets.polls_hierarchy() {
        spawn(refresh_hierarchy(state));
    }
}

async fn refresh_machines(state: AppState) {
    let Some(seq) = state.dashboard.try_update_untracked(|d| d.machines_seq.issue()) else {
        return;
    };
    let machines = match api::fetch_machines().await {
        Ok(machines) => machines,
        Err(err) => {
            log::error!("Error fetching machine status: {err}");
            return;
        }
    };

    let now: Clock = clock::now();
    let Some(Some(plans)) = state
        .dashboard
        .try_update(|d| d.accept_machines(seq, machines, &now, card_dom::card_exists))
    else {
        log::debug!("dropped stale machine status response #{seq}");
        return;
    };

    for plan in &plans {
        if !card_dom::apply_card_changes(&plan.machine_id, &plan.changes) {
            log::warn!("card for machine {} disappeared during refresh", plan.machine_id);
            state.dashboard.update_untracked(|d| d.forget_card(&plan.machine_id));
        }
    }
    if let Some(headline) = state.dashboard.try_with_untracked(|d| d.counts.headline()) {
        card_dom::apply_stats(headline);
    }
    reapply_filter(state.area);
}

async fn refresh_hierarchy(state: AppState) {
    let Some(seq) = state.dashboard.try_update_untracked(|d| d.hierarchy_seq.issue()) else {
        return;
    };
    match api::fetch_hierarchy().await {
        Ok(hierarchy) => {
            let accepted = state
                .dashboard
                .try_update(|d| d.accept_hierarchy(seq, hierarchy))
                .unwrap_or(false);
            if accepted {
                reapply_filter(state.area);
            } else {
                log::debug!("dropped stale hierarchy response #{seq}");
            }
        }
        Err(err) => log::error!("Error fetching area hierarchy: {err}"),
    }
}
