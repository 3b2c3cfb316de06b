//! Nested area/zone activity summary on the dashboard.

use leptos::prelude::*;

use views::summary::{AreaSummary, activity_text};

use crate::state::dashboard::DashboardState;

/// Rebuilt from scratch whenever the hierarchy or machine list changes.
#[component]
pub fn AreaSummaryPanel(dashboard: RwSignal<DashboardState>) -> impl IntoView {
    let summaries = Memo::new(move |_| dashboard.with(DashboardState::summaries));

    view! {
        <Show
            when=move || summaries.with(|s| !s.is_empty())
            fallback=|| view! { <p class="text-muted mb-0">"No area data available"</p> }
        >
            {move || summaries.get().into_iter().map(area_block).collect_view()}
        </Show>
    }
}

fn area_block(area: AreaSummary) -> impl IntoView {
    let zones = area
        .zones
        .into_iter()
        .map(|zone| {
            view! {
                <li class="zone-summary d-flex justify-content-between" data-zone-id=zone.id.to_string()>
                    <span>{zone.name}</span>
                    <span class="text-muted small">{activity_text(zone.active_machines, zone.sessions)}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="area-summary mb-3" data-area-id=area.id.to_string()>
            <h6 class="d-flex justify-content-between mb-1">
                <span>{area.name}</span>
                <span class="badge bg-primary">{activity_text(area.active_machines, area.sessions)}</span>
            </h6>
            <ul class="list-unstyled ms-3 mb-0">{zones}</ul>
        </div>
    }
}
