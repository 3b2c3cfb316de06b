//! Area dropdown entries and the current-area label.

#[cfg(test)]
#[path = "area_menu_test.rs"]
mod area_menu_test;

use leptos::prelude::*;

use views::prefs::AreaSelection;

use crate::pages::areas::{SelectionOrigin, select_area};
use crate::state::area::{AreaOption, AreaState};

/// Dropdown items: "All Areas" followed by every accessible area.
#[component]
pub fn AreaMenu(area: RwSignal<AreaState>) -> impl IntoView {
    move || {
        area.with(AreaState::options)
            .into_iter()
            .map(|option| view! { <AreaMenuItem area=area option=option/> })
            .collect_view()
    }
}

#[component]
fn AreaMenuItem(area: RwSignal<AreaState>, option: AreaOption) -> impl IntoView {
    let AreaOption { id, name } = option.clone();
    let area_id = id.clone();
    let area_name = name.clone();
    let is_current = move || area.with(|a| a.filter().id() == id);
    let selection = AreaSelection::from(option);
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        select_area(area, selection.clone(), SelectionOrigin::User);
    };

    view! {
        <li>
            <a
                class="dropdown-item area-filter-option"
                class:active=is_current
                href="#"
                data-area-id=area_id
                data-area-name=area_name
                on:click=on_click
            >
                {name}
            </a>
        </li>
    }
}

/// Text of the navbar's current-area label.
#[component]
pub fn CurrentAreaName(area: RwSignal<AreaState>) -> impl IntoView {
    move || area.with(AreaState::current_name)
}
