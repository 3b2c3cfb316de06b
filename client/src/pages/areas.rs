//! Area selection flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The area dropdown lives in the navbar of every page. A selection can come
//! from three places: the stored preference at load, a click on a dropdown
//! item, or an `areaFilterChanged` event dispatched by another page script.
//! All three update [`AreaState`], relabel the navbar, and re-filter the page.
//!
//! DESIGN
//! ======
//! Only clicks are re-announced on `document`; re-dispatching an external
//! event would loop back into our own listener. Every event re-runs the
//! filter, since the sender may have added rows for the same area.

#[cfg(test)]
#[path = "areas_test.rs"]
mod areas_test;

use leptos::prelude::*;

use views::area_filter::AreaFilter;
use views::prefs::{AreaSelection, load_area_selection, save_area_selection};

use crate::state::area::AreaState;
use crate::util::storage::LocalStore;

/// Where an area selection came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionOrigin {
    /// Read back from `localStorage` during boot.
    Restored,
    /// Clicked in the dropdown.
    User,
    /// Received through an `areaFilterChanged` event.
    External,
}

/// What [`select_area`] did with a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionEffects {
    pub persisted: bool,
    pub relabelled: bool,
    pub refiltered: bool,
    pub announced: bool,
}

impl SelectionOrigin {
    /// Effects for a selection whose name is known. A restored selection is
    /// already stored, and only clicks are re-announced.
    pub fn effects(self) -> SelectionEffects {
        SelectionEffects {
            persisted: !matches!(self, Self::Restored),
            relabelled: true,
            refiltered: true,
            announced: matches!(self, Self::User),
        }
    }
}

/// Apply `selection` from `origin` to the page.
///
/// A selection without a name (an id-only external event) takes its name
/// from the loaded areas. If none is found the page is filtered but the
/// label and stored preference are left alone.
pub fn select_area(
    area: RwSignal<AreaState>,
    selection: AreaSelection,
    origin: SelectionOrigin,
) -> SelectionEffects {
    let resolved = area.try_with_untracked(|a| a.resolve(selection.clone())).flatten();
    let Some(selection) = resolved else {
        log::warn!("area {} has no known name; filtering only", selection.area_id);
        apply_filter(&AreaFilter::from_id(&selection.area_id));
        return SelectionEffects {
            persisted: false,
            relabelled: false,
            refiltered: true,
            announced: false,
        };
    };

    let effects = origin.effects();
    if effects.persisted {
        save_area_selection(&LocalStore, &selection);
    }
    area.try_update(|a| a.select(selection.clone()));
    reapply_filter(area);
    if effects.announced {
        announce(&selection);
    }
    effects
}

fn announce(selection: &AreaSelection) {
    #[cfg(feature = "csr")]
    {
        crate::util::area_filter::dispatch_area_changed(selection);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = selection;
    }
}

fn apply_filter(filter: &AreaFilter) {
    #[cfg(feature = "csr")]
    {
        let hidden = crate::util::area_filter::apply_area_filter(filter);
        log::debug!("area filter {:?} hid {hidden} elements", filter.id());
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = filter;
    }
}

/// Re-run the visibility pass for the current selection. Called after any
/// DOM rewrite that may have added filterable elements.
pub fn reapply_filter(area: RwSignal<AreaState>) {
    if let Some(filter) = area.try_with_untracked(AreaState::filter) {
        apply_filter(&filter);
    }
}

/// Restore the stored selection, if any, before anything is rendered.
pub fn restore(area: RwSignal<AreaState>) {
    if let Some(selection) = load_area_selection(&LocalStore) {
        log::info!("restoring area selection {}", selection.area_name);
        select_area(area, selection, SelectionOrigin::Restored);
    }
}

/// Follow `areaFilterChanged` events dispatched by other page scripts.
pub fn listen(area: RwSignal<AreaState>) {
    #[cfg(feature = "csr")]
    {
        crate::util::area_filter::listen_area_changed(move |selection| {
            select_area(area, selection, SelectionOrigin::External);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = area;
    }
}

/// Fetch the accessible areas and reveal the selector when there are any.
/// On failure the selector stays hidden and the page stays unfiltered.
pub fn load(area: RwSignal<AreaState>) {
    crate::util::task::spawn(async move {
        match crate::net::api::fetch_areas().await {
            Ok(areas) => {
                log::info!("loaded {} areas", areas.len());
                area.update(|a| a.areas = areas);
                show_selector(area.with_untracked(AreaState::selector_visible));
            }
            Err(err) => log::error!("Error loading areas: {err}"),
        }
    });
}

fn show_selector(visible: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(container) = crate::util::dom::by_id("area-selector-container") {
            crate::util::dom::set_display(&container, visible);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = visible;
    }
}
