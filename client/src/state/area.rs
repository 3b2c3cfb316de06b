//! Area selector state.
//!
//! DESIGN
//! ======
//! The selection held here is the single source for the label, the stored
//! preference, and the applied filter. Every update path (restore, user
//! click, external `areaFilterChanged` event) goes through [`AreaState::select`]
//! so all three converge.

#[cfg(test)]
#[path = "area_test.rs"]
mod area_test;

use views::area_filter::{ALL_AREAS_ID, ALL_AREAS_NAME, AreaFilter};
use views::prefs::AreaSelection;
use wire::Area;

/// One entry of the area dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AreaOption {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AreaState {
    /// Areas the viewer may access, as returned by `/api/areas`.
    pub areas: Vec<Area>,
    pub selection: Option<AreaSelection>,
}

impl AreaState {
    /// The selector is only shown once at least one area is available.
    pub fn selector_visible(&self) -> bool {
        !self.areas.is_empty()
    }

    pub fn filter(&self) -> AreaFilter {
        self.selection
            .as_ref()
            .map_or(AreaFilter::All, |s| AreaFilter::from_id(&s.area_id))
    }

    pub fn current_name(&self) -> String {
        self.selection
            .as_ref()
            .map_or_else(|| ALL_AREAS_NAME.to_owned(), |s| s.area_name.clone())
    }

    /// "All Areas" first, then the fetched areas in server order.
    pub fn options(&self) -> Vec<AreaOption> {
        let mut options = Vec::with_capacity(self.areas.len() + 1);
        options.push(AreaOption {
            id: ALL_AREAS_ID.to_owned(),
            name: ALL_AREAS_NAME.to_owned(),
        });
        options.extend(self.areas.iter().map(|area| AreaOption {
            id: area.id.to_string(),
            name: area.name.clone(),
        }));
        options
    }

    /// Fill in a blank area name from the sentinel, the loaded areas, or the
    /// current selection. `None` when no name is known for the id.
    pub fn resolve(&self, mut selection: AreaSelection) -> Option<AreaSelection> {
        if !selection.area_name.trim().is_empty() {
            return Some(selection);
        }
        let name = match AreaFilter::from_id(&selection.area_id) {
            AreaFilter::All => Some(ALL_AREAS_NAME.to_owned()),
            AreaFilter::Only(id) => self
                .areas
                .iter()
                .find(|area| area.id.to_string() == id)
                .map(|area| area.name.clone())
                .or_else(|| {
                    self.selection
                        .as_ref()
                        .filter(|current| current.area_id.trim() == id)
                        .map(|current| current.area_name.clone())
                }),
        };
        selection.area_name = name.filter(|n| !n.trim().is_empty())?;
        Some(selection)
    }

    /// Replace the selection. Returns `false` when nothing changed.
    pub fn select(&mut self, selection: AreaSelection) -> bool {
        if self.selection.as_ref() == Some(&selection) {
            return false;
        }
        self.selection = Some(selection);
        true
    }
}

impl From<AreaOption> for AreaSelection {
    fn from(option: AreaOption) -> Self {
        Self {
            area_id: option.id,
            area_name: option.name,
        }
    }
}
