//! Area-based visibility rules for filterable rows, cards, and list items.
//!
//! The filter only ever decides visibility. Applying the same filter twice
//! yields the same decisions, and an element without an area attribute is
//! never hidden.

#[cfg(test)]
#[path = "area_filter_test.rs"]
mod area_filter_test;

/// Identifier of the "All Areas" choice.
pub const ALL_AREAS_ID: &str = "0";

/// Label shown for the "All Areas" choice.
pub const ALL_AREAS_NAME: &str = "All Areas";

/// Selectors for the element kinds the filter applies to.
pub const FILTERABLE_SELECTORS: [&str; 3] = [
    "table[data-area-filterable] tbody tr",
    ".card[data-area-filterable]",
    ".list-group-item[data-area-filterable]",
];

/// Document-level event announcing a new selection, with
/// `detail = { areaId, areaName }`.
pub const AREA_CHANGED_EVENT: &str = "areaFilterChanged";

/// Attribute carrying an element's area identifier.
pub const AREA_ID_ATTR: &str = "data-area-id";

/// Currently applied area filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AreaFilter {
    /// Sentinel: everything visible.
    #[default]
    All,
    /// Only elements tagged with this area id (plus untagged ones).
    Only(String),
}

impl AreaFilter {
    /// Build a filter from a selected area id. `"0"` and blank ids mean all.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        let id = id.trim();
        if id.is_empty() || id == ALL_AREAS_ID {
            Self::All
        } else {
            Self::Only(id.to_owned())
        }
    }

    /// The id this filter was built from.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::All => ALL_AREAS_ID,
            Self::Only(id) => id,
        }
    }

    /// Whether an element tagged with `element_area` is visible.
    #[must_use]
    pub fn shows(&self, element_area: Option<&str>) -> bool {
        match (self, element_area) {
            (Self::All, _) | (_, None) => true,
            (Self::Only(_), Some(area)) if area.is_empty() => true,
            (Self::Only(id), Some(area)) => area == id,
        }
    }
}

/// Visibility for a batch of element area attributes, in input order.
pub fn visibility<'a, I>(filter: &AreaFilter, element_areas: I) -> Vec<bool>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    element_areas.into_iter().map(|area| filter.shows(area)).collect()
}
