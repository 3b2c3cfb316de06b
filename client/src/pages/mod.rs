//! Page-level orchestration.
//!
//! ARCHITECTURE
//! ============
//! The server renders every page; these modules decide what to do with the
//! containers a page happens to contain and delegate rendering details to
//! `components`.

pub mod areas;
#[cfg(feature = "csr")]
pub mod dashboard;
