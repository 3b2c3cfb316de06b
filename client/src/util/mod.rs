//! Browser helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `web-sys` glue from components and page wiring.
//! Modules that only make sense against a live DOM are compiled with `csr`;
//! the rest carry native fallbacks so state code stays testable.

pub mod clock;
pub mod storage;
pub mod task;
pub mod timer;

#[cfg(feature = "csr")]
pub mod admin_forms;
#[cfg(feature = "csr")]
pub mod area_filter;
#[cfg(feature = "csr")]
pub mod card_dom;
#[cfg(feature = "csr")]
pub mod dom;
