//! Leptos components mounted into server-rendered containers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component owns one container of the page markup and reads shared
//! signals passed in as props from the boot-time `AppState`.

pub mod area_menu;
pub mod area_summary;
pub mod rfid_tester;
