//! Presentation models and derivation helpers for the machine tracker UI.
//!
//! This crate is UI-framework agnostic so the browser `client` and the
//! terminal `cli` consume the same rules: which rows an area filter shows,
//! how a machine card is derived from a snapshot, how summaries aggregate,
//! and how the RFID simulator moves between states. Nothing here touches the
//! DOM or the network.

pub mod admin;
pub mod area_filter;
pub mod card;
pub mod clock;
pub mod prefs;
pub mod seq;
pub mod simulator;
pub mod summary;
pub mod validation;
