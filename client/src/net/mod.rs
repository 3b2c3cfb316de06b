//! Networking for the tracker's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every endpoint is a same-origin `GET`. `api` performs the calls; request
//! shapes and body decoding live in the `wire` crate so the CLI shares them.

pub mod api;
