//! REST helpers for the tracker's same-origin API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning an error, since these endpoints are only
//! reachable from the page.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` instead of panics. Every failure is shown
//! or logged by the caller and leaves previously rendered state untouched.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use wire::{Area, AreaNode, Endpoint, MachineSnapshot};

#[cfg(any(test, feature = "csr"))]
fn status_failed_message(status: u16) -> String {
    format!("Server returned status {status}")
}

#[cfg(any(test, feature = "csr"))]
fn decode_failed_message(path: &str, err: &wire::WireError) -> String {
    format!("unexpected response from {path}: {err}")
}

/// `GET` an endpoint and return the body text of a 2xx response.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-2xx status.
pub async fn get_text(endpoint: &Endpoint) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(endpoint.path)
            .query(endpoint.query.iter().map(|(k, v)| (*k, v.as_str())))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_failed_message(resp.status()));
        }
        resp.text().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = endpoint;
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch the areas the viewer may access from `/api/areas`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body is not an area list.
pub async fn fetch_areas() -> Result<Vec<Area>, String> {
    let endpoint = Endpoint::areas();
    let body = get_text(&endpoint).await?;
    #[cfg(feature = "csr")]
    {
        wire::decode_areas(&body).map_err(|e| decode_failed_message(endpoint.path, &e))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = body;
        Ok(Vec::new())
    }
}

/// Fetch the area/zone tree from `/api/areas/hierarchy`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body does not decode.
pub async fn fetch_hierarchy() -> Result<Vec<AreaNode>, String> {
    let endpoint = Endpoint::area_hierarchy();
    let body = get_text(&endpoint).await?;
    #[cfg(feature = "csr")]
    {
        wire::decode_hierarchy(&body).map_err(|e| decode_failed_message(endpoint.path, &e))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = body;
        Ok(Vec::new())
    }
}

/// Fetch every machine snapshot from `/api/machines/status`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body does not decode.
pub async fn fetch_machines() -> Result<Vec<MachineSnapshot>, String> {
    let endpoint = Endpoint::machine_status();
    let body = get_text(&endpoint).await?;
    #[cfg(feature = "csr")]
    {
        wire::decode_machines(&body).map_err(|e| decode_failed_message(endpoint.path, &e))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = body;
        Ok(Vec::new())
    }
}

/// Send one activity heartbeat for `machine_id`; any 2xx counts as success.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-2xx status.
pub async fn send_heartbeat(machine_id: &str) -> Result<(), String> {
    get_text(&Endpoint::heartbeat(machine_id)).await.map(drop)
}
