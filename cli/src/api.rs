//! HTTP access to the tracker API from a terminal.
//!
//! Same endpoints as the browser, but the session has to be supplied
//! explicitly: pages behind `login_required` need the Flask `session` cookie
//! copied from a logged-in browser.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use reqwest::header::{COOKIE, HeaderMap, HeaderValue};
use wire::{Area, AreaNode, Endpoint, MachineSnapshot};

use crate::CliError;

/// Name of the server's session cookie.
pub const SESSION_COOKIE: &str = "session";

pub fn cookie_header(value: &str) -> Result<HeaderValue, CliError> {
    Ok(HeaderValue::from_str(&format!("{SESSION_COOKIE}={value}"))?)
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, session_cookie: Option<&str>) -> Result<Self, CliError> {
        let mut headers = HeaderMap::new();
        if let Some(value) = session_cookie {
            headers.insert(COOKIE, cookie_header(value)?);
        }
        let http = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(Self {
            http,
            base_url: base_url.to_owned(),
        })
    }

    pub fn url(&self, endpoint: &Endpoint) -> String {
        endpoint.join(&self.base_url)
    }

    /// `GET` an endpoint and return the body of a 2xx response.
    pub async fn get_text(&self, endpoint: &Endpoint) -> Result<String, CliError> {
        let response = self
            .http
            .get(self.url(endpoint))
            .query(&endpoint.query)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CliError::Status {
                status: status.as_u16(),
                path: endpoint.path,
            });
        }
        Ok(response.text().await?)
    }

    pub async fn areas(&self) -> Result<Vec<Area>, CliError> {
        let body = self.get_text(&Endpoint::areas()).await?;
        Ok(wire::decode_areas(&body)?)
    }

    pub async fn hierarchy(&self) -> Result<Vec<AreaNode>, CliError> {
        let body = self.get_text(&Endpoint::area_hierarchy()).await?;
        Ok(wire::decode_hierarchy(&body)?)
    }

    pub async fn machines(&self) -> Result<Vec<MachineSnapshot>, CliError> {
        let body = self.get_text(&Endpoint::machine_status()).await?;
        Ok(wire::decode_machines(&body)?)
    }
}
