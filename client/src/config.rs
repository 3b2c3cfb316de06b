//! Page-level client configuration.
//!
//! DESIGN
//! ======
//! All API paths are same-origin, so the only knobs are cadences. The page
//! can override the dashboard refresh period with `data-refresh-seconds` on
//! `<body>`; anything unparsable or zero keeps the default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use views::simulator::HEARTBEAT_INTERVAL;

pub const DEFAULT_REFRESH: Duration = Duration::from_secs(30);
pub const REFRESH_ATTR: &str = "data-refresh-seconds";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub refresh_interval: Duration,
    pub heartbeat_interval: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            refresh_interval: DEFAULT_REFRESH,
            heartbeat_interval: HEARTBEAT_INTERVAL,
        }
    }
}

impl ClientConfig {
    /// Apply a raw `data-refresh-seconds` value.
    #[must_use]
    pub fn with_refresh_attr(mut self, raw: Option<&str>) -> Self {
        if let Some(secs) = raw.and_then(|v| v.trim().parse::<u64>().ok()).filter(|s| *s > 0) {
            self.refresh_interval = Duration::from_secs(secs);
        }
        self
    }

    /// Read overrides from the current document.
    pub fn from_document() -> Self {
        #[cfg(feature = "csr")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
                .and_then(|b| b.get_attribute(REFRESH_ATTR));
            Self::default().with_refresh_attr(raw.as_deref())
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}
