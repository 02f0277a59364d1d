//! Studio UI configuration read from `<meta name="studio:*">` tags.
//!
//! The HTML shell (or the server embedding this crate) writes the values; the
//! browser reads them once at start-up. Anything missing or unparsable falls
//! back to the defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_UPLOAD_TIMEOUT_MS: u32 = 120_000;
pub const DEFAULT_PROJECT_POLL_SECS: u32 = 30;

pub const META_API_BASE: &str = "studio:api-base";
pub const META_UPLOAD_TIMEOUT_MS: &str = "studio:upload-timeout-ms";
pub const META_PROJECT_POLL_SECS: &str = "studio:project-poll-secs";

/// Runtime configuration shared through Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudioConfig {
    /// Backend API root without a trailing slash.
    pub api_base: String,
    /// Upper bound on a single IPFS upload; `0` disables the timeout.
    pub upload_timeout_ms: u32,
    /// Dashboard project list refresh interval; `0` disables polling.
    pub project_poll_secs: u32,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            upload_timeout_ms: DEFAULT_UPLOAD_TIMEOUT_MS,
            project_poll_secs: DEFAULT_PROJECT_POLL_SECS,
        }
    }
}

impl StudioConfig {
    /// Build config from a key lookup (meta tag name -> content).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base = match lookup(META_API_BASE).map(|v| normalize_api_base(&v)) {
            Some(base) if !base.is_empty() => base,
            Some(_) => {
                log::warn!("{META_API_BASE} is empty, using {DEFAULT_API_BASE}");
                DEFAULT_API_BASE.to_owned()
            }
            None => DEFAULT_API_BASE.to_owned(),
        };

        Self {
            api_base,
            upload_timeout_ms: parse_u32(lookup(META_UPLOAD_TIMEOUT_MS), DEFAULT_UPLOAD_TIMEOUT_MS),
            project_poll_secs: parse_u32(lookup(META_PROJECT_POLL_SECS), DEFAULT_PROJECT_POLL_SECS),
        }
    }

    /// Read config from the current document's meta tags.
    ///
    /// Returns defaults outside the browser.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let document = web_sys::window().and_then(|w| w.document());
            Self::from_lookup(|name| {
                let selector = format!("meta[name=\"{name}\"]");
                document
                    .as_ref()?
                    .query_selector(&selector)
                    .ok()
                    .flatten()?
                    .get_attribute("content")
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    /// Upload timeout, or `None` when disabled.
    pub fn upload_timeout(&self) -> Option<u32> {
        (self.upload_timeout_ms > 0).then_some(self.upload_timeout_ms)
    }
}

fn normalize_api_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn parse_u32(raw: Option<String>, default: u32) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok()).unwrap_or(default)
}
