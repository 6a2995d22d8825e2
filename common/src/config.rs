//! Runtime configuration shared by the host and the browser bundle.
//!
//! The host serves an [`AppConfig`] as `/config.json`; the frontend fetches it
//! once on startup and resolves every endpoint and image path against it.

use serde::{Deserialize, Serialize};

/// Backend address used when no configuration document is available.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the REST backend, e.g. `http://localhost:5000`.
    pub api_base_url: String,

    /// Base URL for uploaded files. Falls back to `api_base_url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_base_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl AppConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            static_base_url: None,
        }
    }

    pub fn with_static_base_url(mut self, url: impl Into<String>) -> Self {
        self.static_base_url = Some(url.into());
        self
    }

    pub fn static_base(&self) -> &str {
        self.static_base_url.as_deref().unwrap_or(&self.api_base_url)
    }

    /// Absolute URL of an API path such as `/api/banners/getallbanners`.
    pub fn api_url(&self, path: &str) -> String {
        join(&self.api_base_url, path)
    }

    /// Absolute URL of a stored image.
    ///
    /// `prefix` is the storage directory for backends that return bare file
    /// names (banners). Paths that are already absolute, including `blob:`
    /// preview URLs, are returned unchanged.
    pub fn image_url(&self, prefix: Option<&str>, path: &str) -> String {
        if is_absolute(path) {
            return path.to_string();
        }
        match prefix {
            Some(prefix) => join(&join(self.static_base(), prefix), path),
            None => join(self.static_base(), path),
        }
    }
}

fn is_absolute(path: &str) -> bool {
    ["http://", "https://", "blob:", "data:"]
        .iter()
        .any(|scheme| path.starts_with(scheme))
}

/// Joins two URL segments with exactly one `/` between them.
fn join(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{path}")
    }
}
