//! # Client configuration — `arquivo.toml`
//!
//! Defines the TOML file that tells the front end where the archive backend
//! lives. The web crate embeds the file at build time.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://127.0.0.1:5000"   # origin of the archive backend
//! ```
//!
//! All structs derive `Default`, so a missing or empty file equals the
//! default configuration.

use serde::{Deserialize, Serialize};

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the archive backend, without a trailing path.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given backend origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
        }
    }

    /// Builder method to override the base URL when `value` is set and not blank.
    pub fn with_base_url_override(mut self, value: Option<&str>) -> Self {
        if let Some(url) = value.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.to_string();
        }
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "arquivo.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
