//! Service configuration.
//!
//! A [`ServiceConfig`] is a JSON document in which every field is optional
//! and defaults to a working local setup:
//!
//! ```json
//! {
//!   "bind": "127.0.0.1:3000",
//!   "publicUrl": "http://localhost:3000",
//!   "resolveMode": "best-effort",
//!   "iconsPath": "icons.json",
//!   "cacheControl": "public, max-age=31536000, immutable"
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use stackicons::{ResolveMode, ServiceConfig};
//!
//! let config = ServiceConfig::from_json(r#"{ "resolveMode": "strict" }"#).unwrap();
//! assert_eq!(config.resolve_mode, ResolveMode::Strict);
//! assert_eq!(config.public_url, "http://localhost:3000");
//! ```

use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::icons::{BundledIcons, IconDatasetError, JsonIconProvider, VectorIconProvider};
use crate::resolver::ResolveMode;

/// Default `Cache-Control` for generated images. Output for a given query
/// never changes, so it may be cached indefinitely.
pub const DEFAULT_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// Errors from loading or checking a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid publicUrl '{url}': {source}")]
    PublicUrl {
        url: String,
        source: url::ParseError,
    },

    #[error(transparent)]
    Icons(#[from] IconDatasetError),
}

// ============================================================================
// ServiceConfig
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceConfig {
    /// Address the HTTP server listens on.
    pub bind: SocketAddr,

    /// Externally reachable base URL, used in generated Markdown.
    pub public_url: String,

    /// Handling of identifiers that resolve to nothing.
    pub resolve_mode: ResolveMode,

    /// JSON icon dataset to use instead of the bundled icons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icons_path: Option<PathBuf>,

    /// `Cache-Control` header sent with every image.
    pub cache_control: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, 3000)),
            public_url: "http://localhost:3000".to_string(),
            resolve_mode: ResolveMode::default(),
            icons_path: None,
            cache_control: DEFAULT_CACHE_CONTROL.to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bind(mut self, bind: SocketAddr) -> Self {
        self.bind = bind;
        self
    }

    pub fn with_public_url(mut self, url: impl Into<String>) -> Self {
        self.public_url = url.into();
        self
    }

    pub fn with_resolve_mode(mut self, mode: ResolveMode) -> Self {
        self.resolve_mode = mode;
        self
    }

    pub fn with_icons_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.icons_path = Some(path.into());
        self
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parses and checks a configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&content)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Checks that `public_url` is an absolute URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        url::Url::parse(&self.public_url).map_err(|source| ConfigError::PublicUrl {
            url: self.public_url.clone(),
            source,
        })?;
        Ok(())
    }

    /// Returns `public_url` without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.public_url.trim_end_matches('/')
    }

    /// Builds the icon provider this configuration selects.
    pub fn icon_provider(&self) -> Result<Box<dyn VectorIconProvider>, ConfigError> {
        Ok(match &self.icons_path {
            Some(path) => Box::new(JsonIconProvider::load(path)?),
            None => Box::new(BundledIcons),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = ServiceConfig::from_json("{}").unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.bind.port(), 3000);
        assert_eq!(config.cache_control, DEFAULT_CACHE_CONTROL);
        assert_eq!(config.resolve_mode, ResolveMode::BestEffort);
    }

    #[test]
    fn json_uses_camel_case() {
        let config = ServiceConfig::new()
            .with_public_url("https://icons.example.com/")
            .with_resolve_mode(ResolveMode::Strict)
            .with_icons_path("data/icons.json");
        let json = config.to_json_pretty().unwrap();

        assert!(json.contains("\"publicUrl\""));
        assert!(json.contains("\"resolveMode\": \"strict\""));
        assert!(json.contains("\"iconsPath\""));
        assert!(json.contains("\"cacheControl\""));

        let restored = ServiceConfig::from_json(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn icons_path_is_omitted_when_unset() {
        let json = ServiceConfig::default().to_json().unwrap();
        assert!(!json.contains("iconsPath"));
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let config = ServiceConfig::new().with_public_url("https://icons.example.com/");
        assert_eq!(config.base_url(), "https://icons.example.com");
    }

    #[test]
    fn rejects_relative_public_url() {
        let err = ServiceConfig::from_json(r#"{ "publicUrl": "/icons" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::PublicUrl { .. }));
    }

    #[test]
    fn rejects_bad_documents() {
        assert!(matches!(
            ServiceConfig::from_json(r#"{ "bind": "nowhere" }"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            ServiceConfig::from_json(r#"{ "resolveMode": "lenient" }"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ServiceConfig::load("/nonexistent/stackicons.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/stackicons.json"));
    }

    #[test]
    fn default_provider_is_bundled() {
        let provider = ServiceConfig::default().icon_provider().unwrap();
        assert!(provider.lookup("siReact").is_some());
    }

    #[test]
    fn missing_icon_dataset_is_an_error() {
        let config = ServiceConfig::new().with_icons_path("/nonexistent/icons.json");
        assert!(matches!(config.icon_provider(), Err(ConfigError::Icons(_))));
    }
}
