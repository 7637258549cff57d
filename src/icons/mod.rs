//! Vector icon data and the providers that serve it.
//!
//! Icons are addressed two ways:
//!
//! - An [`IconRef`] (`prefix:name`, e.g. `simple-icons:react`) names an icon
//!   inside an icon family. Catalog entries store these.
//! - A provider key (e.g. `siReact`) is how a [`VectorIconProvider`] indexes
//!   its records. [`provider_key`] translates the former into the latter.

mod bundled;

pub use bundled::BundledIcons;

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Marker every provider key starts with.
pub const KEY_MARKER: &str = "si";

// ============================================================================
// IconData
// ============================================================================

/// A flat vector icon drawn in a 24x24 coordinate space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconData {
    /// SVG path data.
    pub path: String,

    /// Brand color as six hex digits, without `#`.
    pub hex: String,

    /// Human-readable icon title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Read-only lookup from provider key to icon data.
///
/// Implementations must be pure: the same key always yields the same data.
pub trait VectorIconProvider: Send + Sync {
    fn lookup(&self, key: &str) -> Option<IconData>;
}

impl<P: VectorIconProvider + ?Sized> VectorIconProvider for &P {
    fn lookup(&self, key: &str) -> Option<IconData> {
        (**self).lookup(key)
    }
}

impl<P: VectorIconProvider + ?Sized> VectorIconProvider for Box<P> {
    fn lookup(&self, key: &str) -> Option<IconData> {
        (**self).lookup(key)
    }
}

impl<P: VectorIconProvider + ?Sized> VectorIconProvider for std::sync::Arc<P> {
    fn lookup(&self, key: &str) -> Option<IconData> {
        (**self).lookup(key)
    }
}

// ============================================================================
// IconRef
// ============================================================================

/// Icon families a reference may point into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconPrefix {
    Logos,
    SimpleIcons,
    Devicon,
}

impl IconPrefix {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Logos => "logos",
            Self::SimpleIcons => "simple-icons",
            Self::Devicon => "devicon",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "logos" => Some(Self::Logos),
            "simple-icons" => Some(Self::SimpleIcons),
            "devicon" => Some(Self::Devicon),
            _ => None,
        }
    }
}

/// Errors from parsing a `prefix:name` reference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IconRefError {
    #[error("icon reference '{0}' is not of the form prefix:name")]
    MissingSeparator(String),

    #[error("icon reference '{0}' has an empty name")]
    EmptyName(String),

    #[error("icon reference '{reference}' uses unknown prefix '{prefix}'")]
    UnknownPrefix { reference: String, prefix: String },
}

/// A parsed `prefix:name` icon reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconRef<'a> {
    pub prefix: IconPrefix,
    pub name: &'a str,
}

impl<'a> IconRef<'a> {
    /// Parses a reference such as `simple-icons:react`.
    pub fn parse(reference: &'a str) -> Result<Self, IconRefError> {
        let (prefix, name) = reference
            .split_once(':')
            .ok_or_else(|| IconRefError::MissingSeparator(reference.to_string()))?;
        if name.is_empty() {
            return Err(IconRefError::EmptyName(reference.to_string()));
        }
        let prefix = IconPrefix::parse(prefix).ok_or_else(|| IconRefError::UnknownPrefix {
            reference: reference.to_string(),
            prefix: prefix.to_string(),
        })?;
        Ok(Self { prefix, name })
    }

    /// Returns the key this reference is stored under in a provider.
    pub fn key(&self) -> String {
        transliterate(self.name)
    }
}

impl std::fmt::Display for IconRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.prefix.as_str(), self.name)
    }
}

// ============================================================================
// Key Transliteration
// ============================================================================

/// Translates any `prefix:name` string into a provider key.
///
/// Everything up to the first `:` is dropped, non-alphanumeric characters
/// are removed, the first remaining character is upper-cased and the rest
/// lower-cased, and the result is prefixed with [`KEY_MARKER`]:
/// `simple-icons:react` and `logos:React` both become `siReact`, and
/// `devicon:github-white` becomes `siGithubwhite`.
///
/// Unlike [`IconRef::parse`], this never fails; malformed input simply
/// produces a key no provider holds.
pub fn provider_key(reference: &str) -> String {
    let name = reference
        .split_once(':')
        .map(|(_, name)| name)
        .unwrap_or(reference);
    transliterate(name)
}

fn transliterate(name: &str) -> String {
    let mut key = String::with_capacity(KEY_MARKER.len() + name.len());
    key.push_str(KEY_MARKER);
    let mut chars = name.chars().filter(char::is_ascii_alphanumeric);
    if let Some(first) = chars.next() {
        key.push(first.to_ascii_uppercase());
        key.extend(chars.map(|c| c.to_ascii_lowercase()));
    }
    key
}

// ============================================================================
// JsonIconProvider
// ============================================================================

/// Errors from loading an icon dataset.
#[derive(Debug, thiserror::Error)]
pub enum IconDatasetError {
    #[error("failed to read icon dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse icon dataset: {0}")]
    Json(#[from] serde_json::Error),
}

/// A provider backed by a JSON object of `key -> { path, hex, title? }`.
///
/// ```json
/// { "siReact": { "path": "M12 ...", "hex": "61DAFB", "title": "React" } }
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonIconProvider {
    icons: HashMap<String, IconData>,
}

impl JsonIconProvider {
    pub fn from_json(json: &str) -> Result<Self, IconDatasetError> {
        let icons = serde_json::from_str(json)?;
        Ok(Self { icons })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, IconDatasetError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let provider = Self::from_json(&content)?;
        log::info!(
            "Loaded {} icons from {}",
            provider.len(),
            path.as_ref().display()
        );
        Ok(provider)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

impl VectorIconProvider for JsonIconProvider {
    fn lookup(&self, key: &str) -> Option<IconData> {
        self.icons.get(key).cloned()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_references() {
        let r = IconRef::parse("simple-icons:react").unwrap();
        assert_eq!(r.prefix, IconPrefix::SimpleIcons);
        assert_eq!(r.name, "react");
        assert_eq!(r.to_string(), "simple-icons:react");

        assert_eq!(IconRef::parse("logos:rust").unwrap().prefix, IconPrefix::Logos);
        assert_eq!(
            IconRef::parse("devicon:vscode").unwrap().prefix,
            IconPrefix::Devicon
        );
    }

    #[test]
    fn parse_rejects_malformed_references() {
        assert!(matches!(
            IconRef::parse("react"),
            Err(IconRefError::MissingSeparator(_))
        ));
        assert!(matches!(
            IconRef::parse("logos:"),
            Err(IconRefError::EmptyName(_))
        ));
        assert!(matches!(
            IconRef::parse("material:home"),
            Err(IconRefError::UnknownPrefix { .. })
        ));
    }

    #[test]
    fn transliteration() {
        assert_eq!(provider_key("simple-icons:react"), "siReact");
        assert_eq!(provider_key("logos:React"), "siReact");
        assert_eq!(provider_key("simple-icons:nodedotjs"), "siNodedotjs");
        assert_eq!(provider_key("devicon:github-white"), "siGithubwhite");
        assert_eq!(provider_key("TypeScript"), "siTypescript");
        assert_eq!(provider_key("logos:"), "si");
        assert_eq!(provider_key(""), "si");
    }

    #[test]
    fn ref_key_matches_provider_key() {
        let r = IconRef::parse("simple-icons:tailwindcss").unwrap();
        assert_eq!(r.key(), provider_key("simple-icons:tailwindcss"));
    }

    #[test]
    fn json_provider_lookup() {
        let provider = JsonIconProvider::from_json(
            r#"{
                "siReact": { "path": "M0 0h1v1z", "hex": "61DAFB", "title": "React" },
                "siBare": { "path": "M1 1", "hex": "000000" }
            }"#,
        )
        .unwrap();

        assert_eq!(provider.len(), 2);
        let react = provider.lookup("siReact").unwrap();
        assert_eq!(react.hex, "61DAFB");
        assert_eq!(react.title.as_deref(), Some("React"));
        assert_eq!(provider.lookup("siBare").unwrap().title, None);
        assert!(provider.lookup("siMissing").is_none());
    }

    #[test]
    fn json_provider_rejects_bad_json() {
        assert!(matches!(
            JsonIconProvider::from_json("[1, 2]"),
            Err(IconDatasetError::Json(_))
        ));
    }

    #[test]
    fn providers_compose_through_references() {
        let bundled = BundledIcons;
        let boxed: Box<dyn VectorIconProvider> = Box::new(BundledIcons);
        assert_eq!(
            (&bundled).lookup("siReact"),
            boxed.lookup("siReact")
        );
    }
}
