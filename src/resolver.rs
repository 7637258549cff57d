//! Identifier to vector icon resolution.
//!
//! Resolution goes identifier -> catalog entry -> icon reference -> provider
//! key -> [`IconData`]. Identifiers the catalog does not know are tried as
//! `logos:<identifier>` so the provider can still match them directly.
//! Anything that does not resolve becomes the [fallback icon](ResolvedIcon::fallback)
//! unless the caller asks for [`ResolveMode::Strict`].

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::IconError;
use crate::icons::{BundledIcons, IconData, VectorIconProvider, provider_key};
use crate::theme::Theme;

/// Path of the fallback icon: a filled 24x24 square.
pub const FALLBACK_PATH: &str = "M0 0h24v24H0z";

/// Brand color of the fallback icon.
pub const FALLBACK_HEX: &str = "808080";

/// Title of the fallback icon.
pub const FALLBACK_TITLE: &str = "Unknown";

// ============================================================================
// ResolvedIcon
// ============================================================================

/// Concrete vector data for one requested identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedIcon {
    /// SVG path data in a 24x24 coordinate space.
    pub vector_path: String,

    /// Brand color as six hex digits, without `#`.
    pub color_hex: String,

    pub title: String,
}

impl ResolvedIcon {
    /// The neutral icon used when nothing matches.
    pub fn fallback() -> Self {
        Self {
            vector_path: FALLBACK_PATH.to_string(),
            color_hex: FALLBACK_HEX.to_string(),
            title: FALLBACK_TITLE.to_string(),
        }
    }

    /// Returns true if this is the fallback icon.
    pub fn is_fallback(&self) -> bool {
        self.vector_path == FALLBACK_PATH
            && self.color_hex == FALLBACK_HEX
            && self.title == FALLBACK_TITLE
    }

    fn from_data(data: IconData, default_title: &str) -> Self {
        Self {
            vector_path: data.path,
            color_hex: data.hex,
            title: data.title.unwrap_or_else(|| default_title.to_string()),
        }
    }
}

// ============================================================================
// ResolveMode
// ============================================================================

/// What to do with identifiers that resolve to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ResolveMode {
    /// Substitute the fallback icon.
    #[default]
    BestEffort,
    /// Report `ICON_NOT_FOUND`.
    Strict,
}

// ============================================================================
// Resolver
// ============================================================================

/// Resolves identifiers against the catalog and a vector icon provider.
///
/// The resolver holds no mutable state; one instance can serve any number
/// of concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct Resolver<P = BundledIcons> {
    provider: P,
}

impl<P: VectorIconProvider> Resolver<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Resolves `id` using its primary icon reference. Never fails.
    pub fn resolve(&self, id: &str) -> ResolvedIcon {
        self.resolve_themed(id, Theme::Light)
    }

    /// Resolves `id` for `theme`, preferring the entry's dark-variant
    /// reference on dark backgrounds. Never fails.
    pub fn resolve_themed(&self, id: &str, theme: Theme) -> ResolvedIcon {
        self.try_resolve(id, theme).unwrap_or_else(|| {
            log::debug!("No icon for '{id}', using fallback");
            ResolvedIcon::fallback()
        })
    }

    /// Resolves `id` for `theme`, or returns `None` if no reference matches.
    ///
    /// A dark-variant reference the provider cannot serve falls back to the
    /// entry's primary reference before giving up.
    pub fn try_resolve(&self, id: &str, theme: Theme) -> Option<ResolvedIcon> {
        let (name, references) = references_for(id, theme);
        references
            .iter()
            .find_map(|reference| self.provider.lookup(&provider_key(reference)))
            .map(|data| ResolvedIcon::from_data(data, name))
    }

    /// Resolves `id` according to `mode`.
    pub fn resolve_with_mode(
        &self,
        id: &str,
        theme: Theme,
        mode: ResolveMode,
    ) -> Result<ResolvedIcon, IconError> {
        match mode {
            ResolveMode::BestEffort => Ok(self.resolve_themed(id, theme)),
            ResolveMode::Strict => self
                .try_resolve(id, theme)
                .ok_or_else(|| IconError::IconNotFound(id.to_string())),
        }
    }
}

/// Returns the display name for `id` and the icon references to try, in
/// order of preference.
fn references_for(id: &str, theme: Theme) -> (&str, Vec<Cow<'static, str>>) {
    match catalog::get(id) {
        Some(entry) => {
            let mut references = Vec::with_capacity(2);
            if let (Theme::Dark, Some(dark)) = (theme, entry.icon_ref_dark) {
                references.push(Cow::Borrowed(dark));
            }
            references.push(Cow::Borrowed(entry.icon_ref));
            (entry.name, references)
        }
        None => (id, vec![Cow::Owned(format!("logos:{id}"))]),
    }
}

/// Resolves `id` against the bundled icon table. Never fails.
pub fn resolve(id: &str) -> ResolvedIcon {
    Resolver::new(BundledIcons).resolve(id)
}

// ============================================================================
// Tests
// ============================================================================
