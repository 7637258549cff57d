//! Light/dark themes and icon color policy.

use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

// ============================================================================
// Theme
// ============================================================================

/// Background the generated image is meant to sit on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Returns the query-string spelling of the theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a theme, coercing anything unrecognised to the default.
    ///
    /// Unknown values are not an error: `theme=blue` renders as dark.
    pub fn coerce(value: Option<&str>) -> Self {
        match value {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::debug!("Unrecognised theme {:?}, using {}", raw, Self::default().as_str());
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Returns the palette used for this theme.
    pub fn colors(self) -> ThemeColors {
        match self {
            Self::Dark => ThemeColors {
                background: "#0d1117",
                default_icon: "#ffffff",
            },
            Self::Light => ThemeColors {
                background: "#ffffff",
                default_icon: "#000000",
            },
        }
    }

    /// Picks the fill color for an icon.
    ///
    /// Dark backgrounds show the brand color verbatim; light backgrounds
    /// always use the theme's default icon color. A missing or malformed
    /// brand hex also falls back to the default.
    pub fn icon_color(self, brand_hex: Option<&str>) -> String {
        match (self, brand_hex) {
            (Self::Dark, Some(hex)) if is_brand_hex(hex) => format!("#{hex}"),
            _ => self.colors().default_icon.to_string(),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme '{other}'")),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    /// Canvas fill.
    pub background: &'static str,
    /// Icon fill when no brand color applies.
    pub default_icon: &'static str,
}

// ============================================================================
// Hex Colors
// ============================================================================

/// Parses a 6-digit brand hex (no leading `#`) into an sRGB color.
pub fn parse_brand_hex(hex: &str) -> Option<Srgb<u8>> {
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    Srgb::<u8>::from_str(hex).ok()
}

/// Returns `true` if `hex` is exactly six hex digits.
pub fn is_brand_hex(hex: &str) -> bool {
    parse_brand_hex(hex).is_some()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::coerce(None), Theme::Dark);
    }

    #[test]
    fn unknown_theme_coerces_to_dark() {
        assert_eq!(Theme::coerce(Some("light")), Theme::Light);
        assert_eq!(Theme::coerce(Some("blue")), Theme::Dark);
        assert_eq!(Theme::coerce(Some("LIGHT")), Theme::Dark);
        assert_eq!(Theme::coerce(Some("")), Theme::Dark);
    }

    #[test]
    fn theme_backgrounds() {
        assert_eq!(Theme::Dark.colors().background, "#0d1117");
        assert_eq!(Theme::Light.colors().background, "#ffffff");
    }

    #[test]
    fn dark_theme_uses_brand_color() {
        assert_eq!(Theme::Dark.icon_color(Some("61DAFB")), "#61DAFB");
        assert_eq!(Theme::Dark.icon_color(None), "#ffffff");
    }

    #[test]
    fn light_theme_ignores_brand_color() {
        assert_eq!(Theme::Light.icon_color(Some("61DAFB")), "#000000");
        assert_eq!(Theme::Light.icon_color(None), "#000000");
    }

    #[test]
    fn malformed_brand_hex_falls_back() {
        assert_eq!(Theme::Dark.icon_color(Some("zzzzzz")), "#ffffff");
        assert_eq!(Theme::Dark.icon_color(Some("fff")), "#ffffff");
        assert_eq!(Theme::Dark.icon_color(Some("\"/><script")), "#ffffff");
    }

    #[test]
    fn parse_brand_hex_components() {
        let color = parse_brand_hex("61DAFB").unwrap();
        assert_eq!((color.red, color.green, color.blue), (0x61, 0xDA, 0xFB));
        assert!(parse_brand_hex("#61DAFB").is_none());
    }
}
