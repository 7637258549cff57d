//! Markdown and HTML snippets that embed generated icons in a README.
//!
//! Two formats are supported:
//!
//! - [`OutputFormat::Single`] emits one Markdown image pointing at the grid
//!   endpoint: `![Tech Stack](<base>/api/icons?i=react,rust&theme=dark&perline=10)`.
//! - [`OutputFormat::Individual`] emits one linked `<img>` per technology
//!   pointing at the single-icon endpoint, centered in a `<p>`.
//!
//! Output is a pure function of its inputs; an empty selection always
//! produces an empty string.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::TechEntry;
use crate::config::ServiceConfig;
use crate::svg::Element;
use crate::theme::Theme;
use crate::validate::{DEFAULT_ICON_SIZE, DEFAULT_PER_LINE, ICON_SIZE_RANGE, PER_LINE_RANGE};

/// Alt text of the combined grid image.
const GRID_ALT_TEXT: &str = "Tech Stack";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One grid image for the whole selection.
    #[default]
    Single,
    /// One linked image per technology.
    Individual,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "individual" => Ok(Self::Individual),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

/// Settings shared by every snippet a generator emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Base URL of the icon service, without a trailing slash.
    pub base_url: String,
    pub theme: Theme,
    /// Icons per row in [`OutputFormat::Single`]; clamped to `5..=10`.
    pub per_line: u32,
    /// Optional `###` heading placed above non-empty output.
    pub title: Option<String>,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            theme: Theme::default(),
            per_line: DEFAULT_PER_LINE,
            title: None,
        }
    }
}

/// Builds README snippets for a selection of technologies.
#[derive(Debug, Clone, Default)]
pub struct MarkdownGenerator {
    options: MarkdownOptions,
}

impl MarkdownGenerator {
    pub fn new(mut options: MarkdownOptions) -> Self {
        options.base_url = options.base_url.trim_end_matches('/').to_string();
        Self { options }
    }

    /// Creates a generator whose links point at the configured public URL.
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(MarkdownOptions {
            base_url: config.base_url().to_string(),
            ..MarkdownOptions::default()
        })
    }

    pub fn options(&self) -> &MarkdownOptions {
        &self.options
    }

    /// Generates a snippet for `techs`, in the given order.
    ///
    /// `icon_size` applies to [`OutputFormat::Individual`] and is clamped to
    /// the sizes the single-icon endpoint accepts.
    pub fn generate(&self, techs: &[&TechEntry], format: OutputFormat, icon_size: u32) -> String {
        if techs.is_empty() {
            return String::new();
        }

        let body = match format {
            OutputFormat::Single => self.grid_image(techs),
            OutputFormat::Individual => self.linked_icons(techs, icon_size),
        };

        match &self.options.title {
            Some(title) if !title.trim().is_empty() => format!("### {}\n\n{body}", title.trim()),
            _ => body,
        }
    }

    /// URL of the grid image for `techs`.
    pub fn grid_url(&self, techs: &[&TechEntry]) -> String {
        let ids: Vec<String> = techs.iter().map(|tech| encode(tech.id)).collect();
        let per_line = self
            .options
            .per_line
            .clamp(*PER_LINE_RANGE.start(), *PER_LINE_RANGE.end());
        format!(
            "{}/api/icons?i={}&theme={}&perline={}",
            self.options.base_url,
            ids.join(","),
            self.options.theme,
            per_line
        )
    }

    /// URL of the single-icon image for `tech`.
    pub fn icon_url(&self, tech: &TechEntry, icon_size: u32) -> String {
        format!(
            "{}/api/icon?i={}&theme={}&size={}",
            self.options.base_url,
            encode(tech.id),
            self.options.theme,
            clamp_icon_size(icon_size)
        )
    }

    fn grid_image(&self, techs: &[&TechEntry]) -> String {
        format!("![{GRID_ALT_TEXT}]({})", self.grid_url(techs))
    }

    fn linked_icons(&self, techs: &[&TechEntry], icon_size: u32) -> String {
        let size = clamp_icon_size(icon_size);
        let icons: Vec<String> = techs
            .iter()
            .map(|tech| {
                Element::new("a")
                    .attr("href", tech.link_or_search())
                    .attr("target", "_blank")
                    .attr("rel", "noopener noreferrer")
                    .child(
                        Element::new("img")
                            .attr("src", self.icon_url(tech, size))
                            .attr("alt", tech.name)
                            .attr("width", size)
                            .attr("height", size),
                    )
                    .to_compact_markup()
            })
            .collect();
        format!("<p align=\"center\">\n  {}\n</p>", icons.join(" "))
    }
}

/// Generates a snippet with default options.
pub fn generate(techs: &[&TechEntry], format: OutputFormat, icon_size: u32) -> String {
    MarkdownGenerator::default().generate(techs, format, icon_size)
}

fn clamp_icon_size(size: u32) -> u32 {
    if size == 0 {
        return DEFAULT_ICON_SIZE;
    }
    size.clamp(*ICON_SIZE_RANGE.start(), *ICON_SIZE_RANGE.end())
}

fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn techs(ids: &[&str]) -> Vec<&'static TechEntry> {
        ids.iter()
            .map(|id| catalog::get(id).unwrap_or_else(|| panic!("missing {id}")))
            .collect()
    }

    #[test]
    fn empty_selection_is_empty() {
        assert_eq!(generate(&[], OutputFormat::Single, 48), "");
        assert_eq!(generate(&[], OutputFormat::Individual, 48), "");

        let titled = MarkdownGenerator::new(MarkdownOptions {
            title: Some("Stack".into()),
            ..MarkdownOptions::default()
        });
        assert_eq!(titled.generate(&[], OutputFormat::Single, 48), "");
    }

    #[test]
    fn single_format_points_at_grid() {
        let md = generate(&techs(&["react", "rust", "docker"]), OutputFormat::Single, 48);
        assert_eq!(
            md,
            "![Tech Stack](http://localhost:3000/api/icons?i=react,rust,docker&theme=dark&perline=10)"
        );
    }

    #[test]
    fn individual_format_links_each_icon() {
        let md = generate(&techs(&["react", "c"]), OutputFormat::Individual, 32);
        assert!(md.starts_with("<p align=\"center\">\n  <a href=\"https://react.dev\""));
        assert!(md.ends_with("</a>\n</p>"));
        assert!(md.contains(
            r#"<img src="http://localhost:3000/api/icon?i=react&amp;theme=dark&amp;size=32" alt="React" width="32" height="32" />"#
        ));
        // No canonical link: falls back to a Simple Icons search.
        assert!(md.contains(r#"<a href="https://simpleicons.org/?q=C" target="_blank" rel="noopener noreferrer">"#));
        assert!(md.contains("</a> <a "));
    }

    #[test]
    fn icon_size_is_clamped() {
        let generator = MarkdownGenerator::default();
        let react = catalog::get("react").unwrap();
        assert!(generator.icon_url(react, 1000).ends_with("size=256"));
        assert!(generator.icon_url(react, 4).ends_with("size=16"));
        assert!(generator.icon_url(react, 0).ends_with("size=48"));
    }

    #[test]
    fn options_are_applied() {
        let generator = MarkdownGenerator::new(MarkdownOptions {
            base_url: "https://icons.example.com/".into(),
            theme: Theme::Light,
            per_line: 42,
            title: Some("My Stack".into()),
        });
        let md = generator.generate(&techs(&["rust"]), OutputFormat::Single, 48);
        assert_eq!(
            md,
            "### My Stack\n\n![Tech Stack](https://icons.example.com/api/icons?i=rust&theme=light&perline=10)"
        );
    }

    #[test]
    fn order_and_duplicates_are_kept() {
        let md = generate(&techs(&["rust", "react", "rust"]), OutputFormat::Single, 48);
        assert!(md.contains("i=rust,react,rust&"));
    }

    #[test]
    fn generation_is_idempotent() {
        let selection = techs(&["react", "ts", "postgres"]);
        for format in [OutputFormat::Single, OutputFormat::Individual] {
            assert_eq!(generate(&selection, format, 48), generate(&selection, format, 48));
        }
    }

    #[test]
    fn from_config_uses_public_url() {
        let config = ServiceConfig::new().with_public_url("https://stack.dev/");
        let generator = MarkdownGenerator::from_config(&config);
        assert_eq!(generator.options().base_url, "https://stack.dev");
    }

    #[test]
    fn format_parsing() {
        assert_eq!("single".parse::<OutputFormat>(), Ok(OutputFormat::Single));
        assert_eq!("individual".parse::<OutputFormat>(), Ok(OutputFormat::Individual));
        assert!("grid".parse::<OutputFormat>().is_err());
    }
}
