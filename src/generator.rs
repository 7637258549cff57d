//! Request rendering: resolution, color policy, layout and composition.

use crate::compose::{SINGLE_BORDER_RADIUS, compose_empty, compose_layout, compose_single};
use crate::config::{ConfigError, ServiceConfig};
use crate::error::IconError;
use crate::icons::{BundledIcons, VectorIconProvider};
use crate::layout::{GRID_BORDER_RADIUS, GRID_ICON_SIZE, standard_layout};
use crate::resolver::{ResolveMode, ResolvedIcon, Resolver};
use crate::theme::Theme;
use crate::validate::{GridRequest, SingleIconRequest};

/// Renders validated requests to SVG documents.
///
/// `IconGenerator` owns a [`Resolver`] and the [`ResolveMode`] to apply
/// to it. It is immutable once built, so a single instance can be shared
/// across threads behind an `Arc`.
///
/// # Example
///
/// ```
/// use stackicons::{GridRequest, IconGenerator, Theme};
///
/// let generator = IconGenerator::bundled();
/// let svg = generator
///     .render_grid(&GridRequest {
///         ids: vec!["react".into(), "rust".into()],
///         theme: Theme::Dark,
///         per_line: 10,
///     })
///     .unwrap();
/// assert!(svg.contains(r#"width="104""#));
/// ```
#[derive(Debug, Clone)]
pub struct IconGenerator<P = BundledIcons> {
    resolver: Resolver<P>,
    mode: ResolveMode,
}

impl<P: VectorIconProvider> IconGenerator<P> {
    pub fn new(provider: P) -> Self {
        Self {
            resolver: Resolver::new(provider),
            mode: ResolveMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ResolveMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ResolveMode {
        self.mode
    }

    pub fn resolver(&self) -> &Resolver<P> {
        &self.resolver
    }

    /// Renders a single icon centered on its own background.
    pub fn render_single(&self, request: &SingleIconRequest) -> Result<String, IconError> {
        let (icon, color) = self.themed_icon(&request.id, request.theme)?;
        Ok(compose_single(
            &icon,
            &color,
            request.theme.colors().background,
            request.size,
            SINGLE_BORDER_RADIUS,
        ))
    }

    /// Renders a grid of icons in request order.
    ///
    /// An empty identifier list yields the "No icons" placeholder.
    pub fn render_grid(&self, request: &GridRequest) -> Result<String, IconError> {
        if request.ids.is_empty() {
            return Ok(compose_empty());
        }

        let icons = request
            .ids
            .iter()
            .map(|id| self.themed_icon(id, request.theme))
            .collect::<Result<Vec<_>, _>>()?;

        let layout = standard_layout(icons.len(), request.per_line);
        compose_layout(
            icons,
            &layout,
            request.theme.colors().background,
            GRID_ICON_SIZE,
            GRID_BORDER_RADIUS,
        )
    }

    fn themed_icon(&self, id: &str, theme: Theme) -> Result<(ResolvedIcon, String), IconError> {
        let icon = self.resolver.resolve_with_mode(id, theme, self.mode)?;
        let color = theme.icon_color(Some(&icon.color_hex));
        Ok((icon, color))
    }
}

impl IconGenerator {
    /// Builds a best-effort generator over the bundled icons.
    pub fn bundled() -> Self {
        Self::new(BundledIcons)
    }
}

impl Default for IconGenerator {
    fn default() -> Self {
        Self::bundled()
    }
}

impl IconGenerator<Box<dyn VectorIconProvider>> {
    /// Builds a generator from the provider and mode `config` selects.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, ConfigError> {
        Ok(IconGenerator::new(config.icon_provider()?).with_mode(config.resolve_mode))
    }
}

// ============================================================================
// Tests
// ============================================================================
