//! stackicons: themed tech-stack icons for READMEs
//!
//! This crate resolves technology identifiers against a curated catalog,
//! composes their brand glyphs into single-icon or grid SVG documents, and
//! generates the Markdown that embeds them.
//!
//! # Example
//!
//! ```
//! use stackicons::{IconService, Method};
//!
//! let service = IconService::bundled();
//! let response = service.handle(
//!     &Method::GET,
//!     &"/api/icons?i=react,rust,docker&theme=light&perline=5".parse().unwrap(),
//! );
//! assert_eq!(response.status(), 200);
//! assert_eq!(response.headers()["content-type"], "image/svg+xml");
//! ```
//!
//! # Errors
//!
//! Every failure is an [`IconError`] carrying a stable [`ErrorCode`]; the
//! HTTP layer turns it into a JSON document:
//!
//! ```
//! use stackicons::{ErrorCode, QueryParams, validate_single};
//!
//! let err = validate_single(&QueryParams::parse("i=react&size=9000")).unwrap_err();
//! assert_eq!(err.code(), ErrorCode::InvalidParameter);
//! assert_eq!(err.status(), 400);
//! ```
//!
//! # Icon Artwork
//!
//! The compiled-in [`BundledIcons`] table covers every catalog entry, but
//! its glyphs are simple placeholder shapes (circles, diamonds, shields, ...)
//! painted in each technology's brand color. Real brand artwork comes from a
//! JSON dataset, selected with `iconsPath` in [`ServiceConfig`] or loaded
//! directly as a [`JsonIconProvider`]:
//!
//! ```
//! use stackicons::{IconGenerator, JsonIconProvider, QueryParams, validate_single};
//!
//! let provider = JsonIconProvider::from_json(
//!     r#"{ "siReact": { "path": "M12 10.1a1.9 1.9 0 1 0 0 3.8z", "hex": "61DAFB", "title": "React" } }"#,
//! )
//! .unwrap();
//! let request = validate_single(&QueryParams::parse("i=react")).unwrap();
//! let svg = IconGenerator::new(provider).render_single(&request).unwrap();
//! assert!(svg.contains(r#"d="M12 10.1a1.9 1.9 0 1 0 0 3.8z""#));
//! ```
//!
//! # Grid Geometry
//!
//! ```
//! use stackicons::{GRID_ICON_PADDING, GRID_ICON_SIZE, PointPx, layout};
//!
//! let grid = layout(23, 10, GRID_ICON_SIZE, GRID_ICON_PADDING);
//! assert_eq!((grid.width, grid.height), (520, 156));
//! assert_eq!(grid.positions[10], PointPx::new(4, 56));
//! ```
//!
//! # README Snippets
//!
//! ```
//! use stackicons::{OutputFormat, catalog, markdown};
//!
//! let techs: Vec<_> = ["react", "rust"].iter().filter_map(|id| catalog::get(id)).collect();
//! let md = markdown::generate(&techs, OutputFormat::Single, 48);
//! assert!(md.starts_with("![Tech Stack]("));
//! ```

pub mod api;
pub mod catalog;
mod compose;
pub mod config;
pub mod error;
pub mod generator;
pub mod icons;
mod layout;
pub mod markdown;
pub mod raster;
pub mod resolver;
mod svg;
pub mod theme;
pub mod validate;

#[cfg(feature = "server")]
pub mod server;

pub use http::Method;

pub use api::{IconService, Route};
pub use catalog::{Category, TechEntry};
pub use compose::{SINGLE_BORDER_RADIUS, SINGLE_GLYPH_SIZE};
pub use config::{ConfigError, ServiceConfig};
pub use error::{ErrorCode, IconError, Violation};
pub use generator::IconGenerator;
pub use icons::{BundledIcons, IconData, JsonIconProvider, VectorIconProvider};
pub use layout::{
    GRID_BORDER_RADIUS, GRID_ICON_PADDING, GRID_ICON_SIZE, GridLayout, PointPx, SizePx, layout,
    standard_layout,
};
pub use markdown::{MarkdownGenerator, MarkdownOptions, OutputFormat};
pub use resolver::{ResolveMode, ResolvedIcon, Resolver};
pub use theme::Theme;
pub use validate::{GridRequest, QueryParams, SingleIconRequest, validate_grid, validate_single};
