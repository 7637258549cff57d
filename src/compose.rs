//! SVG document composition.
//!
//! Every composed document has the same shape: an outer `<svg>` with
//! explicit `width`, `height` and `viewBox`, a background `<rect>` covering
//! the canvas, then one `<g transform="translate(x, y)">` per icon wrapping a
//! nested `<svg viewBox="0 0 24 24">` that scales the icon's native 24x24
//! path into its cell. Output is self-contained: no stylesheets, scripts or
//! external references.

use crate::error::IconError;
use crate::layout::{GridLayout, PointPx, SizePx};
use crate::resolver::ResolvedIcon;
use crate::svg::{Element, SVG_NAMESPACE, px};

/// Native coordinate space of every vector icon.
pub const ICON_VIEWBOX: &str = "0 0 24 24";

/// Corner radius of single-icon backgrounds.
pub const SINGLE_BORDER_RADIUS: u32 = 4;

/// One positioned icon inside a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub icon: ResolvedIcon,
    /// Fill color, including the leading `#`.
    pub color: String,
    /// Top-left corner of the icon.
    pub position: PointPx,
}

impl GridCell {
    pub fn new(icon: ResolvedIcon, color: impl Into<String>, position: PointPx) -> Self {
        Self {
            icon,
            color: color.into(),
            position,
        }
    }
}

/// Edge of the glyph drawn by [`compose_single`].
pub const SINGLE_GLYPH_SIZE: u32 = 24;

/// Composes a single icon centered on a `size` x `size` canvas.
///
/// The glyph is drawn at [`SINGLE_GLYPH_SIZE`] whatever the canvas size,
/// shrinking only on canvases smaller than that so it is never clipped.
pub fn compose_single(
    icon: &ResolvedIcon,
    color: &str,
    background: &str,
    size: u32,
    border_radius: u32,
) -> String {
    let glyph = SINGLE_GLYPH_SIZE.min(size);
    let offset = (size - glyph) as f32 / 2.0;

    document(SizePx::square(size), background, border_radius)
        .child(icon_group(
            &icon.vector_path,
            color,
            (offset, offset),
            glyph,
        ))
        .to_markup()
}

/// Composes positioned icons onto a `dimensions` canvas.
///
/// Fails if the canvas is empty or any cell would fall outside it.
pub fn compose_grid(
    cells: &[GridCell],
    dimensions: SizePx,
    background: &str,
    cell_size: u32,
    border_radius: u32,
) -> Result<String, IconError> {
    if dimensions.width == 0 || dimensions.height == 0 {
        return Err(IconError::SvgGeneration(format!(
            "canvas is {}x{}",
            dimensions.width, dimensions.height
        )));
    }

    let mut root = document(dimensions, background, border_radius);
    for (index, cell) in cells.iter().enumerate() {
        let PointPx { x, y } = cell.position;
        if x.saturating_add(cell_size) > dimensions.width
            || y.saturating_add(cell_size) > dimensions.height
        {
            return Err(IconError::SvgGeneration(format!(
                "icon {index} at ({x}, {y}) does not fit a {}x{} canvas",
                dimensions.width, dimensions.height
            )));
        }
        root = root.child(icon_group(
            &cell.icon.vector_path,
            &cell.color,
            (x as f32, y as f32),
            cell_size,
        ));
    }
    Ok(root.to_markup())
}

/// Composes a grid from a computed layout, pairing icons with positions in
/// order.
pub fn compose_layout(
    icons: impl IntoIterator<Item = (ResolvedIcon, String)>,
    layout: &GridLayout,
    background: &str,
    cell_size: u32,
    border_radius: u32,
) -> Result<String, IconError> {
    let cells: Vec<GridCell> = icons
        .into_iter()
        .zip(&layout.positions)
        .map(|((icon, color), &position)| GridCell::new(icon, color, position))
        .collect();
    if cells.len() != layout.len() {
        return Err(IconError::SvgGeneration(format!(
            "{} icons for {} grid positions",
            cells.len(),
            layout.len()
        )));
    }
    compose_grid(&cells, layout.size(), background, cell_size, border_radius)
}

/// The placeholder returned for an empty icon list.
pub fn compose_empty() -> String {
    Element::new("svg")
        .attr("xmlns", SVG_NAMESPACE)
        .attr("width", 100)
        .attr("height", 100)
        .attr("viewBox", "0 0 100 100")
        .child(
            Element::new("text")
                .attr("x", 50)
                .attr("y", 50)
                .attr("text-anchor", "middle")
                .attr("fill", "#888")
                .attr("font-size", 12)
                .text("No icons"),
        )
        .to_markup()
}

fn document(size: SizePx, background: &str, border_radius: u32) -> Element {
    Element::new("svg")
        .attr("xmlns", SVG_NAMESPACE)
        .attr("width", size.width)
        .attr("height", size.height)
        .attr("viewBox", format!("0 0 {} {}", size.width, size.height))
        .child(
            Element::new("rect")
                .attr("width", size.width)
                .attr("height", size.height)
                .attr("fill", background)
                .attr_opt("rx", (border_radius > 0).then_some(border_radius)),
        )
}

fn icon_group(path: &str, color: &str, (x, y): (f32, f32), icon_size: u32) -> Element {
    Element::new("g")
        .attr("transform", format!("translate({}, {})", px(x), px(y)))
        .child(
            Element::new("svg")
                .attr("width", icon_size)
                .attr("height", icon_size)
                .attr("viewBox", ICON_VIEWBOX)
                .child(Element::new("path").attr("fill", color).attr("d", path)),
        )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{GRID_BORDER_RADIUS, GRID_ICON_SIZE, standard_layout};
    use crate::resolver::resolve;
    use resvg::usvg::{Options, Tree};

    fn parse(svg: &str) -> Tree {
        Tree::from_str(svg, &Options::default()).expect("composed SVG should parse")
    }

    #[test]
    fn single_icon_structure() {
        let icon = resolve("react");
        let svg = compose_single(&icon, "#61DAFB", "#0d1117", 48, SINGLE_BORDER_RADIUS);

        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="48" height="48" viewBox="0 0 48 48">"#
        ));
        assert!(svg.contains(r##"<rect width="48" height="48" fill="#0d1117" rx="4"/>"##));
        assert!(svg.contains(r#"<g transform="translate(12, 12)">"#));
        assert!(svg.contains(r#"<svg width="24" height="24" viewBox="0 0 24 24">"#));
        assert!(svg.contains(r##"<path fill="#61DAFB" d="M"##));
        assert!(svg.ends_with("</svg>"));

        let tree = parse(&svg);
        assert_eq!(tree.size().width(), 48.0);
        assert_eq!(tree.size().height(), 48.0);
    }

    #[test]
    fn odd_sizes_center_on_half_pixels() {
        let svg = compose_single(&ResolvedIcon::fallback(), "#000000", "#ffffff", 49, 4);
        assert!(svg.contains(r#"translate(12.5, 12.5)"#));
        parse(&svg);
    }

    #[test]
    fn glyph_size_is_fixed() {
        for (size, offset) in [(64, "20"), (256, "116"), (24, "0")] {
            let svg = compose_single(&ResolvedIcon::fallback(), "#000000", "#ffffff", size, 4);
            assert!(svg.contains(r#"<svg width="24" height="24" viewBox="0 0 24 24">"#));
            assert!(svg.contains(&format!("translate({offset}, {offset})")), "size={size}");
        }
    }

    #[test]
    fn glyph_shrinks_on_small_canvases() {
        let svg = compose_single(&ResolvedIcon::fallback(), "#000000", "#ffffff", 16, 4);
        assert!(svg.contains(r#"<svg width="16" height="16" viewBox="0 0 24 24">"#));
        assert!(svg.contains("translate(0, 0)"));
        parse(&svg);
    }

    #[test]
    fn zero_radius_omits_rx() {
        let svg = compose_single(&ResolvedIcon::fallback(), "#000000", "#ffffff", 32, 0);
        assert!(!svg.contains("rx="));
    }

    #[test]
    fn grid_matches_layout_dimensions() {
        let ids = ["react", "rust", "docker", "postgres", "ts", "nope"];
        for per_line in [5, 10] {
            let layout = standard_layout(ids.len(), per_line);
            let icons = ids.iter().map(|id| (resolve(id), "#ffffff".to_string()));
            let svg =
                compose_layout(icons, &layout, "#0d1117", GRID_ICON_SIZE, GRID_BORDER_RADIUS)
                    .unwrap();

            let tree = parse(&svg);
            assert_eq!(tree.size().width(), layout.width as f32);
            assert_eq!(tree.size().height(), layout.height as f32);
            assert_eq!(svg.matches("<g transform=").count(), ids.len());
            assert_eq!(svg.matches("<svg").count(), svg.matches("</svg>").count());
        }
    }

    #[test]
    fn grid_preserves_order_and_duplicates() {
        let layout = standard_layout(3, 10);
        let icons = [
            (resolve("react"), "#111111".to_string()),
            (resolve("rust"), "#222222".to_string()),
            (resolve("react"), "#333333".to_string()),
        ];
        let svg = compose_layout(icons, &layout, "#0d1117", GRID_ICON_SIZE, 8).unwrap();

        let first = svg.find("#111111").unwrap();
        let second = svg.find("#222222").unwrap();
        let third = svg.find("#333333").unwrap();
        assert!(first < second && second < third);
        assert!(svg.contains(r#"translate(4, 4)"#));
        assert!(svg.contains(r#"translate(56, 4)"#));
        assert!(svg.contains(r#"translate(108, 4)"#));
    }

    #[test]
    fn grid_rejects_cells_outside_canvas() {
        let cells = [GridCell::new(
            ResolvedIcon::fallback(),
            "#000000",
            PointPx::new(40, 4),
        )];
        let err = compose_grid(&cells, SizePx::new(52, 52), "#ffffff", 48, 8).unwrap_err();
        assert!(matches!(err, IconError::SvgGeneration(_)));
    }

    #[test]
    fn grid_rejects_empty_canvas() {
        assert!(compose_grid(&[], SizePx::new(0, 0), "#ffffff", 48, 8).is_err());
    }

    #[test]
    fn layout_and_icons_must_agree() {
        let layout = standard_layout(2, 10);
        let icons = [(ResolvedIcon::fallback(), "#000000".to_string())];
        assert!(compose_layout(icons, &layout, "#ffffff", 48, 8).is_err());
    }

    #[test]
    fn empty_placeholder() {
        let svg = compose_empty();
        assert!(svg.contains(">No icons</text>"));
        let tree = parse(&svg);
        assert_eq!(tree.size().width(), 100.0);
    }

    #[test]
    fn path_data_is_escaped() {
        let icon = ResolvedIcon {
            vector_path: r#"M0 0"/><script/>"#.to_string(),
            color_hex: "000000".to_string(),
            title: "x".to_string(),
        };
        let svg = compose_single(&icon, "#000000", "#ffffff", 48, 4);
        assert!(!svg.contains("<script"));
        assert!(svg.contains("&quot;/&gt;&lt;script/&gt;"));
    }

    #[test]
    fn composition_is_deterministic() {
        let icon = resolve("docker");
        assert_eq!(
            compose_single(&icon, "#2496ED", "#0d1117", 64, 4),
            compose_single(&icon, "#2496ED", "#0d1117", 64, 4)
        );
    }
}
