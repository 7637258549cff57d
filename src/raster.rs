//! PNG rasterisation of composed SVG documents using resvg.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::error::IconError;

/// Largest accepted raster edge, in pixels.
pub const MAX_RASTER_EDGE: u32 = 4096;

/// Renders an SVG document to an RGBA image, scaling its intrinsic size by
/// `scale`.
pub fn render_image(svg: &str, scale: f32) -> Result<RgbaImage, IconError> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(IconError::SvgGeneration(format!("invalid raster scale {scale}")));
    }

    let tree = Tree::from_str(svg, &Options::default())
        .map_err(|e| IconError::SvgGeneration(format!("unparseable SVG: {e}")))?;

    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;
    if width > MAX_RASTER_EDGE || height > MAX_RASTER_EDGE {
        return Err(IconError::SvgGeneration(format!(
            "raster size {width}x{height} exceeds {MAX_RASTER_EDGE}px"
        )));
    }

    let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
        IconError::SvgGeneration(format!("cannot allocate a {width}x{height} pixmap"))
    })?;
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    Ok(pixmap_to_rgba_image(&pixmap))
}

/// Renders an SVG document to PNG bytes.
pub fn render_png(svg: &str, scale: f32) -> Result<Vec<u8>, IconError> {
    let image = render_image(svg, scale)?;
    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| IconError::SvgGeneration(format!("PNG encoding failed: {e}")))?;
    log::debug!("Rasterised {}x{} PNG ({} bytes)", image.width(), image.height(), png.len());
    Ok(png)
}

/// Converts a tiny_skia Pixmap (premultiplied) to a straight-alpha image.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    RgbaImage::from_fn(pixmap.width(), pixmap.height(), |x, y| {
        pixmap
            .pixel(x, y)
            .map(|p| Rgba(unpremultiply(p.red(), p.green(), p.blue(), p.alpha())))
            .unwrap_or(Rgba([0, 0, 0, 0]))
    })
}

fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> [u8; 4] {
    if a == 0 {
        return [0, 0, 0, 0];
    }
    let a_f = a as f32 / 255.0;
    let channel = |c: u8| (c as f32 / a_f).round().min(255.0) as u8;
    [channel(r), channel(g), channel(b), a]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose_single;
    use crate::resolver::ResolvedIcon;

    fn fallback_svg(size: u32) -> String {
        compose_single(&ResolvedIcon::fallback(), "#ff0000", "#0d1117", size, 0)
    }

    #[test]
    fn renders_at_intrinsic_size() {
        let img = render_image(&fallback_svg(48), 1.0).unwrap();
        assert_eq!(img.dimensions(), (48, 48));

        // Corner is background, center is the icon fill.
        assert_eq!(img.get_pixel(0, 0).0, [0x0d, 0x11, 0x17, 255]);
        assert_eq!(img.get_pixel(24, 24).0, [255, 0, 0, 255]);
    }

    #[test]
    fn scale_multiplies_dimensions() {
        let img = render_image(&fallback_svg(32), 2.0).unwrap();
        assert_eq!(img.dimensions(), (64, 64));
    }

    #[test]
    fn png_has_signature() {
        let png = render_png(&fallback_svg(16), 1.0).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn rejects_bad_input() {
        assert!(render_png("not svg", 1.0).is_err());
        assert!(render_png(&fallback_svg(16), 0.0).is_err());
        assert!(render_png(&fallback_svg(16), f32::NAN).is_err());
        let err = render_png(&fallback_svg(256), 100.0).unwrap_err();
        assert_eq!(err.code(), crate::error::ErrorCode::SvgGenerationFailed);
    }

    #[test]
    fn unpremultiply_restores_color() {
        assert_eq!(unpremultiply(0, 0, 0, 0), [0, 0, 0, 0]);
        assert_eq!(unpremultiply(128, 0, 0, 128), [255, 0, 0, 128]);
        assert_eq!(unpremultiply(10, 20, 30, 255), [10, 20, 30, 255]);
    }
}
