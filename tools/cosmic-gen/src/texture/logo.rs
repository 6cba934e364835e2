//! Logo: wallpaper with ring outlines and a two-line title
//!
//! The rings and text are described as a small SVG document, rasterised
//! with resvg into a transparent overlay, and alpha-composited onto a
//! square wallpaper. Text is shaped with a font file loaded from disk; the
//! font is not bundled.

use std::fmt::Write as _;
use std::path::Path;

use resvg::{tiny_skia, usvg};

use super::{create_wallpaper, TextureBuffer};
use crate::error::{GenError, Result};

/// System font used for the title when no other path is given
pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

/// Arm rotation of the logo's wallpaper background
const LOGO_ROTATION: f32 = 0.3;

/// Ring outline: bounding box in fractions of the logo size, stroke width
/// fraction and stroke alpha. Strokes are drawn inside the box.
struct Ring {
    bounds: [f32; 4],
    stroke: f32,
    alpha: u8,
}

const RINGS: [Ring; 2] = [
    Ring {
        bounds: [0.08, 0.08, 0.92, 0.92],
        stroke: 0.02,
        alpha: 200,
    },
    Ring {
        bounds: [0.18, 0.24, 0.82, 0.88],
        stroke: 0.018,
        alpha: 180,
    },
];

/// Title lines drawn on the logo
#[derive(Debug, Clone)]
pub struct LogoText {
    pub title: String,
    pub subtitle: String,
}

impl Default for LogoText {
    fn default() -> Self {
        Self {
            title: "COSMIC".to_string(),
            subtitle: "SPECTRUM".to_string(),
        }
    }
}

/// Render the square logo
///
/// Fails with [`GenError::Font`] if `font_path` cannot be read or holds no
/// usable font face.
pub fn create_logo(size: u32, font_path: &Path, text: &LogoText) -> Result<TextureBuffer> {
    let mut base = create_wallpaper(size, size, LOGO_ROTATION)?;

    let mut options = usvg::Options::default();
    options
        .fontdb_mut()
        .load_font_file(font_path)
        .map_err(|e| GenError::Font {
            path: font_path.to_path_buf(),
            reason: e.to_string(),
        })?;
    let family = options
        .fontdb
        .faces()
        .next()
        .and_then(|face| face.families.first())
        .map(|(name, _)| name.clone())
        .ok_or_else(|| GenError::Font {
            path: font_path.to_path_buf(),
            reason: "no font faces found".to_string(),
        })?;

    let svg = overlay_svg(size, &family, text);
    let tree =
        usvg::Tree::from_str(&svg, &options).map_err(|e| GenError::Overlay(e.to_string()))?;

    let mut pixmap = tiny_skia::Pixmap::new(size, size).ok_or(GenError::InvalidDimensions {
        width: size,
        height: size,
    })?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    composite_premultiplied(&mut base, pixmap.data());
    tracing::debug!(size, font = %font_path.display(), "logo rendered");
    Ok(base)
}

/// Describe the rings and title as an SVG document of `size` x `size`
fn overlay_svg(size: u32, family: &str, text: &LogoText) -> String {
    let s = size as f32;
    let font_size = (s * 0.14).floor();

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    );

    for ring in &RINGS {
        let [x0, y0, x1, y1] = ring.bounds.map(|f| f * s);
        let stroke = (s * ring.stroke).floor();
        let rx = ((x1 - x0) / 2.0 - stroke / 2.0).max(0.0);
        let ry = ((y1 - y0) / 2.0 - stroke / 2.0).max(0.0);
        let _ = write!(
            svg,
            r#"<ellipse cx="{}" cy="{}" rx="{rx}" ry="{ry}" fill="none" stroke="rgb(255,255,255)" stroke-opacity="{}" stroke-width="{stroke}"/>"#,
            (x0 + x1) / 2.0,
            (y0 + y1) / 2.0,
            ring.alpha as f32 / 255.0,
        );
    }

    let lines = [
        (&text.title, 0.36, "rgb(255,242,255)"),
        (&text.subtitle, 0.52, "rgb(223,200,255)"),
    ];
    for (line, top, fill) in lines {
        let _ = write!(
            svg,
            r#"<text x="{}" y="{}" font-family="{}" font-weight="bold" font-size="{font_size}" text-anchor="middle" dominant-baseline="hanging" fill="{fill}">{}</text>"#,
            s / 2.0,
            s * top,
            escape_xml(family),
            escape_xml(line),
        );
    }

    svg.push_str("</svg>");
    svg
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Source-over composite of a premultiplied RGBA overlay onto the buffer
fn composite_premultiplied(base: &mut TextureBuffer, overlay: &[u8]) {
    for (dst, src) in base.pixels.chunks_exact_mut(4).zip(overlay.chunks_exact(4)) {
        let sa = src[3] as f32 / 255.0;
        if sa == 0.0 {
            continue;
        }
        let da = dst[3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        for c in 0..3 {
            let premul = src[c] as f32 / 255.0 + dst[c] as f32 / 255.0 * da * (1.0 - sa);
            dst[c] = (premul / out_a * 255.0).round().clamp(0.0, 255.0) as u8;
        }
        dst[3] = (out_a * 255.0).round() as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_font_is_an_error() {
        let err = create_logo(
            64,
            Path::new("/nonexistent/fonts/NoSuchFont.ttf"),
            &LogoText::default(),
        )
        .unwrap_err();
        assert!(matches!(err, GenError::Font { .. }));
        assert!(err.to_string().contains("NoSuchFont.ttf"));
    }

    #[test]
    fn test_overlay_svg_contents() {
        let svg = overlay_svg(512, "DejaVu Sans", &LogoText::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<ellipse").count(), 2);
        assert!(svg.contains(">COSMIC</text>"));
        assert!(svg.contains(">SPECTRUM</text>"));
        // floor(512 * 0.14)
        assert!(svg.contains(r#"font-size="71""#));
    }

    #[test]
    fn test_overlay_svg_escapes_text() {
        let text = LogoText {
            title: "A & B".to_string(),
            subtitle: "<x>".to_string(),
        };
        let svg = overlay_svg(128, "Sans", &text);
        assert!(svg.contains("A &amp; B"));
        assert!(svg.contains("&lt;x&gt;"));
    }

    #[test]
    fn test_composite_transparent_overlay_is_noop() {
        let mut base = TextureBuffer::filled(2, 2, [10, 20, 30, 255]);
        let before = base.clone();
        composite_premultiplied(&mut base, &[0u8; 16]);
        assert_eq!(base, before);
    }

    #[test]
    fn test_composite_blends_premultiplied() {
        let mut base = TextureBuffer::filled(1, 1, [0, 0, 0, 255]);
        // 50% white, premultiplied
        composite_premultiplied(&mut base, &[128, 128, 128, 128]);
        let p = base.get_pixel(0, 0);
        assert_eq!(p[3], 255);
        assert!((p[0] as i32 - 128).abs() <= 1);
    }

    #[test]
    fn test_composite_opaque_overlay_replaces() {
        let mut base = TextureBuffer::filled(1, 1, [10, 10, 10, 255]);
        composite_premultiplied(&mut base, &[200, 100, 50, 255]);
        assert_eq!(base.get_pixel(0, 0), [200, 100, 50, 255]);
    }

    #[test]
    fn test_logo_with_system_font() {
        let font = Path::new(DEFAULT_FONT_PATH);
        if !font.exists() {
            return;
        }
        let logo = create_logo(96, font, &LogoText::default()).unwrap();
        let plain = create_wallpaper(96, 96, LOGO_ROTATION).unwrap();
        assert_eq!((logo.width, logo.height), (96, 96));
        assert_ne!(logo, plain);
    }
}
