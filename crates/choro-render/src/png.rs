//! Rasterization of the SVG map and watermark compositing.

use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageBuffer, RgbaImage, imageops};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};
use tracing::{info, warn};

/// Renders an SVG document to an RGBA image at its intrinsic size.
pub fn rasterize_svg(svg: &str) -> Result<RgbaImage> {
    let tree = Tree::from_str(svg, &Options::default()).context("parse svg")?;
    let size = tree.size();
    let width = size.width().round() as u32;
    let height = size.height().round() as u32;
    let mut pixmap = Pixmap::new(width, height).context("allocate pixmap")?;
    resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());
    ImageBuffer::from_raw(width, height, pixmap.take()).context("pixmap to image buffer")
}

/// Overlays a watermark centered on the map, scaled down when wider than
/// 30% of the background. A missing or unreadable watermark file is a
/// warning, never an error.
pub fn apply_watermark(background: &mut RgbaImage, watermark_path: &Path) {
    if !watermark_path.exists() {
        return;
    }
    let watermark = match image::open(watermark_path) {
        Ok(img) => img.to_rgba8(),
        Err(error) => {
            warn!(path = %watermark_path.display(), %error, "failed to read watermark");
            return;
        }
    };
    let max_width = background.width() * 30 / 100;
    let watermark = if watermark.width() > max_width {
        let scale = f64::from(max_width) / f64::from(watermark.width());
        let height = (f64::from(watermark.height()) * scale).max(1.0) as u32;
        imageops::resize(
            &watermark,
            max_width.max(1),
            height,
            imageops::FilterType::Lanczos3,
        )
    } else {
        watermark
    };
    let x = i64::from(background.width().saturating_sub(watermark.width())) / 2;
    let y = i64::from(background.height().saturating_sub(watermark.height())) / 2;
    imageops::overlay(background, &watermark, x, y);
    info!(path = %watermark_path.display(), "watermark applied");
}

/// Renders the SVG to a PNG file, compositing the watermark when present.
pub fn write_static_map(svg: &str, out_png: &Path, watermark: Option<&Path>) -> Result<()> {
    if let Some(parent) = out_png.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir: {}", parent.display()))?;
    }
    let mut img = rasterize_svg(svg)?;
    if let Some(path) = watermark {
        apply_watermark(&mut img, path);
    }
    img.save(out_png)
        .with_context(|| format!("save png: {}", out_png.display()))?;
    info!(path = %out_png.display(), "static map written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rasterizes_a_small_document() {
        let svg = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"8\" height=\"4\">\
                   <rect width=\"8\" height=\"4\" fill=\"#ff0000\"/></svg>";
        let img = rasterize_svg(svg).unwrap();
        assert_eq!(img.dimensions(), (8, 4));
        assert_eq!(img.get_pixel(0, 0)[0], 255);
    }

    #[test]
    fn writes_png_to_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("maps/out.png");
        let svg = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"4\" height=\"4\">\
                   <rect width=\"4\" height=\"4\" fill=\"#00ff00\"/></svg>";
        write_static_map(svg, &out, None).unwrap();
        assert!(out.exists());
    }

    #[test]
    fn absent_watermark_is_a_no_op() {
        let mut img = RgbaImage::new(10, 10);
        apply_watermark(&mut img, Path::new("/no/such/watermark.png"));
        assert_eq!(img.dimensions(), (10, 10));
    }
}
