//! Avatar compression
//!
//! Raster avatars are decoded with the `image` crate, scaled down to fit
//! the requested box and re-encoded. SVGs are rendered with `resvg` at a
//! size inside the box and stored as PNG. Either way the result is a
//! `data:` URI the backend stores as-is.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, RgbaImage};
use plugindesk_core::{DeskError, DeskResult, PickedFile};
use resvg::{tiny_skia, usvg};
use std::io::Cursor;

use crate::dialog::ImageCompressor;

/// JPEG quality used when re-encoding photos
pub const JPEG_QUALITY: u8 = 80;

/// Compress an avatar file into a `data:` URI no larger than the given box.
pub fn compress_avatar(file: &PickedFile, max_width: u32, max_height: u32) -> DeskResult<String> {
    let ext = file.extension().unwrap_or_default();

    match ext.as_str() {
        "svg" => {
            let img = rasterize_svg(file, max_width, max_height)?;
            encode_png(&img)
        }
        "jpg" | "jpeg" => {
            let img = decode(file)?;
            let img = fit_within(img, max_width, max_height);
            let mut buf = Vec::new();
            let encoder = JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY);
            DynamicImage::ImageRgb8(img.to_rgb8())
                .write_with_encoder(encoder)
                .map_err(|e| DeskError::image(e.to_string()))?;
            Ok(data_uri("image/jpeg", &buf))
        }
        "png" => {
            let img = decode(file)?;
            encode_png(&fit_within(img, max_width, max_height))
        }
        _ => Err(DeskError::unsupported_image(
            &file.name,
            "only jpg, png and svg images can be used as avatars",
        )),
    }
}

fn decode(file: &PickedFile) -> DeskResult<DynamicImage> {
    image::load_from_memory(&file.bytes)
        .map_err(|e| DeskError::unsupported_image(&file.name, e.to_string()))
}

/// Scale down, keeping the aspect ratio, only when the image exceeds the box
fn fit_within(img: DynamicImage, max_width: u32, max_height: u32) -> DynamicImage {
    if img.width() <= max_width && img.height() <= max_height {
        img
    } else {
        img.resize(max_width, max_height, FilterType::Lanczos3)
    }
}

/// Render an SVG at its own size, shrunk to fit the box when larger
fn rasterize_svg(file: &PickedFile, max_width: u32, max_height: u32) -> DeskResult<DynamicImage> {
    let tree = usvg::Tree::from_data(&file.bytes, &usvg::Options::default())
        .map_err(|e| DeskError::unsupported_image(&file.name, e.to_string()))?;

    let size = tree.size();
    let scale = (max_width as f32 / size.width())
        .min(max_height as f32 / size.height())
        .min(1.0);
    let width = ((size.width() * scale).round() as u32).clamp(1, max_width.max(1));
    let height = ((size.height() * scale).round() as u32).clamp(1, max_height.max(1));

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| DeskError::image(format!("cannot render {}x{} pixmap", width, height)))?;
    let transform = tiny_skia::Transform::from_scale(
        width as f32 / size.width(),
        height as f32 / size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha
    let rgba: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    let img = RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| DeskError::image("rendered SVG has the wrong pixel count"))?;
    Ok(DynamicImage::ImageRgba8(img))
}

fn encode_png(img: &DynamicImage) -> DeskResult<String> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| DeskError::image(e.to_string()))?;
    Ok(data_uri("image/png", &buf))
}

fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// [`ImageCompressor`] backed by [`compress_avatar`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AvatarCompressor;

#[async_trait(?Send)]
impl ImageCompressor for AvatarCompressor {
    async fn compress(
        &self,
        file: &PickedFile,
        max_width: u32,
        max_height: u32,
    ) -> DeskResult<String> {
        let result = compress_avatar(file, max_width, max_height);
        if let Err(err) = &result {
            tracing::warn!(file = %file.name, error = %err, "avatar compression failed");
        }
        result
    }
}

// ============================================================================
// Tests
// ============================================================================
