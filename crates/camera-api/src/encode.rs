use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::{CameraError, Result};

/// Encode `img` into the format named by an image MIME type such as
/// `"image/png"` or `"image/jpeg"`.
///
/// Pure read-and-transform; safe to call concurrently on a shared raster.
pub fn encode_image(img: &RgbaImage, mime_type: &str) -> Result<Vec<u8>> {
    let format = ImageFormat::from_mime_type(mime_type)
        .ok_or_else(|| CameraError::Encoding(format!("unsupported mime type: {mime_type}")))?;
    let mut buf = Cursor::new(Vec::new());
    match format {
        // The JPEG encoder rejects rasters with an alpha channel.
        ImageFormat::Jpeg => DynamicImage::ImageRgba8(img.clone())
            .into_rgb8()
            .write_to(&mut buf, format),
        _ => img.write_to(&mut buf, format),
    }
    .map_err(|e| CameraError::Encoding(e.to_string()))?;
    Ok(buf.into_inner())
}
