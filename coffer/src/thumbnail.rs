//! Fixed-size thumbnail derivation for inline image submissions.

use crate::errors::Result;
use image::ImageFormat;
use image::imageops::FilterType;
use std::io::Cursor;

/// Decode `data` as an image and scale it to exactly `width` x `height`,
/// ignoring the source aspect ratio. Returns the PNG-encoded result.
///
/// Decoding and resampling are CPU-bound. Callers on an async runtime must
/// run this on a blocking worker (the store does).
pub fn render_thumbnail(data: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let image = image::load_from_memory(data)?;
    let resized = image.resize_exact(width, height, FilterType::Triangle);

    let mut encoded = Cursor::new(Vec::new());
    resized.write_to(&mut encoded, ImageFormat::Png)?;
    Ok(encoded.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    fn sample_png(width: u32, height: u32) -> Vec<u8> {
        let pixels = image::RgbImage::from_pixel(width, height, image::Rgb([200, 40, 40]));
        let mut out = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(pixels)
            .write_to(&mut out, ImageFormat::Png)
            .expect("encoding a fresh buffer cannot fail");
        out.into_inner()
    }

    #[test]
    fn output_has_exactly_the_requested_dimensions() {
        // Deliberately non-square input: the resize must not preserve aspect
        let thumb = render_thumbnail(&sample_png(7, 3), 100, 100).unwrap();

        let decoded = image::load_from_memory(&thumb).unwrap();
        assert_eq!(decoded.dimensions(), (100, 100));
    }

    #[test]
    fn output_is_png_encoded() {
        let thumb = render_thumbnail(&sample_png(4, 4), 100, 100).unwrap();
        assert_eq!(image::guess_format(&thumb).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn undecodable_payloads_fail() {
        let err = render_thumbnail(b"definitely not an image", 100, 100).unwrap_err();
        assert!(err.is_storage());
    }
}
