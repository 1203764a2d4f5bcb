//! WebP detection and JPEG normalization.
//!
//! A payload is treated as WebP when the resolved URL path ends in `.webp`
//! or the response declared `Content-Type: image/webp`. Detected payloads
//! are decoded, flattened to plain RGB (dropping alpha / expanding palette),
//! and re-encoded as JPEG; everything else is saved untouched.

use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use url::Url;

/// Decode or encode failure while normalizing a WebP payload.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ConvertError(#[from] image::ImageError);

/// True if the payload should be converted: URL path suffix `.webp`, or a
/// `image/webp` Content-Type (case-insensitive, media-type parameters
/// ignored).
pub fn is_webp(url: &Url, content_type: Option<&str>) -> bool {
    if url.path().ends_with(".webp") {
        return true;
    }
    content_type
        .and_then(|ct| ct.split(';').next())
        .map(|media| media.trim().eq_ignore_ascii_case("image/webp"))
        .unwrap_or(false)
}

/// Re-encodes image bytes as JPEG, flattening to RGB8 first.
///
/// JPEG has no alpha channel, so RGBA/LA/palette inputs are converted to
/// RGB before encoding.
pub fn webp_to_jpeg(bytes: &[u8]) -> Result<Vec<u8>, ConvertError> {
    let img = image::load_from_memory(bytes)?;
    let rgb = DynamicImage::ImageRgb8(img.into_rgb8());
    let mut out = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut out), ImageFormat::Jpeg)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::webp::WebPEncoder;
    use image::{ExtendedColorType, Rgba, RgbaImage};

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    fn sample_webp_rgba() -> Vec<u8> {
        let mut img = RgbaImage::new(4, 4);
        for p in img.pixels_mut() {
            *p = Rgba([200, 40, 40, 128]);
        }
        let mut out = Vec::new();
        WebPEncoder::new_lossless(&mut out)
            .encode(img.as_raw(), 4, 4, ExtendedColorType::Rgba8)
            .unwrap();
        out
    }

    #[test]
    fn detect_by_url_suffix() {
        assert!(is_webp(&url("https://example.com/a/pic.webp"), None));
        assert!(!is_webp(&url("https://example.com/a/pic.png"), None));
    }

    #[test]
    fn detect_by_content_type() {
        let u = url("https://example.com/img");
        assert!(is_webp(&u, Some("image/webp")));
        assert!(is_webp(&u, Some("Image/WebP")));
        assert!(is_webp(&u, Some("image/webp; charset=binary")));
        assert!(!is_webp(&u, Some("image/png")));
        assert!(!is_webp(&u, None));
    }

    #[test]
    fn suffix_wins_over_other_content_type() {
        assert!(is_webp(&url("https://example.com/pic.webp"), Some("application/octet-stream")));
    }

    #[test]
    fn webp_with_alpha_converts_to_jpeg() {
        let webp = sample_webp_rgba();
        let jpeg = webp_to_jpeg(&webp).unwrap();
        assert_ne!(jpeg, webp);
        assert_eq!(image::guess_format(&jpeg).unwrap(), ImageFormat::Jpeg);
        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
    }

    #[test]
    fn garbage_bytes_fail_to_convert() {
        assert!(webp_to_jpeg(b"not an image at all").is_err());
    }
}
