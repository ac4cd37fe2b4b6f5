// SPDX-License-Identifier: MPL-2.0
//! Encoded image formats accepted by the editor.

/// Upload and AI exchange formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMime {
    Png,
    Jpeg,
}

impl ImageMime {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ImageMime::Png => "image/png",
            ImageMime::Jpeg => "image/jpeg",
        }
    }

    /// Parses a MIME string as sent by an HTTP service.
    #[must_use]
    pub fn from_mime_str(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/png" => Some(ImageMime::Png),
            "image/jpeg" | "image/jpg" => Some(ImageMime::Jpeg),
            _ => None,
        }
    }

    /// Detects the format from the leading magic bytes.
    #[must_use]
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
            Some(ImageMime::Png)
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(ImageMime::Jpeg)
        } else {
            None
        }
    }
}

/// Encoded image bytes tagged with their format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    pub mime: ImageMime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniff_recognizes_png_and_jpeg() {
        assert_eq!(
            ImageMime::sniff(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0]),
            Some(ImageMime::Png)
        );
        assert_eq!(ImageMime::sniff(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageMime::Jpeg));
        assert_eq!(ImageMime::sniff(b"GIF89a"), None);
    }

    #[test]
    fn mime_strings_parse_case_insensitively() {
        assert_eq!(ImageMime::from_mime_str("IMAGE/PNG"), Some(ImageMime::Png));
        assert_eq!(ImageMime::from_mime_str("image/jpg"), Some(ImageMime::Jpeg));
        assert_eq!(ImageMime::from_mime_str("image/webp"), None);
    }
}
