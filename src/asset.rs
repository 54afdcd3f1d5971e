use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine};
use image::ImageFormat;

use crate::{error::Error, Result};

pub const PNG_MIME_TYPE: &str = "image/png";
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

const IMAGE_MIME_TYPE_PREFIX: &str = "image/";
const DATA_URI_SCHEME: &str = "data:";
const DATA_URI_BASE64_MARKER: &str = ";base64";

/// Encoded image bytes together with the MIME type they were declared as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageAsset {
    bytes: Vec<u8>,
    mime_type: String,
}

impl ImageAsset {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Tags the bytes with the MIME type of the file extension, or of the
    /// sniffed content if the extension is unknown.
    pub fn from_path_and_bytes(path: &Path, bytes: Vec<u8>) -> Self {
        let mime_type = Self::mime_type_for_path(path, &bytes);
        Self::new(bytes, mime_type)
    }

    pub fn mime_type_for_path(path: &Path, bytes: &[u8]) -> String {
        ImageFormat::from_path(path)
            .or_else(|_| image::guess_format(bytes))
            .map(|format| format.to_mime_type().to_owned())
            .unwrap_or_else(|_| FALLBACK_MIME_TYPE.to_owned())
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with(IMAGE_MIME_TYPE_PREFIX)
    }

    pub fn ensure_is_image(&self) -> Result<()> {
        if !self.is_image() {
            log::warn!("Rejecting input of type '{}'", self.mime_type);
            return Err(Error::InvalidInputType(self.mime_type.clone()));
        }
        Ok(())
    }

    pub fn to_data_uri(&self) -> String {
        format!(
            "{}{}{},{}",
            DATA_URI_SCHEME,
            self.mime_type,
            DATA_URI_BASE64_MARKER,
            STANDARD.encode(&self.bytes)
        )
    }

    pub fn from_data_uri(data_uri: &str) -> Result<Self> {
        let rest = data_uri
            .strip_prefix(DATA_URI_SCHEME)
            .ok_or(Error::InvalidDataUri("missing 'data:' scheme"))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or(Error::InvalidDataUri("missing ',' separator"))?;
        let mime_type = header
            .strip_suffix(DATA_URI_BASE64_MARKER)
            .ok_or(Error::InvalidDataUri("payload is not base64 encoded"))?;
        if mime_type.is_empty() {
            return Err(Error::InvalidDataUri("missing MIME type"));
        }
        let bytes = STANDARD
            .decode(payload)
            .map_err(|_| Error::InvalidDataUri("malformed base64 payload"))?;
        Ok(Self::new(bytes, mime_type))
    }
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use super::{ImageAsset, FALLBACK_MIME_TYPE, PNG_MIME_TYPE};
    use crate::error::Error;

    const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn accept_image_mime_types_only() {
        assert!(ImageAsset::new(Vec::new(), "image/png").is_image());
        assert!(ImageAsset::new(Vec::new(), "image/webp").is_image());
        assert!(!ImageAsset::new(Vec::new(), "text/plain").is_image());
        assert!(!ImageAsset::new(Vec::new(), "application/image").is_image());
        assert!(!ImageAsset::new(Vec::new(), "").is_image());
    }

    #[test]
    fn reject_non_image_with_invalid_input_type() {
        let asset = ImageAsset::new(b"hello".to_vec(), "text/plain");
        match asset.ensure_is_image() {
            Err(Error::InvalidInputType(mime_type)) => assert_eq!(mime_type, "text/plain"),
            other => panic!("Expected InvalidInputType, got {:?}", other),
        }
    }

    #[test]
    fn render_data_uri() {
        let asset = ImageAsset::new(b"abc".to_vec(), PNG_MIME_TYPE);
        assert_eq!(asset.to_data_uri(), "data:image/png;base64,YWJj");
    }

    #[test]
    fn parse_data_uri() {
        let asset = ImageAsset::from_data_uri("data:image/gif;base64,YWJjZA==")
            .expect("Data URI should be parsed");
        assert_eq!(asset.mime_type(), "image/gif");
        assert_eq!(asset.bytes(), b"abcd");
        assert_eq!(
            ImageAsset::from_data_uri(&asset.to_data_uri()).expect("Data URI should be parsed"),
            asset
        );
    }

    #[test]
    fn reject_malformed_data_uris() {
        for data_uri in [
            "image/png;base64,YWJj",
            "data:image/png;base64",
            "data:image/png,YWJj",
            "data:;base64,YWJj",
            "data:image/png;base64,***",
        ] {
            let result = ImageAsset::from_data_uri(data_uri);
            assert!(
                matches!(result, Err(Error::InvalidDataUri(_))),
                "'{}' should be rejected",
                data_uri
            );
        }
    }

    #[test]
    fn mime_type_from_extension() {
        let mime_type = ImageAsset::mime_type_for_path(Path::new("photo.JPG"), &[]);
        assert_eq!(mime_type, "image/jpeg");
    }

    #[test]
    fn mime_type_from_content_if_extension_unknown() {
        let mime_type = ImageAsset::mime_type_for_path(Path::new("upload.bin"), PNG_SIGNATURE);
        assert_eq!(mime_type, PNG_MIME_TYPE);
    }

    #[test]
    fn mime_type_falls_back_to_octet_stream() {
        let mime_type = ImageAsset::mime_type_for_path(Path::new("notes.txt"), b"plain text");
        assert_eq!(mime_type, FALLBACK_MIME_TYPE);
    }
}
