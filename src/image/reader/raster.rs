use image::{
    error::{DecodingError, ImageFormatHint},
    DynamicImage, ImageError, ImageFormat,
};

use super::super::{ImageReader, PixelBuffer};
use crate::{asset::ImageAsset, error::Error, Result};

/// Decodes any raster format enabled in the `image` crate into 8 bit RGBA.
pub struct RasterImageReader<'a> {
    asset: &'a ImageAsset,
}

impl<'a> RasterImageReader<'a> {
    pub fn new(asset: &'a ImageAsset) -> Self {
        Self { asset }
    }

    // Content wins over the declared type, the declared type is only a hint
    // for formats without a signature.
    fn detect_format(&self) -> Result<ImageFormat> {
        image::guess_format(self.asset.bytes())
            .or_else(|error| ImageFormat::from_mime_type(self.asset.mime_type()).ok_or(error))
            .map_err(Error::DecodeError)
    }

    fn decode(&self) -> Result<DynamicImage> {
        let format = self.detect_format()?;
        log::debug!("Decoding {} bytes as {:?}", self.asset.bytes().len(), format);
        image::load_from_memory_with_format(self.asset.bytes(), format).map_err(Error::DecodeError)
    }

    // Some formats (farbfeld, PNM) happily decode a header without dots.
    fn check_has_dots(width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            let reason = format!("decoded image has no dots ({}x{})", width, height);
            return Err(Error::DecodeError(ImageError::Decoding(DecodingError::new(
                ImageFormatHint::Unknown,
                reason,
            ))));
        }
        Ok(())
    }
}

impl ImageReader for RasterImageReader<'_> {
    fn read_image(&mut self) -> Result<PixelBuffer> {
        let decoded = self.decode()?.into_rgba8();
        let (width, height) = decoded.dimensions();
        Self::check_has_dots(width, height)?;
        PixelBuffer::from_raw_rgba(width, height, decoded.as_raw())
    }
}
