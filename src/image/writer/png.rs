use std::io::Write;

use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder};

use super::super::{check_dimensions_match_dots, ImageWriter, PixelBuffer};
use crate::{error::Error, Result};

pub struct PngImageWriter<T: Write> {
    writer: T,
}

impl<T: Write> PngImageWriter<T> {
    pub fn new(writer: T) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> T {
        self.writer
    }

    fn check_encodable(image: &PixelBuffer) -> Result<()> {
        check_dimensions_match_dots(image.width(), image.height(), image.dots().len())
            .map_err(|e| Error::EncodeError(e.to_string()))
    }
}

impl<T: Write> ImageWriter for PngImageWriter<T> {
    fn write_image(&mut self, image: &PixelBuffer) -> Result<()> {
        Self::check_encodable(image)?;
        let raw = image.to_raw_rgba();
        PngEncoder::new(&mut self.writer)
            .write_image(&raw, image.width(), image.height(), ExtendedColorType::Rgba8)
            .map_err(|e| Error::EncodeError(e.to_string()))?;
        self.writer
            .flush()
            .map_err(|e| Error::EncodeError(e.to_string()))
    }
}
