use crate::{color::RGBAColorFormat, error::Error, Result};

pub mod reader;
pub mod transformer;
pub mod writer;

const CHANNELS_PER_DOT: usize = 4;

pub trait ImageReader {
    fn read_image(&mut self) -> Result<PixelBuffer>;
}

pub trait ImageWriter {
    fn write_image(&mut self, image: &PixelBuffer) -> Result<()>;
}

/// Row-major RGBA dots, top-to-bottom and left-to-right, 8 bits per channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    dots: Vec<RGBAColorFormat>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, dots: Vec<RGBAColorFormat>) -> Result<Self> {
        check_dimensions_match_dots(width, height, dots.len())?;
        Ok(Self {
            width,
            height,
            dots,
        })
    }

    /// Builds a buffer from interleaved `r, g, b, a` bytes.
    pub fn from_raw_rgba(width: u32, height: u32, raw: &[u8]) -> Result<Self> {
        let remainder = raw.len() % CHANNELS_PER_DOT;
        if remainder != 0 {
            return Err(Error::IncompleteDotParsed(remainder));
        }
        let dots = raw
            .chunks_exact(CHANNELS_PER_DOT)
            .map(|channels| RGBAColorFormat::new(channels[0], channels[1], channels[2], channels[3]))
            .collect();
        Self::new(width, height, dots)
    }

    pub fn to_raw_rgba(&self) -> Vec<u8> {
        let mut raw = Vec::with_capacity(self.dots.len() * CHANNELS_PER_DOT);
        for &dot in &self.dots {
            raw.extend_from_slice(&<[u8; 4]>::from(dot));
        }
        raw
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dots(&self) -> &[RGBAColorFormat] {
        &self.dots
    }

    pub fn dot(&self, column_index: u32, row_index: u32) -> Option<RGBAColorFormat> {
        if column_index >= self.width || row_index >= self.height {
            return None;
        }
        let index = row_index as usize * self.width as usize + column_index as usize;
        self.dots.get(index).copied()
    }
}

pub(crate) fn check_dimensions_match_dots(
    width: u32,
    height: u32,
    number_of_dots: usize,
) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::ZeroSizedImage(width, height));
    }
    let expected_number_of_dots = width as u64 * height as u64;
    if number_of_dots as u64 != expected_number_of_dots {
        return Err(Error::MismatchOfSizeBetweenDimensionsAndDots(
            width,
            height,
            number_of_dots,
        ));
    }
    Ok(())
}
