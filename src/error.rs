use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    InvalidInputType(String),
    DecodeError(image::ImageError),
    EncodeError(String),
    ZeroSizedImage(u32, u32),
    MismatchOfSizeBetweenDimensionsAndDots(u32, u32, usize),
    IncompleteDotParsed(usize),
    NoOriginalImage,
    InvalidDataUri(&'static str),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToReadInputFile(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    UnableToWriteOutputFile(String, std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInputType(mime_type) => {
                write!(
                    f,
                    "Input of type '{}' is not an image. Please select a valid image file.",
                    mime_type
                )
            }
            Self::DecodeError(error) => {
                write!(f, "Unable to decode image: {}", error)
            }
            Self::EncodeError(reason) => {
                write!(f, "Unable to encode image: {}", reason)
            }
            Self::ZeroSizedImage(width, height) => {
                write!(
                    f,
                    "Image dimensions must be positive, but were {}x{}",
                    width, height
                )
            }
            Self::MismatchOfSizeBetweenDimensionsAndDots(width, height, number_of_dots) => {
                write!(
                    f,
                    "Number of dots ({}) does not match the dimensions {}x{}",
                    number_of_dots, width, height
                )
            }
            Self::IncompleteDotParsed(number_of_channels) => {
                write!(
                    f,
                    "Incomplete dot parsed. Expected 4 channels, but got {}.",
                    number_of_channels
                )
            }
            Self::NoOriginalImage => write!(f, "No original image has been uploaded"),
            Self::InvalidDataUri(reason) => write!(f, "Invalid data URI: {}", reason),
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToReadInputFile(path, error) => {
                write!(f, "Unable to read input file '{}': {}", path, error)
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::UnableToWriteOutputFile(path, error) => {
                write!(f, "Unable to write output file '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for Error {}
