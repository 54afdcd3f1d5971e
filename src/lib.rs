use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Read, Write},
    path::{Path, PathBuf},
    thread,
};

pub use asset::ImageAsset;
pub use cli::CLIParser;
pub use color::{Quantization, RGBAColorFormat};
pub use error::Error;
pub use crate::image::{transformer::TransformationOptions, PixelBuffer};
pub use pipeline::Pipeline;
pub use session::ImageState;

pub mod asset;
mod cli;
pub mod color;
mod error;
pub mod image;
mod logger;
pub mod pipeline;
pub mod session;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    output_file: PathBuf,
    number_of_threads: usize,
    quantization: Quantization,
    print_data_uri: bool,
}

impl Arguments {
    pub fn print_data_uri(&self) -> bool {
        self.print_data_uri
    }
}

impl From<&Arguments> for TransformationOptions {
    fn from(value: &Arguments) -> Self {
        Self {
            quantization: value.quantization,
        }
    }
}

pub fn default_number_of_threads() -> usize {
    thread::available_parallelism().map_or(1, |n| n.get())
}

/// Recolors encoded image bytes with a default [`Pipeline`].
pub fn transform(bytes: &[u8], mime_type: &str) -> Result<ImageAsset> {
    Pipeline::default().run(&ImageAsset::new(bytes.to_vec(), mime_type))
}

fn path_to_string(file_path: &Path) -> String {
    file_path.to_string_lossy().into_owned()
}

fn read_input_file(file_path: &Path) -> Result<ImageAsset> {
    let mut file = File::open(file_path)
        .map_err(|e| Error::UnableToOpenInputFileForReading(path_to_string(file_path), e))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| Error::UnableToReadInputFile(path_to_string(file_path), e))?;
    Ok(ImageAsset::from_path_and_bytes(file_path, bytes))
}

fn write_output_file(file_path: &Path, asset: &ImageAsset) -> Result<()> {
    let output_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| Error::UnableToOpenOutputFileForWriting(path_to_string(file_path), e))?;
    let mut output_file_writer = BufWriter::new(output_file);
    output_file_writer
        .write_all(asset.bytes())
        .and_then(|_| output_file_writer.flush())
        .map_err(|e| Error::UnableToWriteOutputFile(path_to_string(file_path), e))
}

/// Reads the input file, recolors it and writes the PNG result. The output
/// file is only created once the whole pipeline succeeded.
pub fn convert_image_to_duotone(arguments: &Arguments) -> Result<ImageAsset> {
    let original = read_input_file(&arguments.input_file)?;
    log::info!(
        "Loaded '{}' as {}",
        path_to_string(&arguments.input_file),
        original.mime_type()
    );
    let pipeline = Pipeline::new(
        TransformationOptions::from(arguments),
        arguments.number_of_threads,
    );
    let transformed = pipeline.run(&original)?;
    write_output_file(&arguments.output_file, &transformed)?;
    log::info!("Wrote '{}'", path_to_string(&arguments.output_file));
    Ok(transformed)
}
