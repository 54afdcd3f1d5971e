use threadpool::ThreadPool;

use crate::{
    asset::{ImageAsset, PNG_MIME_TYPE},
    image::{
        reader::raster::RasterImageReader, transformer::DuotoneTransformer,
        transformer::TransformationOptions, writer::png::PngImageWriter, ImageReader, ImageWriter,
    },
    logger::log_dimensions,
    Result,
};

/// One decode, recolor and encode run per call. Nothing is kept between runs
/// apart from the worker threads.
pub struct Pipeline {
    options: TransformationOptions,
    threadpool: ThreadPool,
}

impl Pipeline {
    pub fn new(options: TransformationOptions, number_of_threads: usize) -> Self {
        Self {
            options,
            threadpool: ThreadPool::new(number_of_threads.max(1)),
        }
    }

    pub fn run(&self, asset: &ImageAsset) -> Result<ImageAsset> {
        asset.ensure_is_image()?;

        let image = RasterImageReader::new(asset).read_image()?;
        log_dimensions("Decoded", image.width(), image.height());

        let transformer = DuotoneTransformer::new(&self.options, &self.threadpool);
        let output_image = transformer.transform(&image)?;
        drop(image);
        log_dimensions("Recolored", output_image.width(), output_image.height());

        let mut writer = PngImageWriter::new(Vec::new());
        writer.write_image(&output_image)?;
        let bytes = writer.into_inner();
        log::info!("Encoded {} bytes as {}", bytes.len(), PNG_MIME_TYPE);
        Ok(ImageAsset::new(bytes, PNG_MIME_TYPE))
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(TransformationOptions::default(), crate::default_number_of_threads())
    }
}
