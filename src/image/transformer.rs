use std::sync::mpsc;

use threadpool::ThreadPool;

use super::PixelBuffer;
use crate::{
    color::{Quantization, RGBAColorFormat},
    Result,
};

#[derive(Clone, Copy, Debug, Default)]
pub struct TransformationOptions {
    pub quantization: Quantization,
}

struct RecoloredChunk {
    index: usize,
    dots: Vec<RGBAColorFormat>,
}

/// Recolors every dot independently into the pink or dark palette.
pub struct DuotoneTransformer<'a> {
    options: &'a TransformationOptions,
    threadpool: &'a ThreadPool,
}

impl<'a> DuotoneTransformer<'a> {
    pub fn new(options: &'a TransformationOptions, threadpool: &'a ThreadPool) -> Self {
        Self {
            options,
            threadpool,
        }
    }

    pub fn transform(&self, image: &PixelBuffer) -> Result<PixelBuffer> {
        let rows_per_chunk = self.rows_per_chunk(image.height());
        let dots_per_chunk = rows_per_chunk * image.width() as usize;
        let chunks = image.dots().chunks(dots_per_chunk);
        let number_of_chunks = chunks.len();
        log::debug!(
            "Recoloring {} rows in {} chunks of up to {} rows",
            image.height(),
            number_of_chunks,
            rows_per_chunk
        );

        let (sender, receiver) = mpsc::channel();
        for (index, chunk) in chunks.enumerate() {
            let sender = sender.clone();
            let dots = chunk.to_vec();
            let quantization = self.options.quantization;
            self.threadpool.execute(move || {
                let dots = recolor_dots(&dots, quantization);
                // the receiver only hangs up once it stopped waiting for chunks
                let _ = sender.send(RecoloredChunk { index, dots });
            });
        }
        drop(sender);

        let mut recolored_chunks: Vec<Option<Vec<RGBAColorFormat>>> = vec![None; number_of_chunks];
        for chunk in receiver.iter().take(number_of_chunks) {
            recolored_chunks[chunk.index] = Some(chunk.dots);
        }

        let mut dots = Vec::with_capacity(image.dots().len());
        for chunk in recolored_chunks.into_iter().flatten() {
            dots.extend(chunk);
        }
        // a panicking worker leaves its slot empty and the length check fails
        PixelBuffer::new(image.width(), image.height(), dots)
    }

    fn rows_per_chunk(&self, height: u32) -> usize {
        let height = height as usize;
        let number_of_workers = self.threadpool.max_count().clamp(1, height.max(1));
        height.div_ceil(number_of_workers).max(1)
    }
}

fn recolor_dots(dots: &[RGBAColorFormat], quantization: Quantization) -> Vec<RGBAColorFormat> {
    dots.iter().map(|dot| dot.recolor(quantization)).collect()
}
