use crate::{asset::ImageAsset, error::Error, pipeline::Pipeline, Result};

/// The original upload and its recolored counterpart. Every transition hands
/// out a new value, a failed transition leaves the caller's value untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageState {
    original: Option<ImageAsset>,
    transformed: Option<ImageAsset>,
}

impl ImageState {
    pub fn upload(asset: ImageAsset) -> Result<Self> {
        asset.ensure_is_image()?;
        Ok(Self {
            original: Some(asset),
            transformed: None,
        })
    }

    pub fn process(&self, pipeline: &Pipeline) -> Result<Self> {
        let original = self.original.as_ref().ok_or(Error::NoOriginalImage)?;
        let transformed = pipeline.run(original)?;
        Ok(Self {
            original: Some(original.clone()),
            transformed: Some(transformed),
        })
    }

    pub fn reset(&self) -> Self {
        Self::default()
    }

    pub fn original(&self) -> Option<&ImageAsset> {
        self.original.as_ref()
    }

    pub fn transformed(&self) -> Option<&ImageAsset> {
        self.transformed.as_ref()
    }
}
