//! Image preprocessing for classification.
//!
//! The preprocessor turns a decoded RGB image into the fixed-shape tensor
//! the model expects: validate, resize to the target shape, normalize, and
//! add a leading batch axis. Input images are never mutated; each call
//! allocates a fresh output tensor owned by the caller.

use image::{RgbImage, imageops};

use crate::core::config::PreprocessConfig;
use crate::core::constants::IMAGE_CHANNELS;
use crate::core::errors::ClassifyError;
use crate::core::tensor::Tensor4D;
use crate::processors::normalization::{ChannelOrder, Normalizer};

/// Preprocesses images into model input tensors.
#[derive(Debug, Clone)]
pub struct ImagePreprocessor {
    /// Target input shape as (height, width).
    input_shape: (u32, u32),
    /// Resize interpolation filter.
    filter: image::imageops::FilterType,
    /// Pixel normalizer.
    normalizer: Normalizer,
}

impl ImagePreprocessor {
    /// Creates a preprocessor with the reference defaults: nearest-neighbor
    /// resize and division by 255 in HWC order.
    pub fn new(input_shape: (u32, u32)) -> Self {
        Self {
            input_shape,
            filter: image::imageops::FilterType::Nearest,
            normalizer: Normalizer::default(),
        }
    }

    /// Creates a preprocessor from a preprocessing configuration.
    pub fn from_config(
        input_shape: (u32, u32),
        config: &PreprocessConfig,
    ) -> Result<Self, ClassifyError> {
        let normalizer = Normalizer::new(
            Some(config.scale),
            Some(config.mean.clone()),
            Some(config.std.clone()),
            Some(config.channel_order),
        )?;
        Ok(Self {
            input_shape,
            filter: config.resize_filter.to_filter_type(),
            normalizer,
        })
    }

    /// Returns the target input shape as (height, width).
    pub fn input_shape(&self) -> (u32, u32) {
        self.input_shape
    }

    /// Returns the per-image tensor dimensions in the configured channel
    /// order, without the batch axis.
    pub fn image_dims(&self) -> (usize, usize, usize) {
        let (height, width) = self.input_shape;
        match self.normalizer.order() {
            ChannelOrder::HWC => (height as usize, width as usize, IMAGE_CHANNELS),
            ChannelOrder::CHW => (IMAGE_CHANNELS, height as usize, width as usize),
        }
    }

    /// Preprocesses one image into a single-item batch tensor.
    ///
    /// # Arguments
    ///
    /// * `image` - The decoded RGB image to preprocess.
    ///
    /// # Returns
    ///
    /// A tensor of shape `[1, H, W, C]` (or `[1, C, H, W]` for CHW order)
    /// with normalized values.
    ///
    /// # Errors
    ///
    /// Returns `ClassifyError::InvalidImage` if the image has zero width or
    /// height.
    pub fn preprocess(&self, image: &RgbImage) -> Result<Tensor4D, ClassifyError> {
        self.validate(image)?;
        let data = self.resize_and_normalize(image);
        let (d1, d2, d3) = self.image_dims();
        Ok(Tensor4D::from_shape_vec((1, d1, d2, d3), data)?)
    }

    /// Preprocesses several images into one batch tensor of shape
    /// `[N, H, W, C]` (or `[N, C, H, W]` for CHW order).
    ///
    /// # Errors
    ///
    /// Returns `ClassifyError::InvalidInput` for an empty slice and
    /// `ClassifyError::InvalidImage` if any image has a zero dimension.
    pub fn preprocess_batch(&self, images: &[RgbImage]) -> Result<Tensor4D, ClassifyError> {
        if images.is_empty() {
            return Err(ClassifyError::invalid_input(
                "cannot preprocess an empty image batch",
            ));
        }

        let (d1, d2, d3) = self.image_dims();
        let mut data = Vec::with_capacity(images.len() * d1 * d2 * d3);
        for image in images {
            self.validate(image)?;
            data.extend(self.resize_and_normalize(image));
        }
        Ok(Tensor4D::from_shape_vec((images.len(), d1, d2, d3), data)?)
    }

    fn validate(&self, image: &RgbImage) -> Result<(), ClassifyError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(ClassifyError::invalid_image(format!(
                "image has zero dimension: {width}x{height}"
            )));
        }
        Ok(())
    }

    fn resize_and_normalize(&self, image: &RgbImage) -> Vec<f32> {
        let (height, width) = self.input_shape;
        let resized = imageops::resize(image, width, height, self.filter);
        self.normalizer.normalize(&resized)
    }
}
