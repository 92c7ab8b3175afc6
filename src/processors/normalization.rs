//! Pixel normalization for classification preprocessing.
//!
//! Normalization is expressed as a per-channel affine transform with
//! precomputed coefficients: `alpha = scale / std` and `beta = -mean / std`,
//! so each pixel value becomes `alpha * v + beta`. The crate defaults
//! (`scale = 1/255`, zero mean, unit std) reduce this to plain division by
//! 255, mapping 8-bit channels into `[0.0, 1.0]`.

use image::RgbImage;
use serde::{Deserialize, Serialize};

use crate::core::constants::IMAGE_CHANNELS;
use crate::core::errors::ClassifyError;

/// Channel ordering of the normalized output buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChannelOrder {
    /// Height, width, channel (interleaved). The default; matches the
    /// reference model's input layout.
    #[default]
    HWC,
    /// Channel, height, width (planar).
    CHW,
}

/// Normalizes images into floating-point buffers for model input.
#[derive(Debug, Clone)]
pub struct Normalizer {
    /// Scaling factors for each channel (alpha = scale / std).
    alpha: Vec<f32>,
    /// Offset values for each channel (beta = -mean / std).
    beta: Vec<f32>,
    /// Channel ordering of the output buffer.
    order: ChannelOrder,
}

impl Normalizer {
    /// Creates a new Normalizer with the specified parameters.
    ///
    /// # Arguments
    ///
    /// * `scale` - Optional scaling factor (defaults to 1.0/255.0)
    /// * `mean` - Optional mean values per channel (defaults to [0, 0, 0])
    /// * `std` - Optional standard deviations per channel (defaults to [1, 1, 1])
    /// * `order` - Optional channel ordering (defaults to HWC)
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if scale is not positive, mean or std do not
    /// have exactly three elements, or any standard deviation is not
    /// positive.
    pub fn new(
        scale: Option<f32>,
        mean: Option<Vec<f32>>,
        std: Option<Vec<f32>>,
        order: Option<ChannelOrder>,
    ) -> Result<Self, ClassifyError> {
        let scale = scale.unwrap_or(1.0 / 255.0);
        let mean = mean.unwrap_or_else(|| vec![0.0; IMAGE_CHANNELS]);
        let std = std.unwrap_or_else(|| vec![1.0; IMAGE_CHANNELS]);
        let order = order.unwrap_or_default();

        if scale <= 0.0 {
            return Err(ClassifyError::config_error(format!(
                "scale must be greater than 0, got {scale}"
            )));
        }
        if mean.len() != IMAGE_CHANNELS {
            return Err(ClassifyError::config_error(format!(
                "mean must have exactly {IMAGE_CHANNELS} elements for RGB, got {}",
                mean.len()
            )));
        }
        if std.len() != IMAGE_CHANNELS {
            return Err(ClassifyError::config_error(format!(
                "std must have exactly {IMAGE_CHANNELS} elements for RGB, got {}",
                std.len()
            )));
        }
        for (i, &s) in std.iter().enumerate() {
            if s <= 0.0 {
                return Err(ClassifyError::config_error(format!(
                    "standard deviation at index {i} must be greater than 0, got {s}"
                )));
            }
        }

        let alpha: Vec<f32> = std.iter().map(|s| scale / s).collect();
        let beta: Vec<f32> = mean.iter().zip(&std).map(|(m, s)| -m / s).collect();

        Ok(Self { alpha, beta, order })
    }

    /// Returns the channel ordering of the output buffer.
    pub fn order(&self) -> ChannelOrder {
        self.order
    }

    /// Normalizes one RGB image into a flat f32 buffer in the configured
    /// channel order.
    pub fn normalize(&self, img: &RgbImage) -> Vec<f32> {
        let (width, height) = img.dimensions();
        let pixel_count = width as usize * height as usize;

        match self.order {
            ChannelOrder::HWC => {
                let mut data = Vec::with_capacity(pixel_count * IMAGE_CHANNELS);
                for pixel in img.pixels() {
                    for c in 0..IMAGE_CHANNELS {
                        data.push(self.alpha[c] * pixel.0[c] as f32 + self.beta[c]);
                    }
                }
                data
            }
            ChannelOrder::CHW => {
                let mut data = vec![0.0; pixel_count * IMAGE_CHANNELS];
                for (x, y, pixel) in img.enumerate_pixels() {
                    let idx = y as usize * width as usize + x as usize;
                    for c in 0..IMAGE_CHANNELS {
                        data[c * pixel_count + idx] =
                            self.alpha[c] * pixel.0[c] as f32 + self.beta[c];
                    }
                }
                data
            }
        }
    }
}

impl Default for Normalizer {
    /// The reference normalization: divide by 255, HWC order.
    fn default() -> Self {
        Self {
            alpha: vec![1.0 / 255.0; IMAGE_CHANNELS],
            beta: vec![0.0; IMAGE_CHANNELS],
            order: ChannelOrder::HWC,
        }
    }
}
