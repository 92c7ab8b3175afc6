//! Utility functions for image loading and conversion.
//!
//! This module provides functions for loading images from files, decoding
//! them from raw byte streams, converting between formats, and creating
//! images from raw pixel data. Batch loading switches to parallel reads
//! above a configurable threshold.

use image::{DynamicImage, RgbImage};

use crate::core::errors::ClassifyError;

/// Converts a DynamicImage to an RgbImage.
pub fn dynamic_to_rgb(img: DynamicImage) -> RgbImage {
    img.to_rgb8()
}

/// Loads an image from a file path and converts it to RgbImage.
///
/// # Errors
///
/// Returns `ClassifyError::ImageDecode` if the file cannot be opened or
/// decoded as an image.
pub fn load_image(path: &std::path::Path) -> Result<RgbImage, ClassifyError> {
    let img = image::open(path).map_err(ClassifyError::ImageDecode)?;
    Ok(dynamic_to_rgb(img))
}

/// Decodes an image from an encoded byte stream (PNG, JPEG, and the other
/// formats the image crate supports) and converts it to RgbImage.
///
/// # Errors
///
/// Returns `ClassifyError::ImageDecode` if the bytes are not a decodable
/// image.
pub fn decode_image(bytes: &[u8]) -> Result<RgbImage, ClassifyError> {
    let img = image::load_from_memory(bytes).map_err(ClassifyError::ImageDecode)?;
    Ok(dynamic_to_rgb(img))
}

/// Creates an RgbImage from raw pixel data.
///
/// The data must be in RGB format (3 bytes per pixel) and its length must
/// match the specified dimensions.
///
/// # Returns
///
/// * `Some(RgbImage)` - The created image if the data length is valid
/// * `None` - If the data length does not match the dimensions
pub fn create_rgb_image(width: u32, height: u32, data: Vec<u8>) -> Option<RgbImage> {
    if data.len() != (width * height * 3) as usize {
        return None;
    }
    RgbImage::from_raw(width, height, data)
}

/// Loads a batch of images from file paths.
///
/// Uses parallel loading when the number of paths exceeds the default
/// parallel threshold.
pub fn load_images_batch<P: AsRef<std::path::Path> + Send + Sync>(
    paths: &[P],
) -> Result<Vec<RgbImage>, ClassifyError> {
    load_images_batch_with_threshold(paths, None)
}

/// Loads a batch of images from file paths with a custom parallel threshold.
///
/// # Arguments
///
/// * `paths` - Paths of the image files to load.
/// * `parallel_threshold` - Batch size above which loading goes parallel.
///   `None` uses `DEFAULT_PARALLEL_THRESHOLD`.
pub fn load_images_batch_with_threshold<P: AsRef<std::path::Path> + Send + Sync>(
    paths: &[P],
    parallel_threshold: Option<usize>,
) -> Result<Vec<RgbImage>, ClassifyError> {
    use crate::core::constants::DEFAULT_PARALLEL_THRESHOLD;

    let threshold = parallel_threshold.unwrap_or(DEFAULT_PARALLEL_THRESHOLD);

    if paths.len() > threshold {
        use rayon::prelude::*;
        paths.par_iter().map(|p| load_image(p.as_ref())).collect()
    } else {
        paths.iter().map(|p| load_image(p.as_ref())).collect()
    }
}
