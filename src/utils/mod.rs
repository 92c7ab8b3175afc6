//! Utility functions for images.

pub mod image;

pub use image::{
    create_rgb_image, decode_image, dynamic_to_rgb, load_image, load_images_batch,
    load_images_batch_with_threshold,
};
