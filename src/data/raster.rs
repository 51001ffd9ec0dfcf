//! Fixed-size RGB rasters for the studio canvas.
//!
//! Uploads are decoded with the `image` crate (PNG, JPEG, TIFF, BMP, WebP)
//! and stretched to the canvas size. When nothing was uploaded the canvas
//! shows a solid placeholder instead.

use image::{RgbImage, imageops::FilterType};
use std::path::Path;
use thiserror::Error;

use crate::constants::{
    CANVAS_HEIGHT, CANVAS_WIDTH, MOCK_PREDICTION_RED, PLACEHOLDER_BACKGROUND,
    TRAINING_IMAGE_EXTENSIONS,
};

/// Errors that can occur while turning an upload into a raster.
#[derive(Error, Debug)]
pub enum RasterError {
    /// The bytes are not an image the decoder understands
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// I/O error while reading an upload from disk
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Decode uploaded bytes and resize them to the canvas size.
///
/// The aspect ratio is not preserved.
pub fn decode_upload(bytes: &[u8]) -> Result<RgbImage, RasterError> {
    let img = image::load_from_memory(bytes)?;
    log::trace!(
        "Decoded {}x{} upload, resizing to {}x{}",
        img.width(),
        img.height(),
        CANVAS_WIDTH,
        CANVAS_HEIGHT
    );
    Ok(image::imageops::resize(
        &img.to_rgb8(),
        CANVAS_WIDTH,
        CANVAS_HEIGHT,
        FilterType::Triangle,
    ))
}

/// Read a file from disk and decode it as an upload.
pub fn load_upload(path: &Path) -> Result<RgbImage, RasterError> {
    let bytes = std::fs::read(path)?;
    decode_upload(&bytes)
}

/// Canvas shown before any training image is uploaded.
pub fn placeholder() -> RgbImage {
    RgbImage::from_pixel(
        CANVAS_WIDTH,
        CANVAS_HEIGHT,
        image::Rgb(PLACEHOLDER_BACKGROUND),
    )
}

/// Studio canvas for a set of uploaded files.
///
/// The first training image is decoded; if there is none, or it fails to
/// decode, the placeholder is used so the rest of the session can continue.
pub fn canvas_for_uploads<S: AsRef<str>>(files: &[S]) -> RgbImage {
    let Some(path) = files
        .iter()
        .map(|f| f.as_ref())
        .find(|f| is_training_image(f))
    else {
        return placeholder();
    };

    match load_upload(Path::new(path)) {
        Ok(image) => image,
        Err(e) => {
            log::error!("Failed to load {}: {}", path, e);
            placeholder()
        }
    }
}

/// Mock prediction: a mask of the same size with only the red channel set.
///
/// Brush strokes are accepted by the studio but do not influence the mask.
pub fn mock_prediction(image: &RgbImage) -> RgbImage {
    RgbImage::from_pixel(
        image.width(),
        image.height(),
        image::Rgb([MOCK_PREDICTION_RED, 0, 0]),
    )
}

/// Check whether a filename has an extension accepted for training images.
pub fn is_training_image(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            TRAINING_IMAGE_EXTENSIONS
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}
