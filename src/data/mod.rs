//! Image data handling for the studio canvas.
//!
//! Decoding is delegated to the `image` crate; this module only fixes the
//! canvas size and provides the placeholder and mock-prediction rasters.

pub mod raster;

pub use raster::{
    RasterError, canvas_for_uploads, decode_upload, is_training_image, load_upload,
    mock_prediction, placeholder,
};
