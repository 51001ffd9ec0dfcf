//! Global constants for the VolkCell core

/// Width of the studio canvas and of every decoded upload
pub const CANVAS_WIDTH: u32 = 600;

/// Height of the studio canvas and of every decoded upload
pub const CANVAS_HEIGHT: u32 = 400;

/// Background color used when no training image has been uploaded
pub const PLACEHOLDER_BACKGROUND: [u8; 3] = [73, 109, 137];

/// Stroke color used when no annotation class is selected
pub const NEUTRAL_COLOR: &str = "#FFFFFF";

/// Smallest brush the studio accepts
pub const MIN_BRUSH_SIZE: u32 = 1;

/// Largest brush the studio accepts
pub const MAX_BRUSH_SIZE: u32 = 50;

/// Brush size of a fresh studio
pub const DEFAULT_BRUSH_SIZE: u32 = 10;

/// Red channel value written by the mock predictor
pub const MOCK_PREDICTION_RED: u8 = 100;

/// Inclusive range of placeholder cell counts
pub const CELL_COUNT_RANGE: (u32, u32) = (50, 200);

/// Range of placeholder average intensities
pub const AVG_INTENSITY_RANGE: (f64, f64) = (0.2, 0.9);

/// File extensions accepted for studio training images
pub const TRAINING_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "tif"];

/// Default name proposed when freezing a studio session
pub const DEFAULT_MODEL_NAME: &str = "My Custom Model";

/// Default class name proposed by the "add class" form
pub const DEFAULT_NEW_CLASS_NAME: &str = "Mitochondria";

/// Default class color proposed by the "add class" form
pub const DEFAULT_NEW_CLASS_COLOR: &str = "#00FF00";

/// Confidence label shown next to the live prediction
pub const MOCK_CONFIDENCE: (&str, &str) = ("88%", "+12%");
