//! Data models for the VolkCell core.

mod batch;
mod class;
mod deployed;

pub use batch::{BatchResult, BatchRow, CellValue, Column};
pub use class::{AnnotationClass, ClassError, ClassRegistry, default_classes};
pub use deployed::{DeployedModel, default_models};
