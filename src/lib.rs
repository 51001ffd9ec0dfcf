//! VolkCell Analytics - core of the bio-image annotation and model marketplace demo
//!
//! The crate holds the per-session state (annotation classes, model library,
//! last batch result) and the actions of the four screens: Model Studio,
//! Batch Runner, Marketplace and Analysis Lab. Rendering is left to the
//! caller.

pub mod analysis;
pub mod batch;
pub mod color_utils;
pub mod config;
pub mod constants;
pub mod data;
pub mod marketplace;
pub mod model;
pub mod session;
pub mod studio;

pub use config::AppConfig;
pub use model::{AnnotationClass, BatchResult, ClassError, ClassRegistry, DeployedModel};
pub use session::{Session, SessionStore};
pub use studio::{NewClassForm, Studio};
