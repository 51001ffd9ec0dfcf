//! Model Studio: the painting and label-class screen.
//!
//! The studio keeps only view-local state (active class and brush size).
//! Everything that outlives the screen lives in the [`SessionStore`] that is
//! passed into each action.

use image::RgbImage;

use crate::color_utils::parse_hex_color;
use crate::constants::{
    DEFAULT_BRUSH_SIZE, DEFAULT_NEW_CLASS_COLOR, DEFAULT_NEW_CLASS_NAME, MAX_BRUSH_SIZE,
    MIN_BRUSH_SIZE, MOCK_CONFIDENCE, NEUTRAL_COLOR,
};
use crate::data::mock_prediction;
use crate::model::{AnnotationClass, ClassError, ClassRegistry, DeployedModel};
use crate::session::SessionStore;

/// Confidence readout shown next to the live prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confidence {
    pub value: &'static str,
    pub delta: &'static str,
}

/// Contents of the "add class" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClassForm {
    pub name: String,
    pub color: String,
}

impl Default for NewClassForm {
    fn default() -> Self {
        Self {
            name: DEFAULT_NEW_CLASS_NAME.to_string(),
            color: DEFAULT_NEW_CLASS_COLOR.to_string(),
        }
    }
}

/// View state of the Model Studio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Studio {
    /// Name of the selected class, resolved against the registry on read
    selected: Option<String>,
    brush_size: u32,
}

impl Studio {
    pub fn new() -> Self {
        Self {
            selected: None,
            brush_size: DEFAULT_BRUSH_SIZE,
        }
    }

    /// Create a studio with an initial brush size (clamped).
    pub fn with_brush_size(brush_size: u32) -> Self {
        let mut studio = Self::new();
        studio.set_brush_size(brush_size);
        studio
    }

    // ========================================================================
    // Class selection
    // ========================================================================

    /// Select a class by name.
    ///
    /// Returns `false` and keeps the current selection if the registry has no
    /// class with that name.
    pub fn select(&mut self, registry: &ClassRegistry, name: &str) -> bool {
        if !registry.contains(name) {
            log::debug!("Ignoring selection of unknown class: {}", name);
            return false;
        }
        self.selected = Some(name.to_string());
        true
    }

    /// The class the next stroke paints with.
    ///
    /// This is the selected class if it still exists, otherwise the first
    /// class of the registry, otherwise `None`.
    pub fn active_class<'a>(&self, registry: &'a ClassRegistry) -> Option<&'a AnnotationClass> {
        self.selected
            .as_deref()
            .and_then(|name| registry.find(name))
            .or_else(|| registry.first())
    }

    /// Stroke color string for the canvas; neutral when nothing is active.
    pub fn stroke_color<'a>(&self, registry: &'a ClassRegistry) -> &'a str {
        self.active_class(registry)
            .map(|c| c.color.as_str())
            .unwrap_or(NEUTRAL_COLOR)
    }

    /// Stroke color as RGB. Unparseable class colors fall back to neutral.
    pub fn stroke_rgb(&self, registry: &ClassRegistry) -> [u8; 3] {
        parse_hex_color(self.stroke_color(registry)).unwrap_or([255, 255, 255])
    }

    // ========================================================================
    // Class editing
    // ========================================================================

    /// Add a class to the session's registry.
    ///
    /// On [`ClassError::DuplicateName`] the registry is unchanged and the
    /// error is returned for display.
    pub fn add_class(
        &self,
        store: &mut SessionStore,
        name: &str,
        color: &str,
    ) -> Result<(), ClassError> {
        store
            .get_or_init()
            .classes
            .add(name, color)
            .inspect_err(|e| log::warn!("Rejected class: {}", e))
    }

    /// Submit the "add class" form.
    pub fn submit_class_form(
        &self,
        store: &mut SessionStore,
        form: &NewClassForm,
    ) -> Result<(), ClassError> {
        self.add_class(store, &form.name, &form.color)
    }

    /// Remove the active class and clear the selection.
    ///
    /// Returns the removed class name, or `None` when the registry is empty.
    pub fn remove_active(&mut self, store: &mut SessionStore) -> Option<String> {
        let classes = &mut store.get_or_init().classes;
        let name = self.active_class(classes)?.name.clone();
        classes.remove(&name);
        self.selected = None;
        Some(name)
    }

    // ========================================================================
    // Brush, training and deployment
    // ========================================================================

    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    /// Set the brush size, clamped to the supported range.
    pub fn set_brush_size(&mut self, size: u32) {
        self.brush_size = size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
    }

    /// Mock training step. Nothing is learned.
    pub fn train(&self) -> &'static str {
        log::info!("Training requested (brush size {})", self.brush_size);
        "Model Updated!"
    }

    /// Mock live prediction for the current canvas image.
    pub fn predict(&self, image: &RgbImage) -> RgbImage {
        mock_prediction(image)
    }

    pub fn confidence(&self) -> Confidence {
        Confidence {
            value: MOCK_CONFIDENCE.0,
            delta: MOCK_CONFIDENCE.1,
        }
    }

    /// Freeze the studio session into a custom model in the library.
    pub fn freeze_and_deploy(&self, store: &mut SessionStore, model_name: &str) -> DeployedModel {
        let model = DeployedModel::frozen(model_name);
        store.append_model(model.clone());
        model
    }
}

impl Default for Studio {
    fn default() -> Self {
        Self::new()
    }
}
