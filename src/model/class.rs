//! Annotation class data model and the per-session class registry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named, colored label category used to tag regions of an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationClass {
    /// Display name, unique within a registry
    pub name: String,
    /// Display color, usually `#RRGGBB`; not validated
    pub color: String,
}

impl AnnotationClass {
    /// Create a new class with the given name and color.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Classes every new session starts with.
pub fn default_classes() -> Vec<AnnotationClass> {
    vec![
        AnnotationClass::new("Nuclei", "#0000FF"),
        AnnotationClass::new("Cytoplasm", "#FFFF00"),
        AnnotationClass::new("Background", "#FF0000"),
    ]
}

/// Errors raised by class registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassError {
    /// A class with this exact name is already registered
    #[error("Class already exists: {name}")]
    DuplicateName {
        /// The rejected name
        name: String,
    },
}

/// Insertion-ordered set of annotation classes with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRegistry {
    classes: Vec<AnnotationClass>,
}

impl ClassRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a seed list.
    ///
    /// Later entries whose name repeats an earlier one are dropped, so the
    /// uniqueness invariant holds for any seed (e.g. a hand-edited config).
    pub fn from_classes(seed: impl IntoIterator<Item = AnnotationClass>) -> Self {
        let mut registry = Self::new();
        for class in seed {
            if let Err(e) = registry.add(class.name, class.color) {
                log::warn!("Skipping seeded class: {}", e);
            }
        }
        registry
    }

    /// Append a class at the end.
    ///
    /// Fails with [`ClassError::DuplicateName`] when `name` already exists
    /// (case-sensitive exact match); the registry is unchanged in that case.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<(), ClassError> {
        let name = name.into();
        if self.contains(&name) {
            return Err(ClassError::DuplicateName { name });
        }
        log::debug!("Added class: {}", name);
        self.classes.push(AnnotationClass::new(name, color));
        Ok(())
    }

    /// Remove every class named `name`. Unknown names are a no-op.
    ///
    /// Returns the number of removed entries (0 or 1 while the invariant holds).
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.classes.len();
        self.classes.retain(|c| c.name != name);
        let removed = before - self.classes.len();
        if removed > 0 {
            log::debug!("Removed class: {}", name);
        }
        removed
    }

    /// All classes in insertion order.
    pub fn list(&self) -> &[AnnotationClass] {
        &self.classes
    }

    /// Look up a class by exact name.
    pub fn find(&self, name: &str) -> Option<&AnnotationClass> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Check whether a class with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Class names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|c| c.name.as_str())
    }

    pub fn first(&self) -> Option<&AnnotationClass> {
        self.classes.first()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
