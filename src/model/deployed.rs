//! Deployed model records.
//!
//! These are catalog entries, not trained artifacts. They are created by
//! session seeding, by freezing a studio session, or by importing a
//! marketplace listing, and are never edited afterwards.

use serde::{Deserialize, Serialize};

/// A model listed in the session's library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployedModel {
    /// Display name (not unique)
    pub name: String,
    /// Who produced the model
    pub author: String,
    /// Category/type tag, e.g. "Nuclei" or "Custom"
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-text accuracy label, not a computed metric
    pub accuracy: String,
}

impl DeployedModel {
    /// Create a record from its four fields.
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        kind: impl Into<String>,
        accuracy: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            kind: kind.into(),
            accuracy: accuracy.into(),
        }
    }

    /// Record produced by "Freeze & Deploy" in the studio.
    pub fn frozen(name: impl Into<String>) -> Self {
        Self::new(name, "You", "Custom", "Untested")
    }

    /// Record produced by "Add to Library" in the marketplace.
    pub fn imported(name: impl Into<String>) -> Self {
        Self::new(name, "Community", "Imported", "Unknown")
    }
}

/// System models every new session starts with.
pub fn default_models() -> Vec<DeployedModel> {
    vec![
        DeployedModel::new("Nuclei Counter v1", "System", "Nuclei", "94%"),
        DeployedModel::new("Cytoplasm Segmenter", "System", "Cytoplasm", "89%"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frozen_record() {
        let model = DeployedModel::frozen("My Custom Model");
        assert_eq!(
            model,
            DeployedModel::new("My Custom Model", "You", "Custom", "Untested")
        );
    }

    #[test]
    fn test_imported_record() {
        let model = DeployedModel::imported("Stem Cell Colony Tracker");
        assert_eq!(model.author, "Community");
        assert_eq!(model.kind, "Imported");
        assert_eq!(model.accuracy, "Unknown");
    }

    #[test]
    fn test_type_field_name_in_json() {
        let json = serde_json::to_string(&default_models()[0]).unwrap();
        assert!(json.contains("\"type\":\"Nuclei\""));
    }
}
