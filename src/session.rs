//! Per-user session state.
//!
//! A [`SessionStore`] owns the state of exactly one interactive session. It is
//! created by whoever drives the session and passed explicitly to every
//! handler, so several sessions can live side by side in one process without
//! sharing anything.

use crate::config::AppConfig;
use crate::model::{
    AnnotationClass, BatchResult, ClassRegistry, DeployedModel, default_classes, default_models,
};

/// State of one interactive session.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Selectable annotation classes
    pub classes: ClassRegistry,
    /// Models in the user's library, in insertion order
    pub models: Vec<DeployedModel>,
    /// Most recent batch run, if any
    pub batch_result: Option<BatchResult>,
}

impl Session {
    /// Create a session from the given seed classes and the system models.
    fn seeded(classes: Vec<AnnotationClass>) -> Self {
        Self {
            classes: ClassRegistry::from_classes(classes),
            models: default_models(),
            batch_result: None,
        }
    }

    /// Names of all models in the library, for the batch runner's picker.
    pub fn model_names(&self) -> impl Iterator<Item = &str> {
        self.models.iter().map(|m| m.name.as_str())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::seeded(default_classes())
    }
}

/// Lazily initialized container for one session's state.
#[derive(Debug, Clone)]
pub struct SessionStore {
    seed_classes: Vec<AnnotationClass>,
    session: Option<Session>,
}

impl SessionStore {
    /// Create a store that seeds the default three classes on first access.
    pub fn new() -> Self {
        Self {
            seed_classes: default_classes(),
            session: None,
        }
    }

    /// Create a store that seeds the classes listed in the configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            seed_classes: config
                .classes
                .iter()
                .cloned()
                .map(AnnotationClass::from)
                .collect(),
            session: None,
        }
    }

    /// Check whether the session has been initialized yet.
    pub fn is_initialized(&self) -> bool {
        self.session.is_some()
    }

    /// Return the session, creating it with defaults on first access.
    pub fn get_or_init(&mut self) -> &mut Session {
        let seed = &self.seed_classes;
        self.session.get_or_insert_with(|| {
            log::debug!("Initializing session with {} seed classes", seed.len());
            Session::seeded(seed.clone())
        })
    }

    /// Overwrite the stored batch result.
    pub fn replace_batch_result(&mut self, table: BatchResult) {
        log::debug!("Replacing batch result ({} rows)", table.len());
        self.get_or_init().batch_result = Some(table);
    }

    /// Append a model to the end of the library. No deduplication.
    pub fn append_model(&mut self, record: DeployedModel) {
        log::info!("Deployed model: {} ({})", record.name, record.author);
        self.get_or_init().models.push(record);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClassConfig;
    use crate::model::BatchRow;

    fn table(files: &[&str]) -> BatchResult {
        BatchResult::new(
            files
                .iter()
                .map(|f| BatchRow {
                    filename: f.to_string(),
                    cell_count: 100,
                    avg_intensity: 0.5,
                })
                .collect(),
        )
    }

    #[test]
    fn test_fresh_session_is_seeded() {
        let mut store = SessionStore::new();
        assert!(!store.is_initialized());

        let session = store.get_or_init();
        let names: Vec<&str> = session.classes.names().collect();
        assert_eq!(names, vec!["Nuclei", "Cytoplasm", "Background"]);
        assert_eq!(session.models.len(), 2);
        assert!(session.batch_result.is_none());
        assert!(store.is_initialized());
    }

    #[test]
    fn test_get_or_init_returns_existing_state() {
        let mut store = SessionStore::new();
        store.get_or_init().classes.add("Mitochondria", "#00FF00").unwrap();
        assert_eq!(store.get_or_init().classes.len(), 4);
    }

    #[test]
    fn test_replace_batch_result_overwrites() {
        let mut store = SessionStore::new();
        store.replace_batch_result(table(&["a.png", "b.png"]));
        store.replace_batch_result(table(&["c.png"]));

        let result = store.get_or_init().batch_result.as_ref().unwrap();
        assert_eq!(result, &table(&["c.png"]));
    }

    #[test]
    fn test_append_model_keeps_duplicates() {
        let mut store = SessionStore::new();
        let record = DeployedModel::new("My Custom Model", "You", "Custom", "Untested");
        store.append_model(record.clone());
        store.append_model(record.clone());

        let models = &store.get_or_init().models;
        assert_eq!(models.len(), 4);
        assert_eq!(models.last(), Some(&record));
    }

    #[test]
    fn test_model_names_follow_library_order() {
        let mut store = SessionStore::new();
        store.append_model(DeployedModel::imported("Stem Cell Colony Tracker"));

        let names: Vec<&str> = store.get_or_init().model_names().collect();
        assert_eq!(
            names,
            vec![
                "Nuclei Counter v1",
                "Cytoplasm Segmenter",
                "Stem Cell Colony Tracker"
            ]
        );
    }

    #[test]
    fn test_add_mitochondria_scenario() {
        let mut store = SessionStore::new();
        let classes = &mut store.get_or_init().classes;

        classes.add("Mitochondria", "#00FF00").unwrap();
        assert_eq!(classes.len(), 4);
        assert_eq!(classes.list().last().unwrap().name, "Mitochondria");

        assert!(classes.add("Mitochondria", "#123456").is_err());
        assert_eq!(classes.len(), 4);
    }

    #[test]
    fn test_remove_background_scenario() {
        let mut store = SessionStore::new();
        let classes = &mut store.get_or_init().classes;
        classes.remove("Background");
        let names: Vec<&str> = classes.names().collect();
        assert_eq!(names, vec!["Nuclei", "Cytoplasm"]);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let mut alice = SessionStore::new();
        let mut bob = SessionStore::new();

        alice.get_or_init().classes.remove("Nuclei");
        alice.append_model(DeployedModel::frozen("Alice Model"));

        assert_eq!(bob.get_or_init().classes.len(), 3);
        assert_eq!(bob.get_or_init().models.len(), 2);
    }

    #[test]
    fn test_from_config_seeds_configured_classes() {
        let mut config = AppConfig::new();
        config.classes = vec![ClassConfig {
            name: "Membrane".to_string(),
            color: "#FF00FF".to_string(),
        }];

        let mut store = SessionStore::from_config(&config);
        let session = store.get_or_init();
        assert_eq!(session.classes.len(), 1);
        assert_eq!(session.classes.find("Membrane").unwrap().color, "#FF00FF");
        assert_eq!(session.models.len(), 2);
    }
}
