//! Vector store: the ordered table of fixtures a run iterates.
//!
//! The store is pure data access with no side effects. It fails only on
//! malformed static data, which is a configuration defect and halts the run
//! before any provider call is made.

pub mod builtin;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::config::FeatureSet;
use crate::errors::RunError;
use crate::model::TestVector;

/// On-disk shape of an external vector file (YAML or JSON by extension).
#[derive(Debug, Clone, Serialize, Deserialize)]
struct VectorFile {
    vectors: Vec<TestVector>,
}

#[derive(Debug, Clone)]
pub struct VectorStore {
    vectors: Vec<TestVector>,
}

impl VectorStore {
    /// The embedded table. Its well-formedness is a crate invariant,
    /// enforced by tests against [`builtin::vectors`].
    pub fn builtin() -> Self {
        Self::from_vectors(builtin::vectors()).expect("builtin vector table is well-formed")
    }

    /// Validated construction from arbitrary vectors; rejects structural
    /// defects and duplicate ids.
    pub fn from_vectors(vectors: Vec<TestVector>) -> anyhow::Result<Self> {
        let mut seen = HashSet::new();
        for v in &vectors {
            v.validate()?;
            if !seen.insert(v.id.clone()) {
                return Err(RunError::malformed_vector(&v.id, "duplicate vector id").into());
            }
        }
        Ok(Self { vectors })
    }

    /// Load vectors from an external file. `.json` is parsed as JSON,
    /// anything else as YAML.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| RunError::vectors_not_found(&display, e.to_string()))?;
        let file: VectorFile = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&raw)
                .map_err(|e| RunError::config_parse(Some(display), e.to_string()))?
        } else {
            serde_yaml::from_str(&raw)
                .map_err(|e| RunError::config_parse(Some(display), e.to_string()))?
        };
        Self::from_vectors(file.vectors)
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TestVector> {
        self.vectors.iter()
    }

    /// The restartable filtered view for a feature set, in table order.
    pub fn select(&self, features: &FeatureSet) -> Vec<&TestVector> {
        self.vectors
            .iter()
            .filter(|v| features.supports(v))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AlgorithmFamily;
    use std::io::Write;

    #[test]
    fn builtin_table_loads_and_validates() {
        let store = VectorStore::builtin();
        assert_eq!(store.len(), 5);
        for v in store.iter() {
            v.validate().expect("builtin vector validates");
        }
    }

    #[test]
    fn select_honors_family_toggles() {
        let store = VectorStore::builtin();
        let no_ccm = FeatureSet {
            ccm: false,
            ..FeatureSet::default()
        };
        let picked = store.select(&no_ccm);
        assert!(!picked.is_empty());
        assert!(picked
            .iter()
            .all(|v| v.algorithm.family() == AlgorithmFamily::Gcm));
    }

    #[test]
    fn select_is_restartable() {
        let store = VectorStore::builtin();
        let features = FeatureSet::default();
        let first: Vec<String> = store.select(&features).iter().map(|v| v.id.clone()).collect();
        let second: Vec<String> = store.select(&features).iter().map(|v| v.id.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut vectors = builtin::vectors();
        let dup = vectors[0].clone();
        vectors.push(dup);
        let err = VectorStore::from_vectors(vectors).expect_err("duplicate id");
        assert!(err.to_string().contains("duplicate"), "got: {}", err);
    }

    #[test]
    fn from_path_round_trips_yaml() {
        let file = VectorFile {
            vectors: builtin::vectors(),
        };
        let yaml = serde_yaml::to_string(&file).expect("serialize");
        let mut f = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("tempfile");
        f.write_all(yaml.as_bytes()).expect("write");

        let store = VectorStore::from_path(f.path()).expect("load");
        assert_eq!(store.len(), 5);
        assert_eq!(
            store.iter().map(|v| v.id.as_str()).collect::<Vec<_>>(),
            builtin::vectors()
                .iter()
                .map(|v| v.id.as_str())
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn from_path_reports_missing_file() {
        use crate::errors::{RunError, RunErrorKind};
        let err = VectorStore::from_path(Path::new("/nonexistent/vectors.yaml"))
            .expect_err("missing file");
        assert_eq!(
            RunError::from_anyhow(&err).kind,
            RunErrorKind::VectorsNotFound
        );
    }

    #[test]
    fn malformed_vector_in_file_is_fatal() {
        let mut vectors = builtin::vectors();
        vectors[0].tag.pop();
        let file = VectorFile { vectors };
        let yaml = serde_yaml::to_string(&file).expect("serialize");
        let mut f = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("tempfile");
        f.write_all(yaml.as_bytes()).expect("write");
        assert!(VectorStore::from_path(f.path()).is_err());
    }
}
