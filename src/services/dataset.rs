use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::models::{Profile, ProfileRecord};

const BUNDLED_PROFILES: &str = include_str!("../../data/profiles.json");

/// Errors that can occur when loading the profile fixture
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate profile id: {0}")]
    DuplicateId(String),
}

#[derive(Debug, Deserialize)]
struct DatasetFile {
    profiles: Vec<ProfileRecord>,
}

/// Static mock profiles, loaded once at startup and never mutated
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<ProfileRecord>,
    profiles: Arc<[Profile]>,
}

impl Dataset {
    /// The dataset shipped with the crate
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json(BUNDLED_PROFILES)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let dataset = Self::from_json(&json)?;
        tracing::info!("Loaded {} profiles from {}", dataset.len(), path.as_ref().display());
        Ok(dataset)
    }

    /// Load from the configured path, falling back to the bundled copy
    pub fn load_or_bundled(path: Option<&Path>) -> Result<Self, DatasetError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::bundled(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let file: DatasetFile = serde_json::from_str(json)?;
        Self::from_records(file.profiles)
    }

    pub fn from_records(records: Vec<ProfileRecord>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.profile.id.as_str()) {
                return Err(DatasetError::DuplicateId(record.profile.id.clone()));
            }
        }

        let profiles = records.iter().map(|r| r.profile.clone()).collect();
        Ok(Self { records, profiles })
    }

    /// Public profiles, shared with match engines
    pub fn profiles(&self) -> Arc<[Profile]> {
        Arc::clone(&self.profiles)
    }

    pub fn records(&self) -> &[ProfileRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_dataset_loads() {
        let dataset = Dataset::bundled().unwrap();
        assert!(!dataset.is_empty());
        assert_eq!(dataset.profiles().len(), dataset.len());
        assert!(dataset.records().iter().all(|r| r.password.is_some()));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"{"profiles": [
            {"id": "x", "name": "A", "email": "a@example.com", "role": "owner"},
            {"id": "x", "name": "B", "email": "b@example.com", "role": "volunteer"}
        ]}"#;

        match Dataset::from_json(json) {
            Err(DatasetError::DuplicateId(id)) => assert_eq!(id, "x"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let result = Dataset::load("does/not/exist.json");
        assert!(matches!(result, Err(DatasetError::Io(_))));
    }
}
