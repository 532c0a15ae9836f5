use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::models::{CaseRecord, CaseStatus, MissingPerson};

/// Errors that can occur when loading seed data
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// In-memory set of cases loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct CaseRegistry {
    cases: Arc<Vec<MissingPerson>>,
}

impl CaseRegistry {
    /// Load a JSON array of case records from disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RegistryError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let registry = Self::from_json(&raw)?;

        tracing::info!(
            "Loaded {} cases from {}",
            registry.len(),
            path.as_ref().display()
        );

        Ok(registry)
    }

    /// Parse a JSON array of case records
    ///
    /// Only a body that is not a JSON array is an error; individual records
    /// that fail to parse or lack a location are skipped.
    pub fn from_json(raw: &str) -> Result<Self, RegistryError> {
        let documents: Vec<Value> = serde_json::from_str(raw)?;

        Ok(Self {
            cases: Arc::new(located_cases(documents)),
        })
    }

    pub fn cases(&self) -> Arc<Vec<MissingPerson>> {
        Arc::clone(&self.cases)
    }

    pub fn by_status(&self, status: CaseStatus) -> Vec<&MissingPerson> {
        self.cases.iter().filter(|c| c.status == status).collect()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

/// Keep the documents that parse into a case with a usable location
pub fn located_cases(documents: Vec<Value>) -> Vec<MissingPerson> {
    documents
        .into_iter()
        .filter_map(|doc| match serde_json::from_value::<CaseRecord>(doc) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Skipping unparsable case record: {}", e);
                None
            }
        })
        .filter_map(|record| {
            let id = record.id.clone();
            match MissingPerson::try_from(record) {
                Ok(case) => Some(case),
                Err(e) => {
                    tracing::warn!("Skipping case {}: {}", id, e);
                    None
                }
            }
        })
        .collect()
}
