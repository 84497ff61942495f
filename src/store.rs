use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::StoreError;

/// A single war scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    pub id: u32,
    pub name: String,
    pub description: String,
}

/// On-disk layout: `{ "scenarios": [ ... ] }`
#[derive(Debug, Deserialize)]
struct ScenarioDocument {
    scenarios: Vec<ScenarioRecord>,
}

/// Read-only scenario collection, loaded once at startup.
///
/// Every record's id equals its 1-based position, so lookup by id is plain indexing.
#[derive(Debug, Clone)]
pub struct ScenarioStore {
    records: Vec<ScenarioRecord>,
}

impl ScenarioStore {
    /// Load and validate the scenario document at `path`
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let data = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json(&data)?;
        info!(path = ?path, count = store.len(), "📚 Loaded scenario store");
        Ok(store)
    }

    /// Parse and validate a scenario document held in memory
    pub fn from_json(data: &str) -> Result<Self, StoreError> {
        let document: ScenarioDocument = serde_json::from_str(data)?;
        Self::from_records(document.scenarios)
    }

    pub fn from_records(records: Vec<ScenarioRecord>) -> Result<Self, StoreError> {
        if records.is_empty() {
            return Err(StoreError::Empty);
        }

        for (index, record) in records.iter().enumerate() {
            let position = index + 1;
            if record.id as usize != position {
                return Err(StoreError::NonContiguous {
                    position,
                    id: record.id,
                });
            }
        }

        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Look up a record by its 1-based id
    pub fn get(&self, id: usize) -> Option<&ScenarioRecord> {
        id.checked_sub(1).and_then(|index| self.records.get(index))
    }

    pub fn records(&self) -> &[ScenarioRecord] {
        &self.records
    }

    /// Consecutive groups of at most `size` records (last one may be shorter)
    pub fn chunks(&self, size: usize) -> std::slice::Chunks<'_, ScenarioRecord> {
        self.records.chunks(size.max(1))
    }
}

#[cfg(test)]
pub(crate) fn sample_store(names: &[&str]) -> ScenarioStore {
    let records = names
        .iter()
        .enumerate()
        .map(|(index, name)| ScenarioRecord {
            id: index as u32 + 1,
            name: name.to_string(),
            description: format!("d{}", index + 1),
        })
        .collect();
    ScenarioStore::from_records(records).expect("sample store is contiguous")
}
