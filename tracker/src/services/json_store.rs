//! JSON file checklist store
//!
//! All checklists live in one JSON document mapping checklist id to record.
//! Every write rewrites the whole document through a temp file and a rename,
//! so a crash never leaves a half-written store behind.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use shared::ChecklistId;
use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::traits::ChecklistStore;
use crate::types::ChecklistState;

type Document = BTreeMap<String, ChecklistState>;

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<data_dir>/<store_file>` as configured
    pub fn from_config(config: &shared::TrackerConfig) -> Self {
        Self::new(config.store_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn read_document(&self) -> TrackerResult<Document> {
        if !self.path.exists() {
            return Ok(Document::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Document::new());
        }
        serde_json::from_str(&content).map_err(|e| {
            TrackerError::storage("read", format!("{}: {}", self.path.display(), e))
        })
    }

    fn write_document(&self, document: &Document) -> TrackerResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(document)?;
        let temp = self.temp_path();
        fs::write(&temp, content)?;
        fs::rename(&temp, &self.path)?;
        debug!("💾 Wrote {} checklists to {}", document.len(), self.path.display());
        Ok(())
    }
}

impl ChecklistStore for JsonFileStore {
    fn load_all(&self) -> TrackerResult<Vec<ChecklistState>> {
        Ok(self.read_document()?.into_values().collect())
    }

    fn get(&self, checklist_id: ChecklistId) -> TrackerResult<Option<ChecklistState>> {
        Ok(self.read_document()?.remove(&checklist_id.to_string()))
    }

    fn upsert(&mut self, checklist: &ChecklistState) -> TrackerResult<()> {
        let mut document = self.read_document()?;
        document.insert(checklist.id.to_string(), checklist.clone());
        self.write_document(&document)
    }

    fn delete(&mut self, checklist_id: ChecklistId) -> TrackerResult<()> {
        let mut document = self.read_document()?;
        if document.remove(&checklist_id.to_string()).is_some() {
            self.write_document(&document)?;
        }
        Ok(())
    }
}
