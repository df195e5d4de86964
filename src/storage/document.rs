//! Budget document repository
//!
//! The whole document (people, categories, pages) is read and written as a
//! single JSON file.

use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::BudgetError;
use crate::models::BudgetDocument;

use super::file_io::{read_json, write_json_atomic};

/// Repository holding the in-memory copy of the document
pub struct DocumentRepository {
    path: PathBuf,
    document: RwLock<BudgetDocument>,
}

impl DocumentRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            document: RwLock::new(BudgetDocument::default()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the document from disk; a missing file yields an empty document
    pub fn load(&self) -> Result<(), BudgetError> {
        let loaded: BudgetDocument = read_json(&self.path)?;
        debug!(
            path = %self.path.display(),
            pages = loaded.budget_pages.len(),
            categories = loaded.categories.len(),
            people = loaded.people.len(),
            "loaded budget document"
        );

        let mut document = self
            .document
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *document = loaded;
        Ok(())
    }

    /// Write the whole document to disk
    pub fn save(&self) -> Result<(), BudgetError> {
        let document = self
            .document
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        write_json_atomic(&self.path, &*document)?;
        debug!(path = %self.path.display(), "saved budget document");
        Ok(())
    }

    /// An immutable copy of the current document
    pub fn snapshot(&self) -> Result<BudgetDocument, BudgetError> {
        let document = self
            .document
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(document.clone())
    }

    /// Apply `change` to the in-memory document
    ///
    /// Nothing is written to disk; call [`DocumentRepository::save`] after.
    pub fn update<T, F>(&self, change: F) -> Result<T, BudgetError>
    where
        F: FnOnce(&mut BudgetDocument) -> Result<T, BudgetError>,
    {
        let mut document = self
            .document
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        change(&mut document)
    }
}
