//! Category service
//!
//! Creating, listing and deleting earning and expense categories.

use tracing::info;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{palette_color, Category, CategoryType};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// List categories, optionally only those of one type
    pub fn list(&self, kind: Option<CategoryType>) -> BudgetResult<Vec<Category>> {
        let doc = self.storage.document.snapshot()?;
        Ok(match kind {
            Some(kind) => doc.categories_of(kind),
            None => doc.categories,
        })
    }

    /// Find a category by ID, name, or ID prefix
    pub fn find(&self, identifier: &str) -> BudgetResult<Option<Category>> {
        Ok(self
            .storage
            .document
            .snapshot()?
            .find_category(identifier)
            .cloned())
    }

    /// Create a new category
    ///
    /// Without an explicit color the next palette color is used. Names must
    /// be unique within a type; an earning and an expense category may share
    /// a name.
    pub fn create(
        &self,
        name: &str,
        kind: CategoryType,
        color: Option<&str>,
    ) -> BudgetResult<Category> {
        let name = name.trim();

        let category = self.storage.document.update(|doc| {
            if doc
                .categories
                .iter()
                .any(|c| c.kind == kind && c.name.eq_ignore_ascii_case(name))
            {
                return Err(BudgetError::Duplicate {
                    entity_type: "Category",
                    identifier: name.to_string(),
                });
            }

            let color = color.unwrap_or_else(|| palette_color(doc.categories.len()));
            let category = Category::new(name, color, kind);
            category
                .validate()
                .map_err(|e| BudgetError::Validation(e.to_string()))?;

            doc.categories.push(category.clone());
            Ok(category)
        })?;
        self.storage.document.save()?;

        info!(category = %category.id, name = %category.name, kind = %kind, "created category");
        Ok(category)
    }

    /// Delete a category
    ///
    /// Transactions tagged with it keep the stale ID and aggregate as
    /// unmatched from then on.
    pub fn delete(&self, identifier: &str) -> BudgetResult<Category> {
        let category = self.storage.document.update(|doc| {
            let idx = doc
                .find_category(identifier)
                .and_then(|found| doc.categories.iter().position(|c| c.id == found.id))
                .ok_or_else(|| BudgetError::category_not_found(identifier))?;
            Ok(doc.categories.remove(idx))
        })?;
        self.storage.document.save()?;

        info!(category = %category.id, name = %category.name, "deleted category");
        Ok(category)
    }
}
