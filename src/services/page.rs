//! Budget page service
//!
//! Creating, renaming and deleting pages, and running the reports over one.

use chrono::NaiveDate;
use tracing::info;

use crate::config::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::models::BudgetPage;
use crate::reports::PageReport;
use crate::storage::Storage;

/// Service for budget page management
pub struct PageService<'a> {
    storage: &'a Storage,
}

impl<'a> PageService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All pages in creation order
    pub fn list(&self) -> BudgetResult<Vec<BudgetPage>> {
        Ok(self.storage.document.snapshot()?.budget_pages)
    }

    /// Find a page by ID, name, or ID prefix
    pub fn find(&self, identifier: &str) -> BudgetResult<Option<BudgetPage>> {
        Ok(self.storage.document.snapshot()?.find_page(identifier).cloned())
    }

    /// Like [`PageService::find`] but a missing page is an error
    pub fn get(&self, identifier: &str) -> BudgetResult<BudgetPage> {
        self.find(identifier)?
            .ok_or_else(|| BudgetError::page_not_found(identifier))
    }

    /// Create a new, empty page
    pub fn create(&self, name: &str) -> BudgetResult<BudgetPage> {
        let name = validate_page_name(name)?;

        let page = self.storage.document.update(|doc| {
            if doc
                .budget_pages
                .iter()
                .any(|p| p.name.eq_ignore_ascii_case(&name))
            {
                return Err(BudgetError::Duplicate {
                    entity_type: "Budget page",
                    identifier: name.clone(),
                });
            }

            let page = BudgetPage::new(name.clone());
            doc.budget_pages.push(page.clone());
            Ok(page)
        })?;
        self.storage.document.save()?;

        info!(page = %page.id, name = %page.name, "created budget page");
        Ok(page)
    }

    /// Rename a page
    pub fn rename(&self, identifier: &str, new_name: &str) -> BudgetResult<BudgetPage> {
        let new_name = validate_page_name(new_name)?;

        let page = self.storage.document.update(|doc| {
            let id = doc
                .find_page(identifier)
                .map(|p| p.id.clone())
                .ok_or_else(|| BudgetError::page_not_found(identifier))?;

            if doc
                .budget_pages
                .iter()
                .any(|p| p.id != id && p.name.eq_ignore_ascii_case(&new_name))
            {
                return Err(BudgetError::Duplicate {
                    entity_type: "Budget page",
                    identifier: new_name.clone(),
                });
            }

            let page = doc
                .page_mut(&id)
                .ok_or_else(|| BudgetError::page_not_found(identifier))?;
            page.name = new_name.clone();
            Ok(page.clone())
        })?;
        self.storage.document.save()?;

        info!(page = %page.id, name = %page.name, "renamed budget page");
        Ok(page)
    }

    /// Delete a page together with its transactions
    pub fn delete(&self, identifier: &str) -> BudgetResult<BudgetPage> {
        let page = self.storage.document.update(|doc| {
            let idx = doc
                .find_page(identifier)
                .and_then(|found| doc.budget_pages.iter().position(|p| p.id == found.id))
                .ok_or_else(|| BudgetError::page_not_found(identifier))?;
            Ok(doc.budget_pages.remove(idx))
        })?;
        self.storage.document.save()?;

        info!(
            page = %page.id,
            transactions = page.transaction_count(),
            "deleted budget page"
        );
        Ok(page)
    }

    /// Summary, category breakdowns and weekly series for one page
    pub fn report(
        &self,
        identifier: &str,
        settings: &Settings,
        week_offset: i32,
        today: NaiveDate,
    ) -> BudgetResult<PageReport> {
        let doc = self.storage.document.snapshot()?;
        let page = doc
            .find_page(identifier)
            .ok_or_else(|| BudgetError::page_not_found(identifier))?;
        PageReport::generate(page, &doc.categories, settings, week_offset, today)
    }
}

fn validate_page_name(name: &str) -> BudgetResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(BudgetError::Validation(
            "Budget page name cannot be empty".into(),
        ));
    }
    Ok(name.to_string())
}
