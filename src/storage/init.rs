//! Storage initialization
//!
//! First-run setup: directories plus a starter set of categories.

use tracing::info;

use crate::config::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::models::{palette_color, BudgetDocument, Category, CategoryType};

use super::file_io::write_json_atomic;

const DEFAULT_EARNING_CATEGORIES: &[&str] = &["Salary", "Freelance", "Gifts"];

const DEFAULT_EXPENSE_CATEGORIES: &[&str] = &[
    "Housing",
    "Groceries",
    "Utilities",
    "Transportation",
    "Dining Out",
    "Entertainment",
];

/// Initialize storage for a fresh installation
///
/// An existing document is left untouched.
pub fn initialize_storage(paths: &BudgetPaths) -> Result<(), BudgetError> {
    paths.ensure_directories()?;

    if !paths.document_file().exists() {
        let document = BudgetDocument {
            categories: default_categories(),
            ..BudgetDocument::default()
        };
        write_json_atomic(paths.document_file(), &document)?;
        info!(
            categories = document.categories.len(),
            "created budget document with default categories"
        );
    }

    Ok(())
}

/// Starter categories, earnings first
pub fn default_categories() -> Vec<Category> {
    let earnings = DEFAULT_EARNING_CATEGORIES
        .iter()
        .map(|name| (*name, CategoryType::Earning));
    let expenses = DEFAULT_EXPENSE_CATEGORIES
        .iter()
        .map(|name| (*name, CategoryType::Expense));

    earnings
        .chain(expenses)
        .enumerate()
        .map(|(i, (name, kind))| Category::new(name, palette_color(i), kind))
        .collect()
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &BudgetPaths) -> bool {
    !paths.document_file().exists()
}
