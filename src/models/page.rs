//! Budget pages and the persisted document
//!
//! A page groups one related set of earnings and expenses (a household, a
//! month). The document is everything the store reads and writes at once.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::{Category, CategoryType};
use super::ids::{BudgetPageId, CategoryId, PersonId, TransactionId};
use super::person::Person;
use super::transaction::{Transaction, TransactionKind};

/// A named set of earnings and expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetPage {
    pub id: BudgetPageId,
    pub name: String,
    #[serde(default)]
    pub earnings: Vec<Transaction>,
    #[serde(default)]
    pub expenses: Vec<Transaction>,
    pub created_at: DateTime<Utc>,
}

impl BudgetPage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: BudgetPageId::new(),
            name: name.into(),
            earnings: Vec::new(),
            expenses: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// The list holding transactions of `kind`
    pub fn transactions(&self, kind: TransactionKind) -> &[Transaction] {
        match kind {
            CategoryType::Earning => &self.earnings,
            CategoryType::Expense => &self.expenses,
        }
    }

    pub fn transactions_mut(&mut self, kind: TransactionKind) -> &mut Vec<Transaction> {
        match kind {
            CategoryType::Earning => &mut self.earnings,
            CategoryType::Expense => &mut self.expenses,
        }
    }

    /// Find a transaction in either list by ID or ID prefix
    pub fn find_transaction(&self, identifier: &str) -> Option<(TransactionKind, &Transaction)> {
        CategoryType::all().iter().find_map(|kind| {
            self.transactions(*kind)
                .iter()
                .find(|t| t.id.as_str() == identifier || t.id.matches_prefix(identifier))
                .map(|t| (*kind, t))
        })
    }

    /// Mutable access to a transaction by exact ID
    pub fn transaction_mut(&mut self, id: &TransactionId) -> Option<&mut Transaction> {
        self.earnings
            .iter_mut()
            .chain(self.expenses.iter_mut())
            .find(|t| &t.id == id)
    }

    /// Remove a transaction by exact ID, returning it
    pub fn remove_transaction(&mut self, id: &TransactionId) -> Option<Transaction> {
        for kind in CategoryType::all() {
            let list = self.transactions_mut(*kind);
            if let Some(idx) = list.iter().position(|t| &t.id == id) {
                return Some(list.remove(idx));
            }
        }
        None
    }

    pub fn transaction_count(&self) -> usize {
        self.earnings.len() + self.expenses.len()
    }
}

/// The whole persisted document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetDocument {
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub budget_pages: Vec<BudgetPage>,
}

impl BudgetDocument {
    /// Categories of one type, in stored order
    pub fn categories_of(&self, kind: CategoryType) -> Vec<Category> {
        self.categories
            .iter()
            .filter(|c| c.kind == kind)
            .cloned()
            .collect()
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.iter().find(|p| &p.id == id)
    }

    pub fn page(&self, id: &BudgetPageId) -> Option<&BudgetPage> {
        self.budget_pages.iter().find(|p| &p.id == id)
    }

    pub fn page_mut(&mut self, id: &BudgetPageId) -> Option<&mut BudgetPage> {
        self.budget_pages.iter_mut().find(|p| &p.id == id)
    }

    /// Resolve a page by exact ID, case-insensitive name, or ID prefix
    pub fn find_page(&self, identifier: &str) -> Option<&BudgetPage> {
        let identifier = identifier.trim();
        self.budget_pages
            .iter()
            .find(|p| p.id.as_str() == identifier)
            .or_else(|| {
                self.budget_pages
                    .iter()
                    .find(|p| p.name.eq_ignore_ascii_case(identifier))
            })
            .or_else(|| {
                self.budget_pages
                    .iter()
                    .find(|p| p.id.matches_prefix(identifier))
            })
    }

    /// Resolve a category by exact ID, case-insensitive name, or ID prefix
    pub fn find_category(&self, identifier: &str) -> Option<&Category> {
        let identifier = identifier.trim();
        self.categories
            .iter()
            .find(|c| c.id.as_str() == identifier)
            .or_else(|| {
                self.categories
                    .iter()
                    .find(|c| c.name.eq_ignore_ascii_case(identifier))
            })
            .or_else(|| self.categories.iter().find(|c| c.id.matches_prefix(identifier)))
    }

    /// Resolve a person by exact ID, case-insensitive name, or ID prefix
    pub fn find_person(&self, identifier: &str) -> Option<&Person> {
        let identifier = identifier.trim();
        self.people
            .iter()
            .find(|p| p.id.as_str() == identifier)
            .or_else(|| {
                self.people
                    .iter()
                    .find(|p| p.name.eq_ignore_ascii_case(identifier))
            })
            .or_else(|| self.people.iter().find(|p| p.id.matches_prefix(identifier)))
    }
}
