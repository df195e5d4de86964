//! Category Breakdown
//!
//! Top-N categories by total for either earnings or expenses.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::models::{Category, CategoryId, CategoryType, Money, Transaction};

/// Cap used for spending breakdowns when none is configured
pub const DEFAULT_TOP_EXPENSE_CATEGORIES: usize = 5;

/// Cap used for earnings breakdowns when none is configured
pub const DEFAULT_TOP_EARNING_CATEGORIES: usize = 3;

/// One category's share of the breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
    /// Number of transactions that contributed to `total`
    pub count: usize,
    /// `total` as a percentage of the breakdown's grand total
    pub percentage: f64,
}

/// Top categories for one transaction type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub kind: CategoryType,
    /// Highest total first, at most the requested number of entries
    pub entries: Vec<CategoryTotal>,
    /// Sum of every transaction of this type, categorized or not
    pub grand_total: Money,
    /// Number of transactions that matched no category of this type
    pub unmatched_count: usize,
}

impl CategoryBreakdown {
    /// Aggregate `transactions` into the categories of type `kind`
    ///
    /// Categories of the other type are ignored. Transactions whose category
    /// is missing or unknown count toward `grand_total` only.
    pub fn generate(
        transactions: &[Transaction],
        categories: &[Category],
        kind: CategoryType,
        limit: usize,
    ) -> Self {
        // Seed in category order; the stable sort below keeps it for ties
        let mut entries: Vec<CategoryTotal> = Vec::new();
        let mut index: HashMap<CategoryId, usize> = HashMap::new();
        for category in categories.iter().filter(|c| c.kind == kind) {
            if index.contains_key(&category.id) {
                continue;
            }
            index.insert(category.id.clone(), entries.len());
            entries.push(CategoryTotal {
                category: category.clone(),
                total: Money::zero(),
                count: 0,
                percentage: 0.0,
            });
        }

        let mut unmatched_count = 0;
        for txn in transactions {
            let category_id = txn.category_or_other();
            match index.get(&category_id) {
                Some(&slot) => {
                    entries[slot].total += txn.amount;
                    entries[slot].count += 1;
                }
                None => {
                    debug!(
                        transaction = %txn.id,
                        category = %category_id,
                        "transaction has no {} category bucket",
                        kind
                    );
                    unmatched_count += 1;
                }
            }
        }

        let grand_total: Money = transactions.iter().map(|t| t.amount).sum();

        entries.retain(|e| !e.total.is_zero());
        entries.sort_by(|a, b| b.total.cmp(&a.total));
        entries.truncate(limit);

        for entry in &mut entries {
            entry.percentage = entry.total.percent_of(grand_total);
        }

        Self {
            kind,
            entries,
            grand_total,
            unmatched_count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
