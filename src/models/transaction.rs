//! Transaction model
//!
//! Earnings and expenses share one record type; which total a transaction
//! feeds is decided by the page list it is stored in.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::CategoryType;
use super::ids::{CategoryId, PersonId, TransactionId};
use super::money::Money;

/// Earning or expense; the same distinction categories carry
pub type TransactionKind = CategoryType;

/// Highest valid day-of-month for a due date
pub const MAX_DUE_DAY: u8 = 31;

/// The part of a transaction attributed to one person
///
/// Shares are informational and need not add up to the transaction amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonShare {
    pub person_id: PersonId,
    pub amount: Money,
}

impl PersonShare {
    pub fn new(person_id: PersonId, amount: Money) -> Self {
        Self { person_id, amount }
    }
}

/// A single earning or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    /// Non-negative amount
    pub amount: Money,

    pub description: String,

    #[serde(default)]
    pub people: Vec<PersonShare>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,

    /// Day of month (1-31) the transaction recurs on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<u8>,

    /// Explicit "recurring" marker shown next to the due date
    #[serde(default)]
    pub is_recurring: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a one-time transaction stamped with the current time
    pub fn new(amount: Money, description: impl Into<String>) -> Self {
        Self::recorded_at(amount, description, Utc::now())
    }

    /// Create a one-time transaction with an explicit creation time
    pub fn recorded_at(
        amount: Money,
        description: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            amount,
            description: description.into(),
            people: Vec::new(),
            category_id: None,
            due_date: None,
            is_recurring: false,
            created_at,
            updated_at: created_at,
        }
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_due_date(mut self, day: u8) -> Self {
        self.due_date = Some(day);
        self
    }

    pub fn with_share(mut self, person_id: PersonId, amount: Money) -> Self {
        self.people.push(PersonShare::new(person_id, amount));
        self
    }

    /// A due date means the transaction repeats every month on that day
    pub fn recurs_monthly(&self) -> bool {
        self.due_date.is_some()
    }

    /// Calendar date (UTC) the transaction was recorded on
    pub fn created_on(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    /// Category this transaction aggregates under, `"other"` when untagged
    pub fn category_or_other(&self) -> CategoryId {
        self.category_id.clone().unwrap_or_else(CategoryId::other)
    }

    /// Sum of the per-person shares
    pub fn shares_total(&self) -> Money {
        self.people.iter().map(|share| share.amount).sum()
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }

        if let Some(day) = self.due_date {
            if !(1..=MAX_DUE_DAY).contains(&day) {
                return Err(TransactionValidationError::DueDateOutOfRange(day));
            }
        }

        if let Some(share) = self.people.iter().find(|s| s.amount.is_negative()) {
            return Err(TransactionValidationError::NegativeShare(share.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.description, self.amount)
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyDescription,
    NegativeAmount(Money),
    DueDateOutOfRange(u8),
    NegativeShare(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Transaction description cannot be empty"),
            Self::NegativeAmount(amount) => {
                write!(f, "Transaction amount cannot be negative ({})", amount)
            }
            Self::DueDateOutOfRange(day) => {
                write!(f, "Due date must be a day of month between 1 and 31 (got {})", day)
            }
            Self::NegativeShare(amount) => {
                write!(f, "Person share cannot be negative ({})", amount)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
