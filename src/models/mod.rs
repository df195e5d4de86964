//! Core data models
//!
//! People, categories, transactions, budget pages and the persisted document
//! they live in.

pub mod category;
pub mod ids;
pub mod money;
pub mod page;
pub mod person;
pub mod transaction;

pub use category::{Category, CategoryType, CategoryValidationError};
pub use ids::{BudgetPageId, CategoryId, PersonId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use page::{BudgetDocument, BudgetPage};
pub use person::{palette_color, Person, PersonValidationError, PALETTE};
pub use transaction::{
    PersonShare, Transaction, TransactionKind, TransactionValidationError, MAX_DUE_DAY,
};
