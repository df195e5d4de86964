//! Service layer for the budget tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, reference resolution, and persistence of each change.

pub mod category;
pub mod page;
pub mod person;
pub mod transaction;

pub use category::CategoryService;
pub use page::PageService;
pub use person::PersonService;
pub use transaction::{
    parse_share, CreateTransactionInput, TransactionService, UpdateTransactionInput,
};
