//! Budget Tracker - household budget pages from the terminal
//!
//! This library provides the core functionality for the `budget` command: budget
//! pages holding earnings and expenses, shared people and categories, and the
//! reports computed over a page.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (pages, transactions, categories, people, money)
//! - `reports`: Budget summary, category breakdown and weekly series
//! - `storage`: JSON document storage
//! - `services`: Business logic layer
//! - `display`: Terminal formatting
//! - `export`: JSON, YAML and CSV report export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use budget_tracker::models::{Money, Transaction};
//! use budget_tracker::reports::BudgetSummary;
//!
//! let earnings = vec![Transaction::new(Money::from_dollars(2400), "Paycheck")];
//! let expenses = vec![Transaction::new(Money::from_dollars(600), "Rent")];
//!
//! let summary = BudgetSummary::calculate(&earnings, &expenses);
//! assert_eq!(summary.net_income, Money::from_dollars(1800));
//! assert_eq!(summary.projected_savings, Money::from_dollars(300));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
