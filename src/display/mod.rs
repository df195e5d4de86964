//! Display formatting for terminal output
//!
//! Provides utilities for formatting pages, transactions, people, categories
//! and reports for terminal display.

pub mod category;
pub mod page;
pub mod person;
pub mod report;
pub mod transaction;

pub use category::format_category_list;
pub use page::format_page_list;
pub use person::format_people_list;
pub use report::{
    format_category_breakdown, format_page_report, format_summary, format_weekly_chart,
    savings_message,
};
pub use transaction::{
    format_page_transactions, format_transaction_details, person_colors, person_names,
    schedule_text,
};
