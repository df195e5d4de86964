//! Transaction display formatting
//!
//! Formats a page's earnings and expenses for terminal display, resolving
//! the people and category each one references.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{BudgetDocument, BudgetPage, Money, Transaction, TransactionKind};

use super::report::truncate;

/// Name shown for a share whose person no longer exists
pub const UNKNOWN_PERSON: &str = "Unknown";

/// Color shown for a share whose person no longer exists
pub const UNKNOWN_PERSON_COLOR: &str = "#000000";

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "People")]
    people: String,
    #[tabled(rename = "When")]
    schedule: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// English ordinal for a day of month: 1st, 2nd, 3rd, 11th, 22nd
pub fn ordinal(day: u8) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", day, suffix)
}

/// When a transaction happens: its due day, or the date it was recorded
pub fn schedule_text(txn: &Transaction) -> String {
    match txn.due_date {
        Some(day) if txn.is_recurring => format!("Due: {} • Recurring", ordinal(day)),
        Some(day) => format!("Due: {}", ordinal(day)),
        None => txn.created_on().format("%Y-%m-%d").to_string(),
    }
}

/// Names of the people a transaction is split across
///
/// Shares pointing at a removed person, and transactions with no shares at
/// all, show as "Unknown".
pub fn person_names(txn: &Transaction, doc: &BudgetDocument) -> Vec<String> {
    if txn.people.is_empty() {
        return vec![UNKNOWN_PERSON.to_string()];
    }
    txn.people
        .iter()
        .map(|share| {
            doc.person(&share.person_id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| UNKNOWN_PERSON.to_string())
        })
        .collect()
}

/// Colors of the people a transaction is split across, same order as
/// [`person_names`]
pub fn person_colors(txn: &Transaction, doc: &BudgetDocument) -> Vec<String> {
    if txn.people.is_empty() {
        return vec![UNKNOWN_PERSON_COLOR.to_string()];
    }
    txn.people
        .iter()
        .map(|share| {
            doc.person(&share.person_id)
                .map(|p| p.color.clone())
                .unwrap_or_else(|| UNKNOWN_PERSON_COLOR.to_string())
        })
        .collect()
}

fn category_label(txn: &Transaction, doc: &BudgetDocument) -> String {
    match &txn.category_id {
        Some(id) => doc
            .category(id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "(unknown)".to_string()),
        None => "(uncategorized)".to_string(),
    }
}

fn transaction_row(txn: &Transaction, doc: &BudgetDocument, symbol: &str) -> TransactionRow {
    TransactionRow {
        id: txn.id.short().to_string(),
        description: truncate(&txn.description, 30),
        category: category_label(txn, doc),
        people: person_names(txn, doc).join(", "),
        schedule: schedule_text(txn),
        amount: txn.amount.format_with_symbol(symbol),
    }
}

/// Format one list of a page as a table
pub fn format_transaction_table(
    transactions: &[Transaction],
    doc: &BudgetDocument,
    symbol: &str,
) -> String {
    if transactions.is_empty() {
        return "  (none)\n".to_string();
    }

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|txn| transaction_row(txn, doc, symbol))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Format both lists of a page, earnings first
pub fn format_page_transactions(page: &BudgetPage, doc: &BudgetDocument, symbol: &str) -> String {
    if page.transaction_count() == 0 {
        return format!(
            "No transactions on '{}'.\n\nAdd one with 'budget transaction add'.\n",
            page.name
        );
    }

    let mut output = String::new();
    for kind in [TransactionKind::Earning, TransactionKind::Expense] {
        let list = page.transactions(kind);
        let total: Money = list.iter().map(|t| t.amount).sum();
        let heading = match kind {
            TransactionKind::Earning => "Earnings",
            TransactionKind::Expense => "Expenses",
        };

        output.push_str(&format!(
            "{} ({}, total {})\n",
            heading,
            list.len(),
            total.format_with_symbol(symbol)
        ));
        output.push_str(&format_transaction_table(list, doc, symbol));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, doc: &BudgetDocument, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Category:    {}\n", category_label(txn, doc)));
    output.push_str(&format!("When:        {}\n", schedule_text(txn)));

    if !txn.people.is_empty() {
        output.push_str("People:\n");
        for (share, name) in txn.people.iter().zip(person_names(txn, doc)) {
            output.push_str(&format!(
                "  {:<20} {:>12}\n",
                name,
                share.amount.format_with_symbol(symbol)
            ));
        }
    }

    output
}
