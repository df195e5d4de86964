//! Budget page display formatting

use crate::models::{BudgetPage, Money};

/// Format the page list with per-page totals
pub fn format_page_list(pages: &[BudgetPage], symbol: &str) -> String {
    if pages.is_empty() {
        return "No budget pages found.\n\nCreate one with 'budget page create <NAME>'.\n"
            .to_string();
    }

    let name_width = pages
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8}  {:<name_width$}  {:>5}  {:>14}  {:>14}\n",
        "ID",
        "Name",
        "Txns",
        "Earnings",
        "Expenses",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<8}  {:-<name_width$}  {:->5}  {:->14}  {:->14}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for page in pages {
        let earnings: Money = page.earnings.iter().map(|t| t.amount).sum();
        let expenses: Money = page.expenses.iter().map(|t| t.amount).sum();
        output.push_str(&format!(
            "{:<8}  {:<name_width$}  {:>5}  {:>14}  {:>14}\n",
            page.id.short(),
            page.name,
            page.transaction_count(),
            earnings.format_with_symbol(symbol),
            expenses.format_with_symbol(symbol),
            name_width = name_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transaction;

    #[test]
    fn test_format_page_list_totals() {
        let mut page = BudgetPage::new("Household");
        page.earnings
            .push(Transaction::new(Money::from_dollars(2500), "Paycheck"));
        page.expenses
            .push(Transaction::new(Money::from_cents(1999), "Internet"));

        let output = format_page_list(&[page], "€");
        assert!(output.contains("Household"));
        assert!(output.contains("€2500.00"));
        assert!(output.contains("€19.99"));
    }

    #[test]
    fn test_empty_page_list() {
        assert!(format_page_list(&[], "$").starts_with("No budget pages"));
    }
}
