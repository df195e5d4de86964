//! Report formatting for terminal output
//!
//! Renders the budget summary, category breakdowns and the weekly chart, plus
//! the small text helpers they share.

use crate::models::{CategoryType, Money};
use crate::reports::{BudgetSummary, CategoryBreakdown, PageReport, SavingsOutlook, WeeklyReport};

/// Width of the horizontal bars in the category breakdown
const CATEGORY_BAR_WIDTH: usize = 20;

/// Rows available to the vertical bars of the weekly chart
const WEEK_CHART_HEIGHT: usize = 8;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple horizontal bar
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// The line under the summary explaining `projected_savings`
pub fn savings_message(summary: &BudgetSummary, symbol: &str) -> String {
    let amount = summary.projected_savings.format_with_symbol(symbol);
    match summary.outlook() {
        SavingsOutlook::Surplus => format!("You can save {}/month", amount),
        SavingsOutlook::Shortfall => format!("Need {} more/month", amount),
        SavingsOutlook::None => "No savings possible".to_string(),
    }
}

/// Format the budget summary block
pub fn format_summary(summary: &BudgetSummary, symbol: &str) -> String {
    let row = |label: &str, amount: Money| {
        format!("{:<20} {:>14}\n", label, amount.format_with_symbol(symbol))
    };

    let mut output = String::new();
    output.push_str(&row("Total earnings", summary.total_earnings));
    output.push_str(&row("Total expenses", summary.total_expenses));
    output.push_str(&separator(35));
    output.push('\n');
    output.push_str(&row("Net income", summary.net_income));
    output.push_str(&row("Max daily budget", summary.max_daily_budget));
    output.push_str(&row("Projected savings", summary.projected_savings));
    output.push('\n');
    output.push_str(&savings_message(summary, symbol));
    output.push('\n');
    output
}

/// Format a category breakdown as ranked bars
pub fn format_category_breakdown(breakdown: &CategoryBreakdown, symbol: &str) -> String {
    let title = match breakdown.kind {
        CategoryType::Expense => "Top Expense Categories",
        CategoryType::Earning => "Top Earning Categories",
    };

    let mut output = String::new();
    output.push_str(title);
    output.push('\n');
    output.push_str(&separator(70));
    output.push('\n');

    if breakdown.is_empty() {
        output.push_str("  No categorized transactions.\n");
        return output;
    }

    let max = breakdown
        .entries
        .first()
        .map(|e| e.total.as_f64())
        .unwrap_or_default();

    for (rank, entry) in breakdown.entries.iter().enumerate() {
        output.push_str(&format!(
            "{:>2}. {:<20} {} {:>12} {:>6}\n",
            rank + 1,
            truncate(&entry.category.name, 20),
            format_bar(entry.total.as_f64(), max, CATEGORY_BAR_WIDTH),
            entry.total.format_with_symbol(symbol),
            format_percentage(entry.percentage),
        ));
    }

    output.push_str(&separator(70));
    output.push('\n');
    output.push_str(&format!(
        "    {:<20} {:>33}\n",
        "Total",
        breakdown.grand_total.format_with_symbol(symbol)
    ));
    if breakdown.unmatched_count > 0 {
        output.push_str(&format!(
            "    ({} uncategorized transaction(s) included in the total)\n",
            breakdown.unmatched_count
        ));
    }

    output
}

/// Format the weekly series as a vertical bar chart plus a day table
///
/// `E` columns are earnings and `X` columns are expenses.
pub fn format_weekly_chart(week: &WeeklyReport, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{} ({} - {})\n",
        week.label,
        week.start_date.format("%Y-%m-%d"),
        week.end_date.format("%Y-%m-%d")
    ));
    output.push_str(&separator(70));
    output.push('\n');

    let heights = week.bar_heights();
    let rows_for = |pct: f64| ((pct / 100.0) * WEEK_CHART_HEIGHT as f64).ceil() as usize;

    for level in (1..=WEEK_CHART_HEIGHT).rev() {
        output.push_str("  ");
        for bar in &heights {
            let earning = if rows_for(bar.earnings) >= level { "▇" } else { " " };
            let expense = if rows_for(bar.expenses) >= level { "▇" } else { " " };
            output.push_str(&format!(" {}{}   ", earning, expense));
        }
        output.push('\n');
    }

    output.push_str("  ");
    for day in &week.days {
        output.push_str(&format!(" {:<5}", format!("{} {}", day.day_name, day.day_number)));
        output.push(' ');
    }
    output.push_str("\n\n");

    output.push_str(&format!(
        "{:<12} {:>14} {:>14} {:>14}\n",
        "Day", "Earnings (E)", "Expenses (X)", "Net"
    ));
    for day in &week.days {
        output.push_str(&format!(
            "{:<12} {:>14} {:>14} {:>14}\n",
            format!("{} {}", day.day_name, day.date.format("%b %-d")),
            day.earnings.format_with_symbol(symbol),
            day.expenses.format_with_symbol(symbol),
            day.net.format_with_symbol(symbol),
        ));
    }
    output.push_str(&separator(57));
    output.push('\n');
    output.push_str(&format!(
        "{:<12} {:>14} {:>14} {:>14}\n",
        "Week",
        week.total_earnings.format_with_symbol(symbol),
        week.total_expenses.format_with_symbol(symbol),
        week.net_income.format_with_symbol(symbol),
    ));

    output
}

/// Format the full dashboard for one page
pub fn format_page_report(report: &PageReport, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Budget: {} (as of {})\n\n",
        report.page_name,
        report.generated_for.format("%Y-%m-%d")
    ));
    output.push_str(&format_summary(&report.summary, symbol));
    output.push('\n');
    output.push_str(&format_category_breakdown(&report.top_expenses, symbol));
    output.push('\n');
    output.push_str(&format_category_breakdown(&report.top_earnings, symbol));
    output.push('\n');
    output.push_str(&format_weekly_chart(&report.week, symbol));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Transaction};
    use chrono::NaiveDate;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(10.0, 0.0, 4), "    ");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Café au lait", 7), "Café...");
    }

    #[test]
    fn test_savings_message() {
        let surplus = BudgetSummary::from_totals(Money::from_dollars(2000), Money::from_dollars(200));
        assert_eq!(savings_message(&surplus, "$"), "You can save $300.00/month");

        let shortfall = BudgetSummary::from_totals(Money::from_dollars(1000), Money::from_dollars(400));
        assert_eq!(savings_message(&shortfall, "$"), "Need $900.00 more/month");

        let none = BudgetSummary::from_totals(Money::from_dollars(100), Money::from_dollars(400));
        assert_eq!(savings_message(&none, "$"), "No savings possible");
    }

    #[test]
    fn test_breakdown_lists_ranked_categories() {
        let food = Category::with_id("food", "Food", "#4ECDC4", CategoryType::Expense);
        let rent = Category::with_id("rent", "Rent", "#FF6B6B", CategoryType::Expense);
        let txns = vec![
            Transaction::new(Money::from_dollars(100), "Shop").with_category("food".into()),
            Transaction::new(Money::from_dollars(900), "Rent").with_category("rent".into()),
            Transaction::new(Money::from_dollars(25), "Misc"),
        ];
        let breakdown =
            CategoryBreakdown::generate(&txns, &[food, rent], CategoryType::Expense, 5);

        let output = format_category_breakdown(&breakdown, "$");
        let rent_line = output.find(" 1. Rent").unwrap();
        let food_line = output.find(" 2. Food").unwrap();
        assert!(rent_line < food_line);
        assert!(output.contains("$1025.00"));
        assert!(output.contains("1 uncategorized"));
    }

    #[test]
    fn test_weekly_chart_has_every_day() {
        let today = NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();
        let week = WeeklyReport::generate(&[], &[], 0, today).unwrap();
        let output = format_weekly_chart(&week, "$");

        assert!(output.starts_with("This Week (2025-10-12 - 2025-10-18)"));
        for day in ["Sun 12", "Mon 13", "Sat 18"] {
            assert!(output.contains(day));
        }
    }
}
