//! Reports module
//!
//! Pure computations over a snapshot of one budget page: the budget summary,
//! top-N category breakdowns and the weekly day-by-day series. Nothing here
//! touches storage or the clock; callers pass `today` in. Only the weekly
//! series can fail, when its week offset leaves the calendar.

pub mod categories;
pub mod summary;
pub mod weekly;

pub use categories::{CategoryBreakdown, CategoryTotal};
pub use summary::{BudgetSummary, SavingsOutlook, REASONABLE_DAILY_BUDGET};
pub use weekly::{BarHeights, DayBucket, WeeklyReport};

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::BudgetResult;
use crate::models::{BudgetPage, Category, CategoryType};

/// Everything the dashboard shows for one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageReport {
    pub page_name: String,
    pub generated_for: NaiveDate,
    pub summary: BudgetSummary,
    pub outlook: SavingsOutlook,
    pub top_expenses: CategoryBreakdown,
    pub top_earnings: CategoryBreakdown,
    pub week: WeeklyReport,
}

impl PageReport {
    /// Run every report over `page`
    pub fn generate(
        page: &BudgetPage,
        categories: &[Category],
        settings: &Settings,
        week_offset: i32,
        today: NaiveDate,
    ) -> BudgetResult<Self> {
        let summary = BudgetSummary::calculate(&page.earnings, &page.expenses);
        let week = WeeklyReport::generate(&page.earnings, &page.expenses, week_offset, today)?;

        Ok(Self {
            page_name: page.name.clone(),
            generated_for: today,
            outlook: summary.outlook(),
            summary,
            top_expenses: CategoryBreakdown::generate(
                &page.expenses,
                categories,
                CategoryType::Expense,
                settings.top_expense_categories,
            ),
            top_earnings: CategoryBreakdown::generate(
                &page.earnings,
                categories,
                CategoryType::Earning,
                settings.top_earning_categories,
            ),
            week,
        })
    }
}

/// Today's date as the reports see it
///
/// One-time transactions are bucketed by their UTC creation date, so "today"
/// is taken in UTC as well.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Money, Transaction};
    use chrono::TimeZone;

    #[test]
    fn test_page_report_combines_all_views() {
        let groceries = Category::with_id("food", "Food", "#4ECDC4", CategoryType::Expense);
        let salary = Category::with_id("pay", "Salary", "#96CEB4", CategoryType::Earning);

        let at = Utc.with_ymd_and_hms(2025, 10, 14, 9, 0, 0).unwrap();
        let mut page = BudgetPage::new("Household");
        page.earnings.push(
            Transaction::recorded_at(Money::from_dollars(2400), "Paycheck", at)
                .with_category(CategoryId::from("pay")),
        );
        page.expenses.push(
            Transaction::recorded_at(Money::from_dollars(300), "Groceries", at)
                .with_category(CategoryId::from("food")),
        );

        let report = PageReport::generate(
            &page,
            &[groceries, salary],
            &Settings::default(),
            0,
            NaiveDate::from_ymd_opt(2025, 10, 15).unwrap(),
        )
        .unwrap();

        assert_eq!(report.page_name, "Household");
        assert_eq!(report.summary.net_income, Money::from_dollars(2100));
        assert_eq!(report.outlook, SavingsOutlook::Surplus);
        assert_eq!(report.top_expenses.entries.len(), 1);
        assert_eq!(report.top_earnings.entries[0].category.name, "Salary");
        assert_eq!(report.week.total_expenses, Money::from_dollars(300));
    }
}
