//! Budget Summary
//!
//! Folds a page's earnings and expenses into totals, net income, a daily
//! spending ceiling and a monthly savings projection.

use serde::{Deserialize, Serialize};

use crate::models::{Money, Transaction};

/// Fixed month length used for the daily budget
pub const DAYS_PER_MONTH: i64 = 30;

/// Daily spend considered reasonable when projecting savings
pub const REASONABLE_DAILY_BUDGET: Money = Money::from_dollars(50);

/// Summary statistics for one set of earnings and expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub total_earnings: Money,
    pub total_expenses: Money,
    /// Always `total_earnings - total_expenses`
    pub net_income: Money,
    /// Net income spread over a 30-day month; zero unless net income is positive
    ///
    /// Truncated toward zero to whole cents, so $1000 gives $33.33 and
    /// `max_daily_budget * 30` can fall up to 29 cents short of net income.
    /// `projected_savings` is computed from the monthly figures and loses nothing.
    pub max_daily_budget: Money,
    /// Monthly surplus above the reasonable daily budget, or the monthly
    /// shortfall below it; see [`BudgetSummary::outlook`]
    pub projected_savings: Money,
}

/// What `projected_savings` means for a given summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SavingsOutlook {
    /// Net income is zero or negative
    None,
    /// Daily budget meets the reasonable threshold; the projection is savings
    Surplus,
    /// Daily budget is below the threshold; the projection is extra monthly
    /// income needed to reach it
    Shortfall,
}

impl BudgetSummary {
    /// Compute the summary for a page's earnings and expenses
    ///
    /// Empty inputs give an all-zero summary.
    pub fn calculate(earnings: &[Transaction], expenses: &[Transaction]) -> Self {
        let total_earnings: Money = earnings.iter().map(|t| t.amount).sum();
        let total_expenses: Money = expenses.iter().map(|t| t.amount).sum();
        Self::from_totals(total_earnings, total_expenses)
    }

    /// Compute the summary from precomputed totals
    pub fn from_totals(total_earnings: Money, total_expenses: Money) -> Self {
        let net_income = total_earnings - total_expenses;

        let max_daily_budget = if net_income.is_positive() {
            net_income.split_even(DAYS_PER_MONTH)
        } else {
            Money::zero()
        };

        // (daily - 50) * 30 and (50 - daily) * 30, evaluated on the monthly
        // figures so the cents stay exact
        let reasonable_month = REASONABLE_DAILY_BUDGET * DAYS_PER_MONTH;
        let projected_savings = if !net_income.is_positive() {
            Money::zero()
        } else if max_daily_budget >= REASONABLE_DAILY_BUDGET {
            net_income - reasonable_month
        } else {
            reasonable_month - net_income
        };

        Self {
            total_earnings,
            total_expenses,
            net_income,
            max_daily_budget,
            projected_savings,
        }
    }

    /// Classify `projected_savings` as savings or as a shortfall
    pub fn outlook(&self) -> SavingsOutlook {
        if !self.net_income.is_positive() {
            SavingsOutlook::None
        } else if self.max_daily_budget >= REASONABLE_DAILY_BUDGET {
            SavingsOutlook::Surplus
        } else {
            SavingsOutlook::Shortfall
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txns(amounts: &[i64]) -> Vec<Transaction> {
        amounts
            .iter()
            .map(|d| Transaction::new(Money::from_dollars(*d), "item"))
            .collect()
    }

    #[test]
    fn test_empty_inputs_give_zero_summary() {
        let summary = BudgetSummary::calculate(&[], &[]);
        assert_eq!(summary, BudgetSummary::default());
        assert_eq!(summary.outlook(), SavingsOutlook::None);
    }

    #[test]
    fn test_net_income_is_exact_difference() {
        let earnings = vec![
            Transaction::new(Money::from_cents(10), "a"),
            Transaction::new(Money::from_cents(20), "b"),
        ];
        let expenses = vec![Transaction::new(Money::from_cents(30), "c")];

        let summary = BudgetSummary::calculate(&earnings, &expenses);
        assert_eq!(summary.total_earnings.cents(), 30);
        assert_eq!(summary.total_expenses.cents(), 30);
        assert_eq!(
            summary.net_income,
            summary.total_earnings - summary.total_expenses
        );
        assert!(summary.net_income.is_zero());
    }

    #[test]
    fn test_non_positive_net_income_zeroes_projection() {
        let summary = BudgetSummary::calculate(&txns(&[1000]), &txns(&[700, 500]));
        assert_eq!(summary.net_income, Money::from_dollars(-200));
        assert!(summary.max_daily_budget.is_zero());
        assert!(summary.projected_savings.is_zero());
        assert_eq!(summary.outlook(), SavingsOutlook::None);
    }

    #[test]
    fn test_surplus_branch() {
        // 1800 / 30 = 60 per day, (60 - 50) * 30 = 300
        let summary = BudgetSummary::calculate(&txns(&[2000]), &txns(&[200]));
        assert_eq!(summary.net_income, Money::from_dollars(1800));
        assert_eq!(summary.max_daily_budget, Money::from_dollars(60));
        assert_eq!(summary.projected_savings, Money::from_dollars(300));
        assert_eq!(summary.outlook(), SavingsOutlook::Surplus);
    }

    #[test]
    fn test_shortfall_branch_is_positive() {
        // 600 / 30 = 20 per day, (50 - 20) * 30 = 900
        let summary = BudgetSummary::calculate(&txns(&[600]), &[]);
        assert_eq!(summary.max_daily_budget, Money::from_dollars(20));
        assert_eq!(summary.projected_savings, Money::from_dollars(900));
        assert_eq!(summary.outlook(), SavingsOutlook::Shortfall);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let summary = BudgetSummary::from_totals(Money::from_dollars(1500), Money::zero());
        assert_eq!(summary.max_daily_budget, REASONABLE_DAILY_BUDGET);
        assert!(summary.projected_savings.is_zero());
        assert_eq!(summary.outlook(), SavingsOutlook::Surplus);
    }

    #[test]
    fn test_fractional_daily_budget_truncates() {
        let summary = BudgetSummary::from_totals(Money::from_dollars(1000), Money::zero());
        assert_eq!(summary.max_daily_budget.cents(), 3333);
        assert_eq!(summary.projected_savings, Money::from_dollars(500));
    }
}
