//! Weekly Report
//!
//! Buckets earnings and expenses into the seven days of a Sunday-to-Saturday
//! week for the bar chart. One-time transactions land on the day they were
//! recorded; recurring ones land on the day whose day-of-month matches their
//! due date, in whichever week contains it.

use chrono::{Datelike, Days, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, Transaction};

/// Number of day buckets in a week
pub const DAYS_PER_WEEK: usize = 7;

/// Smallest bar height drawn for a non-empty chart, in percent
pub const MIN_BAR_HEIGHT: f64 = 4.0;

/// Totals for one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    /// Short weekday name, e.g. "Sun"
    pub day_name: String,
    /// Day of month (1-31)
    pub day_number: u32,
    pub earnings: Money,
    pub expenses: Money,
    pub net: Money,
}

impl DayBucket {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            day_name: date.format("%a").to_string(),
            day_number: date.day(),
            earnings: Money::zero(),
            expenses: Money::zero(),
            net: Money::zero(),
        }
    }

    fn add_earning(&mut self, amount: Money) {
        self.earnings += amount;
        self.net = self.earnings - self.expenses;
    }

    fn add_expense(&mut self, amount: Money) {
        self.expenses += amount;
        self.net = self.earnings - self.expenses;
    }
}

/// Chart bar heights for one day, in percent of the tallest value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarHeights {
    pub earnings: f64,
    pub expenses: f64,
}

/// Seven day buckets plus week totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyReport {
    /// 0 = week containing `today`, -1 = previous week, 1 = next week
    pub week_offset: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub label: String,
    pub days: Vec<DayBucket>,
    pub total_earnings: Money,
    pub total_expenses: Money,
    pub net_income: Money,
}

impl WeeklyReport {
    /// Build the week `week_offset` weeks away from the one containing `today`
    ///
    /// Fails when the requested week lies outside the representable calendar.
    pub fn generate(
        earnings: &[Transaction],
        expenses: &[Transaction],
        week_offset: i32,
        today: NaiveDate,
    ) -> BudgetResult<Self> {
        let (start_date, end_date) = week_start(today, week_offset)
            .and_then(|start| {
                start
                    .checked_add_days(Days::new(DAYS_PER_WEEK as u64 - 1))
                    .map(|end| (start, end))
            })
            .ok_or_else(|| {
                BudgetError::Validation(format!("Week offset {} is out of range", week_offset))
            })?;

        let mut days: Vec<DayBucket> = start_date
            .iter_days()
            .take(DAYS_PER_WEEK)
            .map(DayBucket::new)
            .collect();

        for txn in earnings {
            if let Some(slot) = bucket_for(&days, txn) {
                days[slot].add_earning(txn.amount);
            }
        }
        for txn in expenses {
            if let Some(slot) = bucket_for(&days, txn) {
                days[slot].add_expense(txn.amount);
            }
        }

        let total_earnings: Money = days.iter().map(|d| d.earnings).sum();
        let total_expenses: Money = days.iter().map(|d| d.expenses).sum();

        Ok(Self {
            week_offset,
            start_date,
            end_date,
            label: week_label(week_offset, start_date, end_date),
            days,
            total_earnings,
            total_expenses,
            net_income: total_earnings - total_expenses,
        })
    }

    /// Largest earnings or expenses value of any day
    pub fn max_value(&self) -> Money {
        self.days
            .iter()
            .flat_map(|d| [d.earnings, d.expenses])
            .max()
            .unwrap_or_default()
    }

    /// Bar heights for every day, scaled against [`WeeklyReport::max_value`]
    pub fn bar_heights(&self) -> Vec<BarHeights> {
        let max = self.max_value();
        self.days
            .iter()
            .map(|d| BarHeights {
                earnings: bar_height(d.earnings, max),
                expenses: bar_height(d.expenses, max),
            })
            .collect()
    }
}

/// Sunday on or before `today`, shifted by whole weeks
///
/// `None` when the shifted date falls outside chrono's calendar range.
pub fn week_start(today: NaiveDate, week_offset: i32) -> Option<NaiveDate> {
    let since_sunday = u64::from(today.weekday().num_days_from_sunday());
    today
        .checked_sub_days(Days::new(since_sunday))?
        .checked_add_signed(Duration::weeks(i64::from(week_offset)))
}

/// Human label for a week
///
/// Offsets beyond one week either way use the literal range, e.g.
/// "Oct 4 - Oct 10".
pub fn week_label(week_offset: i32, start: NaiveDate, end: NaiveDate) -> String {
    match week_offset {
        0 => "This Week".to_string(),
        -1 => "Last Week".to_string(),
        1 => "Next Week".to_string(),
        _ => format!("{} - {}", start.format("%b %-d"), end.format("%b %-d")),
    }
}

/// Height of one bar as a percentage of `max`
///
/// Non-empty charts never draw a bar shorter than [`MIN_BAR_HEIGHT`]; an
/// all-zero chart draws nothing.
pub fn bar_height(value: Money, max: Money) -> f64 {
    if !max.is_positive() {
        return 0.0;
    }
    (value.as_f64() / max.as_f64() * 100.0).max(MIN_BAR_HEIGHT)
}

fn bucket_for(days: &[DayBucket], txn: &Transaction) -> Option<usize> {
    let slot = match txn.due_date {
        Some(due) => days.iter().position(|d| d.day_number == u32::from(due)),
        None => {
            let created = txn.created_on();
            days.iter().position(|d| d.date == created)
        }
    };

    if slot.is_none() {
        debug!(
            transaction = %txn.id,
            due_date = ?txn.due_date,
            "transaction falls outside the displayed week"
        );
    }
    slot
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn one_time(dollars: i64, on: NaiveDate) -> Transaction {
        let at = Utc
            .with_ymd_and_hms(on.year(), on.month(), on.day(), 14, 30, 0)
            .unwrap();
        Transaction::recorded_at(Money::from_dollars(dollars), "one-time", at)
    }

    fn recurring(dollars: i64, due: u8) -> Transaction {
        // Recorded long before any week under test
        one_time(dollars, date(2020, 1, 1)).with_due_date(due)
    }

    // Wednesday 2025-10-15; its week runs Sun 12th to Sat 18th
    fn today() -> NaiveDate {
        date(2025, 10, 15)
    }

    #[test]
    fn test_week_starts_on_sunday() {
        assert_eq!(week_start(today(), 0), Some(date(2025, 10, 12)));
        assert_eq!(week_start(date(2025, 10, 12), 0), Some(date(2025, 10, 12)));
        assert_eq!(week_start(date(2025, 10, 18), 0), Some(date(2025, 10, 12)));
        assert_eq!(week_start(today(), -1), Some(date(2025, 10, 5)));
        assert_eq!(week_start(today(), 2), Some(date(2025, 10, 26)));
    }

    #[test]
    fn test_offset_beyond_calendar_is_an_error() {
        assert_eq!(week_start(today(), 100_000_000), None);
        assert_eq!(week_start(today(), i32::MIN), None);

        let err = WeeklyReport::generate(&[], &[], 100_000_000, today()).unwrap_err();
        assert!(err.is_validation());
        assert!(WeeklyReport::generate(&[], &[], -100_000_000, today()).is_err());
    }

    #[test]
    fn test_seven_ordered_buckets() {
        let report = WeeklyReport::generate(&[], &[], 0, today()).unwrap();
        assert_eq!(report.days.len(), DAYS_PER_WEEK);
        assert_eq!(report.days[0].day_name, "Sun");
        assert_eq!(report.days[0].day_number, 12);
        assert_eq!(report.days[6].day_name, "Sat");
        assert_eq!(report.end_date, date(2025, 10, 18));
        assert_eq!(report.label, "This Week");
    }

    #[test]
    fn test_one_time_transactions_bucket_by_creation_date() {
        let earnings = vec![one_time(500, date(2025, 10, 13))];
        let expenses = vec![
            one_time(120, date(2025, 10, 13)),
            one_time(30, date(2025, 10, 17)),
        ];

        let report = WeeklyReport::generate(&earnings, &expenses, 0, today()).unwrap();
        let monday = &report.days[1];
        assert_eq!(monday.earnings, Money::from_dollars(500));
        assert_eq!(monday.expenses, Money::from_dollars(120));
        assert_eq!(monday.net, Money::from_dollars(380));
        assert_eq!(report.days[5].net, Money::from_dollars(-30));

        assert_eq!(report.total_earnings, Money::from_dollars(500));
        assert_eq!(report.total_expenses, Money::from_dollars(150));
        assert_eq!(report.net_income, Money::from_dollars(350));
    }

    #[test]
    fn test_one_time_outside_window_is_dropped() {
        let expenses = vec![
            one_time(80, date(2025, 10, 11)),
            one_time(80, date(2025, 10, 19)),
        ];
        let report = WeeklyReport::generate(&[], &expenses, 0, today()).unwrap();
        assert!(report.total_expenses.is_zero());
        assert!(report.days.iter().all(|d| d.expenses.is_zero()));
    }

    #[test]
    fn test_recurring_only_appears_in_week_with_due_day() {
        let expenses = vec![recurring(900, 15)];

        let this_week = WeeklyReport::generate(&[], &expenses, 0, today()).unwrap();
        assert_eq!(this_week.days[3].expenses, Money::from_dollars(900));
        assert_eq!(this_week.total_expenses, Money::from_dollars(900));

        let next_week = WeeklyReport::generate(&[], &expenses, 1, today()).unwrap();
        assert!(next_week.total_expenses.is_zero());

        // Four weeks later the window covers Nov 9-15
        let next_month = WeeklyReport::generate(&[], &expenses, 4, today()).unwrap();
        assert_eq!(next_month.total_expenses, Money::from_dollars(900));
        assert_eq!(next_month.days[6].day_number, 15);
    }

    #[test]
    fn test_recurring_due_on_31st_is_invisible_in_short_month() {
        let expenses = vec![recurring(50, 31)];
        // Week of Feb 23 - Mar 1 2025 has no 31st
        let report = WeeklyReport::generate(&[], &expenses, 0, date(2025, 2, 26)).unwrap();
        assert!(report.total_expenses.is_zero());
    }

    #[test]
    fn test_recurring_ignores_creation_date() {
        let mut txn = one_time(40, date(2025, 10, 13));
        txn.due_date = Some(16);
        let report = WeeklyReport::generate(&[txn], &[], 0, today()).unwrap();
        assert!(report.days[1].earnings.is_zero());
        assert_eq!(report.days[4].earnings, Money::from_dollars(40));
    }

    #[test]
    fn test_labels() {
        assert_eq!(WeeklyReport::generate(&[], &[], -1, today()).unwrap().label, "Last Week");
        assert_eq!(WeeklyReport::generate(&[], &[], 1, today()).unwrap().label, "Next Week");
        assert_eq!(
            WeeklyReport::generate(&[], &[], -2, today()).unwrap().label,
            "Sep 28 - Oct 4"
        );
    }

    #[test]
    fn test_bar_heights_all_zero_week() {
        let report = WeeklyReport::generate(&[], &[], 0, today()).unwrap();
        assert!(report.max_value().is_zero());
        assert!(report
            .bar_heights()
            .iter()
            .all(|h| h.earnings == 0.0 && h.expenses == 0.0));
    }

    #[test]
    fn test_bar_heights_scale_and_floor() {
        let earnings = vec![one_time(1000, date(2025, 10, 12))];
        let expenses = vec![one_time(250, date(2025, 10, 12)), one_time(10, date(2025, 10, 13))];
        let report = WeeklyReport::generate(&earnings, &expenses, 0, today()).unwrap();

        let heights = report.bar_heights();
        assert_eq!(heights[0].earnings, 100.0);
        assert_eq!(heights[0].expenses, 25.0);
        assert_eq!(heights[1].expenses, MIN_BAR_HEIGHT);
        assert_eq!(heights[2].earnings, MIN_BAR_HEIGHT);
    }
}
