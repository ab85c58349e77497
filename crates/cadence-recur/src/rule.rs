//! Recurrence rule value object.

use cadence_core::{CoreError, CoreResult, MonthTarget, TimeUnit, Weekday};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A recurrence rule, immutable once constructed.
///
/// `start_date` is the anchor: every weekday, ordinal, and day-of-month
/// target is derived from it. `end_date` is the inclusive upper bound for
/// expansion. Field names serialize in `camelCase` to match the persisted
/// JSON rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRule {
    /// Anchor date-time; expansion never yields a date before it.
    pub start_date: NaiveDateTime,

    /// Inclusive end of the expansion range.
    pub end_date: NaiveDateTime,

    /// Repeat stride in units of `time_unit` (>= 1).
    pub time_interval: u32,

    /// Repeat stride unit.
    pub time_unit: TimeUnit,

    /// Weekdays to emit; meaningful only for weekly rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_days: Option<Vec<Weekday>>,

    /// Day-of-month resolution policy; required for month and year rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month_target: Option<MonthTarget>,
}

impl RecurrenceRule {
    /// Creates a rule with the given unit and an interval of 1.
    #[must_use]
    pub const fn new(start_date: NaiveDateTime, end_date: NaiveDateTime, unit: TimeUnit) -> Self {
        Self {
            start_date,
            end_date,
            time_interval: 1,
            time_unit: unit,
            selected_days: None,
            month_target: None,
        }
    }

    /// Creates a daily rule.
    #[must_use]
    pub const fn daily(start_date: NaiveDateTime, end_date: NaiveDateTime) -> Self {
        Self::new(start_date, end_date, TimeUnit::Day)
    }

    /// Creates a weekly rule; set the days with [`Self::with_selected_days`].
    #[must_use]
    pub const fn weekly(start_date: NaiveDateTime, end_date: NaiveDateTime) -> Self {
        Self::new(start_date, end_date, TimeUnit::Week)
    }

    /// Creates a monthly rule; set the policy with [`Self::with_month_target`].
    #[must_use]
    pub const fn monthly(start_date: NaiveDateTime, end_date: NaiveDateTime) -> Self {
        Self::new(start_date, end_date, TimeUnit::Month)
    }

    /// Creates a yearly rule; set the policy with [`Self::with_month_target`].
    #[must_use]
    pub const fn yearly(start_date: NaiveDateTime, end_date: NaiveDateTime) -> Self {
        Self::new(start_date, end_date, TimeUnit::Year)
    }

    /// Sets the interval.
    #[must_use]
    pub const fn with_interval(mut self, interval: u32) -> Self {
        self.time_interval = interval;
        self
    }

    /// Sets the selected weekdays.
    #[must_use]
    pub fn with_selected_days(mut self, days: Vec<Weekday>) -> Self {
        self.selected_days = Some(days);
        self
    }

    /// Sets the month/year resolution policy.
    #[must_use]
    pub const fn with_month_target(mut self, target: MonthTarget) -> Self {
        self.month_target = Some(target);
        self
    }

    /// True if `day` is among the selected weekdays.
    #[must_use]
    pub fn is_selected(&self, day: Weekday) -> bool {
        self.selected_days
            .as_ref()
            .is_some_and(|days| days.contains(&day))
    }

    /// Checks the structural invariants the expansion trusts.
    ///
    /// The generator itself never fails on a malformed rule (it yields an
    /// empty sequence); this is for callers that want a strict error
    /// before persisting a rule.
    ///
    /// ## Errors
    /// Returns the first violated invariant: a zero interval, an inverted
    /// date range, a weekly rule without selected days, or a month/year
    /// rule without a resolution policy.
    pub fn validate(&self) -> CoreResult<()> {
        if self.time_interval < 1 {
            return Err(CoreError::InvalidInterval(self.time_interval));
        }
        if self.end_date < self.start_date {
            return Err(CoreError::InvertedRange);
        }
        match self.time_unit {
            TimeUnit::Week => {
                if self.selected_days.as_ref().is_none_or(Vec::is_empty) {
                    return Err(CoreError::MissingSelectedDays);
                }
            }
            TimeUnit::Month | TimeUnit::Year => {
                if self.month_target.is_none() {
                    return Err(CoreError::MissingMonthTarget(self.time_unit));
                }
            }
            TimeUnit::Day => {}
        }
        Ok(())
    }
}
