//! Human-readable rule descriptions.
//!
//! Presentation only: nothing here feeds back into expansion. Callers
//! that localize should treat these strings as a default rendering.

use cadence_core::{MonthTarget, TimeUnit, Weekday};
use chrono::Datelike;

use crate::calendar::{nth_weekday_in_month, ordinal_label};
use crate::rule::RecurrenceRule;

/// Builds a natural-language sentence for a rule.
///
/// "Occurs every day", "Occurs every other Monday and Wednesday",
/// "Occurs on the last Friday of every month", and so on.
#[must_use]
pub fn describe_rule(rule: &RecurrenceRule) -> String {
    let interval = rule.time_interval;
    match rule.time_unit {
        TimeUnit::Day => match interval {
            1 => "Occurs every day".to_string(),
            2 => "Occurs every other day".to_string(),
            n => format!("Occurs every {n} days"),
        },
        TimeUnit::Week => {
            let days = join_days(rule.selected_days.as_deref().unwrap_or(&[]));
            match interval {
                1 => format!("Occurs every {days}"),
                2 => format!("Occurs every other {days}"),
                n => format!("Occurs every {n} weeks on {days}"),
            }
        }
        TimeUnit::Month => match rule.month_target.unwrap_or(MonthTarget::Absolute) {
            MonthTarget::Absolute => {
                let day = rule.start_date.day();
                match interval {
                    1 => format!("Occurs on day {day} of every month"),
                    n => format!("Occurs every {n} months on day {day}"),
                }
            }
            target => {
                let anchor = ordinal_anchor(rule, target);
                match interval {
                    1 => format!("Occurs on the {anchor} of every month"),
                    n => format!("Occurs every {n} months on the {anchor}"),
                }
            }
        },
        TimeUnit::Year => {
            let month = rule.start_date.format("%B");
            match rule.month_target.unwrap_or(MonthTarget::Absolute) {
                MonthTarget::Absolute => {
                    format!("Occurs every year on {month} {}", rule.start_date.day())
                }
                target => {
                    format!(
                        "Occurs every year on the {} of {month}",
                        ordinal_anchor(rule, target)
                    )
                }
            }
        }
    }
}

/// "first Monday", "last Friday", etc., derived from the rule anchor.
fn ordinal_anchor(rule: &RecurrenceRule, target: MonthTarget) -> String {
    let start = rule.start_date.date();
    let info = nth_weekday_in_month(start);
    let ordinal =
        ordinal_label(info.nth, target == MonthTarget::RelativeLast).unwrap_or_default();
    let weekday = Weekday::from_chrono(start.weekday()).name();
    format!("{ordinal} {weekday}")
}

/// Joins weekday names as "A", "A and B", or "A, B, and C".
fn join_days(days: &[Weekday]) -> String {
    match days {
        [] => String::new(),
        [only] => only.name().to_string(),
        [first, second] => format!("{} and {}", first.name(), second.name()),
        [init @ .., tail] => {
            let head: Vec<_> = init.iter().copied().map(Weekday::name).collect();
            format!("{}, and {}", head.join(", "), tail.name())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn daily_descriptions() {
        let rule = RecurrenceRule::daily(dt(2024, 1, 1), dt(2024, 2, 1));
        assert_eq!(describe_rule(&rule), "Occurs every day");
        assert_eq!(
            describe_rule(&rule.clone().with_interval(2)),
            "Occurs every other day"
        );
        assert_eq!(
            describe_rule(&rule.with_interval(3)),
            "Occurs every 3 days"
        );
    }

    #[test]
    fn weekly_descriptions() {
        let rule = RecurrenceRule::weekly(dt(2024, 1, 1), dt(2024, 2, 1))
            .with_selected_days(vec![Weekday::Monday, Weekday::Wednesday]);
        assert_eq!(
            describe_rule(&rule),
            "Occurs every Monday and Wednesday"
        );
        assert_eq!(
            describe_rule(&rule.clone().with_interval(2)),
            "Occurs every other Monday and Wednesday"
        );
        assert_eq!(
            describe_rule(&rule.with_interval(3)),
            "Occurs every 3 weeks on Monday and Wednesday"
        );
    }

    #[test]
    fn weekly_day_list_uses_oxford_comma() {
        let rule = RecurrenceRule::weekly(dt(2024, 1, 1), dt(2024, 2, 1))
            .with_selected_days(vec![Weekday::Monday, Weekday::Wednesday, Weekday::Friday]);
        assert_eq!(
            describe_rule(&rule),
            "Occurs every Monday, Wednesday, and Friday"
        );
    }

    #[test]
    fn monthly_descriptions() {
        let absolute = RecurrenceRule::monthly(dt(2024, 1, 10), dt(2024, 6, 1))
            .with_month_target(MonthTarget::Absolute);
        assert_eq!(describe_rule(&absolute), "Occurs on day 10 of every month");
        assert_eq!(
            describe_rule(&absolute.with_interval(2)),
            "Occurs every 2 months on day 10"
        );

        // 2024-01-01 is the first Monday of January.
        let relative = RecurrenceRule::monthly(dt(2024, 1, 1), dt(2024, 6, 1))
            .with_month_target(MonthTarget::Relative);
        assert_eq!(
            describe_rule(&relative),
            "Occurs on the first Monday of every month"
        );

        // 2024-01-26 is the last Friday of January.
        let last = RecurrenceRule::monthly(dt(2024, 1, 26), dt(2024, 6, 1))
            .with_month_target(MonthTarget::RelativeLast);
        assert_eq!(
            describe_rule(&last),
            "Occurs on the last Friday of every month"
        );
    }

    #[test]
    fn yearly_descriptions() {
        let absolute = RecurrenceRule::yearly(dt(2024, 1, 10), dt(2026, 1, 1))
            .with_month_target(MonthTarget::Absolute);
        assert_eq!(describe_rule(&absolute), "Occurs every year on January 10");

        let relative = RecurrenceRule::yearly(dt(2024, 1, 7), dt(2026, 1, 1))
            .with_month_target(MonthTarget::Relative);
        assert_eq!(
            describe_rule(&relative),
            "Occurs every year on the first Sunday of January"
        );
    }
}
