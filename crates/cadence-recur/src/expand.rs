//! Occurrence expansion.
//!
//! Turns a [`RecurrenceRule`] into the concrete dates it covers within its
//! `[start_date, end_date]` range. Expansion is pure and deterministic:
//! the same rule always yields the same strictly ascending, deduplicated
//! sequence of dates.

use cadence_core::{MonthTarget, TimeUnit, Weekday};
use chrono::{Datelike, Days, NaiveDate};

use crate::calendar::{
    days_in_month, first_weekday_in_month, last_weekday_in_month, nth_weekday_in_month,
    start_of_week,
};
use crate::rule::RecurrenceRule;

/// Safety cap on generated occurrences.
///
/// Callers always pair expansion with a finite end date, but a
/// decades-long daily rule would otherwise balloon in memory.
const MAX_OCCURRENCES: usize = 10_000;

/// Expands a recurrence rule into its occurrence dates.
///
/// Dates are truncated to start-of-day: the range is
/// `[start_date.date(), end_date.date()]` inclusive. A malformed rule
/// (zero interval, weekly without selected days, month/year without a
/// resolution policy, inverted range) yields an empty vector rather than
/// an error; validation is the caller's concern (see
/// [`RecurrenceRule::validate`]).
#[must_use]
pub fn generate_occurrences(rule: &RecurrenceRule) -> Vec<NaiveDate> {
    if rule.validate().is_err() {
        tracing::debug!(unit = %rule.time_unit, "skipping expansion of malformed rule");
        return Vec::new();
    }

    let start = rule.start_date.date();
    let end = rule.end_date.date();

    let mut occurrences = match rule.time_unit {
        TimeUnit::Day => expand_daily(rule, start, end),
        TimeUnit::Week => expand_weekly(rule, start, end),
        TimeUnit::Month => expand_monthly(rule, start, end),
        TimeUnit::Year => expand_yearly(rule, start, end),
    };

    occurrences.sort_unstable();
    occurrences.dedup();
    tracing::trace!(
        unit = %rule.time_unit,
        interval = rule.time_interval,
        count = occurrences.len(),
        "expanded recurrence rule"
    );
    occurrences
}

fn expand_daily(rule: &RecurrenceRule, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut cursor = start;
    while cursor <= end && out.len() < MAX_OCCURRENCES {
        out.push(cursor);
        let Some(next) = cursor.checked_add_days(Days::new(u64::from(rule.time_interval)))
        else {
            break;
        };
        cursor = next;
    }
    out
}

fn expand_weekly(rule: &RecurrenceRule, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    // The cursor walks week starts (Mondays) in strides of the interval.
    // The first week is partial: days before the anchor are excluded.
    let mut week = start_of_week(start);
    while week <= end && out.len() < MAX_OCCURRENCES {
        for day in Weekday::all() {
            if !rule.is_selected(day) {
                continue;
            }
            let Some(date) = week.checked_add_days(Days::new(u64::from(day.days_from_monday())))
            else {
                continue;
            };
            if date >= start && date <= end {
                out.push(date);
            }
        }
        let Some(next) = week.checked_add_days(Days::new(7 * u64::from(rule.time_interval)))
        else {
            break;
        };
        week = next;
    }
    out
}

fn expand_monthly(rule: &RecurrenceRule, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let Some(target) = rule.month_target else {
        return Vec::new();
    };
    let anchor_weekday = Weekday::from_chrono(start.weekday());
    let nth = nth_weekday_in_month(start).nth;

    let mut out = Vec::new();
    let mut year = start.year();
    let mut month = start.month();
    while month_in_range(year, month, end) && out.len() < MAX_OCCURRENCES {
        if let Some(date) = resolve_target(target, year, month, start, anchor_weekday, nth)
            && date >= start
            && date <= end
        {
            out.push(date);
        }
        (year, month) = add_months(year, month, rule.time_interval);
    }
    out
}

fn expand_yearly(rule: &RecurrenceRule, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let Some(target) = rule.month_target else {
        return Vec::new();
    };
    let anchor_weekday = Weekday::from_chrono(start.weekday());
    let nth = nth_weekday_in_month(start).nth;
    let month = start.month();

    let mut out = Vec::new();
    let mut year = start.year();
    // Year rules always step one year at a time; the interval is not
    // consulted because multi-year strides are not a supported feature.
    while month_in_range(year, month, end) && out.len() < MAX_OCCURRENCES {
        if let Some(date) = resolve_target(target, year, month, start, anchor_weekday, nth)
            && date >= start
            && date <= end
        {
            out.push(date);
        }
        year += 1;
    }
    out
}

/// True while the first day of the cursor month is within the range.
fn month_in_range(year: i32, month: u32, end: NaiveDate) -> bool {
    NaiveDate::from_ymd_opt(year, month, 1).is_some_and(|first| first <= end)
}

/// Resolves the anchor's day target within a single visited month.
///
/// `Absolute` clamps the anchor's day-of-month to the last valid day of
/// the visited month (Jan 31 projects onto Feb 29 in a leap year, never
/// rolling over into March). `Relative` yields nothing for a month that
/// has no Nth occurrence of the anchor's weekday.
fn resolve_target(
    target: MonthTarget,
    year: i32,
    month: u32,
    anchor: NaiveDate,
    anchor_weekday: Weekday,
    nth: u32,
) -> Option<NaiveDate> {
    match target {
        MonthTarget::Absolute => {
            let day = anchor.day().min(days_in_month(year, month));
            NaiveDate::from_ymd_opt(year, month, day)
        }
        MonthTarget::Relative => {
            let first = first_weekday_in_month(year, month, anchor_weekday)?;
            let date = first.checked_add_days(Days::new(u64::from(nth - 1) * 7))?;
            (date.month() == month).then_some(date)
        }
        MonthTarget::RelativeLast => last_weekday_in_month(year, month, anchor_weekday),
    }
}

/// Advances a (year, 1-based month) cursor by the given number of months.
#[allow(clippy::cast_possible_wrap)]
const fn add_months(year: i32, month: u32, months: u32) -> (i32, u32) {
    let total = month - 1 + months;
    (year + (total / 12) as i32, total % 12 + 1)
}
