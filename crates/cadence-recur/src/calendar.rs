//! Calendar helpers for weekday and ordinal arithmetic.
//!
//! All functions here work on plain [`NaiveDate`]s; day arithmetic is
//! local-calendar only and ignores timezones entirely.

use cadence_core::Weekday;
use chrono::{Datelike, Days, NaiveDate};

/// Ordinal position of a date's weekday within its own month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NthWeekday {
    /// 1-based ordinal: days 1-7 are the 1st of their weekday, 8-14 the 2nd, etc.
    pub nth: u32,
    /// True iff no later date in the same month shares this weekday.
    pub is_last: bool,
}

/// Returns the number of days in a month.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month + 1, 1)
        .or_else(|| NaiveDate::from_ymd_opt(year + 1, 1, 1))
        .map_or(31, |d| d.pred_opt().map_or(31, |p| p.day()))
}

/// Returns the Monday of the week containing `date`.
#[must_use]
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// Returns the first occurrence of `weekday` in the given month.
///
/// `None` only for an out-of-range year/month pair.
#[must_use]
pub fn first_weekday_in_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset =
        (weekday.days_from_monday() + 7 - first.weekday().num_days_from_monday()) % 7;
    first.checked_add_days(Days::new(u64::from(offset)))
}

/// Returns the last occurrence of `weekday` in the given month.
///
/// `None` only for an out-of-range year/month pair.
#[must_use]
pub fn last_weekday_in_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let last = NaiveDate::from_ymd_opt(year, month, days_in_month(year, month))?;
    let offset =
        (last.weekday().num_days_from_monday() + 7 - weekday.days_from_monday()) % 7;
    last.checked_sub_days(Days::new(u64::from(offset)))
}

/// Computes the ordinal position of `date`'s weekday within its month.
///
/// The 1st through 7th of a month are the "1st" of their weekday, the 8th
/// through 14th the "2nd", and so on. `is_last` is set when moving seven
/// days forward crosses into the next month.
#[must_use]
pub fn nth_weekday_in_month(date: NaiveDate) -> NthWeekday {
    let nth = (date.day() - 1) / 7 + 1;
    let is_last = date
        .checked_add_days(Days::new(7))
        .is_none_or(|next| next.month() != date.month());
    NthWeekday { nth, is_last }
}

/// Maps an ordinal position to its English label.
///
/// `is_last` overrides the numeric ordinal. A month holds at most five
/// occurrences of any weekday, so `nth` outside 1-5 yields `None` rather
/// than panicking.
#[must_use]
pub const fn ordinal_label(nth: u32, is_last: bool) -> Option<&'static str> {
    if is_last {
        return Some("last");
    }
    Some(match nth {
        1 => "first",
        2 => "second",
        3 => "third",
        4 => "fourth",
        5 => "fifth",
        _ => return None,
    })
}
