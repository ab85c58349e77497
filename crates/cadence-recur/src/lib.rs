//! Recurrence engine for outreach actions.
//!
//! Expands a [`RecurrenceRule`] into concrete calendar occurrences and
//! collapses materialized recurring instances down to "past plus the next
//! upcoming one" for lists and notifications. Everything here is pure,
//! synchronous computation over local calendar dates; persistence,
//! validation UI, and scheduling live with the callers.

pub mod calendar;
pub mod collapse;
pub mod describe;
pub mod expand;
pub mod rule;

pub use calendar::{NthWeekday, nth_weekday_in_month, ordinal_label};
pub use collapse::{Collapsed, RecurringInstance, collapse_future_recurrences};
pub use describe::describe_rule;
pub use expand::generate_occurrences;
pub use rule::RecurrenceRule;
