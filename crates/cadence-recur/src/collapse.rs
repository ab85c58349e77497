//! Collapsing of materialized recurring instances.
//!
//! A recurring rule is expanded into many persisted action instances up
//! front. Lists and notifications must not show the whole future tail, so
//! each recurrence group is reduced to its past instances plus the single
//! next upcoming one, annotated with the date of the occurrence after it.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

/// Seam over the externally-owned action entity.
///
/// The engine never persists or mutates instances; it only needs to know
/// which rule spawned one and when it is effectively due.
pub trait RecurringInstance {
    /// Identifier of the rule that spawned this instance, if any.
    fn recurrence_id(&self) -> Option<Uuid>;

    /// Scheduled date-time.
    fn due_at(&self) -> Option<NaiveDateTime>;

    /// Completion date-time, if the instance is done.
    fn completed_at(&self) -> Option<NaiveDateTime>;

    /// Effective date used for ordering and past/upcoming decisions:
    /// completion date when present, the due date otherwise.
    fn effective_at(&self) -> Option<NaiveDateTime> {
        self.completed_at().or_else(|| self.due_at())
    }
}

/// An instance as returned by the collapse, with an optional hint of when
/// the occurrence after it lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collapsed<T> {
    pub instance: T,
    /// Effective date of the dropped successor, carried only by the first
    /// upcoming instance of a recurrence group.
    pub next_occurrence: Option<NaiveDateTime>,
}

impl<T> Collapsed<T> {
    fn plain(instance: T) -> Self {
        Self {
            instance,
            next_occurrence: None,
        }
    }
}

/// Drops the future tail of every recurrence group.
///
/// Instances without a recurrence id pass through unchanged. Each group
/// is sorted by effective date; everything up to and including the first
/// instance due today or later is kept, and that instance carries the
/// effective date of its dropped successor as `next_occurrence`. A group
/// that is entirely in the past passes through whole. Instances with no
/// effective date sort first and count as past.
///
/// Output order is non-recurring instances first, then groups in
/// recurrence-id order; consumers re-sort for display.
#[must_use]
pub fn collapse_future_recurrences<T: RecurringInstance>(
    instances: Vec<T>,
    today: NaiveDate,
) -> Vec<Collapsed<T>> {
    let mut out = Vec::new();
    let mut groups: BTreeMap<Uuid, Vec<T>> = BTreeMap::new();

    for instance in instances {
        match instance.recurrence_id() {
            None => out.push(Collapsed::plain(instance)),
            Some(id) => groups.entry(id).or_default().push(instance),
        }
    }

    for (id, mut group) in groups {
        group.sort_by_key(RecurringInstance::effective_at);

        let upcoming = group
            .iter()
            .position(|i| i.effective_at().is_some_and(|at| at.date() >= today));
        let Some(keep_until) = upcoming else {
            out.extend(group.into_iter().map(Collapsed::plain));
            continue;
        };

        let next_occurrence = group.get(keep_until + 1).and_then(RecurringInstance::effective_at);
        tracing::trace!(
            recurrence = %id,
            kept = keep_until + 1,
            dropped = group.len() - keep_until - 1,
            "collapsed recurring group"
        );
        group.truncate(keep_until + 1);
        out.extend(group.into_iter().enumerate().map(|(idx, instance)| Collapsed {
            instance,
            next_occurrence: if idx == keep_until { next_occurrence } else { None },
        }));
    }

    out
}
