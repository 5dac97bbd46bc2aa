//! Event classification and column layout.
//!
//! [`classify`] partitions a flat event list into past, ongoing and upcoming
//! buckets relative to a given instant. [`distribute_columns`] spreads a
//! bucket over a fixed number of display columns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::{Event, Phase};

/// Number of columns the past-events section is laid out in.
pub const PAST_EVENT_COLUMNS: usize = 3;

/// Events partitioned by [`Phase`].
///
/// The three buckets are disjoint, their union is the classified input, and
/// each bucket keeps the relative input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBuckets {
    /// Events that ended before `now`.
    pub past: Vec<Event>,
    /// Events whose window contains `now`, endpoints included.
    pub ongoing: Vec<Event>,
    /// Events that start after `now`.
    pub upcoming: Vec<Event>,
}

impl EventBuckets {
    /// Returns the bucket for a phase.
    pub fn bucket(&self, phase: Phase) -> &[Event] {
        match phase {
            Phase::Past => &self.past,
            Phase::Ongoing => &self.ongoing,
            Phase::Upcoming => &self.upcoming,
        }
    }

    /// Total number of events across all buckets.
    pub fn len(&self) -> usize {
        self.past.len() + self.ongoing.len() + self.upcoming.len()
    }

    /// Returns true if no bucket holds an event.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lays out the past bucket over [`PAST_EVENT_COLUMNS`] columns.
    pub fn past_columns(&self, policy: ColumnPolicy) -> Vec<Vec<Event>> {
        distribute_columns(&self.past, PAST_EVENT_COLUMNS, policy)
    }
}

/// Partitions `events` by their phase at `now`.
///
/// This is a pure function: the same input and `now` always yield the same
/// buckets.
pub fn classify(events: impl IntoIterator<Item = Event>, now: DateTime<Utc>) -> EventBuckets {
    let mut buckets = EventBuckets::default();
    for event in events {
        match event.phase_at(now) {
            Phase::Past => buckets.past.push(event),
            Phase::Ongoing => buckets.ongoing.push(event),
            Phase::Upcoming => buckets.upcoming.push(event),
        }
    }
    buckets
}

/// How items are spread over display columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnPolicy {
    /// Item `i` goes to column `i % columns`.
    #[default]
    RoundRobin,
    /// Consecutive chunks; earlier columns take the remainder.
    Contiguous,
}

/// Spreads `items` over `columns` columns according to `policy`.
///
/// Always returns exactly `columns` columns, some possibly empty. Zero
/// columns yields an empty layout.
pub fn distribute_columns<T: Clone>(items: &[T], columns: usize, policy: ColumnPolicy) -> Vec<Vec<T>> {
    let mut layout: Vec<Vec<T>> = vec![Vec::new(); columns];
    if columns == 0 {
        return layout;
    }

    match policy {
        ColumnPolicy::RoundRobin => {
            for (i, item) in items.iter().enumerate() {
                layout[i % columns].push(item.clone());
            }
        }
        ColumnPolicy::Contiguous => {
            let base = items.len() / columns;
            let extra = items.len() % columns;
            let mut rest = items;
            for (k, column) in layout.iter_mut().enumerate() {
                let take = base + usize::from(k < extra);
                let (head, tail) = rest.split_at(take);
                column.extend_from_slice(head);
                rest = tail;
            }
        }
    }

    layout
}
