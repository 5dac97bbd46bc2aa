//! Event types for the events page.
//!
//! This module provides the core types for representing organization events:
//! - [`Event`]: A normalized event with parsed timestamps
//! - [`Location`]: Whether the event happens in person or online
//! - [`Phase`]: Where an event sits relative to the current instant
//! - [`EventFilter`]: Category selection applied before classification

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Location value the events endpoint uses for in-person events.
pub const IN_PERSON: &str = "In-person";

/// Where an event takes place.
///
/// The events endpoint encodes this as a free-form string: the exact value
/// [`IN_PERSON`] marks an in-person event, anything else is an online event
/// and the original label is kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Location {
    /// The event happens at a physical venue; `join_link` points at the address.
    InPerson,
    /// The event happens online; `join_link` is the meeting link.
    Online(String),
}

impl Location {
    /// Returns true for in-person events.
    pub fn is_in_person(&self) -> bool {
        matches!(self, Self::InPerson)
    }

    /// Returns the label as supplied by the endpoint.
    pub fn as_str(&self) -> &str {
        match self {
            Self::InPerson => IN_PERSON,
            Self::Online(label) => label,
        }
    }
}

impl From<String> for Location {
    fn from(value: String) -> Self {
        if value == IN_PERSON {
            Self::InPerson
        } else {
            Self::Online(value)
        }
    }
}

impl From<&str> for Location {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Location> for String {
    fn from(value: Location) -> Self {
        match value {
            Location::InPerson => IN_PERSON.to_string(),
            Location::Online(label) => label,
        }
    }
}

/// Where an event sits relative to a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// The event ended before the instant.
    Past,
    /// The instant lies within the event, both endpoints included.
    Ongoing,
    /// The event starts after the instant.
    Upcoming,
}

impl Phase {
    /// Returns the section heading used on the page.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Past => "Past Events",
            Self::Ongoing => "Ongoing Events",
            Self::Upcoming => "Upcoming Events",
        }
    }
}

/// An event as supplied by the events endpoint, with parsed timestamps.
///
/// Events are immutable once fetched; `start <= end` is assumed and not
/// checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Stable identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Display description.
    pub description: String,
    /// Category label such as "Workshop" or "Social".
    pub event_type: String,
    /// When the event starts.
    #[serde(rename = "startDate")]
    pub start: DateTime<Utc>,
    /// When the event ends.
    #[serde(rename = "endDate")]
    pub end: DateTime<Utc>,
    /// In person or online.
    pub location: Location,
    /// Address link for in-person events, meeting link otherwise.
    pub join_link: String,
    /// Free-form labels.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Event {
    /// Creates a new event with the required fields.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            event_type: String::new(),
            start,
            end,
            location: Location::InPerson,
            join_link: String::new(),
            tags: Vec::new(),
        }
    }

    /// Returns the phase of this event at `now`.
    ///
    /// Boundary instants count as ongoing: an event whose start or end equals
    /// `now` is neither past nor upcoming.
    pub fn phase_at(&self, now: DateTime<Utc>) -> Phase {
        if self.end < now {
            Phase::Past
        } else if now < self.start {
            Phase::Upcoming
        } else {
            Phase::Ongoing
        }
    }

    /// Returns true if the event is ongoing at `now`.
    pub fn is_ongoing_at(&self, now: DateTime<Utc>) -> bool {
        self.phase_at(now) == Phase::Ongoing
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder method to set the event type.
    pub fn with_event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    /// Builder method to set location and join link together.
    pub fn with_location(mut self, location: impl Into<Location>, join_link: impl Into<String>) -> Self {
        self.location = location.into();
        self.join_link = join_link.into();
        self
    }

    /// Builder method to add a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}

/// Category selection applied to the event list before classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    event_type: Option<String>,
}

impl EventFilter {
    /// A filter that keeps every event.
    pub fn all() -> Self {
        Self::default()
    }

    /// A filter that keeps events of one type, compared case-insensitively.
    ///
    /// An empty type or "all" keeps every event.
    pub fn by_type(event_type: impl Into<String>) -> Self {
        let event_type = event_type.into();
        let trimmed = event_type.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Self::all()
        } else {
            Self {
                event_type: Some(trimmed.to_lowercase()),
            }
        }
    }

    /// Returns the selected type, lower-cased, if any.
    pub fn event_type(&self) -> Option<&str> {
        self.event_type.as_deref()
    }

    /// Returns true if the event passes the filter.
    pub fn matches(&self, event: &Event) -> bool {
        match self.event_type {
            Some(ref wanted) => event.event_type.to_lowercase() == *wanted,
            None => true,
        }
    }

    /// Keeps the matching events, preserving order.
    pub fn apply(&self, events: Vec<Event>) -> Vec<Event> {
        if self.event_type.is_none() {
            return events;
        }
        events.into_iter().filter(|e| self.matches(e)).collect()
    }
}

/// Returns the distinct event types in first-seen order.
pub fn event_types(events: &[Event]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    events
        .iter()
        .filter(|e| !e.event_type.is_empty())
        .filter(|e| seen.insert(e.event_type.to_lowercase()))
        .map(|e| e.event_type.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn sample_event() -> Event {
        Event::new(
            "42",
            "Intro to Neural Nets",
            utc(2025, 3, 5, 17, 0, 0),
            utc(2025, 3, 5, 19, 0, 0),
        )
        .with_event_type("Workshop")
        .with_location("In-person", "https://maps.example.org/hall")
    }

    mod location {
        use super::*;

        #[test]
        fn sentinel_is_in_person() {
            assert_eq!(Location::from("In-person"), Location::InPerson);
            assert!(Location::from("In-person").is_in_person());
        }

        #[test]
        fn anything_else_is_online() {
            let loc = Location::from("Zoom");
            assert_eq!(loc, Location::Online("Zoom".to_string()));
            assert!(!loc.is_in_person());
            assert_eq!(loc.as_str(), "Zoom");

            // The sentinel is matched exactly.
            assert!(!Location::from("in-person").is_in_person());
            assert!(!Location::from("").is_in_person());
        }

        #[test]
        fn serializes_as_plain_string() {
            let json = serde_json::to_string(&Location::InPerson).unwrap();
            assert_eq!(json, "\"In-person\"");
            let parsed: Location = serde_json::from_str("\"Online\"").unwrap();
            assert_eq!(parsed, Location::Online("Online".to_string()));
        }
    }

    mod phase {
        use super::*;

        #[test]
        fn before_start_is_upcoming() {
            let event = sample_event();
            assert_eq!(event.phase_at(utc(2025, 3, 5, 16, 59, 59)), Phase::Upcoming);
        }

        #[test]
        fn start_instant_is_ongoing() {
            let event = sample_event();
            assert_eq!(event.phase_at(event.start), Phase::Ongoing);
        }

        #[test]
        fn end_instant_is_ongoing() {
            let event = sample_event();
            assert_eq!(event.phase_at(event.end), Phase::Ongoing);
            assert!(event.is_ongoing_at(event.end));
        }

        #[test]
        fn after_end_is_past() {
            let event = sample_event();
            assert_eq!(
                event.phase_at(event.end + Duration::seconds(1)),
                Phase::Past
            );
        }

        #[test]
        fn zero_length_event() {
            let at = utc(2025, 3, 5, 12, 0, 0);
            let event = Event::new("z", "Moment", at, at);
            assert_eq!(event.phase_at(at), Phase::Ongoing);
            assert_eq!(event.end - event.start, Duration::zero());
        }

        #[test]
        fn headings() {
            assert_eq!(Phase::Ongoing.heading(), "Ongoing Events");
            assert_eq!(Phase::Upcoming.heading(), "Upcoming Events");
            assert_eq!(Phase::Past.heading(), "Past Events");
        }
    }

    mod event {
        use super::*;

        #[test]
        fn builder_pattern() {
            let event = sample_event()
                .with_description("Hands-on session")
                .with_tag("ML")
                .with_tag("Beginner");

            assert_eq!(event.id, "42");
            assert_eq!(event.event_type, "Workshop");
            assert_eq!(event.description, "Hands-on session");
            assert!(event.location.is_in_person());
            assert_eq!(event.join_link, "https://maps.example.org/hall");
            assert_eq!(event.tags, vec!["ML", "Beginner"]);
        }

        #[test]
        fn serde_uses_wire_names() {
            let event = sample_event();
            let value = serde_json::to_value(&event).unwrap();
            assert_eq!(value["eventType"], "Workshop");
            assert_eq!(value["location"], "In-person");
            assert_eq!(value["joinLink"], "https://maps.example.org/hall");
            assert!(value.get("startDate").is_some());
            assert!(value.get("endDate").is_some());

            let parsed: Event = serde_json::from_value(value).unwrap();
            assert_eq!(parsed, event);
        }
    }

    mod filter {
        use super::*;

        #[test]
        fn all_keeps_everything() {
            let events = vec![sample_event(), sample_event().with_event_type("Social")];
            assert_eq!(EventFilter::all().apply(events.clone()), events);
            assert_eq!(EventFilter::by_type("All").apply(events.clone()), events);
            assert_eq!(EventFilter::by_type("  ").apply(events.clone()), events);
        }

        #[test]
        fn by_type_ignores_case() {
            let filter = EventFilter::by_type("workshop");
            assert_eq!(filter.event_type(), Some("workshop"));
            assert!(filter.matches(&sample_event()));
            assert!(!filter.matches(&sample_event().with_event_type("Social")));
        }

        #[test]
        fn apply_preserves_order() {
            let mut a = sample_event();
            a.id = "a".into();
            let mut b = sample_event().with_event_type("Social");
            b.id = "b".into();
            let mut c = sample_event().with_event_type("WORKSHOP");
            c.id = "c".into();

            let kept = EventFilter::by_type("Workshop").apply(vec![a, b, c]);
            let ids: Vec<_> = kept.iter().map(|e| e.id.as_str()).collect();
            assert_eq!(ids, vec!["a", "c"]);
        }

        #[test]
        fn distinct_types_in_order() {
            let events = vec![
                sample_event(),
                sample_event().with_event_type("Social"),
                sample_event().with_event_type("workshop"),
                sample_event().with_event_type(""),
            ];
            assert_eq!(event_types(&events), vec!["Workshop", "Social"]);
        }
    }
}
