//! Wire records as the events endpoint supplies them.
//!
//! A [`RawEvent`] keeps dates as strings; [`crate::normalize`] turns it into
//! an [`eventboard_core::Event`].

use serde::{Deserialize, Serialize};

/// An event identifier; endpoints send either strings or numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(i64),
}

impl RawId {
    /// The identifier as a string.
    pub fn into_string(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
        }
    }
}

impl std::fmt::Display for RawId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// One event record before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    pub id: RawId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub event_type: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub join_link: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The top-level payload: a bare array, or an object wrapping one.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawEventList {
    Bare(Vec<RawEvent>),
    Wrapped { events: Vec<RawEvent> },
}

impl RawEventList {
    pub fn into_events(self) -> Vec<RawEvent> {
        match self {
            Self::Bare(events) | Self::Wrapped { events } => events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_record() {
        let json = r#"{
            "id": "42",
            "title": "Rust Workshop",
            "description": "Bring a laptop",
            "eventType": "Workshop",
            "startDate": "2025-03-05T17:00:00.000Z",
            "endDate": "2025-03-05T19:30:00.000Z",
            "location": "In-person",
            "joinLink": "https://maps.example.org/room-101",
            "tags": ["Rust", "Beginner"]
        }"#;
        let raw: RawEvent = serde_json::from_str(json).unwrap();
        assert_eq!(raw.id, RawId::Text("42".into()));
        assert_eq!(raw.event_type, "Workshop");
        assert_eq!(raw.join_link, "https://maps.example.org/room-101");
        assert_eq!(raw.tags, vec!["Rust", "Beginner"]);
    }

    #[test]
    fn optional_fields_default_empty() {
        let json = r#"{"id": 7, "title": "Meetup", "startDate": "2025-03-05", "endDate": "2025-03-05"}"#;
        let raw: RawEvent = serde_json::from_str(json).unwrap();
        assert_eq!(raw.id.to_string(), "7");
        assert!(raw.description.is_empty());
        assert!(raw.event_type.is_empty());
        assert!(raw.location.is_empty());
        assert!(raw.tags.is_empty());
    }

    #[test]
    fn missing_dates_fail() {
        let json = r#"{"id": "1", "title": "No dates"}"#;
        assert!(serde_json::from_str::<RawEvent>(json).is_err());
    }

    #[test]
    fn list_shapes() {
        let item = r#"{"id":"1","title":"A","startDate":"2025-01-01","endDate":"2025-01-01"}"#;

        let bare: RawEventList = serde_json::from_str(&format!("[{item}]")).unwrap();
        assert_eq!(bare.into_events().len(), 1);

        let wrapped: RawEventList =
            serde_json::from_str(&format!(r#"{{"events":[{item},{item}]}}"#)).unwrap();
        assert_eq!(wrapped.into_events().len(), 2);
    }
}
