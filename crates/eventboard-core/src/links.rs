//! "Add to calendar" link generation.
//!
//! This module provides:
//! - [`CalendarExport`]: the provider-agnostic descriptor derived from an event
//! - [`CalendarTarget`]: the calendar services a link can be built for
//! - [`google_link`], [`outlook_link`], [`ics_link`]: pure `descriptor -> URL`
//!   builders, plus [`ics_document`] for file downloads
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use eventboard_core::{CalendarExport, CalendarTarget, Event};
//!
//! let start = Utc.with_ymd_and_hms(2025, 3, 5, 17, 0, 0).unwrap();
//! let end = Utc.with_ymd_and_hms(2025, 3, 5, 19, 0, 0).unwrap();
//! let event = Event::new("1", "Kickoff", start, end)
//!     .with_location("Zoom", "https://zoom.us/j/123");
//!
//! let export = CalendarExport::from_event(&event);
//! assert_eq!(export.url.as_deref(), Some("https://zoom.us/j/123"));
//! assert!(CalendarTarget::Google.link(&export).starts_with("https://calendar.google.com/"));
//! ```

use std::fmt::Write as _;

use chrono::{DateTime, SecondsFormat, Utc};
use icalendar::{Calendar, Component, EventLike};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::event::{Event, Location};

const GOOGLE_BASE: &str = "https://calendar.google.com/calendar/render";
const OUTLOOK_BASE: &str = "https://outlook.live.com/calendar/0/action/compose";
const ICS_DATA_PREFIX: &str = "data:text/calendar;charset=utf8,";

/// Provider-agnostic description of an event for calendar export.
///
/// Exactly one of `location` and `url` is set: in-person events carry the
/// join link as `location`, online events carry it as `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarExport {
    pub title: String,
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub location: Option<String>,
    pub url: Option<String>,
}

impl CalendarExport {
    /// Derives the export descriptor from an event.
    pub fn from_event(event: &Event) -> Self {
        let (location, url) = match event.location {
            Location::InPerson => (Some(event.join_link.clone()), None),
            Location::Online(_) => (None, Some(event.join_link.clone())),
        };

        Self {
            title: event.title.clone(),
            description: event.description.clone(),
            start: event.start,
            end: event.end,
            location,
            url,
        }
    }

    /// Description with the online url appended, for services without a url field.
    fn details_with_url(&self) -> String {
        match self.url {
            Some(ref url) if self.description.is_empty() => url.clone(),
            Some(ref url) => format!("{}\n\n{}", self.description, url),
            None => self.description.clone(),
        }
    }
}

/// A calendar service an "add to calendar" link can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarTarget {
    /// Apple Calendar, through a downloadable `.ics` document.
    Apple,
    /// Google Calendar event template.
    Google,
    /// Outlook.com compose deep link.
    Outlook,
}

impl CalendarTarget {
    /// All targets in the order the save menu lists them.
    pub const ALL: [CalendarTarget; 3] = [Self::Apple, Self::Google, Self::Outlook];

    /// Returns a human-readable name for this target.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Apple => "Apple",
            Self::Google => "Google",
            Self::Outlook => "Outlook",
        }
    }

    /// Returns the icon path shown next to the menu entry.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Apple => "/apple.svg",
            Self::Google => "/google.svg",
            Self::Outlook => "/outlook.svg",
        }
    }

    /// Builds the link for this target.
    pub fn link(&self, export: &CalendarExport) -> String {
        match self {
            Self::Apple => ics_link(export),
            Self::Google => google_link(export),
            Self::Outlook => outlook_link(export),
        }
    }

    /// Parses a target name as accepted on the command line.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "apple" | "ics" | "ical" => Some(Self::Apple),
            "google" => Some(Self::Google),
            "outlook" => Some(Self::Outlook),
            _ => None,
        }
    }
}

/// Builds a Google Calendar event template link.
pub fn google_link(export: &CalendarExport) -> String {
    let dates = format!(
        "{}/{}",
        compact_utc(export.start),
        compact_utc(export.end)
    );
    let details = export.details_with_url();

    let mut params = vec![
        ("action", "TEMPLATE"),
        ("text", export.title.as_str()),
        ("details", details.as_str()),
    ];
    if let Some(ref location) = export.location {
        params.push(("location", location.as_str()));
    }
    params.push(("dates", dates.as_str()));

    format!("{}?{}", GOOGLE_BASE, query_string(&params))
}

/// Builds an Outlook.com compose link.
pub fn outlook_link(export: &CalendarExport) -> String {
    let start = export.start.to_rfc3339_opts(SecondsFormat::Secs, true);
    let end = export.end.to_rfc3339_opts(SecondsFormat::Secs, true);
    let body = export.details_with_url();

    let mut params = vec![
        ("path", "/calendar/action/compose"),
        ("rru", "addevent"),
        ("startdt", start.as_str()),
        ("enddt", end.as_str()),
        ("subject", export.title.as_str()),
        ("body", body.as_str()),
    ];
    if let Some(ref location) = export.location {
        params.push(("location", location.as_str()));
    }

    format!("{}?{}", OUTLOOK_BASE, query_string(&params))
}

/// Builds a `data:` link carrying the `.ics` document.
pub fn ics_link(export: &CalendarExport) -> String {
    format!(
        "{}{}",
        ICS_DATA_PREFIX,
        urlencoding::encode(&ics_document(export))
    )
}

/// Renders the iCalendar document for an export.
///
/// UID and DTSTAMP are derived from the descriptor so the output depends on
/// nothing else.
pub fn ics_document(export: &CalendarExport) -> String {
    let mut event = icalendar::Event::new();
    event.uid(&export_uid(export));
    event.add_property("DTSTAMP", compact_utc(export.start));
    event.summary(&export.title);
    event.starts(export.start);
    event.ends(export.end);

    if !export.description.is_empty() {
        event.description(&export.description);
    }
    if let Some(ref location) = export.location {
        event.location(location);
    }
    if let Some(ref url) = export.url {
        event.add_property("URL", url);
    }

    let mut calendar = Calendar::new();
    calendar.push(event.done());
    calendar.done().to_string()
}

/// Stable identifier for an export: hash of title and time window.
fn export_uid(export: &CalendarExport) -> String {
    let mut hasher = Sha256::new();
    hasher.update(export.title.as_bytes());
    hasher.update(compact_utc(export.start).as_bytes());
    hasher.update(compact_utc(export.end).as_bytes());
    let digest = hasher.finalize();

    let mut uid = String::with_capacity(40);
    for byte in digest.iter().take(16) {
        let _ = write!(uid, "{:02x}", byte);
    }
    uid.push_str("@eventboard");
    uid
}

/// `20250305T170000Z`
fn compact_utc(dt: DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

fn query_string(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
