//! RawEvent to Event conversion.
//!
//! Dates are accepted in three shapes:
//! 1. RFC 3339 with offset or `Z` (`2025-03-05T17:00:00.000Z`)
//! 2. Naive date-time, read as UTC (`2025-03-05T17:00:00`)
//! 3. Plain date, midnight UTC (`2025-03-05`)

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use eventboard_core::Event;

use crate::error::{ProviderError, ProviderResult};
use crate::raw_event::RawEvent;

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Converts a [`RawEvent`] to an [`Event`].
///
/// # Errors
///
/// Returns an `invalid_response` error naming the event and field when a
/// date does not parse.
pub fn normalize_event(raw: RawEvent) -> ProviderResult<Event> {
    let id = raw.id.into_string();
    let start = parse_event_date(&raw.start_date)
        .map_err(|e| date_error(&id, "startDate", &raw.start_date, e))?;
    let end = parse_event_date(&raw.end_date)
        .map_err(|e| date_error(&id, "endDate", &raw.end_date, e))?;

    let mut event = Event::new(id, raw.title, start, end)
        .with_description(raw.description)
        .with_event_type(raw.event_type)
        .with_location(raw.location, raw.join_link);
    for tag in raw.tags {
        event = event.with_tag(tag);
    }

    Ok(event)
}

/// Normalizes a batch, failing on the first malformed event.
pub fn normalize_events(raw_events: Vec<RawEvent>) -> ProviderResult<Vec<Event>> {
    raw_events.into_iter().map(normalize_event).collect()
}

/// Parses one date string in any of the accepted shapes.
pub fn parse_event_date(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let value = value.trim();

    let rfc3339 = DateTime::parse_from_rfc3339(value);
    if let Ok(dt) = rfc3339 {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
    }

    rfc3339.map(|dt| dt.with_timezone(&Utc))
}

fn date_error(id: &str, field: &str, value: &str, err: chrono::ParseError) -> ProviderError {
    ProviderError::invalid_response(format!(
        "event {id}: invalid {field} {value:?}: {err}"
    ))
    .with_source(err)
}
