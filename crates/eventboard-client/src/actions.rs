//! Calendar link actions: open in the browser or hand an .ics file to the OS.

use std::path::{Path, PathBuf};

use tracing::info;

use eventboard_core::{CalendarExport, CalendarTarget, Event, ics_document};

use crate::error::{ClientError, ClientResult};

/// Finds an event by id.
pub fn find_event<'a>(events: &'a [Event], id: &str) -> ClientResult<&'a Event> {
    events
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| ClientError::NotFound(id.to_string()))
}

/// Opens a URL in the default browser.
pub fn open_url(url: &str) -> ClientResult<()> {
    info!(url = %url, "opening calendar link");
    open::that(url).map_err(|e| ClientError::Action(format!("failed to open URL: {}", e)))
}

/// Writes the event's .ics document into `dir` and returns the file path.
pub fn write_ics_file(export: &CalendarExport, dir: &Path, id: &str) -> ClientResult<PathBuf> {
    let stem: String = id
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        .collect();
    let path = dir.join(format!("eventboard-{}.ics", stem));
    std::fs::write(&path, ics_document(export))?;
    Ok(path)
}

/// Adds `event` to `target`'s calendar.
///
/// Google and Outlook open their compose page in the browser. Apple gets an
/// .ics file in the temp directory, opened with the default calendar app.
pub fn add_to_calendar(event: &Event, target: CalendarTarget) -> ClientResult<()> {
    let export = CalendarExport::from_event(event);
    match target {
        CalendarTarget::Apple => {
            let path = write_ics_file(&export, &std::env::temp_dir(), &event.id)?;
            info!(path = %path.display(), "opening calendar file");
            open::that(&path)
                .map_err(|e| ClientError::Action(format!("failed to open calendar file: {}", e)))
        }
        CalendarTarget::Google | CalendarTarget::Outlook => open_url(&target.link(&export)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn event(id: &str) -> Event {
        let at = Utc.with_ymd_and_hms(2025, 3, 5, 17, 0, 0).unwrap();
        Event::new(id, "Meetup", at, at)
    }

    #[test]
    fn find_by_id() {
        let events = vec![event("1"), event("2")];
        assert_eq!(find_event(&events, "2").unwrap().id, "2");
        assert!(matches!(find_event(&events, "3"), Err(ClientError::NotFound(id)) if id == "3"));
    }

    #[test]
    fn writes_ics_file() {
        let dir = tempfile::tempdir().unwrap();
        let export = CalendarExport::from_event(&event("a/b"));
        let path = write_ics_file(&export, dir.path(), "a/b").unwrap();
        assert_eq!(path.file_name().unwrap(), "eventboard-ab.ics");
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("BEGIN:VEVENT"));
        assert!(content.contains("SUMMARY:Meetup"));
    }
}
