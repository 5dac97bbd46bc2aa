//! Default command: list classified events.

use chrono::{DateTime, Utc};
use tracing::debug;

use eventboard_core::{
    Event, EventFilter, FormatOptions, OutputFormat, PageFormatter, PageView, classify,
    event_types,
};

use crate::cli::Cli;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Fetches, classifies and prints events in the requested format.
pub async fn run(cli: &Cli, config: &ClientConfig) -> ClientResult<()> {
    let source = config.open_source(cli.source.as_deref())?;
    let events = source.fetch_events().await?;
    debug!(source = source.name(), count = events.len(), "fetched events");

    let options = config.format_options()?;
    let filter = cli
        .event_type
        .as_deref()
        .map(EventFilter::by_type)
        .unwrap_or_default();

    let output = render(events, &filter, Utc::now(), cli.output_format(), options)?;
    println!("{}", output);
    Ok(())
}

/// Renders the listing for `events` as of `now`.
pub fn render(
    events: Vec<Event>,
    filter: &EventFilter,
    now: DateTime<Utc>,
    format: OutputFormat,
    options: FormatOptions,
) -> ClientResult<String> {
    let types = event_types(&events);
    let buckets = classify(filter.apply(events), now);
    let view = PageView::build(&buckets, now, &options)
        .with_filters(types, filter.event_type().map(str::to_string));
    let formatter = PageFormatter::new(options);

    match format {
        OutputFormat::Tty => Ok(formatter.format_tty(&view).join("\n")),
        OutputFormat::Json => formatter
            .format_json(&view)
            .map_err(|e| ClientError::Action(format!("failed to serialize output: {}", e))),
        OutputFormat::Html => Ok(formatter.format_html(&view)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 5, 12, 0, 0).unwrap()
    }

    fn events() -> Vec<Event> {
        let now = now();
        vec![
            Event::new("1", "Kickoff", now - Duration::days(2), now - Duration::days(2))
                .with_event_type("Talk"),
            Event::new("2", "Hack Night", now - Duration::hours(1), now + Duration::hours(3))
                .with_event_type("Social"),
            Event::new("3", "Intro to Rust", now + Duration::days(1), now + Duration::days(1))
                .with_event_type("Workshop"),
        ]
    }

    #[test]
    fn tty_listing() {
        let output = render(
            events(),
            &EventFilter::all(),
            now(),
            OutputFormat::Tty,
            FormatOptions::default(),
        )
        .unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Ongoing Events",
                "  • Mar 5, 2025 - Hack Night [SOCIAL] (now)",
                "Upcoming Events",
                "  • Mar 6, 2025 - Intro to Rust [WORKSHOP]",
                "Past Events",
                "  • Mar 3, 2025 - Kickoff [TALK]",
            ]
        );
    }

    #[test]
    fn filtered_json() {
        let output = render(
            events(),
            &EventFilter::by_type("workshop"),
            now(),
            OutputFormat::Json,
            FormatOptions::default(),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["counts"]["upcoming"], 1);
        assert_eq!(value["counts"]["ongoing"], 0);
        assert_eq!(value["counts"]["past"], 0);
        assert_eq!(value["filters"]["active"], "workshop");
    }

    #[test]
    fn html_page() {
        let output = render(
            Vec::new(),
            &EventFilter::all(),
            now(),
            OutputFormat::Html,
            FormatOptions::default(),
        )
        .unwrap();
        assert!(output.starts_with("<!DOCTYPE html>"));
        assert!(output.contains("There are no past events"));
    }
}
