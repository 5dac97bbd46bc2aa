//! Open command: add one event to a calendar.

use eventboard_core::{CalendarExport, CalendarTarget};
use tracing::debug;

use crate::actions;
use crate::cli::Cli;
use crate::config::ClientConfig;
use crate::error::ClientResult;

/// Opens (or prints) the calendar link for event `id`.
pub async fn run(
    cli: &Cli,
    config: &ClientConfig,
    id: &str,
    target: CalendarTarget,
    print: bool,
) -> ClientResult<()> {
    let source = config.open_source(cli.source.as_deref())?;
    let events = source.fetch_events().await?;
    let event = actions::find_event(&events, id)?;
    debug!(id, target = target.display_name(), "found event");

    if print {
        println!("{}", target.link(&CalendarExport::from_event(event)));
        return Ok(());
    }

    actions::add_to_calendar(event, target)
}
