//! Core types: events, classification, calendar links, cards, page formatting

pub mod card;
pub mod classify;
pub mod event;
pub mod format;
pub mod links;
pub mod tracing;

pub use card::{CalendarLink, EventCard, MenuState, SaveMenu, event_href, format_event_date};
pub use classify::{ColumnPolicy, EventBuckets, PAST_EVENT_COLUMNS, classify, distribute_columns};
pub use event::{Event, EventFilter, IN_PERSON, Location, Phase, event_types};
pub use format::{
    FilterBar, FormatOptions, NO_PAST_EVENTS_TEXT, OutputFormat, PageCounts, PageFormatter,
    PageView, ellipsis, html_escape, make_hyperlink,
};
pub use links::{CalendarExport, CalendarTarget, google_link, ics_document, ics_link, outlook_link};
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
