//! Output formatting for the events page.
//!
//! This module turns classified events into display output:
//! - **HTML**: the full events page and single-card detail pages
//! - **JSON**: machine-readable [`PageView`]
//! - **TTY**: grouped, human-readable terminal lines
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use eventboard_core::{classify, FormatOptions, PageFormatter, PageView};
//!
//! let now = Utc::now();
//! let buckets = classify(Vec::new(), now);
//! let options = FormatOptions::default();
//! let view = PageView::build(&buckets, now, &options);
//!
//! let formatter = PageFormatter::new(options);
//! let html = formatter.format_html(&view);
//! assert!(html.contains("There are no past events"));
//! ```

mod html;

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::card::EventCard;
use crate::classify::{ColumnPolicy, EventBuckets};
use crate::event::Phase;
use crate::links::CalendarTarget;

/// Text shown in the past section when it is empty.
pub const NO_PAST_EVENTS_TEXT: &str = "There are no past events";

/// The output format for the event listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable terminal output.
    #[default]
    Tty,
    /// Machine-readable JSON output.
    Json,
    /// Full HTML page.
    Html,
}

/// Configuration options for page formatting.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Timezone card dates are displayed in.
    pub timezone: Tz,
    /// How past events are spread over columns.
    pub column_policy: ColumnPolicy,
    /// Page `<title>`.
    pub page_title: String,
    /// Path of the placeholder frame stream, if the page should subscribe to one.
    pub coming_soon_stream: Option<String>,
    /// Maximum length for titles in TTY output (truncated with ellipsis).
    pub max_title_length: Option<usize>,
    /// Whether to include hyperlinks (OSC8) in TTY output.
    pub hyperlinks: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            timezone: Tz::UTC,
            column_policy: ColumnPolicy::RoundRobin,
            page_title: "Events".to_string(),
            coming_soon_stream: None,
            max_title_length: None,
            hyperlinks: false,
        }
    }
}

/// Category chips shown above the upcoming events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterBar {
    /// Selected category, lower-cased; `None` means "View All".
    pub active: Option<String>,
    /// Categories available in the unfiltered list.
    pub types: Vec<String>,
}

/// Number of events per section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCounts {
    pub past: usize,
    pub ongoing: usize,
    pub upcoming: usize,
}

/// A display-ready view of the whole events page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageView {
    /// The instant events were classified against.
    pub now: DateTime<Utc>,
    pub filters: FilterBar,
    /// Ongoing cards, flagged as ongoing.
    pub ongoing: Vec<EventCard>,
    /// Upcoming cards, in reverse bucket order.
    pub upcoming: Vec<EventCard>,
    /// Past cards laid out in columns.
    pub past_columns: Vec<Vec<EventCard>>,
    pub counts: PageCounts,
}

impl PageView {
    /// Builds the page view from classified events.
    pub fn build(buckets: &EventBuckets, now: DateTime<Utc>, options: &FormatOptions) -> Self {
        let tz = &options.timezone;

        let ongoing = buckets
            .ongoing
            .iter()
            .map(|e| EventCard::build(e, true, tz))
            .collect();
        let upcoming = buckets
            .upcoming
            .iter()
            .rev()
            .map(|e| EventCard::build(e, false, tz))
            .collect();
        let past_columns = buckets
            .past_columns(options.column_policy)
            .iter()
            .map(|column| {
                column
                    .iter()
                    .map(|e| EventCard::build(e, false, tz))
                    .collect()
            })
            .collect();

        Self {
            now,
            filters: FilterBar::default(),
            ongoing,
            upcoming,
            past_columns,
            counts: PageCounts {
                past: buckets.past.len(),
                ongoing: buckets.ongoing.len(),
                upcoming: buckets.upcoming.len(),
            },
        }
    }

    /// Builder method to set the filter bar.
    pub fn with_filters(mut self, types: Vec<String>, active: Option<String>) -> Self {
        self.filters = FilterBar { active, types };
        self
    }

    /// Returns true if there are no past events.
    pub fn has_no_past_events(&self) -> bool {
        self.counts.past == 0
    }

    /// Iterates over the past cards in column order.
    pub fn past_cards(&self) -> impl Iterator<Item = &EventCard> {
        self.past_columns.iter().flatten()
    }

    /// Finds a card anywhere on the page.
    pub fn find(&self, id: &str) -> Option<&EventCard> {
        self.ongoing
            .iter()
            .chain(self.upcoming.iter())
            .chain(self.past_cards())
            .find(|c| c.id == id)
    }
}

/// Output formatter for the events page.
#[derive(Debug, Clone)]
pub struct PageFormatter {
    options: FormatOptions,
}

impl PageFormatter {
    /// Creates a new PageFormatter with the given options.
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Creates a new PageFormatter with default options.
    pub fn with_defaults() -> Self {
        Self::new(FormatOptions::default())
    }

    /// Returns the options this formatter renders with.
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Renders the full HTML page.
    pub fn format_html(&self, view: &PageView) -> String {
        html::render_page(view, &self.options)
    }

    /// Renders a single card as a standalone HTML page.
    pub fn format_card_html(&self, card: &EventCard) -> String {
        html::render_card_page(card, &self.options)
    }

    /// Serializes the page view as pretty JSON.
    pub fn format_json(&self, view: &PageView) -> serde_json::Result<String> {
        serde_json::to_string_pretty(view)
    }

    /// Formats the page as terminal lines grouped by section.
    pub fn format_tty(&self, view: &PageView) -> Vec<String> {
        let mut lines = Vec::new();

        if !view.ongoing.is_empty() {
            lines.push(Phase::Ongoing.heading().to_string());
            lines.extend(view.ongoing.iter().map(|c| self.format_tty_line(c)));
        }

        lines.push(Phase::Upcoming.heading().to_string());
        if view.upcoming.is_empty() {
            lines.push("  Coming Soon".to_string());
        } else {
            lines.extend(view.upcoming.iter().map(|c| self.format_tty_line(c)));
        }

        lines.push(Phase::Past.heading().to_string());
        if view.has_no_past_events() {
            lines.push(format!("  {}", NO_PAST_EVENTS_TEXT));
        } else {
            lines.extend(view.past_cards().map(|c| self.format_tty_line(c)));
        }

        lines
    }

    /// Formats one card as a terminal line.
    fn format_tty_line(&self, card: &EventCard) -> String {
        let title = self.truncate_title(&card.title);
        let title = if self.options.hyperlinks {
            match card.save_menu.link(CalendarTarget::Google) {
                Some(link) => make_hyperlink(&link.href, &title),
                None => title.into_owned(),
            }
        } else {
            title.into_owned()
        };

        let mut line = format!("  • {} - {}", card.date_display, title);
        if !card.event_type.is_empty() {
            line.push_str(&format!(" [{}]", card.event_type));
        }
        if card.on_going {
            line.push_str(" (now)");
        }
        line
    }

    /// Truncates a title to the configured maximum length.
    fn truncate_title<'a>(&self, title: &'a str) -> Cow<'a, str> {
        if let Some(max_len) = self.options.max_title_length {
            ellipsis(title, max_len)
        } else {
            Cow::Borrowed(title)
        }
    }
}

/// Truncates a string with ellipsis if it exceeds the given length.
pub fn ellipsis(s: &str, max_len: usize) -> Cow<'_, str> {
    if max_len == 0 {
        return Cow::Borrowed("");
    }

    if s.chars().count() <= max_len {
        return Cow::Borrowed(s);
    }

    let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
    Cow::Owned(format!("{}...", truncated))
}

/// Creates an OSC8 hyperlink for terminal output.
pub fn make_hyperlink(url: &str, label: &str) -> String {
    // OSC8 hyperlink format: \e]8;;URL\e\\LABEL\e]8;;\e\\
    format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", url, label)
}

/// Escapes text for HTML display.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
