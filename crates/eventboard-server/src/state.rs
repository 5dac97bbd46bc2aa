//! Shared application state and the per-request page pipeline.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use eventboard_core::{
    Event, EventCard, EventFilter, FormatOptions, PageFormatter, PageView, classify, event_types,
};
use eventboard_providers::EventSource;
use tracing::debug;

use crate::config::ServerConfig;
use crate::cycle::PlaceholderCycle;
use crate::error::{ServerError, ServerResult};
use crate::signals::{ShutdownHandle, SignalHandler};

/// Source of the current instant.
pub type Clock = fn() -> DateTime<Utc>;

/// State shared by every request. Nothing in it is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn EventSource>,
    config: Arc<ServerConfig>,
    cycle: PlaceholderCycle,
    clock: Clock,
    /// Long-lived responses end when this fires.
    shutdown: ShutdownHandle,
}

impl AppState {
    pub fn new(source: Arc<dyn EventSource>, config: ServerConfig) -> Self {
        Self {
            source,
            config: Arc::new(config),
            cycle: PlaceholderCycle::coming_soon(),
            clock: Utc::now,
            shutdown: SignalHandler::new().shutdown_handle(),
        }
    }

    /// Builder: replace the clock.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Builder: replace the placeholder cycle.
    pub fn with_cycle(mut self, cycle: PlaceholderCycle) -> Self {
        self.cycle = cycle;
        self
    }

    /// Builder: tie streaming responses to a server's shutdown.
    pub fn with_shutdown(mut self, shutdown: ShutdownHandle) -> Self {
        self.shutdown = shutdown;
        self
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn cycle(&self) -> &PlaceholderCycle {
        &self.cycle
    }

    pub fn shutdown(&self) -> ShutdownHandle {
        self.shutdown.clone()
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    pub fn format_options(&self) -> FormatOptions {
        self.config.format_options()
    }

    pub fn formatter(&self) -> PageFormatter {
        PageFormatter::new(self.format_options())
    }

    /// Fetches the event list from the source.
    pub async fn fetch_events(&self) -> ServerResult<Vec<Event>> {
        let events = self.source.fetch_events().await?;
        debug!(source = self.source.name(), count = events.len(), "fetched events");
        Ok(events)
    }

    /// Fetch, filter and classify for one page load.
    pub async fn page_view(&self, filter: &EventFilter) -> ServerResult<PageView> {
        let events = self.fetch_events().await?;
        let types = event_types(&events);
        let now = self.now();
        let buckets = classify(filter.apply(events), now);

        Ok(PageView::build(&buckets, now, &self.format_options())
            .with_filters(types, filter.event_type().map(str::to_string)))
    }

    /// Looks up one event by id.
    pub async fn find_event(&self, id: &str) -> ServerResult<Event> {
        self.fetch_events()
            .await?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| ServerError::not_found(id))
    }

    /// Builds the card for one event as of now.
    pub fn card_for(&self, event: &Event) -> EventCard {
        EventCard::build(event, event.is_ongoing_at(self.now()), &self.config.timezone)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("source", &self.source.name())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
