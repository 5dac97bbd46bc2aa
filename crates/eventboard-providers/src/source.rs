//! EventSource trait definition.
//!
//! An [`EventSource`] produces the flat event list the page classifies.
//! Sources only fetch and normalize; they never classify or filter.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use eventboard_core::Event;

use crate::error::ProviderResult;

/// A boxed future for trait methods that must stay object-safe.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The supplier of events for one page load.
///
/// # Example Implementation
///
/// ```ignore
/// struct DatabaseSource { pool: Pool }
///
/// impl EventSource for DatabaseSource {
///     fn name(&self) -> &str { "database" }
///
///     fn fetch_events(&self) -> BoxFuture<'_, ProviderResult<Vec<Event>>> {
///         Box::pin(async move { load_all(&self.pool).await })
///     }
/// }
/// ```
pub trait EventSource: Send + Sync {
    /// Returns the name of this source (e.g., "http", "file").
    fn name(&self) -> &str;

    /// Fetches every event, in endpoint order.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` when the source is unreachable or returns
    /// records that fail normalization.
    fn fetch_events(&self) -> BoxFuture<'_, ProviderResult<Vec<Event>>>;
}

impl<S: EventSource + ?Sized> EventSource for Arc<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn fetch_events(&self) -> BoxFuture<'_, ProviderResult<Vec<Event>>> {
        (**self).fetch_events()
    }
}

/// A source that serves a fixed list.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    events: Vec<Event>,
}

impl StaticSource {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }
}

impl EventSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch_events(&self) -> BoxFuture<'_, ProviderResult<Vec<Event>>> {
        let events = self.events.clone();
        Box::pin(async move { Ok(events) })
    }
}
