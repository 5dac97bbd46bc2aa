pub mod api;
pub mod pages;
pub mod stream;

use axum::Router;
use eventboard_core::EventFilter;
use serde::Deserialize;

use crate::state::AppState;

/// All routes, without middleware.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .merge(api::router())
        .merge(stream::router())
}

/// `?type=` query shared by the page and the JSON API.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(rename = "type")]
    pub event_type: Option<String>,
}

impl PageQuery {
    pub fn filter(&self) -> EventFilter {
        self.event_type
            .as_deref()
            .map(EventFilter::by_type)
            .unwrap_or_default()
    }
}
