//! JSON API

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use eventboard_core::{EventCard, PageView};

use crate::error::ServerResult;
use crate::routes::PageQuery;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/events", get(list_events))
        .route("/api/events/{id}", get(get_event))
}

/// GET /api/events - The page view as JSON
async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> ServerResult<Json<PageView>> {
    Ok(Json(state.page_view(&query.filter()).await?))
}

/// GET /api/events/{id} - One card as JSON
async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerResult<Json<EventCard>> {
    let event = state.find_event(&id).await?;
    Ok(Json(state.card_for(&event)))
}
