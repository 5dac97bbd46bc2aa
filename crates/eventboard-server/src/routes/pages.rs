//! HTML pages and calendar downloads

use axum::{
    Router,
    extract::{Path, Query, State},
    http::header,
    response::{Html, IntoResponse},
    routing::get,
};
use eventboard_core::{CalendarExport, ics_document};

use crate::error::ServerResult;
use crate::routes::PageQuery;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(events_page))
        .route("/events", get(events_page))
        .route("/events/{id}", get(event_page))
        .route("/events/{id}/event.ics", get(event_ics))
}

/// GET /events - The classified events page
async fn events_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> ServerResult<Html<String>> {
    let view = state.page_view(&query.filter()).await?;
    Ok(Html(state.formatter().format_html(&view)))
}

/// GET /events/{id} - One card on its own page
async fn event_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerResult<Html<String>> {
    let event = state.find_event(&id).await?;
    let card = state.card_for(&event);
    Ok(Html(state.formatter().format_card_html(&card)))
}

/// GET /events/{id}/event.ics - The event as a calendar file
async fn event_ics(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerResult<impl IntoResponse> {
    let event = state.find_event(&id).await?;
    let body = ics_document(&CalendarExport::from_event(&event));
    let disposition = format!("attachment; filename=\"{}.ics\"", file_stem(&event.id));

    Ok((
        [
            (header::CONTENT_TYPE, "text/calendar; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

/// Keeps ASCII alphanumerics, `-` and `_`.
fn file_stem(id: &str) -> String {
    let stem: String = id
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        .collect();
    if stem.is_empty() {
        "event".to_string()
    } else {
        format!("event-{stem}")
    }
}
