//! Server-sent "Coming Soon" frames

use std::convert::Infallible;
use std::time::Duration;

use axum::{
    Router,
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
};
use futures_util::StreamExt;
use futures_util::stream::{self, Stream};
use tracing::debug;

use crate::config::COMING_SOON_PATH;
use crate::cycle::{CycleHandle, Frame};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(COMING_SOON_PATH, get(coming_soon))
}

/// GET /coming-soon - One placeholder cycle per connection
///
/// The cycle handle lives inside the stream, so the cycle task is aborted
/// when the client disconnects and the stream is dropped. The stream also
/// ends when the server starts shutting down, otherwise graceful shutdown
/// would wait on it forever.
async fn coming_soon(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    debug!("starting placeholder cycle");
    let frames = frame_stream(state.cycle().start()).take_until(state.shutdown().wait());
    Sse::new(frames).keep_alive(KeepAlive::new().interval(Duration::from_secs(15)))
}

/// Emits every frame as the cycle publishes it.
pub fn frame_stream(handle: CycleHandle) -> impl Stream<Item = Result<Event, Infallible>> {
    stream::unfold(handle, |mut handle| async move {
        let frame = handle.changed().await;
        Some((Ok(frame_event(&frame)), handle))
    })
}

fn frame_event(frame: &Frame) -> Event {
    let data = serde_json::to_string(frame).unwrap_or_else(|_| "[]".to_string());
    Event::default().data(data)
}
