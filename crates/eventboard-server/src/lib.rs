//! HTTP page service for the events board.
//!
//! This crate serves the classified events page over HTTP:
//! - HTML page with ongoing, upcoming and past sections (`/`, `/events`)
//! - Single event pages and `.ics` downloads (`/events/{id}`)
//! - JSON API (`/api/events`)
//! - The "Coming Soon" placeholder cycle as server-sent events
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use eventboard_providers::StaticSource;
//! use eventboard_server::{PageServer, ServerConfig, SignalHandler};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let server = PageServer::bind(Arc::new(StaticSource::default()), ServerConfig::default()).await?;
//!     let signals = SignalHandler::new();
//!     signals.spawn_listener();
//!     server.run(signals.shutdown_handle()).await?;
//!     Ok(())
//! }
//! ```

mod app;
mod config;
mod cycle;
mod error;
mod routes;
mod signals;
mod state;

pub use app::{PageServer, build_router};
pub use config::{COMING_SOON_PATH, DEFAULT_PORT, ServerConfig, default_bind_addr};
pub use cycle::{CycleHandle, Frame, PlaceholderCycle, TimedFrame};
pub use error::{ServerError, ServerResult};
pub use routes::PageQuery;
pub use routes::stream::frame_stream;
pub use signals::{ShutdownHandle, SignalHandler};
pub use state::{AppState, Clock};
