//! EventSource trait and implementations.
//!
//! This crate supplies the flat event list the events page classifies:
//!
//! - [`EventSource`] - the trait every source implements
//! - [`RawEvent`] - the wire record as the endpoint sends it
//! - [`normalize_event`] - wire record to [`eventboard_core::Event`]
//! - [`ProviderError`] - error type for fetch and normalization failures
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ JSON endpoint│   │  JSON file   │   │  in-memory   │
//! └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!        ▼                  ▼                  │
//!   HttpSource         FileSource              │
//!        │                  │                  │
//!        └──── RawEvent ────┘                  │
//!                 │ normalize_event()          │
//!                 ▼                            ▼
//!               Event  ◄──────────────── StaticSource
//! ```
//!
//! # Example
//!
//! ```ignore
//! use eventboard_providers::{SourceOptions, open_source};
//!
//! let source = open_source("https://example.org/api/events", &SourceOptions::default())?;
//! let events = source.fetch_events().await?;
//! ```

pub mod error;
pub mod file;
#[cfg(feature = "http")]
pub mod http;
pub mod normalize;
pub mod raw_event;
pub mod resolve;
pub mod source;

pub use error::{ProviderError, ProviderErrorCode, ProviderResult};
pub use file::FileSource;
#[cfg(feature = "http")]
pub use http::{HttpSource, HttpSourceConfig};
pub use normalize::{normalize_event, normalize_events, parse_event_date};
pub use raw_event::{RawEvent, RawEventList, RawId};
pub use resolve::{SourceOptions, open_source};
pub use source::{BoxFuture, EventSource, StaticSource};
