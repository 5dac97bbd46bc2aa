//! Events read from a local JSON file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use eventboard_core::Event;
use tracing::debug;

use crate::error::{ProviderError, ProviderResult};
use crate::normalize::normalize_events;
use crate::raw_event::RawEventList;
use crate::source::{BoxFuture, EventSource};

const PROVIDER: &str = "file";

/// Reads the same JSON payload the HTTP endpoint serves, on every fetch.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> ProviderResult<Vec<Event>> {
        debug!(path = %self.path.display(), "reading events");

        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            let message = format!("failed to read {}: {}", self.path.display(), e);
            let error = if e.kind() == ErrorKind::NotFound {
                ProviderError::not_found(message)
            } else {
                ProviderError::network(message)
            };
            error.with_provider(PROVIDER).with_source(e)
        })?;

        let list: RawEventList = serde_json::from_str(&content).map_err(|e| {
            ProviderError::invalid_response(format!(
                "malformed event list in {}: {}",
                self.path.display(),
                e
            ))
            .with_provider(PROVIDER)
            .with_source(e)
        })?;

        normalize_events(list.into_events()).map_err(|e| e.with_provider(PROVIDER))
    }
}

impl EventSource for FileSource {
    fn name(&self) -> &str {
        PROVIDER
    }

    fn fetch_events(&self) -> BoxFuture<'_, ProviderResult<Vec<Event>>> {
        Box::pin(self.read())
    }
}
