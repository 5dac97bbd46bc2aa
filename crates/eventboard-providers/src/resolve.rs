//! Picks a source implementation from a location string.

use std::sync::Arc;
use std::time::Duration;

use crate::error::ProviderResult;
use crate::file::FileSource;
use crate::source::EventSource;

/// Settings applied to whichever source is opened.
#[derive(Debug, Clone)]
pub struct SourceOptions {
    /// Request timeout for HTTP sources.
    pub timeout: Duration,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl SourceOptions {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Resolves `location` to a source.
///
/// `http://` and `https://` locations become an HTTP source; anything else
/// is read as a file path (a `file://` prefix is stripped).
///
/// # Errors
///
/// Returns a configuration error for an empty location, an invalid URL, or
/// a URL when HTTP support is compiled out.
pub fn open_source(location: &str, options: &SourceOptions) -> ProviderResult<Arc<dyn EventSource>> {
    let location = location.trim();
    if location.is_empty() {
        return Err(crate::ProviderError::configuration("no event source configured"));
    }

    if is_url(location) {
        return open_http(location, options);
    }

    let path = location.strip_prefix("file://").unwrap_or(location);
    tracing::debug!(path, "using file source");
    Ok(Arc::new(FileSource::new(path)))
}

fn is_url(location: &str) -> bool {
    let lower = location.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(feature = "http")]
fn open_http(location: &str, options: &SourceOptions) -> ProviderResult<Arc<dyn EventSource>> {
    use crate::http::{HttpSource, HttpSourceConfig};

    tracing::debug!(url = location, timeout_secs = options.timeout.as_secs(), "using http source");
    let config = HttpSourceConfig::new(location)?.with_timeout(options.timeout);
    let source = HttpSource::new(config)?;
    Ok(Arc::new(source))
}

#[cfg(not(feature = "http"))]
fn open_http(location: &str, _options: &SourceOptions) -> ProviderResult<Arc<dyn EventSource>> {
    Err(crate::ProviderError::configuration(format!(
        "HTTP sources are not supported in this build: {location}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderErrorCode;

    fn open(location: &str) -> ProviderResult<Arc<dyn EventSource>> {
        open_source(location, &SourceOptions::default())
    }

    #[test]
    fn file_paths() {
        assert_eq!(open("/tmp/events.json").unwrap().name(), "file");
        assert_eq!(open("file:///tmp/events.json").unwrap().name(), "file");
        assert_eq!(open("events.json").unwrap().name(), "file");
    }

    #[cfg(feature = "http")]
    #[test]
    fn urls() {
        assert_eq!(open("https://example.org/api/events").unwrap().name(), "http");
        assert_eq!(open("HTTP://example.org/").unwrap().name(), "http");
    }

    #[test]
    fn empty_location() {
        let err = open("   ").err().unwrap();
        assert_eq!(err.code(), ProviderErrorCode::ConfigurationError);
    }
}
