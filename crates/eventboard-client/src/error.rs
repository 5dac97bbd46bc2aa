//! Client error types.

use std::fmt;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in the client.
#[derive(Debug)]
pub enum ClientError {
    /// Configuration error.
    Config(String),
    /// The event source failed.
    Provider(eventboard_providers::ProviderError),
    /// The page server failed.
    Server(eventboard_server::ServerError),
    /// IO error.
    Io(std::io::Error),
    /// No event with this id.
    NotFound(String),
    /// Action failed (open link, write file).
    Action(String),
    /// Failed to initialize logging.
    Tracing(eventboard_core::TracingError),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {}", msg),
            Self::Provider(err) => write!(f, "event source error: {}", err),
            Self::Server(err) => write!(f, "server error: {}", err),
            Self::Io(err) => write!(f, "IO error: {}", err),
            Self::NotFound(id) => write!(f, "no event with id {:?}", id),
            Self::Action(msg) => write!(f, "action failed: {}", msg),
            Self::Tracing(err) => write!(f, "logging setup failed: {}", err),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Provider(err) => Some(err),
            Self::Server(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Tracing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<eventboard_providers::ProviderError> for ClientError {
    fn from(err: eventboard_providers::ProviderError) -> Self {
        Self::Provider(err)
    }
}

impl From<eventboard_server::ServerError> for ClientError {
    fn from(err: eventboard_server::ServerError) -> Self {
        Self::Server(err)
    }
}

impl From<eventboard_core::TracingError> for ClientError {
    fn from(err: eventboard_core::TracingError) -> Self {
        Self::Tracing(err)
    }
}
