//! Server configuration.

use std::net::{Ipv4Addr, SocketAddr};

use chrono_tz::Tz;
use eventboard_core::{ColumnPolicy, FormatOptions};

/// Default port for `eventboard serve`.
pub const DEFAULT_PORT: u16 = 4096;

/// Path of the placeholder frame stream.
pub const COMING_SOON_PATH: &str = "/coming-soon";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,

    /// Page `<title>`.
    pub page_title: String,

    /// Timezone card dates are shown in.
    pub timezone: Tz,

    /// Layout of the past-events columns.
    pub column_policy: ColumnPolicy,

    /// Whether to answer cross-origin requests (for the JSON API).
    pub allow_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            page_title: "Events".to_string(),
            timezone: Tz::UTC,
            column_policy: ColumnPolicy::RoundRobin,
            allow_cors: false,
        }
    }
}

impl ServerConfig {
    /// Creates a configuration listening on `bind_addr`.
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            ..Default::default()
        }
    }

    /// Builder: set page title.
    pub fn with_page_title(mut self, title: impl Into<String>) -> Self {
        self.page_title = title.into();
        self
    }

    /// Builder: set display timezone.
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Builder: set past column policy.
    pub fn with_column_policy(mut self, policy: ColumnPolicy) -> Self {
        self.column_policy = policy;
        self
    }

    /// Builder: enable permissive CORS.
    pub fn with_cors(mut self, allow: bool) -> Self {
        self.allow_cors = allow;
        self
    }

    /// Page formatting options, with the page subscribed to the frame stream.
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            timezone: self.timezone,
            column_policy: self.column_policy,
            page_title: self.page_title.clone(),
            coming_soon_stream: Some(COMING_SOON_PATH.to_string()),
            ..Default::default()
        }
    }
}

/// Returns `127.0.0.1:4096`.
pub fn default_bind_addr() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT))
}
