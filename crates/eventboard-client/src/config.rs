//! Client configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/eventboard/config.toml` by default:
//!
//! ```toml
//! [source]
//! location = "https://example.org/api/events"
//! timeout = 30
//!
//! [display]
//! timezone = "Europe/Paris"
//! column_policy = "round_robin"
//!
//! [server]
//! bind = "127.0.0.1:4096"
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono_tz::Tz;
use eventboard_core::{ColumnPolicy, FormatOptions, TracingOutputFormat};
use eventboard_providers::{EventSource, SourceOptions, open_source};
use eventboard_server::ServerConfig;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Configuration for the eventboard client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Debug mode.
    pub debug: bool,

    /// Where events come from.
    pub source: SourceSettings,

    /// Display settings.
    pub display: DisplaySettings,

    /// `eventboard serve` settings.
    pub server: ServerSettings,
}

/// Event source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// URL of the events endpoint, or path of a JSON file.
    pub location: Option<String>,

    /// Request timeout in seconds.
    pub timeout: u64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            location: None,
            timeout: 30,
        }
    }
}

/// Display settings for output formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// IANA timezone dates are shown in (`Europe/Paris`, `UTC`).
    pub timezone: String,

    /// Layout of the past-events columns.
    pub column_policy: ColumnPolicy,

    /// Page title for HTML output.
    pub page_title: String,

    /// Maximum title length in terminal output (truncated with ellipsis).
    pub max_title_length: Option<usize>,

    /// Emit OSC8 hyperlinks in terminal output.
    pub hyperlinks: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
            column_policy: ColumnPolicy::RoundRobin,
            page_title: "Events".to_string(),
            max_title_length: None,
            hyperlinks: false,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Listen address.
    pub bind: String,

    /// Answer cross-origin requests.
    pub cors: bool,

    /// Log format while serving.
    pub log_format: TracingOutputFormat,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: eventboard_server::default_bind_addr().to_string(),
            cors: false,
            log_format: TracingOutputFormat::Json,
        }
    }
}

impl ClientConfig {
    /// Loads configuration from the default path.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("eventboard")
    }

    /// Checks every value that is parsed lazily.
    pub fn validate(&self) -> ClientResult<()> {
        self.timezone()?;
        self.bind_addr()?;
        if let Some(ref location) = self.source.location {
            self.open_source(Some(location))?;
        }
        Ok(())
    }

    /// The display timezone.
    pub fn timezone(&self) -> ClientResult<Tz> {
        self.display.timezone.trim().parse().map_err(|e| {
            ClientError::Config(format!("invalid timezone {:?}: {}", self.display.timezone, e))
        })
    }

    /// The server listen address.
    pub fn bind_addr(&self) -> ClientResult<SocketAddr> {
        self.server.bind.parse().map_err(|e| {
            ClientError::Config(format!("invalid server bind address {:?}: {}", self.server.bind, e))
        })
    }

    /// Opens the event source, preferring `override_location` over the file.
    pub fn open_source(&self, override_location: Option<&str>) -> ClientResult<Arc<dyn EventSource>> {
        let location = override_location
            .or(self.source.location.as_deref())
            .ok_or_else(|| {
                ClientError::Config(
                    "no event source configured; set [source] location or pass --source".into(),
                )
            })?;

        let options = SourceOptions::default().with_timeout(Duration::from_secs(self.source.timeout));
        Ok(open_source(location, &options)?)
    }

    /// Formatting options for listing output.
    pub fn format_options(&self) -> ClientResult<FormatOptions> {
        Ok(FormatOptions {
            timezone: self.timezone()?,
            column_policy: self.display.column_policy,
            page_title: self.display.page_title.clone(),
            max_title_length: self.display.max_title_length,
            hyperlinks: self.display.hyperlinks,
            ..Default::default()
        })
    }

    /// Server configuration, with `bind` overriding the file.
    pub fn server_config(&self, bind: Option<SocketAddr>) -> ClientResult<ServerConfig> {
        let bind_addr = match bind {
            Some(addr) => addr,
            None => self.bind_addr()?,
        };
        Ok(ServerConfig::new(bind_addr)
            .with_page_title(self.display.page_title.clone())
            .with_timezone(self.timezone()?)
            .with_column_policy(self.display.column_policy)
            .with_cors(self.server.cors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let config = ClientConfig::default();
        assert!(!config.debug);
        assert!(config.source.location.is_none());
        assert_eq!(config.source.timeout, 30);
        assert_eq!(config.display.timezone, "UTC");
        assert_eq!(config.display.column_policy, ColumnPolicy::RoundRobin);
        assert_eq!(config.server.bind, "127.0.0.1:4096");
        assert_eq!(config.server.log_format, TracingOutputFormat::Json);
    }

    #[test]
    fn default_path_format() {
        let path = ClientConfig::default_path();
        assert!(path.ends_with("eventboard/config.toml"));
    }

    #[test]
    fn parse_toml() {
        let toml_content = r#"
debug = true

[source]
location = "https://example.org/api/events"
timeout = 10

[display]
timezone = "America/New_York"
column_policy = "contiguous"
max_title_length = 40

[server]
bind = "0.0.0.0:8080"
cors = true
log_format = "compact"
"#;
        let config: ClientConfig = toml::from_str(toml_content).unwrap();
        assert!(config.debug);
        assert_eq!(config.source.location.as_deref(), Some("https://example.org/api/events"));
        assert_eq!(config.source.timeout, 10);
        assert_eq!(config.display.column_policy, ColumnPolicy::Contiguous);
        assert_eq!(config.display.max_title_length, Some(40));
        assert_eq!(config.server.log_format, TracingOutputFormat::Compact);
        assert!(config.server.cors);
        assert_eq!(config.timezone().unwrap(), chrono_tz::America::New_York);
        assert_eq!(config.bind_addr().unwrap().port(), 8080);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let config: ClientConfig = toml::from_str("[display]\nhyperlinks = true\n").unwrap();
        assert!(config.display.hyperlinks);
        assert_eq!(config.display.timezone, "UTC");
        assert_eq!(config.source.timeout, 30);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[source]\nlocation = \"events.json\"").unwrap();
        let config = ClientConfig::load_from(file.path()).unwrap();
        assert_eq!(config.source.location.as_deref(), Some("events.json"));
    }

    #[test]
    fn load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClientConfig::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.contains("failed to read config"));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut config = ClientConfig::default();
        assert!(config.validate().is_ok());

        config.display.timezone = "+02:00".into();
        assert!(config.validate().is_err());

        let mut config = ClientConfig::default();
        config.server.bind = "localhost".into();
        assert!(matches!(config.validate(), Err(ClientError::Config(_))));
    }

    #[test]
    fn source_override_wins() {
        let mut config = ClientConfig::default();
        assert!(matches!(config.open_source(None), Err(ClientError::Config(_))));

        config.source.location = Some("https://example.org/api/events".into());
        assert_eq!(config.open_source(Some("local.json")).unwrap().name(), "file");
        assert_eq!(config.open_source(None).unwrap().name(), "http");
    }

    #[test]
    fn server_config_from_settings() {
        let mut config = ClientConfig::default();
        config.display.column_policy = ColumnPolicy::Contiguous;
        config.server.cors = true;

        let server = config.server_config(None).unwrap();
        assert_eq!(server.bind_addr.port(), 4096);
        assert_eq!(server.column_policy, ColumnPolicy::Contiguous);
        assert!(server.allow_cors);

        let server = config.server_config(Some("127.0.0.1:9000".parse().unwrap())).unwrap();
        assert_eq!(server.bind_addr.port(), 9000);
    }

    #[test]
    fn timezone_names() {
        let mut config = ClientConfig::default();
        assert_eq!(config.timezone().unwrap(), Tz::UTC);

        config.display.timezone = "Asia/Kolkata".into();
        assert_eq!(config.timezone().unwrap(), chrono_tz::Asia::Kolkata);

        for bad in ["", "Mars/Olympus", "+02:00"] {
            config.display.timezone = bad.into();
            assert!(
                matches!(config.timezone(), Err(ClientError::Config(_))),
                "{bad} should be rejected"
            );
        }
    }
}
