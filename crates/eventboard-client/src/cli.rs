//! Command-line interface definition.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use eventboard_core::{CalendarTarget, OutputFormat};

/// eventboard - Past, ongoing and upcoming events at a glance
#[derive(Debug, Parser)]
#[command(name = "eventboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "EVENTBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// Events endpoint URL or JSON file (overrides the config file)
    #[arg(long, short, env = "EVENTBOARD_SOURCE")]
    pub source: Option<String>,

    // --- Output format flags ---
    /// Output the page view as JSON
    #[arg(long, group = "output_format")]
    pub json: bool,

    /// Output the full HTML page
    #[arg(long, group = "output_format")]
    pub html: bool,

    // --- Display options ---
    /// Only show events of this type (case-insensitive)
    #[arg(long = "type", value_name = "EVENT_TYPE")]
    pub event_type: Option<String>,

    /// Maximum title length (truncated with ellipsis)
    #[arg(long)]
    pub max_title_length: Option<usize>,

    /// Timezone to show dates in, e.g. Europe/Paris
    #[arg(long)]
    pub timezone: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Returns the output format based on CLI flags.
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.html {
            OutputFormat::Html
        } else {
            OutputFormat::Tty
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add an event to a calendar by opening its link
    Open {
        /// Event id
        id: String,

        /// Calendar to add the event to
        #[arg(long, short, value_enum, default_value_t = CalendarChoice::Google)]
        provider: CalendarChoice,

        /// Print the link instead of opening it
        #[arg(long)]
        print: bool,
    },

    /// Run the events page server in the foreground
    Serve {
        /// Address to listen on
        #[arg(long)]
        bind: Option<SocketAddr>,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Calendar providers offered by the save menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CalendarChoice {
    /// Apple Calendar (.ics file)
    Apple,
    /// Google Calendar
    Google,
    /// Outlook on the web
    Outlook,
}

impl From<CalendarChoice> for CalendarTarget {
    fn from(choice: CalendarChoice) -> Self {
        match choice {
            CalendarChoice::Apple => CalendarTarget::Apple,
            CalendarChoice::Google => CalendarTarget::Google,
            CalendarChoice::Outlook => CalendarTarget::Outlook,
        }
    }
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}
