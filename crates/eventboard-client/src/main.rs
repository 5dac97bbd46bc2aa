//! eventboard CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use eventboard_client::cli::{Cli, Command, ConfigAction};
use eventboard_client::commands;
use eventboard_client::config::ClientConfig;
use eventboard_client::error::{ClientError, ClientResult};
use eventboard_core::{TracingConfig, init_tracing};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ClientResult<()> {
    let mut config = match cli.config {
        Some(ref path) => ClientConfig::load_from(path).map_err(ClientError::Config)?,
        None => ClientConfig::load().map_err(ClientError::Config)?,
    };

    // Command-line flags win over the file.
    config.debug |= cli.debug;
    if let Some(ref tz) = cli.timezone {
        config.display.timezone = tz.clone();
    }
    if cli.max_title_length.is_some() {
        config.display.max_title_length = cli.max_title_length;
    }

    init_tracing(tracing_config(&cli, &config))?;

    match cli.command {
        Some(Command::Open {
            ref id,
            provider,
            print,
        }) => commands::open::run(&cli, &config, id, provider.into(), print).await,
        Some(Command::Serve { bind }) => commands::serve::run(&cli, &config, bind).await,
        Some(Command::Config { ref action }) => match action {
            ConfigAction::Dump => commands::config::dump(&config),
            ConfigAction::Validate => commands::config::validate(&config),
            ConfigAction::Path => commands::config::path(),
        },
        None => commands::list::run(&cli, &config).await,
    }
}

fn tracing_config(cli: &Cli, config: &ClientConfig) -> TracingConfig {
    let serving = matches!(cli.command, Some(Command::Serve { .. }));
    match (serving, config.debug) {
        (true, true) => TracingConfig::server()
            .with_format(config.server.log_format)
            .with_level(tracing::Level::DEBUG),
        (true, false) => TracingConfig::server().with_format(config.server.log_format),
        (false, true) => TracingConfig::cli_debug(),
        (false, false) => TracingConfig::default(),
    }
}
