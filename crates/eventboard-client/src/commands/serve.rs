//! Serve command: runs the events page server in the foreground.

use std::net::SocketAddr;

use tracing::info;

use eventboard_server::{PageServer, SignalHandler};

use crate::cli::Cli;
use crate::config::ClientConfig;
use crate::error::ClientResult;

/// Serves until SIGTERM/SIGINT.
///
/// The source is opened once; every page load fetches from it again.
pub async fn run(cli: &Cli, config: &ClientConfig, bind: Option<SocketAddr>) -> ClientResult<()> {
    let source = config.open_source(cli.source.as_deref())?;
    let server_config = config.server_config(bind)?;
    info!(source = source.name(), bind = %server_config.bind_addr, "starting events page server");

    let signal_handler = SignalHandler::new();
    signal_handler.spawn_listener();

    let server = PageServer::bind(source, server_config).await?;
    println!("eventboard listening on http://{}", server.local_addr()?);
    server.run(signal_handler.shutdown_handle()).await?;

    Ok(())
}
