//! Router assembly and the serve loop.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use eventboard_providers::EventSource;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::routes;
use crate::signals::ShutdownHandle;
use crate::state::AppState;

/// Builds the full application with middleware.
pub fn build_router(state: AppState) -> Router {
    let allow_cors = state.config().allow_cors;

    let app = routes::router()
        .with_state(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    if allow_cors {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        app
    }
}

/// The HTTP server for the events page.
pub struct PageServer {
    listener: TcpListener,
    state: AppState,
}

impl PageServer {
    /// Binds the configured address.
    pub async fn bind(source: Arc<dyn EventSource>, config: ServerConfig) -> ServerResult<Self> {
        let listener = TcpListener::bind(config.bind_addr).await?;
        Ok(Self {
            listener,
            state: AppState::new(source, config),
        })
    }

    /// The bound address, with the real port when `:0` was requested.
    pub fn local_addr(&self) -> ServerResult<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves until `shutdown` is triggered.
    pub async fn run(self, shutdown: ShutdownHandle) -> ServerResult<()> {
        let addr = self.local_addr()?;
        info!(%addr, "eventboard server listening");

        let state = self.state.with_shutdown(shutdown.clone());
        axum::serve(self.listener, build_router(state))
            .with_graceful_shutdown(shutdown.wait())
            .await?;

        info!("eventboard server stopped");
        Ok(())
    }
}
