use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, ServerConfig};
use service::Store;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use crate::routes;
use crate::state::AppState;

/// Any origin, method and header.
pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn load_bind_addr(server: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(server.bind_addr().parse()?)
}

/// Router wired to the given store, with the default CORS policy.
pub fn build_app(store: &Store) -> Router {
    routes::build_router(AppState::from_store(store), build_cors())
}

/// Connect the store, bind, serve until SIGINT/SIGTERM, then release the store.
///
/// Expects logging to be initialized by the caller.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let store = Store::connect(&cfg.database).await?;
    let app = build_app(&store);

    let addr = load_bind_addr(&cfg.server)?;
    let listener = TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    info!(service = "server", event = "ready", %local, "Server is running on http://{local}");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;
    if let Err(e) = &served {
        error!(service = "server", event = "serve_failed", error = %e, "server terminated with error");
    }

    store.shutdown().await;
    info!(service = "server", event = "stop", "server stopped");
    served?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!(service = "server", event = "shutdown_signal", "received shutdown signal, draining connections");
}
