//! HTTP render API: SSE render progress, artifact downloads and catalog/preset listings.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod handlers;
pub mod job;
pub mod state;

pub use app::app;
pub use config::ServerConfig;
pub use events::RenderEvent;
pub use job::{RenderRequest, DEFAULT_COMPOSITION};
pub use state::AppState;

use tokio::{net::TcpListener, signal};
use tracing::info;

/// Bind `config.bind_addr()` and serve until Ctrl+C or SIGTERM.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(&config.output_dir).await?;
    let addr = config.bind_addr();
    let output_dir = config.output_dir.clone();
    let state = tokio::task::spawn_blocking(move || AppState::new(config)).await?;
    info!(
        compositions = state.catalog.len(),
        fonts = state.fonts.face_count(),
        "render state ready"
    );

    let listener = TcpListener::bind(&addr).await?;
    info!(output = %output_dir.display(), "render API listening on http://{addr}");
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("shutdown signal received");
}
