use crate::{
    cmd::create_detector,
    modules::handlers::{check, index, liveness},
};
use anyhow::{Context, Result};
use axum::{extract::Extension, routing, Router, Server};
use cf_cheat_detector_libs::{CodeforcesApi, Detector};
use clap::Args;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;

#[derive(Debug, Args)]
pub struct ServerArgs {
    #[arg(long)]
    port: Option<u16>,
}

pub async fn run(args: ServerArgs) -> Result<()> {
    let detector = create_detector()?;

    let app = create_router(detector);
    let port = match args.port {
        Some(port) => port,
        None => {
            tracing::warn!("Server will be launched at default port number 8000");
            8000u16
        }
    };
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Server start at port {}", port);
    Server::try_bind(&addr)
        .with_context(|| {
            let message = format!("failed to bind server to port {}", port);
            tracing::error!(message);
            message
        })?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

pub fn create_router<C>(detector: Detector<C>) -> Router
where
    C: CodeforcesApi + Send + Sync + 'static,
{
    Router::new()
        .route("/", routing::get(index::<C>))
        .route("/api/check", routing::get(check::<C>))
        .route("/api/liveness", routing::get(liveness))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(Arc::new(detector)))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler.");
    };

    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("SIGINT signal received, starting graceful shutdown.");
}
