//! Standalone HTTP server: the release tag endpoint outside Vercel.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tracing::{error, info};

use crate::config::ServiceConfig;
use crate::fetcher::ReleaseFetcher;
use crate::handler::{self, CONTENT_TYPE_JSON};

/// Handle to a running server.
pub struct ServerHandle {
    pub url: String,
    pub local_addr: SocketAddr,
    shutdown: tokio::sync::oneshot::Sender<()>,
}

impl ServerHandle {
    pub fn shutdown(self) {
        let _ = self.shutdown.send(());
    }
}

pub fn router(fetcher: Arc<ReleaseFetcher>) -> Router {
    Router::new()
        .route("/", get(latest_tag))
        .route("/api/health", get(health))
        .with_state(fetcher)
}

/// Bind `config.listen_addr` and serve in a background task.
pub async fn start(config: ServiceConfig) -> std::io::Result<ServerHandle> {
    let fetcher = ReleaseFetcher::new(&config).map_err(std::io::Error::other)?;
    let app = router(Arc::new(fetcher));

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    let local_addr = listener.local_addr()?;
    let url = format!("http://{local_addr}");
    info!(%url, upstream = %config.upstream_base_url, "release tag api listening");

    let (tx, rx) = tokio::sync::oneshot::channel();

    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = rx.await;
            })
            .await
        {
            error!(%err, "server stopped");
        }
    });

    Ok(ServerHandle {
        url,
        local_addr,
        shutdown: tx,
    })
}

async fn latest_tag(
    State(fetcher): State<Arc<ReleaseFetcher>>,
    RawQuery(query): RawQuery,
) -> Response {
    let reply = handler::handle(&fetcher, query.as_deref()).await;

    match reply.to_json() {
        Ok(body) => (reply.status, [(header::CONTENT_TYPE, CONTENT_TYPE_JSON)], body).into_response(),
        Err(err) => {
            error!(%err, "failed to serialize response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "release-tag-api",
        "version": crate::version(),
    }))
}
