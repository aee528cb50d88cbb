use std::sync::OnceLock;

use release_tag_api::config::ServiceConfig;
use release_tag_api::fetcher::ReleaseFetcher;
use release_tag_api::handler::{handle, CONTENT_TYPE_JSON};
use release_tag_api::telemetry;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};

static FETCHER: OnceLock<ReleaseFetcher> = OnceLock::new();

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init();

    let config = ServiceConfig::from_env()?;
    let _ = FETCHER.set(ReleaseFetcher::new(&config)?);

    run(handler).await
}

/// GET /?owner={owner}&repo={repo} — Latest release tag of a repository.
///
/// Answers `{"tag": ..., "message": ...}` with 200, 400 or 500.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    let fetcher = FETCHER.get().ok_or("release fetcher is not initialised")?;
    let reply = handle(fetcher, req.uri().query()).await;

    let body = match reply.to_json() {
        Ok(body) => body,
        Err(err) => {
            tracing::error!(%err, "failed to serialize response");
            return Ok(Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .body(Body::Empty)?);
        }
    };

    Ok(Response::builder()
        .status(reply.status.as_u16())
        .header("Content-Type", CONTENT_TYPE_JSON)
        .body(Body::Text(body))?)
}
