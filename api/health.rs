use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};
use serde_json::json;
use release_tag_api::version;

#[tokio::main]
async fn main() -> Result<(), Error> {
    run(handler).await
}

/// GET /api/health — Liveness probe; never touches the upstream API.
pub async fn handler(_req: Request) -> Result<Response<Body>, Error> {
    let payload = json!({
        "status": "ok",
        "service": "release-tag-api",
        "version": version(),
    });

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .body(Body::Text(payload.to_string()))?)
}
