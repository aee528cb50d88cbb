/// Release Tag API — Shared Library
///
/// This crate contains the release fetcher, the request handler,
/// configuration and the JSON models used by every entry point.
///
/// Each serverless function in `api/` and the standalone server in
/// `src/bin/` import from this library to keep handlers thin.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod handler;
pub mod models;
pub mod server;
pub mod telemetry;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
