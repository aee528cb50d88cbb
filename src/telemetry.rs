use tracing_subscriber::EnvFilter;

/// Install the JSON log subscriber. Filter comes from `RUST_LOG`, else `info`.
///
/// Later calls are no-ops, so every entry point may call it.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .try_init();
}
