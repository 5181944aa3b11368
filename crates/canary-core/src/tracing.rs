use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize JSON tracing to stdout. Call once at service startup.
///
/// Filtering follows `RUST_LOG`; when unset, `info` and above are emitted so
/// the startup line is always visible to the orchestrator.
///
/// Safe to call multiple times — subsequent calls are silently ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_twice_does_not_panic() {
        init_tracing();
        init_tracing();
    }
}
