use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "aksara=info,aksara_gateway=info";

/// Install the global fmt subscriber; `RUST_LOG` overrides the default filter
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .init();
}
