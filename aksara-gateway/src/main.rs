use std::sync::Arc;

use aksara::Transliterator;
use aksara_gateway::config::GatewayConfig;
use aksara_gateway::{AppState, router, telemetry};
use anyhow::Context;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let config = GatewayConfig::from_env()?;

    // table invariants are fatal at startup, never at request time
    Transliterator::new().context("Hanacaraka tables failed validation")?;

    if config.groq_api_key.is_none() {
        warn!("GROQ_API_KEY is not set; chat requests will fail");
    }
    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; script topics will use Groq");
    }

    let state = AppState::from_config(&config).context("failed to build chat dispatcher")?;
    let app = router(Arc::new(state));

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!(
        "Aksara gateway listening on {} ({})",
        addr, config.environment
    );
    axum::serve(listener, app).await?;

    Ok(())
}
