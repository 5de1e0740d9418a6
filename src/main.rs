//! Campus CMS gateway binary.
//!
//! Boots the thin server that fronts the hosted chat-completion API for the
//! site's chat widget. Pages are not routed here and nothing is persisted
//! here; the application core lives in the library and runs client-side.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use campus_cms::chat::ChatClient;
use campus_cms::config::Config;
use campus_cms::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Campus CMS gateway");
    tracing::info!("Chat upstream: {}", config.chat_api_url);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn about missing secrets rather than failing: dev setups run open
    if config.gateway_psk.is_none() {
        tracing::warn!(
            "No gateway PSK configured (CAMPUS_GATEWAY_PSK). Authentication is disabled!"
        );
    }
    if config.chat_api_key.is_none() {
        tracing::warn!(
            "No chat API key configured (CAMPUS_CHAT_API_KEY). Upstream may reject requests."
        );
    }

    // Create the upstream chat client
    let chat = Arc::new(ChatClient::new(
        config.chat_api_url.clone(),
        config.chat_api_key.clone(),
        config.chat_model.clone(),
    ));

    let state = AppState {
        chat,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Gateway listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
