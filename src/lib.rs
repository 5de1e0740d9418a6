//! Campus CMS
//!
//! Application core for the campus school website: the hash-fragment router
//! and the draft/sync controllers behind every admin editor, the content
//! data model, the client seams for the hosted backing store / auth / media
//! services, and the thin gateway that proxies the hosted chat-completion
//! API.
//!
//! Persistence, auth and file storage are fully delegated to hosted
//! services; everything here is either client-side application state or the
//! one small server surface (the chat gateway).

pub mod accounts;
pub mod api;
pub mod auth;
pub mod chat;
pub mod config;
pub mod draft;
pub mod errors;
pub mod media;
pub mod models;
pub mod router;
pub mod search;
pub mod shell;
pub mod store;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use chat::ChatClient;
use config::Config;

/// Gateway state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatClient>,
    pub config: Arc<Config>,
}

/// Create the gateway router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone PSK for the auth layer
    let psk = state.config.gateway_psk.clone();

    // API routes
    let api_routes = Router::new()
        .route("/chat", post(api::ask_assistant))
        // Apply PSK auth middleware
        .layer(middleware::from_fn(move |req, next| {
            auth::psk_auth_layer(psk.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
