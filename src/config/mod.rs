//! Configuration module for the Campus CMS.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the hosted backing store (collections + auth)
    pub store_url: String,
    /// Publishable API key sent with every backing-store request
    pub store_anon_key: String,
    /// Endpoint of the third-party media upload API
    pub media_upload_url: String,
    /// API key for the media upload API
    pub media_api_key: Option<String>,
    /// Base URL of the hosted chat-completion API
    pub chat_api_url: String,
    /// Secret key for the chat-completion API (required for the gateway)
    pub chat_api_key: Option<String>,
    /// Model name passed to the chat-completion API
    pub chat_model: String,
    /// Pre-shared key protecting the gateway (required in production)
    pub gateway_psk: Option<String>,
    /// Address to bind the gateway to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let store_url = env::var("CAMPUS_STORE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:9000".to_string());

        let store_anon_key = env::var("CAMPUS_STORE_ANON_KEY").unwrap_or_default();

        let media_upload_url = env::var("CAMPUS_MEDIA_UPLOAD_URL")
            .unwrap_or_else(|_| "https://api.imgbin.example/upload".to_string());

        let media_api_key = env::var("CAMPUS_MEDIA_API_KEY").ok();

        let chat_api_url = env::var("CAMPUS_CHAT_API_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());

        let chat_api_key = env::var("CAMPUS_CHAT_API_KEY").ok();

        let chat_model =
            env::var("CAMPUS_CHAT_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());

        let gateway_psk = env::var("CAMPUS_GATEWAY_PSK").ok();

        let bind_addr = env::var("CAMPUS_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid CAMPUS_BIND_ADDR format");

        let log_level = env::var("CAMPUS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            store_url,
            store_anon_key,
            media_upload_url,
            media_api_key,
            chat_api_url,
            chat_api_key,
            chat_model,
            gateway_psk,
            bind_addr,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("CAMPUS_STORE_URL");
        env::remove_var("CAMPUS_STORE_ANON_KEY");
        env::remove_var("CAMPUS_MEDIA_UPLOAD_URL");
        env::remove_var("CAMPUS_MEDIA_API_KEY");
        env::remove_var("CAMPUS_CHAT_API_URL");
        env::remove_var("CAMPUS_CHAT_API_KEY");
        env::remove_var("CAMPUS_CHAT_MODEL");
        env::remove_var("CAMPUS_GATEWAY_PSK");
        env::remove_var("CAMPUS_BIND_ADDR");
        env::remove_var("CAMPUS_LOG_LEVEL");

        let config = Config::from_env();

        assert_eq!(config.store_url, "http://127.0.0.1:9000");
        assert!(config.gateway_psk.is_none());
        assert_eq!(config.chat_model, "gpt-4o-mini");
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
    }
}
