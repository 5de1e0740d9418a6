//! Client for the hosted auth service.
//!
//! Sign-in, sign-up and password reset back the login/register/
//! forgot-password pages; the profile lookup resolves an opaque user id to
//! a role after sign-in. Failures surface as inline form errors and never
//! reach the shell.

use serde_json::json;

use crate::errors::AppError;
use crate::models::{Session, UserProfile};

/// Client for the hosted auth endpoints.
pub struct AccountsClient {
    base_url: String,
    anon_key: String,
    client: reqwest::Client,
}

impl AccountsClient {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            anon_key: anon_key.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Exchange credentials for a session.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AppError> {
        let response = self
            .client
            .post(format!("{}/auth/sign-in", self.base_url))
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| AppError::Auth(format!("Sign-in failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Auth("Wrong email or password".to_string()));
        }

        response
            .json::<Session>()
            .await
            .map_err(|e| AppError::Auth(format!("Malformed sign-in response: {}", e)))
    }

    /// Register a new account and return its first session.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<Session, AppError> {
        let response = self
            .client
            .post(format!("{}/auth/sign-up", self.base_url))
            .header("apikey", &self.anon_key)
            .json(&json!({
                "email": email,
                "password": password,
                "displayName": display_name
            }))
            .send()
            .await
            .map_err(|e| AppError::Auth(format!("Sign-up failed: {}", e)))?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Auth(format!("Sign-up rejected: {}", body)));
        }

        response
            .json::<Session>()
            .await
            .map_err(|e| AppError::Auth(format!("Malformed sign-up response: {}", e)))
    }

    /// Ask the auth service to send a password-reset email.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), AppError> {
        let response = self
            .client
            .post(format!("{}/auth/recover", self.base_url))
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email }))
            .send()
            .await
            .map_err(|e| AppError::Auth(format!("Password reset failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Auth(
                "Could not send the reset email".to_string(),
            ));
        }
        Ok(())
    }

    /// Look up the profile row for an opaque user id.
    pub async fn profile(
        &self,
        access_token: &str,
        user_id: &str,
    ) -> Result<UserProfile, AppError> {
        let response = self
            .client
            .get(format!("{}/profiles/{}", self.base_url, user_id))
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await
            .map_err(|e| AppError::Auth(format!("Profile lookup failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("Profile {} not found", user_id)));
        }
        if !response.status().is_success() {
            return Err(AppError::Auth(format!(
                "Profile lookup failed with status {}",
                response.status()
            )));
        }

        response
            .json::<UserProfile>()
            .await
            .map_err(|e| AppError::Auth(format!("Malformed profile response: {}", e)))
    }
}
