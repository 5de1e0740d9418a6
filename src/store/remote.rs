//! Reqwest adapter for the hosted document store.

use async_trait::async_trait;
use serde_json::Value;

use super::{CollectionKind, CollectionStore};
use crate::errors::AppError;

/// Client for the hosted backend-as-a-service collections API.
///
/// Every request carries the publishable `apikey` header plus a bearer
/// token: the signed-in user's access token when one is set (admin saves go
/// through row-level security upstream), the anon key otherwise.
pub struct RemoteStore {
    base_url: String,
    anon_key: String,
    access_token: Option<String>,
    client: reqwest::Client,
}

impl RemoteStore {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            anon_key: anon_key.into(),
            access_token: None,
            client: reqwest::Client::new(),
        }
    }

    /// Attach the access token obtained at sign-in.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    fn bearer(&self) -> &str {
        self.access_token.as_deref().unwrap_or(&self.anon_key)
    }

    fn collection_url(&self, kind: CollectionKind) -> String {
        format!("{}/collections/{}", self.base_url, kind.as_str())
    }
}

#[async_trait]
impl CollectionStore for RemoteStore {
    async fn fetch_all(&self, kind: CollectionKind) -> Result<Vec<Value>, AppError> {
        let response = self
            .client
            .get(self.collection_url(kind))
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.bearer()))
            .send()
            .await
            .map_err(|e| AppError::Store(format!("Fetch {} failed: {}", kind.as_str(), e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Store(format!(
                "Fetch {} failed with status {}: {}",
                kind.as_str(),
                status,
                body
            )));
        }

        response
            .json::<Vec<Value>>()
            .await
            .map_err(|e| AppError::Store(format!("Malformed {} response: {}", kind.as_str(), e)))
    }

    async fn replace_all(&self, kind: CollectionKind, items: Vec<Value>) -> Result<(), AppError> {
        let response = self
            .client
            .put(self.collection_url(kind))
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.bearer()))
            .json(&items)
            .send()
            .await
            .map_err(|e| AppError::Store(format!("Save {} failed: {}", kind.as_str(), e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Failed to save {}: {} - {}", kind.as_str(), status, body);
            return Err(AppError::Store(format!(
                "Save {} failed with status {}",
                kind.as_str(),
                status
            )));
        }

        tracing::info!(
            "Saved {} ({} documents)",
            kind.as_str(),
            items.len()
        );
        Ok(())
    }
}
