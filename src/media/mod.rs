//! Client for the third-party media upload API.
//!
//! The admin editors upload images and documents here and store only the
//! returned URL. A failed upload is scoped to the single field being
//! edited; the editor shows the message and the user retries.

use serde::Deserialize;

use crate::errors::AppError;

/// Response of a successful upload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedMedia {
    pub url: String,
}

/// Client for the hosted media API.
pub struct MediaClient {
    upload_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl MediaClient {
    pub fn new(upload_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            upload_url: upload_url.into(),
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// Upload a file and return its public URL.
    pub async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<UploadedMedia, AppError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let mut request = self.client.post(&self.upload_url).multipart(form);
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Upload(format!("Upload failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Upload of {} rejected: {} - {}", filename, status, body);
            return Err(AppError::Upload(format!(
                "Upload failed with status {}",
                status
            )));
        }

        response
            .json::<UploadedMedia>()
            .await
            .map_err(|e| AppError::Upload(format!("Malformed upload response: {}", e)))
    }
}
