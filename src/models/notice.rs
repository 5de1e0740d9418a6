//! Notice model matching the frontend Notice interface.
//!
//! The `notices` and `news` collections share this shape; they are distinct
//! collections in the backing store and are edited independently.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A notice or news item published on the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: String,
    pub title: String,
    pub body: String,
    /// Free-form category label shown on the listing pages.
    #[serde(default)]
    pub category: String,
    /// RFC 3339 publication timestamp.
    pub published_at: String,
    /// Link to an attached document (already uploaded to the media host).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
    /// Pinned items are surfaced on the home page ticker.
    #[serde(default)]
    pub pinned: bool,
}

impl Notice {
    /// Create a notice with a fresh id, published now.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            body: body.into(),
            category: String::new(),
            published_at: Utc::now().to_rfc3339(),
            attachment_url: None,
            pinned: false,
        }
    }
}
