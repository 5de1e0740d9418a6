//! Page model matching the frontend Page interface.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A hand-authored content page, addressed by slug on the page-viewer route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub body: String,
    pub updated_at: String,
}

impl Page {
    /// Create a page with a fresh id, stamped now.
    pub fn new(slug: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            slug: slug.into(),
            title: title.into(),
            body: body.into(),
            updated_at: Utc::now().to_rfc3339(),
        }
    }
}
