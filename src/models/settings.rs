//! Site-wide settings models matching the frontend interfaces.
//!
//! Settings are stored as a one-element collection so the uniform
//! fetch-all/replace-all store contract covers them.

use serde::{Deserialize, Serialize};

/// Chrome above the navigation: identity and contact strip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopBarConfig {
    pub school_name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

/// Chrome below the content: address, contact and social links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterConfig {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub facebook_url: String,
    #[serde(default)]
    pub youtube_url: String,
    #[serde(default)]
    pub copyright: String,
}

/// The single site-settings document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub id: String,
    pub top_bar: TopBarConfig,
    pub footer: FooterConfig,
}

impl SiteSettings {
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            top_bar: TopBarConfig::default(),
            footer: FooterConfig::default(),
        }
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self::new()
    }
}
