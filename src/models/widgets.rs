//! Home-screen widget models matching the frontend interfaces.

use serde::{Deserialize, Serialize};

/// One slide of the home carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselItem {
    pub id: String,
    pub image_url: String,
    #[serde(default)]
    pub caption: String,
    /// Fragment or external href the slide links to; empty for no link.
    #[serde(default)]
    pub link_href: String,
}

impl CarouselItem {
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            image_url: image_url.into(),
            caption: String::new(),
            link_href: String::new(),
        }
    }
}

/// A quick-link tile on the home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeWidgetConfig {
    pub id: String,
    pub title: String,
    /// Icon name resolved by the frontend's icon set.
    #[serde(default)]
    pub icon: String,
    pub link_href: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl HomeWidgetConfig {
    pub fn new(title: impl Into<String>, link_href: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            icon: String::new(),
            link_href: link_href.into(),
            enabled: true,
        }
    }
}

/// An informational card shown below the carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoCard {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub icon: String,
    pub body: String,
    #[serde(default)]
    pub link_href: String,
}

impl InfoCard {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            icon: String::new(),
            body: body.into(),
            link_href: String::new(),
        }
    }
}
