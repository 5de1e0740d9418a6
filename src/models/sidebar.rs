//! Sidebar section model matching the frontend SidebarSection interface.
//!
//! `data` is a tagged union whose valid shape depends on the section type.
//! Modeling it as an enum makes `(type, data)` one atomic value: switching
//! the type necessarily replaces the payload, so stale fields from the
//! previous type cannot leak into the new type's render.

use serde::{Deserialize, Serialize};

/// A link shown in a `list` sidebar section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarLink {
    pub label: String,
    pub href: String,
}

/// A phone entry shown in a `hotlines` sidebar section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotline {
    pub name: String,
    pub number: String,
}

/// The section type discriminant, as the frontend names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SidebarKind {
    List,
    Hotlines,
    Message,
}

impl SidebarKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SidebarKind::List => "list",
            SidebarKind::Hotlines => "hotlines",
            SidebarKind::Message => "message",
        }
    }
}

/// Type-dependent payload of a sidebar section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum SidebarData {
    List {
        links: Vec<SidebarLink>,
    },
    Hotlines {
        hotlines: Vec<Hotline>,
    },
    Message {
        name: String,
        designation: String,
        image: String,
        quote: String,
    },
}

impl SidebarData {
    /// Canonical empty payload for a section type.
    pub fn default_for(kind: SidebarKind) -> Self {
        match kind {
            SidebarKind::List => SidebarData::List { links: Vec::new() },
            SidebarKind::Hotlines => SidebarData::Hotlines {
                hotlines: Vec::new(),
            },
            SidebarKind::Message => SidebarData::Message {
                name: String::new(),
                designation: String::new(),
                image: String::new(),
                quote: String::new(),
            },
        }
    }

    pub fn kind(&self) -> SidebarKind {
        match self {
            SidebarData::List { .. } => SidebarKind::List,
            SidebarData::Hotlines { .. } => SidebarKind::Hotlines,
            SidebarData::Message { .. } => SidebarKind::Message,
        }
    }
}

/// A configurable widget in the public sidebar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarSection {
    pub id: String,
    pub title: String,
    #[serde(flatten)]
    pub data: SidebarData,
}

impl SidebarSection {
    /// Create a section of the given type with its canonical empty payload.
    pub fn new(title: impl Into<String>, kind: SidebarKind) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            data: SidebarData::default_for(kind),
        }
    }

    /// Switch the section type, replacing `data` wholesale with the new
    /// type's default payload. A no-op when the type is unchanged.
    pub fn set_kind(&mut self, kind: SidebarKind) {
        if self.data.kind() != kind {
            self.data = SidebarData::default_for(kind);
        }
    }
}
