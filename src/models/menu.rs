//! Navigation menu model matching the frontend MenuItem interface.

use serde::{Deserialize, Serialize};

/// One entry of the site navigation menu.
///
/// The menu is a shallow tree: children live nested inside their parent
/// record (array containment, no back-pointers), so removing a root item
/// removes its children with it and cycles are structurally impossible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    /// Fragment or external href this entry navigates to.
    pub href: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    /// Create a leaf menu entry with a fresh id.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            label: label.into(),
            href: href.into(),
            children: Vec::new(),
        }
    }
}
