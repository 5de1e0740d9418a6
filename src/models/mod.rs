//! Data models for the Campus CMS.
//!
//! These models match the site frontend's TypeScript interfaces exactly; the
//! backing store persists them as JSON documents, so every model is a plain
//! serializable value record related to others only by string id.

mod menu;
mod notice;
mod page;
mod profile;
mod settings;
mod sidebar;
mod widgets;

pub use menu::*;
pub use notice::*;
pub use page::*;
pub use profile::*;
pub use settings::*;
pub use sidebar::*;
pub use widgets::*;
