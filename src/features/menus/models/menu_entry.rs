use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Flat navigation menu entry, one per linked category.
///
/// The persistence layer joins the category's display fields in before
/// handing a snapshot over; the assembler never fetches data itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuEntry {
    pub id: Uuid,
    pub category_id: Uuid,
    /// None marks a root entry
    pub parent_id: Option<Uuid>,
    pub category_name: String,
    pub category_slug: String,
    pub category_image: Option<String>,
    pub display_order: i32,
    pub is_visible: bool,
    /// Partition flag: main navigation vs secondary navigation
    pub is_main_menu: bool,
    pub is_deleted: bool,
}

/// Navigation surface a menu entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSet {
    Main,
    Secondary,
}

impl MenuSet {
    pub fn matches(&self, entry: &MenuEntry) -> bool {
        match self {
            MenuSet::Main => entry.is_main_menu,
            MenuSet::Secondary => !entry.is_main_menu,
        }
    }
}
