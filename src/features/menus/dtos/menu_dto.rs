use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::features::menus::models::{MenuEntry, MenuSet};

/// Response DTO for a single menu entry lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuEntryDto {
    pub id: Uuid,
    pub category_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub category_name: String,
    pub category_slug: String,
    pub category_image: Option<String>,
    pub display_order: i32,
    pub is_visible: bool,
    pub is_main_menu: bool,
}

impl From<&MenuEntry> for MenuEntryDto {
    fn from(e: &MenuEntry) -> Self {
        Self {
            id: e.id,
            category_id: e.category_id,
            parent_id: e.parent_id,
            category_name: e.category_name.clone(),
            category_slug: e.category_slug.clone(),
            category_image: e.category_image.clone(),
            display_order: e.display_order,
            is_visible: e.is_visible,
            is_main_menu: e.is_main_menu,
        }
    }
}

/// Response DTO for a menu tree (hierarchical structure)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuTreeDto {
    pub id: Uuid,
    pub category_id: Uuid,
    pub category_name: String,
    pub category_slug: String,
    pub category_image: Option<String>,
    pub display_order: i32,
    pub is_visible: bool,
    pub is_main_menu: bool,
    pub children: Vec<MenuTreeDto>,
}

impl MenuTreeDto {
    /// Build the full forest from a flat snapshot.
    ///
    /// Deleted entries are dropped everywhere, including as parent targets;
    /// hidden entries are dropped from child lists but kept at the root so
    /// admin tree views still show them. Roots and child lists are ordered
    /// by `display_order`, ties keeping input order.
    pub fn build_tree(entries: &[MenuEntry]) -> Vec<MenuTreeDto> {
        Self::build_forest(entries, |_| true)
    }

    /// Build the navigation forest for one menu surface: only visible roots
    /// whose partition flag matches, each with its visible subtree. A
    /// non-matching root is excluded together with its descendants.
    pub fn build_visible_tree(entries: &[MenuEntry], set: MenuSet) -> Vec<MenuTreeDto> {
        Self::build_forest(entries, |root| root.is_visible && set.matches(root))
    }

    fn build_forest(
        entries: &[MenuEntry],
        root_filter: impl Fn(&MenuEntry) -> bool,
    ) -> Vec<MenuTreeDto> {
        let live: Vec<&MenuEntry> = entries.iter().filter(|e| !e.is_deleted).collect();

        let mut roots: Vec<&MenuEntry> = live
            .iter()
            .copied()
            .filter(|e| e.parent_id.is_none() && root_filter(e))
            .collect();
        // sort_by_key is stable: equal orders keep snapshot order
        roots.sort_by_key(|e| e.display_order);

        roots
            .into_iter()
            .map(|root| Self::build_node(root, &live))
            .collect()
    }

    fn build_node(entry: &MenuEntry, live: &[&MenuEntry]) -> MenuTreeDto {
        let mut children: Vec<&MenuEntry> = live
            .iter()
            .copied()
            .filter(|c| c.parent_id == Some(entry.id) && c.is_visible)
            .collect();
        children.sort_by_key(|c| c.display_order);

        MenuTreeDto {
            id: entry.id,
            category_id: entry.category_id,
            category_name: entry.category_name.clone(),
            category_slug: entry.category_slug.clone(),
            category_image: entry.category_image.clone(),
            display_order: entry.display_order,
            is_visible: entry.is_visible,
            is_main_menu: entry.is_main_menu,
            children: children
                .into_iter()
                .map(|child| Self::build_node(child, live))
                .collect(),
        }
    }
}
