#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
use crate::features::menus::models::MenuEntry;

/// Deterministic id for test fixtures
#[cfg(test)]
pub fn entry_id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

/// Visible, non-deleted main-menu entry; tests flip flags as needed
#[cfg(test)]
pub fn menu_entry(n: u128, parent: Option<u128>, display_order: i32) -> MenuEntry {
    MenuEntry {
        id: entry_id(n),
        category_id: entry_id(1000 + n),
        parent_id: parent.map(entry_id),
        category_name: format!("Category {}", n),
        category_slug: format!("category-{}", n),
        category_image: None,
        display_order,
        is_visible: true,
        is_main_menu: true,
        is_deleted: false,
    }
}
