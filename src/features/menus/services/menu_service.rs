use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::menus::dtos::{MenuEntryDto, MenuTreeDto};
use crate::features::menus::models::{MenuEntry, MenuSet};

/// Service for deriving navigation trees from flat menu snapshots.
///
/// The persistence layer owns the entries; every operation here reads a
/// caller-provided snapshot and returns a new derived structure, so calls
/// are safe under concurrent reads of the same snapshot.
pub struct MenuService;

impl MenuService {
    pub fn new() -> Self {
        Self
    }

    /// Full forest for tree display; hidden roots are kept
    pub fn assemble_tree(&self, entries: &[MenuEntry]) -> Vec<MenuTreeDto> {
        let tree = MenuTreeDto::build_tree(entries);
        tracing::debug!(
            "Assembled menu tree: {} roots from {} entries",
            tree.len(),
            entries.len()
        );
        tree
    }

    /// Visible navigation forest for one menu surface
    pub fn visible_menu(&self, entries: &[MenuEntry], set: MenuSet) -> Vec<MenuTreeDto> {
        MenuTreeDto::build_visible_tree(entries, set)
    }

    /// Get the live entry linked to a category within one menu surface.
    ///
    /// At most one such entry exists per (category, surface) pair.
    pub fn get_by_category_id(
        &self,
        entries: &[MenuEntry],
        category_id: Uuid,
        set: MenuSet,
    ) -> Result<MenuEntryDto> {
        entries
            .iter()
            .filter(|e| !e.is_deleted)
            .find(|e| e.category_id == category_id && set.matches(e))
            .map(MenuEntryDto::from)
            .ok_or_else(|| {
                AppError::NotFound(format!("Menu entry for category '{}' not found", category_id))
            })
    }
}

impl Default for MenuService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{entry_id, menu_entry};

    #[test]
    fn test_roots_ordered_and_children_attached() {
        let entries = vec![
            menu_entry(1, None, 2),
            menu_entry(2, None, 1),
            menu_entry(3, Some(1), 1),
        ];

        let tree = MenuService::new().assemble_tree(&entries);

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].id, entry_id(2));
        assert_eq!(tree[1].id, entry_id(1));
        assert_eq!(tree[1].children.len(), 1);
        assert_eq!(tree[1].children[0].id, entry_id(3));
        assert!(tree[0].children.is_empty());
    }

    #[test]
    fn test_deleted_entries_never_appear() {
        let mut deleted_root = menu_entry(1, None, 1);
        deleted_root.is_deleted = true;
        let mut deleted_child = menu_entry(3, Some(2), 1);
        deleted_child.is_deleted = true;
        let entries = vec![
            deleted_root,
            menu_entry(2, None, 2),
            deleted_child,
            // parent 1 is deleted, so this entry is orphaned
            menu_entry(4, Some(1), 1),
        ];

        let tree = MenuService::new().assemble_tree(&entries);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].id, entry_id(2));
        assert!(tree[0].children.is_empty());
    }

    #[test]
    fn test_hidden_children_excluded_hidden_roots_kept() {
        let mut hidden_root = menu_entry(1, None, 1);
        hidden_root.is_visible = false;
        let mut hidden_child = menu_entry(3, Some(2), 1);
        hidden_child.is_visible = false;
        let entries = vec![hidden_root, menu_entry(2, None, 2), hidden_child];

        let service = MenuService::new();

        // The unfiltered tree keeps the hidden root but drops the hidden child
        let tree = service.assemble_tree(&entries);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].id, entry_id(1));
        assert!(tree[1].children.is_empty());

        // The visibility-filtered navigation drops the hidden root
        let nav = service.visible_menu(&entries, MenuSet::Main);
        assert_eq!(nav.len(), 1);
        assert_eq!(nav[0].id, entry_id(2));
    }

    #[test]
    fn test_visible_menu_partitions_by_set() {
        let mut secondary_root = menu_entry(1, None, 1);
        secondary_root.is_main_menu = false;
        // Subtree follows its root out of the main navigation
        let secondary_child = menu_entry(3, Some(1), 1);
        let entries = vec![secondary_root, menu_entry(2, None, 2), secondary_child];

        let service = MenuService::new();

        let main = service.visible_menu(&entries, MenuSet::Main);
        assert_eq!(main.len(), 1);
        assert_eq!(main[0].id, entry_id(2));

        let secondary = service.visible_menu(&entries, MenuSet::Secondary);
        assert_eq!(secondary.len(), 1);
        assert_eq!(secondary[0].id, entry_id(1));
        assert_eq!(secondary[0].children.len(), 1);
    }

    #[test]
    fn test_equal_display_order_keeps_snapshot_order() {
        let entries = vec![
            menu_entry(1, None, 1),
            menu_entry(2, None, 1),
            menu_entry(3, None, 0),
        ];

        let tree = MenuService::new().assemble_tree(&entries);

        let ids: Vec<Uuid> = tree.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![entry_id(3), entry_id(1), entry_id(2)]);
    }

    #[test]
    fn test_orphaned_parent_reference_is_omitted() {
        let entries = vec![menu_entry(1, None, 1), menu_entry(2, Some(99), 1)];

        let tree = MenuService::new().assemble_tree(&entries);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].id, entry_id(1));
        assert!(tree[0].children.is_empty());
    }

    #[test]
    fn test_recursion_is_unbounded_depth() {
        let entries = vec![
            menu_entry(1, None, 1),
            menu_entry(2, Some(1), 1),
            menu_entry(3, Some(2), 1),
            menu_entry(4, Some(3), 1),
        ];

        let tree = MenuService::new().assemble_tree(&entries);

        let leaf = &tree[0].children[0].children[0].children[0];
        assert_eq!(leaf.id, entry_id(4));
        assert!(leaf.children.is_empty());
    }

    #[test]
    fn test_get_by_category_id_found_and_denormalized() {
        let entries = vec![menu_entry(1, None, 1), menu_entry(2, None, 2)];

        let dto = MenuService::new()
            .get_by_category_id(&entries, entry_id(1001), MenuSet::Main)
            .unwrap();

        assert_eq!(dto.id, entry_id(1));
        assert_eq!(dto.category_name, "Category 1");
        assert_eq!(dto.category_slug, "category-1");
    }

    #[test]
    fn test_get_by_category_id_not_found_in_either_set() {
        let entries = vec![menu_entry(1, None, 1)];
        let service = MenuService::new();
        let absent = entry_id(9999);

        for set in [MenuSet::Main, MenuSet::Secondary] {
            let err = service.get_by_category_id(&entries, absent, set).unwrap_err();
            assert!(matches!(err, AppError::NotFound(_)));
        }
    }

    #[test]
    fn test_get_by_category_id_ignores_deleted() {
        let mut deleted = menu_entry(1, None, 1);
        deleted.is_deleted = true;
        let entries = vec![deleted];

        let err = MenuService::new()
            .get_by_category_id(&entries, entry_id(1001), MenuSet::Main)
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_tree_serializes_with_nested_children() {
        let entries = vec![menu_entry(1, None, 1), menu_entry(2, Some(1), 1)];

        let tree = MenuService::new().assemble_tree(&entries);
        let json = serde_json::to_value(&tree).unwrap();

        assert_eq!(json[0]["category_slug"], "category-1");
        assert_eq!(json[0]["children"][0]["category_slug"], "category-2");
        assert_eq!(json[0]["children"][0]["children"], serde_json::json!([]));
    }
}
