//! Domain Entities
//!
//! Core business entities for the listings domain.

use chrono::{DateTime, Utc};
use kernel::id::{ItemId, UserId};

/// Item entity - a single marketplace listing
#[derive(Debug, Clone)]
pub struct Item {
    pub item_id: ItemId,
    pub title: String,
    pub description: String,
    /// Ordered, non-empty list of image URL references
    pub images: Vec<String>,
    pub category: String,
    pub condition: String,
    /// Owning user - immutable after creation, never client-supplied
    pub owner_id: UserId,
    pub looking_for: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Create a new item owned by `owner_id`
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        owner_id: UserId,
        title: String,
        description: String,
        images: Vec<String>,
        category: String,
        condition: String,
        looking_for: Option<String>,
        location: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            item_id: ItemId::new(),
            title,
            description,
            images,
            category,
            condition,
            owner_id,
            looking_for,
            location,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether `user_id` owns this item
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.owner_id == user_id
    }

    /// Apply a partial update.
    ///
    /// Omitted or empty string fields retain their prior value (the
    /// marketplace's established falsy-skip behavior); a supplied image
    /// list replaces the previous one. `updated_at` advances on every
    /// call, even when nothing actually changed.
    pub fn apply_update(&mut self, changes: ItemChanges) {
        if let Some(title) = non_empty(changes.title) {
            self.title = title;
        }
        if let Some(description) = non_empty(changes.description) {
            self.description = description;
        }
        if let Some(images) = changes.images {
            self.images = images;
        }
        if let Some(category) = non_empty(changes.category) {
            self.category = category;
        }
        if let Some(condition) = non_empty(changes.condition) {
            self.condition = condition;
        }
        if let Some(looking_for) = non_empty(changes.looking_for) {
            self.looking_for = Some(looking_for);
        }
        if let Some(location) = non_empty(changes.location) {
            self.location = Some(location);
        }
        self.updated_at = Utc::now();
    }
}

/// Trim the value and treat empty as "not supplied"
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Partial item update - `None` means "leave unchanged"
#[derive(Debug, Clone, Default)]
pub struct ItemChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub category: Option<String>,
    pub condition: Option<String>,
    pub looking_for: Option<String>,
    pub location: Option<String>,
}

/// Public owner fields attached to a returned item
#[derive(Debug, Clone)]
pub struct ItemOwner {
    pub user_id: UserId,
    pub name: String,
}

/// Item with its owner expanded
#[derive(Debug, Clone)]
pub struct ItemWithOwner {
    pub item: Item,
    pub owner: ItemOwner,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_item() -> Item {
        Item::new(
            UserId::new(),
            "Bike".to_string(),
            "A good bike".to_string(),
            vec!["/uploads/bike.png".to_string()],
            "Sports".to_string(),
            "Good".to_string(),
            None,
            None,
        )
    }

    #[test]
    fn test_new_item_timestamps_match() {
        let item = test_item();
        assert_eq!(item.created_at, item.updated_at);
    }

    #[test]
    fn test_ownership() {
        let item = test_item();
        assert!(item.is_owned_by(&item.owner_id));
        assert!(!item.is_owned_by(&UserId::new()));
    }

    #[test]
    fn test_apply_update_partial() {
        let mut item = test_item();
        let before = item.clone();

        item.apply_update(ItemChanges {
            title: Some("Mountain Bike".to_string()),
            ..Default::default()
        });

        assert_eq!(item.title, "Mountain Bike");
        // Unspecified fields byte-identical to their prior values
        assert_eq!(item.description, before.description);
        assert_eq!(item.images, before.images);
        assert_eq!(item.category, before.category);
        assert_eq!(item.condition, before.condition);
        assert_eq!(item.created_at, before.created_at);
    }

    #[test]
    fn test_apply_update_always_advances_updated_at() {
        let mut item = test_item();
        let before = item.updated_at;

        // No fields supplied at all
        item.apply_update(ItemChanges::default());

        assert!(item.updated_at > before);
    }

    #[test]
    fn test_apply_update_empty_string_does_not_clear() {
        // Known quirk: an empty string counts as "not supplied"
        let mut item = test_item();

        item.apply_update(ItemChanges {
            title: Some("".to_string()),
            description: Some("   ".to_string()),
            ..Default::default()
        });

        assert_eq!(item.title, "Bike");
        assert_eq!(item.description, "A good bike");
    }

    #[test]
    fn test_apply_update_replaces_images() {
        let mut item = test_item();

        item.apply_update(ItemChanges {
            images: Some(vec!["/uploads/a.png".to_string(), "/uploads/b.png".to_string()]),
            ..Default::default()
        });

        assert_eq!(item.images.len(), 2);
    }
}
