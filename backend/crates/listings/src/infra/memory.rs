//! In-Memory Repository Implementation
//!
//! Injected store used for offline preview mode and test harnesses.
//! Owner names are resolved through the in-memory user store, mirroring
//! the SQL join of the PostgreSQL implementation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use auth::MemoryAuthRepository;
use auth::domain::repository::UserRepository;
use kernel::id::{ItemId, UserId};
use uuid::Uuid;

use crate::domain::entity::{Item, ItemOwner, ItemWithOwner};
use crate::domain::repository::ItemRepository;
use crate::domain::value_object::ItemFilter;
use crate::error::{ListingError, ListingResult};

/// In-memory item repository
#[derive(Clone)]
pub struct MemoryItemRepository {
    items: Arc<Mutex<HashMap<Uuid, Item>>>,
    users: MemoryAuthRepository,
}

impl MemoryItemRepository {
    pub fn new(users: MemoryAuthRepository) -> Self {
        Self {
            items: Arc::new(Mutex::new(HashMap::new())),
            users,
        }
    }

    /// Drop all stored items (test harnesses only)
    pub fn reset(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, Item>> {
        self.items.lock().expect("item store lock poisoned")
    }

    async fn expand_owner(&self, item: Item) -> ListingResult<ItemWithOwner> {
        let owner = self
            .users
            .find_by_id(&item.owner_id)
            .await
            .map_err(|e| ListingError::Internal(e.to_string()))?
            .ok_or_else(|| ListingError::Internal("Item owner not found".to_string()))?;

        Ok(ItemWithOwner {
            owner: ItemOwner {
                user_id: owner.user_id,
                name: owner.name,
            },
            item,
        })
    }

    async fn expand_all(&self, items: Vec<Item>) -> ListingResult<Vec<ItemWithOwner>> {
        let mut listed = Vec::with_capacity(items.len());
        for item in items {
            listed.push(self.expand_owner(item).await?);
        }
        Ok(listed)
    }
}

impl ItemRepository for MemoryItemRepository {
    async fn create(&self, item: &Item) -> ListingResult<()> {
        self.lock().insert(item.item_id.into_uuid(), item.clone());
        Ok(())
    }

    async fn find_by_id(&self, item_id: &ItemId) -> ListingResult<Option<ItemWithOwner>> {
        let item = self.lock().get(item_id.as_uuid()).cloned();
        match item {
            Some(item) => Ok(Some(self.expand_owner(item).await?)),
            None => Ok(None),
        }
    }

    async fn list(&self, filter: &ItemFilter) -> ListingResult<Vec<ItemWithOwner>> {
        let mut items: Vec<Item> = {
            let items = self.lock();
            items
                .values()
                .filter(|item| matches_filter(item, filter))
                .cloned()
                .collect()
        };

        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let page: Vec<Item> = items
            .into_iter()
            .skip(filter.offset() as usize)
            .take(filter.limit() as usize)
            .collect();

        self.expand_all(page).await
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> ListingResult<Vec<ItemWithOwner>> {
        let mut items: Vec<Item> = {
            let items = self.lock();
            items
                .values()
                .filter(|item| &item.owner_id == owner_id)
                .cloned()
                .collect()
        };

        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        self.expand_all(items).await
    }

    async fn update(&self, item: &Item) -> ListingResult<()> {
        self.lock().insert(item.item_id.into_uuid(), item.clone());
        Ok(())
    }

    async fn delete(&self, item_id: &ItemId) -> ListingResult<()> {
        self.lock().remove(item_id.as_uuid());
        Ok(())
    }
}

fn matches_filter(item: &Item, filter: &ItemFilter) -> bool {
    if let Some(category) = &filter.category {
        if &item.category != category {
            return false;
        }
    }
    if let Some(condition) = &filter.condition {
        if &item.condition != condition {
            return false;
        }
    }
    if let Some(search) = &filter.search {
        let needle = search.to_lowercase();
        let in_title = item.title.to_lowercase().contains(&needle);
        let in_description = item.description.to_lowercase().contains(&needle);
        if !in_title && !in_description {
            return false;
        }
    }
    true
}
