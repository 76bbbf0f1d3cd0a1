//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the
//! infrastructure layer (PostgreSQL and in-memory).

use crate::domain::entity::{Item, ItemWithOwner};
use crate::domain::value_object::ItemFilter;
use crate::error::ListingResult;
use kernel::id::{ItemId, UserId};

/// Item repository trait
#[trait_variant::make(ItemRepository: Send)]
pub trait LocalItemRepository {
    /// Persist a new item
    async fn create(&self, item: &Item) -> ListingResult<()>;

    /// Find an item by ID, owner expanded
    async fn find_by_id(&self, item_id: &ItemId) -> ListingResult<Option<ItemWithOwner>>;

    /// List items matching the filter, newest first, owner expanded
    async fn list(&self, filter: &ItemFilter) -> ListingResult<Vec<ItemWithOwner>>;

    /// List all items of one owner, newest first, owner expanded
    async fn list_by_owner(&self, owner_id: &UserId) -> ListingResult<Vec<ItemWithOwner>>;

    /// Overwrite an existing item
    async fn update(&self, item: &Item) -> ListingResult<()>;

    /// Permanently delete an item
    async fn delete(&self, item_id: &ItemId) -> ListingResult<()>;
}
