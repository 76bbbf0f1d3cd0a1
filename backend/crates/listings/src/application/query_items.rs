//! Query Items Use Case
//!
//! Public read paths: filtered listing, single item, per-owner listing.

use std::sync::Arc;

use kernel::id::{ItemId, UserId};

use crate::domain::entity::ItemWithOwner;
use crate::domain::repository::ItemRepository;
use crate::domain::value_object::ItemFilter;
use crate::error::{ListingError, ListingResult};

/// Query items use case
pub struct QueryItemsUseCase<R>
where
    R: ItemRepository,
{
    repo: Arc<R>,
}

impl<R> QueryItemsUseCase<R>
where
    R: ItemRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// List items matching the filter, newest first
    pub async fn list(&self, filter: &ItemFilter) -> ListingResult<Vec<ItemWithOwner>> {
        self.repo.list(filter).await
    }

    /// Get a single item by ID
    pub async fn get(&self, item_id: &ItemId) -> ListingResult<ItemWithOwner> {
        self.repo
            .find_by_id(item_id)
            .await?
            .ok_or(ListingError::NotFound)
    }

    /// List all items of one owner, newest first
    pub async fn list_by_owner(&self, owner_id: &UserId) -> ListingResult<Vec<ItemWithOwner>> {
        self.repo.list_by_owner(owner_id).await
    }
}
