//! Delete Item Use Case
//!
//! Permanent removal of a listing, restricted to the owner.

use std::sync::Arc;

use kernel::id::{ItemId, UserId};

use crate::domain::repository::ItemRepository;
use crate::error::{ListingError, ListingResult};

/// Delete item use case
pub struct DeleteItemUseCase<R>
where
    R: ItemRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteItemUseCase<R>
where
    R: ItemRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, item_id: ItemId, caller_id: UserId) -> ListingResult<()> {
        let existing = self
            .repo
            .find_by_id(&item_id)
            .await?
            .ok_or(ListingError::NotFound)?;

        if !existing.item.is_owned_by(&caller_id) {
            return Err(ListingError::Forbidden);
        }

        self.repo.delete(&item_id).await?;

        tracing::info!(item_id = %item_id, "Item deleted");

        Ok(())
    }
}
