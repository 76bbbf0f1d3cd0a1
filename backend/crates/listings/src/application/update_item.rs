//! Update Item Use Case
//!
//! Partial update of an existing listing, restricted to the owner.

use std::sync::Arc;

use kernel::id::{ItemId, UserId};

use crate::domain::entity::{ItemChanges, ItemWithOwner};
use crate::domain::repository::ItemRepository;
use crate::error::{ListingError, ListingResult};

/// Update item use case
pub struct UpdateItemUseCase<R>
where
    R: ItemRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateItemUseCase<R>
where
    R: ItemRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        item_id: ItemId,
        caller_id: UserId,
        changes: ItemChanges,
    ) -> ListingResult<ItemWithOwner> {
        let existing = self
            .repo
            .find_by_id(&item_id)
            .await?
            .ok_or(ListingError::NotFound)?;

        if !existing.item.is_owned_by(&caller_id) {
            return Err(ListingError::Forbidden);
        }

        // The non-empty-images invariant holds across updates
        if let Some(images) = &changes.images {
            if images.is_empty() {
                return Err(ListingError::Validation(
                    "At least one image is required".to_string(),
                ));
            }
        }

        let mut item = existing.item;
        item.apply_update(changes);

        self.repo.update(&item).await?;

        tracing::debug!(item_id = %item.item_id, "Item updated");

        Ok(ItemWithOwner {
            item,
            owner: existing.owner,
        })
    }
}
