//! Create Item Use Case
//!
//! Validates and persists a new listing for the authenticated user.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::{Item, ItemWithOwner};
use crate::domain::repository::ItemRepository;
use crate::error::{ListingError, ListingResult};

/// Create item input. The owner is never part of the input - it is the
/// authenticated caller.
pub struct CreateItemInput {
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub category: String,
    pub condition: String,
    pub looking_for: Option<String>,
    pub location: Option<String>,
}

/// Create item use case
pub struct CreateItemUseCase<R>
where
    R: ItemRepository,
{
    repo: Arc<R>,
}

impl<R> CreateItemUseCase<R>
where
    R: ItemRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        owner_id: UserId,
        input: CreateItemInput,
    ) -> ListingResult<ItemWithOwner> {
        let title = required(input.title, "Title")?;
        let description = required(input.description, "Description")?;
        let category = required(input.category, "Category")?;
        let condition = required(input.condition, "Condition")?;

        if input.images.is_empty() {
            return Err(ListingError::Validation(
                "At least one image is required".to_string(),
            ));
        }

        let item = Item::new(
            owner_id,
            title,
            description,
            input.images,
            category,
            condition,
            input.looking_for.filter(|v| !v.trim().is_empty()),
            input.location.filter(|v| !v.trim().is_empty()),
        );

        self.repo.create(&item).await?;

        tracing::info!(
            item_id = %item.item_id,
            owner_id = %item.owner_id,
            "Item created"
        );

        // Re-read to expand the owner
        self.repo
            .find_by_id(&item.item_id)
            .await?
            .ok_or_else(|| ListingError::Internal("Created item not found".to_string()))
    }
}

/// Trim a required field, rejecting empty values
fn required(value: String, field: &str) -> ListingResult<String> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(ListingError::Validation(format!("{field} is required")));
    }
    Ok(value)
}
