//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::{ItemChanges, ItemWithOwner};

// ============================================================================
// Requests
// ============================================================================

/// Create item request. The owner is taken from the authenticated
/// caller, never from the body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub category: String,
    pub condition: String,
    pub looking_for: Option<String>,
    pub location: Option<String>,
}

/// Partial item update request. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub category: Option<String>,
    pub condition: Option<String>,
    pub looking_for: Option<String>,
    pub location: Option<String>,
}

impl From<UpdateItemRequest> for ItemChanges {
    fn from(req: UpdateItemRequest) -> Self {
        ItemChanges {
            title: req.title,
            description: req.description,
            images: req.images,
            category: req.category,
            condition: req.condition,
            looking_for: req.looking_for,
            location: req.location,
        }
    }
}

/// Query params accepted by the listing endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItemsQuery {
    pub category: Option<String>,
    pub condition: Option<String>,
    pub search: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

// ============================================================================
// Responses
// ============================================================================

/// Owner expanded to public fields
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerResponse {
    pub id: String,
    pub name: String,
}

/// Item with expanded owner
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub category: String,
    pub condition: String,
    pub owner: OwnerResponse,
    pub looking_for: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&ItemWithOwner> for ItemResponse {
    fn from(listed: &ItemWithOwner) -> Self {
        Self {
            id: listed.item.item_id.to_string(),
            title: listed.item.title.clone(),
            description: listed.item.description.clone(),
            images: listed.item.images.clone(),
            category: listed.item.category.clone(),
            condition: listed.item.condition.clone(),
            owner: OwnerResponse {
                id: listed.owner.user_id.to_string(),
                name: listed.owner.name.clone(),
            },
            looking_for: listed.item.looking_for.clone(),
            location: listed.item.location.clone(),
            created_at: listed.item.created_at,
            updated_at: listed.item.updated_at,
        }
    }
}

/// Delete confirmation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteItemResponse {
    pub message: String,
}
