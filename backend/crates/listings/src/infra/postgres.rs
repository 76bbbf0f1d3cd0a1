//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::{ItemId, UserId};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::domain::entity::{Item, ItemOwner, ItemWithOwner};
use crate::domain::repository::ItemRepository;
use crate::domain::value_object::ItemFilter;
use crate::error::ListingResult;

/// Shared SELECT with the owner joined in
const SELECT_ITEM: &str = r#"
    SELECT
        i.item_id,
        i.title,
        i.description,
        i.images,
        i.category,
        i.condition,
        i.owner_id,
        i.looking_for,
        i.location,
        i.created_at,
        i.updated_at,
        u.name AS owner_name
    FROM items i
    JOIN users u ON u.user_id = i.owner_id
"#;

/// PostgreSQL-backed item repository
#[derive(Clone)]
pub struct PgItemRepository {
    pool: PgPool,
}

impl PgItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ItemRepository for PgItemRepository {
    async fn create(&self, item: &Item) -> ListingResult<()> {
        sqlx::query(
            r#"
            INSERT INTO items (
                item_id,
                title,
                description,
                images,
                category,
                condition,
                owner_id,
                looking_for,
                location,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(item.item_id.as_uuid())
        .bind(&item.title)
        .bind(&item.description)
        .bind(&item.images)
        .bind(&item.category)
        .bind(&item.condition)
        .bind(item.owner_id.as_uuid())
        .bind(&item.looking_for)
        .bind(&item.location)
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, item_id: &ItemId) -> ListingResult<Option<ItemWithOwner>> {
        let row = sqlx::query_as::<_, ItemRow>(&format!("{SELECT_ITEM} WHERE i.item_id = $1"))
            .bind(item_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.into_listed()))
    }

    async fn list(&self, filter: &ItemFilter) -> ListingResult<Vec<ItemWithOwner>> {
        let mut query = QueryBuilder::<Postgres>::new(SELECT_ITEM);
        query.push(" WHERE TRUE");

        if let Some(category) = &filter.category {
            query.push(" AND i.category = ").push_bind(category);
        }
        if let Some(condition) = &filter.condition {
            query.push(" AND i.condition = ").push_bind(condition);
        }
        if let Some(search) = &filter.search {
            let pattern = format!("%{}%", search);
            query
                .push(" AND (i.title ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR i.description ILIKE ")
                .push_bind(pattern)
                .push(")");
        }

        query
            .push(" ORDER BY i.created_at DESC LIMIT ")
            .push_bind(filter.limit() as i64)
            .push(" OFFSET ")
            .push_bind(filter.offset() as i64);

        let rows = query
            .build_query_as::<ItemRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|r| r.into_listed()).collect())
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> ListingResult<Vec<ItemWithOwner>> {
        let rows = sqlx::query_as::<_, ItemRow>(&format!(
            "{SELECT_ITEM} WHERE i.owner_id = $1 ORDER BY i.created_at DESC"
        ))
        .bind(owner_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_listed()).collect())
    }

    async fn update(&self, item: &Item) -> ListingResult<()> {
        // Owner and created_at are immutable
        sqlx::query(
            r#"
            UPDATE items SET
                title = $2,
                description = $3,
                images = $4,
                category = $5,
                condition = $6,
                looking_for = $7,
                location = $8,
                updated_at = $9
            WHERE item_id = $1
            "#,
        )
        .bind(item.item_id.as_uuid())
        .bind(&item.title)
        .bind(&item.description)
        .bind(&item.images)
        .bind(&item.category)
        .bind(&item.condition)
        .bind(&item.looking_for)
        .bind(&item.location)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, item_id: &ItemId) -> ListingResult<()> {
        sqlx::query("DELETE FROM items WHERE item_id = $1")
            .bind(item_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ItemRow {
    item_id: Uuid,
    title: String,
    description: String,
    images: Vec<String>,
    category: String,
    condition: String,
    owner_id: Uuid,
    looking_for: Option<String>,
    location: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    owner_name: String,
}

impl ItemRow {
    fn into_listed(self) -> ItemWithOwner {
        let owner_id = UserId::from_uuid(self.owner_id);
        ItemWithOwner {
            item: Item {
                item_id: ItemId::from_uuid(self.item_id),
                title: self.title,
                description: self.description,
                images: self.images,
                category: self.category,
                condition: self.condition,
                owner_id,
                looking_for: self.looking_for,
                location: self.location,
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            owner: ItemOwner {
                user_id: owner_id,
                name: self.owner_name,
            },
        }
    }
}
