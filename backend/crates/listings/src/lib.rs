//! Listings (Item Marketplace) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Item entity, filter value object, repository trait
//! - `application/` - Use cases (create, update, delete, query)
//! - `infra/` - Database and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Item create/update/delete, restricted to the owning user
//! - Public browsing with category/condition filters, free-text search,
//!   and page-based pagination (newest first)
//! - Per-user item listings
//! - Owner expanded to `{id, name}` on every returned item

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use domain::entity::{Item, ItemChanges, ItemOwner, ItemWithOwner};
pub use domain::value_object::ItemFilter;
pub use error::{ListingError, ListingResult};
pub use infra::memory::MemoryItemRepository;
pub use infra::postgres::PgItemRepository;
pub use presentation::router::{listings_router, listings_router_generic};
