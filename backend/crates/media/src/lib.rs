//! Media (Image Upload) Backend Module
//!
//! Clean Architecture structure:
//! - `application/` - Upload validation and storage use case, config
//! - `infra/` - Disk-backed image store
//! - `presentation/` - HTTP handler, DTO, router
//!
//! ## Behavior
//! - Exactly one file per request, under the multipart field `image`
//! - JPEG/PNG only, validated before any bytes are persisted
//! - 5 MiB size cap
//! - Stored under a timestamp-prefixed unique name and served back as
//!   a relative `/uploads/...` URL

pub mod application;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::MediaConfig;
pub use error::{UploadError, UploadResult};
pub use infra::disk::DiskImageStore;
pub use presentation::router::media_router;
