pub mod config;
pub mod store_upload;

pub use store_upload::{StoreUploadUseCase, UploadedImage};
