pub mod create_item;
pub mod delete_item;
pub mod query_items;
pub mod update_item;

pub use create_item::{CreateItemInput, CreateItemUseCase};
pub use delete_item::DeleteItemUseCase;
pub use query_items::QueryItemsUseCase;
pub use update_item::UpdateItemUseCase;
