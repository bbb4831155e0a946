pub mod dto;
pub mod helpers;
pub mod implementation;

pub use dto::{Composer, DataType, Genre, Work};
pub use helpers::{escape_url, join_items, join_path};
pub use implementation::{CatalogClient, JSON_CONTENT_TYPE};
