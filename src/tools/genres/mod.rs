pub mod dto;
pub mod handler;

pub use dto::{GenresOutput, ListGenresByComposerIdInput};
pub use handler::list_genres_by_composer_id;
