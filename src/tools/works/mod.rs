pub mod dto;
pub mod handler;

pub use dto::{
    ListComposerWorksInput, ListWorksByComposerIdAndGenreInput, SearchWorksInput, WorksOutput,
};
pub use handler::{
    list_essential_works_by_composer_id, list_popular_works_by_composer_id,
    list_works_by_composer_id, list_works_by_composer_id_and_genre, search_works,
};
