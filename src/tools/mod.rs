pub mod composers;
pub mod genres;
pub(crate) mod helpers;
pub mod works;

pub use composers::{
    list_composers_by_first_letter, list_composers_by_id, list_composers_by_period,
    list_essential_composers, list_popular_composers, search_composers_by_name, ComposersOutput,
};
pub use genres::{list_genres_by_composer_id, GenresOutput};
pub use works::{
    list_essential_works_by_composer_id, list_popular_works_by_composer_id,
    list_works_by_composer_id, list_works_by_composer_id_and_genre, search_works, WorksOutput,
};
