pub mod dto;
pub mod handler;

pub use dto::{
    ComposerIds, ComposersOutput, ListComposersByFirstLetterInput, ListComposersByIdInput,
    ListComposersByPeriodInput, ListEssentialComposersInput, ListPopularComposersInput,
    SearchComposersByNameInput,
};
pub use handler::{
    list_composers_by_first_letter, list_composers_by_id, list_composers_by_period,
    list_essential_composers, list_popular_composers, search_composers_by_name,
};
