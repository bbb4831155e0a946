use super::dto::{GenresOutput, ListGenresByComposerIdInput};
use crate::catalog::CatalogClient;
use crate::error::Result;
use crate::tools::helpers::require;

pub fn list_genres_by_composer_id(
    catalog: &CatalogClient,
    input: ListGenresByComposerIdInput,
) -> Result<GenresOutput> {
    let composer_id = require("composer_id", &input.composer_id)?;
    let genres = catalog.list_genres_by_composer_id(composer_id)?;
    Ok(GenresOutput { genres })
}
