use super::dto::{
    ListComposerWorksInput, ListWorksByComposerIdAndGenreInput, SearchWorksInput, WorksOutput,
};
use crate::catalog::{CatalogClient, Genre};
use crate::error::Result;
use crate::tools::helpers::{genre_or_all, require};

pub fn list_works_by_composer_id_and_genre(
    catalog: &CatalogClient,
    input: ListWorksByComposerIdAndGenreInput,
) -> Result<WorksOutput> {
    let composer_id = require("composer_id", &input.composer_id)?;
    let genre: Genre = require("genre", &input.genre)?.parse()?;
    let works = catalog.list_works_by_composer_id_and_genre(composer_id, genre)?;
    Ok(WorksOutput { works })
}

pub fn list_works_by_composer_id(
    catalog: &CatalogClient,
    input: ListComposerWorksInput,
) -> Result<WorksOutput> {
    let composer_id = require("composer_id", &input.composer_id)?;
    let works = catalog.list_works_by_composer_id(composer_id)?;
    Ok(WorksOutput { works })
}

pub fn list_popular_works_by_composer_id(
    catalog: &CatalogClient,
    input: ListComposerWorksInput,
) -> Result<WorksOutput> {
    let composer_id = require("composer_id", &input.composer_id)?;
    let works = catalog.list_popular_works_by_composer_id(composer_id)?;
    Ok(WorksOutput { works })
}

pub fn list_essential_works_by_composer_id(
    catalog: &CatalogClient,
    input: ListComposerWorksInput,
) -> Result<WorksOutput> {
    let composer_id = require("composer_id", &input.composer_id)?;
    let works = catalog.list_essential_works_by_composer_id(composer_id)?;
    Ok(WorksOutput { works })
}

pub fn search_works(catalog: &CatalogClient, input: SearchWorksInput) -> Result<WorksOutput> {
    let composer_id = require("composer_id", &input.composer_id)?;
    let title = require("title", &input.title)?;
    let genre = genre_or_all(input.genre.as_deref())?;
    let works = catalog.search_works_by_composer_id_title_and_genre(composer_id, title, genre)?;
    Ok(WorksOutput { works })
}
