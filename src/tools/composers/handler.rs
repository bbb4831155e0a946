use super::dto::{
    ComposersOutput, ListComposersByFirstLetterInput, ListComposersByIdInput,
    ListComposersByPeriodInput, ListEssentialComposersInput, ListPopularComposersInput,
    SearchComposersByNameInput,
};
use crate::catalog::CatalogClient;
use crate::error::{OpusError, Result};
use crate::tools::helpers::require;

pub fn list_popular_composers(
    catalog: &CatalogClient,
    _input: ListPopularComposersInput,
) -> Result<ComposersOutput> {
    let composers = catalog.list_popular_composers()?;
    Ok(ComposersOutput { composers })
}

pub fn list_essential_composers(
    catalog: &CatalogClient,
    _input: ListEssentialComposersInput,
) -> Result<ComposersOutput> {
    let composers = catalog.list_essential_composers()?;
    Ok(ComposersOutput { composers })
}

pub fn list_composers_by_first_letter(
    catalog: &CatalogClient,
    input: ListComposersByFirstLetterInput,
) -> Result<ComposersOutput> {
    let letter = require("letter", &input.letter)?;
    if letter.chars().count() != 1 {
        return Err(OpusError::validation_error("letter must be a single character"));
    }
    let composers = catalog.list_composers_by_first_letter(letter)?;
    Ok(ComposersOutput { composers })
}

pub fn list_composers_by_period(
    catalog: &CatalogClient,
    input: ListComposersByPeriodInput,
) -> Result<ComposersOutput> {
    let period = require("period", &input.period)?;
    let composers = catalog.list_composers_by_period(period)?;
    Ok(ComposersOutput { composers })
}

pub fn search_composers_by_name(
    catalog: &CatalogClient,
    input: SearchComposersByNameInput,
) -> Result<ComposersOutput> {
    let name = require("name", &input.name)?;
    let composers = catalog.search_composers_by_name(name)?;
    Ok(ComposersOutput { composers })
}

pub fn list_composers_by_id(
    catalog: &CatalogClient,
    input: ListComposersByIdInput,
) -> Result<ComposersOutput> {
    let ids = input
        .ids
        .into_vec()
        .into_iter()
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .collect::<Vec<_>>();
    if ids.is_empty() {
        return Err(OpusError::validation_error("ids is required"));
    }
    let composers = catalog.list_composers_by_id(&ids)?;
    Ok(ComposersOutput { composers })
}
