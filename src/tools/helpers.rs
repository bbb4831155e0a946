use crate::catalog::Genre;
use crate::error::{OpusError, Result};

/// Trimmed value of a required string argument.
pub(crate) fn require<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(OpusError::validation_error(format!("{} is required", field)));
    }
    Ok(trimmed)
}

/// Parses an optional genre argument, defaulting to all genres.
pub(crate) fn genre_or_all(genre: Option<&str>) -> Result<Genre> {
    match genre.map(str::trim) {
        None | Some("") => Ok(Genre::All),
        Some(label) => label.parse(),
    }
}
