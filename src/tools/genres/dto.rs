use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ListGenresByComposerIdInput {
    pub composer_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenresOutput {
    pub genres: Vec<String>,
}
