use crate::catalog::Work;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ListWorksByComposerIdAndGenreInput {
    pub composer_id: String,
    pub genre: String,
}

/// Input shared by the all/popular/essential work listings.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListComposerWorksInput {
    pub composer_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchWorksInput {
    pub composer_id: String,
    pub title: String,
    #[serde(default)]
    pub genre: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WorksOutput {
    pub works: Vec<Work>,
}
