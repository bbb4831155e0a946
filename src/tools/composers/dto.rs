use crate::catalog::Composer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ListPopularComposersInput {}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ListEssentialComposersInput {}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListComposersByFirstLetterInput {
    pub letter: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListComposersByPeriodInput {
    pub period: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchComposersByNameInput {
    pub name: String,
}

/// A single id or a list of ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComposerIds {
    One(String),
    Many(Vec<String>),
}

impl ComposerIds {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            ComposerIds::One(id) => vec![id],
            ComposerIds::Many(ids) => ids,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListComposersByIdInput {
    pub ids: ComposerIds,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ComposersOutput {
    pub composers: Vec<Composer>,
}
