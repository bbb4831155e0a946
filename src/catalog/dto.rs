use crate::error::OpusError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of record served by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Composers,
    Works,
    Genres,
    Performers,
}

impl DataType {
    /// Resource segment at the start of the request path.
    pub fn resource(self) -> &'static str {
        match self {
            DataType::Composers => "composer",
            DataType::Works => "work",
            DataType::Genres => "genre",
            DataType::Performers => "performer",
        }
    }

    /// Envelope key holding the returned array.
    pub fn key(self) -> &'static str {
        match self {
            DataType::Composers => "composers",
            DataType::Works => "works",
            DataType::Genres => "genres",
            DataType::Performers => "performers",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    #[serde(rename = "all")]
    All,
    Popular,
    #[serde(rename = "Recommended")]
    Essential,
    Chamber,
    Keyboard,
    Orchestral,
    Stage,
    Vocal,
}

impl Genre {
    pub const VARIANTS: [Genre; 8] = [
        Genre::All,
        Genre::Popular,
        Genre::Essential,
        Genre::Chamber,
        Genre::Keyboard,
        Genre::Orchestral,
        Genre::Stage,
        Genre::Vocal,
    ];

    /// Label used in request paths.
    pub fn as_str(self) -> &'static str {
        match self {
            Genre::All => "all",
            Genre::Popular => "Popular",
            Genre::Essential => "Recommended",
            Genre::Chamber => "Chamber",
            Genre::Keyboard => "Keyboard",
            Genre::Orchestral => "Orchestral",
            Genre::Stage => "Stage",
            Genre::Vocal => "Vocal",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = OpusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Genre::All),
            "popular" => Ok(Genre::Popular),
            "essential" | "recommended" => Ok(Genre::Essential),
            "chamber" => Ok(Genre::Chamber),
            "keyboard" => Ok(Genre::Keyboard),
            "orchestral" => Ok(Genre::Orchestral),
            "stage" => Ok(Genre::Stage),
            "vocal" => Ok(Genre::Vocal),
            other => Err(OpusError::validation_error(format!("Unknown genre: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Composer {
    pub id: String,
    pub name: String,
    pub complete_name: String,
    pub birth: String,
    pub death: Option<String>,
    pub epoch: String,
    pub portrait: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Work {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub searchterms: String,
    pub popular: String,
    pub recommended: String,
    pub genre: String,
}

impl Work {
    pub fn is_popular(&self) -> bool {
        self.popular == "1"
    }

    pub fn is_recommended(&self) -> bool {
        self.recommended == "1"
    }
}
