use serde::{Deserialize, Serialize};

/// An entry of the exercise catalog.
///
/// Catalog responses carry many more fields (body part, target, instructions);
/// only the ones shown on an exercise card are kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exercise {
    pub name: String,
    #[serde(rename = "gifUrl", default)]
    pub gif_url: String,
    #[serde(default)]
    pub equipment: String,
}

impl Exercise {
    pub fn new(
        name: impl Into<String>,
        gif_url: impl Into<String>,
        equipment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            gif_url: gif_url.into(),
            equipment: equipment.into(),
        }
    }
}

/// Where an exercise list came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CatalogOrigin {
    Remote,
    Fallback,
}

impl CatalogOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Fallback => "fallback",
        }
    }
}

/// Exercises for one target muscle group, tagged with their origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseList {
    pub target: String,
    pub origin: CatalogOrigin,
    pub exercises: Vec<Exercise>,
}
