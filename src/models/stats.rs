use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Character attributes shown on the stats panel.
///
/// Display-only: loaded and persisted as an opaque record, never mutated by
/// quest or experience logic. Attributes keep the order they were stored in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct CharacterStats(pub IndexMap<String, i64>);

impl Default for CharacterStats {
    fn default() -> Self {
        Self(
            ["STR", "AGI", "VIT", "INT"]
                .into_iter()
                .map(|name| (name.to_string(), 5))
                .collect(),
        )
    }
}

impl CharacterStats {
    pub fn get(&self, name: &str) -> Option<i64> {
        self.0.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
