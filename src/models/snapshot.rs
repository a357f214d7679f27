use serde::{Deserialize, Serialize};

use super::progress::Rank;
use super::quest::Quest;
use super::stats::CharacterStats;

/// Everything the presentation layer renders after an operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub level: u64,
    pub experience: u64,
    /// Experience at which the current level is left.
    pub next_level_at: u64,
    pub rank: Rank,
    pub quests: Vec<Quest>,
    pub stats: CharacterStats,
}
