use serde::{Deserialize, Serialize};

use super::progress::LevelUpOutcome;

/// Experience granted by each quest of the default daily set.
pub const DEFAULT_QUEST_REWARD: u64 = 50;

const DEFAULT_QUESTS: &[&str] = &[
    "Do 30 push-ups",
    "Run 10 minutes",
    "Plank 1 min",
    "20 squats",
    "Drink 1 liter water",
];

/// A completable daily task carrying a fixed experience reward.
///
/// Stored with the short field names the browser widget has always used
/// (`desc`, `done`, `xp`), so existing snapshots keep loading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quest {
    #[serde(rename = "desc")]
    pub description: String,
    #[serde(default)]
    pub done: bool,
    #[serde(rename = "xp")]
    pub reward_experience: u64,
}

impl Quest {
    pub fn new(description: impl Into<String>, reward_experience: u64) -> Self {
        Self {
            description: description.into(),
            done: false,
            reward_experience,
        }
    }
}

/// The daily set: a fixed, ordered sequence of quests reset as a unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct QuestSet {
    pub quests: Vec<Quest>,
}

impl Default for QuestSet {
    fn default() -> Self {
        Self {
            quests: DEFAULT_QUESTS
                .iter()
                .map(|desc| Quest::new(*desc, DEFAULT_QUEST_REWARD))
                .collect(),
        }
    }
}

impl QuestSet {
    pub fn new(quests: Vec<Quest>) -> Self {
        Self { quests }
    }

    pub fn len(&self) -> usize {
        self.quests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Quest> {
        self.quests.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Quest> {
        self.quests.iter()
    }

    pub fn completed_count(&self) -> usize {
        self.quests.iter().filter(|q| q.done).count()
    }
}

/// What happened when a quest was marked complete through the tracker.
///
/// `outcome` is `None` when the quest was already done and nothing changed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestCompletion {
    pub index: usize,
    pub experience_awarded: u64,
    pub outcome: Option<LevelUpOutcome>,
}
