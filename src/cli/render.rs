//! Plain-text rendering for the terminal.

use crate::models::{CharacterStats, ExerciseList, QuestSet, StatusSnapshot};

const DONE: &str = "[x]";
const OPEN: &str = "[ ]";

/// Level, experience toward the next level, and rank.
///
/// ```text
/// Level: 2
/// XP: 150 / 200
/// Rank: E
/// ```
pub fn render_status(status: &StatusSnapshot) -> String {
    format!(
        "Level: {}\nXP: {} / {}\nRank: {}\n",
        status.level, status.experience, status.next_level_at, status.rank
    )
}

/// Numbered checklist, 1-based to match the `complete` command.
pub fn render_quests(quests: &QuestSet) -> String {
    let mut output = String::new();
    for (i, quest) in quests.iter().enumerate() {
        let mark = if quest.done { DONE } else { OPEN };
        output.push_str(&format!(
            "{} {}. {} (+{} XP)\n",
            mark,
            i + 1,
            quest.description,
            quest.reward_experience
        ));
    }
    if quests.is_empty() {
        output.push_str("No quests.\n");
    }
    output
}

pub fn render_stats(stats: &CharacterStats) -> String {
    stats
        .iter()
        .map(|(name, value)| format!("{}: {}\n", name, value))
        .collect()
}

pub fn render_exercises(list: &ExerciseList) -> String {
    let mut output = format!("Exercises for {} ({}):\n", list.target, list.origin.as_str());
    for exercise in &list.exercises {
        output.push_str(&format!(
            "- {} [{}]\n  {}\n",
            exercise.name.to_uppercase(),
            exercise.equipment,
            exercise.gif_url
        ));
    }
    output
}
