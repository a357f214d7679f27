//! Daily quest gate: completion awards experience once per cycle.

use crate::error::CoreError;
use crate::models::QuestSet;

/// Mark the quest at `index` done and report the experience it awards.
///
/// A quest that is already done awards nothing and leaves the set untouched,
/// so repeated calls with the same index award exactly once.
pub fn complete_quest(mut quests: QuestSet, index: usize) -> Result<(QuestSet, u64), CoreError> {
    let len = quests.len();
    let quest = quests
        .quests
        .get_mut(index)
        .ok_or(CoreError::IndexOutOfRange { index, len })?;

    if quest.done {
        return Ok((quests, 0));
    }

    quest.done = true;
    let awarded = quest.reward_experience;
    Ok((quests, awarded))
}

/// Clear every completion flag. Experience already awarded is kept.
pub fn reset_daily(mut quests: QuestSet) -> QuestSet {
    for quest in &mut quests.quests {
        quest.done = false;
    }
    quests
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Quest;

    fn single(reward: u64) -> QuestSet {
        QuestSet::new(vec![Quest::new("Plank 1 min", reward)])
    }

    #[test]
    fn test_complete_awards_reward() {
        let (quests, awarded) = complete_quest(single(50), 0).unwrap();
        assert_eq!(awarded, 50);
        assert!(quests.quests[0].done);
    }

    #[test]
    fn test_complete_twice_awards_once() {
        let (quests, first) = complete_quest(single(50), 0).unwrap();
        let (quests, second) = complete_quest(quests, 0).unwrap();
        assert_eq!(first, 50);
        assert_eq!(second, 0);
        assert!(quests.quests[0].done);
    }

    #[test]
    fn test_complete_leaves_other_quests_alone() {
        let (quests, _) = complete_quest(QuestSet::default(), 2).unwrap();
        let done: Vec<bool> = quests.iter().map(|q| q.done).collect();
        assert_eq!(done, vec![false, false, true, false, false]);
    }

    #[test]
    fn test_out_of_range_index() {
        let err = complete_quest(QuestSet::default(), 99).unwrap_err();
        assert_eq!(err, CoreError::IndexOutOfRange { index: 99, len: 5 });
    }

    #[test]
    fn test_index_equal_to_len_is_out_of_range() {
        let err = complete_quest(QuestSet::default(), 5).unwrap_err();
        assert!(matches!(err, CoreError::IndexOutOfRange { index: 5, .. }));
    }

    #[test]
    fn test_empty_set_rejects_any_index() {
        let err = complete_quest(QuestSet::new(vec![]), 0).unwrap_err();
        assert_eq!(err, CoreError::IndexOutOfRange { index: 0, len: 0 });
    }

    #[test]
    fn test_reset_clears_all_flags() {
        let mut quests = QuestSet::default();
        for i in 0..quests.len() {
            quests = complete_quest(quests, i).unwrap().0;
        }
        assert_eq!(quests.completed_count(), 5);

        let quests = reset_daily(quests);
        assert_eq!(quests.completed_count(), 0);
        assert_eq!(quests.len(), 5);
    }

    #[test]
    fn test_reset_then_complete_awards_again() {
        let (quests, _) = complete_quest(single(30), 0).unwrap();
        let quests = reset_daily(quests);
        let (_, awarded) = complete_quest(quests, 0).unwrap();
        assert_eq!(awarded, 30);
    }
}
