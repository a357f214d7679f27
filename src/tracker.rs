//! The single owner of progression state.
//!
//! A [`Tracker`] loads its state from a [`KeyValueStore`] once, runs every
//! core operation against the in-memory copy, and writes each successful
//! mutation straight through to the store. Nothing else mutates the state.

use crate::avatar;
use crate::db::{keys, KeyValueStore, KeyValueStoreExt};
use crate::engine;
use crate::error::TrackerError;
use crate::models::*;
use crate::quests;

pub struct Tracker<S: KeyValueStore> {
    store: S,
    progress: ProgressState,
    quests: QuestSet,
    stats: CharacterStats,
}

impl<S: KeyValueStore> Tracker<S> {
    /// Load state from `store`, substituting defaults for anything missing or
    /// corrupt.
    ///
    /// The default quest set is written back on first run. A stored
    /// experience value past the level threshold is resolved into level-ups
    /// rather than discarded. A level too large for its threshold to be
    /// represented is treated as corrupt.
    pub fn load(store: S) -> Result<Self, TrackerError> {
        let (experience, _) = store.load_or::<u64>(keys::XP, 0)?;
        let (mut level, _) = store.load_or::<u64>(keys::LEVEL, 1)?;
        if level == 0 {
            tracing::warn!("Stored level 0 is invalid, resetting to level 1");
            level = 1;
        }

        let mut progress = ProgressState { experience, level };
        let mut repaired = false;
        if level.checked_mul(XP_PER_LEVEL).is_none() {
            tracing::warn!("Stored level {} is out of range, resetting progress", level);
            progress = ProgressState::default();
            repaired = true;
        } else if !progress.is_valid() {
            tracing::warn!(
                "Stored experience {} exceeds the level {} threshold, resolving level-ups",
                experience,
                level
            );
            let base = ProgressState {
                experience: 0,
                level,
            };
            progress = engine::award_experience(base, experience).state;
            repaired = true;
        }

        let (quests, found) = store.load_or(keys::QUESTS, QuestSet::default())?;
        let (stats, _) = store.load_or(keys::STATS, CharacterStats::default())?;

        let tracker = Self {
            store,
            progress,
            quests,
            stats,
        };

        if !found {
            tracing::info!("No quests stored, creating the default daily set");
            tracker.save_quests()?;
        }
        if repaired {
            tracker.save_progress()?;
        }

        Ok(tracker)
    }

    pub fn progress(&self) -> ProgressState {
        self.progress
    }

    pub fn rank(&self) -> Rank {
        engine::calculate_rank(self.progress.level)
    }

    pub fn quests(&self) -> &QuestSet {
        &self.quests
    }

    pub fn stats(&self) -> &CharacterStats {
        &self.stats
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            level: self.progress.level,
            experience: self.progress.experience,
            next_level_at: self.progress.threshold(),
            rank: self.rank(),
            quests: self.quests.quests.clone(),
            stats: self.stats.clone(),
        }
    }

    pub fn gain_experience(&mut self, amount: i64) -> Result<LevelUpOutcome, TrackerError> {
        let outcome = engine::gain_experience(self.progress, amount)?;
        self.apply(outcome)?;
        Ok(outcome)
    }

    /// Complete the quest at `index`, awarding its experience on the first
    /// completion of the cycle. A repeat completion writes nothing.
    pub fn complete_quest(&mut self, index: usize) -> Result<QuestCompletion, TrackerError> {
        let (updated, awarded) = quests::complete_quest(self.quests.clone(), index)?;
        if awarded == 0 && updated == self.quests {
            tracing::debug!("Quest {} already done, nothing awarded", index);
            return Ok(QuestCompletion {
                index,
                experience_awarded: 0,
                outcome: None,
            });
        }

        self.quests = updated;
        let outcome = engine::award_experience(self.progress, awarded);
        self.apply(outcome)?;
        self.save_quests()?;

        tracing::info!("Quest {} complete, {} XP awarded", index, awarded);
        Ok(QuestCompletion {
            index,
            experience_awarded: awarded,
            outcome: Some(outcome),
        })
    }

    pub fn reset_daily(&mut self) -> Result<(), TrackerError> {
        self.quests = quests::reset_daily(self.quests.clone());
        self.save_quests()?;
        tracing::info!("Daily quests reset");
        Ok(())
    }

    pub fn avatar(&self) -> Result<Option<String>, TrackerError> {
        let (avatar, _) = self.store.load_or::<Option<String>>(keys::AVATAR, None)?;
        Ok(avatar)
    }

    /// Store an image `data:` URL as the avatar.
    pub fn set_avatar(&mut self, data_url: &str) -> Result<(), TrackerError> {
        avatar::validate_data_url(data_url)?;
        self.store.save(keys::AVATAR, data_url)?;
        Ok(())
    }

    fn apply(&mut self, outcome: LevelUpOutcome) -> Result<(), TrackerError> {
        if outcome.leveled_up() {
            tracing::info!(
                "Level up: {} -> {} ({})",
                self.progress.level,
                outcome.state.level,
                engine::calculate_rank(outcome.state.level)
            );
        }
        self.progress = outcome.state;
        self.save_progress()
    }

    fn save_progress(&self) -> Result<(), TrackerError> {
        self.store.save(keys::XP, &self.progress.experience)?;
        self.store.save(keys::LEVEL, &self.progress.level)?;
        Ok(())
    }

    fn save_quests(&self) -> Result<(), TrackerError> {
        self.store.save(keys::QUESTS, &self.quests)?;
        Ok(())
    }
}
