//! Domain models for the training tracker.
//!
//! # Persisted state
//!
//! - [`ProgressState`]: experience and level; the [`Rank`] is derived, never stored.
//! - [`QuestSet`]: the daily set of [`Quest`]s, reset as a unit.
//! - [`CharacterStats`]: display-only attribute record.
//!
//! # Presentation values
//!
//! - [`LevelUpOutcome`] and [`QuestCompletion`]: what a mutation did.
//! - [`StatusSnapshot`]: the full view rendered after each operation.
//! - [`Exercise`] / [`ExerciseList`]: catalog entries, remote or fallback.

mod exercise;
mod progress;
mod quest;
mod snapshot;
mod stats;

pub use exercise::*;
pub use progress::*;
pub use quest::*;
pub use snapshot::*;
pub use stats::*;
