//! Progression engine: experience gains, level-ups and rank.
//!
//! Pure functions only. Persisting the result and notifying the player are
//! the caller's job.

use crate::error::CoreError;
use crate::models::{LevelUpOutcome, ProgressState, Rank, XP_PER_LEVEL};

/// Add `amount` experience and resolve every level-up it causes.
///
/// The threshold scales with the level reached on each step, so one large
/// gain can cross several levels, each costing more than the last:
///
/// ```text
/// { experience: 0, level: 1 } + 250
///   250 >= 100 -> 150, level 2
///   150 <  200 -> stop
/// ```
pub fn gain_experience(current: ProgressState, amount: i64) -> Result<LevelUpOutcome, CoreError> {
    if amount < 0 {
        return Err(CoreError::InvalidAmount { amount });
    }
    Ok(award_experience(current, amount as u64))
}

/// [`gain_experience`] for amounts that are non-negative by construction,
/// such as quest rewards.
///
/// Gives the same result as subtracting `level * 100` and incrementing the
/// level while experience covers the threshold, but finds the number of steps
/// directly so that the cost does not grow with the size of the gain.
pub fn award_experience(current: ProgressState, amount: u64) -> LevelUpOutcome {
    let experience = current.experience.saturating_add(amount);
    let level_ups = affordable_levels(current.level, experience).min(u64::MAX - current.level);
    let spent = cost_of_levels(current.level, level_ups);

    let mut state = ProgressState {
        experience: (experience as u128 - spent) as u64,
        level: current.level + level_ups,
    };
    // Only reachable once the threshold saturates at u64::MAX.
    if state.experience >= state.threshold() {
        state.experience = state.threshold().saturating_sub(1);
    }

    LevelUpOutcome { state, level_ups }
}

/// Experience consumed by `count` consecutive level-ups starting at `level`:
/// `100 * (level + (level + 1) + ... + (level + count - 1))`.
fn cost_of_levels(level: u64, count: u64) -> u128 {
    let (level, count) = (level as u128, count as u128);
    XP_PER_LEVEL as u128 * (count * level + count * count.saturating_sub(1) / 2)
}

/// Largest number of level-ups starting at `level` that `experience` pays for.
fn affordable_levels(level: u64, experience: u64) -> u64 {
    let budget = experience as u128;

    // cost(k) >= 100 * k * level and cost(k) >= 50 * k * (k - 1); the second
    // bound keeps k below 2^31 for any u64 budget.
    let mut upper: u128 = 1 << 31;
    if level > 0 {
        upper = upper.min(budget / (XP_PER_LEVEL as u128 * level as u128));
    }

    let (mut lo, mut hi) = (0u128, upper);
    while lo < hi {
        let mid = (lo + hi + 1) / 2;
        if cost_of_levels(level, mid as u64) <= budget {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo as u64
}

/// Rank tier for a level. Highest matching breakpoint wins.
pub fn calculate_rank(level: u64) -> Rank {
    Rank::for_level(level)
}
