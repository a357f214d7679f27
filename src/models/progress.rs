use serde::{Deserialize, Serialize};

/// Experience needed per level; the threshold for leaving level `n` is `n * XP_PER_LEVEL`.
pub const XP_PER_LEVEL: u64 = 100;

/// Accumulated experience and the current level.
///
/// `experience` counts toward the *next* level only. After every update the
/// invariant `experience < level * 100` holds. Rank is never stored; it is
/// derived from `level` through [`Rank::for_level`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressState {
    pub experience: u64,
    pub level: u64,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            experience: 0,
            level: 1,
        }
    }
}

impl ProgressState {
    /// Experience required to leave the current level.
    pub fn threshold(&self) -> u64 {
        self.level.saturating_mul(XP_PER_LEVEL)
    }

    /// Whether this state could have been produced by the progression engine.
    pub fn is_valid(&self) -> bool {
        self.level >= 1 && self.experience < self.threshold()
    }

    pub fn rank(&self) -> Rank {
        Rank::for_level(self.level)
    }
}

/// Named tier derived from the level.
///
/// - `E`: below level 10
/// - `D`: 10+
/// - `C`: 20+
/// - `B`: 40+
/// - `A`: 60+
/// - `S`: 80+
/// - `National`: 100+
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank {
    E,
    D,
    C,
    B,
    A,
    S,
    National,
}

/// Breakpoints checked from the top; the highest matching level wins.
const RANK_TABLE: &[(u64, Rank)] = &[
    (100, Rank::National),
    (80, Rank::S),
    (60, Rank::A),
    (40, Rank::B),
    (20, Rank::C),
    (10, Rank::D),
];

impl Rank {
    pub fn for_level(level: u64) -> Self {
        RANK_TABLE
            .iter()
            .find(|(min_level, _)| level >= *min_level)
            .map(|(_, rank)| *rank)
            .unwrap_or(Rank::E)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E => "E",
            Self::D => "D",
            Self::C => "C",
            Self::B => "B",
            Self::A => "A",
            Self::S => "S",
            Self::National => "National",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single experience gain.
///
/// The presentation layer notifies once per level gained; the levels passed
/// are available through [`LevelUpOutcome::levels_reached`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LevelUpOutcome {
    pub state: ProgressState,
    pub level_ups: u64,
}

impl LevelUpOutcome {
    pub fn leveled_up(&self) -> bool {
        self.level_ups > 0
    }

    /// Each level reached by this gain, in order.
    pub fn levels_reached(&self) -> std::ops::RangeInclusive<u64> {
        (self.state.level - self.level_ups + 1)..=self.state.level
    }
}
