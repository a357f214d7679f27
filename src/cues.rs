//! Sound and notification cues.
//!
//! Core operations never play anything; they return outcomes, and the
//! functions here turn those outcomes into the cues a front end plays, in the
//! order it should play them.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::models::{LevelUpOutcome, QuestCompletion};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "cue", rename_all = "snake_case")]
pub enum Cue {
    Click,
    QuestComplete,
    LevelUp { level: u64 },
    /// Stands in for a run of level-ups too long to play one by one.
    LevelUps { from: u64, to: u64 },
}

/// Most level-ups that still get one cue each.
pub const MAX_LEVEL_UP_CUES: u64 = 10;

/// One `LevelUp` per level gained, or a single `LevelUps` once the gain
/// crosses more than [`MAX_LEVEL_UP_CUES`] levels.
pub fn cues_for_gain(outcome: &LevelUpOutcome) -> Vec<Cue> {
    if outcome.level_ups > MAX_LEVEL_UP_CUES {
        let levels = outcome.levels_reached();
        return vec![Cue::LevelUps {
            from: *levels.start(),
            to: *levels.end(),
        }];
    }
    outcome
        .levels_reached()
        .map(|level| Cue::LevelUp { level })
        .collect()
}

/// Level-ups first, then the quest fanfare, then the button click.
/// A quest that was already done only clicks.
pub fn cues_for_completion(completion: &QuestCompletion) -> Vec<Cue> {
    let mut cues = completion
        .outcome
        .as_ref()
        .map(cues_for_gain)
        .unwrap_or_default();
    if completion.outcome.is_some() {
        cues.push(Cue::QuestComplete);
    }
    cues.push(Cue::Click);
    cues
}

pub trait CueSink {
    fn play(&mut self, cue: Cue);

    fn play_all(&mut self, cues: &[Cue]) {
        for cue in cues {
            self.play(*cue);
        }
    }
}

/// Prints notifications and rings the terminal bell for sound effects.
pub struct TerminalCues<W: Write> {
    out: W,
    sfx_enabled: bool,
}

impl TerminalCues<std::io::Stdout> {
    pub fn stdout(sfx_enabled: bool) -> Self {
        Self::new(std::io::stdout(), sfx_enabled)
    }
}

impl<W: Write> TerminalCues<W> {
    pub fn new(out: W, sfx_enabled: bool) -> Self {
        Self { out, sfx_enabled }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn bell(&mut self) -> std::io::Result<()> {
        if self.sfx_enabled {
            write!(self.out, "\x07")?;
        }
        Ok(())
    }

    fn write_cue(&mut self, cue: Cue) -> std::io::Result<()> {
        match cue {
            Cue::Click => Ok(()),
            Cue::QuestComplete => {
                self.bell()?;
                writeln!(self.out, "Quest complete!")
            }
            Cue::LevelUp { level } => {
                self.bell()?;
                writeln!(self.out, "Level Up! You are now level {}!", level)
            }
            Cue::LevelUps { from, to } => {
                self.bell()?;
                writeln!(
                    self.out,
                    "Level Up! You are now level {}! ({} levels gained)",
                    to,
                    to - from + 1
                )
            }
        }
    }
}

impl<W: Write> CueSink for TerminalCues<W> {
    fn play(&mut self, cue: Cue) {
        if let Err(e) = self.write_cue(cue) {
            tracing::debug!("Failed to play cue {:?}: {}", cue, e);
        }
    }
}

/// Keeps every cue it is given.
#[derive(Debug, Default)]
pub struct RecordingCues {
    pub played: Vec<Cue>,
}

impl CueSink for RecordingCues {
    fn play(&mut self, cue: Cue) {
        self.played.push(cue);
    }
}
