//! Presentation boundary.
//!
//! The engine never draws anything. It reports what changed as `Effect`s and
//! asks the presenter for the externally kept scores when it has to rank moves.

use serde::Serialize;

use crate::types::{Cell, Player, Position, Scores};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    /// A new match begins: wipe the board drawing and both counters.
    Reset,
    /// Draw `cell` at `at` (chips and available-move markers).
    Put { at: Position, cell: Cell },
    /// Clear whatever is drawn at `at`.
    Remove { at: Position },
    /// The `cell`-colored chip at `at` is taken off the board; `delta` is
    /// charged against that color.
    Recolor { at: Position, cell: Cell, delta: i8 },
    /// Mark the chip the player picked.
    Highlight { at: Position, player: Player },
    CurrentPlayer { player: Player },
    Counter { player: Player, delta: i8 },
    GameFinished,
}

/// Receiver of engine effects.
pub trait Presenter {
    fn emit(&mut self, effect: Effect);

    /// Scores kept by the presentation layer. Used only for move ranking.
    fn scores(&self) -> Scores;
}

/// Headless presenter that buffers effects and keeps scores from the
/// counter effects it sees.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub effects: Vec<Effect>,
    pub scores: Scores,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the buffered effects, leaving the buffer empty.
    pub fn drain(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }
}

impl Presenter for Recorder {
    fn emit(&mut self, effect: Effect) {
        match effect {
            Effect::Reset => self.scores = Scores::default(),
            Effect::Counter {
                player: Player::Black,
                delta,
            } => self.scores.black += delta as i32,
            Effect::Counter {
                player: Player::White,
                delta,
            } => self.scores.white += delta as i32,
            _ => {}
        }
        self.effects.push(effect);
    }

    fn scores(&self) -> Scores {
        self.scores
    }
}
