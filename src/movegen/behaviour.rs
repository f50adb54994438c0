//! A piece's full rule set and its resolution into a highlight grid.

use crate::board::{GridBoard, Location, Player};

use super::highlight::HighlightGrid;
use super::rule::MovementRule;

/// Move rules plus capture rules. Capture rules default to the move rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Behaviour {
    pub moves: Vec<MovementRule>,
    pub captures: Vec<MovementRule>,
}

impl Behaviour {
    /// A behaviour that captures the same way it moves.
    pub fn new(moves: Vec<MovementRule>) -> Self {
        Behaviour {
            captures: moves.clone(),
            moves,
        }
    }

    /// A behaviour whose captures follow different rules, like a pawn.
    pub fn with_captures(moves: Vec<MovementRule>, captures: Vec<MovementRule>) -> Self {
        Behaviour { moves, captures }
    }

    /// Resolves every rule from `origin` and merges the results.
    ///
    /// Move rules raise `movable`, capture rules raise `capturable`. Flags are
    /// OR-combined across rules, so adding a rule never clears a cell. Reads
    /// the board only.
    pub fn resolve(&self, board: &GridBoard, origin: Location, player: &Player) -> HighlightGrid {
        let mut grid = HighlightGrid::new(board.width(), board.height());

        for rule in &self.moves {
            for loc in rule.expand(origin, board, player, false) {
                grid.mark_movable(loc);
            }
        }
        for rule in &self.captures {
            for loc in rule.expand(origin, board, player, true) {
                grid.mark_capturable(loc);
            }
        }

        grid
    }
}
