//! Move generation.
//!
//! Expands declarative movement rules into destinations against the current
//! board, and enumerates every move available to a player.

pub mod behaviour;
pub mod highlight;
pub mod rule;

pub use behaviour::Behaviour;
pub use highlight::{Highlight, HighlightGrid};
pub use rule::{MovementRule, Repeat, StepMode};

use rand::Rng;

use crate::board::{GridBoard, Location, Player};
use crate::catalog::Catalog;

/// A candidate move: a piece at `from` may move or capture onto `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Location,
    pub to: Location,
    pub capture: bool,
}

/// Every move available to `player`'s pieces, in board order.
///
/// A cell that is both movable and capturable is reported once, as a
/// capture when it is occupied.
pub fn legal_moves(catalog: &Catalog, board: &GridBoard, player: &Player) -> Vec<Move> {
    let mut moves = Vec::new();

    for (from, piece) in board.pieces() {
        if !piece.is_owned_by(player.id) {
            continue;
        }
        let grid = catalog.moves(piece.piece_type, board, from, player);
        for (to, h) in grid.iter() {
            if !h.is_any() {
                continue;
            }
            moves.push(Move {
                from,
                to,
                capture: h.capturable && board.at(to).is_some(),
            });
        }
    }

    moves
}

/// Picks one of `player`'s available moves uniformly at random.
pub fn random_move(
    catalog: &Catalog,
    board: &GridBoard,
    player: &Player,
    rng: &mut impl Rng,
) -> Option<Move> {
    let legal = legal_moves(catalog, board, player);
    if legal.is_empty() {
        return None;
    }
    let idx = rng.gen_range(0..legal.len());
    Some(legal[idx])
}
