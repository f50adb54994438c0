//! Piece instances and ownership.
//!
//! A piece instance is only a type handle plus an owner; its location is
//! implied by the cell of the grid that holds it.

use super::player::PlayerId;

/// Opaque handle to a registered piece type.
///
/// Handles are issued by [`crate::catalog::Catalog::register`] and resolved
/// once at setup; nothing looks piece types up by name afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceTypeId(pub(crate) u16);

impl PieceTypeId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A piece standing on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceInstance {
    pub piece_type: PieceTypeId,
    pub owner: PlayerId,
}

impl PieceInstance {
    pub const fn new(piece_type: PieceTypeId, owner: PlayerId) -> Self {
        PieceInstance { piece_type, owner }
    }

    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == player
    }
}
