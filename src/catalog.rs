//! Piece-type registry.
//!
//! Maps piece-type handles to their behaviour and render key. Names are only
//! consulted while building a catalog from setup data; queries go through
//! [`PieceTypeId`] handles.

use crate::board::{GridBoard, Location, PieceTypeId, Player};
use crate::movegen::{Behaviour, HighlightGrid, MovementRule, Repeat};

/// A registered kind of piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceType {
    pub name: String,
    pub behaviour: Behaviour,
    /// Opaque key handed to the renderer, e.g. an image base name.
    pub render_key: String,
}

impl PieceType {
    pub fn new(name: impl Into<String>, behaviour: Behaviour, render_key: impl Into<String>) -> Self {
        PieceType {
            name: name.into(),
            behaviour,
            render_key: render_key.into(),
        }
    }
}

/// Immutable-after-setup collection of piece types.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    types: Vec<PieceType>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a piece type and returns its handle.
    pub fn register(&mut self, piece_type: PieceType) -> PieceTypeId {
        let id = PieceTypeId(self.types.len() as u16);
        self.types.push(piece_type);
        id
    }

    /// Resolves a name to a handle. Only meant for setup.
    pub fn id_of(&self, name: &str) -> Option<PieceTypeId> {
        self.types
            .iter()
            .position(|t| t.name == name)
            .map(|i| PieceTypeId(i as u16))
    }

    /// Returns the piece type behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not issued by this catalog.
    pub fn get(&self, id: PieceTypeId) -> &PieceType {
        &self.types[id.index()]
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PieceTypeId, &PieceType)> {
        self.types
            .iter()
            .enumerate()
            .map(|(i, t)| (PieceTypeId(i as u16), t))
    }

    /// Computes the highlight grid for a piece of type `id` at `origin`.
    pub fn moves(
        &self,
        id: PieceTypeId,
        board: &GridBoard,
        origin: Location,
        player: &Player,
    ) -> HighlightGrid {
        self.get(id).behaviour.resolve(board, origin, player)
    }

    /// The six orthodox pieces, expressed as rules.
    pub fn standard() -> Self {
        let mut catalog = Catalog::new();
        let king_step = |dx, dy| MovementRule::step(dx, dy).with_repeat(Repeat::Times(1));

        catalog.register(PieceType::new(
            "rook",
            Behaviour::new(vec![MovementRule::step(1, 0)]),
            "rook",
        ));
        catalog.register(PieceType::new(
            "bishop",
            Behaviour::new(vec![MovementRule::step(1, 1)]),
            "bishop",
        ));
        catalog.register(PieceType::new(
            "queen",
            Behaviour::new(vec![MovementRule::step(1, 1), MovementRule::step(1, 0)]),
            "queen",
        ));
        catalog.register(PieceType::new(
            "king",
            Behaviour::new(vec![king_step(1, 1), king_step(1, 0)]),
            "king",
        ));
        catalog.register(PieceType::new(
            "knight",
            Behaviour::new(vec![king_step(2, 1), king_step(1, 2)]),
            "knight",
        ));
        catalog.register(PieceType::new(
            "pawn",
            Behaviour::with_captures(
                vec![MovementRule::step(0, 1).with_rotations(0).once()],
                vec![MovementRule::step(-1, 1).with_rotations(1).once()],
            ),
            "pawn",
        ));

        catalog
    }
}
