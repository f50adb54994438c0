//! Session state.
//!
//! A session owns the one mutable board together with the immutable catalog
//! and player registry. It is constructed by the entry point and passed to
//! whatever needs it; there is no global game instance.

use tracing::debug;

use crate::board::{BoardError, GridBoard, Location, PieceInstance, Player, PlayerId};
use crate::catalog::Catalog;
use crate::movegen::{self, HighlightGrid, Move};

/// Errors from session queries and commands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("no piece at ({x}, {y})")]
    EmptyOrigin { x: i32, y: i32 },

    #[error("unknown player {0}")]
    UnknownPlayer(u8),
}

/// Image variant for a piece: outlined for the first player, filled otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderVariant {
    Line,
    Fill,
}

impl RenderVariant {
    pub fn for_owner(owner: PlayerId) -> Self {
        if owner == PlayerId(0) {
            RenderVariant::Line
        } else {
            RenderVariant::Fill
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            RenderVariant::Line => "line",
            RenderVariant::Fill => "fill",
        }
    }
}

/// What a renderer needs to draw one occupied cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPiece {
    pub location: Location,
    pub name: String,
    pub render_key: String,
    pub owner: PlayerId,
    pub variant: RenderVariant,
}

/// A running game: board, catalog, and players.
#[derive(Debug, Clone)]
pub struct Session {
    board: GridBoard,
    catalog: Catalog,
    players: Vec<Player>,
}

impl Session {
    pub fn new(board: GridBoard, catalog: Catalog, players: Vec<Player>) -> Self {
        Session {
            board,
            catalog,
            players,
        }
    }

    pub fn board(&self) -> &GridBoard {
        &self.board
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    fn occupant(&self, origin: Location) -> Result<PieceInstance, SessionError> {
        self.board.at(origin).ok_or(SessionError::EmptyOrigin {
            x: origin.x,
            y: origin.y,
        })
    }

    /// Highlights for the piece at `origin`, acting as `player`.
    ///
    /// Read-only: calling it twice on an unchanged board yields equal grids.
    pub fn compute_highlights(
        &self,
        origin: Location,
        player: &Player,
    ) -> Result<HighlightGrid, SessionError> {
        let piece = self.occupant(origin)?;
        Ok(self.catalog.moves(piece.piece_type, &self.board, origin, player))
    }

    /// Highlights for the piece at `origin`, acting as its owner.
    pub fn highlights_for(&self, origin: Location) -> Result<HighlightGrid, SessionError> {
        let piece = self.occupant(origin)?;
        let player = self
            .player(piece.owner)
            .ok_or(SessionError::UnknownPlayer(piece.owner.0))?;
        self.compute_highlights(origin, player)
    }

    /// Moves a piece without re-checking legality; the caller is expected to
    /// have consulted [`Session::compute_highlights`] first.
    ///
    /// Returns the captured piece, if any. Fails without touching the board
    /// when `from` is empty.
    pub fn move_piece(
        &mut self,
        from: Location,
        to: Location,
    ) -> Result<Option<PieceInstance>, SessionError> {
        let captured = self.board.move_instance(from, to)?;
        debug!(?from, ?to, captured = captured.is_some(), "moved piece");
        Ok(captured)
    }

    /// Every move available to a player.
    pub fn legal_moves(&self, player: PlayerId) -> Result<Vec<Move>, SessionError> {
        let player = self.player(player).ok_or(SessionError::UnknownPlayer(player.0))?;
        Ok(movegen::legal_moves(&self.catalog, &self.board, player))
    }

    /// Picks and plays a random move for `player`. Returns the move played,
    /// or `None` when the player has no moves.
    pub fn play_random(
        &mut self,
        player: PlayerId,
        rng: &mut impl rand::Rng,
    ) -> Result<Option<Move>, SessionError> {
        let actor = self.player(player).ok_or(SessionError::UnknownPlayer(player.0))?;
        let chosen = movegen::random_move(&self.catalog, &self.board, actor, rng);
        if let Some(mv) = chosen {
            self.move_piece(mv.from, mv.to)?;
        }
        Ok(chosen)
    }

    /// Structured render data for every occupied cell, row-major.
    pub fn render_view(&self) -> Vec<RenderedPiece> {
        self.board
            .pieces()
            .map(|(location, piece)| {
                let piece_type = self.catalog.get(piece.piece_type);
                RenderedPiece {
                    location,
                    name: piece_type.name.clone(),
                    render_key: piece_type.render_key.clone(),
                    owner: piece.owner,
                    variant: RenderVariant::for_owner(piece.owner),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Facing;

    fn session() -> Session {
        let catalog = Catalog::standard();
        let rook = catalog.id_of("rook").unwrap();
        let mut board = GridBoard::new(6, 6).unwrap();
        board.place(Location::new(2, 2), PieceInstance::new(rook, PlayerId(0))).unwrap();
        board.place(Location::new(4, 2), PieceInstance::new(rook, PlayerId(1))).unwrap();
        Session::new(
            board,
            catalog,
            vec![
                Player::new(0, "white", Facing::North),
                Player::new(1, "black", Facing::South),
            ],
        )
    }

    #[test]
    fn compute_highlights_requires_a_piece() {
        let s = session();
        let white = s.player(PlayerId(0)).unwrap().clone();
        assert_eq!(
            s.compute_highlights(Location::new(0, 0), &white),
            Err(SessionError::EmptyOrigin { x: 0, y: 0 })
        );
    }

    #[test]
    fn highlights_for_uses_owner() {
        let s = session();
        let grid = s.highlights_for(Location::new(4, 2)).unwrap();
        assert!(grid.get(Location::new(2, 2)).capturable);
        assert!(grid.get(Location::new(3, 2)).movable);
    }

    #[test]
    fn query_is_idempotent() {
        let s = session();
        let a = s.highlights_for(Location::new(2, 2)).unwrap();
        let b = s.highlights_for(Location::new(2, 2)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn move_piece_captures() {
        let mut s = session();
        let captured = s.move_piece(Location::new(2, 2), Location::new(4, 2)).unwrap();
        assert_eq!(captured.map(|p| p.owner), Some(PlayerId(1)));
        assert_eq!(s.board().pieces().count(), 1);
    }

    #[test]
    fn move_piece_from_empty_is_an_error() {
        let mut s = session();
        let before = s.board().clone();
        let err = s.move_piece(Location::new(0, 0), Location::new(1, 1)).unwrap_err();
        assert_eq!(err, SessionError::Board(BoardError::EmptySource { x: 0, y: 0 }));
        assert_eq!(s.board(), &before);
    }

    #[test]
    fn unknown_player_is_reported() {
        let s = session();
        assert_eq!(s.legal_moves(PlayerId(5)), Err(SessionError::UnknownPlayer(5)));
    }

    #[test]
    fn render_view_lists_variants() {
        let s = session();
        let view = s.render_view();
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].render_key, "rook");
        assert_eq!(view[0].variant, RenderVariant::Line);
        assert_eq!(view[1].variant.as_str(), "fill");
    }
}
