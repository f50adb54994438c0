//! Occupancy grid.
//!
//! Holds at most one piece instance per cell. Pure data: the grid knows
//! nothing about movement rules, and mutations perform no legality checks.

use super::geometry::Location;
use super::piece::PieceInstance;

/// Errors raised by board construction and mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board dimensions must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("board of {width}x{height} cells is too large")]
    TooLarge { width: i32, height: i32 },

    #[error("location ({x}, {y}) is outside the board")]
    OutOfBounds { x: i32, y: i32 },

    #[error("no piece at ({x}, {y}) to move")]
    EmptySource { x: i32, y: i32 },
}

impl BoardError {
    fn out_of_bounds(loc: Location) -> Self {
        BoardError::OutOfBounds { x: loc.x, y: loc.y }
    }
}

/// A fixed-size rectangular board.
///
/// Cells are stored row-major: index `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridBoard {
    width: i32,
    height: i32,
    cells: Vec<Option<PieceInstance>>,
}

impl GridBoard {
    /// Creates an empty board.
    ///
    /// Fails if either dimension is below 1, or if the cell count does not
    /// fit in an `i32`.
    pub fn new(width: i32, height: i32) -> Result<Self, BoardError> {
        if width < 1 || height < 1 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        let cells = width
            .checked_mul(height)
            .ok_or(BoardError::TooLarge { width, height })?;
        Ok(GridBoard {
            width,
            height,
            cells: vec![None; cells as usize],
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, loc: Location) -> bool {
        loc.x >= 0 && loc.x < self.width && loc.y >= 0 && loc.y < self.height
    }

    fn index(&self, loc: Location) -> Option<usize> {
        self.contains(loc)
            .then(|| loc.y as usize * self.width as usize + loc.x as usize)
    }

    /// Returns the occupant of a cell. Off-board locations are empty.
    pub fn at(&self, loc: Location) -> Option<PieceInstance> {
        self.index(loc).and_then(|i| self.cells[i])
    }

    /// Puts a piece on a cell, replacing any occupant.
    pub fn place(&mut self, loc: Location, piece: PieceInstance) -> Result<(), BoardError> {
        let idx = self.index(loc).ok_or_else(|| BoardError::out_of_bounds(loc))?;
        self.cells[idx] = Some(piece);
        Ok(())
    }

    /// Clears a cell, returning its former occupant.
    pub fn remove(&mut self, loc: Location) -> Result<Option<PieceInstance>, BoardError> {
        let idx = self.index(loc).ok_or_else(|| BoardError::out_of_bounds(loc))?;
        Ok(self.cells[idx].take())
    }

    /// Moves the piece at `from` onto `to`, replacing whatever stood there.
    ///
    /// Returns the replaced piece, if any. The board is left untouched when
    /// either location is off the board or `from` is empty.
    pub fn move_instance(
        &mut self,
        from: Location,
        to: Location,
    ) -> Result<Option<PieceInstance>, BoardError> {
        let from_idx = self.index(from).ok_or_else(|| BoardError::out_of_bounds(from))?;
        let to_idx = self.index(to).ok_or_else(|| BoardError::out_of_bounds(to))?;
        let piece = self.cells[from_idx].ok_or(BoardError::EmptySource {
            x: from.x,
            y: from.y,
        })?;
        if from_idx == to_idx {
            return Ok(None);
        }
        let replaced = self.cells[to_idx].replace(piece);
        self.cells[from_idx] = None;
        Ok(replaced)
    }

    /// Iterates over occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Location, PieceInstance)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            let i = i as i32;
            cell.map(|p| (Location::new(i % self.width, i / self.width), p))
        })
    }
}
