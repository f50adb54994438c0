//! Board representation.
//!
//! Contains the geometry primitives, players, piece instances, and the
//! occupancy grid. Nothing in here knows how pieces move.

pub mod geometry;
pub mod grid;
pub mod piece;
pub mod player;

pub use geometry::{Location, Vector};
pub use grid::{BoardError, GridBoard};
pub use piece::{PieceInstance, PieceTypeId};
pub use player::{Facing, Player, PlayerId, ALL_FACINGS};
