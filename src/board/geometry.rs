//! Grid geometry primitives.
//!
//! Integer vectors, board locations, and the quarter-turn rotation that
//! every movement rule is built on. All of these are plain value types:
//! rotating or translating always produces a new value.

use serde::{Deserialize, Serialize};

/// A 2D integer step, `(dx, dy)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Vector {
    pub dx: i32,
    pub dy: i32,
}

impl Vector {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Vector { dx, dy }
    }

    /// Rotates a quarter turn clockwise: `(x, y) -> (y, -x)`.
    ///
    /// `i32::MIN` saturates to `i32::MAX`; either component is wider than
    /// any board, so a step using it leaves the board regardless.
    pub const fn rotate_clockwise(self) -> Self {
        Vector {
            dx: self.dy,
            dy: self.dx.saturating_neg(),
        }
    }

    /// Applies `turns` clockwise quarter turns.
    pub fn rotated(self, turns: u32) -> Self {
        (0..turns % 4).fold(self, |v, _| v.rotate_clockwise())
    }
}

impl From<(i32, i32)> for Vector {
    fn from((dx, dy): (i32, i32)) -> Self {
        Vector { dx, dy }
    }
}

impl From<Vector> for (i32, i32) {
    fn from(v: Vector) -> Self {
        (v.dx, v.dy)
    }
}

/// A cell coordinate, 0-indexed. May lie off the board while a ray is
/// being walked; the board decides whether it is in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

impl Location {
    pub const fn new(x: i32, y: i32) -> Self {
        Location { x, y }
    }

    /// Steps by `v`, or `None` if a coordinate would overflow `i32`.
    pub fn offset(self, v: Vector) -> Option<Location> {
        Some(Location::new(
            self.x.checked_add(v.dx)?,
            self.y.checked_add(v.dy)?,
        ))
    }
}
