//! Players and their facing.
//!
//! A player's facing decides how many quarter turns every movement rule is
//! rotated by before it is walked, which is what makes pawns of opposing
//! sides advance in opposite directions.

use serde::{Deserialize, Serialize};

/// Owner identity of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u8);

/// A player's forward direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    #[default]
    North,
    East,
    South,
    West,
}

pub const ALL_FACINGS: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

impl Facing {
    /// Index in `[North, East, South, West]`, i.e. the number of clockwise
    /// quarter turns applied to rules for this facing.
    pub const fn quarter_turns(self) -> u32 {
        match self {
            Facing::North => 0,
            Facing::East => 1,
            Facing::South => 2,
            Facing::West => 3,
        }
    }
}

/// A participant in a session. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub colour: String,
    #[serde(default)]
    pub facing: Facing,
}

impl Player {
    pub fn new(id: u8, colour: impl Into<String>, facing: Facing) -> Self {
        Player {
            id: PlayerId(id),
            colour: colour.into(),
            facing,
        }
    }
}
