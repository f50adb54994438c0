//! Declarative movement rules and the ray walker.
//!
//! A rule is a sequence of step vectors walked cumulatively from an origin,
//! optionally repeated, and evaluated once per rotated variant. Rook rays,
//! knight leaps, and player-oriented pawn steps are all instances of the
//! same walk.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::board::{GridBoard, Location, Player, PlayerId, Vector};

/// How a rule treats intervening pieces.
///
/// Both modes stop a ray at the first occupied cell; the mode is carried as
/// metadata for rule authors and does not change the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepMode {
    Jump,
    #[default]
    Slide,
}

/// How many times the full vector sequence may be walked within one ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repeat {
    Times(u32),
    /// Keep walking until the ray leaves the board or is blocked.
    Unbounded,
}

impl Repeat {
    /// Upper bound on repetitions for a ray on `board`.
    ///
    /// A sequence with nonzero net displacement leaves a board of side
    /// `max(width, height)` within that many repetitions, and one that
    /// returns to its start only revisits cells after the first, so capping
    /// at the side never changes the destinations.
    fn limit(self, board: &GridBoard) -> u32 {
        let side = board.width().max(board.height()) as u32;
        match self {
            Repeat::Times(n) => n.min(side),
            Repeat::Unbounded => side,
        }
    }
}

/// One declarative movement rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementRule {
    /// Steps applied in order, cumulatively, for each repetition.
    pub vectors: Vec<Vector>,
    /// Number of extra clockwise variants; `rotations + 1` variants are walked.
    pub rotations: u32,
    pub repeat: Repeat,
    pub mode: StepMode,
}

impl MovementRule {
    /// A sliding rule walked in all four quarter-turn orientations until
    /// blocked, the default shape of a rule.
    pub fn new(vectors: Vec<Vector>) -> Self {
        MovementRule {
            vectors,
            rotations: 3,
            repeat: Repeat::Unbounded,
            mode: StepMode::Slide,
        }
    }

    /// Shorthand for a single-vector rule.
    pub fn step(dx: i32, dy: i32) -> Self {
        Self::new(vec![Vector::new(dx, dy)])
    }

    pub fn with_rotations(mut self, rotations: u32) -> Self {
        self.rotations = rotations;
        self
    }

    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Walk the sequence exactly once per variant.
    pub fn once(self) -> Self {
        self.with_repeat(Repeat::Times(1))
    }

    pub fn with_mode(mut self, mode: StepMode) -> Self {
        self.mode = mode;
        self
    }

    /// Expands the rule into the set of destinations reachable from `origin`.
    ///
    /// Every vector is first turned by the player's facing, then each
    /// variant adds one more clockwise turn. In move mode empty cells are
    /// recorded and any occupant ends the ray. In capture mode empty cells are
    /// passed over, the first enemy piece is recorded, and any occupant ends
    /// the ray. Leaving the board ends the ray silently.
    pub fn expand(
        &self,
        origin: Location,
        board: &GridBoard,
        player: &Player,
        capture: bool,
    ) -> BTreeSet<Location> {
        let mut found = BTreeSet::new();
        if self.vectors.is_empty() {
            return found;
        }

        let base_turns = player.facing.quarter_turns();
        let limit = self.repeat.limit(board);

        for variant in 0..=self.rotations {
            let steps: Vec<Vector> = self
                .vectors
                .iter()
                .map(|v| v.rotated(base_turns + variant))
                .collect();
            walk_ray(origin, &steps, limit, board, player.id, capture, &mut found);
        }

        found
    }
}

/// Walks one ray, recording destinations into `found`.
fn walk_ray(
    origin: Location,
    steps: &[Vector],
    limit: u32,
    board: &GridBoard,
    mover: PlayerId,
    capture: bool,
    found: &mut BTreeSet<Location>,
) {
    let mut cursor = origin;
    for _ in 0..limit {
        for &step in steps {
            cursor = match cursor.offset(step) {
                Some(next) if board.contains(next) => next,
                _ => return,
            };
            match (board.at(cursor), capture) {
                (None, false) => {
                    found.insert(cursor);
                }
                (None, true) => {}
                (Some(_), false) => return,
                (Some(occupant), true) => {
                    if !occupant.is_owned_by(mover) {
                        found.insert(cursor);
                    }
                    return;
                }
            }
        }
    }
}
