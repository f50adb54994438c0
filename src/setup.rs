//! Setup input.
//!
//! Describes a game to start: board size, piece types, initial layout, and
//! players. Setups are read from JSON and validated into a [`Session`];
//! any inconsistency is reported before a board is handed out.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::board::{BoardError, Facing, GridBoard, Location, PieceInstance, Player, PlayerId, Vector};
use crate::catalog::{Catalog, PieceType};
use crate::movegen::{Behaviour, MovementRule, Repeat, StepMode};
use crate::session::Session;

/// Errors that can occur while loading or applying a setup.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("piece type '{0}' is defined more than once")]
    DuplicatePieceType(String),

    #[error("unknown piece type '{0}'")]
    UnknownPieceType(String),

    #[error("player {0} is defined more than once")]
    DuplicatePlayer(u8),

    #[error("unknown player {0}")]
    UnknownPlayer(u8),

    #[error("placement at ({x}, {y}) is outside the board")]
    PlacementOutOfBounds { x: i32, y: i32 },

    #[error("more than one piece placed at ({x}, {y})")]
    OccupiedCell { x: i32, y: i32 },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse setup JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn default_rotations() -> u32 {
    3
}

/// One movement rule as written in a setup file.
///
/// `repeat` of 0 means unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub vectors: Vec<Vector>,
    #[serde(default = "default_rotations")]
    pub rotations: u32,
    #[serde(default)]
    pub repeat: u32,
    #[serde(default)]
    pub mode: StepMode,
}

impl RuleSpec {
    pub fn to_rule(&self) -> MovementRule {
        let repeat = match self.repeat {
            0 => Repeat::Unbounded,
            n => Repeat::Times(n),
        };
        MovementRule::new(self.vectors.clone())
            .with_rotations(self.rotations)
            .with_repeat(repeat)
            .with_mode(self.mode)
    }
}

impl From<&MovementRule> for RuleSpec {
    fn from(rule: &MovementRule) -> Self {
        RuleSpec {
            vectors: rule.vectors.clone(),
            rotations: rule.rotations,
            repeat: match rule.repeat {
                Repeat::Unbounded => 0,
                Repeat::Times(n) => n,
            },
            mode: rule.mode,
        }
    }
}

/// A piece type as written in a setup file.
///
/// Omitted `captures` means the piece captures the way it moves; omitted
/// `render_key` falls back to the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_key: Option<String>,
    pub moves: Vec<RuleSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captures: Option<Vec<RuleSpec>>,
}

impl PieceSpec {
    pub fn to_piece_type(&self) -> PieceType {
        let moves: Vec<MovementRule> = self.moves.iter().map(RuleSpec::to_rule).collect();
        let behaviour = match &self.captures {
            Some(captures) => {
                Behaviour::with_captures(moves, captures.iter().map(RuleSpec::to_rule).collect())
            }
            None => Behaviour::new(moves),
        };
        let render_key = self.render_key.clone().unwrap_or_else(|| self.name.clone());
        PieceType::new(self.name.clone(), behaviour, render_key)
    }
}

impl From<&PieceType> for PieceSpec {
    fn from(t: &PieceType) -> Self {
        let moves: Vec<RuleSpec> = t.behaviour.moves.iter().map(RuleSpec::from).collect();
        let captures: Vec<RuleSpec> = t.behaviour.captures.iter().map(RuleSpec::from).collect();
        PieceSpec {
            name: t.name.clone(),
            render_key: (t.render_key != t.name).then(|| t.render_key.clone()),
            captures: (captures != moves).then_some(captures),
            moves,
        }
    }
}

/// An initial piece placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub piece: String,
    pub owner: PlayerId,
}

/// A complete game setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupConfig {
    pub width: i32,
    pub height: i32,
    pub pieces: Vec<PieceSpec>,
    #[serde(default)]
    pub layout: Vec<Placement>,
    pub players: Vec<Player>,
}

impl SetupConfig {
    /// The standard 6x6 game: white facing north on ranks 1-2, black facing
    /// south on ranks 5-6.
    pub fn standard() -> Self {
        const BACK_RANK: [&str; 6] = ["rook", "knight", "queen", "king", "knight", "rook"];

        let catalog = Catalog::standard();
        let pieces = catalog.iter().map(|(_, t)| PieceSpec::from(t)).collect();

        let mut layout = Vec::new();
        for (owner, back, front) in [(0u8, 0, 1), (1u8, 5, 4)] {
            for (x, name) in BACK_RANK.iter().enumerate() {
                layout.push(Placement {
                    x: x as i32,
                    y: back,
                    piece: name.to_string(),
                    owner: PlayerId(owner),
                });
            }
            for x in 0..6 {
                layout.push(Placement {
                    x,
                    y: front,
                    piece: "pawn".to_string(),
                    owner: PlayerId(owner),
                });
            }
        }

        SetupConfig {
            width: 6,
            height: 6,
            pieces,
            layout,
            players: vec![
                Player::new(0, "white", Facing::North),
                Player::new(1, "black", Facing::South),
            ],
        }
    }

    /// Validates the setup and builds a fresh session from it.
    pub fn build(&self) -> Result<Session, SetupError> {
        let mut board = GridBoard::new(self.width, self.height)?;

        let mut catalog = Catalog::new();
        for spec in &self.pieces {
            if catalog.id_of(&spec.name).is_some() {
                return Err(SetupError::DuplicatePieceType(spec.name.clone()));
            }
            catalog.register(spec.to_piece_type());
        }

        if catalog.is_empty() {
            warn!("setup defines no piece types");
        }

        let mut players: Vec<Player> = Vec::with_capacity(self.players.len());
        for player in &self.players {
            if players.iter().any(|p| p.id == player.id) {
                return Err(SetupError::DuplicatePlayer(player.id.0));
            }
            players.push(player.clone());
        }

        for placement in &self.layout {
            let piece_type = catalog
                .id_of(&placement.piece)
                .ok_or_else(|| SetupError::UnknownPieceType(placement.piece.clone()))?;
            if !players.iter().any(|p| p.id == placement.owner) {
                return Err(SetupError::UnknownPlayer(placement.owner.0));
            }
            let loc = Location::new(placement.x, placement.y);
            if !board.contains(loc) {
                return Err(SetupError::PlacementOutOfBounds { x: loc.x, y: loc.y });
            }
            if board.at(loc).is_some() {
                return Err(SetupError::OccupiedCell { x: loc.x, y: loc.y });
            }
            board.place(loc, PieceInstance::new(piece_type, placement.owner))?;
        }

        debug!(
            width = self.width,
            height = self.height,
            piece_types = catalog.len(),
            pieces = self.layout.len(),
            players = players.len(),
            "built session from setup"
        );

        Ok(Session::new(board, catalog, players))
    }
}

/// Loads a setup from a JSON file at the given path.
pub fn load_setup(path: &Path) -> Result<SetupConfig, SetupError> {
    let data = fs::read_to_string(path).map_err(|source| SetupError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_setup_from_str(&data)
}

/// Loads a setup from a JSON string.
pub fn load_setup_from_str(json: &str) -> Result<SetupConfig, SetupError> {
    Ok(serde_json::from_str(json)?)
}
