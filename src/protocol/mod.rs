//! Text protocol handling.
//!
//! Square notation, the command parser for the main loop, and plain-text
//! rendering of boards and highlights.

pub mod display;
pub mod notation;
pub mod parser;

pub use display::{format_board, format_highlights, piece_symbols};
pub use notation::{format_square, format_squares, parse_square, NotationError};
pub use parser::{parse_command, Command};
