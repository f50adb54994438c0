//! Plain-text rendering of a session.
//!
//! The top row is the highest rank, files run left to right, and both are
//! labelled on every side. Pieces are drawn as letters (uppercase for
//! player 0), movable cells as `*`, and capturable cells as `x`.

use crate::board::{Location, PlayerId};
use crate::catalog::Catalog;
use crate::movegen::HighlightGrid;
use crate::session::Session;

use super::notation::{file_char, format_squares};

/// Assigns each piece type a distinct letter, taken from its name where
/// possible: the first letter not already in use.
pub fn piece_symbols(catalog: &Catalog) -> Vec<char> {
    let mut used: Vec<char> = Vec::with_capacity(catalog.len());
    for (_, piece_type) in catalog.iter() {
        let symbol = piece_type
            .name
            .chars()
            .map(|c| c.to_ascii_lowercase())
            .filter(|c| c.is_ascii_lowercase())
            .chain('a'..='z')
            .find(|c| !used.contains(c))
            .unwrap_or('?');
        used.push(symbol);
    }
    used
}

fn file_labels(width: i32) -> String {
    (0..width)
        .map(|x| file_char(x).unwrap_or('?').to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Draws the board, optionally overlaid with highlights.
pub fn format_board(session: &Session, highlights: Option<&HighlightGrid>) -> String {
    let board = session.board();
    let symbols = piece_symbols(session.catalog());
    let labels = file_labels(board.width());

    let mut out = String::new();
    out.push_str(&format!("    {}\n", labels));
    for y in (0..board.height()).rev() {
        let row: Vec<String> = (0..board.width())
            .map(|x| {
                let loc = Location::new(x, y);
                let h = highlights.map(|g| g.get(loc)).unwrap_or_default();
                let c = match board.at(loc) {
                    Some(_) if h.capturable => 'x',
                    Some(piece) => {
                        let c = symbols[piece.piece_type.index()];
                        if piece.owner == PlayerId(0) {
                            c.to_ascii_uppercase()
                        } else {
                            c
                        }
                    }
                    None if h.movable => '*',
                    None => '.',
                };
                c.to_string()
            })
            .collect();
        out.push_str(&format!("{:>3} {} {}\n", y + 1, row.join(" "), y + 1));
    }
    out.push_str(&format!("    {}\n", labels));
    out
}

/// One-line summary of a highlight grid.
pub fn format_highlights(grid: &HighlightGrid) -> String {
    format!(
        "movable {} capturable {}",
        format_squares(&grid.movable()),
        format_squares(&grid.capturable())
    )
}
