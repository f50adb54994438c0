//! Algebraic square notation.
//!
//! Files are lowercase letters starting at `a` for x = 0, ranks are numbers
//! starting at `1` for y = 0: `c3` is (2, 2).

use crate::board::Location;

/// Errors that can occur while parsing a square.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("empty square")]
    Empty,

    #[error("invalid file in square '{0}'")]
    InvalidFile(String),

    #[error("invalid rank in square '{0}'")]
    InvalidRank(String),
}

/// Letter for a file index, if it has one.
pub fn file_char(x: i32) -> Option<char> {
    u8::try_from(x)
        .ok()
        .filter(|x| *x < 26)
        .map(|x| (b'a' + x) as char)
}

/// Parses a square like `c3`.
pub fn parse_square(s: &str) -> Result<Location, NotationError> {
    let mut chars = s.chars();
    let file = chars.next().ok_or(NotationError::Empty)?;
    if !file.is_ascii_lowercase() {
        return Err(NotationError::InvalidFile(s.to_string()));
    }
    let rank: i32 = chars
        .as_str()
        .parse()
        .map_err(|_| NotationError::InvalidRank(s.to_string()))?;
    if rank < 1 {
        return Err(NotationError::InvalidRank(s.to_string()));
    }
    Ok(Location::new((file as u8 - b'a') as i32, rank - 1))
}

/// Formats a location as a square. Falls back to `(x,y)` when the file has
/// no letter.
pub fn format_square(loc: Location) -> String {
    match (file_char(loc.x), loc.y >= 0) {
        (Some(f), true) => format!("{}{}", f, loc.y + 1),
        _ => format!("({},{})", loc.x, loc.y),
    }
}

/// Formats a list of squares separated by commas, or `-` when empty.
pub fn format_squares(locs: &[Location]) -> String {
    if locs.is_empty() {
        return "-".to_string();
    }
    locs.iter().map(|l| format_square(*l)).collect::<Vec<_>>().join(",")
}
