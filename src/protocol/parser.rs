//! Command parser.
//!
//! Parses incoming text commands into structured `Command` variants that the
//! main loop can dispatch on.

use tracing::warn;

use crate::board::{Location, PlayerId};

use super::notation::parse_square;

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Synchronization ping; reply `readyok`.
    IsReady,

    /// Print the board.
    Board,

    /// Print render data for every occupied cell.
    View,

    /// Click a cell through the selection controller.
    Click { square: Location },

    /// Print the highlights for the piece on a cell.
    Moves { square: Location },

    /// Move a piece without consulting the controller.
    Move { from: Location, to: Location },

    /// List every move available to a player.
    Legal { player: PlayerId },

    /// Play a random move for a player.
    Random { player: PlayerId },

    /// Rebuild the session from its setup.
    NewGame,

    /// Terminate the process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (&head, args) = tokens.split_first()?;

    match head {
        "isready" => Some(Command::IsReady),
        "board" => Some(Command::Board),
        "view" => Some(Command::View),
        "newgame" => Some(Command::NewGame),
        "quit" => Some(Command::Quit),

        "click" => square_arg(head, args).map(|square| Command::Click { square }),
        "moves" => square_arg(head, args).map(|square| Command::Moves { square }),
        "move" => parse_move(args),
        "legal" => player_arg(head, args).map(|player| Command::Legal { player }),
        "random" => player_arg(head, args).map(|player| Command::Random { player }),

        other => {
            warn!("unknown command: {}", other);
            None
        }
    }
}

fn square(token: &str) -> Option<Location> {
    match parse_square(token) {
        Ok(loc) => Some(loc),
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

/// Parses `<cmd> <square>`.
fn square_arg(cmd: &str, args: &[&str]) -> Option<Location> {
    match args {
        [token] => square(token),
        _ => {
            warn!("malformed {}: expected '{} <square>'", cmd, cmd);
            None
        }
    }
}

/// Parses `move <from> <to>`.
fn parse_move(args: &[&str]) -> Option<Command> {
    match args {
        [from, to] => Some(Command::Move {
            from: square(from)?,
            to: square(to)?,
        }),
        _ => {
            warn!("malformed move: expected 'move <from> <to>'");
            None
        }
    }
}

/// Parses `<cmd> <player>`.
fn player_arg(cmd: &str, args: &[&str]) -> Option<PlayerId> {
    match args {
        [token] => match token.parse::<u8>() {
            Ok(id) => Some(PlayerId(id)),
            Err(_) => {
                warn!("invalid player id: '{}'", token);
                None
            }
        },
        _ => {
            warn!("malformed {}: expected '{} <player>'", cmd, cmd);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_commands() {
        assert_eq!(parse_command("isready"), Some(Command::IsReady));
        assert_eq!(parse_command("board"), Some(Command::Board));
        assert_eq!(parse_command("view"), Some(Command::View));
        assert_eq!(parse_command("newgame"), Some(Command::NewGame));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
    }

    #[test]
    fn parse_empty_line_returns_none() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("  "), None);
        assert_eq!(parse_command("\t"), None);
    }

    #[test]
    fn parse_unknown_command_returns_none() {
        assert_eq!(parse_command("foobar"), None);
    }

    #[test]
    fn parse_click_and_moves() {
        assert_eq!(
            parse_command("click c3"),
            Some(Command::Click { square: Location::new(2, 2) })
        );
        assert_eq!(
            parse_command("moves a1"),
            Some(Command::Moves { square: Location::new(0, 0) })
        );
    }

    #[test]
    fn parse_square_commands_malformed() {
        assert_eq!(parse_command("click"), None);
        assert_eq!(parse_command("click c3 d4"), None);
        assert_eq!(parse_command("moves 33"), None);
    }

    #[test]
    fn parse_move_command() {
        assert_eq!(
            parse_command("move b1 c3"),
            Some(Command::Move {
                from: Location::new(1, 0),
                to: Location::new(2, 2),
            })
        );
        assert_eq!(parse_command("move b1"), None);
        assert_eq!(parse_command("move b1 ??"), None);
    }

    #[test]
    fn parse_player_commands() {
        assert_eq!(parse_command("legal 0"), Some(Command::Legal { player: PlayerId(0) }));
        assert_eq!(parse_command("random 1"), Some(Command::Random { player: PlayerId(1) }));
        assert_eq!(parse_command("random white"), None);
        assert_eq!(parse_command("legal"), None);
    }

    #[test]
    fn parse_with_leading_trailing_whitespace() {
        assert_eq!(parse_command("  isready  "), Some(Command::IsReady));
        assert_eq!(
            parse_command("\tclick   a2 "),
            Some(Command::Click { square: Location::new(0, 1) })
        );
    }
}
