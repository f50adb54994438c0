//! Integration tests for the piecewalk binary.
//!
//! Spawns the engine process, sends commands via stdin, and verifies
//! stdout responses.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Sends a sequence of commands to the engine and collects stdout lines.
fn run_engine_with(args: &[&str], commands: &[&str]) -> (Vec<String>, bool) {
    let exe = env!("CARGO_BIN_EXE_piecewalk");
    let mut child = Command::new(exe)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start piecewalk");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        // The process may already have exited on a setup error.
        let _ = writeln!(stdin, "{}", cmd);
    }
    let _ = stdin.flush();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    (lines, status.success())
}

fn run_engine(commands: &[&str]) -> Vec<String> {
    let (lines, ok) = run_engine_with(&["--seed", "7"], commands);
    assert!(ok);
    lines
}

#[test]
fn isready_response() {
    let lines = run_engine(&["isready", "quit"]);
    assert_eq!(lines, vec!["readyok".to_string()]);
}

#[test]
fn unknown_and_malformed_commands_are_ignored() {
    let lines = run_engine(&["foobar", "click", "move a1", "random white", "", "isready", "quit"]);
    assert_eq!(lines, vec!["readyok".to_string()]);
}

#[test]
fn board_shows_standard_layout() {
    let lines = run_engine(&["board", "quit"]);
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "    a b c d e f");
    assert_eq!(lines[1], "  6 r n q k n r 6");
    assert_eq!(lines[6], "  1 R N Q K N R 1");
}

#[test]
fn moves_for_knight_and_pawns() {
    let lines = run_engine(&["moves b1", "moves c2", "moves c5", "quit"]);
    assert_eq!(lines[0], "moves b1 movable a3,c3 capturable -");
    assert_eq!(lines[1], "moves c2 movable c3 capturable -");
    assert_eq!(lines[2], "moves c5 movable c4 capturable -");
}

#[test]
fn moves_on_empty_square_is_an_error() {
    let lines = run_engine(&["moves c3", "quit"]);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("error "), "got: {}", lines[0]);
}

#[test]
fn click_select_then_move() {
    let lines = run_engine(&["click b1", "click c3", "moves c3", "quit"]);
    assert_eq!(lines[0], "selected b1 movable a3,c3 capturable -");
    assert_eq!(lines[1], "moved b1 c3");
    assert!(lines[2].starts_with("moves c3 "));
}

#[test]
fn click_empty_square_clears_selection() {
    let lines = run_engine(&["click d4", "click b1", "click d4", "click d3", "quit"]);
    assert_eq!(lines[0], "ignored");
    assert!(lines[1].starts_with("selected b1"));
    assert_eq!(lines[2], "cleared");
    assert_eq!(lines[3], "ignored");
}

#[test]
fn pawn_capture_through_moves() {
    let lines = run_engine(&[
        "move c2 c3",
        "move d5 d4",
        "moves c3",
        "click c3",
        "click d4",
        "quit",
    ]);
    assert_eq!(lines[0], "moved c2 c3");
    assert_eq!(lines[1], "moved d5 d4");
    assert_eq!(lines[2], "moves c3 movable c4 capturable d4");
    assert_eq!(lines[4], "moved c3 d4 capture");
}

#[test]
fn move_from_empty_square_is_an_error() {
    let lines = run_engine(&["move c3 c4", "board", "quit"]);
    assert!(lines[0].starts_with("error "));
    // Board is unchanged.
    assert_eq!(lines[5], "  3 . . . . . . 3");
}

#[test]
fn legal_lists_opening_moves() {
    let lines = run_engine(&["legal 0", "legal 9", "quit"]);
    assert!(lines[0].starts_with("legal 10 "), "got: {}", lines[0]);
    assert!(lines[0].contains("b1-a3"));
    assert!(lines[1].starts_with("error "));
}

#[test]
fn random_plays_a_legal_move() {
    let lines = run_engine(&["random 1", "quit"]);
    assert!(lines[0].starts_with("moved "), "got: {}", lines[0]);
}

#[test]
fn newgame_restores_layout() {
    let lines = run_engine(&["move b1 c3", "newgame", "moves b1", "quit"]);
    assert_eq!(lines[1], "newgame");
    assert_eq!(lines[2], "moves b1 movable a3,c3 capturable -");
}

#[test]
fn view_lists_render_keys() {
    let lines = run_engine(&["view", "quit"]);
    assert_eq!(lines.len(), 25);
    assert_eq!(lines[0], "piece a1 0 rook rook-line");
    assert!(lines.contains(&"piece d6 1 king king-fill".to_string()));
    assert_eq!(lines[24], "viewok");
}

#[test]
fn custom_setup_file() {
    let path = std::env::temp_dir().join(format!("piecewalk-setup-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{
            "width": 3, "height": 3,
            "pieces": [{"name": "wazir", "moves": [{"vectors": [[0, 1]], "repeat": 1}]}],
            "layout": [{"x": 1, "y": 1, "piece": "wazir", "owner": 0}],
            "players": [{"id": 0, "colour": "white"}]
        }"#,
    )
    .unwrap();

    let (lines, ok) = run_engine_with(&["--setup", path.to_str().unwrap()], &["moves b2", "quit"]);
    std::fs::remove_file(&path).ok();
    assert!(ok);
    assert_eq!(lines, vec!["moves b2 movable b1,a2,c2,b3 capturable -".to_string()]);
}

#[test]
fn invalid_setup_fails_at_startup() {
    let path = std::env::temp_dir().join(format!("piecewalk-bad-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{"width": 0, "height": 3, "pieces": [], "players": []}"#,
    )
    .unwrap();

    let (lines, ok) = run_engine_with(&["--setup", path.to_str().unwrap()], &["isready"]);
    std::fs::remove_file(&path).ok();
    assert!(!ok);
    assert!(lines.is_empty());
}

#[test]
fn eof_exits_cleanly() {
    let lines = run_engine(&["isready"]);
    assert_eq!(lines, vec!["readyok".to_string()]);
}
