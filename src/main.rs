//! Piecewalk -- an interactive move-generation engine for chess-like pieces.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! Diagnostics go to stderr through `tracing`, filtered by `RUST_LOG`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use piecewalk::controller::{ClickOutcome, Controller};
use piecewalk::protocol::{format_board, format_highlights, format_square, parse_command, Command};
use piecewalk::session::Session;
use piecewalk::setup::{load_setup, SetupConfig, SetupError};

#[derive(Parser)]
#[command(name = "piecewalk")]
#[command(about = "Interactive move generation for chess-like pieces")]
struct Args {
    /// JSON setup file; the standard 6x6 game is used when omitted
    #[arg(short, long)]
    setup: Option<PathBuf>,

    /// Seed for random moves, 0 for entropy
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn load_config(args: &Args) -> Result<SetupConfig, SetupError> {
    match &args.setup {
        Some(path) => load_setup(path),
        None => Ok(SetupConfig::standard()),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let (config, mut session) = match load_config(&args).and_then(|c| c.build().map(|s| (c, s))) {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("setup failed: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        width = session.board().width(),
        height = session.board().height(),
        "session ready"
    );

    let mut rng = if args.seed == 0 {
        SmallRng::from_entropy()
    } else {
        SmallRng::seed_from_u64(args.seed)
    };
    let mut controller = Controller::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        if cmd == Command::Quit {
            break;
        }
        if cmd == Command::NewGame {
            match config.build() {
                Ok(fresh) => {
                    session = fresh;
                    controller.reset();
                    writeln!(out, "newgame").ok();
                }
                Err(e) => {
                    writeln!(out, "error {}", e).ok();
                }
            }
        } else {
            handle(&cmd, &mut session, &mut controller, &mut rng, &mut out);
        }
        out.flush().ok();
    }
}

/// Executes one command against the session, writing its response.
fn handle<W: Write>(
    cmd: &Command,
    session: &mut Session,
    controller: &mut Controller,
    rng: &mut SmallRng,
    out: &mut W,
) {
    let result = match *cmd {
        Command::IsReady => writeln!(out, "readyok"),
        Command::Board => write!(out, "{}", format_board(session, None)),
        Command::View => {
            let mut r = Ok(());
            for piece in session.render_view() {
                r = r.and(writeln!(
                    out,
                    "piece {} {} {} {}-{}",
                    format_square(piece.location),
                    piece.owner.0,
                    piece.name,
                    piece.render_key,
                    piece.variant.as_str()
                ));
            }
            r.and(writeln!(out, "viewok"))
        }
        Command::Click { square } => match controller.click(session, square) {
            Ok(ClickOutcome::Selected { origin, highlights }) => writeln!(
                out,
                "selected {} {}",
                format_square(origin),
                format_highlights(&highlights)
            ),
            Ok(ClickOutcome::Moved { from, to, captured }) => writeln!(
                out,
                "moved {} {}{}",
                format_square(from),
                format_square(to),
                if captured { " capture" } else { "" }
            ),
            Ok(ClickOutcome::Cleared) => writeln!(out, "cleared"),
            Ok(ClickOutcome::Ignored) => writeln!(out, "ignored"),
            Err(e) => writeln!(out, "error {}", e),
        },
        Command::Moves { square } => match session.highlights_for(square) {
            Ok(grid) => writeln!(
                out,
                "moves {} {}",
                format_square(square),
                format_highlights(&grid)
            ),
            Err(e) => writeln!(out, "error {}", e),
        },
        Command::Move { from, to } => match session.move_piece(from, to) {
            Ok(captured) => {
                controller.reset();
                writeln!(
                    out,
                    "moved {} {}{}",
                    format_square(from),
                    format_square(to),
                    if captured.is_some() { " capture" } else { "" }
                )
            }
            Err(e) => writeln!(out, "error {}", e),
        },
        Command::Legal { player } => match session.legal_moves(player) {
            Ok(moves) => {
                let listed: Vec<String> = moves
                    .iter()
                    .map(|m| {
                        format!(
                            "{}{}{}",
                            format_square(m.from),
                            if m.capture { "x" } else { "-" },
                            format_square(m.to)
                        )
                    })
                    .collect();
                writeln!(out, "legal {} {}", moves.len(), listed.join(" "))
            }
            Err(e) => writeln!(out, "error {}", e),
        },
        Command::Random { player } => match session.play_random(player, rng) {
            Ok(Some(mv)) => {
                controller.reset();
                writeln!(
                    out,
                    "moved {} {}{}",
                    format_square(mv.from),
                    format_square(mv.to),
                    if mv.capture { " capture" } else { "" }
                )
            }
            Ok(None) => writeln!(out, "nomoves"),
            Err(e) => writeln!(out, "error {}", e),
        },
        Command::NewGame | Command::Quit => Ok(()),
    };

    if let Err(e) = result {
        error!("failed to write response: {}", e);
    }
}
