//! movegen - prints the candidate moves of one square.
//!
//! ```text
//! movegen e2
//! movegen --fen "4k3/P7/8/8/8/8/8/4K3 w - - 0 1" --apply a7
//! ```
//!
//! Set `RUST_LOG=trace` to see the generator's own logging.

use anyhow::Context;
use chess_core::{Board, Coord};
use chess_movegen::{GenConfig, Generator};
use clap::Parser;
use std::path::PathBuf;

/// Lists the candidate moves of the piece on a square.
#[derive(Parser)]
#[command(name = "movegen")]
#[command(about = "Lists the candidate moves of the piece on a square")]
struct Args {
    /// Square of the piece to move, e.g. e2. Omit to list every move.
    square: Option<String>,

    /// Position in FEN
    #[arg(long, default_value = Board::STARTPOS_FEN)]
    fen: String,

    /// TOML file with generator options
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also print the FEN after each move
    #[arg(long)]
    apply: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GenConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GenConfig::default(),
    };
    let board = Board::from_fen(&args.fen).context("parsing --fen")?;
    tracing::info!(fen = %board.to_fen(), "position loaded");

    let generator = Generator::new(config)?;
    let moves = match &args.square {
        Some(square) => {
            let from = Coord::from_algebraic(square)
                .with_context(|| format!("'{}' is not a square", square))?;
            generator.generate(&board, from)?
        }
        None => generator.generate_all(&board)?,
    };

    print!("{}", board);
    println!("{} to move, {} candidate moves", board.to_move, moves.len());
    for m in &moves {
        if args.apply {
            println!("{:<12} {}", m.to_string(), m.apply(&board).to_fen());
        } else {
            println!("{}", m);
        }
    }

    Ok(())
}
