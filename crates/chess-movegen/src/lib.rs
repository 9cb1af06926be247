//! Chess move generation and move application.
//!
//! This crate provides:
//! - [`Move`] - the five kinds of move, each able to produce the next [`Board`]
//! - [`Generator`] - candidate moves for the piece on a square
//! - [`CheckFilter`] - the hook every candidate passes through before it is kept
//! - [`GenConfig`] - promotion choices and castling, loadable from TOML
//!
//! Generation does not look at check. The default filter, [`AcceptAll`],
//! keeps everything; a legality pass plugs in as another [`CheckFilter`].
//!
//! # Example
//!
//! ```
//! use chess_core::{Board, Coord};
//! use chess_movegen::generate;
//!
//! let board = Board::startpos();
//! let e2 = Coord::from_algebraic("e2").unwrap();
//! let moves = generate(&board, e2).unwrap();
//! assert_eq!(moves.to_string(), "e2→e3,e2→e4");
//!
//! // Applying a move returns a new board; `board` is unchanged.
//! let next = moves[1].apply(&board);
//! assert_eq!(next.en_passant, Some(4));
//! assert_eq!(board, Board::startpos());
//! ```
//!
//! [`Board`]: chess_core::Board

mod config;
mod filter;
mod mov;
pub mod movegen;

pub use config::{ConfigError, GenConfig};
pub use filter::{AcceptAll, CheckFilter};
pub use mov::{Move, Step};
pub use movegen::{generate, generate_all, walk, Generator, MoveGenError, MoveList, Offsets};
