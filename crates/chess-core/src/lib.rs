//! Core types for chess move generation.
//!
//! This crate provides the board model the move generator works on:
//! - [`Piece`] and [`Color`] for piece representation
//! - [`Coord`] for squares and movement offsets
//! - [`Board`] and [`Square`] for occupancy, side to move, en passant and castling
//! - FEN import and export

mod board;
mod color;
mod coord;
mod fen;
mod piece;

pub use board::{Board, CastlingRights, Square};
pub use color::Color;
pub use coord::{Coord, BOARD_SIZE};
pub use fen::FenError;
pub use piece::Piece;
