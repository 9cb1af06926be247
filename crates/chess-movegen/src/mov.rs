//! Move representation and application.

use chess_core::{Board, Coord, Piece, Square};
use std::fmt;

/// A piece travelling from one square to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step {
    pub from: Coord,
    pub to: Coord,
}

impl Step {
    #[inline]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Step { from, to }
    }
}

/// A chess move.
///
/// Every variant knows how to produce the board that follows it; see
/// [`Move::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Any move without side effects beyond the piece changing squares.
    /// A piece on the destination is captured by being overwritten.
    Normal { from: Coord, to: Coord },
    /// Pawn advancing two squares from its starting rank.
    DoublePush { from: Coord, to: Coord },
    /// Pawn reaching the last rank and turning into `piece`.
    Promotion { from: Coord, to: Coord, piece: Piece },
    /// Pawn capturing a pawn that just double-pushed past it.
    EnPassant { from: Coord, to: Coord },
    /// King and rook moving together.
    Castle { king: Step, rook: Step },
}

impl Move {
    /// Square the moving piece leaves (the king's, for castling).
    #[inline]
    pub const fn from(self) -> Coord {
        match self {
            Move::Normal { from, .. }
            | Move::DoublePush { from, .. }
            | Move::Promotion { from, .. }
            | Move::EnPassant { from, .. } => from,
            Move::Castle { king, .. } => king.from,
        }
    }

    /// Square the moving piece lands on (the king's, for castling).
    #[inline]
    pub const fn to(self) -> Coord {
        match self {
            Move::Normal { to, .. }
            | Move::DoublePush { to, .. }
            | Move::Promotion { to, .. }
            | Move::EnPassant { to, .. } => to,
            Move::Castle { king, .. } => king.to,
        }
    }

    /// Returns the board after this move.
    ///
    /// `board` is left untouched. The side to move is flipped and the
    /// en-passant file is cleared, except after a double push which records
    /// the pushed pawn's file.
    ///
    /// # Panics
    ///
    /// Panics if a [`Move::DoublePush`] changes file. The generator never
    /// produces one, so this indicates a bug rather than bad input.
    pub fn apply(&self, board: &Board) -> Board {
        let mut next = *board;
        next.en_passant = None;

        match *self {
            Move::Normal { from, to } => next.relocate(from, to),
            Move::DoublePush { from, to } => {
                assert_eq!(
                    from.file, to.file,
                    "double pawn push {:?} -> {:?} leaves its file",
                    from, to
                );
                next.relocate(from, to);
                next.en_passant = Some(to.file as u8);
            }
            Move::Promotion { from, to, piece } => {
                next.relocate(from, to);
                let color = next.at(to).color().unwrap_or(board.to_move);
                next.set(to, Square::Occupied(piece, color));
            }
            Move::EnPassant { from, to } => {
                next.relocate(from, to);
                // The captured pawn stands beside the mover, not on the target.
                next.set(Coord::new(to.file, from.rank), Square::Empty);
            }
            Move::Castle { king, rook } => {
                next.relocate(king.from, king.to);
                next.relocate(rook.from, rook.to);
            }
        }

        next.to_move = board.to_move.opposite();
        tracing::debug!(mv = %self, to_move = %next.to_move, "applied move");
        next
    }
}

/// Writes `<from>→<to>`, with the promoted piece's letter or `e.p.`
/// appended. Castling is written `O-O` or `O-O-O`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Normal { from, to } | Move::DoublePush { from, to } => {
                write!(f, "{}→{}", from, to)
            }
            Move::Promotion { from, to, piece } => {
                write!(f, "{}→{}{}", from, to, piece.symbol())
            }
            Move::EnPassant { from, to } => write!(f, "{}→{}e.p.", from, to),
            Move::Castle { king, .. } if king.to.file > king.from.file => write!(f, "O-O"),
            Move::Castle { .. } => write!(f, "O-O-O"),
        }
    }
}
