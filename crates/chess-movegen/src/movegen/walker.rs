//! The shared sliding/stepping walk for every piece except the pawn.

use super::{mover_at, MoveGenError, MoveList};
use crate::{CheckFilter, Move};
use chess_core::{Board, Coord, Piece, BOARD_SIZE};

/// Directions a piece moves in, and whether it keeps going along them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offsets {
    pub steps: &'static [Coord],
    /// True for sliders, false for pieces that move a single step.
    pub repeat: bool,
}

impl Offsets {
    /// Returns the table for `piece`, or `None` for the pawn.
    pub const fn for_piece(piece: Piece) -> Option<Offsets> {
        match piece {
            Piece::Pawn => None,
            Piece::Knight => Some(KNIGHT),
            Piece::Bishop => Some(BISHOP),
            Piece::Rook => Some(ROOK),
            Piece::Queen => Some(QUEEN),
            Piece::King => Some(KING),
        }
    }
}

const ORTHOGONAL: [Coord; 4] = [
    Coord::new(0, 1),
    Coord::new(1, 0),
    Coord::new(0, -1),
    Coord::new(-1, 0),
];

const DIAGONAL: [Coord; 4] = [
    Coord::new(1, 1),
    Coord::new(1, -1),
    Coord::new(-1, -1),
    Coord::new(-1, 1),
];

const ALL_DIRECTIONS: [Coord; 8] = [
    Coord::new(0, 1),
    Coord::new(1, 1),
    Coord::new(1, 0),
    Coord::new(1, -1),
    Coord::new(0, -1),
    Coord::new(-1, -1),
    Coord::new(-1, 0),
    Coord::new(-1, 1),
];

const L_SHAPES: [Coord; 8] = [
    Coord::new(1, 2),
    Coord::new(2, 1),
    Coord::new(2, -1),
    Coord::new(1, -2),
    Coord::new(-1, -2),
    Coord::new(-2, -1),
    Coord::new(-2, 1),
    Coord::new(-1, 2),
];

pub const ROOK: Offsets = Offsets {
    steps: &ORTHOGONAL,
    repeat: true,
};

pub const BISHOP: Offsets = Offsets {
    steps: &DIAGONAL,
    repeat: true,
};

pub const QUEEN: Offsets = Offsets {
    steps: &ALL_DIRECTIONS,
    repeat: true,
};

pub const KNIGHT: Offsets = Offsets {
    steps: &L_SHAPES,
    repeat: false,
};

pub const KING: Offsets = Offsets {
    steps: &ALL_DIRECTIONS,
    repeat: false,
};

/// Walks `offsets` from the piece on `from` and returns the moves found.
///
/// # Errors
///
/// Fails if `from` holds no piece of the side to move, or if `offsets` is
/// not the table for the piece standing there.
pub fn walk<F: CheckFilter>(
    board: &Board,
    from: Coord,
    offsets: Offsets,
    filter: &F,
) -> Result<MoveList, MoveGenError> {
    let piece = mover_at(board, from)?;
    if Offsets::for_piece(piece) != Some(offsets) {
        return Err(MoveGenError::WrongOffsets(piece));
    }

    let mut moves = MoveList::new();
    walk_offsets(board, from, offsets, filter, &mut moves);
    Ok(moves)
}

/// Walks every direction of `offsets` in table order.
pub(super) fn walk_offsets<F: CheckFilter>(
    board: &Board,
    from: Coord,
    offsets: Offsets,
    filter: &F,
    moves: &mut MoveList,
) {
    for &step in offsets.steps {
        walk_direction(board, from, step, offsets.repeat, filter, moves);
    }
}

/// Follows one direction until the board edge, a piece, or the filter
/// stops it. An opponent's piece is included as a capture; an own piece is not.
fn walk_direction<F: CheckFilter>(
    board: &Board,
    from: Coord,
    step: Coord,
    repeat: bool,
    filter: &F,
    moves: &mut MoveList,
) {
    for distance in 1..BOARD_SIZE {
        let to = from + step.scaled(distance);
        if !to.on_board() {
            return;
        }

        if !board.is_own(to) && !filter.admit(board, moves, Move::Normal { from, to }) {
            tracing::trace!(%from, %to, "filter stopped direction");
            return;
        }

        if !repeat || !board.is_empty(to) {
            return;
        }
    }
}
