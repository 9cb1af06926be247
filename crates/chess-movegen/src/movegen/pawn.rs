//! Pawn move generation: pushes, double pushes, diagonal captures,
//! en passant and promotion.

use super::MoveList;
use crate::{CheckFilter, Move};
use chess_core::{Board, Coord, Piece, Square};

/// Generates the moves of the pawn on `from`, which belongs to the side to move.
///
/// A push or capture onto the last rank yields one promotion per entry of
/// `promotions`, in order.
pub(super) fn generate_pawn_moves<F: CheckFilter>(
    board: &Board,
    from: Coord,
    promotions: &[Piece],
    filter: &F,
    moves: &mut MoveList,
) {
    let us = board.to_move;
    let forward = Coord::new(0, us.pawn_direction());

    let one = from + forward;
    if one.on_board() && board.is_empty(one) {
        let keep_going = push_or_promote(board, from, one, promotions, filter, moves);
        let two = one + forward;
        if keep_going && from.rank == us.pawn_rank() && board.is_empty(two) {
            filter.admit(board, moves, Move::DoublePush { from, to: two });
        }
    }

    for side in [-1, 1] {
        let to = from + Coord::new(side, us.pawn_direction());
        if !to.on_board() {
            continue;
        }

        if board.is_opponent(to) {
            push_or_promote(board, from, to, promotions, filter, moves);
        } else if can_capture_en_passant(board, from, to) {
            filter.admit(board, moves, Move::EnPassant { from, to });
        }
    }
}

/// Offers a move to `to`, or the promotions onto it on the last rank.
/// Returns the filter's continue signal.
fn push_or_promote<F: CheckFilter>(
    board: &Board,
    from: Coord,
    to: Coord,
    promotions: &[Piece],
    filter: &F,
    moves: &mut MoveList,
) -> bool {
    if to.rank != board.to_move.promotion_rank() {
        return filter.admit(board, moves, Move::Normal { from, to });
    }

    promotions.iter().fold(true, |keep_going, &piece| {
        filter.admit(board, moves, Move::Promotion { from, to, piece }) && keep_going
    })
}

/// The diagonal `to` is an en-passant capture when the previous move was a
/// double push onto `to`'s file, landing beside `from`.
fn can_capture_en_passant(board: &Board, from: Coord, to: Coord) -> bool {
    let us = board.to_move;
    let victim = Coord::new(to.file, from.rank);

    board.en_passant == Some(to.file as u8)
        && from.rank == us.en_passant_rank()
        && board.is_empty(to)
        && board.at(victim) == Square::Occupied(Piece::Pawn, us.opposite())
}
