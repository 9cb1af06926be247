//! The check-filter hook.
//!
//! Every candidate move passes through a [`CheckFilter`] before it reaches
//! the move list. The generator itself knows nothing about check; a filter
//! that tries each move on a scratch board and rejects the ones leaving the
//! mover's king attacked can be plugged in without touching the walk.

use crate::{Move, MoveList};
use chess_core::{Board, Color, Coord};

/// Decides which candidate moves are kept.
pub trait CheckFilter {
    /// Offers `mv`, generated from `board`, for inclusion in `moves`.
    ///
    /// Returns `false` to stop walking the current direction.
    fn admit(&self, board: &Board, moves: &mut MoveList, mv: Move) -> bool;

    /// Returns true if `at` is attacked by `by` on `board`.
    ///
    /// Castling consults this for every square the king stands on or
    /// crosses. The default reports no attacks.
    fn is_attacked(&self, _board: &Board, _at: Coord, _by: Color) -> bool {
        false
    }
}

/// Keeps every move and never stops a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AcceptAll;

impl CheckFilter for AcceptAll {
    #[inline]
    fn admit(&self, _board: &Board, moves: &mut MoveList, mv: Move) -> bool {
        moves.push(mv);
        true
    }
}

impl<F: CheckFilter + ?Sized> CheckFilter for &F {
    fn admit(&self, board: &Board, moves: &mut MoveList, mv: Move) -> bool {
        (**self).admit(board, moves, mv)
    }

    fn is_attacked(&self, board: &Board, at: Coord, by: Color) -> bool {
        (**self).is_attacked(board, at, by)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_all_pushes_and_continues() {
        let board = Board::startpos();
        let mut moves = MoveList::new();
        let mv = Move::Normal {
            from: Coord::new(1, 0),
            to: Coord::new(2, 2),
        };

        assert!(AcceptAll.admit(&board, &mut moves, mv));
        assert_eq!(moves.as_slice(), &[mv]);
    }

    #[test]
    fn accept_all_reports_no_attacks() {
        let board = Board::startpos();
        assert!(!AcceptAll.is_attacked(&board, Coord::new(4, 2), Color::Black));
    }

    #[test]
    fn filter_by_reference() {
        let board = Board::startpos();
        let mut moves = MoveList::new();
        let mv = Move::Normal {
            from: Coord::new(6, 0),
            to: Coord::new(5, 2),
        };
        let filter = &AcceptAll;
        assert!(filter.admit(&board, &mut moves, mv));
        assert_eq!(moves.len(), 1);
    }
}
