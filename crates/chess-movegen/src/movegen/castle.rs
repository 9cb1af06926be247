//! Castle generation.

use super::MoveList;
use crate::{CheckFilter, Move, Step};
use chess_core::{Board, Coord, Piece, Square};

const KING_FILE: i8 = 4;

/// Rook file, king destination file and rook destination file for each wing,
/// king side first.
const WINGS: [(i8, i8, i8); 2] = [(7, 6, 5), (0, 2, 3)];

/// Generates the castles available to the king on `from`.
///
/// Requires the king on its home square, the matching castling right, the
/// rook on its corner, nothing between them, and none of the squares the king
/// starts on, crosses or lands on attacked according to `filter`.
pub(super) fn generate_castling_moves<F: CheckFilter>(
    board: &Board,
    from: Coord,
    filter: &F,
    moves: &mut MoveList,
) {
    let us = board.to_move;
    let rank = us.back_rank();
    let home = Coord::new(KING_FILE, rank);

    if from != home || board.at(home) != Square::Occupied(Piece::King, us) {
        return;
    }

    for (rook_file, king_to, rook_to) in WINGS {
        let allowed = if rook_file > KING_FILE {
            board.castling.can_castle_kingside(us)
        } else {
            board.castling.can_castle_queenside(us)
        };
        if !allowed {
            continue;
        }

        let rook_from = Coord::new(rook_file, rank);
        if board.at(rook_from) != Square::Occupied(Piece::Rook, us) {
            continue;
        }

        let mut between = KING_FILE.min(rook_file) + 1..KING_FILE.max(rook_file);
        if between.any(|file| !board.is_empty(Coord::new(file, rank))) {
            continue;
        }

        let mut king_path = KING_FILE.min(king_to)..=KING_FILE.max(king_to);
        if king_path.any(|file| filter.is_attacked(board, Coord::new(file, rank), us.opposite())) {
            continue;
        }

        filter.admit(
            board,
            moves,
            Move::Castle {
                king: Step::new(home, Coord::new(king_to, rank)),
                rook: Step::new(rook_from, Coord::new(rook_to, rank)),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AcceptAll;
    use chess_core::Color;

    fn sq(s: &str) -> Coord {
        Coord::from_algebraic(s).unwrap()
    }

    fn castles<F: CheckFilter>(fen: &str, from: &str, filter: &F) -> Vec<String> {
        let board = Board::from_fen(fen).unwrap();
        let mut moves = MoveList::new();
        generate_castling_moves(&board, sq(from), filter, &mut moves);
        moves.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn both_wings_for_white() {
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1", &AcceptAll),
            ["O-O", "O-O-O"]
        );
    }

    #[test]
    fn both_wings_for_black() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").unwrap();
        let mut moves = MoveList::new();
        generate_castling_moves(&board, sq("e8"), &AcceptAll, &mut moves);
        assert_eq!(
            moves[1],
            Move::Castle {
                king: Step::new(sq("e8"), sq("c8")),
                rook: Step::new(sq("a8"), sq("d8")),
            }
        );
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn rights_are_required() {
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3K2R w Qk - 0 1", "e1", &AcceptAll),
            ["O-O-O"]
        );
        assert!(castles("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1", "e1", &AcceptAll).is_empty());
    }

    #[test]
    fn pieces_between_block() {
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/RN2K1NR w KQkq - 0 1", "e1", &AcceptAll),
            Vec::<String>::new()
        );
        // b1 only matters for the rook's path, but still blocks.
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1", "e1", &AcceptAll),
            ["O-O"]
        );
    }

    #[test]
    fn missing_rook_blocks() {
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/4K2R w KQkq - 0 1", "e1", &AcceptAll),
            ["O-O"]
        );
        // An enemy rook in the corner does not count.
        assert!(castles("r3k2r/8/8/8/8/8/8/r3K2r w KQkq - 0 1", "e1", &AcceptAll).is_empty());
    }

    #[test]
    fn king_off_home_square() {
        assert!(castles("r3k2r/8/8/8/8/8/8/R2K3R w KQkq - 0 1", "d1", &AcceptAll).is_empty());
    }

    /// Reports the given squares as attacked.
    struct Attacked(Vec<Coord>);

    impl CheckFilter for Attacked {
        fn admit(&self, _board: &Board, moves: &mut MoveList, mv: Move) -> bool {
            moves.push(mv);
            true
        }

        fn is_attacked(&self, _board: &Board, at: Coord, by: Color) -> bool {
            assert_eq!(by, Color::Black);
            self.0.contains(&at)
        }
    }

    #[test]
    fn attacked_king_path_blocks() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
        assert_eq!(castles(fen, "e1", &Attacked(vec![sq("f1")])), ["O-O-O"]);
        assert_eq!(castles(fen, "e1", &Attacked(vec![sq("c1")])), ["O-O"]);
        assert!(castles(fen, "e1", &Attacked(vec![sq("e1")])).is_empty());
        // b1 is crossed by the rook only.
        assert_eq!(
            castles(fen, "e1", &Attacked(vec![sq("b1")])),
            ["O-O", "O-O-O"]
        );
    }
}
