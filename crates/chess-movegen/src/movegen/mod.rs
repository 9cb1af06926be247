//! Move generation.
//!
//! Knights, bishops, rooks, queens and kings share one offset walk driven by
//! a per-piece table ([`Offsets`]). Pawns and castling have their own rules.
//! None of it looks at check: candidates go through the configured
//! [`CheckFilter`], which is where a legality pass would hook in.

mod castle;
mod pawn;
mod walker;

pub use walker::{walk, Offsets, BISHOP, KING, KNIGHT, QUEEN, ROOK};

use crate::{AcceptAll, CheckFilter, ConfigError, GenConfig, Move};
use chess_core::{Board, Color, Coord, Piece, Square};
use std::fmt;
use thiserror::Error;

/// Errors for generation requests that break the generator's preconditions.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveGenError {
    #[error("square {0:?} is off the board")]
    OffBoard(Coord),

    #[error("no piece on {0}")]
    EmptySquare(Coord),

    #[error("the {color} piece on {at} cannot move: {to_move} is to move")]
    NotToMove {
        at: Coord,
        color: Color,
        to_move: Color,
    },

    #[error("offset table does not describe how a {0} moves")]
    WrongOffsets(Piece),
}

/// An ordered list of candidate moves.
///
/// Order follows the offset table, then distance along each direction.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Returns the number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Iterates over the moves in generation order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Retains only moves for which the predicate returns true.
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        self.moves.retain(f);
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl Extend<Move> for MoveList {
    fn extend<I: IntoIterator<Item = Move>>(&mut self, iter: I) {
        self.moves.extend(iter);
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Comma-separated moves, e.g. `g1→f3,g1→h3`.
impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, m) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", m)?;
        }
        Ok(())
    }
}

/// A configured move generator.
///
/// Generation is pure: the board is only read, so one generator can serve
/// any number of boards, including from several threads when the filter
/// allows it.
#[derive(Debug, Clone, Default)]
pub struct Generator<F = AcceptAll> {
    config: GenConfig,
    filter: F,
}

impl Generator<AcceptAll> {
    /// Creates a generator that keeps every candidate move.
    ///
    /// # Errors
    ///
    /// Fails if `config` does not pass [`GenConfig::validate`].
    pub fn new(config: GenConfig) -> Result<Self, ConfigError> {
        Self::with_filter(config, AcceptAll)
    }
}

impl<F: CheckFilter> Generator<F> {
    /// Creates a generator that routes candidates through `filter`.
    ///
    /// # Errors
    ///
    /// Fails if `config` does not pass [`GenConfig::validate`].
    pub fn with_filter(config: GenConfig, filter: F) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Generator { config, filter })
    }

    /// The validated configuration this generator was built with.
    pub fn config(&self) -> &GenConfig {
        &self.config
    }

    /// The filter every candidate move is offered to.
    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Generates the candidate moves of the piece on `from`.
    ///
    /// # Errors
    ///
    /// Fails if `from` is off the board, empty, or holds a piece of the
    /// side not to move.
    pub fn generate(&self, board: &Board, from: Coord) -> Result<MoveList, MoveGenError> {
        let piece = mover_at(board, from)?;
        let mut moves = MoveList::new();

        match piece {
            Piece::Pawn => pawn::generate_pawn_moves(
                board,
                from,
                &self.config.promotion_pieces,
                &self.filter,
                &mut moves,
            ),
            Piece::King => {
                walker::walk_offsets(board, from, KING, &self.filter, &mut moves);
                if self.config.castling {
                    castle::generate_castling_moves(board, from, &self.filter, &mut moves);
                }
            }
            Piece::Knight => walker::walk_offsets(board, from, KNIGHT, &self.filter, &mut moves),
            Piece::Bishop => walker::walk_offsets(board, from, BISHOP, &self.filter, &mut moves),
            Piece::Rook => walker::walk_offsets(board, from, ROOK, &self.filter, &mut moves),
            Piece::Queen => walker::walk_offsets(board, from, QUEEN, &self.filter, &mut moves),
        }

        tracing::trace!(%from, %piece, count = moves.len(), "generated moves");
        Ok(moves)
    }

    /// Generates the candidate moves of every piece of the side to move,
    /// scanning squares file by file.
    pub fn generate_all(&self, board: &Board) -> Result<MoveList, MoveGenError> {
        let mut moves = MoveList::new();
        for (at, _, color) in board.pieces() {
            if color == board.to_move {
                moves.extend(self.generate(board, at)?);
            }
        }
        Ok(moves)
    }
}

/// Generates the candidate moves of the piece on `from` with the default
/// configuration and no check filtering.
pub fn generate(board: &Board, from: Coord) -> Result<MoveList, MoveGenError> {
    Generator::<AcceptAll>::default().generate(board, from)
}

/// Generates the candidate moves of every piece of the side to move with the
/// default configuration and no check filtering.
pub fn generate_all(board: &Board) -> Result<MoveList, MoveGenError> {
    Generator::<AcceptAll>::default().generate_all(board)
}

/// Returns the piece on `from`, checking that it exists and may move.
fn mover_at(board: &Board, from: Coord) -> Result<Piece, MoveGenError> {
    match board.get(from) {
        None => Err(MoveGenError::OffBoard(from)),
        Some(Square::Empty) => Err(MoveGenError::EmptySquare(from)),
        Some(Square::Occupied(_, color)) if color != board.to_move => {
            Err(MoveGenError::NotToMove {
                at: from,
                color,
                to_move: board.to_move,
            })
        }
        Some(Square::Occupied(piece, _)) => Ok(piece),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Step;

    fn sq(s: &str) -> Coord {
        Coord::from_algebraic(s).unwrap()
    }

    fn normal(from: &str, to: &str) -> Move {
        Move::Normal {
            from: sq(from),
            to: sq(to),
        }
    }

    #[test]
    fn movelist_push_and_index() {
        let mut list = MoveList::new();
        assert!(list.is_empty());

        list.push(normal("e2", "e3"));
        list.push(normal("d2", "d3"));

        assert_eq!(list.len(), 2);
        assert_eq!(list[0], normal("e2", "e3"));
        assert_eq!(list[1], normal("d2", "d3"));
    }

    #[test]
    fn movelist_retain() {
        let mut list = MoveList::new();
        list.push(normal("e2", "e3"));
        list.push(normal("e2", "e4"));
        list.push(normal("e3", "e4"));

        list.retain(|m| m.from() == sq("e2"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn movelist_display() {
        let mut list = MoveList::new();
        assert_eq!(list.to_string(), "");
        list.push(normal("g1", "f3"));
        list.push(normal("g1", "h3"));
        assert_eq!(list.to_string(), "g1→f3,g1→h3");
    }

    #[test]
    fn knight_from_startpos() {
        let moves = generate(&Board::startpos(), sq("g1")).unwrap();
        assert_eq!(moves.len(), 2);
        assert!(moves.as_slice().contains(&normal("g1", "f3")));
        assert!(moves.as_slice().contains(&normal("g1", "h3")));
    }

    #[test]
    fn blocked_pieces_in_startpos() {
        let board = Board::startpos();
        for square in ["a1", "c1", "d1", "e1", "f1", "h1"] {
            assert!(generate(&board, sq(square)).unwrap().is_empty(), "{}", square);
        }
    }

    #[test]
    fn all_moves_from_startpos() {
        let moves = generate_all(&Board::startpos()).unwrap();
        assert_eq!(moves.len(), 20);
    }

    #[test]
    fn all_moves_for_black() {
        let board = Move::DoublePush {
            from: sq("e2"),
            to: sq("e4"),
        }
        .apply(&Board::startpos());
        let moves = generate_all(&board).unwrap();
        assert_eq!(moves.len(), 20);
        assert!(moves.iter().all(|m| m.from().rank >= 6));
    }

    #[test]
    fn empty_square_is_an_error() {
        assert_eq!(
            generate(&Board::startpos(), sq("e4")),
            Err(MoveGenError::EmptySquare(sq("e4")))
        );
    }

    #[test]
    fn off_board_is_an_error() {
        assert_eq!(
            generate(&Board::startpos(), Coord::new(8, 0)),
            Err(MoveGenError::OffBoard(Coord::new(8, 0)))
        );
    }

    #[test]
    fn opponent_piece_is_an_error() {
        let err = generate(&Board::startpos(), sq("g8")).unwrap_err();
        assert_eq!(
            err,
            MoveGenError::NotToMove {
                at: sq("g8"),
                color: Color::Black,
                to_move: Color::White,
            }
        );
        assert!(err.to_string().contains("g8"));
    }

    #[test]
    fn king_gets_castles_after_steps() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let moves = generate(&board, sq("e1")).unwrap();

        // 5 steps, then king side and queen side.
        assert_eq!(moves.len(), 7);
        assert_eq!(
            moves[5],
            Move::Castle {
                king: Step::new(sq("e1"), sq("g1")),
                rook: Step::new(sq("h1"), sq("f1")),
            }
        );
        assert_eq!(
            moves[6],
            Move::Castle {
                king: Step::new(sq("e1"), sq("c1")),
                rook: Step::new(sq("a1"), sq("d1")),
            }
        );
    }

    #[test]
    fn castling_can_be_disabled() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let config = GenConfig {
            castling: false,
            ..GenConfig::default()
        };
        let moves = Generator::new(config).unwrap().generate(&board, sq("e1")).unwrap();
        assert_eq!(moves.len(), 5);
        assert!(!moves.iter().any(|m| matches!(m, Move::Castle { .. })));
    }

    #[test]
    fn configured_promotions() {
        let board = Board::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let config = GenConfig {
            promotion_pieces: vec![Piece::Queen, Piece::Knight],
            ..GenConfig::default()
        };
        let moves = Generator::new(config).unwrap().generate(&board, sq("a7")).unwrap();
        assert_eq!(moves.to_string(), "a7→a8Q,a7→a8N");
    }

    #[test]
    fn generation_is_repeatable() {
        let board = Board::from_fen("r3k2r/pp3ppp/8/2Pp4/8/8/PP3PPP/R3K2R w KQkq d6 0 1").unwrap();
        let first = generate_all(&board).unwrap();
        let second = generate_all(&board).unwrap();
        assert_eq!(first, second);
    }

    /// Keeps nothing and stops every direction after its first candidate.
    struct RejectAll;

    impl CheckFilter for RejectAll {
        fn admit(&self, _board: &Board, _moves: &mut MoveList, _mv: Move) -> bool {
            false
        }
    }

    #[test]
    fn filter_decides_what_is_kept() {
        let board = Board::startpos();
        let generator = Generator::with_filter(GenConfig::default(), RejectAll).unwrap();
        assert!(generator.generate_all(&board).unwrap().is_empty());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let empty = GenConfig {
            promotion_pieces: vec![],
            ..GenConfig::default()
        };
        assert!(matches!(
            Generator::new(empty),
            Err(ConfigError::Invalid(_))
        ));

        let king_and_pawn = GenConfig {
            promotion_pieces: vec![Piece::King, Piece::Pawn],
            ..GenConfig::default()
        };
        assert!(matches!(
            Generator::with_filter(king_and_pawn, RejectAll),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn default_generator_promotes_to_all_four() {
        let board = Board::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let moves = Generator::<AcceptAll>::default().generate(&board, sq("a7")).unwrap();
        assert_eq!(moves.to_string(), "a7→a8Q,a7→a8R,a7→a8B,a7→a8N");
    }
}
