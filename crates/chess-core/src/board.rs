//! Board state: square occupancy, side to move and the auxiliary flags
//! moves need (en-passant file, castling rights).

use crate::{Color, Coord, Piece};
use std::fmt;

/// Occupancy of one square.
///
/// A color only exists together with a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    #[default]
    Empty,
    Occupied(Piece, Color),
}

impl Square {
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Square::Empty => None,
            Square::Occupied(piece, _) => Some(piece),
        }
    }

    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Square::Empty => None,
            Square::Occupied(_, color) => Some(color),
        }
    }
}

/// Castling rights flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const WHITE_KINGSIDE: u8 = 0b0001;
    pub const WHITE_QUEENSIDE: u8 = 0b0010;
    pub const BLACK_KINGSIDE: u8 = 0b0100;
    pub const BLACK_QUEENSIDE: u8 = 0b1000;
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    /// Creates new castling rights from flags.
    #[inline]
    pub const fn new(flags: u8) -> Self {
        CastlingRights(flags & 0b1111)
    }

    const fn kingside_flag(color: Color) -> u8 {
        match color {
            Color::White => Self::WHITE_KINGSIDE,
            Color::Black => Self::BLACK_KINGSIDE,
        }
    }

    const fn queenside_flag(color: Color) -> u8 {
        match color {
            Color::White => Self::WHITE_QUEENSIDE,
            Color::Black => Self::BLACK_QUEENSIDE,
        }
    }

    /// Returns true if the given side can castle kingside.
    #[inline]
    pub const fn can_castle_kingside(self, color: Color) -> bool {
        (self.0 & Self::kingside_flag(color)) != 0
    }

    /// Returns true if the given side can castle queenside.
    #[inline]
    pub const fn can_castle_queenside(self, color: Color) -> bool {
        (self.0 & Self::queenside_flag(color)) != 0
    }

    /// Drops every right that depends on a king or rook still standing on `at`.
    ///
    /// Called for both squares of every move, which covers the king moving,
    /// a rook moving and a rook being captured on its home square.
    pub fn touch(&mut self, at: Coord) {
        for color in [Color::White, Color::Black] {
            if at.rank != color.back_rank() {
                continue;
            }
            match at.file {
                4 => self.0 &= !(Self::kingside_flag(color) | Self::queenside_flag(color)),
                7 => self.0 &= !Self::kingside_flag(color),
                0 => self.0 &= !Self::queenside_flag(color),
                _ => {}
            }
        }
    }

    /// Returns the raw flags.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

/// An 8×8 board together with the side to move.
///
/// `Board` is `Copy`: moves produce a fresh value and never alias the
/// position they were applied to.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Indexed `[file][rank]`.
    squares: [[Square; 8]; 8],
    /// The color that moves next.
    pub to_move: Color,
    /// File of the pawn that just made a double push, if any.
    pub en_passant: Option<u8>,
    pub castling: CastlingRights,
}

impl Board {
    /// A board with no pieces, no castling rights and `to_move` to play.
    pub const fn empty(to_move: Color) -> Self {
        Board {
            squares: [[Square::Empty; 8]; 8],
            to_move,
            en_passant: None,
            castling: CastlingRights::NONE,
        }
    }

    /// The standard starting position.
    pub fn startpos() -> Self {
        const BACK: [Piece; 8] = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        let mut board = Board::empty(Color::White);
        for (file, piece) in BACK.into_iter().enumerate() {
            let file = file as i8;
            for color in [Color::White, Color::Black] {
                board.set(Coord::new(file, color.back_rank()), Square::Occupied(piece, color));
                board.set(
                    Coord::new(file, color.pawn_rank()),
                    Square::Occupied(Piece::Pawn, color),
                );
            }
        }
        board.castling = CastlingRights::ALL;
        board
    }

    /// Returns the occupancy at `at`.
    ///
    /// # Panics
    ///
    /// Panics if `at` is off the board.
    #[inline]
    pub fn at(&self, at: Coord) -> Square {
        assert!(at.on_board(), "square {:?} is off the board", at);
        self.squares[at.file as usize][at.rank as usize]
    }

    /// Returns the occupancy at `at`, or `None` off the board.
    #[inline]
    pub fn get(&self, at: Coord) -> Option<Square> {
        at.on_board()
            .then(|| self.squares[at.file as usize][at.rank as usize])
    }

    /// Overwrites the occupancy at `at`.
    #[inline]
    pub fn set(&mut self, at: Coord, square: Square) {
        assert!(at.on_board(), "square {:?} is off the board", at);
        self.squares[at.file as usize][at.rank as usize] = square;
    }

    /// Builder form of [`Board::set`].
    pub fn with(mut self, at: Coord, square: Square) -> Self {
        self.set(at, square);
        self
    }

    /// True if `at` holds no piece. Panics off the board.
    #[inline]
    pub fn is_empty(&self, at: Coord) -> bool {
        self.at(at).is_empty()
    }

    /// Returns true if `at` holds a piece of the side not to move.
    #[inline]
    pub fn is_opponent(&self, at: Coord) -> bool {
        matches!(self.at(at), Square::Occupied(_, color) if color != self.to_move)
    }

    /// Returns true if `at` holds a piece of the side to move.
    #[inline]
    pub fn is_own(&self, at: Coord) -> bool {
        matches!(self.at(at), Square::Occupied(_, color) if color == self.to_move)
    }

    /// Moves the contents of `from` onto `to`, leaving `from` empty.
    ///
    /// Whatever stood on `to` is overwritten. Castling rights tied to either
    /// square are dropped.
    pub fn relocate(&mut self, from: Coord, to: Coord) {
        let moving = self.at(from);
        self.set(to, moving);
        self.set(from, Square::Empty);
        self.castling.touch(from);
        self.castling.touch(to);
    }

    /// Iterates over every occupied square as `(coord, piece, color)`.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece, Color)> + '_ {
        Coord::all().filter_map(move |c| match self.at(c) {
            Square::Occupied(piece, color) => Some((c, piece, color)),
            Square::Empty => None,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen())
    }
}

/// Renders the board as eight text rows, rank 8 first.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                let c = match self.at(Coord::new(file, rank)) {
                    Square::Empty => '.',
                    Square::Occupied(piece, color) => piece.to_fen_char(color),
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
