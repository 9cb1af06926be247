//! Board coordinates.

use std::fmt;
use std::ops::Add;

/// Number of files and ranks on the board.
pub const BOARD_SIZE: i8 = 8;

/// A (file, rank) pair.
///
/// The same type is used for squares on the board and for the offsets
/// pieces move by, so a coordinate may lie outside the board. Use
/// [`Coord::on_board`] before indexing.
///
/// Files map `0..8` to `a..h`, ranks map `0..8` to `1..8`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub file: i8,
    pub rank: i8,
}

impl Coord {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Coord { file, rank }
    }

    /// Returns true if both components are in `0..8`.
    #[inline]
    pub const fn on_board(self) -> bool {
        self.file >= 0 && self.file < BOARD_SIZE && self.rank >= 0 && self.rank < BOARD_SIZE
    }

    /// Multiplies both components by `k`.
    #[inline]
    pub const fn scaled(self, k: i8) -> Self {
        Coord::new(self.file * k, self.rank * k)
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Some(Coord::new((file - b'a') as i8, (rank - b'1') as i8))
    }

    /// Iterates over all 64 squares, file by file.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|file| (0..BOARD_SIZE).map(move |rank| Coord::new(file, rank)))
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.file + rhs.file, self.rank + rhs.rank)
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.on_board() {
            write!(f, "Coord({})", self)
        } else {
            write!(f, "Coord({}, {})", self.file, self.rank)
        }
    }
}

/// Renders on-board coordinates as `a1`..`h8`, anything else as `(file, rank)`.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.on_board() {
            return write!(f, "({}, {})", self.file, self.rank);
        }
        let file = (b'a' + self.file as u8) as char;
        write!(f, "{}{}", file, self.rank + 1)
    }
}
