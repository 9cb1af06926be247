//! FEN (Forsyth-Edwards Notation) import and export for [`Board`].

use crate::{Board, CastlingRights, Color, Coord, Piece, Square};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 4 to 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("invalid move clock: {0}")]
    InvalidClock(String),
}

impl Board {
    /// The standard starting position FEN.
    pub const STARTPOS_FEN: &'static str =
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses a board from FEN.
    ///
    /// The halfmove clock and fullmove number are optional. When present they
    /// must be numbers, but the board does not keep them.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if !(4..=6).contains(&parts.len()) {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        let mut board = Board::empty(to_move);
        parse_placement(&mut board, parts[0])?;
        board.castling = parse_castling(parts[2])?;
        board.en_passant = parse_en_passant(parts[3], to_move)?;

        for clock in &parts[4..] {
            clock
                .parse::<u32>()
                .map_err(|_| FenError::InvalidClock(clock.to_string()))?;
        }

        Ok(board)
    }

    /// Writes the board as FEN, with clocks `0 1`.
    ///
    /// The en-passant target square is reconstructed from the en-passant file
    /// and the side to move.
    pub fn to_fen(&self) -> String {
        let mut placement = String::new();
        for rank in (0..8).rev() {
            let mut gap = 0;
            for file in 0..8 {
                match self.at(Coord::new(file, rank)) {
                    Square::Empty => gap += 1,
                    Square::Occupied(piece, color) => {
                        if gap > 0 {
                            placement.push_str(&gap.to_string());
                            gap = 0;
                        }
                        placement.push(piece.to_fen_char(color));
                    }
                }
            }
            if gap > 0 {
                placement.push_str(&gap.to_string());
            }
            if rank > 0 {
                placement.push('/');
            }
        }

        let active = match self.to_move {
            Color::White => 'w',
            Color::Black => 'b',
        };

        let mut castling = String::new();
        for (flag, c) in [
            (CastlingRights::WHITE_KINGSIDE, 'K'),
            (CastlingRights::WHITE_QUEENSIDE, 'Q'),
            (CastlingRights::BLACK_KINGSIDE, 'k'),
            (CastlingRights::BLACK_QUEENSIDE, 'q'),
        ] {
            if self.castling.raw() & flag != 0 {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let en_passant = match self.en_passant {
            Some(file) => {
                // The square the pushed pawn skipped over, behind it from the mover's view.
                let pusher = self.to_move.opposite();
                let rank = pusher.pawn_rank() + pusher.pawn_direction();
                Coord::new(file as i8, rank).to_string()
            }
            None => "-".to_string(),
        };

        format!("{} {} {} {} 0 1", placement, active, castling, en_passant)
    }
}

fn parse_placement(board: &mut Board, placement: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidPiecePlacement(format!(
            "expected 8 ranks, got {}",
            ranks.len()
        )));
    }

    for (i, row) in ranks.iter().enumerate() {
        let rank = 7 - i as i8;
        let mut file: i8 = 0;
        for c in row.chars() {
            if let Some(skip) = c.to_digit(10) {
                if skip == 0 || file + skip as i8 > 8 {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "rank {} has more than 8 squares",
                        rank + 1
                    )));
                }
                file += skip as i8;
            } else if let Some((piece, color)) = Piece::from_fen_char(c) {
                if file >= 8 {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "rank {} has more than 8 squares",
                        rank + 1
                    )));
                }
                board.set(Coord::new(file, rank), Square::Occupied(piece, color));
                file += 1;
            } else {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "invalid character '{}' in rank {}",
                    c,
                    rank + 1
                )));
            }
        }
        if file != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "rank {} has {} squares, expected 8",
                rank + 1,
                file
            )));
        }
    }

    Ok(())
}

fn parse_castling(castling: &str) -> Result<CastlingRights, FenError> {
    if castling == "-" {
        return Ok(CastlingRights::NONE);
    }

    let mut flags = 0;
    for c in castling.chars() {
        flags |= match c {
            'K' => CastlingRights::WHITE_KINGSIDE,
            'Q' => CastlingRights::WHITE_QUEENSIDE,
            'k' => CastlingRights::BLACK_KINGSIDE,
            'q' => CastlingRights::BLACK_QUEENSIDE,
            _ => {
                return Err(FenError::InvalidCastlingRights(format!(
                    "invalid character '{}'",
                    c
                )))
            }
        };
    }

    Ok(CastlingRights::new(flags))
}

/// The target must be the square skipped by a double push of the side
/// that just moved.
fn parse_en_passant(ep: &str, to_move: Color) -> Result<Option<u8>, FenError> {
    if ep == "-" {
        return Ok(None);
    }

    let pusher = to_move.opposite();
    let skipped = pusher.pawn_rank() + pusher.pawn_direction();
    match Coord::from_algebraic(ep) {
        Some(target) if target.rank == skipped => Ok(Some(target.file as u8)),
        _ => Err(FenError::InvalidEnPassantSquare(ep.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_startpos() {
        let board = Board::from_fen(Board::STARTPOS_FEN).unwrap();
        assert_eq!(board, Board::startpos());
    }

    #[test]
    fn startpos_roundtrip() {
        assert_eq!(Board::startpos().to_fen(), Board::STARTPOS_FEN);
    }

    #[test]
    fn en_passant_file() {
        let board =
            Board::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1").unwrap();
        assert_eq!(board.to_move, Color::Black);
        assert_eq!(board.en_passant, Some(4));
        assert_eq!(
            board.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
    }

    #[test]
    fn black_double_push_target_on_rank_6() {
        let board = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6").unwrap();
        assert_eq!(board.en_passant, Some(3));
        assert_eq!(board.to_fen(), "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
    }

    #[test]
    fn clocks_optional() {
        assert!(Board::from_fen("8/8/8/8/8/8/8/8 w - -").is_ok());
        assert!(Board::from_fen("8/8/8/8/8/8/8/8 w - - 12").is_ok());
    }

    #[test]
    fn partial_castling() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").unwrap();
        assert!(board.castling.can_castle_kingside(Color::White));
        assert!(!board.castling.can_castle_queenside(Color::White));
        assert!(!board.castling.can_castle_kingside(Color::Black));
        assert!(board.castling.can_castle_queenside(Color::Black));
        assert!(board.to_fen().contains(" Kq "));
    }

    #[test]
    fn invalid_part_count() {
        assert_eq!(
            Board::from_fen("invalid"),
            Err(FenError::InvalidPartCount(1))
        );
        assert!(matches!(
            Board::from_fen("8/8/8/8/8/8/8/8 w - - 0 1 extra"),
            Err(FenError::InvalidPartCount(7))
        ));
    }

    #[test]
    fn invalid_active_color() {
        assert!(matches!(
            Board::from_fen("8/8/8/8/8/8/8/8 x KQkq - 0 1"),
            Err(FenError::InvalidActiveColor(_))
        ));
    }

    #[test]
    fn invalid_piece_placement() {
        assert!(matches!(
            Board::from_fen("8/8/8/8/8/8/8 w KQkq - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            Board::from_fen("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            Board::from_fen("7/8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn invalid_castling_rights() {
        assert!(matches!(
            Board::from_fen("8/8/8/8/8/8/8/8 w XYZ - 0 1"),
            Err(FenError::InvalidCastlingRights(_))
        ));
    }

    #[test]
    fn invalid_en_passant() {
        assert!(matches!(
            Board::from_fen("8/8/8/8/8/8/8/8 w - abc 0 1"),
            Err(FenError::InvalidEnPassantSquare(_))
        ));
        assert!(matches!(
            Board::from_fen("8/8/8/8/8/8/8/8 w - e4 0 1"),
            Err(FenError::InvalidEnPassantSquare(_))
        ));
    }

    #[test]
    fn en_passant_target_must_match_side_to_move() {
        // White to move: only a black double push can have left a target.
        assert_eq!(
            Board::from_fen("4k3/8/8/8/4P3/8/8/4K3 w - e3 0 1"),
            Err(FenError::InvalidEnPassantSquare("e3".to_string()))
        );
        assert_eq!(
            Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 b - d6 0 1"),
            Err(FenError::InvalidEnPassantSquare("d6".to_string()))
        );

        let fen = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1";
        assert_eq!(Board::from_fen(fen).unwrap().to_fen(), fen);
    }

    #[test]
    fn invalid_clock() {
        assert!(matches!(
            Board::from_fen("8/8/8/8/8/8/8/8 w - - abc 1"),
            Err(FenError::InvalidClock(_))
        ));
        assert!(matches!(
            Board::from_fen("8/8/8/8/8/8/8/8 w - - 0 xyz"),
            Err(FenError::InvalidClock(_))
        ));
    }

    #[test]
    fn error_display() {
        let err = FenError::InvalidPartCount(3);
        assert!(err.to_string().contains('3'));
        let err = FenError::InvalidEnPassantSquare("z9".to_string());
        assert!(err.to_string().contains("z9"));
    }
}
