//! Generator configuration, loadable from TOML.
//!
//! ```toml
//! promotion_pieces = ["queen", "knight"]
//! castling = true
//! ```

use chess_core::Piece;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The configuration parsed but describes an unusable generator.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Options for [`Generator`](crate::Generator).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GenConfig {
    /// Pieces offered when a pawn promotes, in the order they are generated.
    /// Defaults to queen, rook, bishop, knight.
    pub promotion_pieces: Vec<Piece>,
    /// Whether kings generate castles. Defaults to true.
    pub castling: bool,
}

impl Default for GenConfig {
    fn default() -> Self {
        GenConfig {
            promotion_pieces: Piece::PROMOTIONS.to_vec(),
            castling: true,
        }
    }
}

impl GenConfig {
    /// Parses and validates a TOML document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] for malformed TOML and
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GenConfig = toml::from_str(content)?;
        config.validate()?;
        tracing::debug!(?config, "loaded generator config");
        Ok(config)
    }

    /// Reads and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Checks that at least one promotion piece is offered, each at most
    /// once, and none of them a pawn or king.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.promotion_pieces.is_empty() {
            return Err(ConfigError::Invalid(
                "promotion_pieces must not be empty".to_string(),
            ));
        }
        for (i, piece) in self.promotion_pieces.iter().enumerate() {
            if !piece.is_promotion_target() {
                return Err(ConfigError::Invalid(format!(
                    "a pawn cannot promote to a {}",
                    piece
                )));
            }
            if self.promotion_pieces[..i].contains(piece) {
                return Err(ConfigError::Invalid(format!(
                    "{} listed twice in promotion_pieces",
                    piece
                )));
            }
        }
        Ok(())
    }
}
