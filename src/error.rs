//! Error types for game setup.
//!
//! Runtime rule failures are not errors: illegal moves resolve to empty
//! updates, out-of-bounds lookups return `None`, and inputs outside an
//! accepting window are dropped. The only fallible surface is setup.

use std::fmt;

/// Errors detected while constructing a board, clock, or session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    /// Grid dimensions too small for the fixed base layout.
    GridTooSmall {
        /// Requested width in tiles.
        width: u16,
        /// Requested height in tiles.
        height: u16,
    },
    /// A beat pattern string was empty.
    EmptyPattern,
    /// A beat pattern contained a character outside `+`, `-`, `=`.
    InvalidBeatChar(char),
    /// The pulse interval was zero milliseconds.
    ZeroInterval,
    /// The game requires exactly two players.
    PlayerCount(usize),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::GridTooSmall { width, height } => {
                write!(f, "grid {width}x{height} is too small for base placement")
            }
            SetupError::EmptyPattern => write!(f, "beat pattern is empty"),
            SetupError::InvalidBeatChar(c) => {
                write!(f, "invalid beat character {c:?} (expected '+', '-' or '=')")
            }
            SetupError::ZeroInterval => write!(f, "pulse interval must be nonzero"),
            SetupError::PlayerCount(n) => {
                write!(f, "expected exactly 2 players, got {n}")
            }
        }
    }
}

impl std::error::Error for SetupError {}

/// Result type for setup operations.
pub type SetupResult<T> = Result<T, SetupError>;
