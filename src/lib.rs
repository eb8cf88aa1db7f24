// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Conquid: a rhythm-gated two-player territory game.
//!
//! This crate provides the complete rules engine and timing layer for:
//! - A shared tile grid where players claim, expand, bridge, and destroy
//! - Implicit move classification from three tile selections
//! - A rhythm clock gating input and driving move submission
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │        Terminal UI (cli)            │
//! ├─────────────────────────────────────┤
//! │           Session                   │
//! ├──────────────────┬──────────────────┤
//! │   Game rules     │   Rhythm clock   │
//! │   (game)         │   (rhythm)       │
//! └──────────────────┴──────────────────┘
//! ```
//!
//! The [`Session`] owns a [`game::Board`] and a [`rhythm::RhythmClock`]
//! and applies the one cross-cutting rule: tile input reaches the board
//! only while the clock's acceptance window is open.

pub mod config;
pub mod error;
pub mod game;
pub mod rhythm;
pub mod session;

pub use error::{SetupError, SetupResult};
pub use session::Session;

// Re-export key types at crate root for convenience
pub use config::GameConfig;
pub use game::{Board, Coord, Move, MoveKind, Player, PlayerId, Tile, Update};
pub use rhythm::{Metronome, RhythmClock, RhythmTrack};
