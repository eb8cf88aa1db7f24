//! Rules engine for Conquid.
//!
//! Implements the territory game on a fixed grid:
//! - Tile grid with ownership and base flags
//! - Players with bases and display styles
//! - Move classification and resolution (claim, expand, bridge,
//!   destroy, skip)
//! - Board aggregate: turn rotation, update history, tile-changed
//!   notifications

mod board;
mod grid;
mod invariants;
mod player;
mod resolve;
mod update;

pub use board::{Board, TileChange};
pub use grid::{Coord, Grid, Tile};
pub use invariants::{check_invariants, InvariantViolation};
pub use player::{Player, PlayerId, PlayerStyle};
pub use resolve::{resolve, VANQUISH_SIZE};
pub use update::{Move, MoveKind, TileState, Update, SUBMIT_LENGTH};
