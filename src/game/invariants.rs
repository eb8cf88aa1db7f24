//! Game invariants - sanity checks that detect bugs.
//!
//! These should NEVER trigger in a correctly implemented game. They are
//! not gameplay rules; they are bug detectors run by tests and fuzzing.

// Neighbor counts are u8 by construction
#![allow(clippy::cast_lossless)]

use crate::game::Board;

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all board invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(board: &Board) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let grid = board.grid();

    // Adjacency symmetry: every neighbor links back.
    for (coord, _) in grid.iter() {
        let (adj, count) = grid.neighbors(coord);
        for n in &adj[..count as usize] {
            let (back, back_count) = grid.neighbors(*n);
            if !back[..back_count as usize].contains(&coord) {
                violations.push(InvariantViolation {
                    message: format!("Neighbor {n:?} of {coord:?} does not link back"),
                });
            }
        }
    }

    // Base lists: each listed coordinate must be an owned base tile.
    for player in board.players() {
        for &coord in &player.base {
            match grid.get(coord) {
                Some(tile) if tile.owner == Some(player.id) && tile.is_base => {}
                Some(tile) => violations.push(InvariantViolation {
                    message: format!(
                        "Player {} lists {:?} as base but tile is owner={:?} base={}",
                        player.id, coord, tile.owner, tile.is_base
                    ),
                }),
                None => violations.push(InvariantViolation {
                    message: format!(
                        "Player {} lists out-of-bounds base {:?}",
                        player.id, coord
                    ),
                }),
            }
        }
        // And conversely: the board keeps the lists complete.
        for (coord, tile) in grid.iter() {
            if tile.owner == Some(player.id) && tile.is_base && !player.has_base(coord) {
                violations.push(InvariantViolation {
                    message: format!(
                        "Owned base tile {:?} missing from player {}'s base list",
                        coord, player.id
                    ),
                });
            }
        }
    }

    // The setup update is always the first history entry.
    if board.history().is_empty() {
        violations.push(InvariantViolation {
            message: "History is missing the setup entry".to_string(),
        });
    }

    // The in-progress move belongs to a known player and is never
    // resolved before collecting all of its inputs.
    let current = board.current_move();
    if board.player(current.player()).is_none() {
        violations.push(InvariantViolation {
            message: format!("Current move held by unknown player {}", current.player()),
        });
    }
    if current.kind().is_some() && !current.is_complete() {
        violations.push(InvariantViolation {
            message: "Move resolved before collecting three inputs".to_string(),
        });
    }

    violations
}
