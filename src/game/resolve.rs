//! Move classification and resolution.
//!
//! Exactly three tile selections are classified into one of five move
//! kinds, evaluated in strict priority order: claim, expand, bridge,
//! destroy, skip. The first matching rule wins and produces the update
//! for the turn. Every failure case is inert: no rule match means an
//! empty update, never an error.

// Neighbor counts are u8 by construction
#![allow(clippy::cast_lossless)]

use std::collections::HashSet;

use crate::game::{
    Coord, Grid, MoveKind, Player, PlayerId, TileState, Update, SUBMIT_LENGTH,
};

/// Side length of the square cleared by a destroy move, and the number
/// of bordering friendly tiles it requires.
pub const VANQUISH_SIZE: u16 = 4;

/// Classify three selections and compute the resulting update.
///
/// Selections are taken in click order. Out-of-bounds selections and
/// input sequences of the wrong length classify as [`MoveKind::Skip`].
#[must_use]
pub fn resolve(grid: &Grid, player: &Player, inputs: &[Coord]) -> (MoveKind, Update) {
    if inputs.len() != SUBMIT_LENGTH {
        return (MoveKind::Skip, Update::new());
    }

    let mut blank = 0usize;
    let mut own_base = 0usize;
    let mut other_base = 0usize;
    let mut turf = 0usize;

    for &coord in inputs {
        let Some(tile) = grid.get(coord) else {
            return (MoveKind::Skip, Update::new());
        };
        if tile.is_base {
            if tile.owner == Some(player.id) {
                own_base += 1;
            } else {
                other_base += 1;
            }
        } else {
            turf += 1;
            if tile.owner.is_none() {
                blank += 1;
            }
        }
    }

    if blank == SUBMIT_LENGTH {
        (MoveKind::Claim, claim(player.id, inputs))
    } else if own_base == SUBMIT_LENGTH {
        (MoveKind::Expand, expand(grid, player.id))
    } else if own_base + other_base == SUBMIT_LENGTH {
        (MoveKind::Bridge, bridge(grid, player))
    } else if turf == 2 && own_base == 1 {
        match destroy_box(grid, player.id, inputs) {
            Some((min, max)) => (MoveKind::Destroy, destroy(min, max)),
            None => (MoveKind::Skip, Update::new()),
        }
    } else {
        (MoveKind::Skip, Update::new())
    }
}

/// Claim: each selected blank tile becomes the player's territory.
///
/// Duplicate selections collapse in the update map.
fn claim(player: PlayerId, inputs: &[Coord]) -> Update {
    let mut update = Update::new();
    for &coord in inputs {
        update.set(coord, TileState::new(Some(player), false));
    }
    update
}

/// Expand: flood-convert enemy territory surrounded by the player.
///
/// Starting from the player's non-base tiles, an enemy-owned non-base
/// tile converts when at least two of its neighbors are attackers
/// (player non-base tiles, or tiles converted earlier in this same
/// resolution). Conversions cascade through the newly converted tiles'
/// own enemy neighbors; a tile never converts twice.
fn expand(grid: &Grid, player: PlayerId) -> Update {
    let mut update = Update::new();

    let is_attacker = |update: &Update, coord: Coord| -> bool {
        update.contains(coord)
            || grid
                .get(coord)
                .is_some_and(|t| t.owner == Some(player) && !t.is_base)
    };
    let is_target = |update: &Update, coord: Coord| -> bool {
        !update.contains(coord)
            && grid
                .get(coord)
                .is_some_and(|t| t.owner.is_some() && t.owner != Some(player) && !t.is_base)
    };

    // Seed the worklist with every enemy tile adjacent to the player's
    // territory, then let conversions cascade.
    let mut pending: Vec<Coord> = Vec::new();
    for (coord, tile) in grid.iter() {
        if tile.owner == Some(player) && !tile.is_base {
            let (adj, count) = grid.neighbors(coord);
            for &nt in &adj[..count as usize] {
                if is_target(&update, nt) {
                    pending.push(nt);
                }
            }
        }
    }

    while let Some(coord) = pending.pop() {
        if !is_target(&update, coord) {
            continue;
        }
        let mut surrounds = 0u8;
        let mut frees: Vec<Coord> = Vec::new();
        let (adj, count) = grid.neighbors(coord);
        for &nt in &adj[..count as usize] {
            if is_attacker(&update, nt) {
                surrounds += 1;
            } else if is_target(&update, nt) {
                frees.push(nt);
            }
        }
        if surrounds >= 2 {
            update.set(coord, TileState::new(Some(player), false));
            pending.extend(frees);
        }
    }

    update
}

/// Bridge: depth-first search for a corridor of owned tiles reaching a
/// foreign base.
///
/// The search starts at the player's first base tile and steps only
/// through player-owned tiles, always into the first viable neighbor in
/// the fixed up/down/left/right order. Dead ends are marked failed and
/// never revisited. Success is a path head adjacent to a base tile not
/// owned by the player (enemy or neutral); every tile on the path then
/// becomes part of the player's base. No path yields an empty update.
fn bridge(grid: &Grid, player: &Player) -> Update {
    let mut update = Update::new();
    let Some(&start) = player.base.first() else {
        return update;
    };

    let is_link = |coord: Coord| grid.get(coord).is_some_and(|t| t.owner == Some(player.id));
    let reaches_foreign_base = |coord: Coord| {
        let (adj, count) = grid.neighbors(coord);
        adj[..count as usize].iter().any(|&nt| {
            grid.get(nt)
                .is_some_and(|t| t.is_base && t.owner != Some(player.id))
        })
    };

    let mut stack: Vec<Coord> = vec![start];
    let mut failed: HashSet<Coord> = HashSet::new();

    while let Some(&head) = stack.last() {
        if reaches_foreign_base(head) {
            break;
        }
        let (adj, count) = grid.neighbors(head);
        let next = adj[..count as usize]
            .iter()
            .copied()
            .find(|&nt| is_link(nt) && !failed.contains(&nt) && !stack.contains(&nt));
        match next {
            Some(nt) => stack.push(nt),
            None => {
                failed.insert(head);
                stack.pop();
            }
        }
    }

    for coord in stack {
        update.set(coord, TileState::new(Some(player.id), true));
    }
    update
}

/// Validate destroy geometry and return the box corners (min, max).
///
/// The two non-base selections must sit at opposite corners of a 4x4
/// axis-aligned square, the whole box must share the owner of the first
/// non-base selection (an all-unowned box qualifies), and at least four
/// tiles bordering the box perimeter must belong to the acting player.
fn destroy_box(grid: &Grid, player: PlayerId, inputs: &[Coord]) -> Option<(Coord, Coord)> {
    let mut corners = inputs
        .iter()
        .copied()
        .filter(|&c| grid.get(c).is_some_and(|t| !t.is_base));
    let a = corners.next()?;
    let b = corners.next()?;

    if a.row.abs_diff(b.row) != VANQUISH_SIZE - 1 || a.col.abs_diff(b.col) != VANQUISH_SIZE - 1 {
        return None;
    }

    let min = Coord::new(a.row.min(b.row), a.col.min(b.col));
    let max = Coord::new(a.row.max(b.row), a.col.max(b.col));

    // The whole block must share one owner: that of the first corner.
    let block_owner = grid.get(a)?.owner;
    for row in min.row..=max.row {
        for col in min.col..=max.col {
            if let Some(tile) = grid.get(Coord::new(row, col))
                && tile.owner != block_owner
            {
                return None;
            }
        }
    }

    // Count the player's tiles immediately bordering the box perimeter.
    let mut supporters = 0u32;
    let owned = |coord: Option<Coord>| -> bool {
        coord
            .and_then(|c| grid.get(c))
            .is_some_and(|t| t.owner == Some(player))
    };
    for row in min.row..=max.row {
        if owned(min.col.checked_sub(1).map(|c| Coord::new(row, c))) {
            supporters += 1;
        }
        if owned(Some(Coord::new(row, max.col + 1))) {
            supporters += 1;
        }
    }
    for col in min.col..=max.col {
        if owned(min.row.checked_sub(1).map(|r| Coord::new(r, col))) {
            supporters += 1;
        }
        if owned(Some(Coord::new(max.row + 1, col))) {
            supporters += 1;
        }
    }

    if supporters >= u32::from(VANQUISH_SIZE) {
        Some((min, max))
    } else {
        None
    }
}

/// Destroy: reset every tile in the validated box to unowned non-base.
fn destroy(min: Coord, max: Coord) -> Update {
    let mut update = Update::new();
    for row in min.row..=max.row {
        for col in min.col..=max.col {
            update.set(Coord::new(row, col), TileState::cleared());
        }
    }
    update
}
