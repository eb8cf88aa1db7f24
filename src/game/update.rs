//! Board updates and the per-turn move.

use std::collections::BTreeMap;

use crate::game::{Coord, PlayerId};

/// Number of tile selections per turn.
pub const SUBMIT_LENGTH: usize = 3;

/// The (owner, is_base) pair a tile is assigned by an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileState {
    /// New owner (`None` = unowned).
    pub owner: Option<PlayerId>,
    /// New base flag.
    pub is_base: bool,
}

impl TileState {
    /// Create a tile state.
    #[must_use]
    pub const fn new(owner: Option<PlayerId>, is_base: bool) -> Self {
        Self { owner, is_base }
    }

    /// The cleared state: unowned, non-base.
    #[must_use]
    pub const fn cleared() -> Self {
        Self {
            owner: None,
            is_base: false,
        }
    }
}

/// One atomic change to the board: a map from tile to new state.
///
/// Immutable once computed; applied tile-by-tile on commit. Assigning a
/// coordinate twice collapses to the last assignment, so duplicate
/// selections within a move simply merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Update {
    entries: BTreeMap<Coord, TileState>,
}

impl Update {
    /// Create an empty update.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Assign a new state to a tile, overwriting any earlier assignment.
    pub fn set(&mut self, coord: Coord, state: TileState) {
        self.entries.insert(coord, state);
    }

    /// Look up the pending state for a tile.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<TileState> {
        self.entries.get(&coord).copied()
    }

    /// Whether the update touches a tile.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.entries.contains_key(&coord)
    }

    /// Whether the update changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of tiles touched.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over (tile, new state) pairs in coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, TileState)> + '_ {
        self.entries.iter().map(|(&c, &s)| (c, s))
    }
}

/// The kind of move a completed input sequence classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Claim three unowned tiles.
    Claim,
    /// Flood-convert surrounded enemy territory.
    Expand,
    /// Path-search a new base corridor toward a foreign base.
    Bridge,
    /// Clear a uniform 4x4 block.
    Destroy,
    /// No rule matched; the turn is consumed with no effect.
    Skip,
}

impl MoveKind {
    /// Short display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            MoveKind::Claim => "claim",
            MoveKind::Expand => "expand",
            MoveKind::Bridge => "bridge",
            MoveKind::Destroy => "destroy",
            MoveKind::Skip => "skip",
        }
    }
}

/// The transient per-turn move: acting player, collected selections,
/// and the computed update once three selections are present.
#[derive(Debug, Clone)]
pub struct Move {
    player: PlayerId,
    inputs: Vec<Coord>,
    resolved: Option<(MoveKind, Update)>,
}

impl Move {
    /// Open a fresh move for a player.
    #[must_use]
    pub const fn new(player: PlayerId) -> Self {
        Self {
            player,
            inputs: Vec::new(),
            resolved: None,
        }
    }

    /// The acting player.
    #[must_use]
    pub const fn player(&self) -> PlayerId {
        self.player
    }

    /// Selections collected so far, in click order.
    #[must_use]
    pub fn inputs(&self) -> &[Coord] {
        &self.inputs
    }

    /// Record a selection. Selections past the third are ignored; a move
    /// holds at most [`SUBMIT_LENGTH`] inputs.
    pub fn push_input(&mut self, coord: Coord) {
        if self.inputs.len() < SUBMIT_LENGTH {
            self.inputs.push(coord);
        }
    }

    /// Whether the move has collected all of its selections.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.inputs.len() >= SUBMIT_LENGTH
    }

    /// Attach the resolved classification and update.
    pub fn finalize(&mut self, kind: MoveKind, update: Update) {
        self.resolved = Some((kind, update));
    }

    /// The resolved classification, if the move has been finalized.
    #[must_use]
    pub fn kind(&self) -> Option<MoveKind> {
        self.resolved.as_ref().map(|(k, _)| *k)
    }

    /// Consume the move, yielding its resolution if finalized.
    #[must_use]
    pub fn into_resolution(self) -> Option<(MoveKind, Update)> {
        self.resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_collapses_duplicates() {
        let mut update = Update::new();
        let c = Coord::new(2, 3);
        update.set(c, TileState::new(Some(1), false));
        update.set(c, TileState::new(Some(1), false));
        assert_eq!(update.len(), 1);
        assert_eq!(update.get(c), Some(TileState::new(Some(1), false)));
    }

    #[test]
    fn test_update_last_write_wins() {
        let mut update = Update::new();
        let c = Coord::new(0, 0);
        update.set(c, TileState::new(Some(1), true));
        update.set(c, TileState::cleared());
        assert_eq!(update.get(c), Some(TileState::cleared()));
    }

    #[test]
    fn test_move_caps_inputs() {
        let mut mv = Move::new(1);
        for col in 0..5 {
            mv.push_input(Coord::new(0, col));
        }
        assert_eq!(mv.inputs().len(), SUBMIT_LENGTH);
        assert!(mv.is_complete());
    }

    #[test]
    fn test_move_lifecycle() {
        let mut mv = Move::new(2);
        assert!(!mv.is_complete());
        assert!(mv.kind().is_none());

        mv.push_input(Coord::new(0, 0));
        mv.push_input(Coord::new(0, 1));
        mv.push_input(Coord::new(0, 2));
        assert!(mv.is_complete());

        mv.finalize(MoveKind::Claim, Update::new());
        assert_eq!(mv.kind(), Some(MoveKind::Claim));
    }
}
