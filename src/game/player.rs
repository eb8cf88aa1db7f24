//! Player state management.

use serde::{Deserialize, Serialize};

use crate::game::Coord;

/// Unique identifier for a player.
pub type PlayerId = u8;

/// Display styling for a player's tiles.
///
/// Opaque to the rules engine; the rendering collaborator maps these
/// names to concrete colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStyle {
    /// Color name for ordinary territory tiles.
    pub territory: String,
    /// Color name for base tiles.
    pub base: String,
    /// Color name while the player's bases flash.
    pub flash: String,
}

impl PlayerStyle {
    /// Create a style from three color names.
    #[must_use]
    pub fn new(territory: &str, base: &str, flash: &str) -> Self {
        Self {
            territory: territory.to_string(),
            base: base.to_string(),
            flash: flash.to_string(),
        }
    }
}

/// State for a single player.
#[derive(Debug, Clone)]
pub struct Player {
    /// Unique identifier for this player.
    pub id: PlayerId,
    /// Display styling tag, consumed only by the renderer.
    pub style: PlayerStyle,
    /// Tiles forming this player's base, in placement order.
    ///
    /// Always a subset of the tiles with `owner == id` and `is_base`.
    /// Populated at setup and extended by committed bridge moves.
    pub base: Vec<Coord>,
}

impl Player {
    /// Create a new player with an empty base.
    #[must_use]
    pub const fn new(id: PlayerId, style: PlayerStyle) -> Self {
        Self {
            id,
            style,
            base: Vec::new(),
        }
    }

    /// Record a coordinate as part of this player's base.
    ///
    /// Duplicates are ignored so the list stays a set.
    pub fn add_base(&mut self, coord: Coord) {
        if !self.base.contains(&coord) {
            self.base.push(coord);
        }
    }

    /// Remove a coordinate from this player's base, if present.
    pub fn remove_base(&mut self, coord: Coord) {
        self.base.retain(|&c| c != coord);
    }

    /// Whether the coordinate is part of this player's base.
    #[must_use]
    pub fn has_base(&self, coord: Coord) -> bool {
        self.base.contains(&coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> PlayerStyle {
        PlayerStyle::new("red", "maroon", "orange")
    }

    #[test]
    fn test_player_creation() {
        let player = Player::new(1, style());
        assert_eq!(player.id, 1);
        assert!(player.base.is_empty());
    }

    #[test]
    fn test_add_base_dedupes() {
        let mut player = Player::new(1, style());
        player.add_base(Coord::new(6, 4));
        player.add_base(Coord::new(6, 5));
        player.add_base(Coord::new(6, 4));
        assert_eq!(player.base.len(), 2);
        assert!(player.has_base(Coord::new(6, 5)));
    }

    #[test]
    fn test_remove_base() {
        let mut player = Player::new(1, style());
        player.add_base(Coord::new(6, 4));
        player.remove_base(Coord::new(6, 4));
        assert!(!player.has_base(Coord::new(6, 4)));
    }
}
