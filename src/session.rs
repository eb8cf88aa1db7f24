//! A running game session.
//!
//! Wires the board to the rhythm clock and a timing source, and applies
//! the input gate: tile activations reach the board only while the
//! clock's acceptance window is open.

use crate::config::GameConfig;
use crate::error::{SetupError, SetupResult};
use crate::game::{Board, Coord, PlayerStyle, TileChange};
use crate::rhythm::{RhythmClock, RhythmTrack, TickReport};

/// A board, a clock, and the timing source driving them.
#[derive(Debug)]
pub struct Session<T: RhythmTrack> {
    board: Board,
    clock: RhythmClock,
    track: T,
}

impl<T: RhythmTrack> Session<T> {
    /// Build a session from a configuration and a timing source.
    ///
    /// # Errors
    ///
    /// Returns a [`SetupError`] for a bad grid size, malformed
    /// patterns, a zero interval, or a player list that is not exactly
    /// two entries.
    pub fn new(config: &GameConfig, track: T) -> SetupResult<Self> {
        let styles: [PlayerStyle; 2] = config
            .players
            .clone()
            .try_into()
            .map_err(|v: Vec<PlayerStyle>| SetupError::PlayerCount(v.len()))?;
        let board = Board::new(config.width, config.height, styles)?;
        let clock = RhythmClock::new(&config.routine, &config.pulse, config.pulse_ms)?;
        Ok(Self {
            board,
            clock,
            track,
        })
    }

    /// The board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The rhythm clock.
    #[must_use]
    pub const fn clock(&self) -> &RhythmClock {
        &self.clock
    }

    /// Whether tile activations are currently accepted.
    #[must_use]
    pub const fn accepting(&self) -> bool {
        self.clock.accepting()
    }

    /// Advance the session by one clock tick.
    pub fn tick(&mut self) -> TickReport {
        self.clock.tick(&mut self.board, &mut self.track)
    }

    /// A tile was activated by the acting player.
    ///
    /// Dropped silently when the acceptance window is closed; otherwise
    /// forwarded to the board as the next selection of the in-progress
    /// move. Returns whether the activation was accepted.
    pub fn tile_activated(&mut self, coord: Coord) -> bool {
        if !self.clock.accepting() {
            return false;
        }
        self.board.deliver_input(coord);
        true
    }

    /// Drain pending tile-changed notifications from the board.
    pub fn drain_changes(&mut self) -> Vec<TileChange> {
        self.board.drain_changes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rhythm::Cue;

    #[derive(Debug)]
    struct StillTrack;

    impl RhythmTrack for StillTrack {
        fn next_checkpoint(&mut self) -> u64 {
            125
        }

        fn has_started(&self) -> bool {
            true
        }

        fn start(&mut self) {}

        fn cue(&mut self, _cue: Cue) {}
    }

    #[test]
    fn test_player_count_enforced() {
        let mut config = GameConfig::default();
        config.players.pop();
        let err = Session::new(&config, StillTrack).unwrap_err();
        assert_eq!(err, SetupError::PlayerCount(1));
    }

    #[test]
    fn test_activation_dropped_while_closed() {
        let config = GameConfig::default();
        let mut session = Session::new(&config, StillTrack).unwrap();

        // Fresh clock: routine still at its initial reject symbol.
        assert!(!session.accepting());
        assert!(!session.tile_activated(Coord::new(0, 0)));
        assert!(session.board().current_move().inputs().is_empty());
    }

    #[test]
    fn test_activation_forwarded_while_open() {
        let config = GameConfig::default();
        let mut session = Session::new(&config, StillTrack).unwrap();

        // Default patterns: the first boundary tick opens the window
        // after seven pulse beats (routine "+++=--", pulse "=++++++-",
        // startup skips pulse slot 0).
        for _ in 0..64 {
            if session.accepting() {
                break;
            }
            session.tick();
        }
        assert!(session.accepting());
        assert!(session.tile_activated(Coord::new(0, 0)));
        assert_eq!(session.board().current_move().inputs().len(), 1);
    }
}
