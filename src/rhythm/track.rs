//! Timing source adapter.
//!
//! The rhythm clock never reads wall time directly; it re-synchronizes
//! against an external playback position through this trait. Audio
//! playback itself is out of scope - only the timing values it reports
//! are consumed, and cues are fire-and-forget notifications back to the
//! collaborator.

use std::time::Instant;

use crate::error::{SetupError, SetupResult};

/// A fire-and-forget sound trigger emitted on routine-boundary ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// The upcoming routine beats accept input.
    Affirmative,
    /// The upcoming routine beats reject input.
    Negative,
}

/// External timing collaborator driving the rhythm clock.
pub trait RhythmTrack {
    /// Milliseconds until the next beat checkpoint of the backing
    /// playback position.
    fn next_checkpoint(&mut self) -> u64;

    /// Whether continuous playback has been started.
    fn has_started(&self) -> bool;

    /// Begin continuous playback. Called once, on the very first tick.
    fn start(&mut self);

    /// Receive a cue. Default: ignore it.
    fn cue(&mut self, cue: Cue) {
        let _ = cue;
    }
}

/// A timing source backed by the process clock.
///
/// Stands in for an audio track: the playback position is the elapsed
/// time since [`start`] plus a fixed offset, and checkpoints fall every
/// `interval_ms` of that position.
///
/// [`start`]: RhythmTrack::start
#[derive(Debug, Clone, Copy)]
pub struct Metronome {
    interval_ms: u64,
    offset_ms: u64,
    started: Option<Instant>,
}

impl Metronome {
    /// Create a metronome with the given checkpoint interval and
    /// position offset.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::ZeroInterval`] if `interval_ms` is zero.
    pub const fn new(interval_ms: u64, offset_ms: u64) -> SetupResult<Self> {
        if interval_ms == 0 {
            return Err(SetupError::ZeroInterval);
        }
        Ok(Self {
            interval_ms,
            offset_ms,
            started: None,
        })
    }
}

impl RhythmTrack for Metronome {
    #[allow(clippy::cast_possible_truncation)] // elapsed millis fit u64
    fn next_checkpoint(&mut self) -> u64 {
        match self.started {
            Some(t0) => {
                let position = t0.elapsed().as_millis() as u64 + self.offset_ms;
                self.interval_ms - (position % self.interval_ms)
            }
            None => self.interval_ms,
        }
    }

    fn has_started(&self) -> bool {
        self.started.is_some()
    }

    fn start(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_interval_rejected() {
        assert_eq!(
            Metronome::new(0, 0).unwrap_err(),
            SetupError::ZeroInterval
        );
    }

    #[test]
    fn test_metronome_is_copy() {
        let m = Metronome::new(125, 0).unwrap();
        let copied = m;
        // The original stays usable after the copy.
        assert_eq!(m.interval_ms, copied.interval_ms);
    }

    #[test]
    fn test_start_latches() {
        let mut m = Metronome::new(125, 0).unwrap();
        assert!(!m.has_started());
        m.start();
        assert!(m.has_started());
        let first = m.started;
        m.start();
        assert_eq!(m.started, first);
    }

    #[test]
    fn test_checkpoint_bounded_by_interval() {
        let mut m = Metronome::new(125, 0).unwrap();
        assert_eq!(m.next_checkpoint(), 125);
        m.start();
        let d = m.next_checkpoint();
        assert!(d >= 1 && d <= 125, "checkpoint delay {d} out of range");
    }
}
