//! The rhythm clock state machine.
//!
//! Two nested cyclic beat sequences drive the game: the pulse advances
//! on every tick, and each pulse boundary beat advances the routine.
//! Routine submit beats commit the current move; every other routine
//! beat emits a cue to the audio collaborator. Input is accepted only
//! while the pulse and routine symbols are both `+`.

use std::time::Duration;

use crate::error::SetupResult;
use crate::game::{Board, MoveKind};
use crate::rhythm::{BeatPattern, BeatSymbol, Cue, RhythmTrack};

/// What one clock tick observed and did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Whether input is accepted until the next tick.
    pub accepting: bool,
    /// Background flash flag, display only.
    pub flash: bool,
    /// Cue emitted on a routine boundary, if any.
    pub cue: Option<Cue>,
    /// Whether this tick fell on a routine submit beat.
    pub submit_beat: bool,
    /// Kind of the move committed by a submit beat, if one was pending.
    pub committed: Option<MoveKind>,
    /// Delay until the next tick, re-synchronized to the timing source.
    pub next_delay: Duration,
}

/// The periodic state machine gating input and driving submission.
///
/// The clock has no terminal state; once started it runs until the
/// process stops.
#[derive(Debug, Clone)]
pub struct RhythmClock {
    routine: BeatPattern,
    pulse: BeatPattern,
    interval_ms: u64,
    flash: bool,
}

impl RhythmClock {
    /// Build a clock from compact pattern strings and the nominal tick
    /// interval in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::SetupError`] for malformed patterns or
    /// a zero interval.
    pub fn new(routine: &str, pulse: &str, interval_ms: u64) -> SetupResult<Self> {
        if interval_ms == 0 {
            return Err(crate::error::SetupError::ZeroInterval);
        }
        let routine = BeatPattern::parse(routine)?;
        let mut pulse = BeatPattern::parse(pulse)?;
        // The clock starts mid-slot: the first tick reads pulse index
        // 1, and the skipped slot is consumed on wrap.
        pulse.skip(1);
        Ok(Self {
            routine,
            pulse,
            interval_ms,
            flash: false,
        })
    }

    /// The routine pattern.
    #[must_use]
    pub const fn routine(&self) -> &BeatPattern {
        &self.routine
    }

    /// The pulse pattern.
    #[must_use]
    pub const fn pulse(&self) -> &BeatPattern {
        &self.pulse
    }

    /// Nominal tick interval in milliseconds.
    #[must_use]
    pub const fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Whether input is accepted: the current pulse and routine symbols
    /// are both `+`. Governs input gating for the whole interval until
    /// the next tick.
    #[must_use]
    pub const fn accepting(&self) -> bool {
        matches!(self.pulse.current(), BeatSymbol::Accept)
            && matches!(self.routine.current(), BeatSymbol::Accept)
    }

    /// Advance the clock by one tick.
    ///
    /// Starts the timing source on the very first tick, advances the
    /// beat state, submits the board's move on a routine submit beat,
    /// flashes the acting player's bases while accepting, and computes
    /// the re-synchronized delay until the next tick.
    pub fn tick(&mut self, board: &mut Board, track: &mut dyn RhythmTrack) -> TickReport {
        if !track.has_started() {
            track.start();
        }

        let p_beat = self.pulse.advance();
        let mut cue = None;
        let mut submit_beat = false;
        let mut committed = None;

        if p_beat == BeatSymbol::Submit {
            match self.routine.advance() {
                BeatSymbol::Submit => {
                    submit_beat = true;
                    committed = board.submit_move();
                }
                BeatSymbol::Accept => {
                    cue = Some(Cue::Affirmative);
                    track.cue(Cue::Affirmative);
                }
                BeatSymbol::Reject => {
                    cue = Some(Cue::Negative);
                    track.cue(Cue::Negative);
                }
            }
        }

        // Background flash toggles on pulse transitions.
        match p_beat {
            BeatSymbol::Accept if !self.flash => self.flash = true,
            BeatSymbol::Reject if self.flash => self.flash = false,
            _ => {}
        }

        let accepting = self.accepting();
        let acting = board.current_player();
        board.set_base_flash(acting, accepting);

        let next_delay = Duration::from_millis(next_tick_delay(
            self.interval_ms,
            track.next_checkpoint(),
        ));

        TickReport {
            accepting,
            flash: self.flash,
            cue,
            submit_beat,
            committed,
            next_delay,
        }
    }
}

/// Delay until the next tick, given the timing source's reported delay
/// to its next checkpoint.
///
/// A checkpoint closer than half the nominal interval would double-fire
/// within one beat (the playback position is quantized), so the tick is
/// pushed a full interval past it; otherwise the checkpoint delay is
/// used as-is.
#[must_use]
pub const fn next_tick_delay(interval_ms: u64, checkpoint_ms: u64) -> u64 {
    // Doubled comparison keeps the exact half-interval threshold
    // without integer truncation.
    if checkpoint_ms * 2 < interval_ms {
        interval_ms + checkpoint_ms
    } else {
        checkpoint_ms
    }
}
