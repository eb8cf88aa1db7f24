//! Rhythm timing: beat patterns, the tick state machine, and the
//! external timing source it re-synchronizes against.

mod clock;
mod pattern;
mod track;

pub use clock::{next_tick_delay, RhythmClock, TickReport};
pub use pattern::{BeatPattern, BeatSymbol};
pub use track::{Cue, Metronome, RhythmTrack};
