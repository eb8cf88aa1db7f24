#![no_main]

use arbitrary::Arbitrary;
use conquid::game::{Coord, PlayerStyle};
use conquid::rhythm::{Cue, RhythmClock, RhythmTrack};
use conquid::Board;
use libfuzzer_sys::fuzz_target;

/// Structured input for clock fuzzing: arbitrary pattern strings, an
/// interval, and a scripted sequence of checkpoint delays.
#[derive(Arbitrary, Debug)]
struct ClockInput {
    routine: String,
    pulse: String,
    interval_ms: u16,
    checkpoints: Vec<u16>,
}

struct ScriptedTrack {
    checkpoints: Vec<u16>,
    next: usize,
    started: bool,
}

impl RhythmTrack for ScriptedTrack {
    fn next_checkpoint(&mut self) -> u64 {
        let delay = self.checkpoints.get(self.next).copied().unwrap_or(125);
        self.next += 1;
        u64::from(delay)
    }

    fn has_started(&self) -> bool {
        self.started
    }

    fn start(&mut self) {
        self.started = true;
    }

    fn cue(&mut self, _cue: Cue) {}
}

fuzz_target!(|input: ClockInput| {
    let Ok(mut clock) = RhythmClock::new(
        &input.routine,
        &input.pulse,
        u64::from(input.interval_ms),
    ) else {
        // Malformed patterns and zero intervals must be rejected, not
        // panic.
        return;
    };

    let styles = [
        PlayerStyle::new("red", "maroon", "orange"),
        PlayerStyle::new("blue", "navy", "cyan"),
    ];
    let Ok(mut board) = Board::new(28, 14, styles) else {
        return;
    };

    let mut track = ScriptedTrack {
        checkpoints: input.checkpoints,
        next: 0,
        started: false,
    };

    let ticks = (track.checkpoints.len() + 8).min(512);
    for _ in 0..ticks {
        board.deliver_input(Coord::new(0, 0));
        let report = clock.tick(&mut board, &mut track);

        // A submit beat never also carries a cue.
        if report.submit_beat {
            assert!(report.cue.is_none());
        }
        // The next delay is bounded by one interval past the reported
        // checkpoint.
        let max = u64::from(input.interval_ms) + u64::from(u16::MAX);
        assert!(report.next_delay.as_millis() as u64 <= max);
        // Acceptance reported by the tick matches the clock state.
        assert_eq!(report.accepting, clock.accepting());
    }
});
