//! Patterns command implementation - beat-by-beat clock dry run.

use super::CliError;
use conquid::config::GameConfig;
use conquid::rhythm::{Cue, Metronome, RhythmClock};
use conquid::Session;

/// Execute the patterns command.
///
/// Ticks a throwaway game through the given patterns and prints one
/// line per tick, so a pattern author can see where the acceptance
/// windows, cues, and submit beats fall.
///
/// # Errors
///
/// Returns an error for malformed patterns or a zero interval.
pub(crate) fn execute(
    routine: &str,
    pulse: &str,
    interval: u64,
    ticks: Option<usize>,
) -> Result<(), CliError> {
    // Validate before building the session so pattern errors surface
    // with the offending string.
    let clock = RhythmClock::new(routine, pulse, interval)
        .map_err(|e| CliError::new(format!("bad patterns {routine:?} / {pulse:?}: {e}")))?;

    // One full super-cycle covers every (pulse, routine) combination.
    let boundaries = pulse.matches('=').count().max(1);
    let default_ticks = clock.pulse().len() * clock.routine().len() / boundaries + 1;
    let ticks = ticks.unwrap_or(default_ticks);

    let config = GameConfig {
        routine: routine.to_string(),
        pulse: pulse.to_string(),
        pulse_ms: interval,
        ..GameConfig::default()
    };

    let track = Metronome::new(interval, config.track_offset_ms)?;
    let mut session = Session::new(&config, track)?;

    println!("routine {routine:?}  pulse {pulse:?}  interval {interval}ms");
    println!("{:>5}  {:>6}  {:>8}  window  event", "tick", "pulse", "routine");

    for n in 1..=ticks {
        let report = session.tick();
        let pulse_ch = session.clock().pulse().current().as_char();
        let routine_ch = session.clock().routine().current().as_char();
        let window = if report.accepting { "open" } else { "-" };
        let event = if report.submit_beat {
            "submit"
        } else {
            match report.cue {
                Some(Cue::Affirmative) => "cue+",
                Some(Cue::Negative) => "cue-",
                None => "",
            }
        };
        println!("{n:>5}  {pulse_ch:>6}  {routine_ch:>8}  {window:>6}  {event}");
    }

    Ok(())
}
