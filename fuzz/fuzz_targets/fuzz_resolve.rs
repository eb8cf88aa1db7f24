#![no_main]

use arbitrary::Arbitrary;
use conquid::game::{check_invariants, Coord, PlayerStyle, TileState, Update};
use conquid::Board;
use libfuzzer_sys::fuzz_target;

/// Structured input for resolver fuzzing: an arbitrary board painting
/// followed by an arbitrary stream of selections and submissions.
#[derive(Arbitrary, Debug)]
struct ResolveInput {
    /// Tiles to paint before play: (row, col, owner, is_base).
    paint: Vec<(u8, u8, Option<u8>, bool)>,
    /// Selections to deliver, with a submit flag after each.
    plays: Vec<(u8, u8, bool)>,
}

fuzz_target!(|input: ResolveInput| {
    let styles = [
        PlayerStyle::new("red", "maroon", "orange"),
        PlayerStyle::new("blue", "navy", "cyan"),
    ];
    let Ok(mut board) = Board::new(28, 14, styles) else {
        return;
    };

    // Cap the painting to avoid degenerate huge updates
    let mut paint = Update::new();
    for &(row, col, owner, is_base) in input.paint.iter().take(256) {
        let owner = owner.map(|o| o % 2 + 1);
        paint.set(
            Coord::new(u16::from(row), u16::from(col)),
            TileState::new(owner, is_base),
        );
    }
    board.apply_update(paint);

    for &(row, col, submit) in input.plays.iter().take(256) {
        board.deliver_input(Coord::new(u16::from(row), u16::from(col)));
        if submit {
            let turn_before = board.turn();
            board.submit_move();
            assert_eq!(board.turn(), turn_before + 1);
        }
    }

    // Every resolver-produced update must land inside the grid. The
    // first two history entries are the setup and the fuzz painting,
    // which may contain out-of-bounds writes by construction.
    for update in board.history().iter().skip(2) {
        for (coord, _) in update.iter() {
            assert!(board.grid().in_bounds(coord));
        }
    }
    assert!(check_invariants(&board).is_empty());
});
