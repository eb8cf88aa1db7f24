//! Property-based tests for the rules engine.
//!
//! Run with: cargo test prop_rules

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::cast_lossless)]

use proptest::prelude::*;

use conquid::game::{
    check_invariants, resolve, Coord, Grid, Player, PlayerStyle, TileState, Update,
};
use conquid::{Board, MoveKind};

fn styles() -> [PlayerStyle; 2] {
    [
        PlayerStyle::new("red", "maroon", "orange"),
        PlayerStyle::new("blue", "navy", "cyan"),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Adjacency is symmetric on any grid size.
    #[test]
    fn prop_adjacency_symmetric(
        (width, height, row, col) in (1u16..64, 1u16..64)
            .prop_flat_map(|(w, h)| (Just(w), Just(h), 0..h, 0..w)),
    ) {
        let coord = Coord::new(row, col);
        let (adj, count) = coord.adjacent(width, height);
        for &n in &adj[..count as usize] {
            let (back, back_count) = n.adjacent(width, height);
            prop_assert!(back[..back_count as usize].contains(&coord));
        }
    }

    /// Three distinct blank selections always resolve to a claim that
    /// grants exactly those tiles as plain territory.
    #[test]
    fn prop_blank_triple_claims(
        cols in proptest::collection::btree_set(0u16..28, 3),
    ) {
        let grid = Grid::new(28, 14).unwrap();
        let player = Player::new(1, styles()[0].clone());
        let inputs: Vec<Coord> = cols.iter().map(|&c| Coord::new(0, c)).collect();

        let (kind, update) = resolve(&grid, &player, &inputs);
        prop_assert_eq!(kind, MoveKind::Claim);
        prop_assert_eq!(update.len(), 3);
        for coord in &inputs {
            prop_assert_eq!(
                update.get(*coord),
                Some(TileState::new(Some(1), false))
            );
        }
    }

    /// Resolution never writes outside the grid, whatever the inputs.
    #[test]
    fn prop_resolution_stays_in_bounds(
        coords in proptest::collection::vec((0u16..40, 0u16..40), 3),
    ) {
        let grid = Grid::new(28, 14).unwrap();
        let player = Player::new(1, styles()[0].clone());
        let inputs: Vec<Coord> = coords.iter().map(|&(r, c)| Coord::new(r, c)).collect();

        let (_, update) = resolve(&grid, &player, &inputs);
        for (coord, _) in update.iter() {
            prop_assert!(grid.in_bounds(coord));
        }
    }

    /// A destroy box whose corner deltas are not exactly 3 on both axes
    /// never fires.
    #[test]
    fn prop_destroy_geometry_enforced(
        r0 in 0u16..10,
        c0 in 0u16..10,
        dr in 0u16..6,
        dc in 0u16..6,
    ) {
        prop_assume!(dr != 3 || dc != 3);
        prop_assume!(dr != 0 || dc != 0);

        let mut grid = Grid::new(28, 14).unwrap();
        let mut player = Player::new(1, styles()[0].clone());
        // Give the attacker a base tile to select.
        let base = Coord::new(13, 27);
        grid.set(base, conquid::Tile::base(Some(1)));
        player.add_base(base);
        // Opposing turf at both corner selections.
        let a = Coord::new(r0, c0);
        let b = Coord::new(r0 + dr, c0 + dc);
        grid.set(a, conquid::Tile::turf(2));
        grid.set(b, conquid::Tile::turf(2));

        let (kind, update) = resolve(&grid, &player, &[a, b, base]);
        prop_assert_eq!(kind, MoveKind::Skip);
        prop_assert!(update.is_empty());
    }

    /// The turn counter increases by exactly one per submission and the
    /// invariants hold throughout, for any input stream.
    #[test]
    fn prop_turn_monotonic_and_invariants(
        inputs in proptest::collection::vec((0u16..20, 0u16..32, any::<bool>()), 0..60),
    ) {
        let mut board = Board::new(28, 14, styles()).unwrap();
        let mut submissions = 0u32;

        for (row, col, submit) in inputs {
            board.deliver_input(Coord::new(row, col));
            if submit {
                board.submit_move();
                submissions += 1;
                prop_assert_eq!(board.turn(), submissions);
            }
        }
        prop_assert!(check_invariants(&board).is_empty());
    }

    /// Applying the same update twice leaves the grid unchanged.
    #[test]
    fn prop_apply_update_idempotent(
        writes in proptest::collection::vec(
            (0u16..14, 0u16..28, proptest::option::of(1u8..=2), any::<bool>()),
            1..20,
        ),
    ) {
        let mut board = Board::new(28, 14, styles()).unwrap();
        let mut update = Update::new();
        for &(row, col, owner, is_base) in &writes {
            update.set(Coord::new(row, col), TileState::new(owner, is_base));
        }

        board.apply_update(update.clone());
        let snapshot: Vec<_> = board.grid().iter().map(|(_, t)| *t).collect();
        board.apply_update(update);
        let again: Vec<_> = board.grid().iter().map(|(_, t)| *t).collect();
        prop_assert_eq!(snapshot, again);
    }
}
