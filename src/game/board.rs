//! Board state management.
//!
//! The board aggregates the tile grid, the players in turn order, the
//! turn counter, the append-only update history, and the single
//! in-progress move. All "current move" and "current player" state is
//! explicit here and handed to the resolver by reference, never ambient.

use crate::error::{SetupError, SetupResult};
use crate::game::{
    resolve, Coord, Grid, Move, MoveKind, Player, PlayerId, PlayerStyle, Tile, TileState, Update,
};

/// A committed tile change, observable by the rendering collaborator.
///
/// The renderer maps this to a display color: flash-color if flashing,
/// else base-color if a base, else territory-color if owned, else the
/// neutral color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileChange {
    /// The tile that changed.
    pub coord: Coord,
    /// New owner, or `None` if unowned.
    pub owner: Option<PlayerId>,
    /// New base flag.
    pub is_base: bool,
    /// Transient flash flag, display only.
    pub flash: bool,
}

/// Complete board state for one game.
#[derive(Debug, Clone)]
pub struct Board {
    /// The tile grid.
    grid: Grid,
    /// Players in fixed turn order.
    players: Vec<Player>,
    /// Number of turns carried out. Strictly increases on every
    /// submission, whether or not the move changed ownership.
    turn: u32,
    /// Append-only history of committed updates.
    history: Vec<Update>,
    /// The single in-progress move for the current turn.
    current: Move,
    /// Pending tile-changed notifications, drained by the renderer.
    changes: Vec<TileChange>,
}

impl Board {
    /// Create a board with the fixed two-player base layout.
    ///
    /// Two 2x2 player base blocks sit at symmetric positions on the
    /// vertical midline, plus one unowned 2x2 neutral base block at the
    /// horizontal center, committed as the first history entry before
    /// any turn begins.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::GridTooSmall`] if the three base blocks do
    /// not fit disjointly.
    pub fn new(width: u16, height: u16, styles: [PlayerStyle; 2]) -> SetupResult<Self> {
        // Player blocks at columns 4..6 and mirrored, neutral block at
        // the center: disjoint from width 14 up.
        if width < 14 || height < 4 {
            return Err(SetupError::GridTooSmall { width, height });
        }
        let grid = Grid::new(width, height).ok_or(SetupError::GridTooSmall { width, height })?;

        let [first, second] = styles;
        let players = vec![Player::new(1, first), Player::new(2, second)];

        let mut board = Self {
            grid,
            players,
            turn: 0,
            history: Vec::new(),
            current: Move::new(1),
            changes: Vec::new(),
        };
        board.place_bases();
        Ok(board)
    }

    /// Commit the initial base blocks as the first update.
    fn place_bases(&mut self) {
        let width = self.grid.width();
        let top = self.grid.height() / 2 - 1;
        let center = width / 2 - 1;

        let mut initial = Update::new();
        for row in top..top + 2 {
            for col in 4..6 {
                initial.set(Coord::new(row, col), TileState::new(Some(1), true));
                initial.set(
                    Coord::new(row, width - col - 1),
                    TileState::new(Some(2), true),
                );
            }
            for col in center..center + 2 {
                initial.set(Coord::new(row, col), TileState::new(None, true));
            }
        }
        self.apply_update(initial);
    }

    /// The tile grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Bounds-checked tile lookup.
    #[must_use]
    pub fn tile_at(&self, row: u16, col: u16) -> Option<&Tile> {
        self.grid.get(Coord::new(row, col))
    }

    /// All players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Get a player by ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Number of turns carried out so far.
    #[must_use]
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    /// The committed update history, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Update] {
        &self.history
    }

    /// The in-progress move.
    #[must_use]
    pub const fn current_move(&self) -> &Move {
        &self.current
    }

    /// The player acting this turn.
    #[must_use]
    pub const fn current_player(&self) -> PlayerId {
        self.current.player()
    }

    /// Apply an update: append it to history and write every listed
    /// (owner, is_base) pair into the grid. Tiles absent from the map
    /// are untouched. Emits one [`TileChange`] per applied pair and
    /// keeps the players' base lists consistent with the grid.
    pub fn apply_update(&mut self, update: Update) {
        for (coord, state) in update.iter() {
            let applied = if let Some(tile) = self.grid.get_mut(coord) {
                tile.owner = state.owner;
                tile.is_base = state.is_base;
                tile.flash = false;
                true
            } else {
                false
            };
            if !applied {
                continue;
            }
            self.changes.push(TileChange {
                coord,
                owner: state.owner,
                is_base: state.is_base,
                flash: false,
            });
            for player in &mut self.players {
                if state.owner == Some(player.id) && state.is_base {
                    player.add_base(coord);
                } else {
                    player.remove_base(coord);
                }
            }
        }
        self.history.push(update);
    }

    /// Forward a tile selection to the in-progress move.
    ///
    /// Rhythm gating happens in the session layer; by the time a
    /// selection reaches the board it is accepted unconditionally.
    /// Out-of-bounds selections and selections past the third are
    /// dropped. When the third selection lands, the move is resolved
    /// and holds its pending update until submission.
    pub fn deliver_input(&mut self, coord: Coord) {
        if self.current.is_complete() || !self.grid.in_bounds(coord) {
            return;
        }
        self.current.push_input(coord);
        if self.current.is_complete() {
            let Some(player) = self.player(self.current.player()) else {
                return;
            };
            let (kind, update) = resolve(&self.grid, player, self.current.inputs());
            self.current.finalize(kind, update);
        }
    }

    /// Submit the current move. Called by the rhythm clock on a submit
    /// beat.
    ///
    /// A finalized move commits its update (an empty update still
    /// records a history entry for the turn); an incomplete move is
    /// discarded. The turn counter increments unconditionally and a
    /// fresh move opens for the next player in rotation.
    ///
    /// Returns the kind of the committed move, if one was committed.
    pub fn submit_move(&mut self) -> Option<MoveKind> {
        let next_placeholder = Move::new(self.current.player());
        let finished = std::mem::replace(&mut self.current, next_placeholder);

        let committed = match finished.into_resolution() {
            Some((kind, update)) => {
                self.apply_update(update);
                Some(kind)
            }
            None => None,
        };

        self.turn += 1;
        let idx = (self.turn as usize) % self.players.len();
        self.current = Move::new(self.players[idx].id);
        committed
    }

    /// Set or clear the flash flag on a player's base tiles.
    ///
    /// Display only; emits [`TileChange`] notifications on actual flips
    /// and never touches history.
    pub fn set_base_flash(&mut self, player: PlayerId, on: bool) {
        let coords: Vec<Coord> = self
            .player(player)
            .map(|p| p.base.clone())
            .unwrap_or_default();
        for coord in coords {
            if let Some(tile) = self.grid.get_mut(coord)
                && tile.flash != on
            {
                tile.flash = on;
                let change = TileChange {
                    coord,
                    owner: tile.owner,
                    is_base: tile.is_base,
                    flash: on,
                };
                self.changes.push(change);
            }
        }
    }

    /// Drain pending tile-changed notifications.
    pub fn drain_changes(&mut self) -> Vec<TileChange> {
        std::mem::take(&mut self.changes)
    }
}
