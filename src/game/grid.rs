//! Grid and tile types.

// Neighbor counts are u8 by construction
#![allow(clippy::cast_lossless)]

use crate::game::PlayerId;

/// A grid index (row, column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    /// Row index (0 at the top).
    pub row: u16,
    /// Column index (0 at the left).
    pub col: u16,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Get adjacent coordinates in a fixed order: up, down, left, right.
    ///
    /// Returns a fixed-size array and count to avoid heap allocation.
    /// The array contains valid coordinates in indices 0..count. The
    /// enumeration order is load-bearing for the bridge search, which
    /// always steps into the first viable neighbor.
    #[must_use]
    #[inline]
    pub fn adjacent(&self, width: u16, height: u16) -> ([Coord; 4], u8) {
        let mut result = [Coord::new(0, 0); 4];
        let mut count = 0u8;

        if self.row > 0 {
            result[count as usize] = Coord::new(self.row - 1, self.col); // up
            count += 1;
        }
        if self.row + 1 < height {
            result[count as usize] = Coord::new(self.row + 1, self.col); // down
            count += 1;
        }
        if self.col > 0 {
            result[count as usize] = Coord::new(self.row, self.col - 1); // left
            count += 1;
        }
        if self.col + 1 < width {
            result[count as usize] = Coord::new(self.row, self.col + 1); // right
            count += 1;
        }

        (result, count)
    }
}

/// A single tile on the grid.
///
/// Tiles are plain data; the rendering collaborator keeps a parallel
/// lookup keyed by the same grid index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Owner of this tile (`None` = unowned).
    pub owner: Option<PlayerId>,
    /// Whether the tile is a base (immovable, strategically significant).
    pub is_base: bool,
    /// Display-only flash flag; never consulted by the rules.
    pub flash: bool,
}

impl Tile {
    /// Create an unowned non-base tile.
    #[must_use]
    pub const fn blank() -> Self {
        Self {
            owner: None,
            is_base: false,
            flash: false,
        }
    }

    /// Create a base tile with the given owner (`None` = neutral base).
    #[must_use]
    pub const fn base(owner: Option<PlayerId>) -> Self {
        Self {
            owner,
            is_base: true,
            flash: false,
        }
    }

    /// Create a non-base territory tile owned by a player.
    #[must_use]
    pub const fn turf(owner: PlayerId) -> Self {
        Self {
            owner: Some(owner),
            is_base: false,
            flash: false,
        }
    }

    /// Whether the tile is unowned non-base ground.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.owner.is_none() && !self.is_base
    }
}

/// The tile grid.
///
/// Tiles are stored row-major in a flat arena; adjacency is derived from
/// the index geometry and is symmetric and immutable by construction.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Width of the grid in tiles.
    width: u16,
    /// Height of the grid in tiles.
    height: u16,
    /// Tiles stored in row-major order.
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a new grid filled with blank tiles.
    ///
    /// Returns `None` if width or height is zero.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }

        let size = usize::from(width) * usize::from(height);
        let tiles = vec![Tile::blank(); size];

        Some(Self {
            width,
            height,
            tiles,
        })
    }

    /// Get the width of the grid.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the height of the grid.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Check if a coordinate is within the grid bounds.
    #[must_use]
    pub const fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    /// Convert a coordinate to an index into the tiles array.
    fn coord_to_index(&self, coord: Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(usize::from(coord.row) * usize::from(self.width) + usize::from(coord.col))
        } else {
            None
        }
    }

    /// Get a reference to the tile at the given coordinate.
    ///
    /// Returns `None` outside `[0, height) x [0, width)` rather than failing.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<&Tile> {
        self.coord_to_index(coord).map(|idx| &self.tiles[idx])
    }

    /// Get a mutable reference to the tile at the given coordinate.
    #[must_use]
    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Tile> {
        self.coord_to_index(coord).map(|idx| &mut self.tiles[idx])
    }

    /// Set the tile at the given coordinate.
    ///
    /// Returns `false` if the coordinate is out of bounds.
    pub fn set(&mut self, coord: Coord, tile: Tile) -> bool {
        if let Some(idx) = self.coord_to_index(coord) {
            self.tiles[idx] = tile;
            true
        } else {
            false
        }
    }

    /// Neighbors of a coordinate, clipped to the grid, in the fixed
    /// up/down/left/right order.
    #[must_use]
    pub fn neighbors(&self, coord: Coord) -> ([Coord; 4], u8) {
        coord.adjacent(self.width, self.height)
    }

    /// Iterate over all coordinates and tiles in row-major order.
    #[allow(clippy::cast_possible_truncation)] // indices derive from u16 dimensions
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Tile)> {
        self.tiles.iter().enumerate().map(|(idx, tile)| {
            let row = (idx / usize::from(self.width)) as u16;
            let col = (idx % usize::from(self.width)) as u16;
            (Coord::new(row, col), tile)
        })
    }

    /// Count tiles owned by a player.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // tile count fits u32
    pub fn count_owned(&self, player: PlayerId) -> u32 {
        self.iter()
            .filter(|(_, tile)| tile.owner == Some(player))
            .count() as u32
    }

    /// Count base tiles owned by a player.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // tile count fits u32
    pub fn count_bases(&self, player: PlayerId) -> u32 {
        self.iter()
            .filter(|(_, tile)| tile.owner == Some(player) && tile.is_base)
            .count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_adjacent() {
        let coord = Coord::new(5, 5);
        let (adj, count) = coord.adjacent(10, 10);
        let adj_slice = &adj[..count as usize];
        assert_eq!(count, 4);
        assert_eq!(adj_slice[0], Coord::new(4, 5)); // up
        assert_eq!(adj_slice[1], Coord::new(6, 5)); // down
        assert_eq!(adj_slice[2], Coord::new(5, 4)); // left
        assert_eq!(adj_slice[3], Coord::new(5, 6)); // right
    }

    #[test]
    fn test_coord_adjacent_corner() {
        let coord = Coord::new(0, 0);
        let (adj, count) = coord.adjacent(10, 10);
        let adj_slice = &adj[..count as usize];
        assert_eq!(count, 2);
        assert!(adj_slice.contains(&Coord::new(1, 0))); // down
        assert!(adj_slice.contains(&Coord::new(0, 1))); // right
    }

    #[test]
    fn test_adjacency_symmetric() {
        let grid = Grid::new(7, 5).unwrap();
        for (coord, _) in grid.iter() {
            let (adj, count) = grid.neighbors(coord);
            for n in &adj[..count as usize] {
                let (back, back_count) = grid.neighbors(*n);
                assert!(
                    back[..back_count as usize].contains(&coord),
                    "{n:?} does not link back to {coord:?}"
                );
            }
        }
    }

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(28, 14).unwrap();
        assert_eq!(grid.width(), 28);
        assert_eq!(grid.height(), 14);
        assert!(grid.iter().all(|(_, t)| t.is_blank()));
    }

    #[test]
    fn test_grid_zero_size() {
        assert!(Grid::new(0, 10).is_none());
        assert!(Grid::new(10, 0).is_none());
    }

    #[test]
    fn test_grid_get_set() {
        let mut grid = Grid::new(10, 10).unwrap();
        let coord = Coord::new(5, 5);

        assert!(grid.get(coord).unwrap().is_blank());

        grid.set(coord, Tile::base(Some(1)));
        let tile = grid.get(coord).unwrap();
        assert_eq!(tile.owner, Some(1));
        assert!(tile.is_base);
    }

    #[test]
    fn test_grid_bounds() {
        let grid = Grid::new(28, 14).unwrap();
        assert!(grid.get(Coord::new(0, 0)).is_some());
        assert!(grid.get(Coord::new(13, 27)).is_some());
        assert!(grid.get(Coord::new(14, 0)).is_none());
        assert!(grid.get(Coord::new(0, 28)).is_none());
    }

    #[test]
    fn test_counts() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.set(Coord::new(0, 0), Tile::turf(1));
        grid.set(Coord::new(0, 1), Tile::base(Some(1)));
        grid.set(Coord::new(0, 2), Tile::base(None));

        assert_eq!(grid.count_owned(1), 2);
        assert_eq!(grid.count_bases(1), 1);
        assert_eq!(grid.count_owned(2), 0);
    }
}
