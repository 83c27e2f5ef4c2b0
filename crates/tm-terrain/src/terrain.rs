//! Terrain trait and the default tile-grid implementation.
//!
//! # Pluggability
//!
//! The resolver only asks one question of the terrain: "can an agent stand
//! on this cell?".  That question goes through the [`Terrain`] trait so
//! applications can back it with their own map data.  [`TerrainGrid`] is a
//! dense in-memory implementation; [`OpenTerrain`] treats every cell as
//! walkable.

use tm_core::{CELL_COUNT, Cell, GRID_SIZE};

use crate::{TerrainError, TerrainResult};

// ── Terrain trait ─────────────────────────────────────────────────────────────

/// Passability oracle.
///
/// Implementations must be `Send + Sync` so one terrain can be shared by
/// drivers running different areas.
pub trait Terrain: Send + Sync {
    /// `true` if an agent may occupy `cell`.
    fn is_passable(&self, cell: Cell) -> bool;
}

/// Terrain with no walls.
#[derive(Copy, Clone, Debug, Default)]
pub struct OpenTerrain;

impl Terrain for OpenTerrain {
    #[inline]
    fn is_passable(&self, _cell: Cell) -> bool {
        true
    }
}

// ── Tile ──────────────────────────────────────────────────────────────────────

/// Static terrain type of one cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Plain,
    /// Walkable but slow.  Only affects costs, never passability.
    Swamp,
    Wall,
}

impl Tile {
    /// Parse the one-character map notation: `.` plain, `~` swamp, `#` wall.
    pub fn from_char(ch: char) -> Option<Tile> {
        match ch {
            '.' => Some(Tile::Plain),
            '~' => Some(Tile::Swamp),
            '#' => Some(Tile::Wall),
            _   => None,
        }
    }

    #[inline]
    pub fn is_passable(self) -> bool {
        !matches!(self, Tile::Wall)
    }
}

// ── TerrainGrid ───────────────────────────────────────────────────────────────

/// Dense `GRID_SIZE × GRID_SIZE` tile map indexed by [`Cell::packed`].
#[derive(Clone, Debug)]
pub struct TerrainGrid {
    tiles: Vec<Tile>,
}

impl TerrainGrid {
    /// A grid of plain tiles.
    pub fn open() -> Self {
        Self { tiles: vec![Tile::Plain; CELL_COUNT] }
    }

    /// A grid of plain tiles enclosed by a ring of walls on the outer edge.
    pub fn walled() -> Self {
        let mut grid = Self::open();
        for i in 0..CELL_COUNT {
            if let Some(cell) = Cell::from_packed(i) {
                if cell.is_edge() {
                    grid.tiles[i] = Tile::Wall;
                }
            }
        }
        grid
    }

    /// Tile at `cell`.
    #[inline]
    pub fn tile(&self, cell: Cell) -> Tile {
        self.tiles.get(cell.packed()).copied().unwrap_or(Tile::Wall)
    }

    /// Overwrite the tile at `cell`.
    pub fn set(&mut self, cell: Cell, tile: Tile) {
        if let Some(slot) = self.tiles.get_mut(cell.packed()) {
            *slot = tile;
        }
    }

    /// Paint a rectangular patch described in map notation, with the first
    /// character of the first row landing on `origin`.
    ///
    /// ```rust
    /// use tm_core::Cell;
    /// use tm_terrain::{TerrainGrid, Tile};
    ///
    /// let grid = TerrainGrid::open()
    ///     .paint(Cell::new(10, 10), &["#.#", "~.."])
    ///     .unwrap();
    /// assert_eq!(grid.tile(Cell::new(10, 10)), Tile::Wall);
    /// assert_eq!(grid.tile(Cell::new(10, 11)), Tile::Swamp);
    /// ```
    pub fn paint(mut self, origin: Cell, rows: &[&str]) -> TerrainResult<Self> {
        let height = rows.len();
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        if origin.x as usize + width > GRID_SIZE as usize
            || origin.y as usize + height > GRID_SIZE as usize
        {
            return Err(TerrainError::PatchOutOfBounds { origin, width, height });
        }

        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let tile = Tile::from_char(ch)
                    .ok_or(TerrainError::UnknownTile { ch, row, col })?;
                let cell = Cell::try_new(origin.x as i32 + col as i32, origin.y as i32 + row as i32)?;
                self.set(cell, tile);
            }
        }
        Ok(self)
    }

    /// Number of wall tiles.
    pub fn wall_count(&self) -> usize {
        self.tiles.iter().filter(|t| **t == Tile::Wall).count()
    }
}

impl Default for TerrainGrid {
    fn default() -> Self {
        Self::open()
    }
}

impl Terrain for TerrainGrid {
    #[inline]
    fn is_passable(&self, cell: Cell) -> bool {
        self.tile(cell).is_passable()
    }
}
