//! Unit tests for tm-terrain.
//!
//! All maps are painted in-line so tests need no fixture files.

#[cfg(test)]
mod tiles {
    use crate::Tile;

    #[test]
    fn from_char_notation() {
        assert_eq!(Tile::from_char('.'), Some(Tile::Plain));
        assert_eq!(Tile::from_char('~'), Some(Tile::Swamp));
        assert_eq!(Tile::from_char('#'), Some(Tile::Wall));
        assert_eq!(Tile::from_char('x'), None);
    }

    #[test]
    fn only_walls_block() {
        assert!(Tile::Plain.is_passable());
        assert!(Tile::Swamp.is_passable());
        assert!(!Tile::Wall.is_passable());
    }
}

#[cfg(test)]
mod grid {
    use tm_core::Cell;

    use crate::{OpenTerrain, Terrain, TerrainError, TerrainGrid, Tile};

    #[test]
    fn open_grid_is_all_passable() {
        let grid = TerrainGrid::open();
        assert_eq!(grid.wall_count(), 0);
        assert!(grid.is_passable(Cell::new(0, 0)));
        assert!(OpenTerrain.is_passable(Cell::new(49, 49)));
    }

    #[test]
    fn walled_grid_blocks_only_the_ring() {
        let grid = TerrainGrid::walled();
        assert_eq!(grid.wall_count(), 4 * 49);
        assert!(!grid.is_passable(Cell::new(0, 25)));
        assert!(!grid.is_passable(Cell::new(49, 49)));
        assert!(grid.is_passable(Cell::new(1, 1)));
    }

    #[test]
    fn paint_places_tiles_relative_to_origin() {
        let grid = TerrainGrid::open()
            .paint(Cell::new(5, 5), &["#~", ".#"])
            .unwrap();
        assert_eq!(grid.tile(Cell::new(5, 5)), Tile::Wall);
        assert_eq!(grid.tile(Cell::new(6, 5)), Tile::Swamp);
        assert_eq!(grid.tile(Cell::new(5, 6)), Tile::Plain);
        assert_eq!(grid.tile(Cell::new(6, 6)), Tile::Wall);
        assert_eq!(grid.wall_count(), 2);
    }

    #[test]
    fn paint_rejects_unknown_characters() {
        let err = TerrainGrid::open()
            .paint(Cell::new(1, 1), &["..", ".?"])
            .unwrap_err();
        assert!(matches!(err, TerrainError::UnknownTile { ch: '?', row: 1, col: 1 }));
    }

    #[test]
    fn paint_rejects_patch_past_the_edge() {
        let err = TerrainGrid::open()
            .paint(Cell::new(48, 0), &["..."])
            .unwrap_err();
        assert!(matches!(err, TerrainError::PatchOutOfBounds { width: 3, height: 1, .. }));
    }

    #[test]
    fn set_overwrites_tile() {
        let mut grid = TerrainGrid::open();
        grid.set(Cell::new(3, 4), Tile::Wall);
        assert!(!grid.is_passable(Cell::new(3, 4)));
    }
}

#[cfg(test)]
mod costs {
    use tm_core::Cell;

    use crate::{BLOCKED_COST, CostMatrix, PLAIN_COST, SWAMP_COST, TerrainGrid};

    #[test]
    fn new_matrix_is_zero() {
        let m = CostMatrix::new();
        assert_eq!(m.get(Cell::new(10, 10)), 0);
    }

    #[test]
    fn set_get_block() {
        let mut m = CostMatrix::new();
        m.set(Cell::new(2, 3), 40);
        m.block(Cell::new(4, 4));
        assert_eq!(m.get(Cell::new(2, 3)), 40);
        assert_eq!(m.get(Cell::new(4, 4)), BLOCKED_COST);
    }

    #[test]
    fn from_terrain_maps_tile_costs() {
        let grid = TerrainGrid::open()
            .paint(Cell::new(10, 10), &[".~#"])
            .unwrap();
        let m = CostMatrix::from_terrain(&grid);
        assert_eq!(m.get(Cell::new(10, 10)), PLAIN_COST);
        assert_eq!(m.get(Cell::new(11, 10)), SWAMP_COST);
        assert_eq!(m.get(Cell::new(12, 10)), BLOCKED_COST);
    }
}
