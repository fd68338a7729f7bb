/*
 * Grid Module
 *
 * This module defines the Grid struct owning every tile of the board.
 * Tiles are stored in a flat vector in row-major order, which is also
 * the order collisions are resolved in.
 */

use nannou::prelude::*;

use crate::config::Config;
use crate::tile::Tile;
use crate::viewport::Viewport;

pub struct Grid {
    pub columns: usize,
    pub rows: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    pub fn new(config: &Config) -> Self {
        let mut tiles = Vec::with_capacity(config.columns * config.rows);

        for row in 0..config.rows {
            for col in 0..config.columns {
                tiles.push(Tile::new(row, col, config));
            }
        }

        Self {
            columns: config.columns,
            rows: config.rows,
            tiles,
        }
    }

    // Convert 2D coordinates to the flat index, if in bounds
    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.columns {
            Some(row * self.columns + col)
        } else {
            None
        }
    }

    /// Toggle the tile at `(row, col)`.
    ///
    /// Returns the toggled tile, or `None` when the cell is out of bounds.
    pub fn toggle(&mut self, row: usize, col: usize) -> Option<&Tile> {
        let i = self.index(row, col)?;
        self.tiles[i].toggle_active();
        Some(&self.tiles[i])
    }

    // All tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    // Tiles currently acting as obstacles, in row-major order
    pub fn active_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|tile| tile.is_active())
    }

    pub fn active_count(&self) -> usize {
        self.active_tiles().count()
    }

    pub fn draw(&self, draw: &Draw, viewport: &Viewport) {
        for tile in &self.tiles {
            tile.draw(draw, viewport);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileColor;

    #[test]
    fn fresh_grid_is_a_checkerboard() {
        let grid = Grid::new(&Config::default());
        assert_eq!(grid.tiles().count(), 21 * 25);

        for (i, tile) in grid.tiles().enumerate() {
            let (row, col) = (i / 21, i % 21);
            let expected = if (row + col) % 2 == 0 {
                TileColor::Light
            } else {
                TileColor::Dark
            };
            assert_eq!((tile.row, tile.col), (row, col));
            assert_eq!(tile.color(), expected);
            assert!(!tile.is_active());
        }
    }

    #[test]
    fn toggle_out_of_bounds_is_ignored() {
        let mut grid = Grid::new(&Config::default());
        assert!(grid.toggle(25, 0).is_none());
        assert!(grid.toggle(0, 21).is_none());
        assert_eq!(grid.active_count(), 0);
    }

    #[test]
    fn active_tiles_come_in_row_major_order() {
        let mut grid = Grid::new(&Config::default());
        grid.toggle(4, 1);
        grid.toggle(2, 7);
        grid.toggle(2, 3);

        let cells: Vec<_> = grid.active_tiles().map(|t| (t.row, t.col)).collect();
        assert_eq!(cells, vec![(2, 3), (2, 7), (4, 1)]);
    }
}
