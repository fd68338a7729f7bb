/*
 * Viewport Module
 *
 * This module converts between the three coordinate spaces in play:
 * - World space: simulation coordinates, origin top-left, y down,
 *   twice the display resolution
 * - Display space: window pixels, origin top-left, y down
 * - Window space: what nannou hands out and draws in, origin at the
 *   window center, y up
 */

use nannou::prelude::*;

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    tile_size: u32,
    columns: usize,
    rows: usize,
}

impl Viewport {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.display_width() as f32,
            height: config.display_height() as f32,
            tile_size: config.tile_size,
            columns: config.columns,
            rows: config.rows,
        }
    }

    // Convert a world point to a window-space point for drawing
    pub fn world_to_window(&self, x: f32, y: f32) -> Point2 {
        self.display_to_window(x / 2.0, y / 2.0)
    }

    pub fn display_to_window(&self, x: f32, y: f32) -> Point2 {
        pt2(x - self.width / 2.0, self.height / 2.0 - y)
    }

    pub fn window_to_display(&self, point: Point2) -> (f32, f32) {
        (point.x + self.width / 2.0, self.height / 2.0 - point.y)
    }

    pub fn world_length_to_display(&self, length: f32) -> f32 {
        length / 2.0
    }

    /// Grid cell under a display-space position, as `(row, col)`.
    ///
    /// The position is doubled into world space and divided by the tile
    /// size. Positions left of or above the window, or past the last
    /// row or column, map to no cell.
    pub fn display_to_cell(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if x < 0.0 || y < 0.0 {
            return None;
        }

        let col = (x.floor() as u64 * 2 / self.tile_size as u64) as usize;
        let row = (y.floor() as u64 * 2 / self.tile_size as u64) as usize;

        if col < self.columns && row < self.rows {
            Some((row, col))
        } else {
            None
        }
    }
}
