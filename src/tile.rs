/*
 * Tile Module
 *
 * This module defines a single cell of the checkerboard. A tile is either
 * decorative (Light or Dark, chosen by the parity of its coordinates) or
 * Active, in which case it carries a collision box that covers its cell
 * and the ball bounces off it.
 */

use nannou::prelude::*;

use crate::config::Config;
use crate::hitbox::HitBox;
use crate::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileColor {
    Light,
    Dark,
    Active,
}

impl TileColor {
    // Checkerboard color for a freshly created tile
    pub fn for_cell(row: usize, col: usize) -> Self {
        if (row + col) % 2 == 0 {
            TileColor::Light
        } else {
            TileColor::Dark
        }
    }

    pub fn rgb(&self) -> Rgb<u8> {
        match self {
            TileColor::Light => rgb(255, 255, 255),
            TileColor::Dark => rgb(0, 0, 0),
            TileColor::Active => rgb(0, 0, 255),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub row: usize,
    pub col: usize,
    color: TileColor,
    base_color: TileColor,
    hit_box: Option<HitBox>,
    size: f32,
}

impl Tile {
    pub fn new(row: usize, col: usize, config: &Config) -> Self {
        let base_color = TileColor::for_cell(row, col);

        Self {
            row,
            col,
            color: base_color,
            base_color,
            hit_box: None,
            size: config.tile_size as f32,
        }
    }

    pub fn color(&self) -> TileColor {
        self.color
    }

    pub fn hit_box(&self) -> Option<&HitBox> {
        self.hit_box.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.hit_box.is_some()
    }

    /// The cell covered by this tile, in world coordinates.
    pub fn cell_box(&self) -> HitBox {
        HitBox::new(
            self.col as f32 * self.size,
            self.row as f32 * self.size,
            self.size,
            self.size,
        )
    }

    /// Switch between an obstacle and the tile's checkerboard color.
    ///
    /// Calling this twice in a row leaves the tile exactly as it was.
    pub fn toggle_active(&mut self) {
        if self.is_active() {
            self.color = self.base_color;
            self.hit_box = None;
        } else {
            self.color = TileColor::Active;
            self.hit_box = Some(self.cell_box());
        }
    }

    // Fill the cell with the current color
    pub fn draw(&self, draw: &Draw, viewport: &Viewport) {
        let cell = self.cell_box();
        let (cx, cy) = cell.center();
        let side = viewport.world_length_to_display(self.size);

        draw.rect()
            .xy(viewport.world_to_window(cx, cy))
            .w_h(side, side)
            .color(self.color.rgb());
    }
}
