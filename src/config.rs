/*
 * Configuration Module
 *
 * This module defines the Config struct holding every constant of the
 * simulation: grid dimensions, tile size, ball speed and tick rate.
 * A Config is built once at startup and handed by reference to the grid,
 * the ball and the game loop. It is never mutated afterwards.
 *
 * World coordinates are tracked at twice the display resolution, so most
 * of the derived accessors come in a world and a display flavour.
 */

use std::time::Duration;

// Parameters of the simulation, fixed for the lifetime of a session
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub columns: usize,
    pub rows: usize,
    pub tile_size: u32,
    pub ball_speed: f32,
    pub tick_rate: u32,
    // Upper bound on fixed-timestep ticks run in a single frame
    pub max_ticks_per_frame: u32,
    pub readout_font_size: u32,
    pub window_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: 21,
            rows: 25,
            tile_size: 32,
            ball_speed: 20.0,
            tick_rate: 60,
            max_ticks_per_frame: 8,
            readout_font_size: 12,
            window_title: String::from("Checkered Grid"),
        }
    }
}

impl Config {
    // Window width in display pixels
    pub fn display_width(&self) -> u32 {
        self.columns as u32 * self.tile_size / 2
    }

    // Window height in display pixels
    pub fn display_height(&self) -> u32 {
        self.rows as u32 * self.tile_size / 2
    }

    /// Width of the arena in world units.
    pub fn world_width(&self) -> f32 {
        (self.columns as u32 * self.tile_size) as f32
    }

    /// Height of the arena in world units.
    pub fn world_height(&self) -> f32 {
        (self.rows as u32 * self.tile_size) as f32
    }

    pub fn ball_radius(&self) -> f32 {
        (self.tile_size / 2) as f32
    }

    pub fn ball_box_size(&self) -> f32 {
        (self.tile_size / 2) as f32
    }

    /// Where the ball is placed on start and reset.
    ///
    /// This is the display's bottom-right corner expressed in world units,
    /// which lands on the middle of the arena.
    pub fn spawn_point(&self) -> (f32, f32) {
        (self.display_width() as f32, self.display_height() as f32)
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate as f64)
    }

    // Ball speed as shown on the readout, in pixels per second
    pub fn speed_per_second(&self, speed: f32) -> f32 {
        speed * self.tick_rate as f32
    }
}
