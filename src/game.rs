/*
 * Game Module
 *
 * This module owns the grid and the ball and runs the simulation side of
 * the game loop. It knows nothing about windows: input arrives as
 * InputEvent values and the starting angle comes from whatever angle
 * source the caller hands in (the console prompt in the app, canned values
 * in tests).
 */

use crate::ball::Ball;
use crate::collision::{self, Arena, CollisionReport};
use crate::config::Config;
use crate::error::Result;
use crate::grid::Grid;
use crate::input::InputEvent;

pub struct Game {
    config: Config,
    arena: Arena,
    pub grid: Grid,
    pub ball: Ball,
    // Ticks simulated since the last reset
    pub ticks: u64,
    pub last_report: CollisionReport,
}

impl Game {
    pub fn new(config: Config, angle: i32) -> Self {
        let arena = Arena::new(&config);
        let grid = Grid::new(&config);
        let ball = Ball::spawn(angle.rem_euclid(360) as f32, &config);

        Self {
            config,
            arena,
            grid,
            ball,
            ticks: 0,
            last_report: CollisionReport::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Rebuild the grid and the ball from scratch with a new heading.
    pub fn reset(&mut self, angle: i32) {
        self.grid = Grid::new(&self.config);
        self.ball = Ball::spawn(angle.rem_euclid(360) as f32, &self.config);
        self.ticks = 0;
        self.last_report = CollisionReport::default();
        log::info!("Game reset with angle {}", angle);
    }

    /// Apply one input event.
    ///
    /// A reset blocks on `next_angle` until it produces a heading; its error
    /// is the only way this can fail.
    pub fn apply<F>(&mut self, event: InputEvent, next_angle: &mut F) -> Result<()>
    where
        F: FnMut() -> Result<i32>,
    {
        match event {
            InputEvent::ToggleTile { row, col } => {
                if let Some(tile) = self.grid.toggle(row, col) {
                    log::debug!("Tile ({}, {}) is now {:?}", row, col, tile.color());
                }
            }
            InputEvent::TogglePause => {
                self.ball.toggle_pause();
                log::debug!("Ball paused: {}", self.ball.paused);
            }
            InputEvent::Reset => {
                let angle = next_angle()?;
                self.reset(angle);
            }
            // Presentation-only, nothing to do in the simulation
            InputEvent::ToggleDebug => {}
        }

        Ok(())
    }

    // Advance the ball one tick, then resolve collisions
    pub fn tick(&mut self) -> &CollisionReport {
        self.ball.advance();
        self.last_report = collision::resolve(&mut self.ball, &self.grid, &self.arena);
        self.ticks += 1;
        &self.last_report
    }

    /// Ball speed as shown on the readout, in pixels per second.
    pub fn speed_per_second(&self) -> f32 {
        self.config.speed_per_second(self.ball.speed)
    }
}
