/*
 * Ball Module
 *
 * This module defines the Ball struct and its kinematics.
 * The ball moves along a heading given in degrees at a constant speed:
 * - 0 degrees points right, 90 degrees points up the screen
 * - World y grows downwards, so the vertical component is negated
 * - A bounce reflects the heading across one axis
 */

use nannou::prelude::*;

use crate::config::Config;
use crate::hitbox::HitBox;
use crate::viewport::Viewport;

/// Axis a bounce reflects the heading across.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    // Left or right wall: the horizontal component flips
    Horizontal,
    // Top or bottom wall: the vertical component flips
    Vertical,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    angle: f32,
    pub speed: f32,
    pub radius: f32,
    pub paused: bool,
    hit_box: HitBox,
    pub color: Rgb<u8>,
}

// Wrap an angle in degrees into [0, 360)
fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

impl Ball {
    pub fn new(x: f32, y: f32, angle: f32, config: &Config) -> Self {
        Self {
            x,
            y,
            angle: wrap_degrees(angle),
            speed: config.ball_speed,
            radius: config.ball_radius(),
            paused: false,
            hit_box: HitBox::centered(x, y, config.ball_box_size()),
            color: rgb(0, 255, 0),
        }
    }

    // A ball at the configured spawn point
    pub fn spawn(angle: f32, config: &Config) -> Self {
        let (x, y) = config.spawn_point();
        Self::new(x, y, angle, config)
    }

    /// Heading in degrees, always within [0, 360).
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn hit_box(&self) -> &HitBox {
        &self.hit_box
    }

    // Displacement applied by one unpaused tick
    pub fn velocity(&self) -> (f32, f32) {
        let radians = self.angle.to_radians();
        (self.speed * radians.cos(), -self.speed * radians.sin())
    }

    /// Move one tick along the current heading.
    ///
    /// Does nothing while paused. The collision box follows the new position.
    pub fn advance(&mut self) {
        if self.paused {
            return;
        }

        let (dx, dy) = self.velocity();
        self.x += dx;
        self.y += dy;
        self.hit_box.recenter(self.x, self.y);
    }

    pub fn bounce(&mut self, axis: Axis) {
        self.angle = match axis {
            Axis::Horizontal => wrap_degrees(180.0 - self.angle),
            Axis::Vertical => wrap_degrees(-self.angle),
        };
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn draw(&self, draw: &Draw, viewport: &Viewport) {
        draw.ellipse()
            .xy(viewport.world_to_window(self.x, self.y))
            .radius(viewport.world_length_to_display(self.radius))
            .color(self.color);
    }
}
