/*
 * Checkered Bounce - Module Definitions
 *
 * This file defines the module structure for the game: a ball bouncing
 * around a checkerboard whose tiles can be toggled into obstacles.
 */

// Re-export key components for easier access
pub use app::Model;
pub use ball::{Axis, Ball};
pub use collision::{Arena, Bounce, CollisionReport, Obstacle};
pub use config::Config;
pub use error::PromptError;
pub use game::Game;
pub use grid::Grid;
pub use hitbox::HitBox;
pub use input::InputEvent;
pub use tile::{Tile, TileColor};
pub use viewport::Viewport;

// Define modules
pub mod app;
pub mod ball;
pub mod collision;
pub mod config;
pub mod debug;
pub mod error;
pub mod game;
pub mod grid;
pub mod hitbox;
pub mod input;
pub mod prompt;
pub mod renderer;
pub mod tile;
pub mod ui;
pub mod viewport;
