/*
 * Collision Module
 *
 * This module resolves the ball against the arena walls and the active
 * tiles once per tick, right after the ball has moved.
 *
 * Resolution order is fixed:
 * 1. Arena walls, horizontal then vertical. Both can fire in one tick.
 * 2. Active tiles in row-major order. Every overlapping tile bounces the
 *    ball on its own, so several bounces can stack up in a single tick.
 *
 * The bounce axis for a tile is picked by comparing the distances between
 * box centers, which approximates the dominant penetration axis.
 */

use crate::ball::{Axis, Ball};
use crate::config::Config;
use crate::grid::Grid;
use crate::hitbox::HitBox;

// The rectangle the ball is confined to, in world units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.world_width(),
            height: config.world_height(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Obstacle {
    Wall,
    Tile { row: usize, col: usize },
}

/// A single bounce applied while resolving a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounce {
    pub obstacle: Obstacle,
    pub axis: Axis,
}

// Everything that happened while resolving one tick, in application order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    pub bounces: Vec<Bounce>,
}

impl CollisionReport {
    pub fn is_empty(&self) -> bool {
        self.bounces.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bounces.len()
    }
}

/// Axes on which the box touches or crosses the arena edges.
///
/// Returns `(horizontal, vertical)`.
pub fn wall_contacts(hit_box: &HitBox, arena: &Arena) -> (bool, bool) {
    let horizontal = hit_box.left() <= 0.0 || hit_box.right() >= arena.width;
    let vertical = hit_box.top() <= 0.0 || hit_box.bottom() >= arena.height;
    (horizontal, vertical)
}

/// Bounce axis for a ball box against a tile box, or `None` if they don't overlap.
pub fn tile_bounce_axis(ball_box: &HitBox, tile_box: &HitBox) -> Option<Axis> {
    if !ball_box.overlaps(tile_box) {
        return None;
    }

    let (ball_x, ball_y) = ball_box.center();
    let (tile_x, tile_y) = tile_box.center();
    let dx = (ball_x - tile_x).abs();
    let dy = (ball_y - tile_y).abs();

    if dx > dy {
        Some(Axis::Horizontal)
    } else {
        Some(Axis::Vertical)
    }
}

/// Resolve one tick of collisions, mutating the ball's heading.
pub fn resolve(ball: &mut Ball, grid: &Grid, arena: &Arena) -> CollisionReport {
    let mut report = CollisionReport::default();

    let (horizontal, vertical) = wall_contacts(ball.hit_box(), arena);
    if horizontal {
        ball.bounce(Axis::Horizontal);
        report.bounces.push(Bounce { obstacle: Obstacle::Wall, axis: Axis::Horizontal });
    }
    if vertical {
        ball.bounce(Axis::Vertical);
        report.bounces.push(Bounce { obstacle: Obstacle::Wall, axis: Axis::Vertical });
    }

    for tile in grid.active_tiles() {
        let Some(tile_box) = tile.hit_box() else {
            continue;
        };

        // The ball box only moves in advance(), so it is stable across this loop
        if let Some(axis) = tile_bounce_axis(ball.hit_box(), tile_box) {
            ball.bounce(axis);
            report.bounces.push(Bounce {
                obstacle: Obstacle::Tile { row: tile.row, col: tile.col },
                axis,
            });
        }
    }

    if !report.is_empty() {
        log::trace!("{} bounce(s), heading now {:.1}", report.len(), ball.angle());
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Config, Grid, Arena) {
        let config = Config::default();
        let grid = Grid::new(&config);
        let arena = Arena::new(&config);
        (config, grid, arena)
    }

    #[test]
    fn left_wall_flips_horizontal_heading() {
        let (config, grid, arena) = setup();
        // Box spans x in [-2, 14]
        let mut ball = Ball::new(6.0, 400.0, 10.0, &config);

        let report = resolve(&mut ball, &grid, &arena);

        assert_eq!(ball.angle(), 170.0);
        assert_eq!(
            report.bounces,
            vec![Bounce { obstacle: Obstacle::Wall, axis: Axis::Horizontal }]
        );
    }

    #[test]
    fn touching_left_wall_counts_as_contact() {
        let (config, grid, arena) = setup();
        let mut ball = Ball::new(8.0, 400.0, 190.0, &config);
        assert_eq!(ball.hit_box().left(), 0.0);

        let report = resolve(&mut ball, &grid, &arena);

        assert_eq!(ball.angle(), 350.0);
        assert_eq!(
            report.bounces,
            vec![Bounce { obstacle: Obstacle::Wall, axis: Axis::Horizontal }]
        );
    }

    #[test]
    fn bottom_wall_flips_vertical_heading() {
        let (config, grid, arena) = setup();
        // Box bottom lands exactly on the arena height of 800
        let mut ball = Ball::new(336.0, 792.0, 300.0, &config);
        assert_eq!(ball.hit_box().bottom(), arena.height);

        let report = resolve(&mut ball, &grid, &arena);

        assert_eq!(ball.angle(), 60.0);
        assert_eq!(
            report.bounces,
            vec![Bounce { obstacle: Obstacle::Wall, axis: Axis::Vertical }]
        );
    }

    #[test]
    fn corner_applies_both_wall_bounces() {
        let (config, grid, arena) = setup();
        let mut ball = Ball::new(4.0, 4.0, 135.0, &config);

        let report = resolve(&mut ball, &grid, &arena);

        // 135 -> 45 (horizontal) -> 315 (vertical)
        assert_eq!(ball.angle(), 315.0);
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn ball_inside_arena_is_untouched() {
        let (config, grid, arena) = setup();
        let mut ball = Ball::spawn(30.0, &config);

        let report = resolve(&mut ball, &grid, &arena);

        assert!(report.is_empty());
        assert_eq!(ball.angle(), 30.0);
    }

    #[test]
    fn dominant_horizontal_offset_picks_horizontal_axis() {
        let tile_box = HitBox::new(320.0, 384.0, 32.0, 32.0);
        let (tx, ty) = tile_box.center();
        let ball_box = HitBox::centered(tx + 5.0, ty + 2.0, 16.0);

        assert_eq!(tile_bounce_axis(&ball_box, &tile_box), Some(Axis::Horizontal));
    }

    #[test]
    fn equal_offsets_pick_vertical_axis() {
        let tile_box = HitBox::new(0.0, 0.0, 32.0, 32.0);
        let ball_box = HitBox::centered(20.0, 20.0, 16.0);

        assert_eq!(tile_bounce_axis(&ball_box, &tile_box), Some(Axis::Vertical));
    }

    #[test]
    fn separated_boxes_do_not_bounce() {
        let tile_box = HitBox::new(0.0, 0.0, 32.0, 32.0);
        let ball_box = HitBox::centered(100.0, 100.0, 16.0);

        assert_eq!(tile_bounce_axis(&ball_box, &tile_box), None);
    }

    #[test]
    fn active_tile_bounces_ball() {
        let (config, mut grid, arena) = setup();
        // Tile (12, 10) covers x in [320, 352], y in [384, 416]; its center is (336, 400)
        grid.toggle(12, 10);
        let mut ball = Ball::new(341.0, 402.0, 10.0, &config);

        let report = resolve(&mut ball, &grid, &arena);

        assert_eq!(ball.angle(), 170.0);
        assert_eq!(
            report.bounces,
            vec![Bounce { obstacle: Obstacle::Tile { row: 12, col: 10 }, axis: Axis::Horizontal }]
        );
    }

    #[test]
    fn overlapping_tiles_bounce_in_row_major_order() {
        let (config, mut grid, arena) = setup();
        // Ball box spans [328, 344] x [376, 392], straddling tiles (11, 10) and (12, 10)
        grid.toggle(12, 10);
        grid.toggle(11, 10);
        let mut ball = Ball::new(336.0, 384.0, 30.0, &config);

        let report = resolve(&mut ball, &grid, &arena);

        let cells: Vec<_> = report.bounces.iter().map(|b| b.obstacle).collect();
        assert_eq!(
            cells,
            vec![
                Obstacle::Tile { row: 11, col: 10 },
                Obstacle::Tile { row: 12, col: 10 },
            ]
        );
        // Two vertical bounces cancel out
        assert_eq!(ball.angle(), 30.0);
    }

    #[test]
    fn inactive_tiles_are_ignored() {
        let (config, mut grid, arena) = setup();
        grid.toggle(12, 10);
        grid.toggle(12, 10);
        let mut ball = Ball::new(341.0, 402.0, 10.0, &config);

        assert!(resolve(&mut ball, &grid, &arena).is_empty());
    }
}
