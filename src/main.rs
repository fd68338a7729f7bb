/*
 * Checkered Bounce
 *
 * A ball bounces around an arena laid out as a checkerboard. Right-click
 * a tile to turn it into an obstacle (or back), press Space to pause the
 * ball and Escape to start over with a new angle.
 *
 * The starting angle is read from the console before the game begins.
 * Logging goes to stderr and is filtered with RUST_LOG (default: info).
 */

use checkered_bounce::app;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    nannou::app(app::model).update(app::update).run();
}
