/*
 * Renderer Module
 *
 * This module draws a frame: the grid first, then the ball on top of it,
 * then the speed readout. The debug panel is drawn last when enabled.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::ui;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    draw.background().color(BLACK);

    model.game.grid.draw(&draw, &model.viewport);
    model.game.ball.draw(&draw, &model.viewport);

    ui::draw_speed_readout(
        &draw,
        &model.viewport,
        model.game.speed_per_second(),
        model.game.config().readout_font_size,
    );

    draw.to_frame(app, &frame).unwrap();

    if model.show_debug {
        model.egui.draw_to_frame(&frame).unwrap();
    }
}
