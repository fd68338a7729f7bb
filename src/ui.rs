/*
 * UI Module
 *
 * This module contains the on-screen text: the speed readout drawn every
 * frame, and the egui debug panel toggled with the D key.
 */

use nannou::prelude::*;
use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::game::Game;
use crate::viewport::Viewport;

// Display-space offset of the readout from the top-left corner
const READOUT_MARGIN: f32 = 10.0;
const READOUT_WIDTH: f32 = 200.0;
const READOUT_HEIGHT: f32 = 20.0;

pub fn speed_readout_text(speed_per_second: f32) -> String {
    format!("Speed: {:.2} px/s", speed_per_second)
}

// Draw the speed readout in the top-left corner
pub fn draw_speed_readout(draw: &Draw, viewport: &Viewport, speed_per_second: f32, font_size: u32) {
    let center = viewport.display_to_window(
        READOUT_MARGIN + READOUT_WIDTH / 2.0,
        READOUT_MARGIN + READOUT_HEIGHT / 2.0,
    );

    draw.text(&speed_readout_text(speed_per_second))
        .xy(center)
        .w_h(READOUT_WIDTH, READOUT_HEIGHT)
        .left_justify()
        .align_text_top()
        .font_size(font_size)
        .color(RED);
}

// Build the debug panel for this frame
pub fn update_debug_panel(egui: &mut Egui, game: &Game, debug_info: &DebugInfo) {
    let ctx = egui.begin_frame();

    egui::Window::new("Debug")
        .default_pos([10.0, 30.0])
        .show(&ctx, |ui| {
            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
            ui.label(format!("Ticks this frame: {}", debug_info.ticks_this_frame));
            ui.label(format!("Capped frames: {}", debug_info.capped_frames));

            ui.separator();

            ui.label(format!("Ticks since reset: {}", game.ticks));
            ui.label(format!("Angle: {:.1}°", game.ball.angle()));
            ui.label(format!("Position: ({:.1}, {:.1})", game.ball.x, game.ball.y));
            ui.label(format!("Paused: {}", game.ball.paused));
            ui.label(format!("Active tiles: {}", game.grid.active_count()));
            ui.label(format!("Bounces last tick: {}", debug_info.last_bounces));
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readout_shows_two_decimals() {
        assert_eq!(speed_readout_text(1200.0), "Speed: 1200.00 px/s");
        assert_eq!(speed_readout_text(12.5), "Speed: 12.50 px/s");
    }
}
