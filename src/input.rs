/*
 * Input Module
 *
 * This module turns raw window events into InputEvent values.
 * Events are queued on the model and drained at the start of the next
 * update, so the simulation only ever changes inside the game loop.
 *
 * Controls:
 * - Right click toggles the tile under the cursor
 * - Space pauses and resumes the ball
 * - Escape resets the board and asks for a new angle
 * - D shows or hides the debug panel
 */

use nannou::prelude::*;
use nannou::winit::event::MouseButton;

use crate::app::Model;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    ToggleTile { row: usize, col: usize },
    TogglePause,
    Reset,
    ToggleDebug,
}

// Map a key to its event, if it has one
pub fn key_event(key: Key) -> Option<InputEvent> {
    match key {
        Key::Escape => Some(InputEvent::Reset),
        Key::Space => Some(InputEvent::TogglePause),
        Key::D => Some(InputEvent::ToggleDebug),
        _ => None,
    }
}

// Key pressed event handler
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    if let Some(event) = key_event(key) {
        model.pending_input.push(event);
    }
}

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    model.mouse_position = pos;
}

// Mouse pressed event handler
pub fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Right {
        return;
    }

    // Clicks on the debug panel belong to the panel
    if model.show_debug && model.egui.ctx().is_pointer_over_area() {
        return;
    }

    let (x, y) = model.viewport.window_to_display(model.mouse_position);
    match model.viewport.display_to_cell(x, y) {
        Some((row, col)) => model.pending_input.push(InputEvent::ToggleTile { row, col }),
        None => log::debug!("Ignoring click outside the grid at ({:.0}, {:.0})", x, y),
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_events() {
        assert_eq!(key_event(Key::Escape), Some(InputEvent::Reset));
        assert_eq!(key_event(Key::Space), Some(InputEvent::TogglePause));
        assert_eq!(key_event(Key::D), Some(InputEvent::ToggleDebug));
        assert_eq!(key_event(Key::Return), None);
    }
}
