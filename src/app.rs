/*
 * Application Module
 *
 * This module defines the main application model and logic for the game.
 * It handles window creation, the startup prompt and the per-frame update.
 *
 * The simulation runs on a fixed timestep: every frame adds the elapsed
 * wall-clock time to an accumulator and runs one tick per tick duration
 * it holds, up to a per-frame cap. Rendering happens once per frame in
 * the renderer module.
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::debug::DebugInfo;
use crate::game::Game;
use crate::input::{self, InputEvent};
use crate::prompt;
use crate::renderer;
use crate::ui;
use crate::viewport::Viewport;

// Main model for the application
pub struct Model {
    pub game: Game,
    pub viewport: Viewport,
    pub egui: Egui,
    pub show_debug: bool,
    pub debug_info: DebugInfo,
    pub pending_input: Vec<InputEvent>,
    pub mouse_position: Point2,
    pub clock: FixedStep,
}

/// Fixed timestep accumulator driving the simulation ticks.
pub struct FixedStep {
    step: Duration,
    max_steps: u32,
    accumulator: Duration,
    last_update: Instant,
}

impl FixedStep {
    pub fn new(step: Duration, max_steps: u32, now: Instant) -> Self {
        Self {
            step,
            max_steps,
            accumulator: Duration::ZERO,
            last_update: now,
        }
    }

    // Forget accumulated time, e.g. after the loop was blocked on the prompt
    pub fn restart(&mut self, now: Instant) {
        self.accumulator = Duration::ZERO;
        self.last_update = now;
    }

    /// Number of ticks due at `now`, and whether the per-frame cap was hit.
    ///
    /// When capped, the leftover time is dropped instead of carried over.
    pub fn advance(&mut self, now: Instant) -> (u32, bool) {
        self.accumulator += now.saturating_duration_since(self.last_update);
        self.last_update = now;

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_steps {
            self.accumulator -= self.step;
            ticks += 1;
        }

        let capped = self.accumulator >= self.step;
        if capped {
            self.accumulator = Duration::ZERO;
        }

        (ticks, capped)
    }
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let config = Config::default();
    log::info!(
        "Starting with a {}x{} grid, tile size {}, speed {}, {} ticks/s",
        config.columns,
        config.rows,
        config.tile_size,
        config.ball_speed,
        config.tick_rate
    );

    // Escape resets the game instead of closing the window
    app.set_exit_on_escape(false);

    let window_id = app
        .new_window()
        .title(config.window_title.clone())
        .size(config.display_width(), config.display_height())
        .resizable(false)
        .view(renderer::view)
        .key_pressed(input::key_pressed)
        .mouse_moved(input::mouse_moved)
        .mouse_pressed(input::mouse_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    let angle = match prompt::prompt_angle() {
        Ok(angle) => angle,
        Err(err) => {
            log::error!("Could not read a starting angle: {}", err);
            std::process::exit(1);
        }
    };

    let viewport = Viewport::new(&config);
    let clock = FixedStep::new(config.tick_duration(), config.max_ticks_per_frame, Instant::now());

    Model {
        game: Game::new(config, angle),
        viewport,
        egui,
        show_debug: false,
        debug_info: DebugInfo::default(),
        pending_input: Vec::new(),
        mouse_position: Point2::ZERO,
        clock,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    // Drain queued input before simulating
    for event in std::mem::take(&mut model.pending_input) {
        match event {
            InputEvent::ToggleDebug => model.show_debug = !model.show_debug,
            event => {
                if let Err(err) = model.game.apply(event, &mut prompt::prompt_angle) {
                    log::error!("Could not read a starting angle: {}", err);
                    app.quit();
                    return;
                }

                // The prompt blocked the loop; don't replay that time as ticks
                if event == InputEvent::Reset {
                    model.clock.restart(Instant::now());
                }
            }
        }
    }

    let (ticks, capped) = model.clock.advance(Instant::now());
    for _ in 0..ticks {
        model.game.tick();
    }

    model.debug_info.ticks_this_frame = ticks;
    model.debug_info.last_bounces = model.game.last_report.len();
    if capped {
        model.debug_info.capped_frames += 1;
        log::debug!("Frame hit the tick cap, dropping accumulated time");
    }

    if model.show_debug {
        model.egui.set_elapsed_time(update.since_start);
        ui::update_debug_panel(&mut model.egui, &model.game, &model.debug_info);
    }
}
