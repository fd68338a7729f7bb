/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains frame timing
 * and simulation metrics shown in the debug panel.
 *
 * Includes metrics for:
 * - FPS (frames per second)
 * - Frame time
 * - Ticks run in the last frame
 * - Bounces applied in the last tick
 */

use std::time::Duration;

// Debug information to display
#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks_this_frame: u32,
    // Frames that hit the per-frame tick cap and dropped time
    pub capped_frames: u64,
    pub last_bounces: usize,
}
