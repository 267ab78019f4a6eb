//! Window size in pixels.
//!
//! Read once per frame; may differ from the render resolution whenever the
//! user resizes the window or switches to fullscreen.

use raylib::prelude::*;

/// Current OS window size in pixels.
#[derive(Debug, Clone, Copy)]
pub struct WindowSize {
    pub w: i32,
    pub h: i32,
}

impl WindowSize {
    /// Destination rectangle that fits the render target inside the window.
    ///
    /// Keeps the aspect ratio of the render resolution and centers the image,
    /// leaving bars on the sides (pillarbox) or top and bottom (letterbox).
    pub fn calculate_letterbox(&self, game_width: u32, game_height: u32) -> Rectangle {
        let game_w = game_width as f32;
        let game_h = game_height as f32;
        let window_w = self.w as f32;
        let window_h = self.h as f32;

        let game_aspect = game_w / game_h;
        let window_aspect = window_w / window_h;

        if window_aspect > game_aspect {
            // wider than the game: bars on the sides
            let scale = window_h / game_h;
            let scaled_w = game_w * scale;
            Rectangle {
                x: (window_w - scaled_w) / 2.0,
                y: 0.0,
                width: scaled_w,
                height: window_h,
            }
        } else {
            let scale = window_w / game_w;
            let scaled_h = game_h * scale;
            Rectangle {
                x: 0.0,
                y: (window_h - scaled_h) / 2.0,
                width: window_w,
                height: scaled_h,
            }
        }
    }
}
