//! Position with one step of history, for smooth rendering between steps.
//!
//! Simulation only moves things at fixed steps, but frames are drawn at
//! arbitrary points in between. Keeping the position from the start of the
//! current step lets the renderer blend towards the current one:
//!
//! ```text
//! drawn = previous + (current - previous) * fraction
//! ```
//!
//! Call [`Interpolated::begin_step`] once at the top of every step, before any
//! [`Interpolated::move_by`] in that step.

use raylib::prelude::Vector2;

/// Current and previous position of a simulated object.
#[derive(Clone, Copy, Debug)]
pub struct Interpolated {
    /// Position after the latest movement.
    pub pos: Vector2,
    /// Position at the start of the current step.
    pub prev: Vector2,
}

impl Default for Interpolated {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Interpolated {
    /// Create a resting position: previous and current are equal.
    pub fn new(x: f32, y: f32) -> Self {
        let pos = Vector2 { x, y };
        Self { pos, prev: pos }
    }

    /// Snapshot the current position as the start of a new step.
    pub fn begin_step(&mut self) {
        self.prev = self.pos;
    }

    /// Move by a delta. Deltas within one step add up.
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.pos.x += dx;
        self.pos.y += dy;
    }

    /// Place the object without any blending (spawns, teleports).
    pub fn snap_to(&mut self, x: f32, y: f32) {
        self.pos = Vector2 { x, y };
        self.prev = self.pos;
    }

    pub fn position(&self) -> Vector2 {
        self.pos
    }

    /// Blend between the previous and current position.
    pub fn interpolated(&self, fraction: f32) -> Vector2 {
        Vector2 {
            x: lerp(self.prev.x, self.pos.x, fraction),
            y: lerp(self.prev.y, self.pos.y, fraction),
        }
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
