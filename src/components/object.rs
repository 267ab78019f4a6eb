//! Simulated object: an interpolated position plus the sprite drawn there.

use crate::components::interpolated::Interpolated;
use crate::components::sprite::Sprite;

#[derive(Clone, Debug)]
pub struct Object {
    pub motion: Interpolated,
    pub sprite: Sprite,
}

impl Object {
    /// Create an object resting at the origin.
    pub fn new(sprite: Sprite) -> Self {
        Self {
            motion: Interpolated::default(),
            sprite,
        }
    }

    /// Builder-style: place the object without blending.
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.motion.snap_to(x, y);
        self
    }
}
