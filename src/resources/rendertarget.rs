//! Render target for fixed-resolution rendering.
//!
//! Screens draw into a framebuffer texture at the configured render
//! resolution. The texture is then scaled to the window with letterboxing so
//! the simulation never sees the real window size.

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

use crate::error::ShellError;

/// Framebuffer at the render resolution.
///
/// `RenderTexture2D` is a GPU resource and must stay on the main thread.
pub struct RenderTarget {
    /// The underlying raylib render texture.
    pub texture: RenderTexture2D,
    /// Render width in pixels.
    pub game_width: u32,
    /// Render height in pixels.
    pub game_height: u32,
}

impl RenderTarget {
    /// Create a render target with nearest-neighbor filtering.
    pub fn new(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<Self, ShellError> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| ShellError::RenderTarget(e.to_string()))?;

        // Pixel art: no blur when scaling up.
        unsafe {
            ffi::SetTextureFilter(
                texture.texture,
                TextureFilter::TEXTURE_FILTER_POINT as i32,
            );
        }

        Ok(Self {
            texture,
            game_width: width,
            game_height: height,
        })
    }

    /// Source rectangle for drawing this texture.
    ///
    /// The height is negative to flip the Y axis, compensating for OpenGL's
    /// inverted texture coordinates.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.game_width as f32,
            height: -(self.game_height as f32),
        }
    }
}
