//! Drawing helpers.
//!
//! Screens draw into the render target with [`draw_object`] and
//! [`draw_text`]; the platform then scales the target into the window with
//! [`present`]. All functions are generic over the raylib draw scope so the
//! same helpers work inside texture mode and directly on the window.

use raylib::prelude::*;

use crate::components::object::Object;
use crate::resources::glyphfont::GlyphFont;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::texturestore::TextureStore;
use crate::resources::windowsize::WindowSize;

/// Draw an object at its interpolated position, centered on its pivot.
///
/// Panics if the sprite's texture is not loaded.
pub fn draw_object<D: RaylibDraw>(
    d: &mut D,
    textures: &TextureStore,
    object: &Object,
    fraction: f32,
) {
    let sprite = &object.sprite;
    let tex = textures
        .get(&sprite.tex_key)
        .unwrap_or_else(|| panic!("texture '{}' is not loaded", sprite.tex_key));

    let pos = object.motion.interpolated(fraction);
    let (w, h) = sprite.scaled_size();
    let src = Rectangle {
        x: 0.0,
        y: 0.0,
        width: sprite.width,
        height: sprite.height,
    };
    let dest = Rectangle {
        x: pos.x,
        y: pos.y,
        width: w,
        height: h,
    };
    let origin = Vector2 {
        x: sprite.origin.x * sprite.scale,
        y: sprite.origin.y * sprite.scale,
    };
    d.draw_texture_pro(tex, src, dest, origin, sprite.angle, Color::WHITE);
}

/// Draw `text` with the bitmap font, top-left corner at `(x, y)`.
///
/// Panics if the font sheet is not loaded.
pub fn draw_text<D: RaylibDraw>(
    d: &mut D,
    textures: &TextureStore,
    font: &GlyphFont,
    text: &str,
    x: f32,
    y: f32,
    tint: Color,
) {
    let sheet = textures
        .get(&font.tex_key)
        .unwrap_or_else(|| panic!("font sheet '{}' is not loaded", font.tex_key));
    for glyph in GlyphFont::layout(text, x, y) {
        d.draw_texture_pro(
            sheet,
            glyph.src,
            glyph.dst,
            Vector2 { x: 0.0, y: 0.0 },
            0.0,
            tint,
        );
    }
}

/// Scale the render target into the window, letterboxed.
pub fn present<D: RaylibDraw>(d: &mut D, target: &RenderTarget, window: WindowSize) {
    let dest = window.calculate_letterbox(target.game_width, target.game_height);
    d.draw_texture_pro(
        &target.texture,
        target.source_rect(),
        dest,
        Vector2 { x: 0.0, y: 0.0 },
        0.0,
        Color::WHITE,
    );
}
