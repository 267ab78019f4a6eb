use raylib::prelude::Vector2;

/// Sprite is identified by a texture key and its size in world units.
/// The origin selects the pivot point (in pixels) relative to the texture's top-left
/// used for placement and rotation when rendering.
///
/// The texture itself lives in the [`TextureStore`](crate::resources::texturestore::TextureStore);
/// a sprite only refers to it by key.
#[derive(Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub origin: Vector2,
    /// Rotation in degrees.
    pub angle: f32,
    pub scale: f32,
}

impl Sprite {
    /// Sprite covering a whole texture, pivoting around its center.
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            origin: Vector2 {
                x: width * 0.5,
                y: height * 0.5,
            },
            angle: 0.0,
            scale: 1.0,
        }
    }

    /// Size on screen after scaling.
    pub fn scaled_size(&self) -> (f32, f32) {
        (self.width * self.scale, self.height * self.scale)
    }
}
