//! Texture store.
//!
//! Loaded textures keyed by string IDs. Sprites and fonts refer to textures by
//! key; the store owns the GPU handles and must be emptied before the window
//! closes.

use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

/// Map of texture keys to loaded textures.
///
/// Raylib textures must only be touched from the main thread.
#[derive(Default)]
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    /// Add a texture with the given key.
    pub fn insert(&mut self, id: impl Into<String>, texture: Texture2D) {
        self.map.insert(id.into(), texture);
    }

    /// Get a texture by its key.
    pub fn get(&self, id: impl AsRef<str>) -> Option<&Texture2D> {
        self.map.get(id.as_ref())
    }

    /// Pixel size of a texture.
    pub fn size(&self, id: impl AsRef<str>) -> Option<(f32, f32)> {
        self.get(id)
            .map(|tex| (tex.width as f32, tex.height as f32))
    }

    /// Remove all loaded textures.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Get the number of loaded textures.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
