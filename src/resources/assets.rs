//! Startup asset set.
//!
//! Everything the screens use is listed in [`MANIFEST`] and loaded once before
//! the first screen is entered. A missing or unreadable file is fatal.
//! Textures and font sheets stay on the main thread in a [`TextureStore`];
//! sounds are handed to the audio thread.

use std::path::{Path, PathBuf};

use log::{debug, info};
use raylib::prelude::*;
use rustc_hash::FxHashMap;

use crate::components::sprite::Sprite;
use crate::error::ShellError;
use crate::resources::audio::AudioBridge;
use crate::resources::glyphfont::GlyphFont;
use crate::resources::texturestore::TextureStore;

/// Font sheets mark transparent pixels with this colour.
const FONT_COLOR_KEY: Color = Color {
    r: 255,
    g: 255,
    b: 254,
    a: 255,
};

/// Asset IDs and their paths relative to the asset directory.
pub struct AssetManifest {
    pub textures: &'static [(&'static str, &'static str)],
    pub fonts: &'static [(&'static str, &'static str)],
    pub sounds: &'static [(&'static str, &'static str)],
}

pub const MANIFEST: AssetManifest = AssetManifest {
    textures: &[
        ("smile", "images/smile.bmp"),
        ("another", "images/another.bmp"),
    ],
    fonts: &[("basic", "images/font.bmp")],
    sounds: &[("pick", "sounds/pick.wav")],
};

/// Loaded assets.
#[derive(Default)]
pub struct Assets {
    pub textures: TextureStore,
    fonts: FxHashMap<String, GlyphFont>,
    sounds: Vec<String>,
}

impl Assets {
    /// Load every asset in `manifest` from `dir`.
    ///
    /// With no audio bridge (muted) sounds are skipped.
    pub fn load_all(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        dir: &Path,
        audio: Option<&AudioBridge>,
        manifest: &AssetManifest,
    ) -> Result<Self, ShellError> {
        info!("Loading assets from {:?}", dir);
        let mut assets = Assets::default();

        for (id, rel) in manifest.textures {
            let path = dir.join(rel);
            let texture = rl
                .load_texture(th, &path_str(&path))
                .map_err(|e| asset_error("texture", id, &path, e))?;
            debug!("texture '{}' {}x{}", id, texture.width, texture.height);
            assets.textures.insert(*id, texture);
        }

        for (id, rel) in manifest.fonts {
            let path = dir.join(rel);
            let mut image = Image::load_image(&path_str(&path))
                .map_err(|e| asset_error("font", id, &path, e))?;
            image.color_replace(FONT_COLOR_KEY, Color::BLANK);
            let texture = rl
                .load_texture_from_image(th, &image)
                .map_err(|e| asset_error("font", id, &path, e))?;
            let key = font_texture_key(id);
            assets.textures.insert(key.clone(), texture);
            assets.fonts.insert(id.to_string(), GlyphFont::new(key));
            debug!("font '{}'", id);
        }

        if let Some(audio) = audio {
            for (id, rel) in manifest.sounds {
                audio.load_fx(id, &dir.join(rel))?;
                assets.sounds.push(id.to_string());
            }
        } else {
            info!("Audio disabled, skipping {} sound(s)", manifest.sounds.len());
        }

        info!(
            "Assets loaded: {} texture(s), {} font(s), {} sound(s)",
            manifest.textures.len(),
            assets.fonts.len(),
            assets.sounds.len()
        );
        Ok(assets)
    }

    /// Font by ID. Panics on an ID that is not in the manifest.
    pub fn font(&self, id: &str) -> &GlyphFont {
        self.fonts
            .get(id)
            .unwrap_or_else(|| panic!("font '{}' is not loaded", id))
    }

    /// A sprite covering the whole texture `id`.
    /// Panics on an ID that is not in the manifest.
    pub fn sprite(&self, id: &str) -> Sprite {
        let (w, h) = self
            .textures
            .size(id)
            .unwrap_or_else(|| panic!("texture '{}' is not loaded", id));
        Sprite::new(id, w, h)
    }

    /// Free everything in reverse load order: sounds, fonts, textures.
    pub fn release(&mut self, audio: Option<&AudioBridge>) {
        if let Some(audio) = audio {
            if !self.sounds.is_empty() {
                audio.unload_all_fx();
            }
        }
        self.sounds.clear();
        for font in self.fonts.values() {
            debug!("freeing font sheet '{}'", font.tex_key);
        }
        self.fonts.clear();
        let count = self.textures.len();
        self.textures.clear();
        info!("Assets released ({} texture(s))", count);
    }
}

fn font_texture_key(id: &str) -> String {
    format!("font/{}", id)
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn asset_error(kind: &'static str, id: &str, path: &Path, e: impl ToString) -> ShellError {
    ShellError::Asset {
        kind,
        id: id.to_string(),
        path: PathBuf::from(path),
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_ids_are_unique() {
        let mut ids: Vec<&str> = MANIFEST
            .textures
            .iter()
            .chain(MANIFEST.fonts)
            .chain(MANIFEST.sounds)
            .map(|(id, _)| *id)
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_font_sheets_get_their_own_texture_key() {
        assert_eq!(font_texture_key("basic"), "font/basic");
        assert!(MANIFEST
            .textures
            .iter()
            .all(|(id, _)| !id.starts_with("font/")));
    }

    #[test]
    #[should_panic(expected = "not loaded")]
    fn test_unknown_font_panics() {
        let assets = Assets::default();
        let _ = assets.font("missing");
    }
}
