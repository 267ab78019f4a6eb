//! Long-lived data used by the platform and the screens.
//!
//! Input state, configuration, rendering handles, asset stores and the audio
//! bridge. Each submodule documents the semantics and intended usage of its
//! resource(s).
//!
//! Overview
//! - `assetdir` – locate the asset directory on disk
//! - `assets` – the startup asset manifest and the loaded set
//! - `audio` – bridge and channels for the background audio thread
//! - `gameconfig` – settings persisted in `config.ini`
//! - `glyphfont` – fixed-grid bitmap font layout
//! - `input` – per-step keyboard state of the bound actions
//! - `keymap` – readable key names for the config file
//! - `rendertarget` – fixed-resolution framebuffer
//! - `scene` – objects owned by a screen, addressed by generational IDs
//! - `texturestore` – loaded textures keyed by string IDs
//! - `windowsize` – OS window size and letterbox math
pub mod assetdir;
pub mod assets;
pub mod audio;
pub mod gameconfig;
pub mod glyphfont;
pub mod input;
pub mod keymap;
pub mod rendertarget;
pub mod scene;
pub mod texturestore;
pub mod windowsize;
