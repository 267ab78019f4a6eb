//! Raylib desktop context.
//!
//! [`Desktop`] owns the window, the render target, the loaded assets and the
//! audio bridge, and is the context object handed to every screen hook. It
//! implements [`EventSource`] by polling input and window events once per
//! simulation step.

use std::path::Path;

use log::info;
use raylib::prelude::*;

use crate::error::ShellError;
use crate::platform::EventSource;
use crate::resources::assets::{Assets, MANIFEST};
use crate::resources::audio::{AudioBridge, setup_audio};
use crate::resources::gameconfig::{GameConfig, WINDOW_TITLE};
use crate::resources::input::InputState;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::windowsize::WindowSize;
use crate::systems::input::update_input_state;
use crate::systems::render;
use crate::systems::window::handle_window_events;

/// Everything a screen may touch while it runs.
///
/// Field order matters for drop order: GPU resources go before the handle
/// that owns the window.
pub struct Desktop {
    pub config: GameConfig,
    pub input: InputState,
    pub assets: Assets,
    audio: Option<AudioBridge>,
    target: RenderTarget,
    rl: RaylibHandle,
    thread: RaylibThread,
}

impl Desktop {
    /// Open the window, create the render target, start audio (unless
    /// `audio_enabled` is false) and load the asset manifest from `asset_dir`.
    pub fn init(
        config: GameConfig,
        asset_dir: &Path,
        audio_enabled: bool,
    ) -> Result<Self, ShellError> {
        let (window_width, window_height) = config.window_size();
        info!("Opening {}x{} window", window_width, window_height);

        let mut builder = raylib::init();
        builder
            .size(window_width as i32, window_height as i32)
            .title(WINDOW_TITLE)
            .resizable();
        if config.vsync {
            builder.vsync();
        }
        if config.borderless {
            builder.undecorated();
        }
        if config.fullscreen {
            builder.fullscreen();
        }
        let (mut rl, thread) = builder.build();
        // Cancel is a regular binding, not raylib's implicit exit key.
        rl.set_exit_key(None);
        if config.maximized && !config.fullscreen {
            rl.maximize_window();
        }

        let target = RenderTarget::new(
            &mut rl,
            &thread,
            config.render_width,
            config.render_height,
        )?;
        info!(
            "Render target {}x{}",
            target.game_width, target.game_height
        );

        let audio = if audio_enabled {
            Some(setup_audio()?)
        } else {
            info!("Audio muted");
            None
        };

        let assets = Assets::load_all(&mut rl, &thread, asset_dir, audio.as_ref(), &MANIFEST)?;
        let input = InputState::from_bindings(&config.keys);

        Ok(Self {
            config,
            input,
            assets,
            audio,
            target,
            rl,
            thread,
        })
    }

    /// Render resolution in pixels.
    pub fn render_size(&self) -> (f32, f32) {
        (
            self.target.game_width as f32,
            self.target.game_height as f32,
        )
    }

    /// Play a loaded sound effect. Silent when audio is muted.
    pub fn play_sound(&self, id: &str) {
        if let Some(audio) = &self.audio {
            audio.play_fx(id);
        }
    }

    /// Draw one frame.
    ///
    /// `draw` paints into the render target, cleared to `clear`; the target is
    /// then presented letterboxed into the window.
    pub fn draw_frame<F>(&mut self, clear: Color, draw: F)
    where
        F: FnOnce(&mut RaylibTextureMode<'_, RaylibDrawHandle<'_>>, &Assets),
    {
        let window = WindowSize {
            w: self.rl.get_screen_width(),
            h: self.rl.get_screen_height(),
        };
        let mut d = self.rl.begin_drawing(&self.thread);
        {
            let mut t = d.begin_texture_mode(&self.thread, &mut self.target.texture);
            t.clear_background(clear);
            draw(&mut t, &self.assets);
        }
        d.clear_background(Color::BLACK);
        render::present(&mut d, &self.target, window);
    }

    /// Tear down in reverse init order and hand back the configuration so it
    /// can be saved.
    pub fn shutdown(self) -> GameConfig {
        let Desktop {
            config,
            mut assets,
            audio,
            target,
            rl,
            ..
        } = self;

        assets.release(audio.as_ref());
        drop(assets);
        if let Some(audio) = audio {
            audio.shutdown();
            info!("Audio stopped");
        }
        drop(target);
        drop(rl);
        info!("Window closed");
        config
    }
}

impl EventSource for Desktop {
    fn poll_close_requested(&mut self) -> bool {
        update_input_state(&self.rl, &mut self.input);
        handle_window_events(&mut self.rl, &self.input, &mut self.config);
        self.rl.window_should_close() || self.input.cancel.active
    }
}
