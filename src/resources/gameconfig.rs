//! Game configuration.
//!
//! Settings loaded from an INI configuration file at startup and written back
//! at shutdown. Missing files and missing values fall back to safe defaults;
//! invalid values are reported and ignored.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! fullscreen = false
//! borderless = false
//! maximized = false
//! vsync = true
//!
//! [render]
//! width = 800
//! height = 600
//!
//! [loop]
//! timestep_ms = 16
//!
//! [keys]
//! up = W
//! down = S
//! left = A
//! right = D
//! accept = ENTER
//! cancel = ESCAPE
//! ```

use configparser::ini::Ini;
use log::{debug, info, warn};
use raylib::prelude::KeyboardKey;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::resources::keymap::{key_from_name, key_name};
use crate::systems::gameloop::DEFAULT_TIMESTEP_MS;

/// Default safe values for startup
const DEFAULT_RENDER_WIDTH: u32 = 800;
const DEFAULT_RENDER_HEIGHT: u32 = 600;
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_FULLSCREEN: bool = false;
const DEFAULT_BORDERLESS: bool = false;
const DEFAULT_MAXIMIZED: bool = false;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
const MAX_TIMESTEP_MS: u64 = 1000;

pub const WINDOW_TITLE: &str = concat!("aberredshell ", env!("CARGO_PKG_VERSION"));

/// Keys bound to the actions the application understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub up: KeyboardKey,
    pub down: KeyboardKey,
    pub left: KeyboardKey,
    pub right: KeyboardKey,
    pub accept: KeyboardKey,
    pub cancel: KeyboardKey,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: KeyboardKey::KEY_W,
            down: KeyboardKey::KEY_S,
            left: KeyboardKey::KEY_A,
            right: KeyboardKey::KEY_D,
            accept: KeyboardKey::KEY_ENTER,
            cancel: KeyboardKey::KEY_ESCAPE,
        }
    }
}

impl KeyBindings {
    fn entries_mut(&mut self) -> [(&'static str, &mut KeyboardKey); 6] {
        [
            ("up", &mut self.up),
            ("down", &mut self.down),
            ("left", &mut self.left),
            ("right", &mut self.right),
            ("accept", &mut self.accept),
            ("cancel", &mut self.cancel),
        ]
    }

    fn entries(&self) -> [(&'static str, KeyboardKey); 6] {
        [
            ("up", self.up),
            ("down", self.down),
            ("left", self.left),
            ("right", self.right),
            ("accept", self.accept),
            ("cancel", self.cancel),
        ]
    }
}

/// Game configuration.
///
/// Stores window settings, the internal render resolution, the fixed step
/// length and the key bindings.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Internal render width in pixels.
    pub render_width: u32,
    /// Internal render height in pixels.
    pub render_height: u32,
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Start in fullscreen mode.
    pub fullscreen: bool,
    /// Create the window without decorations.
    pub borderless: bool,
    /// Window was maximized when last windowed.
    pub maximized: bool,
    /// Length of one simulation step in milliseconds, as stored in the file.
    pub timestep_ms: u64,
    /// Step length for this run only; never saved.
    timestep_override: Option<u64>,
    pub keys: KeyBindings,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            render_width: DEFAULT_RENDER_WIDTH,
            render_height: DEFAULT_RENDER_HEIGHT,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            vsync: DEFAULT_VSYNC,
            fullscreen: DEFAULT_FULLSCREEN,
            borderless: DEFAULT_BORDERLESS,
            maximized: DEFAULT_MAXIMIZED,
            timestep_ms: DEFAULT_TIMESTEP_MS,
            timestep_override: None,
            keys: KeyBindings::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Returns `Ok(false)` when the file does not exist yet (first run), in
    /// which case the defaults stay in place. Missing values retain their
    /// current values.
    pub fn load_from_file(&mut self) -> Result<bool, ConfigError> {
        if !self.config_path.exists() {
            info!(
                "No config file at {:?}, using defaults",
                self.config_path
            );
            return Ok(false);
        }

        let mut ini = Ini::new();
        ini.load(&self.config_path)
            .map_err(|reason| ConfigError::Read {
                path: self.config_path.clone(),
                reason,
            })?;
        self.apply_ini(&ini);

        info!(
            "Loaded config: {}x{} render, {}x{} window, fullscreen={}, borderless={}, maximized={}, vsync={}, step={}ms",
            self.render_width,
            self.render_height,
            self.window_width,
            self.window_height,
            self.fullscreen,
            self.borderless,
            self.maximized,
            self.vsync,
            self.timestep_ms
        );
        Ok(true)
    }

    /// Copy every valid setting present in `ini` into this configuration.
    pub fn apply_ini(&mut self, ini: &Ini) {
        // [window] section
        if let Some(width) = read_dimension(ini, "window", "width") {
            self.window_width = width;
        }
        if let Some(height) = read_dimension(ini, "window", "height") {
            self.window_height = height;
        }
        if let Some(fullscreen) = read_bool(ini, "window", "fullscreen") {
            self.fullscreen = fullscreen;
        }
        if let Some(borderless) = read_bool(ini, "window", "borderless") {
            self.borderless = borderless;
        }
        if let Some(maximized) = read_bool(ini, "window", "maximized") {
            self.maximized = maximized;
        }
        if let Some(vsync) = read_bool(ini, "window", "vsync") {
            self.vsync = vsync;
        }

        // [render] section
        if let Some(width) = read_dimension(ini, "render", "width") {
            self.render_width = width;
        }
        if let Some(height) = read_dimension(ini, "render", "height") {
            self.render_height = height;
        }

        // [loop] section
        match read_uint(ini, "loop", "timestep_ms") {
            Some(ms) if (1..=MAX_TIMESTEP_MS).contains(&ms) => self.timestep_ms = ms,
            Some(ms) => warn!(
                "loop.timestep_ms = {} is outside 1..={}, keeping {}",
                ms, MAX_TIMESTEP_MS, self.timestep_ms
            ),
            None => {}
        }

        // [keys] section
        for (action, binding) in self.keys.entries_mut() {
            let Some(name) = ini.get("keys", action) else {
                continue;
            };
            match key_from_name(&name) {
                Some(key) => *binding = key,
                None => warn!("Unknown key name '{}' for keys.{}, keeping default", name, action),
            }
        }
    }

    /// Override the step length for this run, rejecting values outside the
    /// valid range. The stored `timestep_ms` is left alone.
    pub fn set_timestep(&mut self, ms: u64) -> bool {
        if (1..=MAX_TIMESTEP_MS).contains(&ms) {
            self.timestep_override = Some(ms);
            true
        } else {
            false
        }
    }

    /// Step length in effect: the run override if any, else the stored value.
    pub fn step_ms(&self) -> u64 {
        self.timestep_override.unwrap_or(self.timestep_ms)
    }

    /// Build the INI representation of this configuration.
    pub fn to_ini(&self) -> Ini {
        let mut ini = Ini::new();

        // [window] section
        ini.set("window", "width", Some(self.window_width.to_string()));
        ini.set("window", "height", Some(self.window_height.to_string()));
        ini.set("window", "fullscreen", Some(self.fullscreen.to_string()));
        ini.set("window", "borderless", Some(self.borderless.to_string()));
        ini.set("window", "maximized", Some(self.maximized.to_string()));
        ini.set("window", "vsync", Some(self.vsync.to_string()));

        // [render] section
        ini.set("render", "width", Some(self.render_width.to_string()));
        ini.set("render", "height", Some(self.render_height.to_string()));

        // [loop] section
        ini.set("loop", "timestep_ms", Some(self.timestep_ms.to_string()));

        // [keys] section
        for (action, key) in self.keys.entries() {
            ini.set("keys", action, key_name(key).map(str::to_string));
        }

        ini
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file, and its directory, if they don't exist.
    pub fn save_to_file(&self) -> Result<(), ConfigError> {
        debug!("Saving configuration to {:?}", self.config_path);
        let write_err = |source| ConfigError::Write {
            path: self.config_path.clone(),
            source,
        };

        if let Some(dir) = self.config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(write_err)?;
        }
        self.to_ini().write(&self.config_path).map_err(write_err)?;

        info!("Saved config to {:?}", self.config_path);
        Ok(())
    }

    /// Set window size.
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_width = width;
        self.window_height = height;
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Path of the configuration file.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Log every setting at debug level.
    pub fn log_summary(&self) {
        debug!("Listing configuration...");
        debug!("  Config file:       {:?}", self.config_path);
        debug!("  Window size:       {}x{}", self.window_width, self.window_height);
        debug!("  Window fullscreen: {}", self.fullscreen);
        debug!("  Window borderless: {}", self.borderless);
        debug!("  Window maximized:  {}", self.maximized);
        debug!("  Vsync:             {}", self.vsync);
        debug!("  Render size:       {}x{}", self.render_width, self.render_height);
        debug!("  Step length:       {} ms", self.step_ms());
        for (action, key) in self.keys.entries() {
            debug!("  Key {:<14} {}", format!("{}:", action), key_name(key).unwrap_or("?"));
        }
        debug!("End of configuration.");
    }
}

fn read_uint(ini: &Ini, section: &str, key: &str) -> Option<u64> {
    match ini.getuint(section, key) {
        Ok(value) => value,
        Err(e) => {
            warn!("Ignoring {}.{}: {}", section, key, e);
            None
        }
    }
}

/// A pixel size: positive and fitting in `u32`.
fn read_dimension(ini: &Ini, section: &str, key: &str) -> Option<u32> {
    let value = read_uint(ini, section, key)?;
    match u32::try_from(value) {
        Ok(0) | Err(_) => {
            warn!("{}.{} = {} is not a valid size, ignoring", section, key, value);
            None
        }
        Ok(v) => Some(v),
    }
}

fn read_bool(ini: &Ini, section: &str, key: &str) -> Option<bool> {
    match ini.getbool(section, key) {
        Ok(value) => value,
        Err(e) => {
            warn!("Ignoring {}.{}: {}", section, key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Ini {
        let mut ini = Ini::new();
        ini.read(text.to_string()).expect("valid ini");
        ini
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("aberredshell-test-{}-{}", std::process::id(), name))
            .join("config.ini")
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (800, 600));
        assert_eq!(config.timestep_ms, 16);
        assert_eq!(config.keys.cancel, KeyboardKey::KEY_ESCAPE);
        assert!(!config.fullscreen);
    }

    #[test]
    fn test_apply_reads_all_sections() {
        let mut config = GameConfig::new();
        config.apply_ini(&parse(
            "[window]\nwidth = 1024\nheight = 768\nfullscreen = true\n\
             [render]\nwidth = 320\nheight = 240\n\
             [loop]\ntimestep_ms = 10\n\
             [keys]\nup = UP\ncancel = q\n",
        ));
        assert_eq!(config.window_size(), (1024, 768));
        assert!(config.fullscreen);
        assert_eq!((config.render_width, config.render_height), (320, 240));
        assert_eq!(config.timestep_ms, 10);
        assert_eq!(config.keys.up, KeyboardKey::KEY_UP);
        assert_eq!(config.keys.cancel, KeyboardKey::KEY_Q);
        assert_eq!(config.keys.down, KeyboardKey::KEY_S);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let mut config = GameConfig::new();
        config.apply_ini(&parse(
            "[window]\nwidth = wide\n\
             [render]\nwidth = 0\n\
             [loop]\ntimestep_ms = 0\n\
             [keys]\nleft = NOPE\n",
        ));
        assert_eq!(config.window_width, 800);
        assert_eq!(config.render_width, 800);
        assert_eq!(config.timestep_ms, 16);
        assert_eq!(config.keys.left, KeyboardKey::KEY_A);
    }

    #[test]
    fn test_window_size_must_fit_and_be_positive() {
        let mut config = GameConfig::new();
        config.apply_ini(&parse(
            "[window]\nwidth = 0\nheight = 4294967296\n\
             [render]\nheight = 99999999999\n",
        ));
        assert_eq!(config.window_size(), (800, 600));
        assert_eq!(config.render_height, 600);

        config.apply_ini(&parse("[window]\nwidth = 4294967295\n"));
        assert_eq!(config.window_width, u32::MAX);
    }

    #[test]
    fn test_set_timestep_bounds() {
        let mut config = GameConfig::new();
        assert!(!config.set_timestep(0));
        assert!(!config.set_timestep(1001));
        assert_eq!(config.step_ms(), 16);
        assert!(config.set_timestep(33));
        assert_eq!(config.step_ms(), 33);
        assert_eq!(config.timestep_ms, 16);
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let mut config = GameConfig::with_path(temp_path("missing"));
        assert!(!config.load_from_file().expect("missing file is fine"));
        assert_eq!(config.window_size(), (800, 600));
    }

    #[test]
    fn test_save_creates_directory_and_loads_back() {
        let path = temp_path("save");
        let mut config = GameConfig::with_path(&path);
        config.set_window_size(1280, 720);
        config.keys.accept = KeyboardKey::KEY_SPACE;
        config.timestep_ms = 20;
        config.save_to_file().expect("save");

        let mut loaded = GameConfig::with_path(&path);
        assert!(loaded.load_from_file().expect("load"));
        assert_eq!(loaded.window_size(), (1280, 720));
        assert_eq!(loaded.keys.accept, KeyboardKey::KEY_SPACE);
        assert_eq!(loaded.timestep_ms, 20);

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_maximized_survives_save_and_load() {
        let mut config = GameConfig::new();
        assert!(!config.maximized);
        config.apply_ini(&parse("[window]\nmaximized = true\n"));
        assert!(config.maximized);

        let path = temp_path("maximized");
        let mut config = GameConfig::with_path(&path);
        config.maximized = true;
        config.set_window_size(640, 480);
        config.save_to_file().expect("save");

        let mut loaded = GameConfig::with_path(&path);
        assert!(loaded.load_from_file().expect("load"));
        assert!(loaded.maximized);
        assert_eq!(loaded.window_size(), (640, 480));

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }
}
