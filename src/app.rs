//! Application lifecycle.
//!
//! 1. Load `config.ini` (defaults on first run) and apply CLI overrides
//! 2. Locate the asset directory
//! 3. Open the window, start audio, load assets
//! 4. Enter the title screen and run the fixed-step loop
//! 5. Exit the active screen, tear everything down in reverse order
//! 6. Save the configuration

use std::path::PathBuf;

use log::{info, warn};

use crate::error::ShellError;
use crate::platform::SystemClock;
use crate::platform::desktop::Desktop;
use crate::resources::assetdir::{default_candidates, find_asset_dir};
use crate::resources::gameconfig::GameConfig;
use crate::screens::machine::ScreenMachine;
use crate::screens::title::TitleScreen;
use crate::systems::gameloop::{LoopState, LoopStats, run_loop};

/// Startup options, usually taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    pub config_path: Option<PathBuf>,
    pub asset_dir: Option<PathBuf>,
    pub timestep_ms: Option<u64>,
    pub mute: bool,
}

/// Build the configuration: file values first, then command-line overrides.
///
/// Overrides apply to this run only and are not saved back to the file.
pub fn load_config(options: &AppOptions) -> GameConfig {
    let mut config = match &options.config_path {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Some(ms) = options.timestep_ms {
        if !config.set_timestep(ms) {
            warn!(
                "Ignoring --timestep {}; keeping {} ms",
                ms,
                config.step_ms()
            );
        }
    }
    config
}

/// Run the application until the user quits.
pub fn run(options: AppOptions) -> Result<LoopStats, ShellError> {
    let config = load_config(&options);
    config.log_summary();

    let asset_dir = find_asset_dir(&default_candidates(options.asset_dir.as_deref()))?;

    let mut ctx = Desktop::init(config, &asset_dir, !options.mute)?;

    let mut machine = ScreenMachine::new();
    machine.activate(&mut ctx, Some(Box::new(TitleScreen::new())));

    let clock = SystemClock::new();
    let mut state = LoopState::new(ctx.config.step_ms());
    let stats = run_loop(&clock, &mut machine, &mut ctx, &mut state);

    machine.shutdown(&mut ctx);
    info!(
        "Loop finished: {:?} after {} frame(s), {} step(s), {} screen change(s)",
        stats.exit,
        stats.frames,
        stats.steps,
        machine.transitions()
    );

    let config = ctx.shutdown();
    config.save_to_file()?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(name: &str, contents: Option<&str>) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "aberredshell_app_{}_{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).expect("create temp dir");
        let path = dir.join("config.ini");
        if let Some(contents) = contents {
            std::fs::write(&path, contents).expect("write config");
        }
        path
    }

    #[test]
    fn test_timestep_flag_overrides_file() {
        let path = temp_config("override", Some("[loop]\ntimestep_ms = 20\n"));
        let config = load_config(&AppOptions {
            config_path: Some(path.clone()),
            timestep_ms: Some(10),
            ..Default::default()
        });
        assert_eq!(config.step_ms(), 10);
        assert_eq!(config.path(), path.as_path());
    }

    #[test]
    fn test_invalid_timestep_flag_is_ignored() {
        let path = temp_config("invalid", Some("[loop]\ntimestep_ms = 20\n"));
        let config = load_config(&AppOptions {
            config_path: Some(path),
            timestep_ms: Some(0),
            ..Default::default()
        });
        assert_eq!(config.step_ms(), 20);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = temp_config("missing", None);
        let config = load_config(&AppOptions {
            config_path: Some(path),
            ..Default::default()
        });
        assert_eq!(config.step_ms(), 16);
        assert_eq!(config.window_size(), (800, 600));
    }

    #[test]
    fn test_timestep_flag_is_not_saved() {
        let path = temp_config("persist", Some("[loop]\ntimestep_ms = 20\n"));
        let config = load_config(&AppOptions {
            config_path: Some(path.clone()),
            timestep_ms: Some(5),
            ..Default::default()
        });
        assert_eq!(config.step_ms(), 5);
        config.save_to_file().expect("save");

        let reloaded = load_config(&AppOptions {
            config_path: Some(path.clone()),
            ..Default::default()
        });
        assert_eq!(reloaded.step_ms(), 20);
        assert_eq!(reloaded.timestep_ms, 20);

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }
}
