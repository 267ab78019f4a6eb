//! Window housekeeping run on every input poll.
//!
//! - Alt+Enter toggles fullscreen and records the new mode in the config.
//! - While windowed, the maximized flag follows the window and a resize of a
//!   normal window is recorded so the next launch restores it.

use log::{debug, error, info};
use raylib::RaylibHandle;
use raylib::ffi;

use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;

/// Window flags sampled once per poll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowSample {
    pub fullscreen: bool,
    pub maximized: bool,
    /// New client size, when the window was resized since the last poll.
    pub resized: Option<(i32, i32)>,
}

pub fn handle_window_events(rl: &mut RaylibHandle, input: &InputState, config: &mut GameConfig) {
    if input.fullscreen_toggle.just_pressed {
        toggle_fullscreen(rl, config);
    }

    let sample = WindowSample {
        fullscreen: rl.is_window_fullscreen(),
        maximized: rl.is_window_maximized(),
        resized: rl
            .is_window_resized()
            .then(|| (rl.get_screen_width(), rl.get_screen_height())),
    };
    record_window_state(config, &sample);
}

/// Fold a window sample into the persisted settings.
///
/// Fullscreen samples change nothing. A maximized or fullscreen size is never
/// stored as the windowed size.
pub fn record_window_state(config: &mut GameConfig, sample: &WindowSample) {
    if sample.fullscreen {
        return;
    }
    if config.maximized != sample.maximized {
        debug!("Window maximized: {}", sample.maximized);
        config.maximized = sample.maximized;
    }
    if sample.maximized {
        return;
    }
    match sample.resized {
        Some((w, h)) if w > 0 && h > 0 => {
            debug!("Window resized to {}x{}", w, h);
            config.set_window_size(w as u32, h as u32);
        }
        _ => {}
    }
}

fn toggle_fullscreen(rl: &mut RaylibHandle, config: &mut GameConfig) {
    if rl.is_window_fullscreen() {
        rl.toggle_fullscreen();
        let (w, h) = config.window_size();
        rl.set_window_size(w as i32, h as i32);
        rl.restore_window();
        if config.maximized {
            rl.maximize_window();
        }
        if rl.is_window_fullscreen() {
            error!("Failed to disable full screen");
        } else {
            info!("Full screen disabled");
        }
    } else {
        info!("Entering full screen mode");
        let monitor: i32 = unsafe { ffi::GetCurrentMonitor() };
        let monitor_width = unsafe { ffi::GetMonitorWidth(monitor) };
        let monitor_height = unsafe { ffi::GetMonitorHeight(monitor) };
        debug!("Monitor dimensions: {}x{}", monitor_width, monitor_height);
        rl.set_window_size(monitor_width, monitor_height);
        rl.toggle_fullscreen();
        if rl.is_window_fullscreen() {
            info!("Full screen enabled");
        } else {
            error!("Failed to enable full screen");
        }
    }
    config.fullscreen = rl.is_window_fullscreen();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn windowed(maximized: bool, resized: Option<(i32, i32)>) -> WindowSample {
        WindowSample {
            fullscreen: false,
            maximized,
            resized,
        }
    }

    #[test]
    fn test_resize_of_normal_window_is_recorded() {
        let mut config = GameConfig::new();
        record_window_state(&mut config, &windowed(false, Some((1024, 700))));
        assert_eq!(config.window_size(), (1024, 700));
        assert!(!config.maximized);
    }

    #[test]
    fn test_maximize_keeps_windowed_size() {
        let mut config = GameConfig::new();
        record_window_state(&mut config, &windowed(true, Some((1920, 1050))));
        assert!(config.maximized);
        assert_eq!(config.window_size(), (800, 600));

        // Restoring brings back the normal size and clears the flag.
        record_window_state(&mut config, &windowed(false, Some((800, 600))));
        assert!(!config.maximized);
        assert_eq!(config.window_size(), (800, 600));
    }

    #[test]
    fn test_fullscreen_sample_changes_nothing() {
        let mut config = GameConfig::new();
        config.maximized = true;
        let sample = WindowSample {
            fullscreen: true,
            maximized: false,
            resized: Some((2560, 1440)),
        };
        record_window_state(&mut config, &sample);
        assert!(config.maximized);
        assert_eq!(config.window_size(), (800, 600));
    }

    #[test]
    fn test_degenerate_resize_is_ignored() {
        let mut config = GameConfig::new();
        record_window_state(&mut config, &windowed(false, Some((0, 480))));
        assert_eq!(config.window_size(), (800, 600));
    }
}
