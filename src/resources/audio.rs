//! Bridge between the main thread and the background audio thread.
//!
//! Use [`setup_audio`] once during initialization to spawn the audio thread
//! and get an [`AudioBridge`]. Call [`AudioBridge::shutdown`] during teardown
//! to stop the thread and free audio resources.

use std::path::Path;
use std::thread::JoinHandle;
use std::time::Duration;

use crate::error::ShellError;
use crate::events::audio::{AudioCmd, AudioMessage};
use crate::systems::audio::audio_thread;
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, unbounded};
use log::{info, warn};

/// How long to wait for the audio thread to answer a startup request.
const REPLY_TIMEOUT: Duration = Duration::from_secs(5);

/// Channels and join handle of the running audio thread.
pub struct AudioBridge {
    /// Sender for [`AudioCmd`] messages (main -> audio thread).
    tx_cmd: Sender<AudioCmd>,
    /// Receiver for [`AudioMessage`] messages (audio thread -> main).
    rx_msg: Receiver<AudioMessage>,
    handle: JoinHandle<()>,
}

/// Spawn the audio thread and wait until its device is open.
pub fn setup_audio() -> Result<AudioBridge, ShellError> {
    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
    let (tx_msg, rx_msg) = unbounded::<AudioMessage>();

    let handle = std::thread::Builder::new()
        .name("audio".into())
        .spawn(move || audio_thread(rx_cmd, tx_msg))
        .map_err(|e| ShellError::Audio(format!("failed to spawn audio thread: {}", e)))?;

    let bridge = AudioBridge {
        tx_cmd,
        rx_msg,
        handle,
    };
    match bridge.wait_reply()? {
        AudioMessage::DeviceReady => {
            info!("Audio device ready");
            Ok(bridge)
        }
        AudioMessage::DeviceFailed { error } => {
            let _ = bridge.handle.join();
            Err(ShellError::Audio(format!(
                "failed to initialize audio device: {}",
                error
            )))
        }
        other => Err(ShellError::Audio(format!(
            "unexpected reply from audio thread: {:?}",
            other
        ))),
    }
}

impl AudioBridge {
    /// Load a sound effect and block until the audio thread confirms it.
    pub fn load_fx(&self, id: &str, path: &Path) -> Result<(), ShellError> {
        self.send(AudioCmd::LoadFx {
            id: id.to_string(),
            path: path.to_string_lossy().into_owned(),
        })?;
        loop {
            match self.wait_reply()? {
                AudioMessage::FxLoaded { id: loaded } if loaded == id => return Ok(()),
                AudioMessage::FxLoadFailed { id: failed, error } if failed == id => {
                    return Err(ShellError::Asset {
                        kind: "sound",
                        id: failed,
                        path: path.to_path_buf(),
                        reason: error,
                    });
                }
                other => warn!("[audio] ignoring stale reply {:?}", other),
            }
        }
    }

    /// Start playing a loaded sound effect. Does not wait.
    pub fn play_fx(&self, id: &str) {
        if self
            .tx_cmd
            .send(AudioCmd::PlayFx { id: id.to_string() })
            .is_err()
        {
            warn!("[audio] thread is gone, cannot play '{}'", id);
        }
    }

    /// Unload every sound effect.
    pub fn unload_all_fx(&self) {
        let _ = self.tx_cmd.send(AudioCmd::UnloadAllFx);
    }

    /// Request shutdown of the audio thread and join it.
    pub fn shutdown(self) {
        let _ = self.tx_cmd.send(AudioCmd::Shutdown);
        if self.handle.join().is_err() {
            warn!("[audio] thread panicked during shutdown");
        }
    }

    fn send(&self, cmd: AudioCmd) -> Result<(), ShellError> {
        self.tx_cmd
            .send(cmd)
            .map_err(|_| ShellError::Audio("audio thread is not running".into()))
    }

    fn wait_reply(&self) -> Result<AudioMessage, ShellError> {
        self.rx_msg.recv_timeout(REPLY_TIMEOUT).map_err(|e| match e {
            RecvTimeoutError::Timeout => {
                ShellError::Audio("timed out waiting for the audio thread".into())
            }
            RecvTimeoutError::Disconnected => {
                ShellError::Audio("audio thread exited unexpectedly".into())
            }
        })
    }
}
