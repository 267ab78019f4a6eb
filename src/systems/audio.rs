//! Audio thread backed by Raylib.
//!
//! [`audio_thread`] runs on its own OS thread, owns the Raylib audio device and
//! every loaded [`Sound`], and answers [`AudioCmd`] messages with
//! [`AudioMessage`] replies. The main thread talks to it only through the
//! channels held by [`crate::resources::audio::AudioBridge`].
//!
//! The thread lives from startup until [`AudioCmd::Shutdown`] or until the
//! command channel is dropped; sounds are unloaded before the device closes.

use crate::events::audio::{AudioCmd, AudioMessage};
use crossbeam_channel::{Receiver, Sender};
use log::{debug, error, info, warn};
use raylib::core::audio::{RaylibAudio, Sound};
use rustc_hash::FxHashMap;

/// Entry point of the dedicated audio thread.
///
/// Reports [`AudioMessage::DeviceReady`] or [`AudioMessage::DeviceFailed`]
/// once, then blocks on the command channel.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            error!("[audio] failed to initialize audio device: {}", e);
            let _ = tx_msg.send(AudioMessage::DeviceFailed {
                error: e.to_string(),
            });
            return;
        }
    };

    info!(
        "[audio] thread starting (id={:?})",
        std::thread::current().id()
    );
    let _ = tx_msg.send(AudioMessage::DeviceReady);

    let mut sounds: FxHashMap<String, Sound> = FxHashMap::default();

    for cmd in rx_cmd.iter() {
        match cmd {
            AudioCmd::LoadFx { id, path } => match audio.new_sound(&path) {
                Ok(sound) => {
                    debug!("[audio] fx loaded id='{}' path='{}'", id, path);
                    sounds.insert(id.clone(), sound);
                    let _ = tx_msg.send(AudioMessage::FxLoaded { id });
                }
                Err(e) => {
                    warn!(
                        "[audio] fx load failed id='{}' path='{}' error='{}'",
                        id, path, e
                    );
                    let _ = tx_msg.send(AudioMessage::FxLoadFailed {
                        id,
                        error: e.to_string(),
                    });
                }
            },
            AudioCmd::PlayFx { id } => {
                if let Some(sound) = sounds.get(&id) {
                    debug!("[audio] fx play id='{}'", id);
                    sound.play();
                } else {
                    warn!("[audio] fx play failed id='{}' reason='not loaded'", id);
                }
            }
            AudioCmd::UnloadAllFx => {
                debug!("[audio] fx unload all ({})", sounds.len());
                sounds.clear();
            }
            AudioCmd::Shutdown => {
                debug!("[audio] shutdown requested");
                break;
            }
        }
    }

    sounds.clear();
    info!(
        "[audio] thread exiting (id={:?})",
        std::thread::current().id()
    );
    // `sounds` drops before `audio`
}
