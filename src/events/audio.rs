/// Commands sent *to* the audio thread
#[derive(Debug, Clone)]
pub enum AudioCmd {
    LoadFx { id: String, path: String },
    PlayFx { id: String },
    UnloadAllFx,
    Shutdown,
}

/// Messages sent *back* from the audio thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioMessage {
    DeviceReady,
    DeviceFailed { error: String },
    FxLoaded { id: String },
    FxLoadFailed { id: String, error: String },
}
