//! Messages exchanged between the main thread and background workers.
//!
//! Submodules overview:
//! - `audio` – commands for the audio thread and the replies it sends back

pub mod audio;
