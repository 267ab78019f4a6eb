//! aberredshell library.
//!
//! Exposes the loop driver, the screen machine, the interpolated objects and
//! the raylib platform layer for use by the binary and by integration tests.

pub mod app;
pub mod components;
pub mod error;
pub mod events;
pub mod platform;
pub mod resources;
pub mod screens;
pub mod systems;
