//! Runtime systems.
//!
//! Submodules overview
//! - [`audio`] – the background audio thread
//! - [`gameloop`] – fixed-timestep loop driver
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`render`] – draw objects and bitmap text, present the render target
//! - [`window`] – fullscreen toggle and resize bookkeeping

pub mod audio;
pub mod gameloop;
pub mod input;
pub mod render;
pub mod window;
