//! Application screens.
//!
//! A screen is one unit of application state (title card, gameplay, ...) with
//! its own lifecycle hooks. Exactly one screen is active at a time; the
//! [`machine::ScreenMachine`] owns it and runs the hooks in order:
//!
//! - `enter` once when the screen becomes active; build owned entities here
//! - `step` once per fixed simulation step
//! - `render` once per frame, with the interpolation fraction
//! - `exit` once when the screen is replaced or the application shuts down;
//!   release owned entities here
//!
//! Hooks receive the context object `C` (the desktop context at runtime, a
//! recording fake in tests) instead of reaching for globals.

pub mod game;
pub mod machine;
pub mod title;

/// What the machine should do after a screen's step hook returns.
pub enum Transition<C> {
    /// Keep the current screen.
    Stay,
    /// Replace the current screen with another one.
    Switch(Box<dyn Screen<C>>),
    /// Ask the loop to terminate.
    Quit,
}

impl<C> std::fmt::Debug for Transition<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transition::Stay => write!(f, "Stay"),
            Transition::Switch(next) => write!(f, "Switch({})", next.name()),
            Transition::Quit => write!(f, "Quit"),
        }
    }
}

/// Lifecycle hooks of a screen.
pub trait Screen<C> {
    /// Human readable label used in logs.
    fn name(&self) -> &str;

    fn enter(&mut self, ctx: &mut C) {
        let _ = ctx;
    }

    fn exit(&mut self, ctx: &mut C) {
        let _ = ctx;
    }

    /// Advance the screen by one fixed step.
    fn step(&mut self, ctx: &mut C) -> Transition<C>;

    /// Draw the screen. `fraction` is in `[0, 1)`.
    fn render(&mut self, ctx: &mut C, fraction: f32);
}
