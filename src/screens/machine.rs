//! Screen state machine.
//!
//! States: `Inactive -> Active(A) -> Active(B) -> ... -> Inactive`.
//!
//! Contract
//! - [`ScreenMachine::activate`] runs the outgoing screen's `exit` to
//!   completion before the incoming screen's `enter`.
//! - Activating `None` leaves the machine inactive; the loop ends on its next
//!   iteration.
//! - A screen is only stepped or rendered between its `enter` and its `exit`.
//! - Transitions requested by a screen's step are applied after that step
//!   returns, never while a hook is running.

use log::{debug, info};

use crate::platform::EventSource;
use crate::screens::{Screen, Transition};
use crate::systems::gameloop::LoopControl;

/// Owner of the single active screen.
pub struct ScreenMachine<C> {
    active: Option<Box<dyn Screen<C>>>,
    transitions: u64,
}

impl<C> Default for ScreenMachine<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> ScreenMachine<C> {
    /// Create an inactive machine.
    pub fn new() -> Self {
        Self {
            active: None,
            transitions: 0,
        }
    }

    /// Make `next` the active screen, exiting the current one first.
    pub fn activate(&mut self, ctx: &mut C, next: Option<Box<dyn Screen<C>>>) {
        debug!("Changing screen...");

        if let Some(mut current) = self.active.take() {
            debug!("Exiting screen '{}'", current.name());
            current.exit(ctx);
            // `current` is dropped here, together with anything it still owns.
        }

        match next {
            Some(mut screen) => {
                info!("Entering screen '{}'", screen.name());
                screen.enter(ctx);
                self.active = Some(screen);
            }
            None => info!("No active screen"),
        }

        self.transitions += 1;
        debug!("Screen changed.");
    }

    /// Render the active screen, if any.
    pub fn render(&mut self, ctx: &mut C, fraction: f32) {
        if let Some(screen) = self.active.as_mut() {
            screen.render(ctx, fraction);
        }
    }

    /// Exit the active screen, leaving the machine inactive.
    ///
    /// Safe to call more than once; the exit hook only runs for a screen that
    /// is still active.
    pub fn shutdown(&mut self, ctx: &mut C) {
        debug!("Quitting screen...");
        if self.active.is_some() {
            self.activate(ctx, None);
        }
        debug!("Screen quit.");
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Name of the active screen.
    pub fn active_name(&self) -> Option<&str> {
        self.active.as_deref().map(|s| s.name())
    }

    /// Number of calls to [`ScreenMachine::activate`] so far.
    pub fn transitions(&self) -> u64 {
        self.transitions
    }
}

impl<C: EventSource> ScreenMachine<C> {
    /// Run one simulation step of the active screen.
    ///
    /// Events are pumped first. Returns [`LoopControl::Quit`] without touching
    /// the screen when nothing is active or a close was requested.
    pub fn step(&mut self, ctx: &mut C) -> LoopControl {
        let close_requested = ctx.poll_close_requested();

        let Some(screen) = self.active.as_mut() else {
            return LoopControl::Quit;
        };
        if close_requested {
            debug!("Close requested while in '{}'", screen.name());
            return LoopControl::Quit;
        }

        match screen.step(ctx) {
            Transition::Stay => LoopControl::Continue,
            Transition::Switch(next) => {
                self.activate(ctx, Some(next));
                LoopControl::Continue
            }
            Transition::Quit => {
                debug!("Screen '{}' requested quit", screen.name());
                LoopControl::Quit
            }
        }
    }
}
