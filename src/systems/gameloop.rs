//! Fixed-timestep main loop.
//!
//! Simulation advances in steps of exactly `step_ms` milliseconds of logical
//! time, while rendering happens once per outer iteration at whatever rate the
//! host allows. Real time that has not yet been turned into steps is kept in an
//! accumulator; its leftover share of a step is handed to the renderer as the
//! interpolation fraction.
//!
//! ```text
//! loop:
//!     accumulator += now - previous_tick
//!     while accumulator >= step_ms: step(); accumulator -= step_ms
//!     render(accumulator / step_ms)
//!     sleep(1)
//! ```
//!
//! There is no cap on the number of steps drained in one frame: a host that
//! cannot keep up will fall further behind rather than slow the simulation.

use log::{debug, info};

use crate::platform::{Clock, EventSource};
use crate::screens::machine::ScreenMachine;

/// Default step duration in milliseconds (62.5 steps per second).
pub const DEFAULT_TIMESTEP_MS: u64 = 16;

/// How long the loop yields to the OS after each rendered frame.
pub const FRAME_YIELD_MS: u64 = 1;

/// Result of a single simulation step as seen by the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Outcome of draining the accumulator for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drain {
    /// Steps run during this drain.
    pub steps: u32,
    /// `Quit` if a step asked the loop to terminate.
    pub control: LoopControl,
}

/// Why [`run_loop`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// No screen was active at the top of a frame.
    NoActiveScreen,
    /// A step reported quit (close request, cancel key or the screen itself).
    QuitRequested,
}

/// Counters collected while the loop runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopStats {
    pub frames: u64,
    pub steps: u64,
    pub exit: LoopExit,
}

/// Transient timing state of the loop, all values in milliseconds.
#[derive(Debug, Clone)]
pub struct LoopState {
    step_ms: u64,
    accumulator: u64,
    previous_tick: u64,
}

impl LoopState {
    /// Create a loop state with an empty accumulator.
    ///
    /// `step_ms` must be non-zero; configuration validates it before it gets here.
    pub fn new(step_ms: u64) -> Self {
        debug_assert!(step_ms > 0, "fixed step must be at least 1 ms");
        Self {
            step_ms: step_ms.max(1),
            accumulator: 0,
            previous_tick: 0,
        }
    }

    /// Anchor the state to the clock reading `now`.
    ///
    /// The previous tick is placed one full step in the past so the very first
    /// frame runs one step before it renders anything.
    pub fn start(&mut self, now: u64) {
        self.previous_tick = now.saturating_sub(self.step_ms);
        self.accumulator = 0;
    }

    /// Read a new clock value and feed the elapsed time into the accumulator.
    /// Returns the elapsed time.
    pub fn advance_to(&mut self, now: u64) -> u64 {
        let elapsed = now.saturating_sub(self.previous_tick);
        self.previous_tick = now;
        self.accumulate(elapsed);
        elapsed
    }

    /// Add `elapsed` milliseconds of real time to the accumulator.
    pub fn accumulate(&mut self, elapsed: u64) {
        self.accumulator += elapsed;
    }

    /// Run `step` once per whole step held in the accumulator.
    ///
    /// Stops at the first step that returns [`LoopControl::Quit`]; in that case
    /// the accumulator may still hold whole steps, which no longer matters since
    /// the loop is ending.
    pub fn drain<F>(&mut self, mut step: F) -> Drain
    where
        F: FnMut() -> LoopControl,
    {
        let mut steps = 0;
        while self.accumulator >= self.step_ms {
            self.accumulator -= self.step_ms;
            steps += 1;
            if step() == LoopControl::Quit {
                return Drain {
                    steps,
                    control: LoopControl::Quit,
                };
            }
        }
        Drain {
            steps,
            control: LoopControl::Continue,
        }
    }

    /// Position of the next render inside the pending step, in `[0, 1)`.
    pub fn fraction(&self) -> f32 {
        self.accumulator as f32 / self.step_ms as f32
    }

    pub fn accumulator(&self) -> u64 {
        self.accumulator
    }

    pub fn step_ms(&self) -> u64 {
        self.step_ms
    }
}

/// Drive `machine` until it runs out of screens or a step reports quit.
///
/// All steps of a frame complete before that frame's render starts. The active
/// screen is left in place when a quit is reported; the caller decides when to
/// run its exit hook via [`ScreenMachine::shutdown`].
pub fn run_loop<C, K>(
    clock: &K,
    machine: &mut ScreenMachine<C>,
    ctx: &mut C,
    state: &mut LoopState,
) -> LoopStats
where
    C: EventSource,
    K: Clock + ?Sized,
{
    info!("Entering main loop ({} ms per step)", state.step_ms());
    state.start(clock.now_ms());

    let mut frames = 0u64;
    let mut steps = 0u64;
    let exit = loop {
        if !machine.is_active() {
            break LoopExit::NoActiveScreen;
        }

        state.advance_to(clock.now_ms());

        let drained = state.drain(|| machine.step(ctx));
        steps += u64::from(drained.steps);
        if drained.control == LoopControl::Quit {
            break LoopExit::QuitRequested;
        }

        machine.render(ctx, state.fraction());
        frames += 1;

        clock.sleep(FRAME_YIELD_MS);
    };

    debug!("Main loop finished: {:?}", exit);
    LoopStats {
        frames,
        steps,
        exit,
    }
}
