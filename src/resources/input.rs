//! Per-step keyboard input.
//!
//! Captures the state of the keys bound to the application's actions. Edges
//! (`just_pressed` / `just_released`) are computed against the previous
//! update, so they fire once per simulation step even when several steps run
//! between two frames.
use raylib::prelude::KeyboardKey;

use crate::resources::gameconfig::KeyBindings;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently active/pressed this step.
    pub active: bool,
    /// Whether the key was pressed since the previous step.
    pub just_pressed: bool,
    /// Whether the key was released since the previous step.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound(KeyboardKey::KEY_NULL)
    }
}

impl BoolState {
    pub fn bound(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding,
        }
    }

    /// Record the new hardware state and derive the edges.
    pub fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

/// Keyboard state of every bound action.
#[derive(Debug, Clone)]
pub struct InputState {
    pub up: BoolState,
    pub down: BoolState,
    pub left: BoolState,
    pub right: BoolState,
    pub accept: BoolState,
    pub cancel: BoolState,
    /// Alt+Enter fullscreen chord; the Enter half is tracked here.
    pub fullscreen_toggle: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self::from_bindings(&KeyBindings::default())
    }
}

impl InputState {
    pub fn from_bindings(keys: &KeyBindings) -> Self {
        Self {
            up: BoolState::bound(keys.up),
            down: BoolState::bound(keys.down),
            left: BoolState::bound(keys.left),
            right: BoolState::bound(keys.right),
            accept: BoolState::bound(keys.accept),
            cancel: BoolState::bound(keys.cancel),
            fullscreen_toggle: BoolState::bound(KeyboardKey::KEY_ENTER),
        }
    }

    /// Refresh every action from a key query.
    pub fn update_with<F>(&mut self, mut is_key_down: F)
    where
        F: FnMut(KeyboardKey) -> bool,
    {
        let alt = is_key_down(KeyboardKey::KEY_LEFT_ALT) || is_key_down(KeyboardKey::KEY_RIGHT_ALT);
        for state in [
            &mut self.up,
            &mut self.down,
            &mut self.left,
            &mut self.right,
            &mut self.cancel,
        ] {
            let down = is_key_down(state.key_binding);
            state.update(down);
        }
        // Enter under Alt belongs to the fullscreen chord.
        let accept = is_key_down(self.accept.key_binding);
        self.accept.update(accept && !alt);
        let enter = is_key_down(self.fullscreen_toggle.key_binding);
        self.fullscreen_toggle.update(alt && enter);
    }

    /// Movement direction from the four direction keys, each axis in `-1..=1`.
    pub fn direction(&self) -> (f32, f32) {
        let axis = |neg: &BoolState, pos: &BoolState| match (neg.active, pos.active) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };
        (axis(&self.left, &self.right), axis(&self.up, &self.down))
    }
}
