//! Input polling.
//!
//! Reads the hardware keyboard once per simulation step and refreshes
//! [`InputState`]. Edge flags therefore describe changes since the previous
//! step, not the previous frame.

use crate::resources::input::InputState;
use raylib::RaylibHandle;

/// Poll Raylib for every bound key and update the input state.
pub fn update_input_state(rl: &RaylibHandle, input: &mut InputState) {
    input.update_with(|key| rl.is_key_down(key));
}
