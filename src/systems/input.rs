//! Input sampling system.
//!
//! [`update_input_state`] polls the hardware once per tick through the
//! raylib handle and rotates the snapshot pair held by
//! [`crate::resources::input::InputState`]. All edge/level queries happen on
//! the resource afterwards, never against the device directly.

use bevy_ecs::prelude::*;

use crate::resources::input::InputState;

/// Capture one tick of keyboard, mouse and gamepad state.
pub fn update_input_state(mut input: ResMut<InputState>, rl: NonSendMut<raylib::RaylibHandle>) {
    input.sample(&*rl);
}
