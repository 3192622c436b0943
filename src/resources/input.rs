//! Double-buffered input sampler.
//!
//! Once per tick the sampler captures the state of keyboard, mouse and
//! gamepad, keeping the previous capture around. Edge queries ("just
//! pressed": was up last sample, is down this sample) compare the two
//! snapshots; level queries read a single snapshot directly. Device polling
//! goes through the [`InputDevice`] trait so the game feeds the sampler from
//! the raylib handle while tests feed it a scripted source.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{GamepadAxis, GamepadButton, KeyboardKey, MouseButton, Vector2};
use rustc_hash::FxHashSet;

use crate::resources::inputconfig::InputConfig;

/// Physical device polling boundary.
///
/// Implementations must answer for the instant of the call; the sampler
/// freezes the answers into snapshots.
pub trait InputDevice {
    fn key_down(&self, key: KeyboardKey) -> bool;
    fn mouse_button_down(&self, button: MouseButton) -> bool;
    fn mouse_position(&self) -> Vector2;
    fn gamepad_available(&self, gamepad: i32) -> bool;
    fn gamepad_button_down(&self, gamepad: i32, button: GamepadButton) -> bool;
    fn gamepad_axis(&self, gamepad: i32, axis: GamepadAxis) -> f32;
}

impl InputDevice for raylib::RaylibHandle {
    fn key_down(&self, key: KeyboardKey) -> bool {
        self.is_key_down(key)
    }

    fn mouse_button_down(&self, button: MouseButton) -> bool {
        self.is_mouse_button_down(button)
    }

    fn mouse_position(&self) -> Vector2 {
        self.get_mouse_position()
    }

    fn gamepad_available(&self, gamepad: i32) -> bool {
        self.is_gamepad_available(gamepad)
    }

    fn gamepad_button_down(&self, gamepad: i32, button: GamepadButton) -> bool {
        self.is_gamepad_button_down(gamepad, button)
    }

    fn gamepad_axis(&self, gamepad: i32, axis: GamepadAxis) -> f32 {
        self.get_gamepad_axis_movement(gamepad, axis)
    }
}

/// Keys snapshotted when no extra tracking is requested: the keys a 2D game
/// is likely to bind. Keys outside the tracked list always read as up; use
/// [`InputState::track_key`] to widen the list.
const DEFAULT_TRACKED_KEYS: &[KeyboardKey] = &[
    KeyboardKey::KEY_A,
    KeyboardKey::KEY_B,
    KeyboardKey::KEY_C,
    KeyboardKey::KEY_D,
    KeyboardKey::KEY_E,
    KeyboardKey::KEY_F,
    KeyboardKey::KEY_G,
    KeyboardKey::KEY_H,
    KeyboardKey::KEY_I,
    KeyboardKey::KEY_J,
    KeyboardKey::KEY_K,
    KeyboardKey::KEY_L,
    KeyboardKey::KEY_M,
    KeyboardKey::KEY_N,
    KeyboardKey::KEY_O,
    KeyboardKey::KEY_P,
    KeyboardKey::KEY_Q,
    KeyboardKey::KEY_R,
    KeyboardKey::KEY_S,
    KeyboardKey::KEY_T,
    KeyboardKey::KEY_U,
    KeyboardKey::KEY_V,
    KeyboardKey::KEY_W,
    KeyboardKey::KEY_X,
    KeyboardKey::KEY_Y,
    KeyboardKey::KEY_Z,
    KeyboardKey::KEY_ZERO,
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
    KeyboardKey::KEY_SEVEN,
    KeyboardKey::KEY_EIGHT,
    KeyboardKey::KEY_NINE,
    KeyboardKey::KEY_UP,
    KeyboardKey::KEY_DOWN,
    KeyboardKey::KEY_LEFT,
    KeyboardKey::KEY_RIGHT,
    KeyboardKey::KEY_SPACE,
    KeyboardKey::KEY_ENTER,
    KeyboardKey::KEY_ESCAPE,
    KeyboardKey::KEY_TAB,
    KeyboardKey::KEY_BACKSPACE,
    KeyboardKey::KEY_LEFT_SHIFT,
    KeyboardKey::KEY_RIGHT_SHIFT,
    KeyboardKey::KEY_LEFT_CONTROL,
    KeyboardKey::KEY_RIGHT_CONTROL,
    KeyboardKey::KEY_LEFT_ALT,
    KeyboardKey::KEY_RIGHT_ALT,
    KeyboardKey::KEY_F1,
    KeyboardKey::KEY_F2,
    KeyboardKey::KEY_F3,
    KeyboardKey::KEY_F4,
    KeyboardKey::KEY_F5,
    KeyboardKey::KEY_F6,
    KeyboardKey::KEY_F7,
    KeyboardKey::KEY_F8,
    KeyboardKey::KEY_F9,
    KeyboardKey::KEY_F10,
    KeyboardKey::KEY_F11,
    KeyboardKey::KEY_F12,
];

/// Frozen keyboard sample: which tracked keys were down.
#[derive(Debug, Clone, Default)]
pub struct KeyboardSnapshot {
    down: FxHashSet<i32>,
}

impl KeyboardSnapshot {
    fn capture(device: &impl InputDevice, tracked: &[KeyboardKey]) -> Self {
        let mut down = FxHashSet::default();
        for &key in tracked {
            if device.key_down(key) {
                down.insert(key as i32);
            }
        }
        Self { down }
    }

    /// Whether `key` was down in this sample.
    pub fn is_down(&self, key: KeyboardKey) -> bool {
        self.down.contains(&(key as i32))
    }
}

/// Frozen mouse sample: cursor position and button levels.
#[derive(Debug, Clone, Copy)]
pub struct MouseSnapshot {
    pub position: Vector2,
    pub left_down: bool,
    pub right_down: bool,
}

impl Default for MouseSnapshot {
    fn default() -> Self {
        Self {
            position: Vector2 { x: 0.0, y: 0.0 },
            left_down: false,
            right_down: false,
        }
    }
}

impl MouseSnapshot {
    fn capture(device: &impl InputDevice) -> Self {
        Self {
            position: device.mouse_position(),
            left_down: device.mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT),
            right_down: device.mouse_button_down(MouseButton::MOUSE_BUTTON_RIGHT),
        }
    }
}

/// Frozen gamepad sample. `connected` stays false until the first capture
/// with a pad available.
#[derive(Debug, Clone, Copy)]
pub struct GamepadSnapshot {
    pub connected: bool,
    pub a_down: bool,
    pub b_down: bool,
    pub x_down: bool,
    pub y_down: bool,
    pub left_trigger: f32,
    pub right_trigger: f32,
    pub left_stick: Vector2,
    pub right_stick: Vector2,
}

impl Default for GamepadSnapshot {
    fn default() -> Self {
        Self {
            connected: false,
            a_down: false,
            b_down: false,
            x_down: false,
            y_down: false,
            left_trigger: 0.0,
            right_trigger: 0.0,
            left_stick: Vector2 { x: 0.0, y: 0.0 },
            right_stick: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

impl GamepadSnapshot {
    fn capture(device: &impl InputDevice, gamepad: i32) -> Self {
        Self {
            connected: true,
            a_down: device
                .gamepad_button_down(gamepad, GamepadButton::GAMEPAD_BUTTON_RIGHT_FACE_DOWN),
            b_down: device
                .gamepad_button_down(gamepad, GamepadButton::GAMEPAD_BUTTON_RIGHT_FACE_RIGHT),
            x_down: device
                .gamepad_button_down(gamepad, GamepadButton::GAMEPAD_BUTTON_RIGHT_FACE_LEFT),
            y_down: device
                .gamepad_button_down(gamepad, GamepadButton::GAMEPAD_BUTTON_RIGHT_FACE_UP),
            left_trigger: device.gamepad_axis(gamepad, GamepadAxis::GAMEPAD_AXIS_LEFT_TRIGGER),
            right_trigger: device.gamepad_axis(gamepad, GamepadAxis::GAMEPAD_AXIS_RIGHT_TRIGGER),
            left_stick: Vector2 {
                x: device.gamepad_axis(gamepad, GamepadAxis::GAMEPAD_AXIS_LEFT_X),
                y: device.gamepad_axis(gamepad, GamepadAxis::GAMEPAD_AXIS_LEFT_Y),
            },
            right_stick: Vector2 {
                x: device.gamepad_axis(gamepad, GamepadAxis::GAMEPAD_AXIS_RIGHT_X),
                y: device.gamepad_axis(gamepad, GamepadAxis::GAMEPAD_AXIS_RIGHT_Y),
            },
        }
    }
}

/// Per-tick input sampler: previous and current snapshots of every device.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    tracked: Vec<KeyboardKey>,
    gamepad: i32,
    stick_deadzone: f32,
    trigger_threshold: f32,
    last_keyboard: KeyboardSnapshot,
    current_keyboard: KeyboardSnapshot,
    last_mouse: MouseSnapshot,
    current_mouse: MouseSnapshot,
    last_pad: GamepadSnapshot,
    current_pad: GamepadSnapshot,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::with_config(&InputConfig::default())
    }

    pub fn with_config(config: &InputConfig) -> Self {
        Self {
            tracked: DEFAULT_TRACKED_KEYS.to_vec(),
            gamepad: config.gamepad,
            stick_deadzone: config.stick_deadzone,
            trigger_threshold: config.trigger_threshold,
            last_keyboard: KeyboardSnapshot::default(),
            current_keyboard: KeyboardSnapshot::default(),
            last_mouse: MouseSnapshot::default(),
            current_mouse: MouseSnapshot::default(),
            last_pad: GamepadSnapshot::default(),
            current_pad: GamepadSnapshot::default(),
        }
    }

    /// Track a key beyond the default list.
    pub fn track_key(&mut self, key: KeyboardKey) {
        if !self.tracked.contains(&key) {
            self.tracked.push(key);
        }
    }

    /// Capture one tick of device state.
    ///
    /// Keyboard and mouse pairs rotate unconditionally. The gamepad pair
    /// rotates only while a pad is available: unplugging freezes the
    /// last-known gamepad sample instead of zeroing it.
    pub fn sample(&mut self, device: &impl InputDevice) {
        let keyboard = KeyboardSnapshot::capture(device, &self.tracked);
        self.last_keyboard = std::mem::replace(&mut self.current_keyboard, keyboard);

        let mouse = MouseSnapshot::capture(device);
        self.last_mouse = std::mem::replace(&mut self.current_mouse, mouse);

        if device.gamepad_available(self.gamepad) {
            let pad = GamepadSnapshot::capture(device, self.gamepad);
            self.last_pad = std::mem::replace(&mut self.current_pad, pad);
        }
    }

    /// True only on the sample where `key` went from up to down.
    pub fn key_pressed(&self, key: KeyboardKey) -> bool {
        !self.last_keyboard.is_down(key) && self.current_keyboard.is_down(key)
    }

    /// Held query. Reads the previous sample: a key registers as held one
    /// tick after it first shows up in [`InputState::key_pressed`].
    pub fn key_down(&self, key: KeyboardKey) -> bool {
        self.last_keyboard.is_down(key)
    }

    pub fn mouse_left_pressed(&self) -> bool {
        !self.last_mouse.left_down && self.current_mouse.left_down
    }

    pub fn mouse_left_down(&self) -> bool {
        self.current_mouse.left_down
    }

    pub fn mouse_right_pressed(&self) -> bool {
        !self.last_mouse.right_down && self.current_mouse.right_down
    }

    pub fn mouse_right_down(&self) -> bool {
        self.current_mouse.right_down
    }

    /// The full current mouse sample.
    pub fn mouse(&self) -> &MouseSnapshot {
        &self.current_mouse
    }

    pub fn mouse_position(&self) -> Vector2 {
        self.current_mouse.position
    }

    pub fn gamepad_connected(&self) -> bool {
        self.current_pad.connected
    }

    pub fn gamepad_a_pressed(&self) -> bool {
        !self.last_pad.a_down && self.current_pad.a_down
    }

    pub fn gamepad_b_pressed(&self) -> bool {
        !self.last_pad.b_down && self.current_pad.b_down
    }

    pub fn gamepad_x_pressed(&self) -> bool {
        !self.last_pad.x_down && self.current_pad.x_down
    }

    pub fn gamepad_y_pressed(&self) -> bool {
        !self.last_pad.y_down && self.current_pad.y_down
    }

    /// True when the left trigger crossed the configured threshold this
    /// sample.
    pub fn left_trigger_pressed(&self) -> bool {
        self.last_pad.left_trigger <= self.trigger_threshold
            && self.current_pad.left_trigger > self.trigger_threshold
    }

    pub fn right_trigger_pressed(&self) -> bool {
        self.last_pad.right_trigger <= self.trigger_threshold
            && self.current_pad.right_trigger > self.trigger_threshold
    }

    /// Left thumbstick, deadzone-filtered per axis.
    pub fn left_stick(&self) -> Vector2 {
        self.filter_stick(self.current_pad.left_stick)
    }

    /// Right thumbstick, deadzone-filtered per axis.
    pub fn right_stick(&self) -> Vector2 {
        self.filter_stick(self.current_pad.right_stick)
    }

    fn filter_stick(&self, stick: Vector2) -> Vector2 {
        Vector2 {
            x: if stick.x.abs() < self.stick_deadzone {
                0.0
            } else {
                stick.x
            },
            y: if stick.y.abs() < self.stick_deadzone {
                0.0
            } else {
                stick.y
            },
        }
    }
}
