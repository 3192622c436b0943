//! Input sampling integration tests: a scripted device driven through
//! several ticks of the snapshot-diff sampler.

use raylib::prelude::{GamepadAxis, GamepadButton, KeyboardKey, MouseButton, Vector2};

use reelengine::resources::input::{InputDevice, InputState};
use reelengine::resources::inputconfig::InputConfig;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Scripted device: tests rewrite the fields between samples to simulate
/// the player.
struct ScriptedDevice {
    keys: Vec<KeyboardKey>,
    left: bool,
    right: bool,
    position: Vector2,
    pad_connected: bool,
    a: bool,
    b: bool,
    left_trigger: f32,
    right_trigger: f32,
    left_stick: Vector2,
    right_stick: Vector2,
}

impl ScriptedDevice {
    fn new() -> Self {
        Self {
            keys: Vec::new(),
            left: false,
            right: false,
            position: Vector2 { x: 0.0, y: 0.0 },
            pad_connected: false,
            a: false,
            b: false,
            left_trigger: 0.0,
            right_trigger: 0.0,
            left_stick: Vector2 { x: 0.0, y: 0.0 },
            right_stick: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

impl InputDevice for ScriptedDevice {
    fn key_down(&self, key: KeyboardKey) -> bool {
        self.keys.contains(&key)
    }

    fn mouse_button_down(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::MOUSE_BUTTON_LEFT => self.left,
            MouseButton::MOUSE_BUTTON_RIGHT => self.right,
            _ => false,
        }
    }

    fn mouse_position(&self) -> Vector2 {
        self.position
    }

    fn gamepad_available(&self, _gamepad: i32) -> bool {
        self.pad_connected
    }

    fn gamepad_button_down(&self, _gamepad: i32, button: GamepadButton) -> bool {
        match button {
            GamepadButton::GAMEPAD_BUTTON_RIGHT_FACE_DOWN => self.a,
            GamepadButton::GAMEPAD_BUTTON_RIGHT_FACE_RIGHT => self.b,
            _ => false,
        }
    }

    fn gamepad_axis(&self, _gamepad: i32, axis: GamepadAxis) -> f32 {
        match axis {
            GamepadAxis::GAMEPAD_AXIS_LEFT_TRIGGER => self.left_trigger,
            GamepadAxis::GAMEPAD_AXIS_RIGHT_TRIGGER => self.right_trigger,
            GamepadAxis::GAMEPAD_AXIS_LEFT_X => self.left_stick.x,
            GamepadAxis::GAMEPAD_AXIS_LEFT_Y => self.left_stick.y,
            GamepadAxis::GAMEPAD_AXIS_RIGHT_X => self.right_stick.x,
            GamepadAxis::GAMEPAD_AXIS_RIGHT_Y => self.right_stick.y,
            _ => 0.0,
        }
    }
}

#[test]
fn a_key_tap_produces_exactly_one_press_event() {
    init_logger();
    let mut input = InputState::new();
    let mut device = ScriptedDevice::new();

    let mut presses = 0;
    for tick in 0..6 {
        // Key held on ticks 2 and 3 only.
        device.keys.clear();
        if tick == 2 || tick == 3 {
            device.keys.push(KeyboardKey::KEY_SPACE);
        }
        input.sample(&device);
        if input.key_pressed(KeyboardKey::KEY_SPACE) {
            presses += 1;
        }
    }
    assert_eq!(presses, 1);
}

#[test]
fn held_key_reports_down_one_tick_behind_the_press() {
    init_logger();
    let mut input = InputState::new();
    let mut device = ScriptedDevice::new();

    device.keys.push(KeyboardKey::KEY_D);
    input.sample(&device);
    assert!(input.key_pressed(KeyboardKey::KEY_D));
    assert!(!input.key_down(KeyboardKey::KEY_D));

    input.sample(&device);
    assert!(!input.key_pressed(KeyboardKey::KEY_D));
    assert!(input.key_down(KeyboardKey::KEY_D));

    device.keys.clear();
    input.sample(&device);
    assert!(input.key_down(KeyboardKey::KEY_D));
    input.sample(&device);
    assert!(!input.key_down(KeyboardKey::KEY_D));
}

#[test]
fn mouse_click_and_drag_sequence() {
    init_logger();
    let mut input = InputState::new();
    let mut device = ScriptedDevice::new();

    device.position = Vector2 { x: 100.0, y: 50.0 };
    input.sample(&device);
    assert!(!input.mouse_left_down());

    device.left = true;
    input.sample(&device);
    assert!(input.mouse_left_pressed());

    device.position = Vector2 { x: 140.0, y: 60.0 };
    input.sample(&device);
    assert!(!input.mouse_left_pressed());
    assert!(input.mouse_left_down());
    assert_eq!(input.mouse_position().x, 140.0);
    assert_eq!(input.mouse().position.y, 60.0);

    device.left = false;
    input.sample(&device);
    assert!(!input.mouse_left_down());
}

#[test]
fn gamepad_lifecycle_connect_press_disconnect() {
    init_logger();
    let mut input = InputState::new();
    let mut device = ScriptedDevice::new();

    // No pad yet: queries answer from the default (all-up) snapshot.
    input.sample(&device);
    assert!(!input.gamepad_connected());
    assert!(!input.gamepad_a_pressed());

    device.pad_connected = true;
    input.sample(&device);
    assert!(input.gamepad_connected());

    device.a = true;
    device.left_stick = Vector2 { x: 0.6, y: 0.2 };
    input.sample(&device);
    assert!(input.gamepad_a_pressed());
    assert!(!input.gamepad_b_pressed());

    // Unplug: the sampler stops rotating the pad pair, so the last-known
    // sample stays visible instead of reading as released.
    device.pad_connected = false;
    device.a = false;
    device.left_stick = Vector2 { x: 0.0, y: 0.0 };
    for _ in 0..3 {
        input.sample(&device);
        assert!(input.gamepad_connected());
        assert_eq!(input.left_stick().x, 0.6);
    }
}

#[test]
fn trigger_press_respects_configured_threshold() {
    init_logger();
    let path = std::env::temp_dir().join("reelengine_input_sampling.ini");
    std::fs::write(&path, "[input]\ntrigger_threshold = 0.5\n").unwrap();

    let mut config = InputConfig::with_path(&path);
    config.load_from_file().unwrap();
    assert_eq!(config.trigger_threshold, 0.5);
    std::fs::remove_file(&path).ok();

    let mut input = InputState::with_config(&config);
    let mut device = ScriptedDevice::new();
    device.pad_connected = true;

    input.sample(&device);
    device.right_trigger = 0.4;
    input.sample(&device);
    assert!(!input.right_trigger_pressed());

    device.right_trigger = 0.9;
    input.sample(&device);
    assert!(input.right_trigger_pressed());

    // Held past the threshold: no further edge.
    input.sample(&device);
    assert!(!input.right_trigger_pressed());
}
