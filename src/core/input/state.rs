//=========================================================================
// Input State
//
// Default `InputSink` implementation: a persistent state container for
// keyboard, mouse and gamepad devices, updated by the dispatch loop
// and queried by gameplay/UI code.
//
// Responsibilities:
// - Track per-key down state and the last-seen modifier mask
// - Track absolute mouse position/wheel plus a per-iteration delta
// - Track per-gamepad axes (with deltas), buttons and connection
// - Buffer decoded text input until the application drains it
//
// The binding pre-pass is a no-op here; frameworks with command/binding
// layers supply their own sink or wrap this one.
//
//=========================================================================

use log::debug;

use crate::core::app::AppState;
use crate::core::display::FrameFlags;
use crate::core::event::{GamepadAxis, GamepadButton, GamepadHandle, Key, MouseButton};
use crate::core::input::{InputSink, Modifiers};

/// Gamepad slots tracked simultaneously.
pub const MAX_GAMEPADS: usize = 4;

//=== MouseState ==========================================================

/// Absolute and relative mouse state.
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub dx: i32,
    pub dy: i32,
    pub dz: i32,
    pub buttons: [bool; MouseButton::COUNT],
    pub width: u16,
    pub height: u16,
}

//=== GamepadState ========================================================

/// Per-slot gamepad state.
#[derive(Debug, Clone, Copy)]
pub struct GamepadState {
    pub connected: bool,
    pub axes: [i32; GamepadAxis::COUNT],
    pub axis_delta: [i32; GamepadAxis::COUNT],
    pub buttons: [bool; GamepadButton::COUNT],
}

impl Default for GamepadState {
    fn default() -> Self {
        Self {
            connected: false,
            axes: [0; GamepadAxis::COUNT],
            axis_delta: [0; GamepadAxis::COUNT],
            buttons: [false; GamepadButton::COUNT],
        }
    }
}

//=== InputState ==========================================================

/// Persistent device state fed by the dispatch loop.
#[derive(Debug)]
pub struct InputState {
    keys: [bool; Key::COUNT],
    modifiers: Modifiers,
    chars: Vec<char>,
    mouse: MouseState,
    gamepads: [GamepadState; MAX_GAMEPADS],
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys: [false; Key::COUNT],
            modifiers: Modifiers::empty(),
            chars: Vec::new(),
            mouse: MouseState::default(),
            gamepads: [GamepadState::default(); MAX_GAMEPADS],
        }
    }

    //--- Query Methods ----------------------------------------------------

    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys[key as usize]
    }

    /// Modifier mask from the most recent key event.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Absolute mouse position and wheel value.
    pub fn mouse_position(&self) -> (i32, i32, i32) {
        (self.mouse.x, self.mouse.y, self.mouse.z)
    }

    /// Movement since the last per-iteration reset.
    pub fn mouse_delta(&self) -> (i32, i32, i32) {
        (self.mouse.dx, self.mouse.dy, self.mouse.dz)
    }

    pub fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        self.mouse.buttons[button as usize]
    }

    /// Resolution mouse coordinates are tracked against.
    pub fn mouse_resolution(&self) -> (u16, u16) {
        (self.mouse.width, self.mouse.height)
    }

    pub fn gamepad(&self, gamepad: GamepadHandle) -> Option<&GamepadState> {
        self.gamepads.get(gamepad.0 as usize)
    }

    /// Drains text input buffered since the last call.
    pub fn drain_chars(&mut self) -> impl Iterator<Item = char> + '_ {
        self.chars.drain(..)
    }

    //--- Internal Helpers -------------------------------------------------

    fn gamepad_mut(&mut self, gamepad: GamepadHandle) -> Option<&mut GamepadState> {
        let idx = gamepad.0 as usize;
        debug_assert!(idx < MAX_GAMEPADS, "Invalid gamepad {}", gamepad.0);
        self.gamepads.get_mut(idx)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

//=== InputSink Implementation ============================================

impl InputSink for InputState {
    /// No binding tables here; the cycle is never consumed.
    fn input_process(&mut self, _app: &mut AppState, _flags: &mut FrameFlags) -> bool {
        false
    }

    fn set_key_state(&mut self, key: Key, modifiers: Modifiers, down: bool) {
        self.keys[key as usize] = down;
        self.modifiers = modifiers;
    }

    fn input_char(&mut self, character: char) {
        self.chars.push(character);
    }

    fn set_mouse_position(&mut self, x: i32, y: i32, z: i32) {
        self.mouse.dx += x - self.mouse.x;
        self.mouse.dy += y - self.mouse.y;
        self.mouse.dz += z - self.mouse.z;
        self.mouse.x = x;
        self.mouse.y = y;
        self.mouse.z = z;
    }

    fn set_mouse_button_state(&mut self, button: MouseButton, down: bool) {
        self.mouse.buttons[button as usize] = down;
    }

    fn reset_mouse_movement(&mut self) {
        self.mouse.dx = 0;
        self.mouse.dy = 0;
        self.mouse.dz = 0;
    }

    fn set_mouse_resolution(&mut self, width: u16, height: u16) {
        debug!(target: "input", "Mouse resolution {}x{}", width, height);
        self.mouse.width = width;
        self.mouse.height = height;
    }

    fn set_gamepad_axis(&mut self, gamepad: GamepadHandle, axis: GamepadAxis, value: i32) {
        if let Some(pad) = self.gamepad_mut(gamepad) {
            let idx = axis as usize;
            pad.axis_delta[idx] += value - pad.axes[idx];
            pad.axes[idx] = value;
        }
    }

    fn reset_gamepad_axis_movement(&mut self) {
        for pad in &mut self.gamepads {
            pad.axis_delta = [0; GamepadAxis::COUNT];
        }
    }

    fn set_gamepad_connected(&mut self, gamepad: GamepadHandle, connected: bool) {
        debug!(target: "input", "Gamepad {} connected: {}", gamepad.0, connected);
        if let Some(pad) = self.gamepad_mut(gamepad) {
            pad.connected = connected;
            if !connected {
                *pad = GamepadState::default();
            }
        }
    }

    fn set_gamepad_button_state(
        &mut self,
        gamepad: GamepadHandle,
        button: GamepadButton,
        pressed: bool,
    ) {
        if let Some(pad) = self.gamepad_mut(gamepad) {
            pad.buttons[button as usize] = pressed;
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_state_tracks_press_and_release() {
        let mut input = InputState::new();
        assert!(!input.is_key_down(Key::KeyA));

        input.set_key_state(Key::KeyA, Modifiers::LSHIFT, true);
        assert!(input.is_key_down(Key::KeyA));
        assert!(input.modifiers().shift());

        input.set_key_state(Key::KeyA, Modifiers::empty(), false);
        assert!(!input.is_key_down(Key::KeyA));
    }

    #[test]
    fn mouse_delta_accumulates_until_reset() {
        let mut input = InputState::new();
        input.set_mouse_position(10, 20, 0);
        input.set_mouse_position(15, 18, 1);
        assert_eq!(input.mouse_position(), (15, 18, 1));
        assert_eq!(input.mouse_delta(), (15, 18, 1));

        input.reset_mouse_movement();
        assert_eq!(input.mouse_delta(), (0, 0, 0));
        assert_eq!(input.mouse_position(), (15, 18, 1), "Reset clears the delta only");

        input.set_mouse_position(20, 18, 1);
        assert_eq!(input.mouse_delta(), (5, 0, 0));
    }

    #[test]
    fn mouse_buttons_are_independent() {
        let mut input = InputState::new();
        input.set_mouse_button_state(MouseButton::Left, true);
        assert!(input.is_mouse_button_down(MouseButton::Left));
        assert!(!input.is_mouse_button_down(MouseButton::Right));
    }

    #[test]
    fn gamepad_axis_delta_tracks_movement() {
        let mut input = InputState::new();
        let pad = GamepadHandle(0);

        input.set_gamepad_connected(pad, true);
        input.set_gamepad_axis(pad, GamepadAxis::LeftX, 100);
        input.set_gamepad_axis(pad, GamepadAxis::LeftX, 140);

        let state = input.gamepad(pad).unwrap();
        assert_eq!(state.axes[GamepadAxis::LeftX as usize], 140);
        assert_eq!(state.axis_delta[GamepadAxis::LeftX as usize], 140);

        input.reset_gamepad_axis_movement();
        let state = input.gamepad(pad).unwrap();
        assert_eq!(state.axis_delta[GamepadAxis::LeftX as usize], 0);
        assert_eq!(state.axes[GamepadAxis::LeftX as usize], 140);
    }

    #[test]
    fn disconnect_clears_gamepad_state() {
        let mut input = InputState::new();
        let pad = GamepadHandle(1);

        input.set_gamepad_connected(pad, true);
        input.set_gamepad_button_state(pad, GamepadButton::A, true);
        input.set_gamepad_connected(pad, false);

        let state = input.gamepad(pad).unwrap();
        assert!(!state.connected);
        assert!(!state.buttons[GamepadButton::A as usize]);
    }

    #[test]
    fn chars_buffer_until_drained() {
        let mut input = InputState::new();
        input.input_char('h');
        input.input_char('i');

        let text: String = input.drain_chars().collect();
        assert_eq!(text, "hi");
        assert_eq!(input.drain_chars().count(), 0, "Drain must empty the buffer");
    }

    #[test]
    fn pre_pass_never_consumes_cycle() {
        let mut input = InputState::new();
        let mut app = AppState::new(800, 600);
        let mut flags = FrameFlags::default();
        assert!(!input.input_process(&mut app, &mut flags));
    }
}
