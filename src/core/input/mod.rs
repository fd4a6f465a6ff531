//=========================================================================
// Input Sink Interface
//
// The seam between the dispatch loop and the input subsystem. The pump
// never owns device state itself; it normalizes queue events into calls
// on an `InputSink`, which keeps raw per-device state, binding tables
// and resolution tracking.
//
// Responsibilities:
// - Define the full sink surface (keyboard, mouse, gamepad, text)
// - Define per-frame reset hooks (mouse movement, gamepad axis deltas)
// - Define the binding pre-pass entry point (`input_process`)
// - Provide modifier flags shared by key events and key state
//
//=========================================================================

//=== Submodules ==========================================================

mod state;

pub use state::InputState;

//=== Internal Imports ====================================================

use crate::core::app::AppState;
use crate::core::display::FrameFlags;
use crate::core::event::{GamepadAxis, GamepadButton, GamepadHandle, Key, MouseButton};

//=== Modifiers ===========================================================

bitflags::bitflags! {
    /// Modifier key mask carried by key events.
    ///
    /// Left and right variants are distinct so binding tables can match
    /// a specific side (e.g. LCtrl+F vs RCtrl+F).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const LALT   = 0x01;
        const RALT   = 0x02;
        const LCTRL  = 0x04;
        const RCTRL  = 0x08;
        const LSHIFT = 0x10;
        const RSHIFT = 0x20;
        const LMETA  = 0x40;
        const RMETA  = 0x80;
    }
}

impl Modifiers {
    pub fn alt(self) -> bool {
        self.intersects(Self::LALT | Self::RALT)
    }

    pub fn ctrl(self) -> bool {
        self.intersects(Self::LCTRL | Self::RCTRL)
    }

    pub fn shift(self) -> bool {
        self.intersects(Self::LSHIFT | Self::RSHIFT)
    }

    pub fn meta(self) -> bool {
        self.intersects(Self::LMETA | Self::RMETA)
    }
}

//=== InputSink ===========================================================

/// Receiver of normalized per-device state updates from the dispatch
/// loop.
///
/// The pump calls these methods while draining the event queue, exactly
/// once per relevant event, in queue order. Implementations own the
/// actual state; the default implementation is [`InputState`].
///
/// # Per-frame hooks
///
/// `reset_mouse_movement` and `reset_gamepad_axis_movement` are invoked
/// at the top of every drain iteration, before the next poll, so
/// relative deltas only ever cover one iteration.
///
/// # Binding pre-pass
///
/// `input_process` runs before raw forwarding each iteration and may
/// consume the input cycle (e.g. a key chord bound to a command). Its
/// return value gates lower-priority consumers such as a text-capture
/// overlay: bindings win over raw capture. Binding handlers may mutate
/// `flags` to request a display reconfiguration; the pump reconciles
/// that at the end of the call.
pub trait InputSink {
    /// Binding pre-pass. Returns `true` if a platform key binding
    /// consumed the current input cycle.
    fn input_process(&mut self, app: &mut AppState, flags: &mut FrameFlags) -> bool;

    //--- Keyboard --------------------------------------------------------

    fn set_key_state(&mut self, key: Key, modifiers: Modifiers, down: bool);

    /// Decoded text input, after the binding pre-pass.
    fn input_char(&mut self, character: char);

    //--- Mouse -----------------------------------------------------------

    /// Absolute mouse position; `z` is the accumulated wheel value.
    fn set_mouse_position(&mut self, x: i32, y: i32, z: i32);

    fn set_mouse_button_state(&mut self, button: MouseButton, down: bool);

    /// Clears the relative movement delta for the coming iteration.
    fn reset_mouse_movement(&mut self);

    /// Resolution the sink normalizes mouse coordinates against.
    /// Updated after every display reset.
    fn set_mouse_resolution(&mut self, width: u16, height: u16);

    //--- Gamepad ---------------------------------------------------------

    fn set_gamepad_axis(&mut self, gamepad: GamepadHandle, axis: GamepadAxis, value: i32);

    /// Clears per-axis movement deltas for the coming iteration.
    fn reset_gamepad_axis_movement(&mut self);

    fn set_gamepad_connected(&mut self, gamepad: GamepadHandle, connected: bool);

    fn set_gamepad_button_state(
        &mut self,
        gamepad: GamepadHandle,
        button: GamepadButton,
        pressed: bool,
    );
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_side_agnostic_queries() {
        assert!(Modifiers::LCTRL.ctrl());
        assert!(Modifiers::RCTRL.ctrl());
        assert!(!Modifiers::LCTRL.shift());

        let combo = Modifiers::LSHIFT | Modifiers::RALT;
        assert!(combo.shift());
        assert!(combo.alt());
        assert!(!combo.meta());
    }

    #[test]
    fn modifiers_default_is_empty() {
        let mods = Modifiers::default();
        assert!(mods.is_empty());
        assert!(!mods.ctrl() && !mods.alt() && !mods.shift() && !mods.meta());
    }
}
