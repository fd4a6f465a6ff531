//=========================================================================
// Event Types
//
// Defines the normalized event vocabulary flowing from the platform
// layer into the dispatch loop. Each variant carries only the fields
// relevant to its kind, so the pump can route payloads without
// downcasting or side tables.
//
// Responsibilities:
// - Represent keyboard, mouse, gamepad and window events portably
// - Identify windows and gamepads through small opaque handles
// - Provide the diagnostic key-name table (one entry per key)
//
// Unknown kinds added later must be ignorable: every consumer matches
// with a default no-op arm.
//
//=========================================================================

use crate::core::input::Modifiers;

//=== WindowHandle ========================================================

/// Opaque identifier for a platform window.
///
/// The pump tracks the handle of the last window that produced an event
/// each iteration; display-reset reconciliation only applies to the
/// default (primary) window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub u16);

impl WindowHandle {
    /// The primary application window.
    pub const DEFAULT: WindowHandle = WindowHandle(0);

    /// Sentinel meaning "no window observed this iteration".
    pub const INVALID: WindowHandle = WindowHandle(u16::MAX);

    pub fn is_default(self) -> bool {
        self == Self::DEFAULT
    }

    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

//=== GamepadHandle =======================================================

/// Opaque identifier for a connected gamepad slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GamepadHandle(pub u16);

impl GamepadHandle {
    pub const INVALID: GamepadHandle = GamepadHandle(u16::MAX);
}

//=== Key =================================================================

/// Physical keyboard key in a portable, closed enumeration.
///
/// The discriminants are stable and index directly into [`KEY_NAMES`],
/// so `Key::COUNT` and the name table must stay in lockstep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Key {
    None,
    Esc,
    Return,
    Tab,
    Space,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    Print,
    Plus,
    Minus,
    LeftBracket,
    RightBracket,
    Semicolon,
    Quote,
    Comma,
    Period,
    Slash,
    Backslash,
    Tilde,

    //--- Function keys ---------------------------------------------------
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,

    //--- Numpad ----------------------------------------------------------
    NumPad0, NumPad1, NumPad2, NumPad3, NumPad4,
    NumPad5, NumPad6, NumPad7, NumPad8, NumPad9,

    //--- Digits ----------------------------------------------------------
    Key0, Key1, Key2, Key3, Key4, Key5, Key6, Key7, Key8, Key9,

    //--- Letters ---------------------------------------------------------
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,
}

impl Key {
    /// Number of key enumerators. Must equal `KEY_NAMES.len()`.
    pub const COUNT: usize = 86;

    /// Human-readable name for diagnostics and binding UIs.
    pub fn name(self) -> &'static str {
        KEY_NAMES[self as usize]
    }
}

/// Diagnostic name table, one entry per [`Key`] enumerator, in
/// declaration order with no gaps or duplicates.
pub static KEY_NAMES: [&str; Key::COUNT] = [
    "None",
    "Esc",
    "Return",
    "Tab",
    "Space",
    "Backspace",
    "Up",
    "Down",
    "Left",
    "Right",
    "Insert",
    "Delete",
    "Home",
    "End",
    "PageUp",
    "PageDown",
    "Print",
    "Plus",
    "Minus",
    "LeftBracket",
    "RightBracket",
    "Semicolon",
    "Quote",
    "Comma",
    "Period",
    "Slash",
    "Backslash",
    "Tilde",
    "F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "F9", "F10", "F11", "F12",
    "NumPad0", "NumPad1", "NumPad2", "NumPad3", "NumPad4",
    "NumPad5", "NumPad6", "NumPad7", "NumPad8", "NumPad9",
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9",
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M",
    "N", "O", "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
];

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// `None` is carried by movement samples, which have no button payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    None,
    Left,
    Middle,
    Right,
}

impl MouseButton {
    pub const COUNT: usize = 4;
}

//=== Gamepad Axes & Buttons ==============================================

/// Analog gamepad axis identifier (stick X/Y plus trigger Z per side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GamepadAxis {
    LeftX,
    LeftY,
    LeftZ,
    RightX,
    RightY,
    RightZ,
}

impl GamepadAxis {
    pub const COUNT: usize = 6;
}

/// Digital gamepad button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GamepadButton {
    None,
    A,
    B,
    X,
    Y,
    ThumbL,
    ThumbR,
    ShoulderL,
    ShoulderR,
    Up,
    Down,
    Left,
    Right,
    Back,
    Start,
    Guide,
}

impl GamepadButton {
    pub const COUNT: usize = 16;
}

//=== Event ===============================================================

/// Normalized platform event.
///
/// A closed sum type: one variant per event kind, each carrying only its
/// own payload. Consumers must keep a default no-op arm when matching so
/// new kinds can be added without breaking old loops.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum Event {
    /// Analog axis sample from a gamepad.
    Axis {
        gamepad: GamepadHandle,
        axis: GamepadAxis,
        value: i32,
    },

    /// Decoded text input character.
    Char {
        handle: WindowHandle,
        character: char,
    },

    /// Application termination request. Short-circuits the drain.
    Exit,

    /// Gamepad connect/disconnect notification.
    Gamepad {
        gamepad: GamepadHandle,
        connected: bool,
    },

    /// Digital gamepad button transition.
    GamepadButton {
        gamepad: GamepadHandle,
        button: GamepadButton,
        pressed: bool,
    },

    /// Mouse sample. `moved == true` carries an absolute position
    /// (x, y, wheel z) and no button; `moved == false` carries a button
    /// transition and no position. Never both from one event.
    Mouse {
        handle: WindowHandle,
        x: i32,
        y: i32,
        z: i32,
        button: MouseButton,
        down: bool,
        moved: bool,
    },

    /// Keyboard key transition with the modifier set held at the time.
    Key {
        handle: WindowHandle,
        key: Key,
        modifiers: Modifiers,
        down: bool,
    },

    /// Window surface resized; triggers display-reset reconciliation.
    Size {
        handle: WindowHandle,
        width: u32,
        height: u32,
    },

    /// Reserved for window lifecycle signals (focus, move, ...).
    Window { handle: WindowHandle },
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    //=====================================================================
    // Handle Tests
    //=====================================================================

    #[test]
    fn default_window_handle_is_valid() {
        assert!(WindowHandle::DEFAULT.is_default());
        assert!(WindowHandle::DEFAULT.is_valid());
    }

    #[test]
    fn invalid_window_handle_is_not_default() {
        assert!(!WindowHandle::INVALID.is_default());
        assert!(!WindowHandle::INVALID.is_valid());
    }

    //=====================================================================
    // Key Name Table Tests
    //=====================================================================

    #[test]
    fn key_table_has_one_name_per_key() {
        assert_eq!(
            KEY_NAMES.len(),
            Key::COUNT,
            "Name table must cover every key enumerator"
        );
        assert_eq!(Key::KeyZ as usize, Key::COUNT - 1, "Enumeration must be gap-free");
    }

    #[test]
    fn key_names_are_distinct_and_non_empty() {
        let unique: HashSet<&str> = KEY_NAMES.iter().copied().collect();
        assert_eq!(unique.len(), KEY_NAMES.len(), "Key names must be distinct");
        assert!(
            KEY_NAMES.iter().all(|name| !name.is_empty()),
            "Key names must be non-empty"
        );
    }

    #[test]
    fn key_name_lookup() {
        assert_eq!(Key::None.name(), "None");
        assert_eq!(Key::Space.name(), "Space");
        assert_eq!(Key::F12.name(), "F12");
        assert_eq!(Key::Key0.name(), "0");
        assert_eq!(Key::KeyA.name(), "A");
        assert_eq!(Key::KeyZ.name(), "Z");
    }

    //=====================================================================
    // Event Tests
    //=====================================================================

    #[test]
    fn events_are_copy_and_comparable() {
        let a = Event::Key {
            handle: WindowHandle::DEFAULT,
            key: Key::KeyA,
            modifiers: Modifiers::empty(),
            down: true,
        };
        let b = a;
        assert_eq!(a, b);
    }

    #[test]
    fn mouse_move_and_button_are_distinct_payloads() {
        let movement = Event::Mouse {
            handle: WindowHandle::DEFAULT,
            x: 10,
            y: 20,
            z: 0,
            button: MouseButton::None,
            down: false,
            moved: true,
        };
        let click = Event::Mouse {
            handle: WindowHandle::DEFAULT,
            x: 0,
            y: 0,
            z: 0,
            button: MouseButton::Left,
            down: true,
            moved: false,
        };
        assert_ne!(movement, click);
    }
}
