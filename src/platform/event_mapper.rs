//=========================================================================
// Platform Event Mapper
//
// Converts Winit input types to the engine's portable event vocabulary.
// Provides a clean separation between OS-specific input and the
// dispatch loop's internal representation.
//
// Responsibilities:
// - Translate keyboard codes, mouse buttons and modifier state
// - Filter unsupported inputs (mapper returns `None`)
//
//=========================================================================

use winit::event::MouseButton as WinitMouseButton;
use winit::keyboard::{KeyCode as WinitKeyCode, ModifiersState};

use crate::core::event::{Key, MouseButton};
use crate::core::input::Modifiers;

//=== Key Conversion ======================================================
//
// Maps `WinitKeyCode` values to the engine's `Key` enum. Unmapped codes
// (F13-F24, media keys, exotic layouts) return `None` and are filtered
// before they reach the queue.
//

pub(crate) fn map_key(code: WinitKeyCode) -> Option<Key> {
    use WinitKeyCode::*;
    let key = match code {
        Escape => Key::Esc,
        Enter => Key::Return,
        Tab => Key::Tab,
        Space => Key::Space,
        Backspace => Key::Backspace,

        //--- Navigation ---------------------------------------------------
        ArrowUp => Key::Up,
        ArrowDown => Key::Down,
        ArrowLeft => Key::Left,
        ArrowRight => Key::Right,
        Insert => Key::Insert,
        Delete => Key::Delete,
        Home => Key::Home,
        End => Key::End,
        PageUp => Key::PageUp,
        PageDown => Key::PageDown,
        PrintScreen => Key::Print,

        //--- Punctuation --------------------------------------------------
        Equal => Key::Plus,
        Minus => Key::Minus,
        BracketLeft => Key::LeftBracket,
        BracketRight => Key::RightBracket,
        Semicolon => Key::Semicolon,
        Quote => Key::Quote,
        Comma => Key::Comma,
        Period => Key::Period,
        Slash => Key::Slash,
        Backslash => Key::Backslash,
        Backquote => Key::Tilde,

        //--- Function keys ------------------------------------------------
        F1 => Key::F1, F2 => Key::F2, F3 => Key::F3, F4 => Key::F4,
        F5 => Key::F5, F6 => Key::F6, F7 => Key::F7, F8 => Key::F8,
        F9 => Key::F9, F10 => Key::F10, F11 => Key::F11, F12 => Key::F12,

        //--- Numpad -------------------------------------------------------
        Numpad0 => Key::NumPad0, Numpad1 => Key::NumPad1,
        Numpad2 => Key::NumPad2, Numpad3 => Key::NumPad3,
        Numpad4 => Key::NumPad4, Numpad5 => Key::NumPad5,
        Numpad6 => Key::NumPad6, Numpad7 => Key::NumPad7,
        Numpad8 => Key::NumPad8, Numpad9 => Key::NumPad9,

        //--- Digits -------------------------------------------------------
        Digit0 => Key::Key0, Digit1 => Key::Key1, Digit2 => Key::Key2,
        Digit3 => Key::Key3, Digit4 => Key::Key4, Digit5 => Key::Key5,
        Digit6 => Key::Key6, Digit7 => Key::Key7, Digit8 => Key::Key8,
        Digit9 => Key::Key9,

        //--- Letters ------------------------------------------------------
        KeyA => Key::KeyA, KeyB => Key::KeyB, KeyC => Key::KeyC,
        KeyD => Key::KeyD, KeyE => Key::KeyE, KeyF => Key::KeyF,
        KeyG => Key::KeyG, KeyH => Key::KeyH, KeyI => Key::KeyI,
        KeyJ => Key::KeyJ, KeyK => Key::KeyK, KeyL => Key::KeyL,
        KeyM => Key::KeyM, KeyN => Key::KeyN, KeyO => Key::KeyO,
        KeyP => Key::KeyP, KeyQ => Key::KeyQ, KeyR => Key::KeyR,
        KeyS => Key::KeyS, KeyT => Key::KeyT, KeyU => Key::KeyU,
        KeyV => Key::KeyV, KeyW => Key::KeyW, KeyX => Key::KeyX,
        KeyY => Key::KeyY, KeyZ => Key::KeyZ,

        //--- Unmapped -----------------------------------------------------
        _ => return None,
    };
    Some(key)
}

//=== Mouse Conversion ====================================================
//
// Maps Winit mouse buttons to engine buttons. Side/macro buttons are
// filtered.
//

pub(crate) fn map_mouse_button(button: WinitMouseButton) -> Option<MouseButton> {
    match button {
        WinitMouseButton::Left => Some(MouseButton::Left),
        WinitMouseButton::Middle => Some(MouseButton::Middle),
        WinitMouseButton::Right => Some(MouseButton::Right),
        _ => None,
    }
}

//=== Modifier Conversion =================================================

/// Converts Winit modifier state to engine modifier flags.
///
/// Winit's `ModifiersState` does not distinguish sides; left variants
/// stand in for both.
pub(crate) fn map_modifiers(state: ModifiersState) -> Modifiers {
    let mut modifiers = Modifiers::empty();
    if state.shift_key() {
        modifiers |= Modifiers::LSHIFT;
    }
    if state.control_key() {
        modifiers |= Modifiers::LCTRL;
    }
    if state.alt_key() {
        modifiers |= Modifiers::LALT;
    }
    if state.super_key() {
        modifiers |= Modifiers::LMETA;
    }
    modifiers
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_digits_map_directly() {
        assert_eq!(map_key(WinitKeyCode::KeyA), Some(Key::KeyA));
        assert_eq!(map_key(WinitKeyCode::KeyZ), Some(Key::KeyZ));
        assert_eq!(map_key(WinitKeyCode::Digit0), Some(Key::Key0));
        assert_eq!(map_key(WinitKeyCode::Numpad9), Some(Key::NumPad9));
    }

    #[test]
    fn special_keys_map_to_engine_names() {
        assert_eq!(map_key(WinitKeyCode::Escape), Some(Key::Esc));
        assert_eq!(map_key(WinitKeyCode::Enter), Some(Key::Return));
        assert_eq!(map_key(WinitKeyCode::Backquote), Some(Key::Tilde));
        assert_eq!(map_key(WinitKeyCode::PrintScreen), Some(Key::Print));
    }

    #[test]
    fn unmapped_keys_are_filtered() {
        assert_eq!(map_key(WinitKeyCode::F13), None);
        assert_eq!(map_key(WinitKeyCode::MediaPlayPause), None);
    }

    #[test]
    fn mouse_buttons_map_and_filter() {
        assert_eq!(map_mouse_button(WinitMouseButton::Left), Some(MouseButton::Left));
        assert_eq!(map_mouse_button(WinitMouseButton::Middle), Some(MouseButton::Middle));
        assert_eq!(map_mouse_button(WinitMouseButton::Right), Some(MouseButton::Right));
        assert_eq!(map_mouse_button(WinitMouseButton::Back), None);
    }

    #[test]
    fn modifier_state_maps_to_flags() {
        let state = ModifiersState::SHIFT | ModifiersState::CONTROL;
        let modifiers = map_modifiers(state);
        assert!(modifiers.shift());
        assert!(modifiers.ctrl());
        assert!(!modifiers.alt());
        assert!(!modifiers.meta());
    }

    #[test]
    fn empty_modifier_state_maps_to_empty_flags() {
        assert!(map_modifiers(ModifiersState::empty()).is_empty());
    }
}
