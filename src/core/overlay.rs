//=========================================================================
// UI Overlay Capability
//
// Optional collaborator for debug UIs and in-app consoles that want
// keyboard capture. The pump invokes it only when present, and only
// after the binding pre-pass has declined the input cycle: bindings
// take priority over raw text capture.
//
//=========================================================================

use crate::core::event::Key;

//=== UiOverlay ===========================================================

/// Keyboard-capture overlay hooks.
///
/// `input_text` receives decoded text when the overlay wants keyboard
/// focus; `set_key` mirrors every key transition into the overlay's key
/// table regardless of focus, so it can track chords across focus
/// changes.
pub trait UiOverlay {
    /// Whether the overlay currently wants to capture keyboard input.
    fn wants_keyboard(&self) -> bool;

    /// Forwarded UTF-8 text, one decoded character per call.
    fn input_text(&mut self, text: &str);

    /// Mirror of the raw key table.
    fn set_key(&mut self, key: Key, down: bool);
}
