//=========================================================================
// Event Dispatch Loop
//
// Drains the platform event queue once per call, routes each event to
// the input sink or the display-reset logic, and reports whether the
// application should terminate.
//
// Architecture:
// ```text
//   EventConsumer ──poll──► EventPump::process_events
//                               │
//                               ├─► InputSink      (normalized state)
//                               ├─► UiOverlay      (optional capture)
//                               └─► DisplayBackend (edge-triggered reset)
// ```
//
// Key behaviors:
// - Exactly-once consumption: each polled event lives inside a scoped
//   guard, released on every exit path (including the Exit early
//   return).
// - Drain to empty: an Exit event short-circuits; anything still queued
//   is drained on the next call.
// - Edge-triggered reset: a Size event forces a flag mismatch, and the
//   backend reset is issued once per detected change, never once per
//   Size event.
//
//=========================================================================

//=== External Crates =====================================================

use log::{debug, trace};

//=== Internal Imports ====================================================

use crate::core::app::AppState;
use crate::core::display::{DisplayBackend, FrameFlags};
use crate::core::event::{Event, WindowHandle};
use crate::core::input::InputSink;
use crate::core::overlay::UiOverlay;
use crate::core::queue::EventConsumer;

//=== EventPump ===========================================================

/// The event dispatch loop.
///
/// Owns the consumer half of the event queue, the input sink and the
/// display backend. The caller owns the [`FrameFlags`] context and the
/// [`AppState`] record, threading both through every call.
///
/// # Contract
///
/// `process_events` returns `true` iff the application should
/// terminate: either an Exit event arrived, or `app.exit_code` left the
/// running sentinel. Callers must check the result every iteration.
pub struct EventPump<I, D> {
    consumer: EventConsumer,
    input: I,
    display: D,
    overlay: Option<Box<dyn UiOverlay>>,
}

impl<I: InputSink, D: DisplayBackend> EventPump<I, D> {
    //--- Construction -----------------------------------------------------

    pub fn new(consumer: EventConsumer, input: I, display: D) -> Self {
        Self {
            consumer,
            input,
            display,
            overlay: None,
        }
    }

    /// Attaches the optional keyboard-capture overlay.
    pub fn with_overlay(mut self, overlay: Box<dyn UiOverlay>) -> Self {
        self.overlay = Some(overlay);
        self
    }

    //--- Accessors --------------------------------------------------------

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    //--- process_events() -------------------------------------------------

    /// Drains the event queue and reconciles display-reset state.
    ///
    /// Returns `true` if the application should terminate.
    ///
    /// Each drain iteration runs the binding pre-pass and clears the
    /// per-iteration relative deltas before polling, so bindings see
    /// the freshest state and deltas never span iterations.
    pub fn process_events(&mut self, app: &mut AppState, flags: &mut FrameFlags) -> bool {
        // Local snapshots; `reset` becomes the mismatch marker.
        let debug = flags.debug;
        let mut reset = flags.reset;

        let mut handle = WindowHandle::INVALID;

        loop {
            let bindings_consumed = self.input.input_process(app, flags);

            self.input.reset_mouse_movement();
            self.input.reset_gamepad_axis_movement();

            // Guard releases the event on every exit path below.
            let Some(event) = self.consumer.poll() else {
                break;
            };

            match *event {
                Event::Axis { gamepad, axis, value } => {
                    self.input.set_gamepad_axis(gamepad, axis, value);
                }

                Event::Char { character, .. } => {
                    self.input.input_char(character);

                    // Bindings outrank raw text capture.
                    if let Some(overlay) = self.overlay.as_deref_mut() {
                        if overlay.wants_keyboard() && !bindings_consumed {
                            let mut utf8 = [0u8; 4];
                            overlay.input_text(character.encode_utf8(&mut utf8));
                        }
                    }
                }

                Event::Exit => return true,

                Event::Gamepad { gamepad, connected } => {
                    debug!(target: "pump", "Gamepad {} connected: {}", gamepad.0, connected);
                    self.input.set_gamepad_connected(gamepad, connected);
                }

                Event::GamepadButton { gamepad, button, pressed } => {
                    self.input.set_gamepad_button_state(gamepad, button, pressed);
                }

                Event::Mouse { handle: window, x, y, z, button, down, moved } => {
                    handle = window;

                    if moved {
                        self.input.set_mouse_position(x, y, z);
                    } else {
                        self.input.set_mouse_button_state(button, down);
                    }
                }

                Event::Key { handle: window, key, modifiers, down } => {
                    handle = window;
                    self.input.set_key_state(key, modifiers, down);

                    if let Some(overlay) = self.overlay.as_deref_mut() {
                        overlay.set_key(key, down);
                    }
                }

                Event::Size { handle: window, width, height } => {
                    trace!(target: "pump", "Size {}x{} on window {}", width, height, window.0);
                    handle = window;
                    app.width = width;
                    app.height = height;
                    // Force a mismatch so a resize always issues a reset,
                    // even when no flag changed.
                    reset = !flags.reset;
                }

                Event::Window { .. } => {}

                #[allow(unreachable_patterns)]
                _ => {}
            }
        }

        // Edge-triggered reconciliation: at most one reset per change,
        // applied with the currently requested flags.
        if handle.is_default() && reset != flags.reset {
            reset = flags.reset;
            self.display.reset(app.width, app.height, reset);
            self.input
                .set_mouse_resolution(app.width as u16, app.height as u16);
        }

        flags.debug = debug;

        !app.is_running()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
