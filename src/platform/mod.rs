//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the event queue's producer side.
//
// Architecture:
// ```text
//  Main Thread:                        Consumer Thread:
//  ┌──────────────────────────┐       ┌─────────────────────┐
//  │  Winit Event Loop        │       │  EventPump          │
//  │   ↓                      │       │   ↓                 │
//  │  event_mapper            │       │  InputSink          │
//  │   ├─ keys / buttons      │       │  DisplayBackend     │
//  │   └─ sticky modifiers    │       └─────────────────────┘
//  │   ↓                      │                 ▲
//  │  EventProducer ──────────┼─────────────────┘
//  └──────────────────────────┘       Event (queue)
// ```
//
// Key design decisions:
// - **Sticky modifiers**: modifier state persists across events until
//   explicitly changed (matches platform behavior)
// - **Graceful queue overflow**: the producer drops events instead of
//   blocking OS callbacks; drops are logged by the queue
// - **Main thread requirement**: Winit mandates the main thread on
//   macOS/iOS, so `run()` must be called from the thread that owns
//   the process entry point
//
//=========================================================================

//=== Submodules ==========================================================

mod event_mapper;

//=== External Crates =====================================================

use log::{debug, error, info, trace};
use winit::{
    application::ApplicationHandler,
    event::{MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
    dpi::LogicalSize,
};

//=== Internal Imports ====================================================

use crate::core::event::{Event, MouseButton, WindowHandle};
use crate::core::input::Modifiers;
use crate::core::queue::EventProducer;
use event_mapper::{map_key, map_modifiers, map_mouse_button};

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are typically fatal - if the event loop can't be created,
/// the application cannot run windowed.
#[derive(Debug)]
pub enum PlatformError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error (rare, indicates corruption).
    EventLoopExecution(winit::error::EventLoopError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=== Platform ============================================================

/// Window manager and event producer.
///
/// Runs on the main thread and feeds the queue that the pump drains
/// from the consumer side (same thread or another).
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(producer, title, w, h)`
/// 2. **Execution**: `platform.run()` - starts the Winit event loop
/// 3. **Event translation**: Winit calls `ApplicationHandler` methods
/// 4. **Shutdown**: window close → pushes `Event::Exit` → loop exits
pub struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    /// Producer half of the event queue.
    producer: EventProducer,

    /// Sticky modifier state applied to subsequent key events.
    modifiers: Modifiers,

    /// Last cursor position, replayed on wheel events.
    cursor: (i32, i32),

    /// Accumulated wheel value, carried as the mouse z coordinate.
    wheel: i32,

    title: String,
    width: u32,
    height: u32,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a new platform instance feeding the given producer.
    ///
    /// Does not create a window yet - that happens lazily in
    /// `resumed()`.
    pub fn new(producer: EventProducer, title: impl Into<String>, width: u32, height: u32) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            producer,
            modifiers: Modifiers::empty(),
            cursor: (0, 0),
            wheel: 0,
            title: title.into(),
            width,
            height,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Starts the event loop; blocks until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if event loop creation or execution
    /// fails.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit
    /// requirement).
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    fn push(&self, event: Event) {
        self.producer.push(event);
    }

    fn push_mouse_move(&self) {
        self.push(Event::Mouse {
            handle: WindowHandle::DEFAULT,
            x: self.cursor.0,
            y: self.cursor.1,
            z: self.wheel,
            button: MouseButton::None,
            down: false,
            moved: true,
        });
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when the app becomes active (startup or mobile resume).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(self.width, self.height));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.push(Event::Exit);
                event_loop.exit();
            }
        }
    }

    /// Translates per-window events into queue pushes.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.push(Event::Exit);
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                trace!(target: "platform", "Resized to {}x{}", size.width, size.height);
                self.push(Event::Size {
                    handle: WindowHandle::DEFAULT,
                    width: size.width,
                    height: size.height,
                });
            }

            WindowEvent::ModifiersChanged(state) => {
                self.modifiers = map_modifiers(state.state());
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                let winit::keyboard::PhysicalKey::Code(code) = key_event.physical_key else {
                    return;
                };
                let Some(key) = map_key(code) else {
                    trace!(target: "platform", "Unmapped key ignored");
                    return;
                };

                let down = key_event.state.is_pressed();
                self.push(Event::Key {
                    handle: WindowHandle::DEFAULT,
                    key,
                    modifiers: self.modifiers,
                    down,
                });

                if down {
                    if let Some(text) = key_event.text.as_ref() {
                        for character in text.chars() {
                            self.push(Event::Char {
                                handle: WindowHandle::DEFAULT,
                                character,
                            });
                        }
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x as i32, position.y as i32);
                self.push_mouse_move();
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.wheel += match delta {
                    MouseScrollDelta::LineDelta(_, y) => y as i32,
                    MouseScrollDelta::PixelDelta(pos) => pos.y.signum() as i32,
                };
                self.push_mouse_move();
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let Some(button) = map_mouse_button(button) else {
                    return;
                };
                self.push(Event::Mouse {
                    handle: WindowHandle::DEFAULT,
                    x: self.cursor.0,
                    y: self.cursor.1,
                    z: self.wheel,
                    button,
                    down: state.is_pressed(),
                    moved: false,
                });
            }

            _ => {
                // Ignore: focus, occlusion, IME, etc.
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::queue::event_queue;

    #[test]
    fn platform_creation_is_lazy() {
        let (producer, _consumer) = event_queue(8);
        let platform = Platform::new(producer, "test", 800, 600);
        assert!(platform.window.is_none(), "Window should be created lazily");
        assert_eq!(platform.modifiers, Modifiers::empty());
    }

    #[test]
    fn mouse_move_carries_cursor_and_wheel() {
        let (producer, consumer) = event_queue(8);
        let mut platform = Platform::new(producer, "test", 800, 600);

        platform.cursor = (42, 17);
        platform.wheel = 3;
        platform.push_mouse_move();

        match *consumer.poll().unwrap() {
            Event::Mouse { x, y, z, moved, button, .. } => {
                assert_eq!((x, y, z), (42, 17, 3));
                assert!(moved);
                assert_eq!(button, MouseButton::None);
            }
            ref other => panic!("Expected mouse move, got {:?}", other),
        };
    }

    #[test]
    fn push_survives_consumer_drop() {
        let (producer, consumer) = event_queue(8);
        let platform = Platform::new(producer, "test", 800, 600);
        drop(consumer);

        // Must not panic; the queue logs and drops.
        platform.push(Event::Exit);
    }
}
