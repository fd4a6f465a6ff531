//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use cadenza::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine driver
pub use crate::engine::{Engine, EngineBuilder};

// Application record and callbacks
pub use crate::core::app::{App, AppState};

// Dispatch loop and pacing
pub use crate::core::frame::FrameStep;
pub use crate::core::pump::EventPump;

// Event vocabulary
pub use crate::core::event::{
    Event, GamepadAxis, GamepadButton, GamepadHandle, Key, MouseButton, WindowHandle,
};

// Queue transport
pub use crate::core::queue::{event_queue, EventConsumer, EventProducer};

// Collaborator seams
pub use crate::core::display::{DebugFlags, DisplayBackend, FrameFlags, ResetFlags};
pub use crate::core::input::{InputSink, InputState, Modifiers};
pub use crate::core::overlay::UiOverlay;
