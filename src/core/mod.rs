//=========================================================================
// Core
//
// The event-pump and frame-pacing core: event vocabulary, queue
// transport, input sink seam, dispatch loop and fixed-timestep
// accumulator. Everything here is platform-agnostic; OS integration
// lives in `crate::platform`.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod app;
pub mod display;
pub mod event;
pub mod frame;
pub mod input;
pub mod overlay;
pub mod pump;
pub mod queue;

//=== Re-exports ==========================================================

pub use app::{App, AppState};
pub use display::{DebugFlags, DisplayBackend, FrameFlags, NullDisplay, ResetFlags};
pub use event::{
    Event, GamepadAxis, GamepadButton, GamepadHandle, Key, MouseButton, WindowHandle,
};
pub use frame::FrameStep;
pub use input::{InputSink, InputState, Modifiers};
pub use overlay::UiOverlay;
pub use pump::EventPump;
pub use queue::{event_queue, EventConsumer, EventProducer, PolledEvent};
