//=========================================================================
// Cadenza — Library Root
//
// Event pump and fixed-timestep frame pacing core for cross-platform
// applications.
//
// Responsibilities:
// - Expose the dispatch loop (`EventPump`) and pacing (`FrameStep`)
// - Expose the event vocabulary and the collaborator seams
//   (`InputSink`, `DisplayBackend`, `UiOverlay`)
// - Keep OS integration (`platform`) separate from the portable core
//
// Typical usage:
// ```no_run
// use cadenza::{App, AppState, EngineBuilder};
//
// struct Game;
//
// impl App for Game {
//     fn update(&mut self, _state: &mut AppState, _step: f32) {}
//     fn render(&mut self, _state: &AppState, _alpha: f32) {}
// }
//
// fn main() {
//     EngineBuilder::new().with_fps(60).build().run(Game);
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------

pub mod core;
pub mod platform;
pub mod prelude;

mod engine;

//--- Public Exports ------------------------------------------------------

pub use crate::core::{
    event_queue, App, AppState, DebugFlags, DisplayBackend, Event, EventConsumer, EventProducer,
    EventPump, FrameFlags, FrameStep, GamepadAxis, GamepadButton, GamepadHandle, InputSink,
    InputState, Key, Modifiers, MouseButton, NullDisplay, ResetFlags, UiOverlay, WindowHandle,
};
pub use engine::{Engine, EngineBuilder};
