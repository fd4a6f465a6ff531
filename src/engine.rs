//=========================================================================
// Engine Driver
//
// Owns the main loop: one `process_events` drain per iteration, then
// zero or more fixed-step updates as authorized by `FrameStep`, then
// one render with the interpolation fraction.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──►  Engine  ──run(app)──►  exit code
//         │                          │
//         ├─ with_fps()              ├─ EventPump (drain + reconcile)
//         ├─ with_channel_capacity() ├─ FrameStep (fixed-step pacing)
//         └─ with_display()/...      └─ App::update / App::render
// ```
//
//=========================================================================

//=== External Crates =====================================================

use log::{debug, info};

//=== Internal Imports ====================================================

use crate::core::app::{App, AppState};
use crate::core::display::{DisplayBackend, FrameFlags, NullDisplay};
use crate::core::frame::FrameStep;
use crate::core::input::{InputSink, InputState};
use crate::core::overlay::UiOverlay;
use crate::core::pump::EventPump;
use crate::core::queue::{event_queue, EventProducer};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **FPS**: 60 (fixed logical updates per second)
/// - **Channel capacity**: 128 events
/// - **Size**: 800x600
/// - **Input sink**: [`InputState`]
/// - **Display**: [`NullDisplay`] (headless)
///
/// # Examples
///
/// ```no_run
/// use cadenza::{App, AppState, EngineBuilder};
///
/// struct Game;
/// impl App for Game {
///     fn update(&mut self, _state: &mut AppState, _step: f32) {}
///     fn render(&mut self, _state: &AppState, _alpha: f32) {}
/// }
///
/// EngineBuilder::new()
///     .with_fps(120)
///     .with_channel_capacity(256)
///     .build()
///     .run(Game);
/// ```
pub struct EngineBuilder<I = InputState, D = NullDisplay> {
    fps: u32,
    channel_capacity: usize,
    width: u32,
    height: u32,
    input: I,
    display: D,
    overlay: Option<Box<dyn UiOverlay>>,
}

impl EngineBuilder<InputState, NullDisplay> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            fps: 60,
            channel_capacity: 128,
            width: 800,
            height: 600,
            input: InputState::new(),
            display: NullDisplay,
            overlay: None,
        }
    }
}

impl Default for EngineBuilder<InputState, NullDisplay> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: InputSink, D: DisplayBackend> EngineBuilder<I, D> {
    /// Sets the fixed logical update rate.
    ///
    /// # Panics
    ///
    /// Panics if `fps == 0`.
    pub fn with_fps(mut self, fps: u32) -> Self {
        assert!(fps > 0, "FPS must be positive");
        self.fps = fps;
        self
    }

    /// Sets the event queue capacity.
    ///
    /// Larger values buffer more platform events during frame spikes;
    /// overflowing events are dropped by the producer.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets the initial application dimensions.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Replaces the input sink.
    pub fn with_input<I2: InputSink>(self, input: I2) -> EngineBuilder<I2, D> {
        EngineBuilder {
            fps: self.fps,
            channel_capacity: self.channel_capacity,
            width: self.width,
            height: self.height,
            input,
            display: self.display,
            overlay: self.overlay,
        }
    }

    /// Replaces the display backend.
    pub fn with_display<D2: DisplayBackend>(self, display: D2) -> EngineBuilder<I, D2> {
        EngineBuilder {
            fps: self.fps,
            channel_capacity: self.channel_capacity,
            width: self.width,
            height: self.height,
            input: self.input,
            display,
            overlay: self.overlay,
        }
    }

    /// Attaches a keyboard-capture overlay.
    pub fn with_overlay(mut self, overlay: Box<dyn UiOverlay>) -> Self {
        self.overlay = Some(overlay);
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine<I, D> {
        info!(
            "Building engine ({} fps, channel: {})",
            self.fps, self.channel_capacity
        );

        let (producer, consumer) = event_queue(self.channel_capacity);
        let mut pump = EventPump::new(consumer, self.input, self.display);
        if let Some(overlay) = self.overlay {
            pump = pump.with_overlay(overlay);
        }

        Engine {
            producer,
            pump,
            pacing: FrameStep::new(self.fps),
            state: AppState::new(self.width, self.height),
            flags: FrameFlags::default(),
        }
    }
}

//=== Engine ==============================================================

/// The application runtime.
///
/// One iteration of [`Engine::run`]:
/// 1. Drain platform events (`EventPump::process_events`)
/// 2. Drain pending fixed steps (`FrameStep::update` → `App::update`)
/// 3. Render once with the interpolation fraction (`App::render`)
///
/// The loop ends when the pump reports termination: an Exit event, or
/// `AppState::quit` called from an update.
pub struct Engine<I = InputState, D = NullDisplay> {
    producer: EventProducer,
    pump: EventPump<I, D>,
    pacing: FrameStep,
    state: AppState,
    flags: FrameFlags,
}

impl<I: InputSink, D: DisplayBackend> Engine<I, D> {
    //--- Accessors --------------------------------------------------------

    /// Producer handle for platform/device threads. Cloneable.
    pub fn producer(&self) -> &EventProducer {
        &self.producer
    }

    pub fn input(&self) -> &I {
        self.pump.input()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Reset/debug flag context; mutate between frames to request a
    /// display reconfiguration.
    pub fn flags_mut(&mut self) -> &mut FrameFlags {
        &mut self.flags
    }

    //--- Execution --------------------------------------------------------

    /// Runs one loop iteration. Returns `true` when the application
    /// should terminate.
    pub fn tick<A: App>(&mut self, app: &mut A) -> bool {
        if self.pump.process_events(&mut self.state, &mut self.flags) {
            return true;
        }

        while self.pacing.update() {
            app.update(&mut self.state, self.pacing.step());
        }

        app.render(&self.state, self.pacing.alpha());
        false
    }

    /// Runs the main loop until termination; returns the exit code.
    ///
    /// An Exit event without an explicit [`AppState::quit`] maps to
    /// exit code 0.
    pub fn run<A: App>(mut self, mut app: A) -> i32 {
        info!(
            "Starting runtime ({:.3} ms fixed step)",
            self.pacing.step() * 1000.0
        );

        while !self.tick(&mut app) {}

        let code = if self.state.is_running() {
            0
        } else {
            self.state.exit_code
        };
        debug!("Runtime exited with code {}", code);
        code
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::Event;

    struct CountingApp {
        updates: usize,
        renders: usize,
        quit_after_updates: Option<usize>,
    }

    impl CountingApp {
        fn new() -> Self {
            Self {
                updates: 0,
                renders: 0,
                quit_after_updates: None,
            }
        }
    }

    impl App for CountingApp {
        fn update(&mut self, state: &mut AppState, step: f32) {
            assert!(step > 0.0);
            self.updates += 1;
            if let Some(limit) = self.quit_after_updates {
                if self.updates >= limit {
                    state.quit(7);
                }
            }
        }

        fn render(&mut self, _state: &AppState, alpha: f32) {
            assert!((0.0..=1.0).contains(&alpha));
            self.renders += 1;
        }
    }

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.fps, 60);
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!((builder.width, builder.height), (800, 600));
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let builder = EngineBuilder::new()
            .with_fps(120)
            .with_channel_capacity(256)
            .with_size(1280, 720);
        assert_eq!(builder.fps, 120);
        assert_eq!(builder.channel_capacity, 256);
        assert_eq!((builder.width, builder.height), (1280, 720));
    }

    #[test]
    #[should_panic(expected = "FPS must be positive")]
    fn builder_rejects_zero_fps() {
        EngineBuilder::new().with_fps(0);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_rejects_zero_capacity() {
        EngineBuilder::new().with_channel_capacity(0);
    }

    #[test]
    fn builder_build_creates_engine() {
        let engine = EngineBuilder::new().with_size(1024, 768).build();
        assert_eq!(engine.state().width, 1024);
        assert!(engine.state().is_running());
    }

    //=====================================================================
    // Engine Loop Tests
    //=====================================================================

    #[test]
    fn exit_event_ends_run_with_code_zero() {
        let engine = EngineBuilder::new().build();
        engine.producer().push(Event::Exit);

        let code = engine.run(CountingApp::new());
        assert_eq!(code, 0);
    }

    #[test]
    fn quit_from_update_propagates_exit_code() {
        // High rate so the first fixed step accrues almost immediately.
        let engine = EngineBuilder::new().with_fps(1000).build();

        let mut app = CountingApp::new();
        app.quit_after_updates = Some(1);

        let code = engine.run(app);
        assert_eq!(code, 7);
    }

    #[test]
    fn tick_renders_once_per_iteration() {
        let mut engine = EngineBuilder::new().build();
        let mut app = CountingApp::new();

        assert!(!engine.tick(&mut app));
        assert!(!engine.tick(&mut app));
        assert_eq!(app.renders, 2, "Exactly one render per non-terminal tick");
    }

    #[test]
    fn tick_reports_termination_without_touching_app() {
        let mut engine = EngineBuilder::new().build();
        engine.producer().push(Event::Exit);

        let mut app = CountingApp::new();
        assert!(engine.tick(&mut app));
        assert_eq!(app.renders, 0, "Terminal tick must not render");
    }
}
