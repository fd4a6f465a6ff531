//=========================================================================
// Application Record
//
// The small mutable record shared between the driver, the dispatch
// loop and the binding pre-pass. The loop reads and writes the window
// dimensions (Size events) and reads the exit code to produce its
// termination signal.
//
//=========================================================================

//=== AppState ============================================================

/// Mutable per-application state visible to the dispatch loop.
///
/// `exit_code` uses `RUNNING` (-1) as the "still running" sentinel;
/// anything else makes the next `process_events` call return `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppState {
    pub width: u32,
    pub height: u32,
    pub exit_code: i32,
}

impl AppState {
    /// Sentinel exit code meaning the application is still running.
    pub const RUNNING: i32 = -1;

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            exit_code: Self::RUNNING,
        }
    }

    /// Requests termination with the given process exit code.
    pub fn quit(&mut self, code: i32) {
        self.exit_code = code;
    }

    pub fn is_running(&self) -> bool {
        self.exit_code == Self::RUNNING
    }
}

//=== App =================================================================

/// Application callbacks driven by the engine loop.
///
/// `update` runs zero or more times per real frame at the fixed step;
/// `render` runs once per real frame with the interpolation fraction
/// between the previous and next simulated state.
pub trait App {
    fn update(&mut self, state: &mut AppState, step: f32);

    fn render(&mut self, state: &AppState, alpha: f32);
}

//=========================================================================
// Unit Tests
//=========================================================================
