//=========================================================================
// Display Backend Interface
//
// The dispatch loop never talks to the presentation surface directly;
// it issues at most one `reset` per detected change through this trait.
//
// Responsibilities:
// - Define the reset entry point (resolution + reset flags)
// - Define the reset/debug flag masks
// - Define the `FrameFlags` context threaded through each pump call
//
// `FrameFlags` replaces process-wide globals: the caller owns one
// instance and passes it mutably into every `process_events` call,
// keeping single-writer-per-call-site semantics explicit.
//
//=========================================================================

bitflags::bitflags! {
    /// Presentation-surface reconfiguration mask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ResetFlags: u32 {
        const VSYNC      = 0x0000_0080;
        const MSAA_X2    = 0x0000_0010;
        const MSAA_X4    = 0x0000_0020;
        const MSAA_X8    = 0x0000_0030;
        const MSAA_X16   = 0x0000_0040;
        const FULLSCREEN = 0x0000_0001;
        const FLUSH      = 0x0000_8000;
        const CAPTURE    = 0x0001_0000;
    }

    /// Diagnostic overlay mask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DebugFlags: u32 {
        const WIREFRAME = 0x0000_0001;
        const STATS     = 0x0000_0004;
        const TEXT      = 0x0000_0008;
        const PROFILER  = 0x0000_0010;
    }
}

//=== FrameFlags ==========================================================

/// Debug/reset flag context threaded through the dispatch loop.
///
/// The pump snapshots both fields at loop entry. A Size event forces a
/// mismatch against `reset` so a resize always triggers one backend
/// reset; binding handlers mutating `reset` mid-call have the same
/// edge-triggered effect. The debug snapshot is committed back at loop
/// exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameFlags {
    pub debug: DebugFlags,
    pub reset: ResetFlags,
}

impl FrameFlags {
    pub fn new(debug: DebugFlags, reset: ResetFlags) -> Self {
        Self { debug, reset }
    }
}

//=== DisplayBackend ======================================================

/// Presentation-surface controller.
///
/// `reset` reinitializes the surface for a new resolution and flag set.
/// The pump guarantees at most one call per detected change per
/// `process_events` invocation (edge-triggered, not per Size event).
pub trait DisplayBackend {
    fn reset(&mut self, width: u32, height: u32, flags: ResetFlags);
}

/// Backend stub for headless runs and tests.
#[derive(Debug, Default)]
pub struct NullDisplay;

impl DisplayBackend for NullDisplay {
    fn reset(&mut self, _width: u32, _height: u32, _flags: ResetFlags) {}
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_flags_default_is_empty() {
        let flags = FrameFlags::default();
        assert!(flags.debug.is_empty());
        assert!(flags.reset.is_empty());
    }

    #[test]
    fn reset_flags_compose() {
        let flags = ResetFlags::VSYNC | ResetFlags::MSAA_X4;
        assert!(flags.contains(ResetFlags::VSYNC));
        assert!(flags.contains(ResetFlags::MSAA_X4));
        assert!(!flags.contains(ResetFlags::FULLSCREEN));
    }

    #[test]
    fn null_display_accepts_resets() {
        let mut display = NullDisplay;
        display.reset(1280, 720, ResetFlags::VSYNC);
    }
}
