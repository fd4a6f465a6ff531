//=========================================================================
// Frame Step Accumulator
//
// Fixed-timestep pacing primitive. The driver calls `update()` once per
// real loop iteration; each `true` return authorizes exactly one
// logical update at the fixed step, and the leftover time debt carries
// to the next call. Rendering interpolates with `alpha()`.
//
// The accumulator decouples simulation rate from real frame time:
// a slow frame drains as several consecutive `true` returns, a fast
// frame as none.
//
//=========================================================================

use std::time::Instant;

/// Upper bound on a single elapsed-time sample, in seconds. Protects
/// against pause/debugger stalls producing a runaway catch-up burst.
const MAX_FRAME_TIME: f32 = 0.25;

//=== FrameStep ===========================================================

/// Fixed-timestep accumulator.
///
/// `update()` returns `true` iff at least one step's worth of time has
/// accumulated since the last `true` return, subtracting exactly one
/// step in that case. Callers invoke one logical update per `true`
/// return and may call `update()` again immediately to drain further
/// pending steps.
///
/// The wall clock is sampled only while the accumulator holds at most
/// one step, so several logical steps drain from a single real-time
/// sample without resampling.
///
/// ```
/// use cadenza::FrameStep;
///
/// let mut pacing = FrameStep::new(60);
/// loop {
///     while pacing.update() {
///         // logical update at pacing.step() seconds
///     }
///     // render, interpolating by pacing.alpha()
///     # break;
/// }
/// ```
#[derive(Debug)]
pub struct FrameStep {
    start: Instant,
    accumulator: f32,
    current_time: f32,
    step: f32,
}

impl FrameStep {
    /// Creates an accumulator targeting `fps` logical updates/second.
    ///
    /// # Panics
    ///
    /// Panics if `fps == 0`.
    pub fn new(fps: u32) -> Self {
        assert!(fps > 0, "Target rate must be positive");
        Self {
            start: Instant::now(),
            accumulator: 0.0,
            current_time: 0.0,
            step: 1.0 / fps as f32,
        }
    }

    /// Advances the accumulator against the wall clock.
    ///
    /// Returns `true` when one fixed step should run now.
    pub fn update(&mut self) -> bool {
        let now = self.start.elapsed().as_secs_f32();
        self.advance(now)
    }

    /// The fixed step duration in seconds.
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Fraction of the way into the next logical step, in [0, 1).
    ///
    /// Used to interpolate rendering between the previous and next
    /// simulated state.
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }

    //--- Internal Helpers -------------------------------------------------

    // Core state machine, fed with seconds elapsed since construction.
    // Split from `update()` so pacing is verifiable with synthetic time.
    fn advance(&mut self, now: f32) -> bool {
        if self.accumulator <= self.step {
            let mut frame_time = now - self.current_time;
            if frame_time > MAX_FRAME_TIME {
                frame_time = MAX_FRAME_TIME;
            }

            self.current_time = now;
            self.accumulator += frame_time;
        }

        if self.accumulator > self.step {
            self.accumulator -= self.step;
            return true;
        }
        false
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
