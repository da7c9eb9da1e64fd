//=========================================================================
// Frame Clock
//=========================================================================
//
// Delta-time sampler for frame loops.
//
// Flow:
//   sample() → TimeSource::now() → now - last_sample → store now
//
// The first sample after construction or reset() has nothing to measure
// against and reports one frame at the target rate instead.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::trace;

//=== Module Declarations =================================================

mod time_source;

//=== Public API ==========================================================

pub use time_source::{ClockError, ManualClock, SystemClock, TimeSource};

/// Frame rate used for the first-sample fallback unless configured.
pub const DEFAULT_FPS_TARGET: u32 = 60;

//=== FrameClock ==========================================================

/// Measures seconds elapsed between consecutive [`sample`](Self::sample)
/// calls.
pub struct FrameClock {
    source: Box<dyn TimeSource>,
    fps_target: u32,
    last_sample: Option<Duration>,
}

impl FrameClock {
    //--- Construction -----------------------------------------------------

    /// Creates a clock reading from `source`.
    ///
    /// # Panics
    ///
    /// Panics if `fps_target == 0`.
    pub fn new<T>(source: T, fps_target: u32) -> Self
    where
        T: TimeSource + 'static,
    {
        assert!(fps_target > 0, "FPS target must be positive, got {}", fps_target);
        Self {
            source: Box::new(source),
            fps_target,
            last_sample: None,
        }
    }

    //--- Sampling ---------------------------------------------------------

    /// Returns the seconds elapsed since the previous call.
    ///
    /// The first call returns `1.0 / fps_target`. Every call, including the
    /// first, records the current reading as the new reference point.
    pub fn sample(&mut self) -> Result<f32, ClockError> {
        let now = self.source.now()?;

        let dt = match self.last_sample {
            Some(previous) => now.saturating_sub(previous).as_secs_f32(),
            None => self.fallback_dt(),
        };

        self.last_sample = Some(now);
        trace!("Frame clock sampled dt = {:.6}s", dt);
        Ok(dt)
    }

    /// Forgets the last reading so the next sample uses the fallback.
    pub fn reset(&mut self) {
        self.last_sample = None;
    }

    //--- Configuration ----------------------------------------------------

    pub fn fps_target(&self) -> u32 {
        self.fps_target
    }

    /// # Panics
    ///
    /// Panics if `fps_target == 0`.
    pub fn set_fps_target(&mut self, fps_target: u32) {
        assert!(fps_target > 0, "FPS target must be positive, got {}", fps_target);
        self.fps_target = fps_target;
    }

    /// The value reported by the first sample.
    pub fn fallback_dt(&self) -> f32 {
        1.0 / self.fps_target as f32
    }

    /// Whether a reference reading has been recorded.
    pub fn has_sample(&self) -> bool {
        self.last_sample.is_some()
    }
}

//=== Tests ===============================================================
