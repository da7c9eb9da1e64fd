//=========================================================================
// Time Sources
//=========================================================================
//
// Monotonic time providers for the frame clock.
//
//   SystemClock  → std::time::Instant, fixed origin at construction
//   ManualClock  → caller-advanced, shared between clones
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use thiserror::Error;

//=== ClockError ==========================================================

/// Failure to read a monotonic time source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    #[error("time source unavailable: {0}")]
    Unavailable(String),
}

//=== TimeSource Trait ====================================================

/// A monotonic clock.
///
/// `now()` returns the time elapsed since an arbitrary origin that stays
/// fixed for the lifetime of the source. Consecutive readings never
/// decrease.
pub trait TimeSource {
    fn now(&self) -> Result<Duration, ClockError>;
}

impl<T: TimeSource + ?Sized> TimeSource for Box<T> {
    fn now(&self) -> Result<Duration, ClockError> {
        (**self).now()
    }
}

//=== SystemClock =========================================================

/// Monotonic wall-time source backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemClock {
    fn now(&self) -> Result<Duration, ClockError> {
        Ok(self.origin.elapsed())
    }
}

//=== ManualClock =========================================================

/// Time source that only moves when told to.
///
/// Clones share the same reading, so one handle can be given to a
/// controller while another drives it from a fixed-step loop or a test.
///
/// ```rust
/// use std::time::Duration;
/// use stagehand::core::clock::{ManualClock, TimeSource};
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
/// handle.advance(Duration::from_millis(5));
/// assert_eq!(clock.now().unwrap(), Duration::from_millis(5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    reading: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Creates a clock reading zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the reading forward by `step`.
    pub fn advance(&self, step: Duration) {
        self.reading.set(self.reading.get() + step);
    }

    /// Sets the reading to `at`.
    ///
    /// # Panics
    ///
    /// Panics if `at` is earlier than the current reading.
    pub fn set(&self, at: Duration) {
        assert!(
            at >= self.reading.get(),
            "ManualClock must not go backwards ({:?} -> {:?})",
            self.reading.get(),
            at
        );
        self.reading.set(at);
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> Result<Duration, ClockError> {
        Ok(self.reading.get())
    }
}

//=== Tests ===============================================================
