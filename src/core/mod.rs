//=========================================================================
// Core Lifecycle System
//
// Named states, the registry that owns them, and the controller that
// drives the current one from a frame loop.
//
// Architecture:
// ```text
//   LifecycleController
//     ├─ registry: Option<Registry>      (Some while running)
//     │    └─ HashMap<String, State>
//     ├─ current: Option<String>
//     ├─ clock: FrameClock ── TimeSource
//     └─ events: EventHub ── crossbeam Receiver<LifecycleEvent>
// ```
//
// Flow per frame:
//   sample_dt() → update(dt) → draw()
//
// Everything runs synchronously on the calling thread. The controller
// provides no internal locking; share it across threads only behind
// external mutual exclusion.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod clock;
pub mod state;

mod controller;
mod error;
mod events;
mod name;

//=== Public API ==========================================================

pub use controller::{ControllerBuilder, LifecycleController};
pub use error::{LifecycleError, LifecycleResult};
pub use events::LifecycleEvent;
pub use name::validate_name;
