//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use stagehand::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Lifecycle controller
pub use crate::core::{
    ControllerBuilder, LifecycleController, LifecycleError, LifecycleEvent, LifecycleResult,
};

// States
pub use crate::core::state::{Callbacks, Dispatch, EnterArgs, Hook};

// Frame timing
pub use crate::core::clock::{ManualClock, SystemClock, TimeSource};

// Particles
pub use crate::particles::{Color, Distribution, ParticleRenderer, ParticleSystem, TextureHandle};

// Save sessions
pub use crate::save::{SaveMode, SaveSession};
