//=========================================================================
// Stagehand — Library Root
//
// Game-support library built around named, callback-driven states.
//
// Responsibilities:
// - Register states by name and drive the current one through
//   enter / update / draw / exit (`core`)
// - Measure frame delta time with a first-frame fallback (`core::clock`)
// - Simple particle emitters for per-frame effects (`particles`)
// - Line-oriented save file sessions (`save`)
//
// Typical usage:
// ```no_run
// use stagehand::prelude::*;
//
// let mut controller = LifecycleController::new();
// controller.start().unwrap();
// controller
//     .create("menu", Callbacks::new().on_draw(|| { /* draw menu */ }))
//     .unwrap();
// controller.set_current("menu", None).unwrap();
//
// // once per frame
// let dt = controller.sample_dt().unwrap();
// controller.update(dt).unwrap();
// controller.draw().unwrap();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the lifecycle controller and everything it depends on.
// `particles` and `save` are independent helpers; the controller does not
// use them.
//
pub mod core;
pub mod particles;
pub mod prelude;
pub mod save;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the controller so callers can `use stagehand::LifecycleController;`.
//
pub use crate::core::{ControllerBuilder, LifecycleController};
