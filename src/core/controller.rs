//=========================================================================
// Lifecycle Controller
//
// Owns the state registry and drives the single current state.
//
// Architecture:
// ```text
//     ControllerBuilder  ──build()──>  LifecycleController
//         │                              │
//         ├─ with_fps_target()           ├─ start() / stop()
//         └─ with_time_source()          ├─ create() / delete()
//                                        ├─ set_current()  exit → enter
//                                        ├─ update() / draw()
//                                        └─ sample_dt()
// ```
//
// State diagram:
// ```text
//   Stopped ──start()──> Running{none} ──set_current(A)──> Running{A}
//      ^                                                      │
//      └──────────────────────stop()──────────────────────────┘
// ```
//
// Notes:
// The controller is single-threaded and not reentrant. Hooks receive no
// handle to the controller, so a hook cannot request a transition while
// one is being dispatched.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::Receiver;
use log::{debug, error, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::clock::{FrameClock, SystemClock, TimeSource, DEFAULT_FPS_TARGET};
use crate::core::error::{LifecycleError, LifecycleResult};
use crate::core::events::{EventHub, LifecycleEvent};
use crate::core::name::validate_name;
use crate::core::state::{Callbacks, Dispatch, EnterArgs, Registry, State};

//=== ControllerBuilder ===================================================

/// Builder for configuring and constructing a [`LifecycleController`].
///
/// # Default Values
///
/// - **FPS target**: 60 (first-sample fallback of the frame clock)
/// - **Time source**: [`SystemClock`]
///
/// # Examples
///
/// ```rust
/// use stagehand::core::ControllerBuilder;
/// use stagehand::core::clock::ManualClock;
///
/// let clock = ManualClock::new();
/// let controller = ControllerBuilder::new()
///     .with_fps_target(120)
///     .with_time_source(clock.clone())
///     .build();
///
/// assert!(!controller.is_running());
/// ```
pub struct ControllerBuilder {
    fps_target: u32,
    source: Box<dyn TimeSource>,
}

impl ControllerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            fps_target: DEFAULT_FPS_TARGET,
            source: Box::new(SystemClock::new()),
        }
    }

    /// Sets the frame rate the clock assumes before it has measured a frame.
    ///
    /// Default: 60
    ///
    /// # Panics
    ///
    /// Panics if `fps_target == 0`.
    pub fn with_fps_target(mut self, fps_target: u32) -> Self {
        assert!(fps_target > 0, "FPS target must be positive, got {}", fps_target);
        self.fps_target = fps_target;
        self
    }

    /// Replaces the monotonic time source used by [`LifecycleController::sample_dt`].
    pub fn with_time_source<T>(mut self, source: T) -> Self
    where
        T: TimeSource + 'static,
    {
        self.source = Box::new(source);
        self
    }

    /// Builds a stopped controller.
    pub fn build(self) -> LifecycleController {
        debug!("Building lifecycle controller (FPS target: {})", self.fps_target);

        LifecycleController {
            registry: None,
            current: None,
            clock: FrameClock::new(self.source, self.fps_target),
            fps_target: self.fps_target,
            events: EventHub::new(),
        }
    }
}

impl Default for ControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== LifecycleController =================================================

/// Drives named states through enter, update, draw and exit.
///
/// Every operation except [`start`](Self::start) requires a running
/// controller and checks that before validating anything else.
///
/// # Example
///
/// ```rust
/// use stagehand::core::LifecycleController;
/// use stagehand::core::state::{Callbacks, Dispatch};
///
/// let mut controller = LifecycleController::new();
/// controller.start().unwrap();
///
/// controller
///     .create("menu", Callbacks::new().on_draw(|| println!("menu")))
///     .unwrap();
/// controller.set_current("menu", None).unwrap();
///
/// assert_eq!(controller.draw(), Ok(Dispatch::Invoked));
/// controller.stop().unwrap();
/// ```
pub struct LifecycleController {
    /// Present exactly while running.
    registry: Option<Registry>,
    /// Name of the current state; always a key of `registry`.
    current: Option<String>,
    clock: FrameClock,
    /// Configured FPS target, restored on every start.
    fps_target: u32,
    events: EventHub,
}

impl LifecycleController {
    //--- Construction -----------------------------------------------------

    /// Creates a stopped controller with default settings.
    pub fn new() -> Self {
        ControllerBuilder::new().build()
    }

    pub fn builder() -> ControllerBuilder {
        ControllerBuilder::new()
    }

    //--- Process Lifecycle ------------------------------------------------

    /// Starts the controller with an empty registry and no current state.
    ///
    /// Starting twice is reported as [`LifecycleError::AlreadyRunning`].
    pub fn start(&mut self) -> LifecycleResult<()> {
        if self.registry.is_some() {
            warn!("Lifecycle controller is already running");
            return Err(LifecycleError::AlreadyRunning);
        }

        self.registry = Some(Registry::new());
        self.current = None;
        self.clock.set_fps_target(self.fps_target);
        self.clock.reset();

        info!("Lifecycle controller started");
        self.events.publish(LifecycleEvent::Started);
        Ok(())
    }

    /// Exits the current state, releases every state and stops.
    ///
    /// # Panics
    ///
    /// Panics if the registry still reports registered states after
    /// releasing all of them. That means its bookkeeping is broken and the
    /// controller cannot continue safely.
    pub fn stop(&mut self) -> LifecycleResult<()> {
        let Some(mut registry) = self.registry.take() else {
            warn!("Lifecycle controller is not running, nothing to stop");
            return Err(LifecycleError::NotRunning);
        };

        if let Some(name) = self.current.take() {
            if let Some(state) = registry.get_mut(&name) {
                debug!("Exiting state {:?} for shutdown", name);
                state.exit();
            }
            self.events.publish(LifecycleEvent::Exited(name));
        }

        let released = registry.clear();
        if !registry.is_empty() {
            error!(
                "Registry teardown released {} state(s) but still counts {}",
                released,
                registry.count()
            );
            panic!(
                "registry teardown left {} state(s) registered",
                registry.count()
            );
        }

        self.clock.reset();

        info!("Lifecycle controller stopped ({} state(s) released)", released);
        self.events.publish(LifecycleEvent::Stopped);
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.registry.is_some()
    }

    //--- Registration -----------------------------------------------------

    /// Registers a state under `name`.
    ///
    /// See [`Registry::create`] for the failure cases.
    pub fn create(&mut self, name: &str, callbacks: Callbacks) -> LifecycleResult<()> {
        let registry = self.registry.as_mut().ok_or(LifecycleError::NotRunning)?;

        registry.create(name, callbacks)?;
        self.events.publish(LifecycleEvent::Registered(name.to_owned()));
        Ok(())
    }

    /// True if a state called `name` is registered. Always false while stopped.
    pub fn exists(&self, name: &str) -> bool {
        self.registry
            .as_ref()
            .is_some_and(|registry| registry.exists(name))
    }

    /// Looks up a registered state. Always `None` while stopped.
    pub fn get(&self, name: &str) -> Option<&State> {
        self.registry.as_ref()?.get(name)
    }

    /// Removes a state that is not current.
    pub fn delete(&mut self, name: &str) -> LifecycleResult<()> {
        let registry = self.registry.as_mut().ok_or(LifecycleError::NotRunning)?;

        let removed = registry.delete(name, self.current.as_deref())?;
        self.events
            .publish(LifecycleEvent::Removed(removed.name().to_owned()));
        Ok(())
    }

    /// Number of registered states.
    pub fn count(&self) -> LifecycleResult<usize> {
        self.registry
            .as_ref()
            .map(Registry::count)
            .ok_or(LifecycleError::NotRunning)
    }

    //--- Transitions ------------------------------------------------------

    /// Makes `name` the current state.
    ///
    /// Runs the current state's `on_exit` (if any), switches, then runs the
    /// target's `on_enter` with `args` (if any). Selecting the state that is
    /// already current runs both hooks again, which lets a state reset
    /// itself. An unknown name leaves the current state untouched.
    pub fn set_current(&mut self, name: &str, args: EnterArgs<'_>) -> LifecycleResult<()> {
        let registry = self.registry.as_mut().ok_or(LifecycleError::NotRunning)?;
        let name = validate_name(name)?;

        if !registry.exists(name) {
            warn!("Attempted to switch to unregistered state {:?}", name);
            return Err(LifecycleError::NotFound(name.to_owned()));
        }

        if let Some(previous) = self.current.take() {
            if let Some(state) = registry.get_mut(&previous) {
                debug!("Exiting state {:?}", previous);
                state.exit();
            }
            self.events.publish(LifecycleEvent::Exited(previous));
        }

        self.current = Some(name.to_owned());

        if let Some(state) = registry.get_mut(name) {
            debug!("Entering state {:?}", name);
            state.enter(args);
        }
        self.events.publish(LifecycleEvent::Entered(name.to_owned()));

        Ok(())
    }

    /// Name of the current state, if running and one is set.
    pub fn current_name(&self) -> Option<&str> {
        self.registry.as_ref()?;
        self.current.as_deref()
    }

    //--- Frame Dispatch ---------------------------------------------------

    /// Runs the current state's `on_update` with `dt` seconds.
    ///
    /// Returns `Ok(Dispatch::Missing(Hook::Update))` when the current state
    /// has no update hook.
    pub fn update(&mut self, dt: f32) -> LifecycleResult<Dispatch> {
        let state = self.current_state_mut()?;

        let outcome = state.update(dt);
        if let Dispatch::Missing(hook) = outcome {
            debug!("State {:?} has no {}", state.name(), hook);
        }
        Ok(outcome)
    }

    /// Runs the current state's `on_draw`.
    pub fn draw(&mut self) -> LifecycleResult<Dispatch> {
        let state = self.current_state_mut()?;

        let outcome = state.draw();
        if let Dispatch::Missing(hook) = outcome {
            debug!("State {:?} has no {}", state.name(), hook);
        }
        Ok(outcome)
    }

    //--- Frame Timing -----------------------------------------------------

    /// Seconds elapsed since the previous call.
    ///
    /// The first call after [`start`](Self::start) returns one frame at the
    /// FPS target (1/60 s by default).
    pub fn sample_dt(&mut self) -> LifecycleResult<f32> {
        if self.registry.is_none() {
            return Err(LifecycleError::NotRunning);
        }
        Ok(self.clock.sample()?)
    }

    /// Current FPS target, used by the first-sample fallback.
    pub fn fps_target(&self) -> u32 {
        self.clock.fps_target()
    }

    /// Changes the FPS target until the next start.
    ///
    /// # Panics
    ///
    /// Panics if `fps_target == 0`.
    pub fn set_fps_target(&mut self, fps_target: u32) -> LifecycleResult<()> {
        if self.registry.is_none() {
            return Err(LifecycleError::NotRunning);
        }
        self.clock.set_fps_target(fps_target);
        Ok(())
    }

    //--- Notifications ----------------------------------------------------

    /// Opens a channel receiving every [`LifecycleEvent`] from now on.
    ///
    /// Subscriptions outlive stop/start cycles.
    pub fn subscribe(&mut self) -> Receiver<LifecycleEvent> {
        self.events.subscribe()
    }

    //--- Internal Helpers -------------------------------------------------

    fn current_state_mut(&mut self) -> LifecycleResult<&mut State> {
        let registry = self.registry.as_mut().ok_or(LifecycleError::NotRunning)?;
        let name = self.current.as_deref().ok_or(LifecycleError::NoCurrentState)?;

        // `current` is only ever set to a registered name and the registry
        // refuses to delete it
        registry.get_mut(name).ok_or(LifecycleError::NoCurrentState)
    }
}

impl Default for LifecycleController {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LifecycleController {
    fn drop(&mut self) {
        if self.registry.is_some() {
            debug!("Lifecycle controller dropped while running, stopping");
            let _ = self.stop();
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use crate::core::state::Hook;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    fn running() -> LifecycleController {
        let mut controller = LifecycleController::new();
        controller.start().unwrap();
        controller
    }

    fn draw_only() -> Callbacks {
        Callbacks::new().on_draw(|| {})
    }

    /// Callbacks that append "<name>:<hook>" to `log`.
    fn traced(name: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Callbacks {
        let (enter, update, draw, exit) = (log.clone(), log.clone(), log.clone(), log.clone());
        Callbacks::new()
            .on_enter(move |_| enter.borrow_mut().push(format!("{name}:enter")))
            .on_update(move |_| update.borrow_mut().push(format!("{name}:update")))
            .on_draw(move || draw.borrow_mut().push(format!("{name}:draw")))
            .on_exit(move || exit.borrow_mut().push(format!("{name}:exit")))
    }

    //=====================================================================
    // ControllerBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let controller = ControllerBuilder::new().build();
        assert_eq!(controller.fps_target(), 60);
        assert!(!controller.is_running());
    }

    #[test]
    fn builder_with_fps_target() {
        let controller = ControllerBuilder::new().with_fps_target(144).build();
        assert_eq!(controller.fps_target(), 144);
    }

    #[test]
    #[should_panic(expected = "FPS target must be positive")]
    fn builder_with_fps_target_panics_on_zero() {
        ControllerBuilder::new().with_fps_target(0);
    }

    //=====================================================================
    // Start / Stop Tests
    //=====================================================================

    #[test]
    fn double_start_is_reported() {
        let mut controller = running();
        assert_eq!(controller.start(), Err(LifecycleError::AlreadyRunning));
        assert!(controller.is_running());
    }

    #[test]
    fn stop_twice_is_not_running() {
        let mut controller = running();
        assert_eq!(controller.stop(), Ok(()));
        assert_eq!(controller.stop(), Err(LifecycleError::NotRunning));
    }

    #[test]
    fn restart_begins_empty() {
        let mut controller = running();
        for name in ["a", "b", "c"] {
            controller.create(name, draw_only()).unwrap();
        }
        controller.set_current("b", None).unwrap();

        controller.stop().unwrap();
        controller.start().unwrap();

        assert_eq!(controller.count(), Ok(0));
        assert_eq!(controller.current_name(), None);
        assert!(!controller.exists("a"));
    }

    #[test]
    fn stop_exits_current_state() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut controller = running();
        controller.create("play", traced("play", &log)).unwrap();
        controller.set_current("play", None).unwrap();

        controller.stop().unwrap();

        assert_eq!(*log.borrow(), vec!["play:enter", "play:exit"]);
    }

    #[test]
    fn restart_restores_configured_fps_target() {
        let mut controller = ControllerBuilder::new().with_fps_target(30).build();
        controller.start().unwrap();
        controller.set_fps_target(120).unwrap();
        assert_eq!(controller.fps_target(), 120);

        controller.stop().unwrap();
        controller.start().unwrap();
        assert_eq!(controller.fps_target(), 30);
    }

    #[test]
    #[should_panic(expected = "registry teardown left")]
    fn inconsistent_teardown_is_fatal() {
        let mut controller = running();
        controller.create("a", draw_only()).unwrap();
        if let Some(registry) = controller.registry.as_mut() {
            registry.force_count(2);
        }
        let _ = controller.stop();
    }

    #[test]
    fn drop_while_running_exits_current() {
        let exits = Rc::new(Cell::new(0));
        let sink = exits.clone();
        {
            let mut controller = running();
            controller
                .create("a", Callbacks::new().on_exit(move || sink.set(sink.get() + 1)))
                .unwrap();
            controller.set_current("a", None).unwrap();
        }
        assert_eq!(exits.get(), 1);
    }

    //=====================================================================
    // Not-Running Guard Tests
    //=====================================================================

    #[test]
    fn stopped_controller_rejects_everything() {
        let mut controller = LifecycleController::new();

        assert_eq!(controller.create("a", draw_only()), Err(LifecycleError::NotRunning));
        assert!(!controller.exists("a"));
        assert!(controller.get("a").is_none());
        assert_eq!(controller.set_current("a", None), Err(LifecycleError::NotRunning));
        assert_eq!(controller.current_name(), None);
        assert_eq!(controller.delete("a"), Err(LifecycleError::NotRunning));
        assert_eq!(controller.count(), Err(LifecycleError::NotRunning));
        assert_eq!(controller.update(0.1), Err(LifecycleError::NotRunning));
        assert_eq!(controller.draw(), Err(LifecycleError::NotRunning));
        assert_eq!(controller.sample_dt(), Err(LifecycleError::NotRunning));
        assert_eq!(controller.set_fps_target(30), Err(LifecycleError::NotRunning));
    }

    #[test]
    fn not_running_is_checked_before_validation() {
        let mut controller = LifecycleController::new();
        assert_eq!(controller.create("", Callbacks::new()), Err(LifecycleError::NotRunning));
        assert_eq!(controller.set_current("", None), Err(LifecycleError::NotRunning));
    }

    //=====================================================================
    // Registration Tests
    //=====================================================================

    #[test]
    fn duplicate_create_keeps_count() {
        let mut controller = running();
        controller.create("menu", draw_only()).unwrap();

        assert_eq!(
            controller.create("menu", draw_only()),
            Err(LifecycleError::AlreadyExists("menu".into()))
        );
        assert_eq!(controller.count(), Ok(1));
    }

    #[test]
    fn invalid_create_keeps_count() {
        let mut controller = running();

        assert_eq!(controller.create("", draw_only()), Err(LifecycleError::EmptyName));
        assert_eq!(controller.create("   ", draw_only()), Err(LifecycleError::EmptyName));
        assert_eq!(
            controller.create("ghost", Callbacks::new()),
            Err(LifecycleError::NoValidCallbacks("ghost".into()))
        );
        assert_eq!(controller.count(), Ok(0));
    }

    #[test]
    fn get_exposes_defined_hooks() {
        let mut controller = running();
        controller.create("menu", draw_only()).unwrap();

        let state = controller.get("menu").unwrap();
        assert!(state.has(Hook::Draw));
        assert!(!state.has(Hook::Update));
    }

    #[test]
    fn delete_current_is_refused() {
        let mut controller = running();
        controller.create("a", draw_only()).unwrap();
        controller.set_current("a", None).unwrap();

        assert_eq!(
            controller.delete("a"),
            Err(LifecycleError::CannotDeleteCurrent("a".into()))
        );
        assert_eq!(controller.count(), Ok(1));
        assert_eq!(controller.current_name(), Some("a"));
    }

    #[test]
    fn delete_other_state() {
        let mut controller = running();
        controller.create("a", draw_only()).unwrap();
        controller.create("b", draw_only()).unwrap();
        controller.set_current("a", None).unwrap();

        assert_eq!(controller.delete("b"), Ok(()));
        assert_eq!(controller.count(), Ok(1));
        assert_eq!(controller.delete("b"), Err(LifecycleError::NotFound("b".into())));
    }

    //=====================================================================
    // Transition Tests
    //=====================================================================

    #[test]
    fn exit_runs_before_enter() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut controller = running();
        controller.create("a", traced("a", &log)).unwrap();
        controller.create("b", traced("b", &log)).unwrap();

        controller.set_current("a", None).unwrap();
        controller.set_current("b", None).unwrap();

        assert_eq!(*log.borrow(), vec!["a:enter", "a:exit", "b:enter"]);
        assert_eq!(controller.current_name(), Some("b"));
    }

    #[test]
    fn self_transition_fires_both_hooks() {
        let enters = Rc::new(Cell::new(0));
        let exits = Rc::new(Cell::new(0));
        let (e, x) = (enters.clone(), exits.clone());

        let mut controller = running();
        controller
            .create(
                "a",
                Callbacks::new()
                    .on_enter(move |_| e.set(e.get() + 1))
                    .on_exit(move || x.set(x.get() + 1)),
            )
            .unwrap();

        controller.set_current("a", None).unwrap();
        controller.set_current("a", None).unwrap();

        assert_eq!(enters.get(), 2);
        assert_eq!(exits.get(), 1);
    }

    #[test]
    fn unknown_target_keeps_current() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut controller = running();
        controller.create("a", traced("a", &log)).unwrap();
        controller.set_current("a", None).unwrap();

        assert_eq!(
            controller.set_current("missing", None),
            Err(LifecycleError::NotFound("missing".into()))
        );
        assert_eq!(controller.set_current("", None), Err(LifecycleError::EmptyName));
        assert_eq!(controller.current_name(), Some("a"));
        assert_eq!(*log.borrow(), vec!["a:enter"]);
    }

    #[test]
    fn enter_receives_caller_args() {
        #[derive(Debug, PartialEq)]
        struct Spawn {
            level: u8,
        }

        let seen = Rc::new(Cell::new(0u8));
        let sink = seen.clone();
        let mut controller = running();
        controller
            .create(
                "play",
                Callbacks::new().on_enter(move |args| {
                    if let Some(spawn) = args.and_then(|a| a.downcast_ref::<Spawn>()) {
                        sink.set(spawn.level);
                    }
                }),
            )
            .unwrap();

        let spawn = Spawn { level: 4 };
        controller.set_current("play", Some(&spawn)).unwrap();

        assert_eq!(seen.get(), 4);
        assert_eq!(spawn, Spawn { level: 4 });
    }

    //=====================================================================
    // Dispatch Tests
    //=====================================================================

    #[test]
    fn dispatch_without_current_state() {
        let mut controller = running();
        assert_eq!(controller.update(0.016), Err(LifecycleError::NoCurrentState));
        assert_eq!(controller.draw(), Err(LifecycleError::NoCurrentState));
    }

    #[test]
    fn missing_update_is_soft() {
        let mut controller = running();
        controller.create("menu", draw_only()).unwrap();
        controller.set_current("menu", None).unwrap();

        assert_eq!(controller.update(0.016), Ok(Dispatch::Missing(Hook::Update)));
        assert_eq!(controller.draw(), Ok(Dispatch::Invoked));
    }

    #[test]
    fn missing_draw_is_soft() {
        let mut controller = running();
        controller
            .create("logic", Callbacks::new().on_update(|_| {}))
            .unwrap();
        controller.set_current("logic", None).unwrap();

        assert_eq!(controller.draw(), Ok(Dispatch::Missing(Hook::Draw)));
        assert_eq!(controller.update(0.5), Ok(Dispatch::Invoked));
    }

    //=====================================================================
    // Frame Timing Tests
    //=====================================================================

    #[test]
    fn sample_dt_uses_fallback_then_measures() {
        let clock = ManualClock::new();
        let mut controller = ControllerBuilder::new()
            .with_time_source(clock.clone())
            .build();
        controller.start().unwrap();

        let first = controller.sample_dt().unwrap();
        assert!((first - 1.0 / 60.0).abs() < f32::EPSILON);

        clock.advance(Duration::from_micros(16_667));
        let second = controller.sample_dt().unwrap();
        assert!((second - 0.016667).abs() < 1e-6);
    }

    #[test]
    fn restart_resets_sampling() {
        let clock = ManualClock::new();
        let mut controller = ControllerBuilder::new()
            .with_time_source(clock.clone())
            .build();
        controller.start().unwrap();
        controller.sample_dt().unwrap();

        controller.stop().unwrap();
        clock.advance(Duration::from_secs(10));
        controller.start().unwrap();

        let dt = controller.sample_dt().unwrap();
        assert!((dt - 1.0 / 60.0).abs() < f32::EPSILON);
    }

    //=====================================================================
    // Notification Tests
    //=====================================================================

    #[test]
    fn events_follow_lifecycle() {
        let mut controller = LifecycleController::new();
        let events = controller.subscribe();

        controller.start().unwrap();
        controller.create("a", draw_only()).unwrap();
        controller.create("b", draw_only()).unwrap();
        controller.set_current("a", None).unwrap();
        controller.set_current("b", None).unwrap();
        controller.delete("a").unwrap();
        controller.stop().unwrap();

        let seen: Vec<_> = events.try_iter().collect();
        assert_eq!(
            seen,
            vec![
                LifecycleEvent::Started,
                LifecycleEvent::Registered("a".into()),
                LifecycleEvent::Registered("b".into()),
                LifecycleEvent::Entered("a".into()),
                LifecycleEvent::Exited("a".into()),
                LifecycleEvent::Entered("b".into()),
                LifecycleEvent::Removed("a".into()),
                LifecycleEvent::Exited("b".into()),
                LifecycleEvent::Stopped,
            ]
        );
    }

    #[test]
    fn failed_operations_publish_nothing() {
        let mut controller = running();
        let events = controller.subscribe();

        let _ = controller.create("", draw_only());
        let _ = controller.set_current("nope", None);
        let _ = controller.delete("nope");

        assert!(events.try_recv().is_err());
    }
}
