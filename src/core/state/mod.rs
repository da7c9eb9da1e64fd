//=========================================================================
// State System
//=========================================================================
//
// Named bundles of lifecycle callbacks and the registry that owns them.
//
// Architecture:
//   Registry
//     └─ states: HashMap<String, State>
//          └─ Callbacks { enter?, update?, draw?, exit? }
//
// The controller drives the hooks; a state never calls its own.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;
use std::fmt;

//=== Module Declarations =================================================

mod registry;

//=== Public API ==========================================================

pub use registry::Registry;

/// Opaque payload handed to an `on_enter` hook.
///
/// The caller keeps ownership; the hook may only borrow it for the duration
/// of the call and downcast it to whatever type the caller and the state
/// agreed on.
pub type EnterArgs<'a> = Option<&'a dyn Any>;

type EnterFn = Box<dyn FnMut(EnterArgs<'_>)>;
type UpdateFn = Box<dyn FnMut(f32)>;
type DrawFn = Box<dyn FnMut()>;
type ExitFn = Box<dyn FnMut()>;

//=== Hook ================================================================

/// Identifies one of the four lifecycle callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    Enter,
    Update,
    Draw,
    Exit,
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Hook::Enter => "on_enter",
            Hook::Update => "on_update",
            Hook::Draw => "on_draw",
            Hook::Exit => "on_exit",
        };
        f.write_str(name)
    }
}

//=== Dispatch ============================================================

/// Outcome of asking a state to run one of its hooks.
///
/// A state is allowed to omit hooks, so `Missing` is a normal result and
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The hook was defined and has returned.
    Invoked,

    /// The state does not define this hook; nothing ran.
    Missing(Hook),
}

impl Dispatch {
    pub fn is_invoked(self) -> bool {
        matches!(self, Dispatch::Invoked)
    }
}

//=== Callbacks ===========================================================

/// The hooks a state is built from.
///
/// Every hook is optional, but a state needs at least one of them to be
/// registered.
///
/// # Example
///
/// ```rust
/// use stagehand::core::state::Callbacks;
///
/// let callbacks = Callbacks::new()
///     .on_enter(|args| {
///         if let Some(level) = args.and_then(|a| a.downcast_ref::<u32>()) {
///             println!("loading level {level}");
///         }
///     })
///     .on_update(|dt| println!("tick {dt}"))
///     .on_exit(|| println!("bye"));
///
/// assert!(!callbacks.is_empty());
/// ```
#[derive(Default)]
pub struct Callbacks {
    enter: Option<EnterFn>,
    update: Option<UpdateFn>,
    draw: Option<DrawFn>,
    exit: Option<ExitFn>,
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when the state becomes current, with the caller's payload.
    pub fn on_enter<F>(mut self, hook: F) -> Self
    where
        F: FnMut(EnterArgs<'_>) + 'static,
    {
        self.enter = Some(Box::new(hook));
        self
    }

    /// Called once per frame with the frame's delta time in seconds.
    pub fn on_update<F>(mut self, hook: F) -> Self
    where
        F: FnMut(f32) + 'static,
    {
        self.update = Some(Box::new(hook));
        self
    }

    /// Called once per frame after update.
    pub fn on_draw<F>(mut self, hook: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.draw = Some(Box::new(hook));
        self
    }

    /// Called when the state stops being current.
    pub fn on_exit<F>(mut self, hook: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.exit = Some(Box::new(hook));
        self
    }

    /// True if no hook is defined.
    pub fn is_empty(&self) -> bool {
        self.enter.is_none() && self.update.is_none() && self.draw.is_none() && self.exit.is_none()
    }

    pub fn has(&self, hook: Hook) -> bool {
        match hook {
            Hook::Enter => self.enter.is_some(),
            Hook::Update => self.update.is_some(),
            Hook::Draw => self.draw.is_some(),
            Hook::Exit => self.exit.is_some(),
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("enter", &self.enter.is_some())
            .field("update", &self.update.is_some())
            .field("draw", &self.draw.is_some())
            .field("exit", &self.exit.is_some())
            .finish()
    }
}

//=== State ===============================================================

/// A registered, named set of callbacks.
///
/// Owned by the [`Registry`]. The name and the set of defined hooks never
/// change after registration.
#[derive(Debug)]
pub struct State {
    name: String,
    callbacks: Callbacks,
}

impl State {
    pub(crate) fn new(name: String, callbacks: Callbacks) -> Self {
        Self { name, callbacks }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this state defines `hook`.
    pub fn has(&self, hook: Hook) -> bool {
        self.callbacks.has(hook)
    }

    //--- Hook Invocation --------------------------------------------------

    pub(crate) fn enter(&mut self, args: EnterArgs<'_>) -> Dispatch {
        match self.callbacks.enter.as_mut() {
            Some(hook) => {
                hook(args);
                Dispatch::Invoked
            }
            None => Dispatch::Missing(Hook::Enter),
        }
    }

    pub(crate) fn update(&mut self, dt: f32) -> Dispatch {
        match self.callbacks.update.as_mut() {
            Some(hook) => {
                hook(dt);
                Dispatch::Invoked
            }
            None => Dispatch::Missing(Hook::Update),
        }
    }

    pub(crate) fn draw(&mut self) -> Dispatch {
        match self.callbacks.draw.as_mut() {
            Some(hook) => {
                hook();
                Dispatch::Invoked
            }
            None => Dispatch::Missing(Hook::Draw),
        }
    }

    pub(crate) fn exit(&mut self) -> Dispatch {
        match self.callbacks.exit.as_mut() {
            Some(hook) => {
                hook();
                Dispatch::Invoked
            }
            None => Dispatch::Missing(Hook::Exit),
        }
    }
}

//=== Tests ===============================================================
