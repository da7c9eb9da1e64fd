//=========================================================================
// State Registry
//=========================================================================
//
// Name-keyed storage for registered states.
//
// States are stored in a HashMap by name. The registry owns them; the
// controller refers to the current one by name only, so a state must
// never be removed while it is current.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::{Callbacks, State};
use crate::core::error::{LifecycleError, LifecycleResult};
use crate::core::name::validate_name;

//=== Registry ============================================================

/// Owns every registered [`State`], keyed by exact name.
#[derive(Debug, Default)]
pub struct Registry {
    states: HashMap<String, State>,
    count: usize,
}

impl Registry {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self::default()
    }

    //--- Registration -----------------------------------------------------

    /// Registers a new state.
    ///
    /// Fails without touching the registry if the name is blank, already
    /// taken, or `callbacks` defines no hook at all.
    pub fn create(&mut self, name: &str, callbacks: Callbacks) -> LifecycleResult<()> {
        let name = validate_name(name)?;

        if callbacks.is_empty() {
            warn!("State {:?} defines no callbacks, not registering", name);
            return Err(LifecycleError::NoValidCallbacks(name.to_owned()));
        }

        if self.states.contains_key(name) {
            warn!("State {:?} is already registered", name);
            return Err(LifecycleError::AlreadyExists(name.to_owned()));
        }

        self.states
            .try_reserve(1)
            .map_err(|_| LifecycleError::AllocationFailed)?;

        debug!("Registering state {:?} ({:?})", name, callbacks);
        self.states
            .insert(name.to_owned(), State::new(name.to_owned(), callbacks));
        self.count += 1;

        Ok(())
    }

    //--- Queries ----------------------------------------------------------

    pub fn exists(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&State> {
        self.states.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut State> {
        self.states.get_mut(name)
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterates over the registered names in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }

    //--- Removal ----------------------------------------------------------

    /// Removes and returns the state called `name`.
    ///
    /// `current` is the name of the state the controller is running, if
    /// any. It is checked before anything is removed so the controller
    /// never ends up pointing at a dropped state.
    pub fn delete(&mut self, name: &str, current: Option<&str>) -> LifecycleResult<State> {
        let name = validate_name(name)?;

        if current == Some(name) {
            warn!("Refusing to delete current state {:?}", name);
            return Err(LifecycleError::CannotDeleteCurrent(name.to_owned()));
        }

        let state = self
            .states
            .remove(name)
            .ok_or_else(|| LifecycleError::NotFound(name.to_owned()))?;
        self.count -= 1;

        debug!("Deleted state {:?}", name);
        Ok(state)
    }

    /// Releases every state and returns how many were released.
    ///
    /// The count is decremented once per released state, so after a
    /// consistent teardown [`count`](Self::count) is zero.
    pub fn clear(&mut self) -> usize {
        let mut released = 0;

        for (name, state) in self.states.drain() {
            debug!("Releasing state {:?}", name);
            drop(state);
            self.count = self.count.saturating_sub(1);
            released += 1;
        }

        released
    }

    #[cfg(test)]
    pub(crate) fn force_count(&mut self, count: usize) {
        self.count = count;
    }
}

//=== Tests ===============================================================
