//=========================================================================
// Lifecycle Events
//=========================================================================
//
// Notification fan-out for controller observers.
//
// Architecture:
//   LifecycleController → publish() → Sender ─┬─→ Receiver (subscriber 1)
//                                             └─→ Receiver (subscriber N)
//
// Events are sent synchronously after the step they describe. Receivers
// that have been dropped are pruned on the next publish.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::trace;

//=== LifecycleEvent ======================================================

/// A step the controller has completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The controller started.
    Started,

    /// A state was registered.
    Registered(String),

    /// A state was deleted from the registry.
    Removed(String),

    /// The named state stopped being current.
    Exited(String),

    /// The named state became current.
    Entered(String),

    /// The controller stopped and released its states.
    Stopped,
}

//=== EventHub ============================================================

/// Holds the sending half of every subscription.
#[derive(Debug, Default)]
pub(crate) struct EventHub {
    subscribers: Vec<Sender<LifecycleEvent>>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new subscription.
    pub fn subscribe(&mut self) -> Receiver<LifecycleEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Sends `event` to every live subscriber.
    pub fn publish(&mut self, event: LifecycleEvent) {
        if self.subscribers.is_empty() {
            return;
        }

        trace!("Publishing {:?} to {} subscriber(s)", event, self.subscribers.len());
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

//=== Tests ===============================================================
