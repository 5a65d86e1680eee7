use tracing::debug;

use super::config::EmitterConfig;
use super::handler::{BoxedListener, BoxedUnhandledListener, Listener, UnhandledListener};
use super::registry::{ListenerEntry, ListenerRegistry};
use super::unhandled::{UnhandledEntry, UnhandledRegistry};
use crate::shared::{EmitterError, EventId, IdAllocator, ListenerId, RemoveOutcome};

/// Synchronous, in-memory event registry
///
/// Listeners are registered against integer event ids and invoked in
/// registration order by [`EventEmitter::emit`]. Unhandled listeners catch
/// every emit whose event id has no listeners. Regular and unhandled
/// listeners draw their ids from one counter, so an id never appears in both.
///
/// The emitter is not thread-safe; wrap it in a lock if it must be shared.
pub struct EventEmitter<D: ?Sized = ()> {
    ids: IdAllocator,
    pub(super) listeners: ListenerRegistry<D>,
    pub(super) unhandled: UnhandledRegistry<D>,
}

impl<D: ?Sized> EventEmitter<D> {
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    pub fn with_config(config: EmitterConfig) -> Self {
        Self {
            ids: IdAllocator::new(),
            listeners: ListenerRegistry::new(&config),
            unhandled: UnhandledRegistry::new(),
        }
    }

    /// Registers a listener at the end of the list for `event_id`
    pub fn add_listener<L>(
        &mut self,
        event_id: EventId,
        listener: L,
    ) -> Result<ListenerId, EmitterError>
    where
        L: Listener<D> + 'static,
    {
        self.insert_listener(event_id, Box::new(listener), false, false)
    }

    /// Shorthand for [`EventEmitter::add_listener`]
    pub fn on<L>(
        &mut self,
        event_id: EventId,
        listener: L,
    ) -> Result<ListenerId, EmitterError>
    where
        L: Listener<D> + 'static,
    {
        self.add_listener(event_id, listener)
    }

    /// Registers a listener at the start of the list for `event_id`
    pub fn prepend_listener<L>(
        &mut self,
        event_id: EventId,
        listener: L,
    ) -> Result<ListenerId, EmitterError>
    where
        L: Listener<D> + 'static,
    {
        self.insert_listener(event_id, Box::new(listener), false, true)
    }

    /// Registers a listener that is removed after the next emit of `event_id`
    pub fn add_once_listener<L>(
        &mut self,
        event_id: EventId,
        listener: L,
    ) -> Result<ListenerId, EmitterError>
    where
        L: Listener<D> + 'static,
    {
        self.insert_listener(event_id, Box::new(listener), true, false)
    }

    /// Shorthand for [`EventEmitter::add_once_listener`]
    pub fn once<L>(
        &mut self,
        event_id: EventId,
        listener: L,
    ) -> Result<ListenerId, EmitterError>
    where
        L: Listener<D> + 'static,
    {
        self.add_once_listener(event_id, listener)
    }

    pub fn prepend_once_listener<L>(
        &mut self,
        event_id: EventId,
        listener: L,
    ) -> Result<ListenerId, EmitterError>
    where
        L: Listener<D> + 'static,
    {
        self.insert_listener(event_id, Box::new(listener), true, true)
    }

    /// Registers a catch-all listener at the end of the unhandled list
    pub fn add_unhandled_listener<U>(&mut self, listener: U) -> Result<ListenerId, EmitterError>
    where
        U: UnhandledListener<D> + 'static,
    {
        self.insert_unhandled(Box::new(listener), false)
    }

    /// Shorthand for [`EventEmitter::add_unhandled_listener`]
    pub fn on_unhandled<U>(&mut self, listener: U) -> Result<ListenerId, EmitterError>
    where
        U: UnhandledListener<D> + 'static,
    {
        self.add_unhandled_listener(listener)
    }

    pub fn prepend_unhandled_listener<U>(&mut self, listener: U) -> Result<ListenerId, EmitterError>
    where
        U: UnhandledListener<D> + 'static,
    {
        self.insert_unhandled(Box::new(listener), true)
    }

    pub(crate) fn insert_listener(
        &mut self,
        event_id: EventId,
        listener: BoxedListener<D>,
        once: bool,
        prepend: bool,
    ) -> Result<ListenerId, EmitterError> {
        let id = self.ids.allocate()?;
        self.listeners.insert(
            event_id,
            ListenerEntry {
                id,
                listener,
                once,
            },
            prepend,
        );

        debug!(
            event_id,
            listener_id = %id,
            once,
            prepend,
            "Listener registered"
        );
        Ok(id)
    }

    pub(crate) fn insert_unhandled(
        &mut self,
        listener: BoxedUnhandledListener<D>,
        prepend: bool,
    ) -> Result<ListenerId, EmitterError> {
        let id = self.ids.allocate()?;
        self.unhandled.insert(UnhandledEntry { id, listener }, prepend);

        debug!(listener_id = %id, prepend, "Unhandled listener registered");
        Ok(id)
    }

    /// Removes the listener `id` registered on `event_id`
    pub fn remove_listener(&mut self, event_id: EventId, id: ListenerId) -> RemoveOutcome {
        let outcome = self.listeners.remove(event_id, id);
        debug!(event_id, listener_id = %id, outcome = %outcome, "Remove listener");
        outcome
    }

    /// Shorthand for [`EventEmitter::remove_listener`]
    pub fn off(&mut self, event_id: EventId, id: ListenerId) -> RemoveOutcome {
        self.remove_listener(event_id, id)
    }

    pub fn remove_unhandled_listener(&mut self, id: ListenerId) -> RemoveOutcome {
        let outcome = self.unhandled.remove(id);
        debug!(listener_id = %id, outcome = %outcome, "Remove unhandled listener");
        outcome
    }

    /// Removes every listener for `event_id`; a no-op when there are none
    pub fn remove_all_event_listeners(&mut self, event_id: EventId) {
        let released = self.listeners.remove_all_for_event(event_id);
        if released > 0 {
            debug!(event_id, released, "Removed all listeners for event");
        }
    }

    pub fn remove_all_unhandled_listeners(&mut self) {
        let released = self.unhandled.clear();
        if released > 0 {
            debug!(released, "Removed all unhandled listeners");
        }
    }

    /// Removes every listener for every event, plus all unhandled listeners.
    /// The id counter is left untouched.
    pub fn remove_all_listeners(&mut self) {
        let released = self.listeners.clear();
        if released > 0 {
            debug!(released, "Removed all event listeners");
        }
        self.remove_all_unhandled_listeners();
    }

    pub fn listener_count(&self, event_id: EventId) -> usize {
        self.listeners.count(event_id)
    }

    pub fn unhandled_listener_count(&self) -> usize {
        self.unhandled.len()
    }

    pub fn has_listeners(&self, event_id: EventId) -> bool {
        self.listeners.position(event_id).is_some()
    }

    /// Event ids that currently have listeners, in the order they were first used
    pub fn event_ids(&self) -> impl Iterator<Item = EventId> + '_ {
        self.listeners.event_ids()
    }

    /// True when no listeners of either kind are registered
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty() && self.unhandled.is_empty()
    }
}

impl<D: ?Sized> Default for EventEmitter<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: ?Sized> Drop for EventEmitter<D> {
    fn drop(&mut self) {
        if !self.is_empty() {
            self.remove_all_listeners();
        }
    }
}
