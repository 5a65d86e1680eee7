use tracing::{debug, warn};

use super::config::EmitterConfig;
use super::handler::BoxedListener;
use crate::shared::{EventId, ListenerId, RemoveOutcome};

/// A registered listener together with its bookkeeping
pub(crate) struct ListenerEntry<D: ?Sized> {
    pub(crate) id: ListenerId,
    pub(crate) listener: BoxedListener<D>,
    pub(crate) once: bool,
}

/// Ordered listener list for one event id. Never left empty.
pub(crate) struct EventBucket<D: ?Sized> {
    pub(crate) event_id: EventId,
    pub(crate) listeners: Vec<ListenerEntry<D>>,
    leak_warned: bool,
}

impl<D: ?Sized> EventBucket<D> {
    fn new(event_id: EventId, capacity: usize) -> Self {
        Self {
            event_id,
            listeners: Vec::with_capacity(capacity),
            leak_warned: false,
        }
    }

    /// Drops every once-listener, walking from the back so earlier indices stay valid.
    /// Returns how many were dropped.
    pub(crate) fn reap_once(&mut self) -> usize {
        let mut reaped = 0;
        for index in (0..self.listeners.len()).rev() {
            if self.listeners[index].once {
                self.listeners.remove(index);
                reaped += 1;
            }
        }
        reaped
    }
}

/// Per-event-id buckets, kept in the order event ids were first used
pub(crate) struct ListenerRegistry<D: ?Sized> {
    buckets: Vec<EventBucket<D>>,
    bucket_capacity: usize,
    max_listeners: Option<usize>,
}

impl<D: ?Sized> ListenerRegistry<D> {
    pub(crate) fn new(config: &EmitterConfig) -> Self {
        Self {
            buckets: Vec::new(),
            bucket_capacity: config.bucket_capacity,
            max_listeners: config.max_listeners,
        }
    }

    pub(crate) fn position(&self, event_id: EventId) -> Option<usize> {
        self.buckets
            .iter()
            .position(|bucket| bucket.event_id == event_id)
    }

    pub(crate) fn bucket_at_mut(&mut self, index: usize) -> &mut EventBucket<D> {
        &mut self.buckets[index]
    }

    pub(crate) fn remove_bucket_at(&mut self, index: usize) -> EventBucket<D> {
        self.buckets.remove(index)
    }

    /// Adds an entry, creating the bucket at the end of the sequence on first use
    pub(crate) fn insert(&mut self, event_id: EventId, entry: ListenerEntry<D>, prepend: bool) {
        let index = match self.position(event_id) {
            Some(index) => index,
            None => {
                debug!(event_id, "Creating listener bucket");
                self.buckets
                    .push(EventBucket::new(event_id, self.bucket_capacity));
                self.buckets.len() - 1
            }
        };

        let bucket = &mut self.buckets[index];
        if prepend {
            bucket.listeners.insert(0, entry);
        } else {
            bucket.listeners.push(entry);
        }

        if let Some(max_listeners) = self.max_listeners {
            if bucket.listeners.len() > max_listeners && !bucket.leak_warned {
                bucket.leak_warned = true;
                warn!(
                    event_id,
                    listeners = bucket.listeners.len(),
                    max_listeners,
                    "Possible listener leak detected"
                );
            }
        }
    }

    /// Removes the first entry with `id`, dropping the bucket if it empties
    pub(crate) fn remove(&mut self, event_id: EventId, id: ListenerId) -> RemoveOutcome {
        let Some(index) = self.position(event_id) else {
            return RemoveOutcome::NotFound;
        };

        let bucket = &mut self.buckets[index];
        let outcome = match bucket.listeners.iter().position(|entry| entry.id == id) {
            Some(entry_index) => {
                bucket.listeners.remove(entry_index);
                RemoveOutcome::Removed
            }
            None => RemoveOutcome::NotFound,
        };

        if bucket.listeners.is_empty() {
            debug!(event_id, "Dropping empty listener bucket");
            self.buckets.remove(index);
        }

        outcome
    }

    /// Drops the bucket for `event_id`. Returns how many listeners it held.
    pub(crate) fn remove_all_for_event(&mut self, event_id: EventId) -> usize {
        match self.position(event_id) {
            Some(index) => self.buckets.remove(index).listeners.len(),
            None => 0,
        }
    }

    /// Drops every bucket. Returns how many listeners were released.
    pub(crate) fn clear(&mut self) -> usize {
        let released = self.buckets.iter().map(|bucket| bucket.listeners.len()).sum();
        self.buckets.clear();
        released
    }

    pub(crate) fn count(&self, event_id: EventId) -> usize {
        self.position(event_id)
            .map(|index| self.buckets[index].listeners.len())
            .unwrap_or(0)
    }

    pub(crate) fn event_ids(&self) -> impl Iterator<Item = EventId> + '_ {
        self.buckets.iter().map(|bucket| bucket.event_id)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn ids_for(&self, event_id: EventId) -> Vec<u32> {
        self.position(event_id)
            .map(|index| {
                self.buckets[index]
                    .listeners
                    .iter()
                    .map(|entry| entry.id.get())
                    .collect()
            })
            .unwrap_or_default()
    }
}
