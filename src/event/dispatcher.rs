use tracing::trace;

use super::emitter::EventEmitter;
use crate::shared::EventId;

impl<D: ?Sized> EventEmitter<D> {
    /// Triggers `event_id`, handing `data` to every applicable callback
    ///
    /// If the event id has listeners, each one that was registered when the
    /// call started is invoked once, in list order; once-listeners are then
    /// removed, and the bucket with them if nothing else is left. Otherwise
    /// every unhandled listener is invoked with the event id and data, and
    /// none of them is removed.
    ///
    /// Returns the number of callbacks invoked.
    pub fn emit(&mut self, event_id: EventId, data: &D) -> usize {
        match self.listeners.position(event_id) {
            Some(index) => self.dispatch_to_bucket(index, event_id, data),
            None => self.dispatch_unhandled(event_id, data),
        }
    }

    fn dispatch_to_bucket(&mut self, index: usize, event_id: EventId, data: &D) -> usize {
        let bucket = self.listeners.bucket_at_mut(index);

        // Invoke first, reap once-listeners after, so every entry fires exactly once.
        let invoked = bucket.listeners.len();
        for entry in bucket.listeners.iter_mut() {
            trace!(event_id, listener_id = %entry.id, once = entry.once, "Invoking listener");
            entry.listener.handle(data);
        }

        let reaped = bucket.reap_once();
        if bucket.listeners.is_empty() {
            self.listeners.remove_bucket_at(index);
        }

        trace!(event_id, invoked, reaped, "Event emitted");
        invoked
    }

    fn dispatch_unhandled(&mut self, event_id: EventId, data: &D) -> usize {
        let entries = self.unhandled.entries_mut();
        for entry in entries.iter_mut() {
            trace!(event_id, listener_id = %entry.id, "Invoking unhandled listener");
            entry.listener.handle_unhandled(event_id, data);
        }

        let invoked = entries.len();
        trace!(event_id, invoked, "Unhandled event emitted");
        invoked
    }
}
