use crate::shared::EventId;

/// Trait for callbacks bound to a specific event id
///
/// Any `FnMut(&D)` closure is a listener. Whatever the closure captures is
/// its context: the emitter owns the boxed callable and nothing else, so
/// shared state (an `Rc<RefCell<_>>`, a channel sender, ...) stays owned by
/// the caller.
pub trait Listener<D: ?Sized> {
    /// Handle one emission of the event this listener is registered on
    fn handle(&mut self, data: &D);
}

impl<D: ?Sized, F> Listener<D> for F
where
    F: FnMut(&D),
{
    fn handle(&mut self, data: &D) {
        self(data)
    }
}

/// Trait for catch-all callbacks, invoked only for event ids without listeners
pub trait UnhandledListener<D: ?Sized> {
    fn handle_unhandled(&mut self, event_id: EventId, data: &D);
}

impl<D: ?Sized, F> UnhandledListener<D> for F
where
    F: FnMut(EventId, &D),
{
    fn handle_unhandled(&mut self, event_id: EventId, data: &D) {
        self(event_id, data)
    }
}

pub type BoxedListener<D: ?Sized> = Box<dyn Listener<D>>;
pub type BoxedUnhandledListener<D: ?Sized> = Box<dyn UnhandledListener<D>>;

/// A listener that ignores every event
///
/// Useful when only the registration itself matters, e.g. to keep a bucket
/// alive so emits never fall through to the unhandled listeners.
pub struct NoOpListener;

impl<D: ?Sized> Listener<D> for NoOpListener {
    fn handle(&mut self, _data: &D) {}
}
