// Registry-and-dispatch engine
//
// Listeners are kept in per-event-id buckets, catch-all listeners in a flat
// list, and `EventEmitter::emit` routes an event to one or the other.

// Public API - what other modules can use
pub use config::EmitterConfig;
pub use emitter::EventEmitter;
pub use handler::{BoxedListener, BoxedUnhandledListener, Listener, NoOpListener, UnhandledListener};

// Internal modules
mod config;
mod dispatcher;
mod emitter;
mod handler;
mod registry;
mod unhandled;
