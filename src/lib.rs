// In-process event dispatch registry
//
// Callers register listeners against integer event ids; `emit` synchronously
// invokes every listener for an id, or the unhandled listeners when the id
// has none.

pub mod event;
pub mod handle;
pub mod shared;

pub use event::{
    BoxedListener, BoxedUnhandledListener, EmitterConfig, EventEmitter, Listener, NoOpListener,
    UnhandledListener,
};
pub use handle::RemoveStatus;
pub use shared::{EmitterError, EventId, ListenerId, RemoveOutcome};
