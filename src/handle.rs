//! Sentinel-returning surface over [`EventEmitter`]
//!
//! These functions take the emitter and callbacks as `Option`s and never
//! fail loudly: a missing emitter or callback yields the documented
//! sentinel instead of an error. Lookup misses stay distinguishable from
//! invalid input.
//!
//! | Operation      | Sentinel on invalid input |
//! |----------------|---------------------------|
//! | add / prepend  | [`INVALID_LISTENER_ID`]   |
//! | remove         | [`RemoveStatus::InvalidInput`] |
//! | remove-all     | `false`                   |
//! | count / emit   | [`INVALID_COUNT`]         |

use strum_macros::{Display, EnumIter};
use tracing::debug;

use crate::event::{BoxedListener, BoxedUnhandledListener, EventEmitter};
use crate::shared::{EmitterError, EventId, ListenerId, RemoveOutcome};

/// Returned instead of a listener id when registration is rejected
pub const INVALID_LISTENER_ID: u32 = 0;

/// Returned by count and emit for an invalid emitter
pub const INVALID_COUNT: i32 = -1;

/// Outcome of a sentinel-style removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum RemoveStatus {
    InvalidInput,
    NotFound,
    Removed,
}

impl RemoveStatus {
    /// Numeric form: -1 invalid input, 0 not found, 1 removed
    pub fn code(self) -> i32 {
        match self {
            RemoveStatus::InvalidInput => -1,
            RemoveStatus::NotFound => 0,
            RemoveStatus::Removed => 1,
        }
    }
}

impl From<RemoveOutcome> for RemoveStatus {
    fn from(outcome: RemoveOutcome) -> Self {
        match outcome {
            RemoveOutcome::NotFound => RemoveStatus::NotFound,
            RemoveOutcome::Removed => RemoveStatus::Removed,
        }
    }
}

impl From<Result<RemoveOutcome, EmitterError>> for RemoveStatus {
    fn from(result: Result<RemoveOutcome, EmitterError>) -> Self {
        match result {
            Ok(outcome) => outcome.into(),
            Err(e) => {
                debug!(error = %e, "Remove rejected");
                RemoveStatus::InvalidInput
            }
        }
    }
}

pub fn create<D: ?Sized>() -> EventEmitter<D> {
    EventEmitter::new()
}

/// Releases the emitter and everything registered on it
pub fn destroy<D: ?Sized>(emitter: Option<EventEmitter<D>>) {
    drop(emitter);
}

fn require<T>(value: Option<T>, error: EmitterError) -> Result<T, EmitterError> {
    value.ok_or(error)
}

fn id_or_sentinel(result: Result<ListenerId, EmitterError>) -> u32 {
    match result {
        Ok(id) => id.get(),
        Err(e) => {
            debug!(error = %e, "Listener registration rejected");
            INVALID_LISTENER_ID
        }
    }
}

fn count_or_sentinel(result: Result<usize, EmitterError>) -> i32 {
    match result {
        Ok(count) => i32::try_from(count).unwrap_or(i32::MAX),
        Err(e) => {
            debug!(error = %e, "Count rejected");
            INVALID_COUNT
        }
    }
}

fn try_add_listener<D: ?Sized>(
    emitter: Option<&mut EventEmitter<D>>,
    event_id: EventId,
    callback: Option<BoxedListener<D>>,
    once: bool,
    prepend: bool,
) -> Result<ListenerId, EmitterError> {
    let emitter = require(emitter, EmitterError::InvalidHandle)?;
    let callback = require(callback, EmitterError::MissingCallback)?;
    emitter.insert_listener(event_id, callback, once, prepend)
}

fn try_add_unhandled<D: ?Sized>(
    emitter: Option<&mut EventEmitter<D>>,
    callback: Option<BoxedUnhandledListener<D>>,
    prepend: bool,
) -> Result<ListenerId, EmitterError> {
    let emitter = require(emitter, EmitterError::InvalidHandle)?;
    let callback = require(callback, EmitterError::MissingCallback)?;
    emitter.insert_unhandled(callback, prepend)
}

fn parse_listener_id(raw: u32) -> Result<ListenerId, EmitterError> {
    ListenerId::new(raw).ok_or(EmitterError::InvalidListenerId(raw))
}

pub fn add_listener<D: ?Sized>(
    emitter: Option<&mut EventEmitter<D>>,
    event_id: EventId,
    callback: Option<BoxedListener<D>>,
) -> u32 {
    id_or_sentinel(try_add_listener(emitter, event_id, callback, false, false))
}

pub fn on<D: ?Sized>(
    emitter: Option<&mut EventEmitter<D>>,
    event_id: EventId,
    callback: Option<BoxedListener<D>>,
) -> u32 {
    add_listener(emitter, event_id, callback)
}

pub fn prepend_listener<D: ?Sized>(
    emitter: Option<&mut EventEmitter<D>>,
    event_id: EventId,
    callback: Option<BoxedListener<D>>,
) -> u32 {
    id_or_sentinel(try_add_listener(emitter, event_id, callback, false, true))
}

pub fn add_once_listener<D: ?Sized>(
    emitter: Option<&mut EventEmitter<D>>,
    event_id: EventId,
    callback: Option<BoxedListener<D>>,
) -> u32 {
    id_or_sentinel(try_add_listener(emitter, event_id, callback, true, false))
}

pub fn once<D: ?Sized>(
    emitter: Option<&mut EventEmitter<D>>,
    event_id: EventId,
    callback: Option<BoxedListener<D>>,
) -> u32 {
    add_once_listener(emitter, event_id, callback)
}

pub fn prepend_once_listener<D: ?Sized>(
    emitter: Option<&mut EventEmitter<D>>,
    event_id: EventId,
    callback: Option<BoxedListener<D>>,
) -> u32 {
    id_or_sentinel(try_add_listener(emitter, event_id, callback, true, true))
}

pub fn add_unhandled_listener<D: ?Sized>(
    emitter: Option<&mut EventEmitter<D>>,
    callback: Option<BoxedUnhandledListener<D>>,
) -> u32 {
    id_or_sentinel(try_add_unhandled(emitter, callback, false))
}

pub fn on_unhandled<D: ?Sized>(
    emitter: Option<&mut EventEmitter<D>>,
    callback: Option<BoxedUnhandledListener<D>>,
) -> u32 {
    add_unhandled_listener(emitter, callback)
}

pub fn prepend_unhandled_listener<D: ?Sized>(
    emitter: Option<&mut EventEmitter<D>>,
    callback: Option<BoxedUnhandledListener<D>>,
) -> u32 {
    id_or_sentinel(try_add_unhandled(emitter, callback, true))
}

pub fn remove_listener<D: ?Sized>(
    emitter: Option<&mut EventEmitter<D>>,
    event_id: EventId,
    listener_id: u32,
) -> RemoveStatus {
    let result = require(emitter, EmitterError::InvalidHandle).and_then(|emitter| {
        let id = parse_listener_id(listener_id)?;
        Ok(emitter.remove_listener(event_id, id))
    });
    result.into()
}

pub fn off<D: ?Sized>(
    emitter: Option<&mut EventEmitter<D>>,
    event_id: EventId,
    listener_id: u32,
) -> RemoveStatus {
    remove_listener(emitter, event_id, listener_id)
}

pub fn remove_unhandled_listener<D: ?Sized>(
    emitter: Option<&mut EventEmitter<D>>,
    listener_id: u32,
) -> RemoveStatus {
    let result = require(emitter, EmitterError::InvalidHandle).and_then(|emitter| {
        let id = parse_listener_id(listener_id)?;
        Ok(emitter.remove_unhandled_listener(id))
    });
    result.into()
}

pub fn remove_all_event_listeners<D: ?Sized>(
    emitter: Option<&mut EventEmitter<D>>,
    event_id: EventId,
) -> bool {
    match emitter {
        Some(emitter) => {
            emitter.remove_all_event_listeners(event_id);
            true
        }
        None => false,
    }
}

pub fn remove_all_unhandled_listeners<D: ?Sized>(emitter: Option<&mut EventEmitter<D>>) -> bool {
    match emitter {
        Some(emitter) => {
            emitter.remove_all_unhandled_listeners();
            true
        }
        None => false,
    }
}

pub fn remove_all_listeners<D: ?Sized>(emitter: Option<&mut EventEmitter<D>>) -> bool {
    match emitter {
        Some(emitter) => {
            emitter.remove_all_listeners();
            true
        }
        None => false,
    }
}

pub fn listener_count<D: ?Sized>(emitter: Option<&EventEmitter<D>>, event_id: EventId) -> i32 {
    let count = require(emitter, EmitterError::InvalidHandle)
        .map(|emitter| emitter.listener_count(event_id));
    count_or_sentinel(count)
}

pub fn emit<D: ?Sized>(emitter: Option<&mut EventEmitter<D>>, event_id: EventId, data: &D) -> i32 {
    let invoked =
        require(emitter, EmitterError::InvalidHandle).map(|emitter| emitter.emit(event_id, data));
    count_or_sentinel(invoked)
}
