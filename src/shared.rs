use std::fmt;
use std::num::NonZeroU32;
use strum_macros::{AsRefStr, Display};
use thiserror::Error;

/// Integer key distinguishing one trigger point from another
pub type EventId = i32;

/// Identifier handed out when a listener is registered.
///
/// Ids come from a single counter per emitter, shared between regular and
/// unhandled listeners, and are never reissued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(NonZeroU32);

impl ListenerId {
    /// Wraps a raw id, rejecting the 0 sentinel
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ListenerId> for u32 {
    fn from(id: ListenerId) -> Self {
        id.get()
    }
}

/// Result of removing a single listener by id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum RemoveOutcome {
    NotFound,
    Removed,
}

impl RemoveOutcome {
    pub fn is_removed(self) -> bool {
        matches!(self, RemoveOutcome::Removed)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmitterError {
    #[error("Invalid emitter handle")]
    InvalidHandle,

    #[error("Listener callback is missing")]
    MissingCallback,

    #[error("Invalid listener id: {0}")]
    InvalidListenerId(u32),

    #[error("Listener ids exhausted")]
    IdsExhausted,
}

/// Monotonic listener id counter, starting at 1
#[derive(Debug)]
pub(crate) struct IdAllocator {
    next: Option<NonZeroU32>,
}

impl IdAllocator {
    pub(crate) fn new() -> Self {
        Self {
            next: Some(NonZeroU32::MIN),
        }
    }

    /// Hands out the next id. Once `u32::MAX` has been issued every call fails.
    pub(crate) fn allocate(&mut self) -> Result<ListenerId, EmitterError> {
        let current = self.next.ok_or(EmitterError::IdsExhausted)?;
        self.next = current.checked_add(1);
        Ok(ListenerId(current))
    }

    #[cfg(test)]
    pub(crate) fn starting_at(raw: u32) -> Self {
        Self {
            next: NonZeroU32::new(raw),
        }
    }
}
