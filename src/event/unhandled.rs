use super::handler::BoxedUnhandledListener;
use crate::shared::{ListenerId, RemoveOutcome};

pub(crate) struct UnhandledEntry<D: ?Sized> {
    pub(crate) id: ListenerId,
    pub(crate) listener: BoxedUnhandledListener<D>,
}

/// Flat, ordered list of catch-all listeners
pub(crate) struct UnhandledRegistry<D: ?Sized> {
    entries: Vec<UnhandledEntry<D>>,
}

impl<D: ?Sized> UnhandledRegistry<D> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, entry: UnhandledEntry<D>, prepend: bool) {
        if prepend {
            self.entries.insert(0, entry);
        } else {
            self.entries.push(entry);
        }
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> RemoveOutcome {
        match self.entries.iter().position(|entry| entry.id == id) {
            Some(index) => {
                self.entries.remove(index);
                RemoveOutcome::Removed
            }
            None => RemoveOutcome::NotFound,
        }
    }

    /// Drops every entry. Returns how many were released.
    pub(crate) fn clear(&mut self) -> usize {
        let released = self.entries.len();
        self.entries.clear();
        released
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [UnhandledEntry<D>] {
        &mut self.entries
    }
}
