use std::cell::RefCell;
use std::rc::Rc;

use eventemitter::EventId;

// ============================================================================
// Recording listeners
// ============================================================================

/// Shared log of every callback invocation, in call order
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<String>>>,
}

#[allow(dead_code)]
impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listener that records `"<name>:<data>"`
    pub fn listener(&self, name: &'static str) -> impl FnMut(&str) + 'static {
        let calls = self.calls.clone();
        move |data: &str| calls.borrow_mut().push(format!("{name}:{data}"))
    }

    /// Unhandled listener that records `"<name>:<event_id>:<data>"`
    pub fn unhandled(&self, name: &'static str) -> impl FnMut(EventId, &str) + 'static {
        let calls = self.calls.clone();
        move |event_id: EventId, data: &str| {
            calls
                .borrow_mut()
                .push(format!("{name}:{event_id}:{data}"))
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}
