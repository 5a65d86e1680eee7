use serde::Deserialize;

/// Configuration for an event emitter
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    /// Listener count past which a bucket logs a possible leak warning.
    /// Registration is never refused because of it.
    pub max_listeners: Option<usize>,
    /// Capacity reserved for the listener list of a newly created bucket
    pub bucket_capacity: usize,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            max_listeners: None,
            bucket_capacity: 4,
        }
    }
}

impl EmitterConfig {
    pub fn with_max_listeners(mut self, max_listeners: usize) -> Self {
        self.max_listeners = Some(max_listeners);
        self
    }

    pub fn with_bucket_capacity(mut self, bucket_capacity: usize) -> Self {
        self.bucket_capacity = bucket_capacity;
        self
    }
}
