//! Container builder configuration

/// Default number of bytes reserved for a new container's content
pub const DEFAULT_INITIAL_CAPACITY: usize = 256;

/// Container configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerConfig {
    /// Bytes reserved in the accumulation buffer up front
    pub initial_capacity: usize,
    /// Flush the sink after a successful write
    pub flush_after_write: bool,
}

impl ContainerConfig {
    /// Set the initial buffer capacity
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Set whether the sink is flushed after writing
    pub fn with_flush_after_write(mut self, flush: bool) -> Self {
        self.flush_after_write = flush;
        self
    }
}

impl Default for ContainerConfig {
    fn default() -> Self {
        ContainerConfig {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            flush_after_write: false,
        }
    }
}
