//! Caller-scripted entropy source.
//!
//! Serves bytes from a queue the caller fills in advance. Useful for
//! deterministic replay of a dealing (known-answer tests, audits) and for
//! injecting externally gathered entropy.

extern crate alloc;
use alloc::collections::VecDeque;

use super::{EntropyError, EntropySource};

/// Source that replays caller-provided bytes in FIFO order.
pub struct ScriptedSource {
    queue: VecDeque<u8>,
}

impl ScriptedSource {
    /// Creates an empty source. It fails with `Exhausted` until bytes are
    /// pushed.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Appends bytes to the queue.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.queue.extend(bytes.iter().copied());
    }

    /// Returns the number of queued bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl Default for ScriptedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for ScriptedSource {
    fn name(&self) -> &'static str {
        "Scripted"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        if self.queue.len() < dest.len() {
            return Err(EntropyError::Exhausted);
        }
        for b in dest.iter_mut() {
            match self.queue.pop_front() {
                Some(v) => *b = v,
                None => return Err(EntropyError::Exhausted),
            }
        }
        Ok(())
    }
}
