//! OS-backed entropy source.
//!
//! Wraps the operating system CSPRNG exposed by `rand_core`. This is the
//! production source; confidentiality of the shares is only as strong as
//! the platform generator behind it.

use rand_core::{OsRng, RngCore};

use super::{EntropyError, EntropySource};

/// Entropy source backed by the operating system CSPRNG.
pub struct SystemEntropy {
    _private: (),
}

impl SystemEntropy {
    /// Creates a new handle to the OS generator.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Default for SystemEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for SystemEntropy {
    fn name(&self) -> &'static str {
        "OsRng"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|_| EntropyError::CollectionFailed)
    }
}
