//! Secret share definition.
//!
//! A share is a point (x, y) on the secret-encoding polynomial:
//! - x: a non-zero field element identifying the custodian. Public.
//! - y: the polynomial evaluated at x. Sensitive.
//!
//! Neither half is meaningful without the other.
//!
//! # Security
//! - Implements `Zeroize` and `ZeroizeOnDrop`; the y-value is wiped from
//!   memory on drop, the public x is skipped.
//! - The `Debug` implementation redacts the y-value.

use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::ShareError;

/// One share of a secret.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Share {
    /// The x-coordinate (1 <= x < modulus). Public.
    #[zeroize(skip)]
    pub x: u64,
    /// The polynomial evaluation at x. Sensitive.
    pub y: u64,
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("x", &self.x)
            .field("y", &"***SENSITIVE***")
            .finish()
    }
}

impl Share {
    /// Creates a share, rejecting x = 0.
    ///
    /// Evaluating the polynomial at 0 returns the secret itself, so a
    /// zero coordinate is never a valid share. The upper range check
    /// (x < modulus) happens wherever the modulus is known.
    pub fn new(x: u64, y: u64) -> Result<Self, ShareError> {
        if x == 0 {
            return Err(ShareError::InvalidShareIndex);
        }
        Ok(Self { x, y })
    }
}
