//! Shamir's (t, w) threshold secret sharing over GF(p).
//!
//! A secret in `[0, p)` is hidden as the constant term of a random
//! polynomial of degree `t - 1`; each share is one evaluation of that
//! polynomial at a distinct non-zero coordinate. Any `t` shares pin the
//! polynomial down exactly, any `t - 1` leave the secret information-
//! theoretically undetermined.
//!
//! # Components
//! - `share`: definition of a secret share.
//! - `dealer`: parameter validation, coordinate selection, share generation.
//! - `reconstruct`: Lagrange interpolation for secret and share recovery.
//! - `verify`: consistency checking and defective-share identification.
//! - `aggregate`: operations on dealt shares (refresh, homomorphic add).
//!
//! # Security
//! - **Zeroization**: polynomial coefficients and share values are wiped
//!   on drop.
//! - **Fail-closed**: underdetermined or singular reconstructions are
//!   errors, never silently wrong values.
//! - **Forgery**: reconstruction from shares that are not genuine
//!   evaluations of one polynomial yields a well-defined but meaningless
//!   value. That is inherent to the scheme; `verify` can locate a single
//!   defective share when spare shares are available.

pub mod share;
pub mod dealer;
pub mod reconstruct;
pub mod verify;
pub mod aggregate;
pub(crate) mod polynomial;

extern crate alloc;
use alloc::vec::Vec;
use core::fmt;

use crate::entropy::EntropySource;

/// Errors for threshold-sharing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareError {
    /// Threshold out of range (must satisfy 1 <= threshold <= share count).
    InvalidThreshold,
    /// Secret does not fit in the field (secret >= modulus).
    SecretOutOfRange,
    /// Modulus is not usable as a field modulus (composite or < 2).
    CompositeModulus,
    /// Field too small for the requested number of distinct non-zero
    /// x-coordinates.
    InsufficientFieldSize,
    /// Share x-coordinate is 0 or >= modulus.
    InvalidShareIndex,
    /// Fewer shares than the threshold were presented.
    InsufficientShares,
    /// Two shares carry the same x-coordinate; interpolation is singular.
    DuplicateShareIndex,
    /// Paired sequences differ in length.
    LengthMismatch,
    /// The entropy source failed.
    RngFailure,
}

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareError::InvalidThreshold => write!(f, "Invalid threshold configuration"),
            ShareError::SecretOutOfRange => write!(f, "Secret not below the modulus"),
            ShareError::CompositeModulus => write!(f, "Modulus is not prime"),
            ShareError::InsufficientFieldSize => {
                write!(f, "Field too small for the requested share count")
            }
            ShareError::InvalidShareIndex => write!(f, "Share x-coordinate out of range"),
            ShareError::InsufficientShares => write!(f, "Not enough shares to reconstruct"),
            ShareError::DuplicateShareIndex => write!(f, "Duplicate share x-coordinate"),
            ShareError::LengthMismatch => write!(f, "Mismatched sequence lengths"),
            ShareError::RngFailure => write!(f, "Entropy source failure"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShareError {}

/// Trait for secret sharing schemes.
///
/// Abstract interface over a configured scheme instance, to support
/// future extensions (other fields or schemes).
pub trait SecretSharingScheme {
    type Share;
    type Secret;
    type Error;

    /// Splits the configured secret into a fresh set of shares.
    fn split<R: EntropySource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<Self::Share>, Self::Error>;

    /// Reconstructs the secret from a qualifying subset of shares.
    fn reconstruct(&self, shares: &[Self::Share]) -> Result<Self::Secret, Self::Error>;
}
