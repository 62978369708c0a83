//! Dealing: scheme construction, coordinate selection, share generation.
//!
//! [`ThresholdScheme`] is immutable after construction. Coordinate
//! selection and share generation are pure draws that return fresh
//! vectors; nothing is stored back into the instance, so there is no
//! call-ordering hazard and a single instance can serve concurrent
//! callers.
//!
//! # Security
//! - **Zeroization**: polynomial coefficients live in a `Zeroizing`
//!   buffer for the duration of one call; the scheme's own secret is
//!   wiped on drop.
//! - **Unbiased draws**: coefficients and coordinates come from rejection
//!   sampling over the injected entropy source.

extern crate alloc;
use alloc::vec::Vec;
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::entropy::{uniform_below, EntropySource};
use crate::field::gfp::PrimeField;
use crate::field::prime::is_prime;
use super::polynomial::evaluate_polynomial;
use super::share::Share;
use super::{SecretSharingScheme, ShareError};

/// An immutable (t, w) Shamir scheme over GF(p).
///
/// Holds the secret, the field and the share/threshold counts, all
/// validated once at construction. Each dealing call draws a fresh
/// polynomial and fresh coordinates; two dealings are unrelated share
/// sets that reconstruct to the same secret.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ThresholdScheme {
    secret: u64,
    #[zeroize(skip)]
    field: PrimeField,
    #[zeroize(skip)]
    share_count: u32,
    #[zeroize(skip)]
    threshold: u32,
}

impl fmt::Debug for ThresholdScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThresholdScheme")
            .field("secret", &"***SENSITIVE***")
            .field("modulus", &self.field.modulus())
            .field("share_count", &self.share_count)
            .field("threshold", &self.threshold)
            .finish()
    }
}

impl ThresholdScheme {
    /// Creates a scheme splitting `secret` into `share_count` shares of
    /// which any `threshold` reconstruct it.
    ///
    /// Validates:
    /// - `1 <= threshold <= share_count`
    /// - `modulus` is prime (deterministic Miller-Rabin)
    /// - `secret < modulus`
    /// - `share_count <= modulus - 1`, so enough distinct non-zero
    ///   x-coordinates exist
    pub fn new(
        secret: u64,
        modulus: u64,
        share_count: u32,
        threshold: u32,
    ) -> Result<Self, ShareError> {
        if threshold < 1 || threshold > share_count {
            return Err(ShareError::InvalidThreshold);
        }
        if !is_prime(modulus) {
            return Err(ShareError::CompositeModulus);
        }
        if secret >= modulus {
            return Err(ShareError::SecretOutOfRange);
        }
        if share_count as u64 > modulus - 1 {
            return Err(ShareError::InsufficientFieldSize);
        }
        Ok(Self {
            secret,
            field: PrimeField::new(modulus),
            share_count,
            threshold,
        })
    }

    /// Returns the field modulus.
    pub fn modulus(&self) -> u64 {
        self.field.modulus()
    }

    /// Returns the number of shares each dealing produces.
    pub fn share_count(&self) -> u32 {
        self.share_count
    }

    /// Returns the reconstruction threshold.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Selects `share_count` pairwise-distinct coordinates in `[1, p)`,
    /// uniformly at random without replacement.
    ///
    /// Zero is excluded because the polynomial at 0 is the secret itself.
    pub fn choose_x_coordinates<R: EntropySource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<u64>, ShareError> {
        let p = self.field.modulus();
        if self.share_count as u64 > p - 1 {
            return Err(ShareError::InsufficientFieldSize);
        }

        let mut xs: Vec<u64> = Vec::with_capacity(self.share_count as usize);
        while xs.len() < self.share_count as usize {
            let candidate = uniform_below(rng, p).map_err(|_| ShareError::RngFailure)?;
            if candidate == 0 || xs.contains(&candidate) {
                continue;
            }
            xs.push(candidate);
        }
        Ok(xs)
    }

    /// Draws a fresh random polynomial with constant term `secret` and
    /// evaluates it at every supplied coordinate.
    ///
    /// The returned y-values are positionally aligned with `xs` and all
    /// lie in `[0, p)`. The polynomial exists only inside this call.
    pub fn generate_shares<R: EntropySource + ?Sized>(
        &self,
        xs: &[u64],
        rng: &mut R,
    ) -> Result<Vec<u64>, ShareError> {
        let p = self.field.modulus();
        if xs.len() != self.share_count as usize {
            return Err(ShareError::LengthMismatch);
        }
        for (i, &x) in xs.iter().enumerate() {
            if x == 0 || !self.field.contains(x) {
                return Err(ShareError::InvalidShareIndex);
            }
            for &later in &xs[i + 1..] {
                if later == x {
                    return Err(ShareError::DuplicateShareIndex);
                }
            }
        }

        // f(x) = secret + a1*x + ... + a_{t-1}*x^(t-1), a_i uniform in [0, p)
        let mut coeffs = Zeroizing::new(Vec::with_capacity(self.threshold as usize));
        coeffs.push(self.secret);
        for _ in 1..self.threshold {
            coeffs.push(uniform_below(rng, p).map_err(|_| ShareError::RngFailure)?);
        }

        let mut ys = Vec::with_capacity(xs.len());
        for &x in xs {
            ys.push(evaluate_polynomial(&self.field, &coeffs, x));
        }
        Ok(ys)
    }

    /// One-shot dealing: fresh coordinates, fresh polynomial, paired
    /// shares.
    pub fn deal<R: EntropySource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<Share>, ShareError> {
        let xs = self.choose_x_coordinates(rng)?;
        let ys = Zeroizing::new(self.generate_shares(&xs, rng)?);

        let mut shares = Vec::with_capacity(xs.len());
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            shares.push(Share::new(x, y)?);
        }
        log::debug!(
            "dealt {} shares with threshold {}",
            shares.len(),
            self.threshold
        );
        Ok(shares)
    }
}

impl SecretSharingScheme for ThresholdScheme {
    type Share = Share;
    type Secret = u64;
    type Error = ShareError;

    fn split<R: EntropySource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<Share>, ShareError> {
        self.deal(rng)
    }

    fn reconstruct(&self, shares: &[Share]) -> Result<u64, ShareError> {
        super::reconstruct::reconstruct_secret(self.modulus(), self.threshold, shares)
    }
}
