//! Secret reconstruction from shares.
//!
//! Lagrange interpolation over GF(p): evaluated at x = 0 it recovers the
//! secret, evaluated at an arbitrary coordinate it recovers the share a
//! missing custodian would hold.
//!
//! Interpolation is exact for any subset of at least `threshold` genuine
//! shares; supplying more than `threshold` is allowed and changes
//! nothing. Shares that are not evaluations of one polynomial produce a
//! well-defined but meaningless result rather than an error. That is
//! inherent to the scheme; see [`super::verify`] for consistency checks.

extern crate alloc;
use alloc::vec::Vec;

use crate::field::gfp::PrimeField;
use super::share::Share;
use super::ShareError;

/// Reconstructs the secret (the polynomial value at x = 0).
///
/// Fails with `InsufficientShares` below the threshold (the system of
/// equations would be underdetermined, so no value is computed) and with
/// `DuplicateShareIndex` when two x-coordinates coincide mod p.
pub fn reconstruct_secret(
    modulus: u64,
    threshold: u32,
    shares: &[Share],
) -> Result<u64, ShareError> {
    interpolate(modulus, threshold, shares, 0)
}

/// Interpolates the share value at an arbitrary coordinate `x`.
///
/// Recovers the y-value the custodian at `x` would have been dealt, from
/// any qualifying subset of the remaining shares. At a coordinate already
/// present in `shares` this returns that share's own y; at 0 it returns
/// the secret.
pub fn evaluate_at(
    modulus: u64,
    threshold: u32,
    shares: &[Share],
    x: u64,
) -> Result<u64, ShareError> {
    interpolate(modulus, threshold, shares, x)
}

/// Reconstructs from parallel coordinate/value sequences.
///
/// Convenience over [`reconstruct_secret`] for callers that track the
/// halves separately; pairing is positional.
pub fn reconstruct_from_points(
    modulus: u64,
    threshold: u32,
    xs: &[u64],
    ys: &[u64],
) -> Result<u64, ShareError> {
    if xs.len() != ys.len() {
        return Err(ShareError::LengthMismatch);
    }
    let mut shares = Vec::with_capacity(xs.len());
    for (&x, &y) in xs.iter().zip(ys.iter()) {
        shares.push(Share::new(x, y)?);
    }
    reconstruct_secret(modulus, threshold, &shares)
}

fn interpolate(
    modulus: u64,
    threshold: u32,
    shares: &[Share],
    at: u64,
) -> Result<u64, ShareError> {
    if modulus < 2 {
        return Err(ShareError::CompositeModulus);
    }
    if threshold < 1 {
        return Err(ShareError::InvalidThreshold);
    }
    if shares.len() < threshold as usize {
        return Err(ShareError::InsufficientShares);
    }
    let field = PrimeField::new(modulus);

    // 1. Validation: coordinates non-zero, in range, pairwise distinct.
    for (i, share) in shares.iter().enumerate() {
        if share.x == 0 || !field.contains(share.x) {
            return Err(ShareError::InvalidShareIndex);
        }
        for other in &shares[i + 1..] {
            if share.x == other.x {
                return Err(ShareError::DuplicateShareIndex);
            }
        }
    }

    // 2. Lagrange basis at `at`:
    //    L_i(at) = prod_{j != i} (at - x_j) * (x_i - x_j)^-1
    //    result  = sum_i y_i * L_i(at)
    let mut acc = 0u64;
    for (i, share) in shares.iter().enumerate() {
        let mut numerator = 1u64;
        let mut denominator = 1u64;
        for (j, other) in shares.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator = field.mul(numerator, field.sub(at, other.x));
            denominator = field.mul(denominator, field.sub(share.x, other.x));
        }
        let inv = field
            .inv(denominator)
            .ok_or(ShareError::DuplicateShareIndex)?;
        acc = field.add(acc, field.mul(share.y, field.mul(numerator, inv)));
    }
    Ok(acc)
}
