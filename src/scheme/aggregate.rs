//! Operations on dealt shares.
//!
//! Everything here works share-wise and never sees the secret:
//! - **Proactive refresh**: re-randomizes a share set without changing
//!   the secret, so shares leaked before the refresh become useless.
//! - **Homomorphic addition**: same-coordinate shares of two secrets
//!   combine into a share of their sum mod p.

extern crate alloc;
use alloc::vec::Vec;
use zeroize::Zeroizing;

use crate::entropy::{uniform_below, EntropySource};
use crate::field::gfp::PrimeField;
use super::polynomial::evaluate_polynomial;
use super::share::Share;
use super::ShareError;

/// Re-randomizes shares in place, keeping the secret constant.
///
/// Adds a fresh zero-intercept polynomial of degree `threshold - 1` to
/// every share. Old and refreshed shares must never be mixed in one
/// reconstruction; they lie on different polynomials.
pub fn refresh_shares<R: EntropySource + ?Sized>(
    modulus: u64,
    threshold: u32,
    shares: &mut [Share],
    rng: &mut R,
) -> Result<(), ShareError> {
    if modulus < 2 {
        return Err(ShareError::CompositeModulus);
    }
    if threshold < 1 {
        return Err(ShareError::InvalidThreshold);
    }
    if shares.is_empty() {
        return Err(ShareError::InsufficientShares);
    }
    let field = PrimeField::new(modulus);
    for (i, share) in shares.iter().enumerate() {
        if share.x == 0 || !field.contains(share.x) {
            return Err(ShareError::InvalidShareIndex);
        }
        for other in &shares[i + 1..] {
            if other.x == share.x {
                return Err(ShareError::DuplicateShareIndex);
            }
        }
    }

    // g(x) = 0 + c1*x + ... + c_{t-1}*x^(t-1); adding g moves every share
    // onto f + g, which has the same constant term as f.
    let mut coeffs = Zeroizing::new(Vec::with_capacity(threshold as usize));
    coeffs.push(0u64);
    for _ in 1..threshold {
        coeffs.push(uniform_below(rng, modulus).map_err(|_| ShareError::RngFailure)?);
    }

    for share in shares.iter_mut() {
        let delta = evaluate_polynomial(&field, &coeffs, share.x);
        share.y = field.add(share.y, delta);
    }
    Ok(())
}

/// Combines same-coordinate shares of two secrets into a share of their
/// sum mod p.
///
/// Both inputs must come from dealings over the same modulus; the result
/// reconstructs to `(s1 + s2) mod p` alongside other combined shares.
pub fn add_shares(modulus: u64, a: &Share, b: &Share) -> Result<Share, ShareError> {
    if modulus < 2 {
        return Err(ShareError::CompositeModulus);
    }
    let field = PrimeField::new(modulus);
    if a.x != b.x || a.x == 0 || !field.contains(a.x) {
        return Err(ShareError::InvalidShareIndex);
    }
    Share::new(a.x, field.add(a.y, b.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::custom::ScriptedSource;
    use crate::scheme::reconstruct::reconstruct_secret;

    fn shares_of(points: &[(u64, u64)]) -> Vec<Share> {
        points.iter().map(|&(x, y)| Share { x, y }).collect()
    }

    fn scripted(values: &[u64]) -> ScriptedSource {
        let mut source = ScriptedSource::new();
        for v in values {
            source.push_bytes(&v.to_le_bytes());
        }
        source
    }

    #[test]
    fn test_refresh_preserves_secret_and_changes_shares() {
        // Shares of f(x) = 13 + 10x + 2x^2 over GF(17); refresh with
        // g(x) = 5x + 7x^2.
        let mut shares = shares_of(&[(1, 8), (2, 7), (3, 10), (4, 0), (5, 11)]);
        let original = shares.clone();
        let mut rng = scripted(&[5, 7]);

        refresh_shares(17, 3, &mut shares, &mut rng).unwrap();

        let refreshed: Vec<u64> = shares.iter().map(|s| s.y).collect();
        assert_eq!(refreshed, [3, 11, 3, 13, 7]);
        for (old, new) in original.iter().zip(shares.iter()) {
            assert_ne!(old.y, new.y);
        }
        assert_eq!(reconstruct_secret(17, 3, &shares[1..4]).unwrap(), 13);
    }

    #[test]
    fn test_refresh_threshold_one_is_identity() {
        // The only zero-intercept polynomial of degree 0 is 0 itself.
        let mut shares = shares_of(&[(1, 7), (2, 7)]);
        let mut rng = ScriptedSource::new();
        refresh_shares(17, 1, &mut shares, &mut rng).unwrap();
        assert_eq!(shares[0].y, 7);
        assert_eq!(shares[1].y, 7);
    }

    #[test]
    fn test_refresh_validation() {
        let mut rng = ScriptedSource::new();
        let mut empty: Vec<Share> = Vec::new();
        assert_eq!(
            refresh_shares(17, 3, &mut empty, &mut rng),
            Err(ShareError::InsufficientShares)
        );

        let mut duplicated = shares_of(&[(1, 2), (1, 3)]);
        assert_eq!(
            refresh_shares(17, 2, &mut duplicated, &mut rng),
            Err(ShareError::DuplicateShareIndex)
        );
    }

    #[test]
    fn test_homomorphic_addition() {
        // f1(x) = 100 + 3x and f2(x) = 200 + 7x over GF(1613).
        let first = shares_of(&[(1, 103), (2, 106), (3, 109)]);
        let second = shares_of(&[(1, 207), (2, 214), (3, 221)]);

        let mut combined = Vec::new();
        for (a, b) in first.iter().zip(second.iter()) {
            combined.push(add_shares(1613, a, b).unwrap());
        }
        let sums: Vec<u64> = combined.iter().map(|s| s.y).collect();
        assert_eq!(sums, [310, 320, 330]);
        assert_eq!(reconstruct_secret(1613, 2, &combined[0..2]).unwrap(), 300);
    }

    #[test]
    fn test_add_shares_requires_matching_coordinate() {
        let a = Share::new(1, 10).unwrap();
        let b = Share::new(2, 20).unwrap();
        assert_eq!(add_shares(1613, &a, &b), Err(ShareError::InvalidShareIndex));
    }
}
