//! Primality testing for `u64` moduli.
//!
//! The scheme constructor rejects composite moduli up front: a composite
//! modulus yields a ring where some differences of x-coordinates have no
//! inverse, and reconstruction would return plausible-looking garbage
//! instead of failing. Trial division is not feasible at 64 bits, so this
//! uses the deterministic Miller-Rabin variant whose fixed witness set
//! covers the entire `u64` range.

use crate::field::gfp::PrimeField;

/// Witnesses proving compositeness for every composite below 3.3 * 10^24,
/// which covers all of `u64`.
const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Returns `true` if `n` is prime.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for &w in &WITNESSES {
        if n % w == 0 {
            return n == w;
        }
    }

    // n is odd and > 37 here. Write n - 1 = d * 2^r with d odd.
    let r = (n - 1).trailing_zeros();
    let d = (n - 1) >> r;
    let field = PrimeField::new(n);

    'witness: for &a in &WITNESSES {
        let mut x = field.pow(a, d);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..r {
            x = field.mul(x, x);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_numbers() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(17));
        assert!(!is_prime(15));
    }

    #[test]
    fn test_known_primes() {
        assert!(is_prime(1613));
        assert!(is_prime(1_000_000_007));
        assert!(is_prime(94_875_355_691));
        assert!(is_prime(2_305_843_009_213_693_951)); // 2^61 - 1
        assert!(is_prime(18_446_744_073_709_551_557)); // largest u64 prime
    }

    #[test]
    fn test_known_composites() {
        assert!(!is_prime(561)); // Carmichael
        assert!(!is_prime(1_000_000_008));
        assert!(!is_prime(u64::MAX));
        assert!(!is_prime(2_305_843_009_213_693_953));
    }

    #[test]
    fn test_witness_squares() {
        // Squares of the witnesses themselves must not slip through.
        for &w in &WITNESSES {
            assert!(!is_prime(w * w));
        }
    }
}
