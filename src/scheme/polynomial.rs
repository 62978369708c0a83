//! Polynomial evaluation over GF(p).
//!
//! Shared by the dealer and the refresh path to avoid duplicating the
//! Horner loop.

use crate::field::gfp::PrimeField;

/// Evaluates f(x) = c[0] + c[1]*x + ... + c[k-1]*x^(k-1) at `x` using
/// Horner's method. Every intermediate stays reduced mod p.
///
/// An empty coefficient slice is the zero polynomial.
#[inline(always)]
pub(crate) fn evaluate_polynomial(field: &PrimeField, coeffs: &[u64], x: u64) -> u64 {
    let mut acc = 0u64;
    for &c in coeffs.iter().rev() {
        acc = field.add(field.mul(acc, x), c);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polynomial_eval() {
        // f(x) = 1 + 2x over GF(17)
        let field = PrimeField::new(17);
        let coeffs = [1, 2];
        assert_eq!(evaluate_polynomial(&field, &coeffs, 1), 3);
        assert_eq!(evaluate_polynomial(&field, &coeffs, 2), 5);
        assert_eq!(evaluate_polynomial(&field, &coeffs, 8), 0); // 1 + 16 = 17
    }

    #[test]
    fn test_constant_and_empty() {
        let field = PrimeField::new(17);
        assert_eq!(evaluate_polynomial(&field, &[13], 9), 13);
        assert_eq!(evaluate_polynomial(&field, &[], 9), 0);
    }

    #[test]
    fn test_eval_at_zero_is_constant_term() {
        let field = PrimeField::new(1613);
        let coeffs = [1234, 166, 94];
        assert_eq!(evaluate_polynomial(&field, &coeffs, 0), 1234);
    }
}
