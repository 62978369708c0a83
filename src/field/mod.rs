//! Finite-field arithmetic.
//!
//! The scheme works over GF(p) for a caller-chosen prime `p` that fits in
//! a `u64`. Arithmetic lives in [`gfp`]; the primality check backing the
//! scheme constructor lives in [`prime`].

pub mod gfp;
pub mod prime;
