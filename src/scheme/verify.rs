//! Share-set consistency checking.
//!
//! Reconstruction cannot tell genuine shares from forged or corrupted
//! ones. With more shares on hand than the threshold there is redundancy
//! to exploit: every threshold-sized subset of a clean set reconstructs
//! the same value, and a single corrupted share betrays itself as the
//! common member of every subset that disagrees with the consensus.

extern crate alloc;
use alloc::vec::Vec;

use super::reconstruct::reconstruct_secret;
use super::share::Share;
use super::ShareError;

/// Returns `true` iff every threshold-sized subset of `shares`
/// reconstructs the same value.
///
/// A `false` result proves at least one share is not an evaluation of
/// the same polynomial as the others; it does not say which one.
pub fn validate_shares(
    modulus: u64,
    threshold: u32,
    shares: &[Share],
) -> Result<bool, ShareError> {
    let t = threshold as usize;
    if shares.len() < t {
        return Err(ShareError::InsufficientShares);
    }

    let mut combos = Combinations::new(shares.len(), t);
    let mut reference = None;
    while let Some(idx) = combos.next() {
        let subset: Vec<Share> = idx.iter().map(|&i| shares[i].clone()).collect();
        let key = reconstruct_secret(modulus, threshold, &subset)?;
        match reference {
            None => reference = Some(key),
            Some(r) if r != key => return Ok(false),
            Some(_) => {}
        }
    }
    Ok(true)
}

/// Identifies the single defective share in an inconsistent set.
///
/// Reconstructs every threshold-sized subset, takes the most frequent
/// value as consensus, and intersects the membership of every subset
/// that disagrees. Returns the x-coordinate of the lone culprit, or
/// `None` when the set is consistent or no single share explains every
/// disagreement (e.g. two corrupted shares, or too little redundancy to
/// isolate one).
pub fn find_defective_share(
    modulus: u64,
    threshold: u32,
    shares: &[Share],
) -> Result<Option<u64>, ShareError> {
    let t = threshold as usize;
    if shares.len() < t {
        return Err(ShareError::InsufficientShares);
    }

    // One (value, member x-coordinates) record per subset.
    let mut runs: Vec<(u64, Vec<u64>)> = Vec::new();
    let mut combos = Combinations::new(shares.len(), t);
    while let Some(idx) = combos.next() {
        let subset: Vec<Share> = idx.iter().map(|&i| shares[i].clone()).collect();
        let key = reconstruct_secret(modulus, threshold, &subset)?;
        runs.push((key, subset.iter().map(|s| s.x).collect()));
    }

    // Majority vote on the reconstructed value.
    let mut tally: Vec<(u64, usize)> = Vec::new();
    for &(key, _) in &runs {
        match tally.iter_mut().find(|entry| entry.0 == key) {
            Some(entry) => entry.1 += 1,
            None => tally.push((key, 1)),
        }
    }
    if tally.len() == 1 {
        return Ok(None);
    }
    let consensus = match tally.iter().max_by_key(|entry| entry.1) {
        Some(entry) => entry.0,
        None => return Ok(None),
    };

    // The culprit sits in every subset that missed the consensus.
    let mut suspects: Vec<u64> = shares.iter().map(|s| s.x).collect();
    for (key, members) in &runs {
        if *key != consensus {
            suspects.retain(|x| members.contains(x));
        }
    }

    if suspects.len() == 1 {
        log::warn!("defective share identified at x = {}", suspects[0]);
        Ok(Some(suspects[0]))
    } else {
        Ok(None)
    }
}

/// Lexicographic k-combinations of `0..n`, yielded as index slices.
struct Combinations {
    n: usize,
    k: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }

    fn next(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.indices);
        }
        // Find the rightmost index that can still move up, bump it, and
        // reset everything to its right.
        let mut i = self.k;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] != i + self.n - self.k {
                break;
            }
        }
        self.indices[i] += 1;
        for j in i + 1..self.k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shares_of(points: &[(u64, u64)]) -> Vec<Share> {
        points.iter().map(|&(x, y)| Share { x, y }).collect()
    }

    // Shares of f(x) = 13 + 10x + 2x^2 over GF(17).
    fn clean_set() -> Vec<Share> {
        shares_of(&[(1, 8), (2, 7), (3, 10), (4, 0), (5, 11)])
    }

    #[test]
    fn test_combinations_cover_all_subsets() {
        let mut combos = Combinations::new(4, 2);
        let mut seen = Vec::new();
        while let Some(idx) = combos.next() {
            seen.push(idx.to_vec());
        }
        assert_eq!(
            seen,
            [[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]]
        );
    }

    #[test]
    fn test_combinations_degenerate_sizes() {
        let mut all = Combinations::new(3, 3);
        assert_eq!(all.next(), Some(&[0, 1, 2][..]));
        assert_eq!(all.next(), None);

        let mut oversized = Combinations::new(2, 3);
        assert_eq!(oversized.next(), None);
    }

    #[test]
    fn test_validate_clean_set() {
        let shares = clean_set();
        assert_eq!(validate_shares(17, 3, &shares), Ok(true));
        assert_eq!(find_defective_share(17, 3, &shares), Ok(None));
    }

    #[test]
    fn test_corrupted_share_detected_and_located() {
        let mut shares = clean_set();
        shares[3].y = 3; // genuine value is 0
        assert_eq!(validate_shares(17, 3, &shares), Ok(false));
        assert_eq!(find_defective_share(17, 3, &shares), Ok(Some(4)));
    }

    #[test]
    fn test_insufficient_shares() {
        let shares = clean_set();
        assert_eq!(
            validate_shares(17, 3, &shares[0..2]),
            Err(ShareError::InsufficientShares)
        );
        assert_eq!(
            find_defective_share(17, 3, &shares[0..2]),
            Err(ShareError::InsufficientShares)
        );
    }

    #[test]
    fn test_large_set_from_field_deployment() {
        // Nine shares over GF(94875355691) with one corrupted custodian;
        // 126 subset reconstructions isolate it.
        let p = 94_875_355_691;
        let shares = shares_of(&[
            (11, 537_048_626),
            (22, 89_894_377_870),
            (33, 65_321_160_237),
            (44, 18_374_404_957),
            (55, 24_564_576_435),
            (66, 87_371_334_299),
            (77, 60_461_341_922),
            (88, 10_096_524_973),
            (99, 81_367_619_987),
        ]);
        assert_eq!(validate_shares(p, 5, &shares), Ok(false));
        assert_eq!(find_defective_share(p, 5, &shares), Ok(Some(55)));
    }
}
