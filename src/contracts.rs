// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for caller-side preconditions.
//!
//! These checks document contracts the public API deliberately does not
//! enforce at runtime: they compile to nothing in release builds
//! (`debug_assert!`) but catch fixture-authoring and engine bugs early while
//! tests run.

use bitvec::prelude::*;

/// Check that every bit set in `low_bits` is also set in `top_bits`.
///
/// This is the extractor's caller contract: a lower-bound membership
/// encoding must be a bit-subset of the upper-bound encoding. Violations do
/// not make the XOR ill-defined, only meaningless, so the check is
/// debug-only.
#[inline]
pub fn check_bit_subset(low_bits: &BitSlice, top_bits: &BitSlice) {
    debug_assert!(
        low_bits.iter_ones().all(|i| top_bits[i]),
        "contract violation: lower-bound encoding is not a subset of the upper-bound encoding"
    );
}

/// Check that a position list is strictly ascending.
///
/// Candidates handed to the verification oracles must already be sorted
/// ascending with no duplicates; the oracles compare elementwise and never
/// re-sort.
#[inline]
pub fn check_sorted_ascending(positions: &[usize]) {
    debug_assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "contract violation: candidate positions are not strictly ascending"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subset_check_accepts_equal_encodings() {
        let bits = bitvec![1, 0, 1];
        check_bit_subset(&bits, &bits);
    }

    #[test]
    fn subset_check_accepts_strict_subset() {
        let low = bitvec![0, 0, 1];
        let top = bitvec![1, 0, 1];
        check_bit_subset(&low, &top);
    }

    #[test]
    #[should_panic(expected = "not a subset")]
    #[cfg(debug_assertions)]
    fn subset_check_rejects_stray_low_bit() {
        let low = bitvec![1, 0, 0];
        let top = bitvec![0, 0, 1];
        check_bit_subset(&low, &top);
    }

    #[test]
    fn ascending_check_accepts_sorted_unique() {
        check_sorted_ascending(&[0, 3, 7]);
        check_sorted_ascending(&[]);
        check_sorted_ascending(&[42]);
    }

    #[test]
    #[should_panic(expected = "not strictly ascending")]
    #[cfg(debug_assertions)]
    fn ascending_check_rejects_duplicates() {
        check_sorted_ascending(&[1, 1, 2]);
    }
}
