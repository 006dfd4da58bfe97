// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Extraction of in-range suffix positions from bound membership bit-vectors.
//!
//! Engines that answer lexicographic range queries often represent each bound
//! as a bit-vector over suffix start positions: bit `i` of the lower-bound
//! encoding says "suffix `i` falls below the lower bound", and likewise for
//! the upper bound. Because every suffix below the lower bound is also below
//! the upper bound, the lower encoding is a bit-subset of the upper one, and
//! the positions inside the half-open range are exactly the set bits of the
//! XOR of the two encodings.
//!
//! # INVARIANTS
//!
//! 1. **EQUAL_LENGTHS**: both encodings cover the same position universe.
//!    A length mismatch is a caller bug and fails fast.
//! 2. **BIT_SUBSET**: every bit set in `low_bits` is set in `top_bits`.
//!    Checked in debug builds only; with the subset violated the XOR is
//!    still computed but loses its in-range interpretation.
//! 3. **ASCENDING_OUTPUT**: the result is strictly ascending with no
//!    duplicates, one entry per set bit of the XOR.

use bitvec::prelude::*;

use crate::contracts::check_bit_subset;

/// Collect the positions that lie inside a bound pair given as membership
/// bit-vectors.
///
/// `low_bits` and `top_bits` must have equal length, with `low_bits` a
/// bit-subset of `top_bits`. The result has exactly
/// `(low_bits ^ top_bits).count_ones()` entries, in strictly ascending order.
///
/// This is a pure free function: it does not mutate its inputs and keeps no
/// state between calls.
///
/// # Panics
///
/// Panics if the two encodings differ in length.
///
/// # Examples
///
/// ```
/// use bitvec::prelude::*;
/// use sarq::extract_range_indices;
///
/// let low = bitvec![0, 1, 1, 0, 0];
/// let top = bitvec![0, 1, 1, 1, 0];
/// assert_eq!(extract_range_indices(&low, &top), vec![3]);
/// ```
pub fn extract_range_indices(low_bits: &BitSlice, top_bits: &BitSlice) -> Vec<usize> {
    assert_eq!(
        low_bits.len(),
        top_bits.len(),
        "bound encodings cover different position universes: {} vs {}",
        low_bits.len(),
        top_bits.len()
    );
    check_bit_subset(low_bits, top_bits);

    // The subset precondition turns XOR into "in top but not in low".
    let mut xor = low_bits.to_bitvec();
    xor ^= top_bits;

    let mut positions = Vec::with_capacity(xor.count_ones());
    positions.extend(xor.iter_ones());
    positions
}
