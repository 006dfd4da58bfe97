// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The engine interface consumed by the verification harness, plus a
//! deliberately simple reference implementation.
//!
//! The harness never inspects an engine's internals. It needs exactly one
//! capability: given the text the engine was built over and two prefix
//! bounds, report every suffix start position whose suffix lies in
//! `[lower, upper)` under lexicographic order.

use bitvec::prelude::*;

use crate::bitrange::extract_range_indices;

/// A suffix-array range-query engine, as seen by the harness.
///
/// Implementations answer queries over a text supplied at construction.
/// Returned positions must be ascending-sorted suffix start positions whose
/// suffix lies in `[lower, upper)` lexicographically.
pub trait RangeQuery {
    fn range_query(&self, lower: &str, upper: &str) -> Vec<usize>;
}

/// Slow but obviously correct range-query engine.
///
/// Used to author fixtures and as the candidate producer in the CLI driver.
/// Each bound is materialized as a membership bit-vector (`bit i` = "suffix
/// starting at `i` sorts below the bound") by direct suffix comparison, and
/// the in-range positions fall out of [`extract_range_indices`]. No suffix
/// array is ever built, so the engine shares no code with anything it is
/// used to check.
pub struct ReferenceEngine {
    text: String,
}

impl ReferenceEngine {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Membership encoding for one bound: bit `i` set iff the suffix
    /// starting at `i` is lexicographically below `bound`.
    fn below_bound_bits(&self, bound: &str) -> BitVec {
        let text = self.text.as_bytes();
        let bound = bound.as_bytes();
        let mut bits = BitVec::repeat(false, text.len());
        for start in 0..text.len() {
            if &text[start..] < bound {
                bits.set(start, true);
            }
        }
        bits
    }
}

impl RangeQuery for ReferenceEngine {
    fn range_query(&self, lower: &str, upper: &str) -> Vec<usize> {
        // lower <= upper makes the low encoding a subset of the top one.
        let low_bits = self.below_bound_bits(lower);
        let top_bits = self.below_bound_bits(upper);
        extract_range_indices(&low_bits, &top_bits)
    }
}
