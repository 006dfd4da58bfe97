//! Property-based tests for the extractor and the fixture round-trip.

use bitvec::prelude::*;
use proptest::prelude::*;
use sarq::{extract_range_indices, Fixture};

/// Generate an encoding pair where the low bits are a subset of the top bits.
fn subset_pair_strategy() -> impl Strategy<Value = (BitVec, BitVec)> {
    prop::collection::vec((any::<bool>(), any::<bool>()), 0..256).prop_map(|cells| {
        let mut low = BitVec::repeat(false, cells.len());
        let mut top = BitVec::repeat(false, cells.len());
        for (i, (in_top, also_in_low)) in cells.into_iter().enumerate() {
            if in_top {
                top.set(i, true);
                if also_in_low {
                    low.set(i, true);
                }
            }
        }
        (low, top)
    })
}

fn fixture_strategy() -> impl Strategy<Value = Fixture> {
    (
        "[a-z]{0,40}",
        "[a-z]{0,4}",
        "[a-z]{0,4}",
        prop::collection::vec(0usize..1000, 0..20),
    )
        .prop_map(|(text, b1, b2, expected)| {
            let (lower, upper) = if b1 <= b2 { (b1, b2) } else { (b2, b1) };
            Fixture::new(text, lower, upper, expected)
        })
}

proptest! {
    #[test]
    fn extracted_positions_are_exactly_top_minus_low((low, top) in subset_pair_strategy()) {
        let positions = extract_range_indices(&low, &top);

        // strictly ascending, one entry per position in top but not in low
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        let difference: Vec<usize> = top.iter_ones().filter(|&i| !low[i]).collect();
        prop_assert_eq!(positions, difference);
    }

    #[test]
    fn extract_of_identical_encodings_is_empty(bits in prop::collection::vec(any::<bool>(), 0..256)) {
        let encoding: BitVec = bits.into_iter().collect();
        prop_assert!(extract_range_indices(&encoding, &encoding).is_empty());
    }

    #[test]
    fn extract_of_empty_versus_full_is_the_identity_range(len in 0usize..256) {
        let zeros = BitVec::repeat(false, len);
        let ones = BitVec::repeat(true, len);
        let positions = extract_range_indices(&zeros, &ones);
        prop_assert_eq!(positions, (0..len).collect::<Vec<_>>());
    }

    #[test]
    fn save_then_load_reproduces_the_fixture(fixture in fixture_strategy()) {
        let file = tempfile::NamedTempFile::new().unwrap();
        fixture.save(file.path()).unwrap();
        let reloaded = Fixture::load(file.path()).unwrap();
        prop_assert_eq!(fixture, reloaded);
    }

    #[test]
    fn checks_have_no_hidden_state(fixture in fixture_strategy(), candidate in prop::collection::vec(0usize..1000, 0..20)) {
        let mut candidate = candidate;
        candidate.sort_unstable();
        candidate.dedup();

        let first = fixture.check_exact(&candidate);
        for _ in 0..3 {
            prop_assert_eq!(fixture.check_exact(&candidate), first);
        }
    }
}
