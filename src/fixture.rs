//! Verification fixtures: one stored range-query scenario plus two
//! independent oracles for judging a candidate answer.
//!
//! A [`Fixture`] owns a text, two lexicographic prefix bounds, and the
//! expected set of suffix start positions for the half-open range between
//! the bounds. Candidates are judged two ways:
//!
//! - [`Fixture::check_exact`] replays the recorded answer (fast, trusts the
//!   fixture author),
//! - [`Fixture::check_naive`] recomputes ground truth from the suffix order
//!   of the text itself (slow, trusts nothing but string comparison).
//!
//! A `false` from either oracle is an ordinary result reporting a wrong
//! candidate, never an error.
//!
//! # INVARIANTS
//!
//! 1. **BOUND_ORDER**: `lower_bound <= upper_bound`, asserted on every
//!    construction path. Violations are fixture-authoring bugs, not
//!    recoverable input errors.
//! 2. **EXPECTED_SORTED**: `expected` is ascending-sorted regardless of the
//!    order it was supplied or stored in. No de-duplication is performed.
//! 3. **SINGLE_OWNER**: a fixture owns copies of all four fields and shares
//!    nothing with other fixtures.

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::iter::Peekable;
use std::ops::Bound::Excluded;
use std::path::Path;
use std::str::Chars;

use crate::contracts::check_sorted_ascending;
use crate::engine::RangeQuery;

/// Hard ceiling on text length for the naive oracle.
///
/// The oracle materializes every suffix and is quadratic-or-worse; it exists
/// for small hand-auditable fixtures only.
pub const NAIVE_MAX_TEXT_LEN: usize = 100;

/// One persisted range-query scenario: text, prefix bounds, and the expected
/// ascending-sorted suffix start positions.
///
/// Symbols are single-byte, non-whitespace characters; the scenario file
/// format is whitespace-delimited, so a symbol containing whitespace (or a
/// multi-byte character) cannot round-trip.
///
/// Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    data: String,
    lower_bound: String,
    upper_bound: String,
    expected: Vec<usize>,
}

impl Fixture {
    /// Build a fixture from all four fields.
    ///
    /// `expected` is sorted ascending on entry; supplying duplicates is a
    /// caller error the fixture does not repair.
    ///
    /// # Panics
    ///
    /// Panics if `lower_bound > upper_bound`.
    pub fn new(
        data: impl Into<String>,
        lower_bound: impl Into<String>,
        upper_bound: impl Into<String>,
        mut expected: Vec<usize>,
    ) -> Self {
        let (lower_bound, upper_bound) = (lower_bound.into(), upper_bound.into());
        assert_bound_order(&lower_bound, &upper_bound);
        expected.sort_unstable();
        Self {
            data: data.into(),
            lower_bound,
            upper_bound,
            expected,
        }
    }

    /// Build a fixture by asking `engine` for the expected answer.
    ///
    /// `engine` must have been constructed over `data`. This path *trusts*
    /// the engine it calls; it authors new fixtures, it does not validate an
    /// engine.
    ///
    /// # Panics
    ///
    /// Panics if `lower_bound > upper_bound`.
    pub fn from_engine<E: RangeQuery>(
        engine: &E,
        data: impl Into<String>,
        lower_bound: impl Into<String>,
        upper_bound: impl Into<String>,
    ) -> Self {
        let (lower_bound, upper_bound) = (lower_bound.into(), upper_bound.into());
        assert_bound_order(&lower_bound, &upper_bound);
        let mut expected = engine.range_query(&lower_bound, &upper_bound);
        expected.sort_unstable();
        Self {
            data: data.into(),
            lower_bound,
            upper_bound,
            expected,
        }
    }

    /// Read a fixture from a scenario file.
    ///
    /// Format (whitespace-delimited, each block newline-terminated):
    ///
    /// ```text
    /// <len(data)> <data symbols>
    /// <len(lower_bound)> <lower bound symbols>
    /// <len(upper_bound)> <upper bound symbols>
    /// <N> <N expected positions>
    /// ```
    ///
    /// Every malformed or truncated field is reported as an explicit
    /// `io::Error` so a host program can keep running other scenarios.
    ///
    /// # Panics
    ///
    /// Panics if the stored bounds violate `lower_bound <= upper_bound`;
    /// a fixture file with reversed bounds was authored by broken code.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let raw = fs::read_to_string(path)?;
        let mut scanner = TokenScanner::new(&raw);

        let data = scanner.read_symbol_field("data")?;
        let lower_bound = scanner.read_symbol_field("lower bound")?;
        let upper_bound = scanner.read_symbol_field("upper bound")?;

        let count = scanner.next_usize("expected count")?;
        // Cap the preallocation: the count field is untrusted input.
        let mut expected = Vec::with_capacity(count.min(raw.len()));
        for _ in 0..count {
            expected.push(scanner.next_usize("expected position")?);
        }

        assert_bound_order(&lower_bound, &upper_bound);
        expected.sort_unstable();
        Ok(Self {
            data,
            lower_bound,
            upper_bound,
            expected,
        })
    }

    /// Write the fixture in the scenario file format.
    ///
    /// Write and flush failures are surfaced; there is no best-effort path.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        writeln!(out, "{} {}", self.data.len(), self.data)?;
        writeln!(out, "{} {}", self.lower_bound.len(), self.lower_bound)?;
        writeln!(out, "{} {}", self.upper_bound.len(), self.upper_bound)?;
        write!(out, "{}", self.expected.len())?;
        for position in &self.expected {
            write!(out, " {}", position)?;
        }
        out.flush()
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn lower_bound(&self) -> &str {
        &self.lower_bound
    }

    pub fn upper_bound(&self) -> &str {
        &self.upper_bound
    }

    /// The recorded expected answer, ascending-sorted.
    pub fn expected(&self) -> &[usize] {
        &self.expected
    }

    /// Replay check: does `candidate` equal the recorded answer exactly?
    ///
    /// O(n) ordered comparison. `candidate` must already be ascending-sorted;
    /// the check never re-sorts.
    pub fn check_exact(&self, candidate: &[usize]) -> bool {
        check_sorted_ascending(candidate);
        self.expected.as_slice() == candidate
    }

    /// Ground-truth check: recompute the answer from the lexicographic
    /// suffix order of the text and compare against `candidate`.
    ///
    /// Selects the suffixes *strictly between* the bounds (`> lower_bound`
    /// and `< upper_bound`). Never consults the engine under test or the
    /// recorded expected answer.
    ///
    /// # Panics
    ///
    /// Panics if the text is longer than [`NAIVE_MAX_TEXT_LEN`] symbols.
    pub fn check_naive(&self, candidate: &[usize]) -> bool {
        assert!(
            self.data.len() <= NAIVE_MAX_TEXT_LEN,
            "naive oracle refused: text length {} exceeds the {}-symbol ceiling",
            self.data.len(),
            NAIVE_MAX_TEXT_LEN
        );
        check_sorted_ascending(candidate);

        let text = self.data.as_bytes();
        let lower = self.lower_bound.as_bytes();
        let upper = self.upper_bound.as_bytes();

        // Keyed by (content, position): suffixes of one text always differ
        // in length, so content alone would suffice, but the composite key
        // rules out any position ever being collapsed away.
        let mut suffixes: BTreeSet<(&[u8], usize)> = BTreeSet::new();
        for start in 0..text.len() {
            suffixes.insert((&text[start..], start));
        }

        let mut in_range: Vec<usize> = if lower == upper {
            Vec::new()
        } else {
            suffixes
                .range((Excluded((lower, usize::MAX)), Excluded((upper, 0))))
                .map(|&(_, start)| start)
                .collect()
        };
        in_range.sort_unstable();

        in_range.as_slice() == candidate
    }
}

fn assert_bound_order(lower_bound: &str, upper_bound: &str) {
    assert!(
        lower_bound <= upper_bound,
        "fixture bounds out of order: {:?} > {:?}",
        lower_bound,
        upper_bound
    );
}

/// Whitespace-skipping token scanner over scenario file contents.
struct TokenScanner<'a> {
    chars: Peekable<Chars<'a>>,
    input_len: usize,
}

impl<'a> TokenScanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            input_len: input.len(),
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.chars.peek(), Some(c) if c.is_whitespace()) {
            self.chars.next();
        }
    }

    /// Length-prefixed symbol field: an integer count, then exactly that
    /// many symbols with any whitespace between them skipped.
    fn read_symbol_field(&mut self, field: &str) -> io::Result<String> {
        let len = self.next_usize(field)?;
        // Cap the preallocation: the length prefix is untrusted input, and a
        // length the file cannot possibly satisfy must surface as a
        // truncation error, not an allocation failure.
        let mut symbols = String::with_capacity(len.min(self.input_len));
        for _ in 0..len {
            self.skip_whitespace();
            let symbol = self.chars.next().ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("truncated {field} field"),
                )
            })?;
            if !symbol.is_ascii() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("non-ASCII symbol {symbol:?} in {field} field"),
                ));
            }
            symbols.push(symbol);
        }
        Ok(symbols)
    }

    fn next_usize(&mut self, field: &str) -> io::Result<usize> {
        self.skip_whitespace();
        let mut token = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_whitespace() {
                break;
            }
            token.push(c);
            self.chars.next();
        }
        if token.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("missing {field} field"),
            ));
        }
        token.parse().map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("malformed {field} field: {token:?}"),
            )
        })
    }
}
