//! Differential testing harness for suffix-array range-query engines.
//!
//! Given a text and a lexicographic prefix range `[lower, upper)`, a
//! range-query engine is expected to report every suffix start position
//! whose suffix falls inside the range. This crate judges such engines: it
//! stores verification scenarios as fixtures and validates a candidate
//! answer two independent ways, by exact replay of a recorded answer and by
//! brute-force recomputation from the suffix order of the text itself.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌───────────────┐
//! │  bitrange.rs │◀────│  engine.rs   │     │  fixture.rs   │
//! │ (extract_    │     │ (RangeQuery, │────▶│ (Fixture,     │
//! │  range_      │     │  Reference-  │     │  check_exact, │
//! │  indices)    │     │  Engine)     │     │  check_naive) │
//! └──────────────┘     └──────────────┘     └───────────────┘
//!        │                    │                     │
//!        ▼                    ▼                     ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                      contracts.rs                       │
//! │   (debug-build checks for caller-side preconditions)    │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The extractor is a standalone utility: any engine that encodes "suffix
//! `i` sorts below bound X" as one bit per suffix can turn its two bound
//! encodings into concrete in-range positions with a single XOR. It has no
//! dependency on the fixture machinery.
//!
//! # Usage
//!
//! ```
//! use sarq::{Fixture, RangeQuery, ReferenceEngine};
//!
//! let engine = ReferenceEngine::new("banana");
//! let fixture = Fixture::from_engine(&engine, "banana", "ba", "bb");
//!
//! let candidate = engine.range_query("ba", "bb");
//! assert!(fixture.check_exact(&candidate));
//! assert!(fixture.check_naive(&candidate));
//! ```

mod bitrange;
pub mod contracts;
mod engine;
mod fixture;

pub use bitrange::extract_range_indices;
pub use engine::{RangeQuery, ReferenceEngine};
pub use fixture::{Fixture, NAIVE_MAX_TEXT_LEN};
