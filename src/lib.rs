//! Classic exact string matching with visible costs.
//!
//! This crate provides two single-pattern matchers over bytes:
//!
//! - [`BoyerMoore`] compares each window right to left and uses the
//!   bad-character rule to skip ahead, often examining only a fraction of
//!   the text.
//! - [`KnuthMorrisPratt`] scans the text once, left to right, never moving
//!   backward.
//!
//! Both report every occurrence, including overlapping ones, in ascending
//! order, and always agree on the positions; they differ only in how much
//! work they do to find them. Boyer-Moore makes that work observable: its
//! [`search`][BoyerMoore::search] returns a [`Scan`] carrying exact
//! operation counts alongside the positions.
//!
//! # Features
//!
//! ### Matching
//!
//! - Single-pattern exact search over arbitrary bytes
//! - Anything that implements [`AsRef`]`<[u8]>` works as a pattern or
//!   haystack; `&str` inputs are matched as UTF-8 bytes and positions are
//!   byte offsets
//! - Overlapping occurrences are found: after a full match the scan
//!   advances by one byte, not by the pattern length
//! - Matchers are immutable after construction and freely shareable across
//!   threads
//!
//! ### Instrumentation
//!
//! - [`Scan`] records a search cost of one operation per byte comparison
//!   plus one per skip computation, and a preprocessing cost of one
//!   operation per bad-character table slot plus one per pattern byte
//! - Counts are returned by value with each search; nothing accumulates on
//!   the matcher, so results are reproducible call after call
//! - [`Scan`] is serializable with [`serde`] for offline analysis
//!
//! # Getting started
//!
//! Your entry point is one of the two matcher types. Construction validates
//! the pattern and preprocesses it; the matcher can then be reused for any
//! number of searches.
//!
//! ```
//! let matcher = scour::BoyerMoore::new("TTA")?;
//! # Ok::<(), scour::Error>(())
//! ```
//!
//! [`find`][BoyerMoore::find] returns the first occurrence.
//!
//! ```
//! # let matcher = scour::BoyerMoore::new("TTA")?;
//! assert_eq!(matcher.find("GTTATTAG"), Some(1));
//! # Ok::<(), scour::Error>(())
//! ```
//!
//! [`search`][BoyerMoore::search] returns every occurrence together with
//! the operation counts.
//!
//! ```
//! # let matcher = scour::BoyerMoore::new("TTA")?;
//! let scan = matcher.search("GTTATTAG");
//! assert_eq!(scan.positions(), [1, 4]);
//! assert_eq!(scan.preprocessing_cost(), 259);
//! # Ok::<(), scour::Error>(())
//! ```
//!
//! [`KnuthMorrisPratt`] has the same construction and search surface but
//! returns the positions directly.
//!
//! ```
//! let matcher = scour::KnuthMorrisPratt::new("TTA")?;
//! assert_eq!(matcher.search("GTTATTAG"), [1, 4]);
//! # Ok::<(), scour::Error>(())
//! ```
//!
//! # Examples
//!
//! ### Measure how text shape changes the work
//!
//! The operation counts make Boyer-Moore's behavior easy to see: text made
//! of bytes absent from the pattern is skipped a whole window at a time.
//!
//! ```
//! let matcher = scour::BoyerMoore::new("needle")?;
//!
//! let absent = matcher.search("zzzzzzzzzzzzzzzzzz");
//! let present = matcher.search("needleneedleneedle");
//!
//! assert!(absent.search_cost() < present.search_cost());
//! # Ok::<(), scour::Error>(())
//! ```
//!
//! ### Export a scan report
//!
//! With the default `serde` feature enabled a [`Scan`] can be serialized
//! for offline analysis.
//!
//! ```
//! let matcher = scour::BoyerMoore::new("GTA")?;
//! let scan = matcher.search("TTATAGGTATT");
//! let json = serde_json::to_string(&scan).unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"positions":[6],"preprocessing_cost":259,"search_cost":21}"#
//! );
//! # Ok::<(), scour::Error>(())
//! ```

mod boyer_moore;
mod error;
mod knuth_morris_pratt;

pub use crate::boyer_moore::{BoyerMoore, Scan};
pub use crate::error::Error;
pub use crate::knuth_morris_pratt::KnuthMorrisPratt;

/// A type alias for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;
