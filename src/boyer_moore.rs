//! Boyer-Moore exact string matching using the bad-character rule.
//!
//! The matcher precomputes, for every byte value, the rightmost index at
//! which that byte occurs in the pattern. The search then slides a window
//! over the text and compares the pattern to it right to left. On a
//! mismatch the window jumps forward so that the rightmost occurrence of
//! the offending text byte inside the pattern lines up with it, or one past
//! it when the byte does not occur in the pattern at all:
//!
//! ```text
//! text:     A B C X A B C D ..      mismatch at offset 3: X is not in the
//! pattern:  A B C D                 pattern, so the whole window is
//!                   A B C D         skipped, skip = 3 - (-1) = 4
//! ```
//!
//! For texts whose bytes are mostly absent from the pattern this examines
//! far fewer than `text.len()` bytes. The worst case remains
//! O(pattern * text), which the operation counts make easy to observe.

use std::cmp::max;
use std::fmt;

use crate::{Error, Result};

/// The number of distinct byte values a pattern can contain.
const ALPHABET: usize = 256;

/// A Boyer-Moore matcher for a single pattern.
///
/// Construction preprocesses the pattern in O(alphabet + pattern) time.
/// The matcher is immutable afterwards and can be reused for any number of
/// searches, including from multiple threads.
#[derive(Clone)]
pub struct BoyerMoore {
    /// The pattern being searched for.
    pattern: Vec<u8>,

    /// The rightmost index in the pattern at which each byte occurs, or -1
    /// for bytes that do not occur at all.
    right: [isize; ALPHABET],

    /// Operations spent filling `right`: one per table slot plus one per
    /// pattern byte.
    preprocessing_cost: u64,
}

/// The outcome of [`BoyerMoore::search`]: every match position together
/// with the operation counts for both phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan {
    positions: Vec<usize>,
    preprocessing_cost: u64,
    search_cost: u64,
}

impl BoyerMoore {
    /// Construct a matcher for the given pattern.
    ///
    /// The pattern is matched byte for byte; a `&str` pattern is matched as
    /// its UTF-8 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if the pattern is empty. The
    /// bad-character table and the skip rule both assume at least one
    /// pattern byte.
    ///
    /// # Examples
    ///
    /// ```
    /// let matcher = scour::BoyerMoore::new("needle")?;
    /// assert_eq!(matcher.pattern(), b"needle");
    /// # Ok::<(), scour::Error>(())
    /// ```
    pub fn new<P>(pattern: P) -> Result<Self>
    where
        P: AsRef<[u8]>,
    {
        let pattern = pattern.as_ref();
        if pattern.is_empty() {
            return Err(Error::invalid_pattern("must not be empty"));
        }

        let mut right = [-1isize; ALPHABET];
        for (j, &byte) in pattern.iter().enumerate() {
            // Later occurrences overwrite earlier ones; the skip rule
            // relies on the rightmost index winning.
            right[byte as usize] = j as isize;
        }

        Ok(Self {
            pattern: pattern.to_vec(),
            right,
            preprocessing_cost: (ALPHABET + pattern.len()) as u64,
        })
    }

    /// Returns the pattern this matcher searches for.
    #[inline]
    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    /// Returns the number of operations spent preprocessing the pattern.
    ///
    /// This count is fixed at construction time and is also included in
    /// every [`Scan`].
    #[inline]
    pub fn preprocessing_cost(&self) -> u64 {
        self.preprocessing_cost
    }

    /// Returns the starting index of the first occurrence of the pattern
    /// in the haystack, or `None` if it does not occur.
    ///
    /// # Examples
    ///
    /// ```
    /// let matcher = scour::BoyerMoore::new("ipsum")?;
    /// assert_eq!(matcher.find("lorem ipsum"), Some(6));
    /// assert_eq!(matcher.find("lorem lorem"), None);
    /// # Ok::<(), scour::Error>(())
    /// ```
    pub fn find<T>(&self, haystack: T) -> Option<usize>
    where
        T: AsRef<[u8]>,
    {
        let haystack = haystack.as_ref();
        let n = haystack.len();
        let m = self.pattern.len();
        if n < m {
            return None;
        }

        let mut i = 0;
        while i <= n - m {
            let mut skip = 0;
            for j in (0..m).rev() {
                if self.pattern[j] != haystack[i + j] {
                    skip = self.skip_for(j, haystack[i + j]);
                    break;
                }
            }
            if skip == 0 {
                return Some(i);
            }
            i += skip;
        }
        None
    }

    /// Search the haystack for every occurrence of the pattern.
    ///
    /// Occurrences are reported in ascending order and include overlapping
    /// ones: after a full match the window advances by a single byte, not
    /// by the pattern length. The returned [`Scan`] also carries the
    /// operation counts: one per byte comparison and one per skip
    /// computation during the search, plus the fixed preprocessing count.
    ///
    /// A haystack shorter than the pattern (including the empty haystack)
    /// yields no positions and a search cost of zero.
    ///
    /// # Examples
    ///
    /// ```
    /// let matcher = scour::BoyerMoore::new("aba")?;
    /// let scan = matcher.search("abacabab");
    /// assert_eq!(scan.positions(), [0, 4]);
    /// # Ok::<(), scour::Error>(())
    /// ```
    pub fn search<T>(&self, haystack: T) -> Scan
    where
        T: AsRef<[u8]>,
    {
        let haystack = haystack.as_ref();
        let n = haystack.len();
        let m = self.pattern.len();

        let mut scan = Scan {
            positions: Vec::new(),
            preprocessing_cost: self.preprocessing_cost,
            search_cost: 0,
        };

        // Not even one window fits.
        if n < m {
            return scan;
        }

        let mut i = 0;
        while i <= n - m {
            let mut skip = 0;
            for j in (0..m).rev() {
                scan.search_cost += 1;
                if self.pattern[j] != haystack[i + j] {
                    skip = self.skip_for(j, haystack[i + j]);
                    scan.search_cost += 1;
                    break;
                }
            }
            if skip == 0 {
                scan.positions.push(i);
                skip = 1;
            }
            i += skip;
        }

        scan
    }

    /// The bad-character skip for a mismatch at pattern offset `j` against
    /// text byte `c`. Always at least 1 so the window cannot move backward
    /// when the rightmost occurrence of `c` lies at or beyond `j`.
    #[inline]
    fn skip_for(&self, j: usize, c: u8) -> usize {
        max(1, j as isize - self.right[c as usize]) as usize
    }
}

impl fmt::Debug for BoyerMoore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoyerMoore")
            .field("pattern", &String::from_utf8_lossy(&self.pattern))
            .finish_non_exhaustive()
    }
}

impl Scan {
    /// The starting index of every occurrence, in ascending order.
    #[inline]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Consumes the scan and returns just the positions.
    #[inline]
    pub fn into_positions(self) -> Vec<usize> {
        self.positions
    }

    /// Operations spent preprocessing the pattern when the matcher was
    /// constructed.
    #[inline]
    pub fn preprocessing_cost(&self) -> u64 {
        self.preprocessing_cost
    }

    /// Operations spent searching: one per byte comparison plus one per
    /// skip computation.
    #[inline]
    pub fn search_cost(&self) -> u64 {
        self.search_cost
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Scan {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Scan", 3)?;
        s.serialize_field("positions", &self.positions)?;
        s.serialize_field("preprocessing_cost", &self.preprocessing_cost)?;
        s.serialize_field("search_cost", &self.search_cost)?;
        s.end()
    }
}
