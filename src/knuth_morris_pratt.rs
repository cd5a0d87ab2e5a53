//! Knuth-Morris-Pratt exact string matching.
//!
//! The matcher precomputes the failure function of the pattern: for every
//! prefix, the length of the longest proper prefix that is also a suffix
//! of it (the "LPS" array).
//!
//! ```text
//! pattern:  a a b a a a b
//! lps:      0 1 0 1 2 2 3
//! ```
//!
//! During the scan the text pointer only ever moves forward; on a mismatch
//! the pattern pointer falls back through the failure function instead of
//! re-examining text bytes. The whole search is therefore O(text) with no
//! backtracking, regardless of how repetitive the inputs are.

use std::fmt;

use crate::{Error, Result};

/// A Knuth-Morris-Pratt matcher for a single pattern.
///
/// Construction preprocesses the pattern in O(pattern) time. The matcher
/// is immutable afterwards and can be reused for any number of searches,
/// including from multiple threads.
#[derive(Clone)]
pub struct KnuthMorrisPratt {
    /// The pattern being searched for.
    pattern: Vec<u8>,

    /// `lps[i]` is the length of the longest proper prefix of
    /// `pattern[..=i]` that is also a suffix of it.
    lps: Vec<usize>,
}

impl KnuthMorrisPratt {
    /// Construct a matcher for the given pattern.
    ///
    /// The pattern is matched byte for byte; a `&str` pattern is matched as
    /// its UTF-8 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if the pattern is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let matcher = scour::KnuthMorrisPratt::new("needle")?;
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
        Ok(Self {
            pattern: pattern.to_vec(),
            lps: longest_prefix_suffix(pattern),
        })
    }

    /// Returns the pattern this matcher searches for.
    #[inline]
    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    /// Returns the starting index of the first occurrence of the pattern
    /// in the haystack, or `None` if it does not occur.
    ///
    /// # Examples
    ///
    /// ```
    /// let matcher = scour::KnuthMorrisPratt::new("dolor")?;
    /// assert_eq!(matcher.find("lorem ipsum dolor"), Some(12));
    /// assert_eq!(matcher.find("lorem ipsum"), None);
    /// # Ok::<(), scour::Error>(())
    /// ```
    pub fn find<T>(&self, haystack: T) -> Option<usize>
    where
        T: AsRef<[u8]>,
    {
        let haystack = haystack.as_ref();
        let n = haystack.len();
        let m = self.pattern.len();

        let mut i = 0;
        let mut j = 0;
        while i < n {
            if haystack[i] == self.pattern[j] {
                i += 1;
                j += 1;
                if j == m {
                    return Some(i - j);
                }
            } else if j > 0 {
                j = self.lps[j - 1];
            } else {
                i += 1;
            }
        }
        None
    }

    /// Search the haystack for every occurrence of the pattern.
    ///
    /// Occurrences are reported in ascending order and include overlapping
    /// ones: after a full match the scan continues through the failure
    /// function as if the next pattern byte had mismatched.
    ///
    /// # Examples
    ///
    /// ```
    /// let matcher = scour::KnuthMorrisPratt::new("aba")?;
    /// assert_eq!(matcher.search("abacabab"), [0, 4]);
    /// # Ok::<(), scour::Error>(())
    /// ```
    pub fn search<T>(&self, haystack: T) -> Vec<usize>
    where
        T: AsRef<[u8]>,
    {
        let haystack = haystack.as_ref();
        let n = haystack.len();
        let m = self.pattern.len();

        let mut positions = Vec::new();
        let mut i = 0;
        let mut j = 0;
        while i < n {
            if haystack[i] == self.pattern[j] {
                i += 1;
                j += 1;
                if j == m {
                    positions.push(i - j);
                    j = self.lps[j - 1];
                }
            } else if j > 0 {
                j = self.lps[j - 1];
            } else {
                i += 1;
            }
        }
        positions
    }
}

impl fmt::Debug for KnuthMorrisPratt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KnuthMorrisPratt")
            .field("pattern", &String::from_utf8_lossy(&self.pattern))
            .finish_non_exhaustive()
    }
}

/// Builds the failure function: `lps[i]` is the length of the longest
/// proper prefix of `pattern[..=i]` that is also a suffix of it.
fn longest_prefix_suffix(pattern: &[u8]) -> Vec<usize> {
    let mut lps = vec![0; pattern.len()];
    let mut len = 0;
    let mut i = 1;
    while i < pattern.len() {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len > 0 {
            len = lps[len - 1];
        } else {
            i += 1;
        }
    }
    lps
}
