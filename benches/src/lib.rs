#[cfg(test)]
mod tests;

/// Abstraction for a single-pattern searcher.
pub trait Searcher {
    fn name() -> &'static str;
    fn build(pattern: &[u8]) -> Self;
    fn search(&self, haystack: &[u8]) -> Vec<usize>;
}

////////////////////////////////////////////////////////////////////////////////
/// scour Boyer-Moore
////////////////////////////////////////////////////////////////////////////////

pub type BoyerMoore = scour::BoyerMoore;

impl Searcher for BoyerMoore {
    #[inline]
    fn name() -> &'static str {
        "boyer-moore"
    }

    #[inline]
    fn build(pattern: &[u8]) -> Self {
        scour::BoyerMoore::new(pattern).unwrap()
    }

    #[inline]
    fn search(&self, haystack: &[u8]) -> Vec<usize> {
        self.search(haystack).into_positions()
    }
}

////////////////////////////////////////////////////////////////////////////////
/// scour Knuth-Morris-Pratt
////////////////////////////////////////////////////////////////////////////////

pub type KnuthMorrisPratt = scour::KnuthMorrisPratt;

impl Searcher for KnuthMorrisPratt {
    #[inline]
    fn name() -> &'static str {
        "knuth-morris-pratt"
    }

    #[inline]
    fn build(pattern: &[u8]) -> Self {
        scour::KnuthMorrisPratt::new(pattern).unwrap()
    }

    #[inline]
    fn search(&self, haystack: &[u8]) -> Vec<usize> {
        self.search(haystack)
    }
}

////////////////////////////////////////////////////////////////////////////////
/// memchr::memmem
////////////////////////////////////////////////////////////////////////////////

pub struct Memmem(memchr::memmem::Finder<'static>);

impl Searcher for Memmem {
    #[inline]
    fn name() -> &'static str {
        "memmem"
    }

    #[inline]
    fn build(pattern: &[u8]) -> Self {
        Self(memchr::memmem::Finder::new(pattern).into_owned())
    }

    #[inline]
    fn search(&self, haystack: &[u8]) -> Vec<usize> {
        // memmem reports non-overlapping matches, so restart one byte after
        // each match to produce the same positions as the other searchers.
        let mut positions = Vec::new();
        let mut at = 0;
        while let Some(i) = self.0.find(&haystack[at..]) {
            positions.push(at + i);
            at += i + 1;
        }
        positions
    }
}

////////////////////////////////////////////////////////////////////////////////
/// naive
////////////////////////////////////////////////////////////////////////////////

pub struct Naive(Vec<u8>);

impl Searcher for Naive {
    #[inline]
    fn name() -> &'static str {
        "naive"
    }

    #[inline]
    fn build(pattern: &[u8]) -> Self {
        Self(pattern.to_vec())
    }

    #[inline]
    fn search(&self, haystack: &[u8]) -> Vec<usize> {
        haystack
            .windows(self.0.len())
            .enumerate()
            .filter(|(_, window)| *window == &self.0[..])
            .map(|(i, _)| i)
            .collect()
    }
}
