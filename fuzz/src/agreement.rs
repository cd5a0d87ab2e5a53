#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    pattern: &'a [u8],
    text: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
    let Input { pattern, text } = input;
    if pattern.is_empty() {
        return;
    }

    let bm = scour::BoyerMoore::new(pattern).unwrap();
    let kmp = scour::KnuthMorrisPratt::new(pattern).unwrap();

    let positions = kmp.search(text);
    assert_eq!(bm.search(text).positions(), positions);

    let expected: Vec<usize> = text
        .windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(positions, expected);

    assert_eq!(bm.find(text), positions.first().copied());
    assert_eq!(kmp.find(text), positions.first().copied());
});
