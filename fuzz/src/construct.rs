#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    match scour::BoyerMoore::new(data) {
        Ok(matcher) => {
            assert!(!data.is_empty());
            assert_eq!(matcher.pattern(), data);
            assert_eq!(matcher.preprocessing_cost(), 256 + data.len() as u64);
            // A matcher always finds its own pattern.
            assert_eq!(matcher.find(data), Some(0));
        }
        Err(_) => assert!(data.is_empty()),
    }

    match scour::KnuthMorrisPratt::new(data) {
        Ok(matcher) => {
            assert_eq!(matcher.pattern(), data);
            assert_eq!(matcher.find(data), Some(0));
        }
        Err(_) => assert!(data.is_empty()),
    }
});
