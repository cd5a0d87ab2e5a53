//! Runs both matchers over the same sample and prints the positions,
//! occurrence counts, operation counts, and wall-clock time of each.

use std::time::Instant;

use scour::{BoyerMoore, KnuthMorrisPratt};

const PATTERN: &str = "TCCTATTCTT";
const TEXT: &str = "TTATAGATCTCGTATTCTTTTATAGATCTCCTATTCTT";

fn main() -> scour::Result<()> {
    let matcher = BoyerMoore::new(PATTERN)?;
    let start = Instant::now();
    let scan = matcher.search(TEXT);
    let elapsed = start.elapsed();

    println!("Boyer-Moore:");
    println!("Pattern: {PATTERN}");
    println!("Text: {TEXT}");
    println!("Positions: {:?}", scan.positions());
    println!("Occurrences: {}", scan.positions().len());
    println!("Preprocessing cost: {} operations", scan.preprocessing_cost());
    println!("Search cost: {} operations", scan.search_cost());
    println!("Time taken: {elapsed:?}");
    println!();

    let matcher = KnuthMorrisPratt::new(PATTERN)?;
    let start = Instant::now();
    let positions = matcher.search(TEXT);
    let elapsed = start.elapsed();

    println!("Knuth-Morris-Pratt:");
    println!("Pattern: {PATTERN}");
    println!("Text: {TEXT}");
    println!("Positions: {positions:?}");
    println!("Occurrences: {}", positions.len());
    println!("Time taken: {elapsed:?}");

    Ok(())
}
