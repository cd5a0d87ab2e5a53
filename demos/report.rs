//! Prints a scan as JSON, ready for piping into other tools.

use scour::BoyerMoore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matcher = BoyerMoore::new("TCCTATTCTT")?;
    let scan = matcher.search("TTATAGATCTCGTATTCTTTTATAGATCTCCTATTCTT");
    println!("{}", serde_json::to_string_pretty(&scan)?);
    Ok(())
}
