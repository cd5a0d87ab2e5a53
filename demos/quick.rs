fn main() -> scour::Result<()> {
    let matcher = scour::BoyerMoore::new("TTA")?;
    let scan = matcher.search("GTTATTAG");
    println!("positions: {:?}", scan.positions());
    println!("search cost: {} operations", scan.search_cost());
    Ok(())
}
