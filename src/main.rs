use lexorank::{Decimal, NumeralSystem, Rank, RankResult, MAX_RANK, MID_RANK, MIN_RANK};

fn main() -> RankResult<()> {
    println!("=== Sentinels ===\n");
    println!("  min: {}", *MIN_RANK);
    println!("  mid: {}", *MID_RANK);
    println!("  max: {}", *MAX_RANK);

    // Appending items one after another
    println!("\n=== Appending with next() ===\n");
    let mut rank: Rank = MID_RANK.clone();
    for _ in 0..5 {
        let next = rank.next()?;
        println!("  {rank} -> {next}");
        rank = next;
    }

    // Inserting repeatedly at the same spot
    println!("\n=== Repeated insertion after the midpoint ===\n");
    let lower = MID_RANK.clone();
    let mut upper = lower.next()?;
    for _ in 0..8 {
        let inserted = lower.between(&upper)?;
        println!("  between {lower} and {upper} -> {inserted}");
        upper = inserted;
    }

    // Byte-wise order matches rank order
    println!("\n=== Order Preservation Demo ===\n");
    let mut ranks = vec![MAX_RANK.clone(), MID_RANK.clone(), MIN_RANK.clone(), upper];
    ranks.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    for pair in ranks.windows(2) {
        let (first, second) = (&pair[0], &pair[1]);
        if first.decimal() < second.decimal() {
            println!("  ✓ {first} < {second}");
        } else {
            println!("  ✗ {first} >= {second} (order NOT preserved!)");
        }
    }

    // The arithmetic works in any of the built-in systems
    println!("\n=== Decimal between in base 10 ===\n");
    let system = NumeralSystem::base10();
    for (a, b) in [("1", "2"), ("1.15", "1.27"), ("0.1", "0.100001")] {
        match (Decimal::parse(a, system), Decimal::parse(b, system)) {
            (Ok(a), Ok(b)) => println!("  between({a}, {b}) = {}", a.between(&b)?),
            (Err(e), _) | (_, Err(e)) => println!("  Error parsing: {e}"),
        }
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
