use lexorank::{BigInt, Decimal, NumeralSystem, ParseError, Rank, RankError, MAX_RANK, MIN_RANK};

fn rank(text: &str) -> Rank {
    text.parse().unwrap()
}

// =============================================================================
// Between on the sentinels and their neighbours
// =============================================================================

#[test]
fn test_between_min_and_max() {
    let left = rank(MIN_RANK.as_str());
    let right = rank(MAX_RANK.as_str());
    assert_eq!(left.between(&right).unwrap().as_str(), "0|hzzzzz:");
}

#[test]
fn test_between_min_and_its_next() {
    let min_next = MIN_RANK.next().unwrap();
    let got = rank(MIN_RANK.as_str()).between(&rank(min_next.as_str())).unwrap();
    assert_eq!(got.as_str(), "0|0i0000:");
}

#[test]
fn test_between_max_and_its_prev() {
    let max_prev = MAX_RANK.prev().unwrap();
    let got = rank(MAX_RANK.as_str()).between(&rank(max_prev.as_str())).unwrap();
    assert_eq!(got.as_str(), "0|yzzzzz:");
}

#[test]
fn test_between_integer_result() {
    let got = rank("0|hzzzzz:").between(&rank("0|i0000f:")).unwrap();
    assert_eq!(got.as_str(), "0|i00007:");
}

#[test]
fn test_between_fractional_result() {
    let got = rank("0|i00001:").between(&rank("0|i00002:")).unwrap();
    assert_eq!(got.as_str(), "0|i00001:i");
}

// =============================================================================
// Next chain
// =============================================================================

#[test]
fn test_next_chain() {
    let chain = [
        "0|hzzzzz:",
        "0|i00007:",
        "0|i0000f:",
        "0|i0000n:",
        "0|i0000v:",
        "0|i00013:",
        "0|i0001b:",
        "0|i0001j:",
        "0|i0001r:",
        "0|i0001z:",
    ];
    for pair in chain.windows(2) {
        let got = rank(pair[0]).next().unwrap();
        assert_eq!(got.as_str(), pair[1], "next of {}", pair[0]);
    }
}

#[test]
fn test_prev_chain_mirrors_next() {
    let mut current = rank("0|i0001z:");
    for expected in ["0|i0001r:", "0|i0001j:", "0|i0001b:", "0|i00013:"] {
        current = current.prev().unwrap();
        assert_eq!(current.as_str(), expected);
    }
}

// =============================================================================
// Arithmetic scenarios in base 36
// =============================================================================

#[test]
fn test_integer_add_with_carry() {
    let system = NumeralSystem::base36();
    let value = BigInt::parse("zzzz", system).unwrap();
    assert_eq!(value.add(&value).unwrap().to_string(), "1zzzy");
}

#[test]
fn test_decimal_multiply() {
    let system = NumeralSystem::base36();
    let two = Decimal::parse("2", system).unwrap();
    let pi = Decimal::parse("3:14159", system).unwrap();
    assert_eq!(two.multiply(&pi).unwrap().to_string(), "6:282ai");
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_errors_are_returned_not_raised() {
    assert_eq!(
        "0|hz:zz:".parse::<Rank>(),
        Err(ParseError::MalformedNumber { radix: ':' })
    );
    assert!(matches!(
        "no separator".parse::<Rank>(),
        Err(ParseError::MalformedToken(_))
    ));
    assert!(matches!(
        rank("0|i00000:").between(&rank("1|i00000:")),
        Err(RankError::CrossBucket { .. })
    ));
    assert!(matches!(
        rank("1|i00000:").between(&rank("1|i00000:")),
        Err(RankError::IdenticalRank(_))
    ));
}

// =============================================================================
// Insertion workload
// =============================================================================

#[test]
fn test_insert_at_front_many_times() {
    // Every new item goes before the current first item.
    let mut first = MIN_RANK.next().unwrap();
    let mut tokens = vec![first.as_str().to_string()];
    for _ in 0..100 {
        let inserted = MIN_RANK.between(&first).unwrap();
        assert!(*MIN_RANK < inserted && inserted < first);
        tokens.push(inserted.as_str().to_string());
        first = inserted;
    }

    let mut sorted = tokens.clone();
    sorted.sort();
    sorted.reverse();
    assert_eq!(tokens, sorted);
}

#[test]
fn test_sorting_tokens_sorts_ranks() {
    let mut ranks = Vec::new();
    let mut current = MIN_RANK.next().unwrap();
    for _ in 0..20 {
        ranks.push(current.clone());
        current = current.next().unwrap();
    }
    // Interleave bisections between every neighbouring pair.
    let mut all = ranks.clone();
    for pair in ranks.windows(2) {
        all.push(pair[0].between(&pair[1]).unwrap());
    }

    let mut by_token: Vec<String> = all.iter().map(|r| r.as_str().to_string()).collect();
    by_token.sort();
    all.sort_by(|a, b| a.decimal().cmp(b.decimal()));
    let by_value: Vec<String> = all.iter().map(|r| r.as_str().to_string()).collect();
    assert_eq!(by_token, by_value);
}
