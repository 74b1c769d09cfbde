//! # lexorank
//!
//! Sortable string keys ("ranks") that let you insert a new item between any
//! two existing ordered items without renumbering the rest of the collection.
//!
//! A rank token looks like `0|hzzzzz:`: a single-digit bucket, a separator,
//! and a base-36 fixed-point number whose integer part is left-padded to six
//! digits. Within one bucket, byte-wise comparison of tokens matches numeric
//! comparison, so the token can be stored in any column that sorts strings.
//!
//! Underneath sits a small arbitrary-precision stack:
//!
//! - **[`NumeralSystem`]**: base, digit alphabet, sign and radix characters
//!   (base 10, 36 and 64 are built in)
//! - **[`BigInt`]**: signed-magnitude integer over a numeral system
//! - **[`Decimal`]**: fixed-point value with [`Decimal::between`], which finds
//!   the shortest value strictly separating two bounds
//! - **[`Bucket`]** and **[`Rank`]**: the sortable token itself
//!
//! ## Examples
//!
//! ```rust
//! use lexorank::{Rank, MAX_RANK, MIN_RANK};
//!
//! let mid = MIN_RANK.between(&MAX_RANK).unwrap();
//! assert_eq!(mid.as_str(), "0|hzzzzz:");
//!
//! let after = mid.next().unwrap();
//! let inserted = mid.between(&after).unwrap();
//! assert!(mid < inserted && inserted < after);
//!
//! let parsed: Rank = inserted.as_str().parse().unwrap();
//! assert_eq!(parsed, inserted);
//! ```
//!
//! All values are immutable and every operation is a pure function of its
//! inputs. Callers sharing an ordered collection must still serialize their
//! own read-neighbours / compute / write sequence.
//!
//! Choosing when a bucket is exhausted and moving items to another one is
//! left to the caller.

pub(crate) mod bucket;
pub(crate) mod decimal;
pub(crate) mod error;
pub(crate) mod integer;
pub(crate) mod numeral;
pub(crate) mod rank;

// Re-export main types and constants
pub use bucket::{Bucket, BUCKET_0, BUCKET_1, BUCKET_2};
pub use decimal::Decimal;
pub use error::{ParseError, ParseResult, RankError, RankResult};
pub use integer::{BigInt, Sign};
pub use numeral::NumeralSystem;
pub use rank::{
    Rank, INTEGER_WIDTH, MAX_RANK, MID_RANK, MIN_RANK, RANK_SYSTEM, SEPARATOR, STEP,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format_roundtrip() {
        for token in ["0|000000:", "0|hzzzzz:", "1|i00001:i", "2|zzzzzz:", "0|0i0000:"] {
            let rank: Rank = token.parse().unwrap();
            assert_eq!(rank.to_string(), token);
        }
    }

    #[test]
    fn test_order_preservation() {
        let tokens = [
            "0|000000:",
            "0|000001:",
            "0|00000a:",
            "0|0i0000:",
            "0|hzzzzz:",
            "0|i00001:",
            "0|i00001:i",
            "0|i00002:",
            "0|zzzzzz:",
        ];

        let ranks: Vec<Rank> = tokens.iter().map(|s| s.parse().unwrap()).collect();

        for i in 1..ranks.len() {
            assert!(
                ranks[i - 1].decimal() < ranks[i].decimal(),
                "Order not preserved: {} < {} failed",
                tokens[i - 1],
                tokens[i]
            );
            assert!(ranks[i - 1] < ranks[i]);
        }
    }

    #[test]
    fn test_sentinels_are_shared() {
        let first: &Rank = &MID_RANK;
        let second: &Rank = &MID_RANK;
        assert!(std::ptr::eq(first, second));
    }
}
