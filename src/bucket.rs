use crate::error::{ParseError, ParseResult};
use crate::integer::BigInt;
use crate::rank::RANK_SYSTEM;
use std::fmt;
use std::sync::LazyLock;

pub static BUCKET_0: LazyLock<Bucket> = LazyLock::new(|| canonical("0"));
pub static BUCKET_1: LazyLock<Bucket> = LazyLock::new(|| canonical("1"));
pub static BUCKET_2: LazyLock<Bucket> = LazyLock::new(|| canonical("2"));

fn canonical(text: &str) -> Bucket {
    Bucket::parse(text).expect("canonical bucket digits are valid base-36 digits")
}

/// Single-digit partition of the rank keyspace.
///
/// Buckets only carry identity and formatting; choosing when to move items
/// to another bucket is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bucket {
    value: BigInt,
}

impl Bucket {
    /// Parse a bucket from exactly one digit of the rank numeral system
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidBucket`] unless `text` is a single
    /// character, and [`ParseError::InvalidDigit`] if that character is not a
    /// digit.
    pub fn parse(text: &str) -> ParseResult<Self> {
        let mut chars = text.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return Err(ParseError::InvalidBucket(text.to_string()));
        };
        let digit = RANK_SYSTEM.digit_of(ch)?;
        Ok(Self {
            value: BigInt::from_u64(u64::from(digit), RANK_SYSTEM),
        })
    }

    /// The three canonical buckets, in order
    #[must_use]
    pub fn all() -> [&'static Self; 3] {
        [&*BUCKET_0, &*BUCKET_1, &*BUCKET_2]
    }

    #[must_use]
    pub const fn value(&self) -> &BigInt {
        &self.value
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
