use thiserror::Error;

/// Errors that can occur while parsing numbers, buckets and rank tokens
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid digit: {ch:?} is not part of the base-{base} alphabet")]
    InvalidDigit { ch: char, base: u8 },

    #[error("Malformed number: more than one radix point {radix:?}")]
    MalformedNumber { radix: char },

    #[error("Malformed token {0:?}: expected `<bucket>|<decimal>`")]
    MalformedToken(String),

    #[error("Invalid bucket {0:?}: expected a single digit")]
    InvalidBucket(String),

    #[error("Out of range: rank decimal {0} lies outside the rank keyspace")]
    OutOfRange(String),
}

/// Errors that can occur while computing with integers, decimals and ranks
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    #[error("Base mismatch: expected numbers of the same numeral system, got base {left} and base {right}")]
    BaseMismatch { left: u8, right: u8 },

    #[error("Cross-bucket between: {left} and {right} live in different buckets")]
    CrossBucket { left: String, right: String },

    #[error("Identical rank: cannot rank between {0} and itself")]
    IdenticalRank(String),

    #[error("Identical decimal: no value lies strictly between {0} and itself")]
    IdenticalDecimal(String),

    #[error("Out of range: rank decimal {0} lies outside the rank keyspace")]
    OutOfRange(String),
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type for arithmetic and rank operations
pub type RankResult<T> = Result<T, RankError>;
