use crate::bucket::{Bucket, BUCKET_0};
use crate::decimal::Decimal;
use crate::error::{ParseError, ParseResult, RankError, RankResult};
use crate::integer::BigInt;
use crate::numeral::{NumeralSystem, BASE36};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::debug;

/// Numeral system of every rank decimal
pub static RANK_SYSTEM: &NumeralSystem = &BASE36;

/// Minimum width of the integer part of a formatted rank decimal
pub const INTEGER_WIDTH: usize = 6;

/// Whole units added or removed by [`Rank::next`] and [`Rank::prev`]
pub const STEP: u64 = 8;

/// Separator between the bucket and the decimal in a rank token
pub const SEPARATOR: char = '|';

static MIN_DECIMAL: LazyLock<Decimal> = LazyLock::new(|| Decimal::zero(RANK_SYSTEM));

/// `base^INTEGER_WIDTH - 1`, the largest integer that fits the padded width
static MAX_DECIMAL: LazyLock<Decimal> = LazyLock::new(|| {
    let one = BigInt::one(RANK_SYSTEM);
    Decimal::from_integer(one.append_zeros(INTEGER_WIDTH).sub_unchecked(&one))
});

static STEP_DECIMAL: LazyLock<Decimal> =
    LazyLock::new(|| Decimal::from_integer(BigInt::from_u64(STEP, RANK_SYSTEM)));

// Seeds used when stepping off a sentinel, leaving headroom on both sides.
static INITIAL_MIN_DECIMAL: LazyLock<Decimal> = LazyLock::new(|| seed(1));
static INITIAL_MAX_DECIMAL: LazyLock<Decimal> = LazyLock::new(|| seed(RANK_SYSTEM.base() - 2));

/// `digit` followed by `INTEGER_WIDTH - 1` zeros
fn seed(digit: u8) -> Decimal {
    let lead = BigInt::from_u64(u64::from(digit), RANK_SYSTEM);
    Decimal::from_integer(lead.append_zeros(INTEGER_WIDTH - 1))
}

/// Smallest rank: bucket `0`, decimal `0`
pub static MIN_RANK: LazyLock<Rank> =
    LazyLock::new(|| Rank::from_parts(BUCKET_0.clone(), MIN_DECIMAL.clone()));

/// Largest rank: bucket `0`, decimal `zzzzzz`
pub static MAX_RANK: LazyLock<Rank> =
    LazyLock::new(|| Rank::from_parts(BUCKET_0.clone(), MAX_DECIMAL.clone()));

/// Rank halfway between [`MIN_RANK`] and [`MAX_RANK`]
pub static MID_RANK: LazyLock<Rank> = LazyLock::new(|| {
    MIN_RANK
        .between(&MAX_RANK)
        .expect("the minimum and maximum ranks are distinct and share a bucket")
});

/// Sortable rank token: a [`Bucket`] and a [`Decimal`] rendered as
/// `"<bucket>|<padded-decimal>"`.
///
/// Within one bucket, byte-wise comparison of the rendered tokens agrees with
/// numeric comparison of the decimals, so the token can be stored as an
/// opaque sort key. `Eq`, `Ord` and `Hash` all work on the token.
#[derive(Debug, Clone)]
pub struct Rank {
    value: String,
    bucket: Bucket,
    decimal: Decimal,
}

impl Rank {
    /// # Errors
    ///
    /// Returns [`RankError::BaseMismatch`] if `decimal` is not expressed in
    /// [`RANK_SYSTEM`] and [`RankError::OutOfRange`] if it is negative or
    /// above the maximum rank.
    pub fn new(bucket: Bucket, decimal: Decimal) -> RankResult<Self> {
        let (left, right) = (RANK_SYSTEM.base(), decimal.system().base());
        if left != right {
            return Err(RankError::BaseMismatch { left, right });
        }
        if !in_keyspace(&decimal) {
            return Err(RankError::OutOfRange(decimal.to_string()));
        }
        Ok(Self::from_parts(bucket, decimal))
    }

    fn from_parts(bucket: Bucket, decimal: Decimal) -> Self {
        Self {
            value: format!("{bucket}{SEPARATOR}{}", format_decimal(&decimal)),
            bucket,
            decimal,
        }
    }

    /// Parse a `"<bucket>|<decimal>"` token
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedToken`] if the text does not split into
    /// exactly two parts, the bucket / decimal parse error, or
    /// [`ParseError::OutOfRange`] if the decimal is negative or above the
    /// maximum rank.
    pub fn parse(text: &str) -> ParseResult<Self> {
        let mut parts = text.split(SEPARATOR);
        let (Some(bucket), Some(decimal), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ParseError::MalformedToken(text.to_string()));
        };
        let bucket = Bucket::parse(bucket)?;
        let decimal = Decimal::parse(decimal, RANK_SYSTEM)?;
        if !in_keyspace(&decimal) {
            return Err(ParseError::OutOfRange(decimal.to_string()));
        }
        Ok(Self::from_parts(bucket, decimal))
    }

    /// Canonical token text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub const fn bucket(&self) -> &Bucket {
        &self.bucket
    }

    #[must_use]
    pub const fn decimal(&self) -> &Decimal {
        &self.decimal
    }

    #[must_use]
    pub fn is_min(&self) -> bool {
        self.decimal == *MIN_DECIMAL
    }

    #[must_use]
    pub fn is_max(&self) -> bool {
        self.decimal == *MAX_DECIMAL
    }

    /// Rank strictly between `self` and `other`, in either argument order
    ///
    /// # Errors
    ///
    /// Returns [`RankError::CrossBucket`] if the ranks live in different
    /// buckets and [`RankError::IdenticalRank`] if they are equal.
    pub fn between(&self, other: &Self) -> RankResult<Self> {
        if self.bucket != other.bucket {
            return Err(RankError::CrossBucket {
                left: self.value.clone(),
                right: other.value.clone(),
            });
        }
        let decimal = match self.decimal.cmp(&other.decimal) {
            Ordering::Less => self.decimal.between(&other.decimal)?,
            Ordering::Greater => other.decimal.between(&self.decimal)?,
            Ordering::Equal => return Err(RankError::IdenticalRank(self.value.clone())),
        };
        Ok(Self::from_parts(self.bucket.clone(), decimal))
    }

    /// A rank after `self`, [`STEP`] whole units up where there is room
    ///
    /// # Errors
    ///
    /// Returns [`RankError::IdenticalDecimal`] on the maximum rank, which has
    /// no successor.
    pub fn next(&self) -> RankResult<Self> {
        if self.is_min() {
            debug!(rank = %self, "next: stepping off the minimum with the initial seed");
            return Ok(Self::from_parts(
                self.bucket.clone(),
                INITIAL_MIN_DECIMAL.clone(),
            ));
        }
        let ceil = Decimal::from_integer(self.decimal.ceil());
        let mut decimal = ceil.add_unchecked(&STEP_DECIMAL);
        if decimal >= *MAX_DECIMAL {
            debug!(rank = %self, "next: no room for a whole step, bisecting toward the maximum");
            decimal = self.decimal.between(&MAX_DECIMAL)?;
        }
        Ok(Self::from_parts(self.bucket.clone(), decimal))
    }

    /// A rank before `self`, [`STEP`] whole units down where there is room
    ///
    /// # Errors
    ///
    /// Returns [`RankError::IdenticalDecimal`] on the minimum rank, which has
    /// no predecessor.
    pub fn prev(&self) -> RankResult<Self> {
        if self.is_max() {
            debug!(rank = %self, "prev: stepping off the maximum with the initial seed");
            return Ok(Self::from_parts(
                self.bucket.clone(),
                INITIAL_MAX_DECIMAL.clone(),
            ));
        }
        let ceil = Decimal::from_integer(self.decimal.ceil());
        let mut decimal = ceil.sub_unchecked(&STEP_DECIMAL);
        if decimal <= *MIN_DECIMAL {
            debug!(rank = %self, "prev: no room for a whole step, bisecting toward the minimum");
            decimal = MIN_DECIMAL.between(&self.decimal)?;
        }
        Ok(Self::from_parts(self.bucket.clone(), decimal))
    }
}

/// Padded tokens only sort numerically inside `[MIN_DECIMAL, MAX_DECIMAL]`
fn in_keyspace(decimal: &Decimal) -> bool {
    *decimal >= *MIN_DECIMAL && *decimal <= *MAX_DECIMAL
}

/// Left-pad the integer part to [`INTEGER_WIDTH`] and always print a radix point
fn format_decimal(decimal: &Decimal) -> String {
    let formatted = decimal.to_string();
    let radix = RANK_SYSTEM.radix_char();
    let integer_len = formatted.find(radix).unwrap_or(formatted.len());

    let pad = INTEGER_WIDTH.saturating_sub(integer_len);
    let mut out = String::with_capacity(pad + formatted.len() + 1);
    out.extend(std::iter::repeat(RANK_SYSTEM.char_of(0)).take(pad));
    out.push_str(&formatted);
    if integer_len == formatted.len() {
        out.push(radix);
    }
    out
}

impl FromStr for Rank {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl PartialEq for Rank {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Rank {}

impl Hash for Rank {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.as_bytes().cmp(other.value.as_bytes())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rank {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rank {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
