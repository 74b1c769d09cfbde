//! Arbitrary-precision signed-magnitude integers over a [`NumeralSystem`].

use crate::error::{ParseResult, RankError, RankResult};
use crate::numeral::NumeralSystem;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Sign of a [`BigInt`]; zero has its own sign so it has exactly one representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Zero => Self::Zero,
            Self::Positive => Self::Negative,
        }
    }

    const fn product(self, other: Self) -> Self {
        match (self, other) {
            (Self::Zero, _) | (_, Self::Zero) => Self::Zero,
            (Self::Negative, Self::Negative) | (Self::Positive, Self::Positive) => Self::Positive,
            _ => Self::Negative,
        }
    }
}

/// An immutable arbitrary-precision integer.
///
/// The magnitude is stored least-significant digit first, one digit per byte,
/// with no high-order zero digits. Zero is the single digit `0` with
/// [`Sign::Zero`]. Every operation returns a new value with its own buffer.
#[derive(Debug, Clone)]
pub struct BigInt {
    system: &'static NumeralSystem,
    sign: Sign,
    mag: Vec<u8>,
}

impl BigInt {
    #[must_use]
    pub fn zero(system: &'static NumeralSystem) -> Self {
        Self {
            system,
            sign: Sign::Zero,
            mag: vec![0],
        }
    }

    #[must_use]
    pub fn one(system: &'static NumeralSystem) -> Self {
        Self {
            system,
            sign: Sign::Positive,
            mag: vec![1],
        }
    }

    /// Convert a machine integer into `system`'s base
    #[must_use]
    pub fn from_u64(mut value: u64, system: &'static NumeralSystem) -> Self {
        let base = u64::from(system.base());
        let mut mag = Vec::new();
        while value > 0 {
            #[allow(clippy::cast_possible_truncation)]
            mag.push((value % base) as u8);
            value /= base;
        }
        Self::from_parts(system, Sign::Positive, mag)
    }

    /// Build a normalized value, stripping high-order zero digits
    pub(crate) fn from_parts(system: &'static NumeralSystem, sign: Sign, mut mag: Vec<u8>) -> Self {
        let len = mag.iter().rposition(|&d| d != 0).map_or(0, |p| p + 1);
        if len == 0 || sign == Sign::Zero {
            return Self::zero(system);
        }
        mag.truncate(len);
        Self { system, sign, mag }
    }

    /// Parse an optionally signed digit string.
    ///
    /// A missing sign means positive. An empty digit string parses as zero.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidDigit`](crate::ParseError::InvalidDigit)
    /// for any character outside `system`'s alphabet.
    pub fn parse(text: &str, system: &'static NumeralSystem) -> ParseResult<Self> {
        let (sign, digits) = match text.chars().next() {
            Some(c) if c == system.positive_char() => (Sign::Positive, &text[c.len_utf8()..]),
            Some(c) if c == system.negative_char() => (Sign::Negative, &text[c.len_utf8()..]),
            _ => (Sign::Positive, text),
        };

        let mag = digits
            .chars()
            .rev()
            .map(|ch| system.digit_of(ch))
            .collect::<ParseResult<Vec<u8>>>()?;

        Ok(Self::from_parts(system, sign, mag))
    }

    #[must_use]
    pub const fn system(&self) -> &'static NumeralSystem {
        self.system
    }

    #[must_use]
    pub const fn sign(&self) -> Sign {
        self.sign
    }

    /// Magnitude digits, least-significant first
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.mag
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    /// True for both `1` and `-1`
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.mag == [1]
    }

    #[must_use]
    pub fn negate(&self) -> Self {
        Self {
            system: self.system,
            sign: self.sign.negate(),
            mag: self.mag.clone(),
        }
    }

    /// Multiply by `base^places`; a negative count shifts right instead
    #[must_use]
    pub fn shift_left(&self, places: isize) -> Self {
        if places < 0 {
            self.drop_digits(places.unsigned_abs())
        } else {
            self.append_zeros(places.unsigned_abs())
        }
    }

    /// Divide by `base^places`, truncating the magnitude; a negative count shifts left instead
    #[must_use]
    pub fn shift_right(&self, places: isize) -> Self {
        if places < 0 {
            self.append_zeros(places.unsigned_abs())
        } else {
            self.drop_digits(places.unsigned_abs())
        }
    }

    pub(crate) fn append_zeros(&self, places: usize) -> Self {
        if places == 0 || self.is_zero() {
            return self.clone();
        }
        let mut mag = vec![0; places + self.mag.len()];
        mag[places..].copy_from_slice(&self.mag);
        Self::from_parts(self.system, self.sign, mag)
    }

    pub(crate) fn drop_digits(&self, places: usize) -> Self {
        if places == 0 {
            return self.clone();
        }
        if places >= self.mag.len() {
            return Self::zero(self.system);
        }
        Self::from_parts(self.system, self.sign, self.mag[places..].to_vec())
    }

    /// # Errors
    ///
    /// Returns [`RankError::BaseMismatch`] if the operands use different bases.
    pub fn add(&self, other: &Self) -> RankResult<Self> {
        self.check_base(other)?;
        Ok(self.add_unchecked(other))
    }

    /// # Errors
    ///
    /// Returns [`RankError::BaseMismatch`] if the operands use different bases.
    pub fn sub(&self, other: &Self) -> RankResult<Self> {
        self.check_base(other)?;
        Ok(self.sub_unchecked(other))
    }

    /// # Errors
    ///
    /// Returns [`RankError::BaseMismatch`] if the operands use different bases.
    pub fn multiply(&self, other: &Self) -> RankResult<Self> {
        self.check_base(other)?;
        Ok(self.multiply_unchecked(other))
    }

    pub(crate) fn check_base(&self, other: &Self) -> RankResult<()> {
        let (left, right) = (self.system.base(), other.system.base());
        if left == right {
            Ok(())
        } else {
            Err(RankError::BaseMismatch { left, right })
        }
    }

    /// Addition for operands already known to share a base
    pub(crate) fn add_unchecked(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        let base = self.system.base();
        if self.sign == other.sign {
            return Self::from_parts(self.system, self.sign, add_mag(&self.mag, &other.mag, base));
        }
        // Opposite signs: the larger magnitude decides the sign.
        match cmp_mag(&self.mag, &other.mag) {
            Ordering::Equal => Self::zero(self.system),
            Ordering::Greater => {
                Self::from_parts(self.system, self.sign, sub_mag(&self.mag, &other.mag, base))
            }
            Ordering::Less => {
                Self::from_parts(self.system, other.sign, sub_mag(&other.mag, &self.mag, base))
            }
        }
    }

    pub(crate) fn sub_unchecked(&self, other: &Self) -> Self {
        self.add_unchecked(&other.negate())
    }

    pub(crate) fn multiply_unchecked(&self, other: &Self) -> Self {
        let sign = self.sign.product(other.sign);
        if sign == Sign::Zero {
            return Self::zero(self.system);
        }
        if self.is_one() {
            return Self::from_parts(self.system, sign, other.mag.clone());
        }
        if other.is_one() {
            return Self::from_parts(self.system, sign, self.mag.clone());
        }
        Self::from_parts(
            self.system,
            sign,
            multiply_mag(&self.mag, &other.mag, self.system.base()),
        )
    }
}

/// Schoolbook addition with carry; the result may be one digit longer than the longer operand
fn add_mag(left: &[u8], right: &[u8], base: u8) -> Vec<u8> {
    let len = left.len().max(right.len());
    let mut result = Vec::with_capacity(len + 1);
    let mut carry = 0u8;
    for i in 0..len {
        let l = left.get(i).copied().unwrap_or(0);
        let r = right.get(i).copied().unwrap_or(0);
        // Digits are < 64, so the sum fits in a u8.
        let mut sum = l + r + carry;
        carry = 0;
        if sum >= base {
            sum -= base;
            carry = 1;
        }
        result.push(sum);
    }
    if carry > 0 {
        result.push(carry);
    }
    result
}

/// Borrow subtraction; requires `larger >= smaller` in magnitude
fn sub_mag(larger: &[u8], smaller: &[u8], base: u8) -> Vec<u8> {
    let mut result = Vec::with_capacity(larger.len());
    let mut borrow = 0u8;
    for (i, &l) in larger.iter().enumerate() {
        let r = smaller.get(i).copied().unwrap_or(0) + borrow;
        if l >= r {
            result.push(l - r);
            borrow = 0;
        } else {
            result.push(l + base - r);
            borrow = 1;
        }
    }
    debug_assert_eq!(borrow, 0, "sub_mag requires larger >= smaller");
    result
}

fn multiply_mag(left: &[u8], right: &[u8], base: u8) -> Vec<u8> {
    let base = u32::from(base);
    let mut result = vec![0u8; left.len() + right.len()];
    for (i, &l) in left.iter().enumerate() {
        let mut carry = 0u32;
        for (j, &r) in right.iter().enumerate() {
            let cur = u32::from(result[i + j]) + u32::from(l) * u32::from(r) + carry;
            #[allow(clippy::cast_possible_truncation)]
            {
                result[i + j] = (cur % base) as u8;
            }
            carry = cur / base;
        }
        let mut k = i + right.len();
        while carry > 0 {
            let cur = u32::from(result[k]) + carry;
            #[allow(clippy::cast_possible_truncation)]
            {
                result[k] = (cur % base) as u8;
            }
            carry = cur / base;
            k += 1;
        }
    }
    result
}

fn cmp_mag(left: &[u8], right: &[u8]) -> Ordering {
    left.len()
        .cmp(&right.len())
        .then_with(|| left.iter().rev().cmp(right.iter().rev()))
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Negative {
            write!(f, "{}", self.system.negative_char())?;
        }
        for &digit in self.mag.iter().rev() {
            write!(f, "{}", self.system.char_of(digit))?;
        }
        Ok(())
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.system.base() == other.system.base() && self.sign == other.sign && self.mag == other.mag
    }
}

impl Eq for BigInt {}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.system.base().hash(state);
        self.sign.hash(state);
        self.mag.hash(state);
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    /// Numeric order; values from different bases that happen to share digits
    /// are ordered by base so that `Ord` stays consistent with `Eq`.
    fn cmp(&self, other: &Self) -> Ordering {
        let by_value = self.sign.cmp(&other.sign).then_with(|| match self.sign {
            Sign::Zero => Ordering::Equal,
            Sign::Positive => cmp_mag(&self.mag, &other.mag),
            Sign::Negative => cmp_mag(&other.mag, &self.mag),
        });
        by_value.then_with(|| self.system.base().cmp(&other.system.base()))
    }
}
