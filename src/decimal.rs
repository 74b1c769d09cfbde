use crate::error::{ParseError, ParseResult, RankError, RankResult};
use crate::integer::{BigInt, Sign};
use crate::numeral::NumeralSystem;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::trace;

/// Fixed-point decimal: `magnitude × base^(-scale)`
///
/// Values are always normalized: the magnitude carries no low-order zero
/// digits unless the scale is already 0, so every value has exactly one
/// `(magnitude, scale)` representation and equality is structural.
///
/// Like [`BigInt`], a [`Decimal`] is immutable; arithmetic returns new values.
#[derive(Debug, Clone)]
pub struct Decimal {
    mag: BigInt,
    scale: usize,
}

impl Decimal {
    /// Create a normalized decimal, stripping low-order zero digits from
    /// `mag` while reducing `scale`
    #[must_use]
    pub fn new(mag: BigInt, scale: usize) -> Self {
        if mag.is_zero() {
            return Self { mag, scale: 0 };
        }
        let zeros = mag
            .digits()
            .iter()
            .take(scale)
            .take_while(|&&d| d == 0)
            .count();
        Self {
            mag: mag.drop_digits(zeros),
            scale: scale - zeros,
        }
    }

    #[must_use]
    pub fn zero(system: &'static NumeralSystem) -> Self {
        Self::new(BigInt::zero(system), 0)
    }

    #[must_use]
    pub fn from_integer(value: BigInt) -> Self {
        Self::new(value, 0)
    }

    /// Parse a decimal literal with at most one radix point.
    ///
    /// The scale is the number of characters after the radix point.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedNumber`] for more than one radix point and
    /// [`ParseError::InvalidDigit`] for characters outside the alphabet.
    pub fn parse(text: &str, system: &'static NumeralSystem) -> ParseResult<Self> {
        let radix = system.radix_char();
        let Some((integer_part, fractional_part)) = text.split_once(radix) else {
            return Ok(Self::new(BigInt::parse(text, system)?, 0));
        };
        if fractional_part.contains(radix) {
            return Err(ParseError::MalformedNumber { radix });
        }

        let mut digits = String::with_capacity(integer_part.len() + fractional_part.len());
        digits.push_str(integer_part);
        digits.push_str(fractional_part);
        let mag = BigInt::parse(&digits, system)?;
        Ok(Self::new(mag, fractional_part.chars().count()))
    }

    #[must_use]
    pub const fn magnitude(&self) -> &BigInt {
        &self.mag
    }

    #[must_use]
    pub const fn scale(&self) -> usize {
        self.scale
    }

    #[must_use]
    pub const fn system(&self) -> &'static NumeralSystem {
        self.mag.system()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.mag.is_zero()
    }

    /// True if the value has no non-zero fractional digit
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.mag.digits().iter().take(self.scale).all(|&d| d == 0)
    }

    /// Both magnitudes widened to the larger of the two scales
    fn align(&self, other: &Self) -> (BigInt, BigInt, usize) {
        match self.scale.cmp(&other.scale) {
            Ordering::Equal => (self.mag.clone(), other.mag.clone(), self.scale),
            Ordering::Less => (
                self.mag.append_zeros(other.scale - self.scale),
                other.mag.clone(),
                other.scale,
            ),
            Ordering::Greater => (
                self.mag.clone(),
                other.mag.append_zeros(self.scale - other.scale),
                self.scale,
            ),
        }
    }

    /// # Errors
    ///
    /// Returns [`RankError::BaseMismatch`] if the operands use different bases.
    pub fn add(&self, other: &Self) -> RankResult<Self> {
        self.mag.check_base(&other.mag)?;
        Ok(self.add_unchecked(other))
    }

    /// # Errors
    ///
    /// Returns [`RankError::BaseMismatch`] if the operands use different bases.
    pub fn sub(&self, other: &Self) -> RankResult<Self> {
        self.mag.check_base(&other.mag)?;
        Ok(self.sub_unchecked(other))
    }

    /// Product with scale equal to the sum of the operand scales
    ///
    /// # Errors
    ///
    /// Returns [`RankError::BaseMismatch`] if the operands use different bases.
    pub fn multiply(&self, other: &Self) -> RankResult<Self> {
        self.mag.check_base(&other.mag)?;
        Ok(self.multiply_unchecked(other))
    }

    pub(crate) fn add_unchecked(&self, other: &Self) -> Self {
        let (left, right, scale) = self.align(other);
        Self::new(left.add_unchecked(&right), scale)
    }

    pub(crate) fn sub_unchecked(&self, other: &Self) -> Self {
        let (left, right, scale) = self.align(other);
        Self::new(left.sub_unchecked(&right), scale)
    }

    fn multiply_unchecked(&self, other: &Self) -> Self {
        Self::new(
            self.mag.multiply_unchecked(&other.mag),
            self.scale + other.scale,
        )
    }

    /// Reduce to at most `scale` fractional digits, rounding toward negative
    /// infinity. A `scale` at or above the current one is a no-op.
    #[must_use]
    pub fn set_scale(&self, scale: usize) -> Self {
        if scale >= self.scale {
            return self.clone();
        }
        let dropped = self.scale - scale;
        let mut mag = self.mag.drop_digits(dropped);
        let lost_fraction = self.mag.digits().iter().take(dropped).any(|&d| d != 0);
        if self.mag.sign() == Sign::Negative && lost_fraction {
            mag = mag.sub_unchecked(&BigInt::one(self.system()));
        }
        Self::new(mag, scale)
    }

    /// Like [`set_scale`](Self::set_scale), then add one unit in the last
    /// remaining place. The result is strictly greater than `self` whenever
    /// the scale is actually reduced.
    #[must_use]
    pub fn set_scale_with_ceiling(&self, scale: usize) -> Self {
        if scale >= self.scale {
            return self.clone();
        }
        let floor = self.set_scale(scale);
        let unit = Self::new(BigInt::one(self.system()), scale);
        floor.add_unchecked(&unit)
    }

    /// Largest integer not greater than the value
    #[must_use]
    pub fn floor(&self) -> BigInt {
        self.set_scale(0).mag
    }

    /// Smallest integer not less than the value
    #[must_use]
    pub fn ceil(&self) -> BigInt {
        let floor = self.floor();
        if self.is_exact() {
            floor
        } else {
            floor.add_unchecked(&BigInt::one(self.system()))
        }
    }

    /// Shortest value strictly between `self` and `other`.
    ///
    /// Among the candidates with the fewest fractional digits the one
    /// nearest the arithmetic midpoint is preferred. The arguments may be
    /// given in either order.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::BaseMismatch`] if the operands use different
    /// bases and [`RankError::IdenticalDecimal`] if they are equal.
    pub fn between(&self, other: &Self) -> RankResult<Self> {
        self.mag.check_base(&other.mag)?;
        match self.cmp(other) {
            Ordering::Less => Ok(between_ordered(self, other)),
            Ordering::Greater => Ok(between_ordered(other, self)),
            Ordering::Equal => Err(RankError::IdenticalDecimal(self.to_string())),
        }
    }

    /// `1/2` in this value's base
    fn half(&self) -> Self {
        let system = self.system();
        let digit = BigInt::from_u64(u64::from(system.base() / 2), system);
        Self::new(digit, 1)
    }
}

/// Search for the shortest value in the open interval `(lower, upper)`.
///
/// Requires `lower < upper` and a shared base.
fn between_ordered(lower: &Decimal, upper: &Decimal) -> Decimal {
    let mut left = lower.clone();
    let mut right = upper.clone();

    // Bring both bounds to the coarser scale; if that collapses the interval
    // the full-precision midpoint is the only option.
    if lower.scale < upper.scale {
        right = upper.set_scale(lower.scale);
        if *lower >= right {
            return middle(lower, upper);
        }
    }
    if lower.scale > right.scale {
        left = lower.set_scale_with_ceiling(right.scale);
        if left >= right {
            return middle(lower, upper);
        }
    }

    // Narrow one fractional digit at a time while the bounds stay ordered.
    let mut scale = left.scale;
    while scale > 0 {
        let next_scale = scale - 1;
        let next_left = left.set_scale_with_ceiling(next_scale);
        let next_right = right.set_scale(next_scale);
        trace!(scale = next_scale, left = %next_left, right = %next_right, "between: narrowing");
        match next_left.cmp(&next_right) {
            Ordering::Equal => return check_mid(lower, upper, next_left),
            Ordering::Greater => break,
            Ordering::Less => {
                scale = next_scale;
                left = next_left;
                right = next_right;
            }
        }
    }

    let mut mid = check_mid(lower, upper, middle(&left, &right));

    // Drop trailing digits while the value stays strictly inside the bounds.
    let mut scale = mid.scale;
    while scale > 0 {
        scale -= 1;
        let shorter = mid.set_scale(scale);
        if shorter <= *lower || shorter >= *upper {
            break;
        }
        mid = shorter;
    }
    mid
}

/// `mid` if it lies strictly inside `(lower, upper)`, else the midpoint of the bounds
fn check_mid(lower: &Decimal, upper: &Decimal, mid: Decimal) -> Decimal {
    if *lower >= mid || mid >= *upper {
        middle(lower, upper)
    } else {
        mid
    }
}

/// Arithmetic midpoint, rounded to the bounds' scale when that keeps it inside
fn middle(lower: &Decimal, upper: &Decimal) -> Decimal {
    let mid = lower
        .add_unchecked(upper)
        .multiply_unchecked(&lower.half());
    let scale = lower.scale.max(upper.scale);
    if mid.scale > scale {
        let round_down = mid.set_scale(scale);
        if round_down > *lower {
            return round_down;
        }
        let round_up = mid.set_scale_with_ceiling(scale);
        if round_up < *upper {
            return round_up;
        }
    }
    mid
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let system = self.system();
        if self.mag.sign() == Sign::Negative {
            write!(f, "{}", system.negative_char())?;
        }

        let digits = self.mag.digits();
        if self.scale == 0 {
            for &digit in digits.iter().rev() {
                write!(f, "{}", system.char_of(digit))?;
            }
            return Ok(());
        }

        // Pad so at least one integer digit precedes the radix point.
        let width = digits.len().max(self.scale + 1);
        for pos in (0..width).rev() {
            if pos + 1 == self.scale {
                write!(f, "{}", system.radix_char())?;
            }
            let digit = digits.get(pos).copied().unwrap_or(0);
            write!(f, "{}", system.char_of(digit))?;
        }
        Ok(())
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.scale == other.scale && self.mag == other.mag
    }
}

impl Eq for Decimal {}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.mag.hash(state);
        self.scale.hash(state);
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let (left, right, _) = self.align(other);
        left.cmp(&right)
    }
}
