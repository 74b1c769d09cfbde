//! Numeral systems: a base, its digit alphabet, and the sign and radix characters.
//!
//! Every alphabet is strictly increasing in byte value, so byte-wise comparison
//! of two equally long formatted magnitudes agrees with numeric comparison.

use crate::error::{ParseError, ParseResult};

static BASE10: NumeralSystem = NumeralSystem::new(b"0123456789", '.');

pub(crate) static BASE36: NumeralSystem =
    NumeralSystem::new(b"0123456789abcdefghijklmnopqrstuvwxyz", ':');

// '^' and '_' sit between 'Z' and 'a' in ASCII, which keeps the mapping monotonic.
static BASE64: NumeralSystem = NumeralSystem::new(
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ^_abcdefghijklmnopqrstuvwxyz",
    ':',
);

/// A positional numeral system used to parse and print [`BigInt`](crate::BigInt)
/// and [`Decimal`](crate::Decimal) values.
///
/// Only the three built-in systems exist; obtain them with
/// [`base10()`](Self::base10), [`base36()`](Self::base36) and
/// [`base64()`](Self::base64).
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct NumeralSystem {
    alphabet: &'static [u8],
    positive: char,
    negative: char,
    radix: char,
}

impl NumeralSystem {
    const fn new(alphabet: &'static [u8], radix: char) -> Self {
        Self {
            alphabet,
            positive: '+',
            negative: '-',
            radix,
        }
    }

    /// Decimal digits `0-9` with `.` as radix point
    #[must_use]
    pub fn base10() -> &'static Self {
        &BASE10
    }

    /// Digits `0-9a-z` with `:` as radix point
    #[must_use]
    pub fn base36() -> &'static Self {
        &BASE36
    }

    /// Digits `0-9A-Z^_a-z` with `:` as radix point
    #[must_use]
    pub fn base64() -> &'static Self {
        &BASE64
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn base(&self) -> u8 {
        self.alphabet.len() as u8
    }

    #[must_use]
    pub const fn positive_char(&self) -> char {
        self.positive
    }

    #[must_use]
    pub const fn negative_char(&self) -> char {
        self.negative
    }

    #[must_use]
    pub const fn radix_char(&self) -> char {
        self.radix
    }

    /// Character printed for `digit`.
    ///
    /// # Panics
    ///
    /// Panics if `digit >= self.base()`. Magnitudes built by this crate never
    /// hold such a digit.
    #[must_use]
    pub fn char_of(&self, digit: u8) -> char {
        char::from(self.alphabet[usize::from(digit)])
    }

    /// Digit value of `ch`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidDigit`] if `ch` is outside the alphabet.
    pub fn digit_of(&self, ch: char) -> ParseResult<u8> {
        // The alphabet is sorted, so a binary search finds the digit value.
        u8::try_from(ch)
            .ok()
            .and_then(|b| self.alphabet.binary_search(&b).ok())
            .and_then(|idx| u8::try_from(idx).ok())
            .ok_or_else(|| ParseError::InvalidDigit {
                ch,
                base: self.base(),
            })
    }
}
