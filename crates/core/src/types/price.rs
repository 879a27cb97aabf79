//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are stored as [`Decimal`] so that cart totals add up exactly
//! (`24.99 * 2 + 28.50` is `78.48`, not `78.47999999999999`). On the wire a
//! price is a plain JSON number, which is what stored carts contain. A price
//! that no `f64` can hold exactly is written as a numeric string instead.
//!
//! Every price lies in `0..=Price::MAX`. Construction clamps and arithmetic
//! saturates, so no input can overflow a cart total.

use core::fmt;
use core::ops::{Add, Mul};
use core::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when parsing a [`Price`] strictly.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input is not a decimal number.
    #[error("price is not a number: {0}")]
    NotANumber(String),
    /// The input is below zero.
    #[error("price cannot be negative")]
    Negative,
    /// The input is above [`Price::MAX`].
    #[error("price cannot exceed {max}", max = Price::MAX)]
    TooLarge,
}

/// A non-negative amount in the shop's currency (US dollars).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    /// The zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// The largest price, `999999999999.99`. Exactly representable as `f64`.
    pub const MAX: Self = Self(Decimal::from_parts(0x107A_3FFF, 0x5AF3, 0, false, 2));

    /// Create a price from an amount, clamping it into `0..=MAX`.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        if amount.is_sign_negative() {
            Self::ZERO
        } else if amount > Self::MAX.0 {
            Self::MAX
        } else {
            Self(amount)
        }
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), 2))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Round to two decimal places, half away from zero.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Parse a price from user input, coercing anything unusable to zero.
    ///
    /// Leading whitespace is skipped and the longest numeric prefix is used,
    /// exponent included (`"12.5kg"` is `12.5`, `"1e3"` is `1000`). Empty or
    /// non-numeric input yields zero. The result is clamped into `0..=MAX`,
    /// so `"-4"` is zero and a hundred nines is `MAX`.
    #[must_use]
    pub fn parse_lenient(input: &str) -> Self {
        let prefix = numeric_prefix(input.trim_start());
        if prefix.is_empty() {
            return Self::ZERO;
        }
        let (sign, digits) = match prefix.as_bytes().first() {
            Some(b'-') => ("-", prefix.get(1..).unwrap_or_default()),
            Some(b'+') => ("", prefix.get(1..).unwrap_or_default()),
            _ => ("", prefix),
        };
        let lead = if digits.starts_with('.') { "0" } else { "" };
        let normalized = format!("{sign}{lead}{digits}");
        let exact = if normalized.contains(['e', 'E']) {
            Decimal::from_scientific(&normalized)
        } else {
            Decimal::from_str(&normalized)
        };
        match exact {
            Ok(amount) => Self::new(amount),
            // Beyond what a decimal holds: huge, or too many digits
            Err(_) => match normalized.parse::<f64>() {
                Ok(v) => Decimal::from_f64(v).map_or(
                    if v >= 1.0 { Self::MAX } else { Self::ZERO },
                    Self::new,
                ),
                Err(_) => Self::ZERO,
            },
        }
    }
}

/// Longest prefix of `s` shaped like `[+-]?digits[.digits][e[+-]digits]`,
/// where the mantissa may also be `.digits`.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return "";
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }
    s.get(..end).unwrap_or_default()
}

impl FromStr for Price {
    type Err = PriceError;

    /// Strict parse: the whole input must be a decimal in `0..=MAX`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount =
            Decimal::from_str(s.trim()).map_err(|_| PriceError::NotANumber(s.to_owned()))?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }
        if amount > Self::MAX.0 {
            return Err(PriceError::TooLarge);
        }
        Ok(Self::new(amount))
    }
}

impl fmt::Display for Price {
    /// Formats as dollars with two decimals, e.g. `$24.99`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.rounded().0)
    }
}

impl Add for Price {
    type Output = Self;

    /// Saturates at [`Price::MAX`].
    fn add(self, rhs: Self) -> Self::Output {
        self.0.checked_add(rhs.0).map_or(Self::MAX, Self::new)
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    /// Saturates at [`Price::MAX`].
    fn mul(self, quantity: u32) -> Self::Output {
        self.0
            .checked_mul(Decimal::from(quantity))
            .map_or(Self::MAX, Self::new)
    }
}

impl core::iter::Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let exact = self
            .0
            .to_f64()
            .filter(|v| Decimal::from_str(&v.to_string()).is_ok_and(|d| d == self.0));
        match exact {
            Some(v) => serializer.serialize_f64(v),
            None => serializer.collect_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}

struct PriceVisitor;

impl Visitor<'_> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative number or numeric string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
        Ok(Price::new(Decimal::from(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
        if v < 0 {
            return Err(E::custom(PriceError::Negative));
        }
        Ok(Price::new(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
        if !v.is_finite() {
            return Err(E::custom(PriceError::NotANumber(v.to_string())));
        }
        if v < 0.0 {
            return Err(E::custom(PriceError::Negative));
        }
        // f64's Display is the shortest round-trip form, so 24.99 stays 24.99.
        match Decimal::from_str(&v.to_string()) {
            Ok(amount) => Ok(Price::new(amount)),
            Err(_) if v >= 1.0 => Ok(Price::MAX),
            Err(_) => Ok(Decimal::from_f64(v).map_or(Price::ZERO, Price::new)),
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
        match Price::from_str(v) {
            Err(PriceError::TooLarge) => Ok(Price::MAX),
            parsed => parsed.map_err(E::custom),
        }
    }
}
