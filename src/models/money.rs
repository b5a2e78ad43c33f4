//! Money type for ledger amounts
//!
//! Amounts are stored as signed minor units (cents for EUR/USD) in an i64,
//! so ledger sums never accumulate floating-point drift. Locale-aware
//! rendering lives in the `display` module; `Money` itself is currency
//! agnostic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A signed monetary amount in minor units (hundredths of the major unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create an amount from minor units
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create an amount from whole major units
    pub const fn from_major(major: i64) -> Self {
        Self(major * 100)
    }

    /// The zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Whole major-unit portion, truncated toward zero
    pub const fn major_part(&self) -> i64 {
        self.0 / 100
    }

    /// Minor-unit remainder (0-99)
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Interest earned on this amount at `rate` percent, rounded to the
    /// nearest minor unit
    pub fn interest_at(&self, rate: f64) -> Self {
        Self((self.0 as f64 * rate / 100.0).round() as i64)
    }

    /// Whether this amount covers one tenth of `movement`, evaluated exactly
    /// in minor units. Amounts too large to scale are never covered.
    pub const fn within_tenth_of(&self, movement: Money) -> bool {
        match self.0.checked_mul(10) {
            Some(scaled) => scaled <= movement.0,
            None => false,
        }
    }

    /// Parse an amount from UI text
    ///
    /// Accepts plain major units ("300"), a decimal point or comma with up
    /// to two fraction digits ("90.5", "10,25"), and a leading minus.
    /// Anything else is rejected.
    pub fn parse(input: &str) -> Result<Self, MoneyParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let invalid = || MoneyParseError::Invalid(trimmed.to_string());

        // Only one sign, and only up front
        if rest.contains(['-', '+']) {
            return Err(invalid());
        }

        let rest = rest.replace(',', ".");
        let minor = match rest.split_once('.') {
            Some((whole, frac)) => {
                if frac.len() > 2 || frac.is_empty() {
                    return Err(invalid());
                }
                let whole: i64 = whole.parse().map_err(|_| invalid())?;
                let frac_minor = frac.parse::<i64>().map_err(|_| invalid())?
                    * if frac.len() == 1 { 10 } else { 1 };
                whole
                    .checked_mul(100)
                    .and_then(|w| w.checked_add(frac_minor))
                    .ok_or_else(invalid)?
            }
            None => rest
                .parse::<i64>()
                .map_err(|_| invalid())?
                .checked_mul(100)
                .ok_or_else(invalid)?,
        };

        Ok(Self(if negative { -minor } else { minor }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.major_part().abs(), self.minor_part())
        } else {
            write!(f, "{}.{:02}", self.major_part(), self.minor_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    Invalid(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "Empty amount"),
            MoneyParseError::Invalid(s) => write!(f, "Invalid amount: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
