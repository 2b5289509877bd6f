//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. Every operation
//! that produces a fraction of a cent rounds half away from zero.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    BRL,
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    ARS,
    MXN,
}

impl Currency {
    /// Get the currency code (e.g., "BRL").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::BRL => "BRL",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
            Currency::ARS => "ARS",
            Currency::MXN => "MXN",
        }
    }

    /// Get the currency symbol (e.g., "R$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::BRL => "R$",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
            Currency::ARS => "AR$",
            Currency::MXN => "MX$",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Separator between the integer and fractional part.
    pub fn decimal_separator(&self) -> char {
        match self {
            Currency::BRL | Currency::EUR | Currency::ARS => ',',
            _ => '.',
        }
    }

    /// Separator between groups of thousands.
    pub fn thousands_separator(&self) -> char {
        match self.decimal_separator() {
            ',' => '.',
            _ => ',',
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "BRL" => Some(Currency::BRL),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            "CAD" => Some(Currency::CAD),
            "ARS" => Some(Currency::ARS),
            "MXN" => Some(Currency::MXN),
            _ => None,
        }
    }

    fn unit(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., centavos
/// for BRL).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from whole currency units.
    ///
    /// ```
    /// use bakery_commerce::money::{Money, Currency};
    /// let price = Money::from_units(120, Currency::BRL);
    /// assert_eq!(price.amount_cents, 12000);
    /// ```
    ///
    /// # Panics
    /// Panics if the amount doesn't fit in cents. Use `checked_from_units`
    /// for untrusted input.
    pub fn from_units(units: i64, currency: Currency) -> Self {
        Self::checked_from_units(units, currency).expect("Overflow converting units to cents")
    }

    /// Create a Money value from whole currency units, returning None on
    /// overflow.
    pub fn checked_from_units(units: i64, currency: Currency) -> Option<Self> {
        units
            .checked_mul(currency.unit())
            .map(|cents| Self::new(cents, currency))
    }

    /// Parse a decimal string such as `"49.99"` or `"49,99"`.
    ///
    /// Either `.` or `,` is accepted as the decimal separator. More
    /// fractional digits than the currency carries is an error.
    pub fn parse(input: &str, currency: Currency) -> Result<Self, CommerceError> {
        let invalid = || CommerceError::InvalidPrice(input.to_string());
        let trimmed = input.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (whole, fraction) = match digits.find(|c: char| c == '.' || c == ',') {
            Some(pos) => (&digits[..pos], &digits[pos + 1..]),
            None => (digits, ""),
        };

        let places = currency.decimal_places() as usize;
        if whole.is_empty()
            || fraction.len() > places
            || !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let mut fraction_cents: i64 = 0;
        for (i, c) in fraction.chars().enumerate() {
            let digit = i64::from(c.to_digit(10).ok_or_else(invalid)?);
            fraction_cents += digit * 10_i64.pow((places - i - 1) as u32);
        }

        let cents = whole
            .checked_mul(currency.unit())
            .and_then(|c| c.checked_add(fraction_cents))
            .ok_or(CommerceError::Overflow)?;

        Ok(Self::new(if negative { -cents } else { cents }, currency))
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Format as a display string (e.g., "R$ 1.234,56").
    pub fn display(&self) -> String {
        match self.currency {
            Currency::BRL | Currency::EUR | Currency::ARS => {
                format!("{} {}", self.currency.symbol(), self.display_amount())
            }
            _ => format!("{}{}", self.currency.symbol(), self.display_amount()),
        }
    }

    /// Format as a display string without symbol (e.g., "1.234,56").
    pub fn display_amount(&self) -> String {
        let unit = self.currency.unit();
        let abs = self.amount_cents.unsigned_abs();
        let whole = (abs / unit as u64).to_string();
        let fraction = abs % unit as u64;

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, c) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(self.currency.thousands_separator());
            }
            grouped.push(c);
        }

        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let places = self.currency.decimal_places() as usize;
        if places == 0 {
            format!("{sign}{grouped}")
        } else {
            format!(
                "{sign}{grouped}{}{:0places$}",
                self.currency.decimal_separator(),
                fraction
            )
        }
    }

    /// Add another Money value.
    ///
    /// # Panics
    /// Panics if currencies don't match. Use `try_add` for fallible addition.
    pub fn add(&self, other: &Money) -> Money {
        self.try_add(other).expect("Currency mismatch in addition")
    }

    /// Try to add another Money value, returning None if currencies don't
    /// match or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Subtract another Money value.
    ///
    /// # Panics
    /// Panics if currencies don't match.
    pub fn subtract(&self, other: &Money) -> Money {
        self.try_subtract(other)
            .expect("Currency mismatch in subtraction")
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_sub(other.amount_cents)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Multiply by a scalar.
    ///
    /// # Panics
    /// Panics on overflow. Use `checked_multiply` for fallible multiplication.
    pub fn multiply(&self, factor: i64) -> Money {
        self.checked_multiply(factor)
            .expect("Overflow in multiplication")
    }

    /// Multiply by a scalar, returning None on overflow.
    pub fn checked_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents
            .checked_mul(factor)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Multiply by the fraction `numerator / denominator`, rounding half
    /// away from zero to the nearest cent.
    ///
    /// A zero denominator yields zero.
    pub fn scale(&self, numerator: i64, denominator: i64) -> Money {
        if denominator == 0 {
            return Money::zero(self.currency);
        }
        let product = i128::from(self.amount_cents) * i128::from(numerator);
        let cents = div_round(product, i128::from(denominator));
        Money::new(cents, self.currency)
    }

    /// Calculate a whole-number percentage of this amount.
    pub fn percentage(&self, percent: u32) -> Money {
        self.scale(i64::from(percent), 100)
    }

    /// Split into `parts` equal shares, rounded to the cent.
    pub fn split(&self, parts: u32) -> Money {
        self.scale(1, i64::from(parts))
    }

    /// Sum an iterator of Money values, returning None on currency
    /// mismatch or overflow.
    pub fn try_sum<'a>(
        mut iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

/// Integer division rounding half away from zero.
fn div_round(numerator: i128, denominator: i128) -> i64 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    let rounded = if remainder.abs() * 2 >= denominator.abs() {
        if (numerator < 0) != (denominator < 0) {
            quotient - 1
        } else {
            quotient + 1
        }
    } else {
        quotient
    };
    rounded.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::add(&self, &other)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::subtract(&self, &other)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
