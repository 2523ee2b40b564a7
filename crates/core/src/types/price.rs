//! Type-safe price representation using decimal arithmetic.
//!
//! Prices on the wire are plain JSON numbers (the Larek API has a single
//! currency, "synapses"). Internally they are [`Decimal`] so sums never pick
//! up floating point drift.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price in synapses.
///
/// Serialized as a JSON number in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of synapses.
    #[must_use]
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether the price is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Format for display, e.g. `1 450 synapses`.
    ///
    /// Whole-number digits are grouped in threes the way the storefront
    /// renders them; fractional digits are kept as-is.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} synapses", group_digits(&self.0.normalize().to_string()))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

/// Insert a space between each group of three whole-number digits.
fn group_digits(raw: &str) -> String {
    let (sign, unsigned) = raw
        .strip_prefix('-')
        .map_or(("", raw), |rest| ("-", rest));
    let (whole, fraction) = unsigned
        .split_once('.')
        .map_or((unsigned, None), |(w, f)| (w, Some(f)));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_small() {
        assert_eq!(Price::from_units(750).display(), "750 synapses");
    }

    #[test]
    fn test_display_grouped() {
        assert_eq!(Price::from_units(1_450).display(), "1 450 synapses");
        assert_eq!(Price::from_units(2_500_000).display(), "2 500 000 synapses");
    }

    #[test]
    fn test_display_fraction() {
        let price = Price::new(Decimal::new(12_345, 1));
        assert_eq!(price.display(), "1 234.5 synapses");
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::from_units(100), Price::from_units(50)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_units(150));
    }

    #[test]
    fn test_sum_empty_is_zero() {
        let total: Price = std::iter::empty().sum();
        assert!(total.is_zero());
    }

    #[test]
    fn test_deserialize_from_json_number() {
        let price: Price = serde_json::from_str("1450").unwrap();
        assert_eq!(price, Price::from_units(1_450));
    }

    #[test]
    fn test_serialize_as_json_number() {
        let json = serde_json::to_value(Price::from_units(50)).unwrap();
        assert!(json.is_number());
        assert!((json.as_f64().unwrap() - 50.0).abs() < f64::EPSILON);
    }
}
