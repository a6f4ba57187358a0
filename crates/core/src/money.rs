//! Monetary amounts in the smallest currency unit.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Non-negative amount in cents.
///
/// Stored as an integer so that `9.99 × 3` is exactly `29.97`. Text form is a
/// decimal with two fractional digits.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Line total for `quantity` units at this price (saturating).
    pub fn times(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Render through `pad` so width/alignment flags work in report tables.
        f.pad(&format!("{}.{:02}", self.0 / 100, self.0 % 100))
    }
}

impl FromStr for Money {
    type Err = DomainError;

    /// Parses `"9.99"`, `"10"`, `"9.9"`, `".5"`. Digits past the cents are
    /// rounded half-up. Scientific notation (`"1e+06"`) is accepted as well,
    /// since older data files were written by a stream with 6 significant
    /// digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::validation("price cannot be empty"));
        }
        if s.starts_with('-') {
            return Err(DomainError::validation(format!("price cannot be negative: {s}")));
        }
        if s.contains(['e', 'E']) {
            return parse_scientific(s);
        }

        let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid(s));
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(s));
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid(s))?
        };

        let mut digits = frac.bytes().map(|b| u64::from(b - b'0'));
        let tenths = digits.next().unwrap_or(0);
        let hundredths = digits.next().unwrap_or(0);
        let round_up = digits.next().is_some_and(|d| d >= 5);

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(tenths * 10 + hundredths + u64::from(round_up)))
            .map(Money)
            .ok_or_else(|| DomainError::validation(format!("price out of range: {s}")))
    }
}

fn parse_scientific(s: &str) -> Result<Money, DomainError> {
    let value: f64 = s.parse().map_err(|_| invalid(s))?;
    let cents = (value * 100.0).round();
    if !cents.is_finite() || cents < 0.0 || cents >= u64::MAX as f64 {
        return Err(DomainError::validation(format!("price out of range: {s}")));
    }
    Ok(Money(cents as u64))
}

fn invalid(s: &str) -> DomainError {
    DomainError::validation(format!("invalid price: {s}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    #[test]
    fn parses_plain_decimals() {
        assert_eq!(money("9.99"), Money::from_cents(999));
        assert_eq!(money("10"), Money::from_cents(1000));
        assert_eq!(money("9.9"), Money::from_cents(990));
        assert_eq!(money(".5"), Money::from_cents(50));
        assert_eq!(money("0"), Money::ZERO);
        assert_eq!(money(" 3.10 "), Money::from_cents(310));
    }

    #[test]
    fn extra_fraction_digits_round_half_up() {
        assert_eq!(money("1234.567"), Money::from_cents(123_457));
        assert_eq!(money("1.004"), Money::from_cents(100));
        assert_eq!(money("1.005"), Money::from_cents(101));
    }

    #[test]
    fn accepts_scientific_notation() {
        assert_eq!(money("1e+06"), Money::from_cents(100_000_000));
        assert_eq!(money("2.5E2"), Money::from_cents(25_000));
    }

    #[test]
    fn rejects_negative_and_garbage() {
        for bad in ["", "-1", "-0.5", "abc", "1.2.3", ".", "1,5", "-1e3", "1 000"] {
            let err = bad.parse::<Money>().unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "{bad:?} gave {err:?}");
        }
    }

    #[test]
    fn display_uses_two_decimals_and_honours_width() {
        assert_eq!(Money::from_cents(2997).to_string(), "29.97");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(format!("{:>8}", Money::from_cents(1000)), "   10.00");
    }

    #[test]
    fn times_and_sum() {
        let price = money("9.99");
        assert_eq!(price.times(3), money("29.97"));
        let total: Money = [money("1.10"), money("2.20")].into_iter().sum();
        assert_eq!(total, money("3.30"));
    }

    #[test]
    fn serializes_as_cents() {
        let json = serde_json::to_string(&Money::from_cents(999)).unwrap();
        assert_eq!(json, "999");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: rendering then parsing yields the same amount.
        #[test]
        fn display_is_parseable(cents in 0u64..10_000_000_000u64) {
            let m = Money::from_cents(cents);
            prop_assert_eq!(m.to_string().parse::<Money>().unwrap(), m);
        }
    }
}
