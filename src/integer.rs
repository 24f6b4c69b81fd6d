/*
    Validated integers
*/

use std::fmt;

use num_integer::Integer as _;
use num_traits::cast::ToPrimitive;

use crate::set::{Interval, Set};
use crate::{Error, Number, Result};

/// Sign of an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

/// An integer that can take part in `Number` expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Integer(i64);

impl Integer {
    /// Creates a new `Integer`.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Resolves `n` and returns it as an `Integer`.
    /// Fails if the value is not integral or does not fit in an `i64`.
    pub fn from_number(n: &Number) -> Result<Self> {
        let value = Set::Integers.check(n)?;
        value.to_i64().map(Self).ok_or_else(|| out_of_range(value))
    }

    /// Returns the value of this `Integer`.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Returns the sign of this `Integer`.
    pub fn sign(&self) -> Sign {
        match self.0 {
            0 => Sign::Zero,
            v if v < 0 => Sign::Negative,
            _ => Sign::Positive,
        }
    }

    pub fn is_even(&self) -> bool {
        self.0.is_even()
    }

    pub fn is_odd(&self) -> bool {
        self.0.is_odd()
    }

    /// Greatest common divisor, always non-negative.
    /// Fails only for `gcd(i64::MIN, 0)` and `gcd(i64::MIN, i64::MIN)`,
    /// whose result `2⁶³` does not fit in an `i64`.
    pub fn gcd(&self, other: &Integer) -> Result<Integer> {
        Self::narrow((self.0 as i128).gcd(&(other.0 as i128)))
    }

    /// Least common multiple, always non-negative.
    /// Fails if the result does not fit in an `i64`.
    pub fn lcm(&self, other: &Integer) -> Result<Integer> {
        Self::narrow((self.0 as i128).lcm(&(other.0 as i128)))
    }

    // Results of `i64` operands fit in an `i128`
    fn narrow(value: i128) -> Result<Integer> {
        value
            .to_i64()
            .map(Self)
            .ok_or_else(|| out_of_range(value as f64))
    }

    /// Returns this `Integer` as a literal `Number`.
    pub fn to_number(&self) -> Number {
        Number::of(self.0 as f64)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Integer> for Number {
    fn from(i: Integer) -> Self {
        i.to_number()
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Error for a value outside of the `i64` range
fn out_of_range(value: f64) -> Error {
    Error::OutOfDefinitionSet {
        value,
        set: Interval::closed(i64::MIN as f64, i64::MAX as f64).to_string(),
    }
}

// Error for an integer of the wrong sign
fn wrong_sign(value: i64, set: &str) -> Error {
    Error::OutOfDefinitionSet {
        value: value as f64,
        set: set.to_string(),
    }
}

/// A strictly positive `Integer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Positive(Integer);

impl Positive {
    /// Creates a new `Positive`, failing unless `value > 0`.
    pub fn new(value: i64) -> Result<Self> {
        Self::try_from(Integer(value))
    }

    pub fn get(&self) -> Integer {
        self.0
    }
}

impl TryFrom<Integer> for Positive {
    type Error = Error;

    fn try_from(i: Integer) -> Result<Self> {
        match i.sign() {
            Sign::Positive => Ok(Self(i)),
            _ => Err(wrong_sign(i.0, "ℤ+")),
        }
    }
}

/// A strictly negative `Integer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Negative(Integer);

impl Negative {
    /// Creates a new `Negative`, failing unless `value < 0`.
    pub fn new(value: i64) -> Result<Self> {
        Self::try_from(Integer(value))
    }

    pub fn get(&self) -> Integer {
        self.0
    }
}

impl TryFrom<Integer> for Negative {
    type Error = Error;

    fn try_from(i: Integer) -> Result<Self> {
        match i.sign() {
            Sign::Negative => Ok(Self(i)),
            _ => Err(wrong_sign(i.0, "ℤ-")),
        }
    }
}

impl From<Positive> for Number {
    fn from(p: Positive) -> Self {
        p.0.to_number()
    }
}

impl From<Negative> for Number {
    fn from(n: Negative) -> Self {
        n.0.to_number()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_is_checked_at_construction() {
        assert!(Positive::new(3).is_ok());
        assert!(Positive::new(0).is_err());
        assert!(Negative::new(-1).is_ok());
        assert!(matches!(
            Negative::new(2),
            Err(Error::OutOfDefinitionSet { .. })
        ));
    }

    #[test]
    fn from_number_requires_integral_value() {
        let n = Number::of(7).multiply_by(3);
        assert_eq!(Integer::from_number(&n), Ok(Integer::new(21)));

        let half = Number::of(1).divide_by(2);
        assert!(matches!(
            Integer::from_number(&half),
            Err(Error::OutOfDefinitionSet { .. })
        ));
    }

    #[test]
    fn divisibility() {
        let a = Integer::new(12);
        let b = Integer::new(-18);
        assert_eq!(a.gcd(&b), Ok(Integer::new(6)));
        assert_eq!(a.lcm(&b), Ok(Integer::new(36)));
        assert!(a.is_even());
        assert!(Integer::new(7).is_odd());
        assert_eq!(b.sign(), Sign::Negative);
    }

    #[test]
    fn divisibility_out_of_range() {
        let min = Integer::new(i64::MIN);
        assert!(matches!(
            min.gcd(&Integer::new(0)),
            Err(Error::OutOfDefinitionSet { .. })
        ));
        assert_eq!(min.gcd(&Integer::new(6)), Ok(Integer::new(2)));

        // coprime values whose product exceeds i64::MAX
        let (p, q) = (Integer::new(4_294_967_311), Integer::new(4_294_967_357));
        assert_eq!(p.gcd(&q), Ok(Integer::new(1)));
        assert!(matches!(
            p.lcm(&q),
            Err(Error::OutOfDefinitionSet { .. })
        ));
        assert_eq!(
            Integer::new(i64::MAX).lcm(&Integer::new(1)),
            Ok(Integer::new(i64::MAX))
        );
    }
}
