//! The field of rational numbers Q.

use dashu::base::{Abs, Inverse, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::IBig;
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;
use thiserror::Error;

use crate::integers::Z;
use crate::traits::{CommutativeRing, Field, OrderedRing, Ring};

/// The field of rational numbers.
///
/// Wraps `dashu::RBig`. Values are always stored in lowest terms with a
/// positive denominator, so equality and hashing are structural.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Q(RBig);

impl Q {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: i64, denominator: i64) -> Self {
        assert!(denominator != 0, "denominator cannot be zero");
        let num = if denominator < 0 {
            IBig::from(-numerator)
        } else {
            IBig::from(numerator)
        };
        Self(RBig::from_parts(num, IBig::from(denominator).unsigned_abs()))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(RBig::from(n))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Z {
        Z::from(self.0.numerator().clone())
    }

    /// Returns the denominator.
    #[must_use]
    pub fn denominator(&self) -> Z {
        Z::from(IBig::from(self.0.denominator().clone()))
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<Z> {
        if self.is_integer() {
            Some(self.numerator())
        } else {
            None
        }
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Panics
    ///
    /// Panics if the rational is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        assert!(!Ring::is_zero(self), "cannot take reciprocal of zero");
        Self(self.0.clone().inv())
    }

    /// Returns the inner `dashu::RBig`.
    #[must_use]
    pub fn into_inner(self) -> RBig {
        self.0
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }
}

impl CommutativeRing for Q {}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        if Ring::is_zero(self) {
            None
        } else {
            Some(self.recip())
        }
    }
}

impl OrderedRing for Q {
    fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }
}

impl Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<Z> for Q {
    fn from(value: Z) -> Self {
        Self(RBig::from(value.into_inner()))
    }
}

/// Error parsing a rational from a string.
#[derive(Debug, Error)]
pub enum ParseRationalError {
    /// The numerator or denominator is not a valid integer.
    #[error("invalid integer: {0}")]
    Integer(#[from] dashu::base::error::ParseError),
    /// The denominator is zero.
    #[error("denominator is zero")]
    ZeroDenominator,
}

/// Parses a rational written as `a/b` or `a`. A zero denominator is a
/// parse error, never a panic; a negative denominator moves its sign to
/// the numerator.
impl FromStr for Q {
    type Err = ParseRationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((num, den)) => {
                let num = IBig::from_str(num.trim())?;
                let den = IBig::from_str(den.trim())?;
                if den == IBig::ZERO {
                    return Err(ParseRationalError::ZeroDenominator);
                }
                let num = if den < IBig::ZERO { -num } else { num };
                Ok(Self(RBig::from_parts(num, den.unsigned_abs())))
            }
            None => Ok(Self(RBig::from(IBig::from_str(s.trim())?))),
        }
    }
}

impl fmt::Debug for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q({})", self)
    }
}

impl fmt::Display for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.0.numerator())
        } else {
            write!(f, "{}/{}", self.0.numerator(), self.0.denominator())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_laws() {
        let a = Q::new(2, 3);
        let b = Q::new(3, 4);

        // 2/3 + 3/4 = 17/12
        let sum = a.clone() + b.clone();
        assert_eq!(sum, Q::new(17, 12));

        // 2/3 * 3/4 = 1/2
        let prod = a * b;
        assert_eq!(prod, Q::new(1, 2));
    }

    #[test]
    fn test_normalization() {
        assert_eq!(Q::new(2, 4), Q::new(1, 2));
        assert_eq!(Q::new(1, -2), Q::new(-1, 2));
        assert_eq!(Q::new(-3, -6), Q::new(1, 2));
    }

    #[test]
    fn test_inverse() {
        let a = Q::new(3, 5);
        let inv = Field::inv(&a).unwrap();
        assert!(Ring::is_one(&(a * inv)));
        assert!(Field::inv(&Q::zero()).is_none());
    }

    #[test]
    fn test_parse_roundtrip() {
        let a = Q::new(-7, 3);
        let s = a.to_string();
        assert_eq!(s.parse::<Q>().unwrap(), a);

        let b = Q::from_integer(42);
        assert_eq!(b.to_string().parse::<Q>().unwrap(), b);
    }

    #[test]
    fn test_parse_zero_denominator_rejected() {
        assert!(matches!(
            "1/0".parse::<Q>(),
            Err(ParseRationalError::ZeroDenominator)
        ));
        assert!(matches!(
            "-3/0".parse::<Q>(),
            Err(ParseRationalError::ZeroDenominator)
        ));
    }

    #[test]
    fn test_parse_negative_denominator() {
        assert_eq!("1/-2".parse::<Q>().unwrap(), Q::new(-1, 2));
        assert_eq!("-1/-2".parse::<Q>().unwrap(), Q::new(1, 2));
    }

    #[test]
    fn test_signum() {
        assert_eq!(Q::new(-1, 2).signum(), -1);
        assert_eq!(Q::zero().signum(), 0);
        assert_eq!(Q::new(1, 2).signum(), 1);
    }
}
