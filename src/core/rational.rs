//! Exact rational arithmetic over arbitrary-precision integers.
//!
//! Interpolation over the integers produces fractional intermediate terms even when
//! the final answer is integral. `Fraction` carries those terms without rounding.
//!
//! # Invariants
//! - The denominator is strictly positive.
//! - Numerator and denominator are coprime after every operation.
//! - Zero is represented as `0/1`.
//!
//! # Usage
//! ```
//! use num_bigint::BigInt;
//! use shamir_keys::core::rational::Fraction;
//!
//! let half = Fraction::new(BigInt::from(1), BigInt::from(2)).unwrap();
//! let one = &half + &half;
//! assert_eq!(one.to_integer(), Some(BigInt::from(1)));
//! ```

use core::fmt;
use core::ops::{Add, Mul};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use zeroize::Zeroize;

use super::wipe::wipe;

/// A reduced fraction `num / den`.
#[derive(Clone, PartialEq, Eq)]
pub struct Fraction {
    num: BigInt,
    den: BigInt,
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl Zeroize for Fraction {
    fn zeroize(&mut self) {
        wipe(&mut self.num);
        wipe(&mut self.den);
    }
}

impl Fraction {
    /// Builds `num / den` in canonical form. Returns `None` when `den` is zero.
    pub fn new(num: BigInt, den: BigInt) -> Option<Self> {
        if den.is_zero() {
            return None;
        }
        let mut f = Fraction { num, den };
        f.reduce();
        Some(f)
    }

    /// The fraction `n / 1`.
    pub fn from_integer(n: BigInt) -> Self {
        Fraction { num: n, den: BigInt::one() }
    }

    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    pub fn numer(&self) -> &BigInt {
        &self.num
    }

    pub fn denom(&self) -> &BigInt {
        &self.den
    }

    /// True when the denominator is one.
    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// The value as an integer, or `None` when it has a fractional part.
    pub fn to_integer(&self) -> Option<BigInt> {
        self.is_integer().then(|| self.num.clone())
    }

    fn reduce(&mut self) {
        if self.den.is_negative() {
            self.num = -core::mem::take(&mut self.num);
            self.den = -core::mem::take(&mut self.den);
        }
        if self.num.is_zero() {
            self.den = BigInt::one();
            return;
        }
        let g = self.num.gcd(&self.den);
        if !g.is_one() {
            self.num /= &g;
            self.den /= &g;
        }
    }
}

impl Add for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: &Fraction) -> Fraction {
        let mut out = if self.den == rhs.den {
            Fraction { num: &self.num + &rhs.num, den: self.den.clone() }
        } else {
            Fraction {
                num: &self.num * &rhs.den + &rhs.num * &self.den,
                den: &self.den * &rhs.den,
            }
        };
        out.reduce();
        out
    }
}

impl Mul<&BigInt> for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: &BigInt) -> Fraction {
        let mut out = Fraction { num: &self.num * rhs, den: self.den.clone() };
        out.reduce();
        out
    }
}

/// Running sum of fractions over an unreduced common denominator.
///
/// Adding never takes a gcd, so the cost of a long sum is dominated by plain
/// multiplication. Integrality is decided once, by a single exact division.
#[derive(Clone)]
pub struct FractionSum {
    num: BigInt,
    den: BigInt,
}

impl fmt::Debug for FractionSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FractionSum")
            .field("num_bits", &self.num.bits())
            .field("den_bits", &self.den.bits())
            .finish()
    }
}

impl Zeroize for FractionSum {
    fn zeroize(&mut self) {
        wipe(&mut self.num);
        wipe(&mut self.den);
    }
}

impl Default for FractionSum {
    fn default() -> Self {
        Self::new()
    }
}

impl FractionSum {
    pub fn new() -> Self {
        Self { num: BigInt::zero(), den: BigInt::one() }
    }

    /// Adds `num / den`. Returns `false`, leaving the sum untouched, when `den` is zero.
    pub fn add(&mut self, num: &BigInt, den: &BigInt) -> bool {
        if den.is_zero() {
            return false;
        }
        if &self.den == den {
            self.num += num;
        } else {
            self.num = &self.num * den + num * &self.den;
            self.den *= den;
        }
        true
    }

    /// The sum as an integer, or `None` when it has a fractional part.
    pub fn to_integer(&self) -> Option<BigInt> {
        let (quotient, remainder) = self.num.div_rem(&self.den);
        remainder.is_zero().then_some(quotient)
    }
}
