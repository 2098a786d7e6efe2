//! Polynomial construction and evaluation over the integers.
//!
//! The polynomial only exists while shares are being generated. Its coefficients are
//! wiped in place when it is dropped.

use alloc::vec::Vec;
use num_bigint::BigInt;
use num_traits::One;

use crate::core::wipe::{wipe, SecretInt};
use crate::rng::RandomState;
use super::SharingError;

/// f(x) = c[0] + c[1]*x + ... + c[t-1]*x^(t-1), with c[0] the secret.
pub(crate) struct Polynomial {
    coefficients: Vec<BigInt>,
}

impl Drop for Polynomial {
    fn drop(&mut self) {
        self.coefficients.iter_mut().for_each(wipe);
    }
}

impl Polynomial {
    /// Builds a polynomial with `secret` as constant term and `degree` random
    /// coefficients of `bits` bits each, drawn in order from `state`.
    pub(crate) fn random(
        secret: &BigInt,
        degree: usize,
        bits: u64,
        state: &mut RandomState,
    ) -> Result<Self, SharingError> {
        let mut coefficients = Vec::new();
        coefficients
            .try_reserve_exact(degree + 1)
            .map_err(|_| SharingError::Allocation("polynomial coefficients"))?;

        coefficients.push(secret.clone());
        for _ in 0..degree {
            coefficients.push(state.sample(bits));
        }
        Ok(Self { coefficients })
    }

    #[cfg(test)]
    pub(crate) fn from_coefficients(coefficients: Vec<BigInt>) -> Self {
        Self { coefficients }
    }

    #[cfg(test)]
    pub(crate) fn coefficients(&self) -> &[BigInt] {
        &self.coefficients
    }

    /// Number of coefficients, i.e. the threshold this polynomial serves.
    pub(crate) fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Evaluates f(x) exactly.
    ///
    /// Keeps a running power of `x`, multiplying it by `x` once per term.
    pub(crate) fn evaluate(&self, x: &BigInt) -> BigInt {
        let mut terms = self.coefficients.iter();
        let mut result = match terms.next() {
            Some(c0) => c0.clone(),
            None => return BigInt::default(),
        };

        let mut power = SecretInt::new(BigInt::one());
        for coeff in terms {
            *power *= x;
            result += coeff * &*power;
        }
        result
    }
}
