//! Threshold secret sharing over the integers.
//!
//! A secret `s` becomes the constant term of a random polynomial of degree `t - 1`
//! with integer coefficients. Each share is a point `(x, P(x))` at a random abscissa.
//! Any `t` shares determine `P`, and Lagrange interpolation at zero gives back `s`.
//!
//! # Components
//! - `share`: the `(x, y)` share and its text forms.
//! - `polynomial`: the transient polynomial built during generation.
//! - `generate`: coefficient sampling and share evaluation.
//! - `reconstruct`: Lagrange interpolation, plus the two-point special cases.
//!
//! # Security
//! - **Zeroization**: Coefficients and share values are overwritten in place on drop.
//!   Temporaries created inside `num-bigint` arithmetic are not reached.
//! - **Integer Arithmetic**: Polynomials live over `Z`, not a prime field. Share
//!   magnitudes therefore leak bounds on the secret. Callers who need
//!   information-theoretic hiding must not rely on this scheme.
//! - **Consistency Check**: Reconstruction rejects a non-integral result instead of
//!   truncating it, which catches most mixed or corrupted share sets.

pub mod share;
pub mod generate;
pub mod reconstruct;
pub(crate) mod polynomial;

pub use generate::{generate, generate_with};
pub use reconstruct::{reconstruct, reconstruct_two_point, reconstruct_two_point_rational};
pub use share::Share;

use alloc::vec::Vec;
use core::fmt;
use num_bigint::BigInt;

use crate::config::SharingConfig;
use crate::entropy::EntropyError;
use crate::rng::RandomState;

/// Bit width of random coefficients and abscissae.
pub const COEFF_BITS: u64 = 256;

/// Smallest accepted threshold.
pub const MIN_KEYS_REQ: usize = 2;

/// Which consistency check rejected a share set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InconsistencyCheck {
    /// `x0 * (y1 - y0)` is not a multiple of `x1 - x0`.
    Divisibility,
    /// The slope times `x0` kept a denominator other than one.
    SlopeDenominator,
    /// The Lagrange sum at zero is not an integer.
    LagrangeSum,
}

impl fmt::Display for InconsistencyCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InconsistencyCheck::Divisibility => write!(f, "x0 * ydiff is not divisible by xdiff"),
            InconsistencyCheck::SlopeDenominator => write!(f, "slope * x0 is not an integer"),
            InconsistencyCheck::LagrangeSum => {
                write!(f, "interpolated value at zero is not an integer")
            }
        }
    }
}

/// Errors for sharing operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SharingError {
    /// Threshold configuration error (k > n, k < 2).
    #[error("invalid threshold: need 2 <= keys_req ({keys_req}) <= n_keys ({n_keys})")]
    InvalidThreshold { keys_req: usize, n_keys: usize },
    /// Not enough shares to reconstruct.
    #[error("not enough shares: need {needed}, got {got}")]
    NotEnoughShares { needed: usize, got: usize },
    /// Two shares have the same x-coordinate.
    #[error("shares {first} and {second} have the same x-coordinate")]
    DuplicateAbscissa { first: usize, second: usize },
    /// The shares do not lie on one integer polynomial.
    #[error("inconsistent shares: {0}")]
    NonIntegral(InconsistencyCheck),
    /// Too few distinct non-zero `bits`-wide abscissae exist for `n_keys` shares.
    #[error("cannot draw {n_keys} distinct non-zero {bits}-bit abscissae")]
    AbscissaSpaceExhausted { bits: u64, n_keys: usize },
    /// Share or coefficient storage could not be allocated.
    #[error("failed to allocate {0}")]
    Allocation(&'static str),
    /// Random number generator failure.
    #[error("entropy failure: {0}")]
    Entropy(#[from] EntropyError),
}

/// Checks threshold parameters without panicking.
///
/// [`generate`] treats bad parameters as a caller bug and panics, so anything taking
/// `keys_req` and `n_keys` from outside should run them through here first.
pub fn validate_threshold(keys_req: usize, n_keys: usize) -> Result<(), SharingError> {
    if keys_req < MIN_KEYS_REQ || keys_req > n_keys {
        return Err(SharingError::InvalidThreshold { keys_req, n_keys });
    }
    Ok(())
}

/// Trait for Secret Sharing Schemes.
pub trait SecretSharingScheme {
    type Share;
    type Secret;
    type Error;

    /// Splits a secret into n shares with threshold k.
    fn split(
        &self,
        secret: &Self::Secret,
        k: usize,
        n: usize,
        state: &mut RandomState,
    ) -> Result<Vec<Self::Share>, Self::Error>;

    /// Reconstructs a secret from at least k shares.
    fn reconstruct(&self, shares: &[Self::Share], k: usize) -> Result<Self::Secret, Self::Error>;
}

/// Shamir's scheme over arbitrary-precision integers.
#[derive(Debug, Clone, Default)]
pub struct IntegerShamir {
    config: SharingConfig,
}

impl IntegerShamir {
    pub fn new(config: SharingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SharingConfig {
        &self.config
    }
}

impl SecretSharingScheme for IntegerShamir {
    type Share = Share;
    type Secret = BigInt;
    type Error = SharingError;

    fn split(
        &self,
        secret: &BigInt,
        k: usize,
        n: usize,
        state: &mut RandomState,
    ) -> Result<Vec<Share>, SharingError> {
        validate_threshold(k, n)?;
        generate_with(secret, k, n, state, &self.config)
    }

    fn reconstruct(&self, shares: &[Share], k: usize) -> Result<BigInt, SharingError> {
        if shares.len() < k {
            return Err(SharingError::NotEnoughShares { needed: k, got: shares.len() });
        }
        reconstruct::reconstruct(shares)
    }
}
