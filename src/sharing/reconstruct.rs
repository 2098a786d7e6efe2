//! Secret reconstruction from shares.
//!
//! This module implements Lagrange interpolation at x=0 over the rationals to
//! recover the constant term of the sharing polynomial.
//!
//! The sum is carried as an exact fraction over a common denominator and checked for
//! integrality with one division at the end. Shares of one polynomial always give an
//! integer; a fractional result means the set mixes sessions or contains a corrupted
//! share, and is reported rather than truncated.
//!
//! Two specialised routines cover the degree-1 case and are kept as cross-checks for
//! the general path:
//! - [`reconstruct_two_point`]: `b = y0 - x0 * ydiff / xdiff` with an explicit
//!   divisibility test.
//! - [`reconstruct_two_point_rational`]: the slope as a reduced fraction, scaled by `x0`.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};
use zeroize::Zeroizing;

use crate::core::rational::{Fraction, FractionSum};
use crate::core::wipe::SecretInt;
use super::{InconsistencyCheck, Share, SharingError, MIN_KEYS_REQ};

/// Reconstructs the secret from a set of shares.
///
/// Every share takes part in the interpolation, so passing more than the threshold
/// is allowed and only tightens the consistency check.
///
/// # Returns
/// * `Ok(BigInt)` - The reconstructed secret.
/// * `Err(SharingError::NotEnoughShares)` - Fewer than two shares.
/// * `Err(SharingError::DuplicateAbscissa)` - Two shares share an x-coordinate.
/// * `Err(SharingError::NonIntegral)` - The shares do not lie on one integer polynomial.
pub fn reconstruct(shares: &[Share]) -> Result<BigInt, SharingError> {
    if shares.len() < MIN_KEYS_REQ {
        return Err(SharingError::NotEnoughShares { needed: MIN_KEYS_REQ, got: shares.len() });
    }

    // secret = sum_i y_i * prod_{j != i} x_j / (x_j - x_i)
    let mut sum = Zeroizing::new(FractionSum::new());
    for (i, share_i) in shares.iter().enumerate() {
        let mut num = SecretInt::new(share_i.y.clone());
        let mut den = BigInt::one();
        for (j, share_j) in shares.iter().enumerate() {
            if i == j {
                continue;
            }
            let diff = &share_j.x - &share_i.x;
            if diff.is_zero() {
                return Err(SharingError::DuplicateAbscissa { first: i.min(j), second: i.max(j) });
            }
            *num *= &share_j.x;
            den *= diff;
        }
        sum.add(&num, &den);
    }

    match sum.to_integer() {
        Some(secret) => {
            log::debug!("reconstructed secret from {} shares", shares.len());
            Ok(secret)
        }
        None => Err(inconsistent(InconsistencyCheck::LagrangeSum)),
    }
}

/// Degree-1 reconstruction by exact integer division.
pub fn reconstruct_two_point(k0: &Share, k1: &Share) -> Result<BigInt, SharingError> {
    let xdiff = &k1.x - &k0.x;
    if xdiff.is_zero() {
        return Err(SharingError::DuplicateAbscissa { first: 0, second: 1 });
    }
    let ydiff = SecretInt::new(&k1.y - &k0.y);

    let product = SecretInt::new(&k0.x * &*ydiff);
    if !product.is_multiple_of(&xdiff) {
        return Err(inconsistent(InconsistencyCheck::Divisibility));
    }

    Ok(&k0.y - &*product / &xdiff)
}

/// Degree-1 reconstruction through the slope as an exact fraction.
pub fn reconstruct_two_point_rational(k0: &Share, k1: &Share) -> Result<BigInt, SharingError> {
    let slope = Fraction::new(&k1.y - &k0.y, &k1.x - &k0.x)
        .ok_or(SharingError::DuplicateAbscissa { first: 0, second: 1 })?;
    let slope = Zeroizing::new(slope);

    let offset = (&*slope * &k0.x)
        .to_integer()
        .ok_or_else(|| inconsistent(InconsistencyCheck::SlopeDenominator))?;

    Ok(&k0.y - offset)
}

fn inconsistent(check: InconsistencyCheck) -> SharingError {
    log::warn!("share set rejected: {}", check);
    SharingError::NonIntegral(check)
}
