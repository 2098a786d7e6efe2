//! Share generation.
//!
//! Builds a random polynomial with the secret as constant term and evaluates it at
//! `n_keys` random abscissae.
//!
//! # Randomness Order
//! All `keys_req - 1` coefficients are drawn first, then one abscissa per share, in
//! share order. A session seeded identically therefore yields identical shares.
//!
//! # Abscissa Collisions
//! With `resample_duplicate_abscissae` set (the default), an abscissa equal to zero
//! or to an earlier share's is redrawn. With it cleared, abscissae are used as drawn
//! and a collision makes one of the two shares useless for reconstruction.

use alloc::vec::Vec;
use std::collections::HashSet;
use num_bigint::BigInt;
use num_traits::Zero;

use crate::config::SharingConfig;
use crate::rng::RandomState;
use super::polynomial::Polynomial;
use super::{Share, SharingError, MIN_KEYS_REQ};

/// Splits `secret` into `n_keys` shares, any `keys_req` of which recover it.
///
/// Uses [`SharingConfig::default`].
///
/// # Panics
/// If `keys_req < 2` or `keys_req > n_keys`. Validate external input with
/// [`super::validate_threshold`] first.
pub fn generate(
    secret: &BigInt,
    keys_req: usize,
    n_keys: usize,
    state: &mut RandomState,
) -> Result<Vec<Share>, SharingError> {
    generate_with(secret, keys_req, n_keys, state, &SharingConfig::default())
}

/// Same as [`generate`], with explicit configuration.
///
/// # Returns
/// * `Ok(Vec<Share>)` with exactly `n_keys` shares.
/// * `Err(SharingError)` on allocation failure or when the abscissa space is too
///   small for `n_keys` distinct non-zero values. Nothing is returned partially.
///
/// # Panics
/// If `keys_req < 2` or `keys_req > n_keys`.
pub fn generate_with(
    secret: &BigInt,
    keys_req: usize,
    n_keys: usize,
    state: &mut RandomState,
    config: &SharingConfig,
) -> Result<Vec<Share>, SharingError> {
    assert!(
        keys_req >= MIN_KEYS_REQ,
        "keys_req ({}) must be at least {}",
        keys_req,
        MIN_KEYS_REQ
    );
    assert!(
        keys_req <= n_keys,
        "keys_req ({}) must not exceed n_keys ({})",
        keys_req,
        n_keys
    );

    if config.resample_duplicate_abscissae
        && config.coeff_bits < 64
        && n_keys as u64 >= 1u64 << config.coeff_bits
    {
        return Err(SharingError::AbscissaSpaceExhausted { bits: config.coeff_bits, n_keys });
    }

    let polynomial = Polynomial::random(secret, keys_req - 1, config.coeff_bits, state)?;
    let shares = evaluate_shares(&polynomial, n_keys, state, config)?;

    log::debug!("generated {} shares, threshold {}", shares.len(), polynomial.len());
    Ok(shares)
}

/// Evaluates `polynomial` at `n_keys` fresh abscissae.
pub(crate) fn evaluate_shares(
    polynomial: &Polynomial,
    n_keys: usize,
    state: &mut RandomState,
    config: &SharingConfig,
) -> Result<Vec<Share>, SharingError> {
    let mut shares = Vec::new();
    shares
        .try_reserve_exact(n_keys)
        .map_err(|_| SharingError::Allocation("share storage"))?;

    let mut seen = HashSet::new();
    for _ in 0..n_keys {
        let x = draw_abscissa(state, config, &mut seen);
        let y = polynomial.evaluate(&x);
        shares.push(Share::new(x, y));
    }
    Ok(shares)
}

fn draw_abscissa(
    state: &mut RandomState,
    config: &SharingConfig,
    seen: &mut HashSet<BigInt>,
) -> BigInt {
    loop {
        let x = state.sample(config.coeff_bits);
        if !config.resample_duplicate_abscissae {
            return x;
        }
        if !x.is_zero() && seen.insert(x.clone()) {
            return x;
        }
        log::warn!("redrawing a zero or repeated share abscissa");
    }
}
