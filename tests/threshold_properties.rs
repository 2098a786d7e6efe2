use std::collections::HashSet;

use num_bigint::{BigInt, Sign};
use proptest::prelude::*;

use shamir_keys::entropy::replay::ReplaySource;
use shamir_keys::entropy::sources::OsSource;
use shamir_keys::format::{parse_literal, secret_to_hex};
use shamir_keys::rng::RandomState;
use shamir_keys::sharing::{generate, reconstruct, Share, SharingError};

fn seeded(seed: [u8; 32]) -> RandomState {
    let mut source = ReplaySource::new(seed.to_vec());
    RandomState::init(&mut source).unwrap()
}

fn secret_strategy() -> impl Strategy<Value = BigInt> {
    (any::<bool>(), prop::collection::vec(any::<u8>(), 0..48)).prop_map(|(neg, bytes)| {
        let sign = if neg { Sign::Minus } else { Sign::Plus };
        BigInt::from_bytes_be(sign, &bytes)
    })
}

/// `n` distinct indices out of `0..len`, picked by rotating `pick`.
fn subset(shares: &[Share], n: usize, pick: usize) -> Vec<Share> {
    let len = shares.len();
    (0..n).map(|i| shares[(pick + i * 7) % len].clone()).collect::<Vec<_>>()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn any_threshold_subset_recovers_secret(
        seed in prop::array::uniform32(any::<u8>()),
        secret in secret_strategy(),
        (keys_req, n_keys) in (2usize..=8).prop_flat_map(|t| (Just(t), t..=12)),
        pick in any::<usize>(),
    ) {
        let mut state = seeded(seed);
        let shares = generate(&secret, keys_req, n_keys, &mut state).unwrap();
        prop_assert_eq!(shares.len(), n_keys);

        // Consecutive indices are distinct for any window no wider than the set.
        let start = pick % n_keys;
        let chosen: Vec<Share> =
            (0..keys_req).map(|i| shares[(start + i) % n_keys].clone()).collect();
        prop_assert_eq!(reconstruct(&chosen).unwrap(), secret);
    }

    #[test]
    fn one_share_short_never_recovers(
        seed in prop::array::uniform32(any::<u8>()),
        secret in secret_strategy(),
        keys_req in 3usize..=6,
    ) {
        let mut state = seeded(seed);
        let shares = generate(&secret, keys_req, keys_req + 2, &mut state).unwrap();
        let short = &shares[..keys_req - 1];
        prop_assert_ne!(reconstruct(short), Ok(secret));
    }

    #[test]
    fn share_text_roundtrips(
        seed in prop::array::uniform32(any::<u8>()),
        secret in secret_strategy(),
    ) {
        let mut state = seeded(seed);
        for share in generate(&secret, 2, 3, &mut state).unwrap() {
            let parsed: Share = share.to_string().parse().unwrap();
            prop_assert_eq!(parsed, share);
        }
    }
}

#[test]
fn fifty_of_fifty() {
    let secret = parse_literal("0x112233445566778899AABBCCDDEEFF").unwrap();
    let mut state = seeded([0xA7; 32]);
    let shares = generate(&secret, 50, 50, &mut state).unwrap();

    let recovered = reconstruct(&shares).unwrap();
    assert_eq!(secret_to_hex(&recovered), "0x112233445566778899aabbccddeeff");
    assert_ne!(reconstruct(&shares[..49]), Ok(secret));
}

#[test]
fn scattered_subsets_agree() {
    let secret = BigInt::from(987_654_321u64);
    let mut state = seeded([0x3E; 32]);
    let shares = generate(&secret, 4, 9, &mut state).unwrap();

    for pick in 0..9 {
        let chosen = subset(&shares, 4, pick);
        assert_eq!(reconstruct(&chosen).unwrap(), secret);
    }
}

#[test]
fn fresh_sessions_do_not_collide() {
    // 200 draws of 256 bits: a collision would be far off the birthday bound.
    let mut xs = HashSet::new();
    for _ in 0..20 {
        let mut source = OsSource::new();
        let mut state = RandomState::init(&mut source).unwrap();
        for share in generate(&BigInt::from(1), 2, 10, &mut state).unwrap() {
            assert!(xs.insert(share.x.clone()));
        }
        state.teardown();
    }
    assert_eq!(xs.len(), 200);
}

#[test]
fn mixed_sessions_are_rejected() {
    let a = generate(&BigInt::from(42), 3, 5, &mut seeded([0x01; 32])).unwrap();
    let b = generate(&BigInt::from(43), 3, 5, &mut seeded([0x02; 32])).unwrap();
    let mixed = vec![a[0].clone(), a[1].clone(), b[2].clone()];
    assert!(matches!(reconstruct(&mixed), Err(SharingError::NonIntegral(_))));
}

#[test]
fn malformed_share_text_is_rejected() {
    for text in ["not,a,share", "", "123", "12,3!", ","] {
        assert!(text.parse::<Share>().is_err(), "{:?} parsed", text);
    }
}
