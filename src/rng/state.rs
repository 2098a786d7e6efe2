//! Seeded generator backing a sharing session.
//!
//! # Security
//! The seed integer and key bytes are wiped once the generator is keyed. The generator
//! state itself is overwritten with a zero-keyed state on drop. Copies left by moving a
//! `RandomState` before it is dropped are not reached.

use core::fmt;
use num_bigint::{BigInt, RandBigInt};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::core::wipe::SecretInt;
use crate::entropy::{draw_hex, EntropyError, EntropySource};
use crate::format::parse_literal;
use crate::sharing::COEFF_BITS;

/// Seed size drawn from the entropy source. Never below the coefficient width.
pub const SEED_BITS: u64 = COEFF_BITS;

const SEED_BYTES: usize = ((SEED_BITS + 7) / 8) as usize;

/// Random state for one sharing session.
pub struct RandomState {
    rng: StdRng,
}

impl fmt::Debug for RandomState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomState")
            .field("seed_bits", &SEED_BITS)
            .field("state", &"***SENSITIVE***")
            .finish()
    }
}

impl RandomState {
    /// Seeds a new state from `source`.
    ///
    /// The seed is drawn as hex text and parsed back as a number before it keys the
    /// generator, so a source that yields unparseable text is caught here.
    pub fn init<S: EntropySource + ?Sized>(source: &mut S) -> Result<Self, EntropyError> {
        let text = draw_hex(source, SEED_BYTES)?;
        let seed = parse_literal(&text).map_err(|_| EntropyError::MalformedSeed)?;
        let seed = SecretInt::new(seed);

        let (_, magnitude) = seed.to_bytes_be();
        let magnitude = Zeroizing::new(magnitude);
        if magnitude.len() > SEED_BYTES {
            return Err(EntropyError::MalformedSeed);
        }

        let mut key = Zeroizing::new([0u8; SEED_BYTES]);
        key[SEED_BYTES - magnitude.len()..].copy_from_slice(&magnitude);

        log::debug!("random state seeded with {} bits from {}", SEED_BITS, source.name());
        Ok(Self { rng: StdRng::from_seed(*key) })
    }

    /// Returns a uniformly distributed integer in `[0, 2^bit_width)`.
    pub fn sample(&mut self, bit_width: u64) -> BigInt {
        BigInt::from(self.rng.gen_biguint(bit_width))
    }

    /// Ends the session and releases the generator.
    pub fn teardown(self) {
        log::debug!("random state released");
    }
}

impl Drop for RandomState {
    fn drop(&mut self) {
        // SAFETY: `self.rng` is a valid, aligned, initialized `StdRng`. The old value is
        // overwritten without being dropped, which is sound because `StdRng` owns no
        // heap memory or other resources.
        unsafe {
            core::ptr::write_volatile(&mut self.rng, StdRng::from_seed([0u8; SEED_BYTES]));
        }
        core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);
    }
}

impl RngCore for RandomState {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

impl CryptoRng for RandomState {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::replay::ReplaySource;
    use num_bigint::Sign;
    use num_traits::One;

    fn seeded(byte: u8) -> RandomState {
        let mut source = ReplaySource::new(alloc::vec![byte; SEED_BYTES]);
        RandomState::init(&mut source).unwrap()
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = seeded(0x5A);
        let mut b = seeded(0x5A);
        for _ in 0..8 {
            assert_eq!(a.sample(256), b.sample(256));
        }
    }

    #[test]
    fn test_different_seed_different_stream() {
        let mut a = seeded(0x01);
        let mut b = seeded(0x02);
        assert_ne!(a.sample(256), b.sample(256));
    }

    #[test]
    fn test_sample_width() {
        let mut state = seeded(0x33);
        let bound = BigInt::one() << 256u32;
        for _ in 0..64 {
            let v = state.sample(256);
            assert_ne!(v.sign(), Sign::Minus);
            assert!(v < bound);
        }
        assert!(state.sample(8) < BigInt::from(256));
    }

    #[test]
    fn test_all_zero_seed_is_accepted() {
        // A zero seed parses to a zero-length magnitude and must still key the generator.
        let mut state = seeded(0x00);
        let _ = state.sample(64);
        state.teardown();
    }

    #[test]
    fn test_teardown_leaves_other_sessions_intact() {
        let mut a = seeded(0x6B);
        let mut b = seeded(0x6B);
        let first = a.sample(256);
        a.teardown();

        assert_eq!(b.sample(256), first);
        drop(b);

        let mut fresh = seeded(0x6B);
        assert_eq!(fresh.sample(256), first);
    }

    #[test]
    fn test_init_consumes_exactly_the_seed() {
        let mut source = ReplaySource::new(alloc::vec![0x11; SEED_BYTES + 3]);
        RandomState::init(&mut source).unwrap();
        assert_eq!(source.remaining(), 3);
    }

    #[test]
    fn test_init_fails_on_exhausted_source() {
        let mut source = ReplaySource::new(alloc::vec![0x11; SEED_BYTES - 1]);
        assert_eq!(RandomState::init(&mut source).unwrap_err(), EntropyError::Exhausted);
    }
}
