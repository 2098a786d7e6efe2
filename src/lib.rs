//! (t, n) threshold secret sharing over arbitrary-precision integers.
//!
//! A secret integer is split into `n` shares such that any `t` of them give the
//! secret back exactly, while fewer than `t` do not.
//!
//! # Modules
//! - `entropy`: OS-backed entropy sources behind the `EntropySource` trait.
//! - `rng`: the seeded, session-owned `RandomState`.
//! - `core`: exact rational arithmetic and in-place wiping of big integers.
//! - `sharing`: shares, generation and Lagrange reconstruction.
//! - `format`: base-62, numeric literal and `0x` text forms.
//! - `config`: `SharingConfig`.
//!
//! # Example
//! ```no_run
//! use num_bigint::BigInt;
//! use shamir_keys::entropy::sources::platform_source;
//! use shamir_keys::rng::RandomState;
//! use shamir_keys::sharing::{generate, reconstruct};
//!
//! let mut source = platform_source("/dev/urandom");
//! let mut state = RandomState::init(source.as_mut()).unwrap();
//! let secret = BigInt::from(42);
//! let shares = generate(&secret, 3, 5, &mut state).unwrap();
//! state.teardown();
//!
//! assert_eq!(reconstruct(&shares[1..4]).unwrap(), secret);
//! ```

extern crate alloc;

pub mod config;
pub mod core;
pub mod entropy;
pub mod format;
pub mod rng;
pub mod sharing;

pub use config::{ShareEncoding, SharingConfig};
pub use sharing::{Share, SharingError};
