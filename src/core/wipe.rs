//! Best-effort wiping of arbitrary-precision integers.
//!
//! `num-bigint` does not implement `Zeroize`. [`wipe`] overwrites the limb buffer of a
//! value in place with zero digits of the same length, then sets the value to zero.
//!
//! # Limits
//! Only the buffer the value owns at the time of the call is overwritten. Buffers left
//! behind by earlier reallocation, and temporaries created by arithmetic, are not
//! reached.

use core::fmt;
use core::ops::{Deref, DerefMut};
use num_bigint::{BigInt, Sign};
use num_traits::Zero;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Overwrites `value` with zero digits in place, leaving it equal to zero.
pub fn wipe(value: &mut BigInt) {
    let digits = ((value.bits() + 31) / 32) as usize;
    if digits > 0 {
        // A non-zero sign routes through the digit copy instead of a bare clear.
        let zeros = alloc::vec![0u32; digits];
        value.assign_from_slice(Sign::Plus, &zeros);
    }
    value.set_zero();
}

/// A `BigInt` that is wiped with [`wipe`] when dropped.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SecretInt(BigInt);

impl SecretInt {
    pub fn new(value: BigInt) -> Self {
        Self(value)
    }

    /// Moves the value out, leaving zero behind.
    pub fn into_inner(mut self) -> BigInt {
        core::mem::take(&mut self.0)
    }
}

impl Deref for SecretInt {
    type Target = BigInt;

    fn deref(&self) -> &BigInt {
        &self.0
    }
}

impl DerefMut for SecretInt {
    fn deref_mut(&mut self) -> &mut BigInt {
        &mut self.0
    }
}

impl fmt::Debug for SecretInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SecretInt").field(&"***SENSITIVE***").finish()
    }
}

impl Zeroize for SecretInt {
    fn zeroize(&mut self) {
        wipe(&mut self.0);
    }
}

impl Drop for SecretInt {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for SecretInt {}
