//! Entropy acquisition.
//!
//! This module defines the interface through which the rest of the crate obtains
//! seed material, and the sources that implement it.
//!
//! # Design
//! - **Fail-Hard**: A source that cannot deliver exactly the requested number of bytes
//!   returns an error. There is no fallback to a non-cryptographic generator.
//! - **Hardened Open**: The device source refuses symlinks, controlling terminals and
//!   anything that is not a character device.
//! - **Textual Hand-off**: Seed bytes leave this module as `0x`-prefixed hex text, which
//!   the random state parses back into a number.

#[cfg(unix)]
pub mod device;
pub mod os;
pub mod replay;
pub mod sources;

use alloc::string::String;
use zeroize::Zeroizing;

/// Default path of the operating system's cryptographic random device.
pub const DEFAULT_DEVICE: &str = "/dev/urandom";

/// Error types for entropy collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntropyError {
    /// The device could not be opened.
    #[error("failed to open {path}: {reason}")]
    OpenFailed { path: String, reason: String },
    /// The path exists but is not a character device.
    #[error("{path} is not a character device")]
    NotADevice { path: String },
    /// The read itself failed.
    #[error("failed to read from {path}: {reason}")]
    ReadFailed { path: String, reason: String },
    /// Fewer bytes than requested were delivered.
    #[error("short read: wanted {wanted} bytes, got {got}")]
    ShortRead { wanted: usize, got: usize },
    /// Closing the device failed.
    #[error("failed to close {path}: {reason}")]
    CloseFailed { path: String, reason: String },
    /// Source is exhausted (e.g., fixed buffer).
    #[error("entropy source exhausted")]
    Exhausted,
    /// The drawn seed text could not be parsed as a number.
    #[error("seed text is not a valid number")]
    MalformedSeed,
    /// Platform not supported.
    #[error("entropy source not supported on this platform")]
    NotSupported,
}

/// A trait for entropy sources.
pub trait EntropySource {
    /// Returns a unique identifier for the source.
    fn name(&self) -> &'static str;

    /// Fills `dest` completely with random bytes from the source.
    ///
    /// # Returns
    /// * `Ok(())` when every byte of `dest` was written.
    /// * `Err(EntropyError)` otherwise. Partial output must not be used.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

/// Draws `n_bytes` from `source` and renders them as `0x`-prefixed hex text.
///
/// The text is the form consumed by the numeric seed parser. Both the raw bytes and
/// the returned text are wiped when dropped.
pub fn draw_hex<S: EntropySource + ?Sized>(
    source: &mut S,
    n_bytes: usize,
) -> Result<Zeroizing<String>, EntropyError> {
    let mut buf = Zeroizing::new(alloc::vec![0u8; n_bytes]);
    source.fill(&mut buf)?;
    log::debug!("drew {} bytes from {}", n_bytes, source.name());

    let mut text = Zeroizing::new(String::with_capacity(2 + 2 * n_bytes));
    text.push_str("0x");
    text.push_str(&hex::encode(buf.as_slice()));
    Ok(text)
}
