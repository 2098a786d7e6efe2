//! Platform CSPRNG Source.
//!
//! Uses the `getrandom` crate, which maps to `getrandom(2)`, `BCryptGenRandom` or the
//! equivalent system call. This is the source used on platforms without a random
//! device path.

use alloc::string::{String, ToString};

use super::{EntropyError, EntropySource};

/// Entropy from the operating system's CSPRNG system call.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsSource;

impl OsSource {
    pub fn new() -> Self {
        Self
    }
}

impl EntropySource for OsSource {
    fn name(&self) -> &'static str {
        "OsSyscall"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        getrandom::getrandom(dest).map_err(|e| {
            log::error!("getrandom failed: {}", e);
            classify(e)
        })
    }
}

fn classify(e: getrandom::Error) -> EntropyError {
    if e == getrandom::Error::UNSUPPORTED {
        EntropyError::NotSupported
    } else {
        EntropyError::ReadFailed { path: String::from("getrandom"), reason: e.to_string() }
    }
}
