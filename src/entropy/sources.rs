//! Standard Entropy Sources Registry.
//!
//! Re-exports available entropy sources and picks the platform default.

#[cfg(unix)]
pub use super::device::DeviceSource;
pub use super::os::OsSource;
pub use super::replay::ReplaySource;

use alloc::boxed::Box;
use super::EntropySource;

/// Returns the strongest source available for `device`.
///
/// On unix this is the hardened random device at `device`. Elsewhere the path is
/// ignored and the platform CSPRNG system call is used.
pub fn platform_source(device: &str) -> Box<dyn EntropySource> {
    #[cfg(unix)]
    {
        Box::new(DeviceSource::new(device))
    }
    #[cfg(not(unix))]
    {
        log::debug!("no device support, ignoring {}", device);
        Box::new(OsSource::new())
    }
}
