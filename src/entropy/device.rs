//! Operating System Random Device Source.
//!
//! Reads raw bytes from a character device such as `/dev/urandom`.
//!
//! # Security
//! - The device is opened with `O_NOCTTY | O_NOFOLLOW`, so a symlink planted at the
//!   configured path is refused instead of followed.
//! - The opened file must be a character device. Regular files and FIFOs are rejected.
//! - A short read or a failed close is reported, never silently accepted.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read};
use std::os::unix::fs::{FileTypeExt, OpenOptionsExt};
use std::os::unix::io::IntoRawFd;

use alloc::string::{String, ToString};
use super::{EntropyError, EntropySource, DEFAULT_DEVICE};

/// Random device entropy source.
#[derive(Debug, Clone)]
pub struct DeviceSource {
    path: String,
}

impl DeviceSource {
    /// Creates a source reading from `path`.
    ///
    /// The device is opened anew on every [`EntropySource::fill`] call.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    fn open(&self) -> Result<File, EntropyError> {
        let file = OpenOptions::new()
            .read(true)
            .custom_flags(libc::O_NOCTTY | libc::O_NOFOLLOW)
            .open(&self.path)
            .map_err(|e| EntropyError::OpenFailed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        let meta = file.metadata().map_err(|e| EntropyError::OpenFailed {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        if !meta.file_type().is_char_device() {
            return Err(EntropyError::NotADevice { path: self.path.clone() });
        }

        Ok(file)
    }

    fn close(&self, file: File) -> Result<(), EntropyError> {
        let fd = file.into_raw_fd();
        // SAFETY: `fd` was just released from an owning `File` and is closed exactly once.
        if unsafe { libc::close(fd) } == -1 {
            return Err(EntropyError::CloseFailed {
                path: self.path.clone(),
                reason: std::io::Error::last_os_error().to_string(),
            });
        }
        Ok(())
    }
}

impl Default for DeviceSource {
    fn default() -> Self {
        Self::new(DEFAULT_DEVICE)
    }
}

impl EntropySource for DeviceSource {
    fn name(&self) -> &'static str {
        "OsDevice"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let mut file = self.open()?;

        let read = loop {
            match file.read(dest) {
                Ok(n) => break Ok(n),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    break Err(EntropyError::ReadFailed {
                        path: self.path.clone(),
                        reason: e.to_string(),
                    })
                }
            }
        };

        // Release the descriptor on every path before looking at the read.
        let closed = self.close(file);
        let got = read?;
        closed?;

        if got != dest.len() {
            return Err(EntropyError::ShortRead { wanted: dest.len(), got });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_urandom() {
        let mut source = DeviceSource::default();
        let mut buf = [0u8; 32];
        source.fill(&mut buf).expect("reading /dev/urandom failed");
        assert!(buf.iter().any(|&b| b != 0), "32 zero bytes from /dev/urandom");
    }

    #[test]
    fn test_missing_device() {
        let mut source = DeviceSource::new("/nonexistent/random-device");
        let mut buf = [0u8; 8];
        assert!(matches!(source.fill(&mut buf), Err(EntropyError::OpenFailed { .. })));
    }

    #[test]
    fn test_short_read() {
        // /dev/null is a character device that always reads as end of file.
        let mut source = DeviceSource::new("/dev/null");
        let mut buf = [0u8; 8];
        assert_eq!(source.fill(&mut buf), Err(EntropyError::ShortRead { wanted: 8, got: 0 }));
    }

    #[test]
    fn test_rejects_regular_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), [0xAA; 64]).unwrap();

        let mut source = DeviceSource::new(file.path().to_string_lossy().into_owned());
        let mut buf = [0u8; 8];
        assert!(matches!(source.fill(&mut buf), Err(EntropyError::NotADevice { .. })));
    }

    #[test]
    fn test_refuses_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let link = dir.path().join("urandom");
        std::os::unix::fs::symlink(DEFAULT_DEVICE, &link).unwrap();

        let mut source = DeviceSource::new(link.to_string_lossy().into_owned());
        let mut buf = [0u8; 8];
        assert!(matches!(source.fill(&mut buf), Err(EntropyError::OpenFailed { .. })));
    }
}
