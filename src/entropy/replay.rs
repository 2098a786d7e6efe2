//! Replayed Entropy Source.
//!
//! Hands back caller-supplied bytes in order. Seeding a random state from a replay
//! source makes a sharing session reproducible, which is what the tests rely on.
//! It must never be used for real secrets.

use alloc::vec::Vec;
use zeroize::Zeroizing;
use super::{EntropyError, EntropySource};

/// Source that replays a fixed byte buffer.
pub struct ReplaySource {
    buffer: Zeroizing<Vec<u8>>,
    cursor: usize,
}

impl ReplaySource {
    /// Creates a source that will hand out `bytes` and then report exhaustion.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { buffer: Zeroizing::new(bytes), cursor: 0 }
    }

    /// Appends more bytes to the end of the replay buffer.
    pub fn add_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Number of bytes not yet handed out.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.cursor
    }
}

impl EntropySource for ReplaySource {
    fn name(&self) -> &'static str {
        "Replay"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        if self.remaining() < dest.len() {
            return Err(EntropyError::Exhausted);
        }
        let end = self.cursor + dest.len();
        dest.copy_from_slice(&self.buffer[self.cursor..end]);
        self.cursor = end;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_source() {
        let mut source = ReplaySource::new(alloc::vec![0x01, 0x02, 0x03]);
        source.add_bytes(&[0x04]);

        let mut buf = [0u8; 2];
        assert!(source.fill(&mut buf).is_ok());
        assert_eq!(buf, [0x01, 0x02]);

        assert!(source.fill(&mut buf).is_ok());
        assert_eq!(buf, [0x03, 0x04]);

        assert_eq!(source.remaining(), 0);
        assert_eq!(source.fill(&mut buf), Err(EntropyError::Exhausted));
    }

    #[test]
    fn test_failed_fill_consumes_nothing() {
        let mut source = ReplaySource::new(alloc::vec![0xAB]);
        let mut buf = [0u8; 4];
        assert!(source.fill(&mut buf).is_err());
        assert_eq!(source.remaining(), 1);
    }
}
