//! Configuration for sharing sessions.
//!
//! Defines the structure for user-configurable settings.

use alloc::string::String;
use crate::entropy::DEFAULT_DEVICE;
use crate::sharing::COEFF_BITS;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How shares are rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShareEncoding {
    /// `<x><delimiter><y>` with both values in base 62. Round-trips through parsing.
    #[default]
    Base62,
    /// `x=<decimal>, y=<decimal>`. For inspection only, not parsed back.
    Labeled,
}

/// Main configuration structure for a sharing session.
///
/// This struct should be populated by the host application (CLI) and passed
/// to the respective modules.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SharingConfig {
    /// Bit width of every random coefficient and every share abscissa.
    pub coeff_bits: u64,

    /// Rendering used for shares.
    pub share_encoding: ShareEncoding,

    /// Separator between x and y in the base-62 form.
    pub delimiter: char,

    /// Random device read when seeding a session (unix only).
    pub entropy_device: String,

    /// Draw a fresh abscissa when one repeats an earlier share's or is zero.
    pub resample_duplicate_abscissae: bool,
}

impl Default for SharingConfig {
    fn default() -> Self {
        Self {
            coeff_bits: COEFF_BITS,
            share_encoding: ShareEncoding::Base62,
            delimiter: ',',
            entropy_device: String::from(DEFAULT_DEVICE),
            resample_duplicate_abscissae: true,
        }
    }
}
