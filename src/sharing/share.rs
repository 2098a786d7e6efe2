//! Secret Share Definition.
//!
//! A share is a point $(x, y)$ on the polynomial used to hide the secret.
//! - $x$: a random abscissa drawn for this share.
//! - $y$: the exact evaluation of the polynomial at $x$.
//!
//! # Text Forms
//! - Canonical: `<x><delimiter><y>`, both in base 62, delimiter `,` by default.
//!   This is the interchange form and parses back with [`Share::parse`].
//! - Labeled: `x=<decimal>, y=<decimal>`. Meant for eyes, not for parsing.
//!
//! # Security
//! - Implements `Zeroize` and `ZeroizeOnDrop`: `y` is wiped in place on drop. The limits
//!   of [`crate::core::wipe`] apply.
//! - `Debug` implementation redacts the value.

use alloc::format;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;
use num_bigint::BigInt;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::ShareEncoding;
use crate::core::wipe::wipe;
use crate::format::{from_base62, to_base62, FormatError};

/// Default separator between x and y.
pub const DEFAULT_DELIMITER: char = ',';

/// A share of a secret.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Share {
    /// The x-coordinate.
    /// Public information, but must differ between shares of one set.
    pub x: BigInt,

    /// The y-coordinate, P(x).
    /// Highly sensitive information.
    pub y: BigInt,
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("x_bits", &self.x.bits())
            .field("y", &"***SENSITIVE***")
            .finish()
    }
}

impl Zeroize for Share {
    fn zeroize(&mut self) {
        wipe(&mut self.y);
    }
}

impl Drop for Share {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for Share {}

impl Share {
    /// Creates a share owning `x` and `y`.
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Self { x, y }
    }

    /// Renders the share using `encoding`.
    pub fn to_text(&self, encoding: ShareEncoding, delimiter: char) -> String {
        match encoding {
            ShareEncoding::Base62 => {
                format!("{}{}{}", to_base62(&self.x), delimiter, to_base62(&self.y))
            }
            ShareEncoding::Labeled => format!("x={}, y={}", self.x, self.y),
        }
    }

    /// Parses the canonical base-62 form.
    pub fn parse(text: &str, delimiter: char) -> Result<Self, FormatError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(FormatError::Empty);
        }

        let fields = text.split(delimiter).count();
        let (x, y) = match text.split_once(delimiter) {
            None => return Err(FormatError::MissingDelimiter(delimiter)),
            Some(_) if fields > 2 => return Err(FormatError::TooManyFields(fields)),
            Some(pair) => pair,
        };

        Ok(Self::new(from_base62(x)?, from_base62(y)?))
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(ShareEncoding::Base62, DEFAULT_DELIMITER))
    }
}

impl FromStr for Share {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Share::parse(s, DEFAULT_DELIMITER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn share(x: i64, y: i64) -> Share {
        Share::new(BigInt::from(x), BigInt::from(y))
    }

    #[test]
    fn test_canonical_text() {
        let s = share(62, 61);
        assert_eq!(s.to_string(), "10,z");
        assert_eq!("10,z".parse::<Share>().unwrap(), s);
        assert_eq!(Share::parse(" 10;z\n", ';').unwrap(), s);
        assert_eq!(share(5, -10).to_text(ShareEncoding::Base62, ':'), "5:-A");
    }

    #[test]
    fn test_labeled_text() {
        assert_eq!(share(7, 1234).to_text(ShareEncoding::Labeled, ','), "x=7, y=1234");
    }

    #[test]
    fn test_malformed_text() {
        assert_eq!("".parse::<Share>(), Err(FormatError::Empty));
        assert_eq!("123".parse::<Share>(), Err(FormatError::MissingDelimiter(',')));
        assert_eq!("not,a,share".parse::<Share>(), Err(FormatError::TooManyFields(3)));
        assert_eq!(",5".parse::<Share>(), Err(FormatError::Empty));
        assert_eq!("5,".parse::<Share>(), Err(FormatError::Empty));
        assert_eq!(
            "12,3$".parse::<Share>(),
            Err(FormatError::InvalidDigit { digit: '$', radix: 62 })
        );
    }

    #[test]
    fn test_debug_redaction() {
        let s = share(5, 0x5eed_5eed);
        let debug_str = format!("{:?}", s);
        assert!(debug_str.contains("***SENSITIVE***"));
        assert!(!debug_str.contains(&0x5eed_5eedu32.to_string()));
    }

    #[test]
    fn test_zeroize_clears_value() {
        let mut s = share(3, 999);
        s.zeroize();
        assert_eq!(s.y, BigInt::from(0));
        assert_eq!(s.x, BigInt::from(3));
    }
}
