//! Text representations crossing the command-line boundary.
//!
//! # Components
//! - `radix`: base-62 codec used for the canonical share form.
//! - `literal`: self-describing numeric literals (`0x…`, `0b…`, `0…`, decimal) and
//!   `0x`-prefixed rendering of recovered secrets.

pub mod literal;
pub mod radix;

pub use literal::{parse_hex, parse_literal, secret_to_hex};
pub use radix::{from_base62, to_base62};

/// Errors raised while parsing numbers or shares from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Nothing to parse (empty string or a bare sign/prefix).
    #[error("empty number")]
    Empty,
    /// A character that is not a digit in the expected radix.
    #[error("invalid digit {digit:?} for radix {radix}")]
    InvalidDigit { digit: char, radix: u32 },
    /// Share text without the x/y delimiter.
    #[error("missing {0:?} delimiter between x and y")]
    MissingDelimiter(char),
    /// Share text with more than two fields.
    #[error("expected 2 fields, found {0}")]
    TooManyFields(usize),
}
