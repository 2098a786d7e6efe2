//! Base-62 codec for arbitrary-precision integers.
//!
//! Digit order is `0-9`, `A-Z`, `a-z`: value 10 is `A`, value 36 is `a`, value 61
//! is `z`. Negative numbers carry a leading `-`.

use alloc::string::String;
use alloc::vec::Vec;
use num_bigint::{BigInt, BigUint, Sign};
use super::FormatError;

const RADIX: u32 = 62;

fn digit_char(value: u8) -> char {
    match value {
        0..=9 => (b'0' + value) as char,
        10..=35 => (b'A' + value - 10) as char,
        _ => (b'a' + value - 36) as char,
    }
}

fn digit_value(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'A'..='Z' => Some(c as u8 - b'A' + 10),
        'a'..='z' => Some(c as u8 - b'a' + 36),
        _ => None,
    }
}

/// Renders `n` in base 62.
pub fn to_base62(n: &BigInt) -> String {
    let digits = n.magnitude().to_radix_be(RADIX);
    let mut out = String::with_capacity(digits.len() + 1);
    if n.sign() == Sign::Minus {
        out.push('-');
    }
    out.extend(digits.into_iter().map(digit_char));
    out
}

/// Parses base-62 text produced by [`to_base62`].
pub fn from_base62(text: &str) -> Result<BigInt, FormatError> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if body.is_empty() {
        return Err(FormatError::Empty);
    }

    let digits = body
        .chars()
        .map(|c| digit_value(c).ok_or(FormatError::InvalidDigit { digit: c, radix: RADIX }))
        .collect::<Result<Vec<u8>, _>>()?;

    // Every digit was range-checked above, so this cannot fail.
    let magnitude = BigUint::from_radix_be(&digits, RADIX).ok_or(FormatError::Empty)?;
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    Ok(BigInt::from_biguint(sign, magnitude))
}
