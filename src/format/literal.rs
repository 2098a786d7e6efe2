//! Numeric literal parsing and secret rendering.
//!
//! A literal picks its own base from its prefix:
//! - `0x` / `0X`: hexadecimal
//! - `0b` / `0B`: binary
//! - leading `0`: octal
//! - anything else: decimal
//!
//! An optional leading `-` or `+` comes before the prefix. Surrounding whitespace is
//! ignored.

use alloc::string::String;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Num;
use super::FormatError;

fn parse_digits(body: &str, radix: u32) -> Result<BigUint, FormatError> {
    if body.is_empty() {
        return Err(FormatError::Empty);
    }
    if let Some(digit) = body.chars().find(|c| !c.is_digit(radix)) {
        return Err(FormatError::InvalidDigit { digit, radix });
    }
    BigUint::from_str_radix(body, radix).map_err(|_| FormatError::Empty)
}

fn split_sign(text: &str) -> (Sign, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (Sign::Minus, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (Sign::Plus, rest)
    } else {
        (Sign::Plus, text)
    }
}

/// Parses a self-describing numeric literal.
pub fn parse_literal(text: &str) -> Result<BigInt, FormatError> {
    let (sign, body) = split_sign(text.trim());

    let hex = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X"));
    let bin = body.strip_prefix("0b").or_else(|| body.strip_prefix("0B"));
    let (radix, digits) = if let Some(rest) = hex {
        (16, rest)
    } else if let Some(rest) = bin {
        (2, rest)
    } else if body.len() > 1 && body.starts_with('0') {
        (8, &body[1..])
    } else {
        (10, body)
    };

    let magnitude = parse_digits(digits, radix)?;
    Ok(BigInt::from_biguint(sign, magnitude))
}

/// Parses bare hexadecimal text, as produced by hex-dumping a file.
pub fn parse_hex(text: &str) -> Result<BigInt, FormatError> {
    let magnitude = parse_digits(text.trim(), 16)?;
    Ok(BigInt::from_biguint(Sign::Plus, magnitude))
}

/// Renders a recovered secret as `0x`-prefixed lower-case hexadecimal.
pub fn secret_to_hex(secret: &BigInt) -> String {
    let digits = secret.magnitude().to_str_radix(16);
    let mut out = String::with_capacity(digits.len() + 3);
    if secret.sign() == Sign::Minus {
        out.push('-');
    }
    out.push_str("0x");
    out.push_str(&digits);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_detection() {
        assert_eq!(parse_literal("0x1F").unwrap(), BigInt::from(31));
        assert_eq!(parse_literal("0Xff").unwrap(), BigInt::from(255));
        assert_eq!(parse_literal("0b101").unwrap(), BigInt::from(5));
        assert_eq!(parse_literal("017").unwrap(), BigInt::from(15));
        assert_eq!(parse_literal("42").unwrap(), BigInt::from(42));
        assert_eq!(parse_literal("0").unwrap(), BigInt::from(0));
        assert_eq!(parse_literal("  -0x10\n").unwrap(), BigInt::from(-16));
        assert_eq!(parse_literal("+7").unwrap(), BigInt::from(7));
    }

    #[test]
    fn test_rejects_malformed_literals() {
        assert_eq!(parse_literal(""), Err(FormatError::Empty));
        assert_eq!(parse_literal("0x"), Err(FormatError::Empty));
        assert_eq!(parse_literal("-"), Err(FormatError::Empty));
        assert_eq!(parse_literal("08"), Err(FormatError::InvalidDigit { digit: '8', radix: 8 }));
        assert_eq!(parse_literal("0b12"), Err(FormatError::InvalidDigit { digit: '2', radix: 2 }));
        assert_eq!(parse_literal("12ab"), Err(FormatError::InvalidDigit { digit: 'a', radix: 10 }));
        assert_eq!(
            parse_literal("1_000"),
            Err(FormatError::InvalidDigit { digit: '_', radix: 10 })
        );
    }

    #[test]
    fn test_parse_hex_dump() {
        assert_eq!(parse_hex("68656c6c6f").unwrap(), BigInt::from(0x68656c6c6fu64));
        assert_eq!(parse_hex(""), Err(FormatError::Empty));
        assert_eq!(parse_hex("0x12"), Err(FormatError::InvalidDigit { digit: 'x', radix: 16 }));
    }

    #[test]
    fn test_secret_rendering() {
        assert_eq!(secret_to_hex(&BigInt::from(0)), "0x0");
        assert_eq!(secret_to_hex(&BigInt::from(42)), "0x2a");
        assert_eq!(secret_to_hex(&BigInt::from(-255)), "-0xff");

        let s = parse_literal("0x112233445566778899AABBCCDDEEFF").unwrap();
        assert_eq!(secret_to_hex(&s), "0x112233445566778899aabbccddeeff");
    }
}
