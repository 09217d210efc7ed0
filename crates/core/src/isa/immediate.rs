//! Bit-string to decimal conversion.
//!
//! A field is read as an unsigned binary number. Exactly one field width is
//! signed in this ISA: a 16-bit field whose top bit is set is reduced by 2^16
//! (two's complement). Shift amounts (5 bits) and jump addresses (26 bits) go
//! through the same conversion and therefore always come out non-negative.

use crate::common::error::{DecodeError, DecodeResult};

/// Width of the only field that is sign-extended.
pub const SIGNED_FIELD_WIDTH: u32 = 16;

/// Widest field the converter accepts.
pub const MAX_FIELD_WIDTH: usize = 32;

/// Parses a string of `0`/`1` characters as an unsigned integer.
///
/// # Errors
///
/// Returns [`DecodeError::EmptyField`] for an empty string,
/// [`DecodeError::FieldTooWide`] for more than 32 characters, and
/// [`DecodeError::InvalidDigit`] for any character other than `0` or `1`.
pub fn parse_bits(bits: &str) -> DecodeResult<u32> {
    if bits.is_empty() {
        return Err(DecodeError::EmptyField);
    }
    let width = bits.chars().count();
    if width > MAX_FIELD_WIDTH {
        return Err(DecodeError::FieldTooWide { width });
    }

    bits.chars()
        .enumerate()
        .try_fold(0u32, |acc, (position, digit)| match digit {
            '0' => Ok(acc << 1),
            '1' => Ok((acc << 1) | 1),
            _ => Err(DecodeError::InvalidDigit { digit, position }),
        })
}

/// Applies the ISA's sign rule to an already-extracted field.
///
/// # Arguments
///
/// * `value` - Field value; must fit in `width` bits.
/// * `width` - Field width in bits.
///
/// # Returns
///
/// `value - 2^16` when `width` is 16 and bit 15 is set, otherwise `value`.
#[inline]
pub const fn sign_extend_field(value: u32, width: u32) -> i64 {
    let value = value as i64;
    if width == SIGNED_FIELD_WIDTH && (value >> (SIGNED_FIELD_WIDTH - 1)) & 1 == 1 {
        value - (1 << SIGNED_FIELD_WIDTH)
    } else {
        value
    }
}

/// Converts a bit string to its decimal representation.
///
/// ```
/// use mipsdis_core::isa::immediate::to_signed_decimal;
///
/// assert_eq!(to_signed_decimal("0000000000000100").unwrap(), "4");
/// assert_eq!(to_signed_decimal("1111111111111111").unwrap(), "-1");
/// assert_eq!(to_signed_decimal("11111").unwrap(), "31");
/// ```
///
/// # Errors
///
/// Same conditions as [`parse_bits`].
pub fn to_signed_decimal(bits: &str) -> DecodeResult<String> {
    let value = parse_bits(bits)?;
    Ok(sign_extend_field(value, bits.len() as u32).to_string())
}
