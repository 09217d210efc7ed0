//! Instruction word parsing and field extraction.
//!
//! A listing line holds the word most-significant bit first, so character 0
//! of the text is bit 31 of the parsed value. Field positions below are given
//! both ways:
//!
//! | Field   | Text columns | Bits  |
//! |---------|--------------|-------|
//! | opcode  | `[0:6]`      | 31-26 |
//! | rs      | `[6:11]`     | 25-21 |
//! | rt      | `[11:16]`    | 20-16 |
//! | rd      | `[16:21]`    | 15-11 |
//! | shamt   | `[21:26]`    | 10-6  |
//! | funct   | `[26:32]`    | 5-0   |
//! | imm     | `[16:32]`    | 15-0  |
//! | address | `[6:32]`     | 25-0  |

use std::fmt;
use std::str::FromStr;

use crate::common::error::{DecodeError, DecodeResult};
use crate::isa::immediate::parse_bits;

/// Number of characters (bits) in an instruction word.
pub const WORD_WIDTH: usize = 32;

/// Bit shift for the opcode field.
pub const OPCODE_SHIFT: u32 = 26;
/// Bit mask for the opcode field (6 bits).
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit shift for the rs field.
pub const RS_SHIFT: u32 = 21;
/// Bit shift for the rt field.
pub const RT_SHIFT: u32 = 16;
/// Bit shift for the rd field.
pub const RD_SHIFT: u32 = 11;
/// Bit shift for the shamt field.
pub const SHAMT_SHIFT: u32 = 6;
/// Bit mask for any 5-bit field (registers, shamt).
pub const FIELD5_MASK: u32 = 0x1F;
/// Bit mask for the funct field (6 bits).
pub const FUNCT_MASK: u32 = 0x3F;
/// Bit mask for the immediate field (16 bits).
pub const IMM_MASK: u32 = 0xFFFF;
/// Bit mask for the jump address field (26 bits).
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Width of the shamt field in bits.
pub const SHAMT_WIDTH: u32 = 5;
/// Width of the immediate field in bits.
pub const IMM_WIDTH: u32 = 16;
/// Width of the jump address field in bits.
pub const TARGET_WIDTH: u32 = 26;

/// Field extraction for encoded instruction words.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 31-26).
    fn opcode(&self) -> u32;

    /// Extracts the first source register field (bits 25-21).
    fn rs(&self) -> u32;

    /// Extracts the second source / target register field (bits 20-16).
    fn rt(&self) -> u32;

    /// Extracts the destination register field (bits 15-11).
    fn rd(&self) -> u32;

    /// Extracts the shift amount field (bits 10-6).
    fn shamt(&self) -> u32;

    /// Extracts the function code field (bits 5-0).
    fn funct(&self) -> u32;

    /// Extracts the raw 16-bit immediate field (bits 15-0), not sign-extended.
    fn imm(&self) -> u32;

    /// Extracts the 26-bit jump address field (bits 25-0).
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> u32 {
        (self >> RS_SHIFT) & FIELD5_MASK
    }

    #[inline(always)]
    fn rt(&self) -> u32 {
        (self >> RT_SHIFT) & FIELD5_MASK
    }

    #[inline(always)]
    fn rd(&self) -> u32 {
        (self >> RD_SHIFT) & FIELD5_MASK
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & FIELD5_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn imm(&self) -> u32 {
        self & IMM_MASK
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}

/// A validated 32-bit instruction word.
///
/// Parse one from a listing line with [`str::parse`]; the text must be
/// exactly 32 characters of `0` and `1` with no surrounding whitespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InstructionWord(u32);

impl InstructionWord {
    /// Wraps a raw 32-bit encoding.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw 32-bit encoding.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for InstructionWord {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<InstructionWord> for u32 {
    fn from(word: InstructionWord) -> Self {
        word.0
    }
}

impl FromStr for InstructionWord {
    type Err = DecodeError;

    fn from_str(s: &str) -> DecodeResult<Self> {
        let len = s.chars().count();
        if len != WORD_WIDTH {
            return Err(DecodeError::WrongLength { len });
        }
        parse_bits(s).map(Self)
    }
}

impl fmt::Display for InstructionWord {
    /// Writes the word back in listing form (32 binary digits).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032b}", self.0)
    }
}

impl InstructionBits for InstructionWord {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self.0.opcode()
    }

    #[inline(always)]
    fn rs(&self) -> u32 {
        self.0.rs()
    }

    #[inline(always)]
    fn rt(&self) -> u32 {
        self.0.rt()
    }

    #[inline(always)]
    fn rd(&self) -> u32 {
        self.0.rd()
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        self.0.shamt()
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self.0.funct()
    }

    #[inline(always)]
    fn imm(&self) -> u32 {
        self.0.imm()
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self.0.target()
    }
}
