//! Line disassembler.
//!
//! Converts one instruction word into its line of listing output. This is
//! the single entry point the batch layer uses; everything below it is pure.
//!
//! # Usage
//!
//! ```
//! use mipsdis_core::isa::disasm::disassemble_line;
//!
//! let text = disassemble_line("10001101000010100000000000000100").unwrap();
//! assert_eq!(text, "lw, $t2, 4($t0)");
//! ```

use tracing::debug;

use crate::common::error::DecodeResult;
use crate::isa::decode::{Decoded, decode};
use crate::isa::instruction::InstructionWord;

pub use crate::isa::decode::INVALID_OPCODE;

/// Disassembles an instruction word into a line of text.
///
/// Returns the rendered instruction, or [`INVALID_OPCODE`] when either the
/// opcode or (for register format) the function code is not in the table.
pub fn disassemble(word: InstructionWord) -> String {
    let decoded = decode(word);
    match decoded {
        Decoded::InvalidOpcode { opcode } => {
            debug!(%word, opcode, "unknown opcode");
        }
        Decoded::InvalidFunct { funct } => {
            debug!(%word, funct, "unknown function code");
        }
        Decoded::Instruction(_) => {}
    }
    decoded.to_string()
}

/// Parses and disassembles one listing line.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns a [`DecodeError`](crate::common::error::DecodeError) if the trimmed
/// line is not exactly 32 binary digits.
pub fn disassemble_line(line: &str) -> DecodeResult<String> {
    let word: InstructionWord = line.trim().parse()?;
    Ok(disassemble(word))
}
