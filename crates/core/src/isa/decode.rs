//! Instruction decoder.
//!
//! Decoding is two table lookups and a field slice:
//! 1. The opcode selects a [`Format`]. Immediate-format entries carry their
//!    mnemonic and renderer; register and jump entries carry nothing.
//! 2. Register-format words are resolved through the function-code table,
//!    which alone supplies their mnemonic and renderer.
//! 3. The format decoder slices the fields into an [`Instruction`].
//!
//! Lookups that miss are ordinary outcomes ([`Decoded::InvalidOpcode`],
//! [`Decoded::InvalidFunct`]), not errors.

use std::fmt;

use crate::isa::abi::Register;
use crate::isa::funct;
use crate::isa::immediate::sign_extend_field;
use crate::isa::instruction::{
    IMM_WIDTH, InstructionBits, InstructionWord, SHAMT_WIDTH, TARGET_WIDTH,
};
use crate::isa::opcodes;
use crate::isa::syntax::{self, ImmediateSyntax, RegisterSyntax};

/// Text emitted for a word whose opcode (or function code) is not in the table.
pub const INVALID_OPCODE: &str = "Invalid opcode";

/// Instruction layout selected by the opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Register format; see [`lookup_funct`].
    Register,
    /// Immediate format with the mnemonic and renderer bound to the opcode.
    Immediate {
        /// Assembly mnemonic.
        mnemonic: &'static str,
        /// Output shape.
        syntax: ImmediateSyntax,
    },
    /// Jump format.
    Jump,
}

/// Function-code table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FunctEntry {
    /// Assembly mnemonic.
    pub mnemonic: &'static str,
    /// Output shape.
    pub syntax: RegisterSyntax,
}

/// Looks up a 6-bit opcode.
///
/// Returns `None` for every opcode outside the table.
pub const fn lookup_opcode(opcode: u32) -> Option<Format> {
    use ImmediateSyntax::{Arithmetic, Branch, BranchSingle, Memory};

    let (mnemonic, syntax) = match opcode {
        opcodes::OP_SPECIAL => return Some(Format::Register),
        opcodes::OP_J => return Some(Format::Jump),

        opcodes::OP_LB => ("lb", Memory),
        opcodes::OP_LH => ("lh", Memory),
        opcodes::OP_LW => ("lw", Memory),
        opcodes::OP_SB => ("sb", Memory),
        opcodes::OP_SH => ("sh", Memory),
        opcodes::OP_SW => ("sw", Memory),

        opcodes::OP_ADDI => ("addi", Arithmetic),
        opcodes::OP_ANDI => ("andi", Arithmetic),
        opcodes::OP_ORI => ("ori", Arithmetic),
        opcodes::OP_XORI => ("xori", Arithmetic),
        opcodes::OP_LIU => ("liu", Arithmetic),

        opcodes::OP_BEQ => ("beq", Branch),
        opcodes::OP_BNE => ("bne", Branch),
        opcodes::OP_BLEZ => ("blez", BranchSingle),
        opcodes::OP_BGTZ => ("bgtz", BranchSingle),

        _ => return None,
    };
    Some(Format::Immediate { mnemonic, syntax })
}

/// Looks up a 6-bit function code of a register-format word.
pub const fn lookup_funct(code: u32) -> Option<FunctEntry> {
    let (mnemonic, syntax) = match code {
        funct::ADD => ("add", RegisterSyntax::Default),
        funct::SUB => ("sub", RegisterSyntax::Default),
        funct::AND => ("and", RegisterSyntax::Default),
        funct::OR => ("or", RegisterSyntax::Default),
        funct::XOR => ("xor", RegisterSyntax::Default),
        funct::SLL => ("sll", RegisterSyntax::Shift),
        funct::SRL => ("srl", RegisterSyntax::Shift),
        funct::JR => ("jr", RegisterSyntax::Jump),
        _ => return None,
    };
    Some(FunctEntry { mnemonic, syntax })
}

/// A fully decoded instruction, ready to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Register format.
    Register {
        /// Mnemonic from the function-code table.
        mnemonic: &'static str,
        /// Output shape from the function-code table.
        syntax: RegisterSyntax,
        /// First source register.
        rs: Register,
        /// Second source register.
        rt: Register,
        /// Destination register.
        rd: Register,
        /// Shift amount (unsigned).
        shamt: i64,
    },
    /// Immediate format.
    Immediate {
        /// Mnemonic from the opcode table.
        mnemonic: &'static str,
        /// Output shape from the opcode table.
        syntax: ImmediateSyntax,
        /// Base / first source register.
        rs: Register,
        /// Target / second source register.
        rt: Register,
        /// Sign-extended 16-bit immediate.
        imm: i64,
    },
    /// Jump format.
    Jump {
        /// 26-bit address field (unsigned, not shifted).
        target: i64,
    },
}

impl Instruction {
    /// Returns the assembly mnemonic.
    pub const fn mnemonic(&self) -> &'static str {
        match *self {
            Self::Register { mnemonic, .. } | Self::Immediate { mnemonic, .. } => mnemonic,
            Self::Jump { .. } => "j",
        }
    }

    /// Renders the instruction as one line of disassembly.
    pub fn render(&self) -> String {
        match *self {
            Self::Register {
                mnemonic,
                syntax,
                rs,
                rt,
                rd,
                shamt,
            } => syntax.render(mnemonic, rs, rt, rd, shamt),
            Self::Immediate {
                mnemonic,
                syntax,
                rs,
                rt,
                imm,
            } => syntax.render(mnemonic, rt, rs, imm),
            Self::Jump { target } => syntax::jump_target(target),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Outcome of decoding one instruction word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decoded {
    /// The word decoded to an instruction.
    Instruction(Instruction),
    /// The opcode is not in the table.
    InvalidOpcode {
        /// The unrecognised opcode.
        opcode: u32,
    },
    /// The opcode selects register format but the function code is not in the table.
    ///
    /// Renders exactly like [`Decoded::InvalidOpcode`].
    InvalidFunct {
        /// The unrecognised function code.
        funct: u32,
    },
}

impl Decoded {
    /// Returns `true` unless the word decoded to an instruction.
    pub const fn is_invalid(&self) -> bool {
        !matches!(self, Self::Instruction(_))
    }

    /// Returns the decoded instruction, if any.
    pub const fn instruction(&self) -> Option<&Instruction> {
        match self {
            Self::Instruction(inst) => Some(inst),
            _ => None,
        }
    }
}

impl fmt::Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instruction(inst) => fmt::Display::fmt(inst, f),
            Self::InvalidOpcode { .. } | Self::InvalidFunct { .. } => f.write_str(INVALID_OPCODE),
        }
    }
}

/// Decodes an instruction word.
///
/// # Arguments
///
/// * `word` - The instruction word to decode.
///
/// # Returns
///
/// The decoded instruction, or the invalid outcome naming the field that missed.
pub fn decode(word: InstructionWord) -> Decoded {
    let opcode = word.opcode();
    match lookup_opcode(opcode) {
        Some(Format::Register) => decode_register(word),
        Some(Format::Immediate { mnemonic, syntax }) => {
            Decoded::Instruction(decode_immediate(word, mnemonic, syntax))
        }
        Some(Format::Jump) => Decoded::Instruction(decode_jump(word)),
        None => Decoded::InvalidOpcode { opcode },
    }
}

/// Register format: `rs[6:11] rt[11:16] rd[16:21] shamt[21:26] func[26:32]`.
fn decode_register(word: InstructionWord) -> Decoded {
    let code = word.funct();
    let Some(FunctEntry { mnemonic, syntax }) = lookup_funct(code) else {
        return Decoded::InvalidFunct { funct: code };
    };

    Decoded::Instruction(Instruction::Register {
        mnemonic,
        syntax,
        rs: Register::new(word.rs()),
        rt: Register::new(word.rt()),
        rd: Register::new(word.rd()),
        shamt: sign_extend_field(word.shamt(), SHAMT_WIDTH),
    })
}

/// Immediate format: `rs[6:11] rt[11:16] imm[16:32]`.
fn decode_immediate(
    word: InstructionWord,
    mnemonic: &'static str,
    syntax: ImmediateSyntax,
) -> Instruction {
    Instruction::Immediate {
        mnemonic,
        syntax,
        rs: Register::new(word.rs()),
        rt: Register::new(word.rt()),
        imm: sign_extend_field(word.imm(), IMM_WIDTH),
    }
}

/// Jump format: `address[6:32]`.
fn decode_jump(word: InstructionWord) -> Instruction {
    Instruction::Jump {
        target: sign_extend_field(word.target(), TARGET_WIDTH),
    }
}
