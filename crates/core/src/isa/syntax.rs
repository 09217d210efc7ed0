//! Output syntax shapes.
//!
//! Each renderer produces one line of disassembly. The comma placement is the
//! established listing format and is reproduced exactly: the memory,
//! arithmetic, and two-register branch forms put a comma straight after the
//! mnemonic (`lw, $t2, 4($t0)`), while the register, jump, and single-register
//! branch forms separate the mnemonic with a space (`add $t2, $t0, $t1`).

use crate::isa::abi::Register;

/// Renderers for register-format instructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegisterSyntax {
    /// `<mnem> <rd>, <rs>, <rt>`
    Default,
    /// `<mnem> <rt>, <rd>, <shamt>`
    Shift,
    /// `jr <rs>`
    Jump,
}

/// Renderers for immediate-format instructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImmediateSyntax {
    /// `<mnem>, <rt>, <imm>(<rs>)`
    Memory,
    /// `<mnem>, <rt>, <rs>, <imm>`
    Arithmetic,
    /// `<mnem>, <rs>, <rt>, <imm>`
    Branch,
    /// `<mnem> <rs>, <imm>`
    BranchSingle,
}

/// `<mnem> <rd>, <rs>, <rt>`
pub fn register_default(mnemonic: &str, rd: Register, rs: Register, rt: Register) -> String {
    format!("{mnemonic} {rd}, {rs}, {rt}")
}

/// `<mnem> <rt>, <rd>, <shamt>`
///
/// The operand order (rt before rd) is the listing format's, not the MIPS
/// assembler's.
pub fn register_shift(mnemonic: &str, rt: Register, rd: Register, shamt: i64) -> String {
    format!("{mnemonic} {rt}, {rd}, {shamt}")
}

/// `jr <rs>`
pub fn register_jump(rs: Register) -> String {
    format!("jr {rs}")
}

/// `j <address>`
pub fn jump_target(address: i64) -> String {
    format!("j {address}")
}

/// `<mnem>, <rt>, <imm>(<rs>)`
pub fn immediate_memory(mnemonic: &str, rt: Register, rs: Register, imm: i64) -> String {
    format!("{mnemonic}, {rt}, {imm}({rs})")
}

/// `<mnem>, <rt>, <rs>, <imm>`
pub fn immediate_arithmetic(mnemonic: &str, rt: Register, rs: Register, imm: i64) -> String {
    format!("{mnemonic}, {rt}, {rs}, {imm}")
}

/// `<mnem>, <rs>, <rt>, <imm>`
pub fn immediate_branch(mnemonic: &str, rt: Register, rs: Register, imm: i64) -> String {
    format!("{mnemonic}, {rs}, {rt}, {imm}")
}

/// `<mnem> <rs>, <imm>`; the rt field is not shown.
pub fn immediate_branch_single(mnemonic: &str, rs: Register, imm: i64) -> String {
    format!("{mnemonic} {rs}, {imm}")
}

impl RegisterSyntax {
    /// Renders a register-format instruction in this shape.
    pub fn render(
        self,
        mnemonic: &str,
        rs: Register,
        rt: Register,
        rd: Register,
        shamt: i64,
    ) -> String {
        match self {
            Self::Default => register_default(mnemonic, rd, rs, rt),
            Self::Shift => register_shift(mnemonic, rt, rd, shamt),
            Self::Jump => register_jump(rs),
        }
    }
}

impl ImmediateSyntax {
    /// Renders an immediate-format instruction in this shape.
    pub fn render(self, mnemonic: &str, rt: Register, rs: Register, imm: i64) -> String {
        match self {
            Self::Memory => immediate_memory(mnemonic, rt, rs, imm),
            Self::Arithmetic => immediate_arithmetic(mnemonic, rt, rs, imm),
            Self::Branch => immediate_branch(mnemonic, rt, rs, imm),
            Self::BranchSingle => immediate_branch_single(mnemonic, rs, imm),
        }
    }
}
