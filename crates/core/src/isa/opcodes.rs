//! Major opcodes (bits 31-26).
//!
//! Every opcode not listed here decodes to `Invalid opcode`.

/// Register-format instructions; the real operation is in the function code.
pub const OP_SPECIAL: u32 = 0b000000;

/// Jump (J).
pub const OP_J: u32 = 0b000010;

/// Branch on Equal (BEQ).
pub const OP_BEQ: u32 = 0b000100;
/// Branch on Not Equal (BNE).
pub const OP_BNE: u32 = 0b000101;
/// Branch on Less Than or Equal to Zero (BLEZ).
pub const OP_BLEZ: u32 = 0b000110;
/// Branch on Greater Than Zero (BGTZ).
pub const OP_BGTZ: u32 = 0b000111;

/// Add Immediate (ADDI).
pub const OP_ADDI: u32 = 0b001000;
/// AND Immediate (ANDI).
pub const OP_ANDI: u32 = 0b001100;
/// OR Immediate (ORI).
pub const OP_ORI: u32 = 0b001101;
/// XOR Immediate (XORI).
pub const OP_XORI: u32 = 0b001110;
/// Load Upper Immediate, spelled `liu` in this listing format.
pub const OP_LIU: u32 = 0b001111;

/// Load Byte (LB).
pub const OP_LB: u32 = 0b100000;
/// Load Halfword (LH).
pub const OP_LH: u32 = 0b100001;
/// Load Word (LW).
pub const OP_LW: u32 = 0b100011;
/// Store Byte (SB).
pub const OP_SB: u32 = 0b101000;
/// Store Halfword (SH).
pub const OP_SH: u32 = 0b101001;
/// Store Word (SW).
pub const OP_SW: u32 = 0b101011;

/// Every defined opcode, in table order.
pub const ALL: [u32; 17] = [
    OP_SPECIAL, OP_LB, OP_LH, OP_LW, OP_SB, OP_SH, OP_SW, OP_ADDI, OP_ANDI, OP_ORI, OP_XORI,
    OP_LIU, OP_BEQ, OP_BNE, OP_BLEZ, OP_BGTZ, OP_J,
];
