//! Function codes (bits 5-0) for register-format instructions.
//!
//! Only consulted when the opcode is [`OP_SPECIAL`](super::opcodes::OP_SPECIAL).

/// Shift Left Logical.
pub const SLL: u32 = 0b000000;
/// Shift Right Logical.
pub const SRL: u32 = 0b000010;
/// Jump Register.
pub const JR: u32 = 0b001000;
/// Add.
pub const ADD: u32 = 0b100000;
/// Subtract.
pub const SUB: u32 = 0b100010;
/// Bitwise AND.
pub const AND: u32 = 0b100100;
/// Bitwise OR.
pub const OR: u32 = 0b100101;
/// Bitwise XOR.
pub const XOR: u32 = 0b100110;

/// Every defined function code, in table order.
pub const ALL: [u32; 8] = [ADD, SUB, AND, OR, XOR, SLL, SRL, JR];
