//! Instruction Set Architecture (ISA) definitions.
//!
//! Contains the register naming convention, opcode and function-code tables,
//! field extraction, and the disassembler for the supported MIPS subset.
//!
//! # Formats
//!
//! * Register (R): `opcode | rs | rt | rd | shamt | funct`, opcode `000000`.
//! * Immediate (I): `opcode | rs | rt | imm16`.
//! * Jump (J): `opcode | address26`.

/// Register index to symbolic name mapping.
pub mod abi;

/// Opcode-driven dispatch and per-format field decoding.
pub mod decode;

/// Line decoder producing the final disassembly text.
pub mod disasm;

/// Function codes for register-format instructions.
pub mod funct;

/// Bit-string to decimal conversion with 16-bit sign extension.
pub mod immediate;

/// Instruction word parsing and bit-field extraction.
pub mod instruction;

/// Major opcodes (bits 31-26).
pub mod opcodes;

/// Output syntax shapes and their renderers.
pub mod syntax;
