//! Common types used throughout the disassembler.
//!
//! Currently this is the error taxonomy; decode outcomes that are part of the
//! output contract (such as an unknown opcode) are modelled in `isa::decode`
//! instead.

/// Error types for bit-string parsing and batch I/O.
pub mod error;
