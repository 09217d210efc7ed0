//! MIPS-subset disassembler library.
//!
//! This crate turns textual listings of 32-bit instruction words (one word of
//! `0`/`1` characters per line) into assembly mnemonics. It provides:
//! 1. **ISA:** Register names, opcode and function-code tables, field decoding, and rendering.
//! 2. **Batch:** Line filtering and ordered decoding of whole listings.
//! 3. **Driver:** Input/output file pairing and result writing for numbered batches.
//! 4. **Support:** Errors, JSON configuration, and decode statistics.

/// Common types shared across the crate (errors).
pub mod common;
/// Batch configuration (defaults, JSON deserialization, job generation).
pub mod config;
/// Listing decoder: reads lines, filters malformed ones, decodes the rest in order.
pub mod batch;
/// Batch driver: runs (input, output) jobs and writes result files.
pub mod driver;
/// Instruction set (registers, opcodes, function codes, decode, disassembly).
pub mod isa;
/// Decode statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Errors raised by bit-string parsing and by file-level batch operations.
pub use crate::common::error::{BatchError, DecodeError};
/// Single-word entry points.
pub use crate::isa::disasm::{INVALID_OPCODE, disassemble, disassemble_line};
