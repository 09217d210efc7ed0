//! Disassembler Output Tests.
//!
//! Checks the literal text for every opcode and function-code table entry,
//! including the listing format's comma placement.

use mipsdis_core::isa::abi::REG_ZERO;
use mipsdis_core::isa::disasm::{INVALID_OPCODE, disassemble, disassemble_line};
use mipsdis_core::isa::funct;
use mipsdis_core::isa::opcodes;
use mipsdis_core::DecodeError;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::instruction::{InstructionBuilder, bits, word};

// ══════════════════════════════════════════════════════════
// 1. Worked examples
// ══════════════════════════════════════════════════════════

#[test]
fn lw_worked_example() {
    // opcode=100011 (lw), rs=01000 ($t0), rt=01010 ($t2), imm=4
    let text = disassemble_line("10001101000010100000000000000100").unwrap();
    assert_eq!(text, "lw, $t2, 4($t0)");
}

#[test]
fn add_worked_example() {
    // opcode=000000, rs=01000 ($t0), rt=01001 ($t1), rd=01010 ($t2), funct=100000
    let text = disassemble_line("00000001000010010101000000100000").unwrap();
    assert_eq!(text, "add $t2, $t0, $t1");
}

// ══════════════════════════════════════════════════════════
// 2. Register format (rs=$t0, rt=$t1, rd=$t2, shamt=4)
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(funct::ADD, "add $t2, $t0, $t1")]
#[case(funct::SUB, "sub $t2, $t0, $t1")]
#[case(funct::AND, "and $t2, $t0, $t1")]
#[case(funct::OR, "or $t2, $t0, $t1")]
#[case(funct::XOR, "xor $t2, $t0, $t1")]
#[case(funct::SLL, "sll $t1, $t2, 4")]
#[case(funct::SRL, "srl $t1, $t2, 4")]
#[case(funct::JR, "jr $t0")]
fn register_format(#[case] code: u32, #[case] expected: &str) {
    let raw = InstructionBuilder::new()
        .rs(8)
        .rt(9)
        .rd(10)
        .shamt(4)
        .funct(code)
        .build_r();
    assert_eq!(disassemble(word(raw)), expected);
}

#[test]
fn shift_amount_is_never_negative() {
    let raw = InstructionBuilder::new()
        .rt(16)
        .rd(17)
        .shamt(31)
        .funct(funct::SLL)
        .build_r();
    assert_eq!(disassemble(word(raw)), "sll $s0, $s1, 31");
}

// ══════════════════════════════════════════════════════════
// 3. Immediate format (rs=$s0, rt=$s1, imm=-8)
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(opcodes::OP_LB, "lb, $s1, -8($s0)")]
#[case(opcodes::OP_LH, "lh, $s1, -8($s0)")]
#[case(opcodes::OP_LW, "lw, $s1, -8($s0)")]
#[case(opcodes::OP_SB, "sb, $s1, -8($s0)")]
#[case(opcodes::OP_SH, "sh, $s1, -8($s0)")]
#[case(opcodes::OP_SW, "sw, $s1, -8($s0)")]
#[case(opcodes::OP_ADDI, "addi, $s1, $s0, -8")]
#[case(opcodes::OP_ANDI, "andi, $s1, $s0, -8")]
#[case(opcodes::OP_ORI, "ori, $s1, $s0, -8")]
#[case(opcodes::OP_XORI, "xori, $s1, $s0, -8")]
#[case(opcodes::OP_LIU, "liu, $s1, $s0, -8")]
#[case(opcodes::OP_BEQ, "beq, $s0, $s1, -8")]
#[case(opcodes::OP_BNE, "bne, $s0, $s1, -8")]
#[case(opcodes::OP_BLEZ, "blez $s0, -8")]
#[case(opcodes::OP_BGTZ, "bgtz $s0, -8")]
fn immediate_format(#[case] op: u32, #[case] expected: &str) {
    let raw = InstructionBuilder::new()
        .opcode(op)
        .rs(16)
        .rt(17)
        .imm(-8)
        .build_i();
    assert_eq!(disassemble(word(raw)), expected);
}

#[test]
fn positive_immediates() {
    let raw = InstructionBuilder::new()
        .opcode(opcodes::OP_ORI)
        .rs(REG_ZERO)
        .rt(8)
        .imm(32767)
        .build_i();
    assert_eq!(disassemble(word(raw)), "ori, $t0, $zero, 32767");
}

// ══════════════════════════════════════════════════════════
// 4. Jump format
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(0, "j 0")]
#[case(1024, "j 1024")]
#[case(0x03FF_FFFF, "j 67108863")]
fn jump_format(#[case] target: u32, #[case] expected: &str) {
    let raw = InstructionBuilder::new()
        .opcode(opcodes::OP_J)
        .target(target)
        .build_j();
    assert_eq!(disassemble(word(raw)), expected);
}

// ══════════════════════════════════════════════════════════
// 5. Misses and fallbacks
// ══════════════════════════════════════════════════════════

#[test]
fn undefined_opcode() {
    assert_eq!(
        disassemble_line("11111100000000000000000000000000").unwrap(),
        INVALID_OPCODE
    );
    assert_eq!(
        disassemble_line("11111111111111111111111111111111").unwrap(),
        "Invalid opcode"
    );
}

#[test]
fn undefined_function_code_renders_as_invalid_opcode() {
    let raw = InstructionBuilder::new()
        .rs(8)
        .rt(9)
        .rd(10)
        .funct(0b000001)
        .build_r();
    assert_eq!(disassemble(word(raw)), INVALID_OPCODE);
}

#[test]
fn unnamed_registers_use_raw_bits() {
    let raw = InstructionBuilder::new()
        .opcode(opcodes::OP_ADDI)
        .rs(29)
        .rt(2)
        .imm(16)
        .build_i();
    assert_eq!(disassemble(word(raw)), "addi, $00010, $11101, 16");
}

#[test]
fn line_whitespace_is_trimmed() {
    let line = format!("  {}\t\r", "00000001000010010101000000100000");
    assert_eq!(disassemble_line(&line).unwrap(), "add $t2, $t0, $t1");
}

#[test]
fn malformed_lines_are_errors() {
    assert_eq!(
        disassemble_line("0101"),
        Err(DecodeError::WrongLength { len: 4 })
    );
    let line = format!("{}2", &bits(0)[..31]);
    assert_eq!(
        disassemble_line(&line),
        Err(DecodeError::InvalidDigit {
            digit: '2',
            position: 31
        })
    );
}

// ══════════════════════════════════════════════════════════
// 6. Table coverage
// ══════════════════════════════════════════════════════════

#[test]
fn every_table_entry_decodes() {
    for op in opcodes::ALL {
        if op == opcodes::OP_SPECIAL {
            for code in funct::ALL {
                let raw = InstructionBuilder::new().rs(8).funct(code).build_r();
                assert_ne!(disassemble(word(raw)), INVALID_OPCODE, "funct {code:06b}");
            }
        } else {
            let raw = (op << 26) | (8 << 21);
            assert_ne!(disassemble(word(raw)), INVALID_OPCODE, "opcode {op:06b}");
        }
    }
}
