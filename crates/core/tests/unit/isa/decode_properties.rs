//! Decode Properties: opcode and function-code table coverage.
//!
//! # Coverage Matrix
//!
//! - Register: `000000` with every function code (add, sub, and, or, xor, sll, srl, jr)
//! - Immediate: lb, lh, lw, sb, sh, sw, addi, andi, ori, xori, liu, beq, bne, blez, bgtz
//! - Jump: j
//! - Misses: every other opcode, every other function code

use mipsdis_core::isa::abi::Register;
use mipsdis_core::isa::decode::{
    Decoded, Format, Instruction, decode, lookup_funct, lookup_opcode,
};
use mipsdis_core::isa::funct;
use mipsdis_core::isa::opcodes;
use mipsdis_core::isa::syntax::{ImmediateSyntax, RegisterSyntax};
use proptest::prelude::*;

use crate::common::builder::instruction::{InstructionBuilder, word};

#[test]
fn opcode_table_has_seventeen_entries() {
    let defined: Vec<u32> = (0..64).filter(|&op| lookup_opcode(op).is_some()).collect();
    let mut expected = opcodes::ALL.to_vec();
    expected.sort_unstable();
    assert_eq!(defined, expected);
}

#[test]
fn funct_table_has_eight_entries() {
    let defined: Vec<u32> = (0..64).filter(|&f| lookup_funct(f).is_some()).collect();
    let mut expected = funct::ALL.to_vec();
    expected.sort_unstable();
    assert_eq!(defined, expected);
}

#[test]
fn opcode_formats() {
    assert_eq!(lookup_opcode(opcodes::OP_SPECIAL), Some(Format::Register));
    assert_eq!(lookup_opcode(opcodes::OP_J), Some(Format::Jump));
    assert_eq!(
        lookup_opcode(opcodes::OP_LW),
        Some(Format::Immediate {
            mnemonic: "lw",
            syntax: ImmediateSyntax::Memory
        })
    );
    assert_eq!(
        lookup_opcode(opcodes::OP_LIU),
        Some(Format::Immediate {
            mnemonic: "liu",
            syntax: ImmediateSyntax::Arithmetic
        })
    );
    assert_eq!(
        lookup_opcode(opcodes::OP_BNE),
        Some(Format::Immediate {
            mnemonic: "bne",
            syntax: ImmediateSyntax::Branch
        })
    );
    assert_eq!(
        lookup_opcode(opcodes::OP_BGTZ),
        Some(Format::Immediate {
            mnemonic: "bgtz",
            syntax: ImmediateSyntax::BranchSingle
        })
    );
}

#[test]
fn funct_syntax_groups() {
    for code in [funct::ADD, funct::SUB, funct::AND, funct::OR, funct::XOR] {
        assert_eq!(lookup_funct(code).unwrap().syntax, RegisterSyntax::Default);
    }
    for code in [funct::SLL, funct::SRL] {
        assert_eq!(lookup_funct(code).unwrap().syntax, RegisterSyntax::Shift);
    }
    assert_eq!(lookup_funct(funct::JR).unwrap().syntax, RegisterSyntax::Jump);
}

#[test]
fn register_words_ignore_opcode_level_entry() {
    let raw = InstructionBuilder::new()
        .rs(8)
        .rt(9)
        .rd(10)
        .shamt(2)
        .funct(funct::SRL)
        .build_r();
    assert_eq!(
        decode(word(raw)),
        Decoded::Instruction(Instruction::Register {
            mnemonic: "srl",
            syntax: RegisterSyntax::Shift,
            rs: Register::new(8),
            rt: Register::new(9),
            rd: Register::new(10),
            shamt: 2,
        })
    );
}

#[test]
fn unknown_funct_is_reported_separately() {
    let raw = InstructionBuilder::new().funct(0b111111).build_r();
    let decoded = decode(word(raw));
    assert_eq!(decoded, Decoded::InvalidFunct { funct: 0b111111 });
    assert!(decoded.is_invalid());
    assert_eq!(decoded.instruction(), None);
}

#[test]
fn mnemonic_accessor() {
    let j = decode(word(InstructionBuilder::new().opcode(opcodes::OP_J).target(7).build_j()));
    assert_eq!(j.instruction().unwrap().mnemonic(), "j");

    let sw = decode(word(
        InstructionBuilder::new()
            .opcode(opcodes::OP_SW)
            .rs(16)
            .rt(17)
            .build_i(),
    ));
    assert_eq!(sw.instruction().unwrap().mnemonic(), "sw");
}

proptest! {
    #[test]
    fn undefined_opcodes_are_invalid(op in 0u32..64, rest in 0u32..(1 << 26)) {
        prop_assume!(!opcodes::ALL.contains(&op));
        let decoded = decode(word((op << 26) | rest));
        prop_assert_eq!(decoded, Decoded::InvalidOpcode { opcode: op });
        prop_assert_eq!(decoded.to_string(), "Invalid opcode");
    }

    #[test]
    fn all_ones_prefix_is_invalid(rest in 0u32..(1 << 26)) {
        let decoded = decode(word((0b111111 << 26) | rest));
        prop_assert_eq!(decoded.to_string(), "Invalid opcode");
    }

    #[test]
    fn immediate_fields_round_trip(
        idx in 1usize..16,
        rs in 0u32..32,
        rt in 0u32..32,
        imm in any::<i16>(),
    ) {
        let op = opcodes::ALL[idx];
        let raw = InstructionBuilder::new()
            .opcode(op)
            .rs(rs)
            .rt(rt)
            .imm(i32::from(imm))
            .build_i();
        match decode(word(raw)) {
            Decoded::Instruction(Instruction::Immediate { rs: got_rs, rt: got_rt, imm: got_imm, .. }) => {
                prop_assert_eq!(got_rs.index(), rs);
                prop_assert_eq!(got_rt.index(), rt);
                prop_assert_eq!(got_imm, i64::from(imm));
            }
            other => prop_assert!(false, "expected immediate format, got {:?}", other),
        }
    }

    #[test]
    fn jump_target_is_unsigned(target in 0u32..(1 << 26)) {
        let raw = InstructionBuilder::new().opcode(opcodes::OP_J).target(target).build_j();
        prop_assert_eq!(
            decode(word(raw)),
            Decoded::Instruction(Instruction::Jump { target: i64::from(target) })
        );
    }
}
