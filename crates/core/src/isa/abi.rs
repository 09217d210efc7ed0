//! Register naming.
//!
//! Only `$zero`, the temporaries `$t0`-`$t7`, and the saved registers
//! `$s0`-`$s7` have names in this ISA subset. Any other index is rendered as
//! `$` followed by its raw 5-bit binary form, e.g. `$00001` for register 1.

use std::fmt;

/// Register 0 (`$zero`, always zero).
pub const REG_ZERO: u32 = 0;
/// Register 8 (`$t0`, first temporary).
pub const REG_T0: u32 = 8;
/// Register 15 (`$t7`, last temporary).
pub const REG_T7: u32 = 15;
/// Register 16 (`$s0`, first saved register).
pub const REG_S0: u32 = 16;
/// Register 23 (`$s7`, last saved register).
pub const REG_S7: u32 = 23;

/// Mask for a 5-bit register index.
pub const REG_MASK: u32 = 0x1F;

/// Symbolic names indexed by register number; `None` marks an unnamed index.
const REG_NAMES: [Option<&str>; 32] = [
    Some("$zero"),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    Some("$t0"),
    Some("$t1"),
    Some("$t2"),
    Some("$t3"),
    Some("$t4"),
    Some("$t5"),
    Some("$t6"),
    Some("$t7"),
    Some("$s0"),
    Some("$s1"),
    Some("$s2"),
    Some("$s3"),
    Some("$s4"),
    Some("$s5"),
    Some("$s6"),
    Some("$s7"),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
];

/// A 5-bit register operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Register(u32);

impl Register {
    /// Creates a register operand; bits above the low five are discarded.
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index & REG_MASK)
    }

    /// Returns the register index (0-31).
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Returns the symbolic name, or `None` for an unnamed index.
    #[inline]
    pub const fn name(self) -> Option<&'static str> {
        REG_NAMES[self.0 as usize]
    }

    /// Returns `true` if the register has a symbolic name.
    #[inline]
    pub const fn is_named(self) -> bool {
        self.name().is_some()
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "${:05b}", self.0),
        }
    }
}

/// Returns the rendered operand text for a register index.
///
/// # Arguments
///
/// * `index` - Register number; only the low five bits are used.
pub fn register_name(index: u32) -> String {
    Register::new(index).to_string()
}
