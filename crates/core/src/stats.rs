//! Decode statistics collection and reporting.
//!
//! Tracks what happened to each line of a listing:
//! 1. **Read:** Every line pulled from the input.
//! 2. **Skipped:** Lines that are not a 32-digit instruction word.
//! 3. **Decoded:** Words rendered as an instruction.
//! 4. **Invalid:** Words rendered as `Invalid opcode`.

use std::ops::AddAssign;

/// Per-listing (or per-batch) line counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeStats {
    /// Lines read from the input.
    pub lines_read: u64,
    /// Lines dropped because they are not an instruction word.
    pub skipped: u64,
    /// Words decoded to an instruction.
    pub decoded: u64,
    /// Words with an unknown opcode or function code.
    pub invalid: u64,
}

impl DecodeStats {
    /// Number of output lines produced (decoded plus invalid).
    pub const fn emitted(&self) -> u64 {
        self.decoded + self.invalid
    }

    /// Adds another set of counters into this one.
    pub const fn merge(&mut self, other: &Self) {
        self.lines_read += other.lines_read;
        self.skipped += other.skipped;
        self.decoded += other.decoded;
        self.invalid += other.invalid;
    }

    /// Prints the counters to stdout.
    pub fn print(&self) {
        let read = if self.lines_read == 0 {
            1
        } else {
            self.lines_read
        };
        #[allow(clippy::cast_precision_loss)]
        let pct = |n: u64| (n as f64 / read as f64) * 100.0;

        println!("\n==========================================================");
        println!("DISASSEMBLY STATISTICS");
        println!("==========================================================");
        println!("lines_read               {}", self.lines_read);
        println!(
            "lines_skipped            {} ({:.2}%)",
            self.skipped,
            pct(self.skipped)
        );
        println!(
            "words_decoded            {} ({:.2}%)",
            self.decoded,
            pct(self.decoded)
        );
        println!(
            "words_invalid            {} ({:.2}%)",
            self.invalid,
            pct(self.invalid)
        );
        println!("lines_emitted            {}", self.emitted());
        println!("----------------------------------------------------------");
    }
}

impl AddAssign for DecodeStats {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
