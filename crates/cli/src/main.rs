//! MIPS-subset disassembler CLI.
//!
//! This binary provides three ways to run the disassembler:
//! 1. **Word:** Decode a single 32-digit word given on the command line.
//! 2. **File:** Decode one listing to stdout or to an output file.
//! 3. **Batch:** Decode the numbered series (`TESTE-01.txt` .. `TESTE-10.txt` by
//!    default) and write a `-RESULTADO` file next to each.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

use mipsdis_core::batch::try_decode_file;
use mipsdis_core::config::Config;
use mipsdis_core::driver::{self, JobReport};
use mipsdis_core::disassemble_line;

#[derive(Parser, Debug)]
#[command(
    name = "mipsdis",
    author,
    version,
    about = "MIPS-subset disassembler for binary text listings",
    long_about = "Decode listings of 32-digit binary instruction words into assembly.\n\nExamples:\n  mipsdis word 00000001000010010101000000100000\n  mipsdis file TESTE-01.txt -o TESTE-01-RESULTADO.txt\n  mipsdis batch --dir listings/ --stats"
)]
struct Cli {
    /// Log filter used when RUST_LOG is not set (e.g. "warn", "mipsdis_core=debug").
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a single instruction word.
    Word {
        /// 32 binary digits.
        bits: String,
    },

    /// Decode one listing file.
    File {
        /// Listing to decode.
        input: PathBuf,

        /// Write the result here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print line statistics after decoding.
        #[arg(long)]
        stats: bool,
    },

    /// Decode a numbered series of listings.
    Batch {
        /// JSON configuration file (see `Config`).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory holding the listings; overrides the config's `base_dir`.
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Print line statistics summed over the batch.
        #[arg(long)]
        stats: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let code = match cli.command {
        Commands::Word { bits } => cmd_word(&bits),
        Commands::File {
            input,
            output,
            stats,
        } => cmd_file(&input, output.as_deref(), stats),
        Commands::Batch { config, dir, stats } => cmd_batch(config, dir, stats),
    };
    process::exit(code);
}

/// Installs a compact stderr subscriber; `RUST_LOG` wins over `--log-level`.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn cmd_word(bits: &str) -> i32 {
    match disassemble_line(bits) {
        Ok(text) => {
            println!("{text}");
            0
        }
        Err(e) => {
            eprintln!("Error: {e}");
            2
        }
    }
}

fn cmd_file(input: &Path, output: Option<&Path>, show_stats: bool) -> i32 {
    let out = match try_decode_file(input) {
        Ok(out) => out,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = driver::write_output(path, &out.lines) {
                eprintln!("Error: {e}");
                return 1;
            }
            println!("Output generated: {}", path.display());
        }
        None => {
            for line in &out.lines {
                println!("{line}");
            }
        }
    }

    if show_stats {
        out.stats.print();
    }
    0
}

fn cmd_batch(config_path: Option<PathBuf>, dir: Option<PathBuf>, show_stats: bool) -> i32 {
    let mut config = match config_path {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        },
        None => Config::default(),
    };
    if let Some(dir) = dir {
        config.batch.base_dir = dir;
    }
    debug!(?config, "batch configuration");

    let jobs = config.batch.jobs();
    if jobs.is_empty() {
        eprintln!(
            "Error: empty series ({}..={})",
            config.batch.first, config.batch.last
        );
        return 1;
    }

    let summary = driver::run_batch(&jobs, print_report);

    if show_stats {
        summary.totals.print();
    }
    if summary.written() == jobs.len() { 0 } else { 1 }
}

/// Prints the per-job status lines.
fn print_report(report: &JobReport) {
    if let Some(e) = &report.input_error {
        if e.is_not_found() {
            println!("File not found: {}", report.job.input.display());
        } else {
            println!("Could not read input: {e}");
        }
    }
    match &report.output_error {
        None => println!("Output generated: {}", report.job.output.display()),
        Some(e) => println!("Could not write output: {e}"),
    }
}
