//! Configuration for numbered batch runs.
//!
//! A batch run decodes a numbered series of listings in one directory and
//! writes a result file next to each. It provides:
//! 1. **Defaults:** The classic series `TESTE-01.txt` .. `TESTE-10.txt` with
//!    results in `TESTE-NN-RESULTADO.txt`.
//! 2. **Structures:** `Config` with a `batch` section; every field is optional in JSON.
//! 3. **Jobs:** Expansion of the series into (input, output) path pairs.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::common::error::{BatchError, BatchResult};
use crate::driver::Job;

/// Default configuration constants.
mod defaults {
    /// Directory holding the listings.
    pub const BASE_DIR: &str = ".";

    /// File-name stem shared by every listing in the series.
    pub const FILE_STEM: &str = "TESTE";

    /// First number in the series (inclusive).
    pub const FIRST: u32 = 1;

    /// Last number in the series (inclusive).
    pub const LAST: u32 = 10;

    /// Extension of both input and output files.
    pub const EXTENSION: &str = "txt";

    /// Appended to the input stem to name the output file.
    pub const OUTPUT_SUFFIX: &str = "-RESULTADO";
}

/// Root configuration.
///
/// # Example
///
/// ```
/// use mipsdis_core::config::Config;
///
/// let json = r#"{ "batch": { "base_dir": "listings", "last": 3 } }"#;
/// let config = Config::from_json_str(json).unwrap();
/// assert_eq!(config.batch.first, 1);
/// assert_eq!(config.batch.jobs().len(), 3);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Numbered batch settings
    #[serde(default)]
    pub batch: BatchConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> BatchResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> BatchResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| BatchError::reading(path, e))?;
        Self::from_json_str(&json)
    }
}

/// Numbered batch settings.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    /// Directory holding the listings and results
    #[serde(default = "BatchConfig::default_base_dir")]
    pub base_dir: PathBuf,

    /// File-name stem, e.g. `TESTE` for `TESTE-01.txt`
    #[serde(default = "BatchConfig::default_file_stem")]
    pub file_stem: String,

    /// First listing number (inclusive)
    #[serde(default = "BatchConfig::default_first")]
    pub first: u32,

    /// Last listing number (inclusive)
    #[serde(default = "BatchConfig::default_last")]
    pub last: u32,

    /// File extension without the dot
    #[serde(default = "BatchConfig::default_extension")]
    pub extension: String,

    /// Suffix added to the stem for result files
    #[serde(default = "BatchConfig::default_output_suffix")]
    pub output_suffix: String,
}

impl BatchConfig {
    fn default_base_dir() -> PathBuf {
        PathBuf::from(defaults::BASE_DIR)
    }

    fn default_file_stem() -> String {
        defaults::FILE_STEM.to_string()
    }

    const fn default_first() -> u32 {
        defaults::FIRST
    }

    const fn default_last() -> u32 {
        defaults::LAST
    }

    fn default_extension() -> String {
        defaults::EXTENSION.to_string()
    }

    fn default_output_suffix() -> String {
        defaults::OUTPUT_SUFFIX.to_string()
    }

    /// Returns the listing name (without extension) for number `n`.
    ///
    /// Numbers are zero-padded to two digits: `TESTE-01`, `TESTE-10`.
    pub fn listing_name(&self, n: u32) -> String {
        format!("{}-{n:02}", self.file_stem)
    }

    /// Expands the series into jobs, in ascending order.
    ///
    /// Returns an empty list when `first > last`.
    pub fn jobs(&self) -> Vec<Job> {
        (self.first..=self.last)
            .map(|n| {
                let name = self.listing_name(n);
                Job {
                    input: self.base_dir.join(format!("{name}.{}", self.extension)),
                    output: self
                        .base_dir
                        .join(format!("{name}{}.{}", self.output_suffix, self.extension)),
                }
            })
            .collect()
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            base_dir: Self::default_base_dir(),
            file_stem: Self::default_file_stem(),
            first: defaults::FIRST,
            last: defaults::LAST,
            extension: Self::default_extension(),
            output_suffix: Self::default_output_suffix(),
        }
    }
}
