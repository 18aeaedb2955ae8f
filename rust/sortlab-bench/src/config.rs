//! Benchmark configuration from `sortlab.toml`.
//!
//! Searches the current directory then its ancestors, falling back to
//! `~/.config/sortlab/sortlab.toml`, and finally to built-in defaults
//! (40 sizes stepping by 500, every algorithm, entropy-seeded input).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sortlab_core::Algorithm;

use crate::error::BenchError;

pub const CONFIG_FILE: &str = "sortlab.toml";

/// Largest input size a run may request (`count * step`).
pub const MAX_INPUT_SIZE: usize = 10_000_000;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BenchConfig {
    pub sizes: SizeSpec,
    /// Seed for input generation. Absent means a fresh entropy seed per run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Algorithms to time, in column order.
    pub algorithms: Vec<Algorithm>,
    pub format: OutputFormat,
}

/// Sizes `step, 2 * step, ..., count * step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SizeSpec {
    pub count: usize,
    pub step: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Semicolon-delimited table, one row per size.
    #[default]
    Table,
    /// The whole report as pretty-printed JSON.
    Json,
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub seed: Option<u64>,
    pub count: Option<usize>,
    pub step: Option<usize>,
    pub algorithms: Option<Vec<String>>,
    pub format: Option<OutputFormat>,
}

impl Default for SizeSpec {
    fn default() -> Self {
        Self {
            count: 40,
            step: 500,
        }
    }
}

impl SizeSpec {
    /// All sizes in ascending order. Call `BenchConfig::validate` first;
    /// an unvalidated spec whose largest size overflows is clamped.
    pub fn sizes(&self) -> Vec<usize> {
        (1..=self.count)
            .map(|i| i.saturating_mul(self.step))
            .collect()
    }

    /// The largest size, or `None` if `count * step` overflows.
    pub fn largest(&self) -> Option<usize> {
        self.count.checked_mul(self.step)
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: SizeSpec::default(),
            seed: None,
            algorithms: Algorithm::all(),
            format: OutputFormat::default(),
        }
    }
}

impl BenchConfig {
    /// Load the nearest `sortlab.toml`, or defaults when none exists.
    pub fn load() -> Result<Self, BenchError> {
        match find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, BenchError> {
        let content = std::fs::read_to_string(path).map_err(|source| BenchError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| BenchError::Toml {
            origin: path.display().to_string(),
            source,
        })
    }

    /// Parse a TOML string directly.
    pub fn parse(s: &str) -> Result<Self, BenchError> {
        toml::from_str(s).map_err(|source| BenchError::Toml {
            origin: "<string>".to_string(),
            source,
        })
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn apply(&mut self, overrides: Overrides) -> Result<(), BenchError> {
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if let Some(count) = overrides.count {
            self.sizes.count = count;
        }
        if let Some(step) = overrides.step {
            self.sizes.step = step;
        }
        if let Some(names) = overrides.algorithms {
            self.algorithms = names
                .iter()
                .map(|name| name.parse::<Algorithm>())
                .collect::<Result<_, _>>()?;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), BenchError> {
        if self.sizes.count == 0 {
            return Err(BenchError::InvalidConfig(
                "sizes.count must be at least 1".to_string(),
            ));
        }
        if self.sizes.step == 0 {
            return Err(BenchError::InvalidConfig(
                "sizes.step must be at least 1".to_string(),
            ));
        }
        match self.sizes.largest() {
            Some(largest) if largest <= MAX_INPUT_SIZE => {}
            _ => {
                return Err(BenchError::InvalidConfig(format!(
                    "sizes.count * sizes.step must not exceed {MAX_INPUT_SIZE}"
                )));
            }
        }
        if self.algorithms.is_empty() {
            return Err(BenchError::InvalidConfig(
                "at least one algorithm is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Generate a default `sortlab.toml` template.
    pub fn default_template() -> &'static str {
        r#"# Sortlab benchmark configuration

# Fixed seed for reproducible inputs; omit for a fresh seed every run.
# seed = 42

# Output format: "table" (semicolon-delimited) or "json".
format = "table"

# Columns, in order. Short names ("quick") are accepted too.
algorithms = [
    "naiveSort",
    "bubbleSort",
    "insertionSort",
    "shellSort",
    "selectionSort",
    "heapSort",
    "mergeSort",
    "quickSort",
]

# Input sizes are step, 2*step, ..., count*step.
[sizes]
count = 40
step = 500
"#
    }
}

/// Nearest `sortlab.toml` in the current directory or its ancestors, then
/// the per-user file.
pub fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            break;
        }
    }
    let global = home_dir()?
        .join(".config")
        .join("sortlab")
        .join(CONFIG_FILE);
    global.is_file().then_some(global)
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
