use crate::error::{BenchError, BenchResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::num::NonZeroU64;
use std::path::Path;

pub const DEFAULT_ITERATIONS: u64 = 1_000;
pub const DEFAULT_INNER_LOOP: u64 = 10_000;
pub const DEFAULT_INPUT: f64 = 42.0;

/// Engine executing the two variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Runtime {
    /// Variants compiled into this binary
    Native,
    /// Variants interpreted by the embedded Luau VM
    Lua,
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Runtime::Native => write!(f, "native"),
            Runtime::Lua => write!(f, "lua"),
        }
    }
}

/// Which runtimes a run covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeSelection {
    Native,
    Lua,
    /// Native first, then Lua
    All,
}

impl RuntimeSelection {
    pub fn runtimes(self) -> &'static [Runtime] {
        match self {
            RuntimeSelection::Native => &[Runtime::Native],
            RuntimeSelection::Lua => &[Runtime::Lua],
            RuntimeSelection::All => &[Runtime::Native, Runtime::Lua],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    pub runtime: RuntimeSelection,
    /// Timed invocations per variant.
    pub iterations: u64,
    /// Loop length inside one invocation.
    pub inner_loop: u64,
    /// Value the invariant is derived from. Must be positive (it goes through `ln`).
    pub input: f64,
    /// Untimed invocations before each measurement.
    pub warmup: u64,
    pub format: OutputFormat,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            runtime: RuntimeSelection::Native,
            iterations: DEFAULT_ITERATIONS,
            inner_loop: DEFAULT_INNER_LOOP,
            input: DEFAULT_INPUT,
            warmup: 0,
            format: OutputFormat::Text,
        }
    }
}

/// Values given on the command line; `None` keeps what the file or defaults set.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub runtime: Option<RuntimeSelection>,
    pub iterations: Option<u64>,
    pub inner_loop: Option<u64>,
    pub input: Option<f64>,
    pub warmup: Option<u64>,
    pub format: Option<OutputFormat>,
}

impl BenchConfig {
    pub fn from_yaml(yaml: &str) -> BenchResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Defaults, then the YAML file at `path` if given.
    pub fn load(path: Option<&Path>) -> BenchResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path).map_err(|source| BenchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loaded config from {}", path.display());
        Self::from_yaml(&content)
    }

    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(runtime) = overrides.runtime {
            self.runtime = runtime;
        }
        if let Some(iterations) = overrides.iterations {
            self.iterations = iterations;
        }
        if let Some(inner_loop) = overrides.inner_loop {
            self.inner_loop = inner_loop;
        }
        if let Some(input) = overrides.input {
            self.input = input;
        }
        if let Some(warmup) = overrides.warmup {
            self.warmup = warmup;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
    }

    pub fn validate(&self) -> BenchResult<()> {
        self.iteration_count()?;
        if self.inner_loop == 0 {
            return Err(BenchError::InvalidConfig(
                "inner_loop must be at least 1".into(),
            ));
        }
        if !self.input.is_finite() || self.input <= 0.0 {
            return Err(BenchError::InvalidConfig(format!(
                "input must be a positive finite number, got {}",
                self.input
            )));
        }
        Ok(())
    }

    pub fn iteration_count(&self) -> BenchResult<NonZeroU64> {
        NonZeroU64::new(self.iterations)
            .ok_or_else(|| BenchError::InvalidConfig("iterations must be at least 1".into()))
    }
}
