//! # hoistbench
//!
//! Measures what loop-invariant code motion buys you. The same sum is
//! computed in two forms: with the invariant factor recomputed on every loop
//! step (`recompute`) and with it computed once before the loop (`hoisted`).
//! Each form is invoked a fixed number of times between two monotonic clock
//! reads, and the two elapsed times are compared.
//!
//! Two runtimes execute the variants:
//! - `native`: plain Rust functions, where the optimizer may hoist on its own
//! - `lua`: Luau scripts run by an embedded, sandboxed interpreter
//!
//! ## Example
//! ```ignore
//! use hoistbench::{report, suite, BenchConfig, Runner};
//!
//! let config = BenchConfig::default();
//! let comparisons = suite::run_all(&Runner::new(), &config)?;
//! report::write_text(&mut std::io::stdout(), &comparisons)?;
//! ```

pub mod bench_scripts;
pub mod clock;
pub mod config;
pub mod error;
pub mod host;
pub mod lua_runtime;
pub mod measurement;
pub mod report;
pub mod runner;
pub mod suite;
pub mod workload;

// --- Core types ---
pub use clock::{Clock, FakeClock, MonotonicClock};
pub use config::{BenchConfig, ConfigOverrides, OutputFormat, Runtime, RuntimeSelection};
pub use error::{BenchError, BenchResult};
pub use measurement::{ratio, Comparison, Measurement};
pub use runner::Runner;
