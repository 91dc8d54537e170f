use clap::Parser;
use hoistbench::config::{BenchConfig, ConfigOverrides, OutputFormat, RuntimeSelection};
use hoistbench::host::HostInfo;
use hoistbench::report::{self, JsonReport};
use hoistbench::{suite, BenchResult, Runner};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "hoistbench")]
#[command(about = "Time a loop with its invariant recomputed vs hoisted out")]
#[command(version)]
struct Cli {
    /// Runtime executing the variants
    #[arg(short, long, value_enum)]
    runtime: Option<RuntimeSelection>,

    /// Timed invocations per variant
    #[arg(short = 'n', long)]
    iterations: Option<u64>,

    /// Loop length inside one invocation
    #[arg(long)]
    inner_loop: Option<u64>,

    /// Positive value the invariant is derived from
    #[arg(long)]
    input: Option<f64>,

    /// Untimed invocations before each measurement
    #[arg(long)]
    warmup: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// YAML config file; command-line flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> BenchResult<()> {
    let mut config = BenchConfig::load(cli.config.as_deref())?;
    config.apply(ConfigOverrides {
        runtime: cli.runtime,
        iterations: cli.iterations,
        inner_loop: cli.inner_loop,
        input: cli.input,
        warmup: cli.warmup,
        format: cli.format,
    });
    log::debug!("effective config: {:?}", config);

    let comparisons = suite::run_all(&Runner::new(), &config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.format {
        OutputFormat::Text => report::write_text(&mut out, &comparisons)?,
        OutputFormat::Json => {
            let report = JsonReport::new(&config, HostInfo::collect(), &comparisons)?;
            report::write_json(&mut out, &report)?;
        }
    }
    out.flush()?;
    Ok(())
}
