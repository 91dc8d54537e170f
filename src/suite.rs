use crate::clock::Clock;
use crate::config::{BenchConfig, Runtime};
use crate::error::BenchResult;
use crate::lua_runtime::LuaWorkload;
use crate::measurement::Comparison;
use crate::runner::Runner;
use crate::workload::NativeWorkload;
use std::num::NonZeroU64;

pub const RECOMPUTE_LABEL: &str = "recompute";
pub const HOISTED_LABEL: &str = "hoisted";

/// Runs every runtime the config selects, in order. Stops at the first failure.
pub fn run_all<C: Clock>(runner: &Runner<C>, config: &BenchConfig) -> BenchResult<Vec<Comparison>> {
    config.validate()?;
    config
        .runtime
        .runtimes()
        .iter()
        .map(|&runtime| run(runner, config, runtime))
        .collect()
}

/// Measures recompute, then hoisted, for one runtime. Never interleaved.
pub fn run<C: Clock>(
    runner: &Runner<C>,
    config: &BenchConfig,
    runtime: Runtime,
) -> BenchResult<Comparison> {
    let iterations = config.iteration_count()?;
    log::info!(
        "[{}] {} iterations x {} inner steps (warmup {})",
        runtime,
        iterations,
        config.inner_loop,
        config.warmup
    );

    let comparison = match runtime {
        Runtime::Native => run_native(runner, config, iterations)?,
        Runtime::Lua => run_lua(runner, config, iterations)?,
    };

    log::info!(
        "[{}] recompute {:.6}s, hoisted {:.6}s",
        runtime,
        comparison.recompute.elapsed_secs(),
        comparison.hoisted.elapsed_secs()
    );
    Ok(comparison)
}

fn run_native<C: Clock>(
    runner: &Runner<C>,
    config: &BenchConfig,
    iterations: NonZeroU64,
) -> BenchResult<Comparison> {
    let workload = NativeWorkload::new(config.inner_loop, config.input);
    let recompute = || -> BenchResult<()> {
        workload.run_recompute();
        Ok(())
    };
    let hoisted = || -> BenchResult<()> {
        workload.run_hoisted();
        Ok(())
    };

    runner.warm_up(config.warmup, recompute)?;
    let recompute = runner.measure(RECOMPUTE_LABEL, iterations, recompute)?;
    runner.warm_up(config.warmup, hoisted)?;
    let hoisted = runner.measure(HOISTED_LABEL, iterations, hoisted)?;

    Ok(Comparison {
        runtime: Runtime::Native,
        recompute,
        hoisted,
    })
}

fn run_lua<C: Clock>(
    runner: &Runner<C>,
    config: &BenchConfig,
    iterations: NonZeroU64,
) -> BenchResult<Comparison> {
    let workload = LuaWorkload::new(config.inner_loop, config.input)?;

    runner.warm_up(config.warmup, || workload.run_recompute())?;
    let recompute = runner.measure(RECOMPUTE_LABEL, iterations, || workload.run_recompute())?;
    runner.warm_up(config.warmup, || workload.run_hoisted())?;
    let hoisted = runner.measure(HOISTED_LABEL, iterations, || workload.run_hoisted())?;

    Ok(Comparison {
        runtime: Runtime::Lua,
        recompute,
        hoisted,
    })
}
