use crate::clock::{Clock, MonotonicClock};
use crate::measurement::Measurement;
use std::num::NonZeroU64;

/// Times a computation invoked a fixed number of times in sequence.
pub struct Runner<C: Clock = MonotonicClock> {
    clock: C,
}

impl Runner<MonotonicClock> {
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }
}

impl Default for Runner<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Runner<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Invokes `computation` `iterations` times between two clock reads.
    /// The first error aborts the run and is returned as is; nothing is
    /// measured in that case.
    pub fn measure<F, E>(
        &self,
        label: &str,
        iterations: NonZeroU64,
        mut computation: F,
    ) -> Result<Measurement, E>
    where
        F: FnMut() -> Result<(), E>,
    {
        let t0 = self.clock.now();
        for _ in 0..iterations.get() {
            computation()?;
        }
        let t1 = self.clock.now();

        let elapsed = t1.saturating_sub(t0).as_secs_f64();
        log::debug!("{}: {} iterations in {:.6}s", label, iterations, elapsed);
        Ok(Measurement::new(label, elapsed, iterations))
    }

    /// Untimed invocations before a measurement. Same error policy as `measure`.
    pub fn warm_up<F, E>(&self, iterations: u64, mut computation: F) -> Result<(), E>
    where
        F: FnMut() -> Result<(), E>,
    {
        for _ in 0..iterations {
            computation()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FakeClock;
    use std::convert::Infallible;
    use std::time::Duration;

    fn n(v: u64) -> NonZeroU64 {
        NonZeroU64::new(v).unwrap()
    }

    #[test]
    fn test_fake_clock_elapsed_is_exact() {
        let clock = FakeClock::new();
        let tick = clock.clone();
        let runner = Runner::with_clock(clock);

        let m = runner
            .measure("step", n(4), || {
                tick.advance(Duration::from_millis(250));
                Ok::<(), Infallible>(())
            })
            .unwrap();

        assert_eq!(m.label(), "step");
        assert_eq!(m.iterations().get(), 4);
        assert_eq!(m.elapsed_secs(), 1.0);
    }

    #[test]
    fn test_noop_elapsed_is_non_negative() {
        let runner = Runner::new();
        for iterations in [1, 2, 10, 1000] {
            let m = runner
                .measure("noop", n(iterations), || Ok::<(), Infallible>(()))
                .unwrap();
            assert!(m.elapsed_secs() >= 0.0);
        }
    }

    #[test]
    fn test_computation_called_exactly_n_times() {
        let runner = Runner::with_clock(FakeClock::new());
        let mut calls = 0u64;
        runner
            .measure("count", n(37), || {
                calls += 1;
                Ok::<(), Infallible>(())
            })
            .unwrap();
        assert_eq!(calls, 37);
    }

    #[test]
    fn test_error_aborts_and_propagates() {
        let runner = Runner::with_clock(FakeClock::new());
        let mut calls = 0;
        let result = runner.measure("fails", n(10), || {
            calls += 1;
            if calls == 3 {
                Err("boom")
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err("boom"));
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_warm_up_is_not_timed() {
        let clock = FakeClock::new();
        let tick = clock.clone();
        let runner = Runner::with_clock(clock);

        let mut work = || {
            tick.advance(Duration::from_millis(100));
            Ok::<(), Infallible>(())
        };
        runner.warm_up(5, &mut work).unwrap();
        let m = runner.measure("after", n(2), &mut work).unwrap();

        assert_eq!(m.elapsed_secs(), 0.2);
    }
}
