use crate::config::Runtime;
use crate::error::{BenchError, BenchResult};
use serde::Serialize;
use std::num::NonZeroU64;

/// One timed run: a variant invoked `iterations` times back to back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    label: String,
    elapsed_secs: f64,
    iterations: NonZeroU64,
}

impl Measurement {
    /// Negative or NaN elapsed times are clamped to zero.
    pub fn new(label: impl Into<String>, elapsed_secs: f64, iterations: NonZeroU64) -> Self {
        let elapsed_secs = if elapsed_secs.is_nan() || elapsed_secs < 0.0 {
            0.0
        } else {
            elapsed_secs
        };
        Self {
            label: label.into(),
            elapsed_secs,
            iterations,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    pub fn iterations(&self) -> NonZeroU64 {
        self.iterations
    }
}

/// `a.elapsed / b.elapsed`. A zero denominator is an error, never inf/NaN.
pub fn ratio(a: &Measurement, b: &Measurement) -> BenchResult<f64> {
    if b.elapsed_secs == 0.0 {
        return Err(BenchError::ZeroDuration {
            label: b.label.clone(),
        });
    }
    Ok(a.elapsed_secs / b.elapsed_secs)
}

/// Outcome of a comparison in reading order: `faster` beat `slower` by `factor`.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict<'a> {
    pub faster: &'a str,
    pub slower: &'a str,
    pub factor: f64,
}

/// Both variants of one runtime, measured sequentially.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub runtime: Runtime,
    pub recompute: Measurement,
    pub hoisted: Measurement,
}

impl Comparison {
    /// recompute / hoisted.
    pub fn ratio(&self) -> BenchResult<f64> {
        ratio(&self.recompute, &self.hoisted)
    }

    pub fn verdict(&self) -> BenchResult<Verdict<'_>> {
        let forward = self.ratio()?;
        if forward >= 1.0 {
            return Ok(Verdict {
                faster: self.hoisted.label(),
                slower: self.recompute.label(),
                factor: forward,
            });
        }
        Ok(Verdict {
            faster: self.recompute.label(),
            slower: self.hoisted.label(),
            factor: ratio(&self.hoisted, &self.recompute)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: u64) -> NonZeroU64 {
        NonZeroU64::new(v).unwrap()
    }

    fn comparison(recompute: f64, hoisted: f64) -> Comparison {
        Comparison {
            runtime: Runtime::Native,
            recompute: Measurement::new("recompute", recompute, n(10)),
            hoisted: Measurement::new("hoisted", hoisted, n(10)),
        }
    }

    #[test]
    fn test_ratio_divides_elapsed_times() {
        let a = Measurement::new("a", 3.0, n(1));
        let b = Measurement::new("b", 1.5, n(1));
        assert_eq!(ratio(&a, &b).unwrap(), 2.0);
    }

    #[test]
    fn test_ratio_zero_denominator_is_error() {
        let a = Measurement::new("a", 3.0, n(1));
        let b = Measurement::new("b", 0.0, n(1));
        match ratio(&a, &b) {
            Err(BenchError::ZeroDuration { label }) => assert_eq!(label, "b"),
            other => panic!("expected ZeroDuration, got {:?}", other),
        }
    }

    #[test]
    fn test_ratio_zero_over_zero_is_error_not_nan() {
        let a = Measurement::new("a", 0.0, n(1));
        let b = Measurement::new("b", 0.0, n(1));
        assert!(matches!(ratio(&a, &b), Err(BenchError::ZeroDuration { .. })));
    }

    #[test]
    fn test_negative_elapsed_clamped() {
        let m = Measurement::new("x", -1.0, n(1));
        assert_eq!(m.elapsed_secs(), 0.0);
    }

    #[test]
    fn test_verdict_hoisted_faster() {
        let c = comparison(4.0, 1.0);
        let v = c.verdict().unwrap();
        assert_eq!(v.faster, "hoisted");
        assert_eq!(v.slower, "recompute");
        assert_eq!(v.factor, 4.0);
    }

    #[test]
    fn test_verdict_recompute_faster() {
        let c = comparison(1.0, 2.0);
        let v = c.verdict().unwrap();
        assert_eq!(v.faster, "recompute");
        assert_eq!(v.factor, 2.0);
    }

    #[test]
    fn test_verdict_recompute_zero_is_error() {
        // The forward ratio is a valid 0, but naming recompute the winner needs
        // hoisted / recompute, which divides by zero.
        let c = comparison(0.0, 2.0);
        assert_eq!(c.ratio().unwrap(), 0.0);
        assert!(matches!(c.verdict(), Err(BenchError::ZeroDuration { label }) if label == "recompute"));
    }
}
