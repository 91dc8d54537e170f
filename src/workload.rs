//! Native variants of the benchmark computation.
//!
//! Both functions sum `i * k` for `i` in `1..=n`, where `k = sqrt(x) * ln(x)`
//! does not depend on `i`. [`recompute`] evaluates `k` on every step,
//! [`hoisted`] once up front. The optimizer may well hoist `k` out of the
//! loop in `recompute` on its own; how close the two end up is the result.

use std::hint::black_box;

#[inline(never)]
pub fn recompute(n: u64, x: f64) -> f64 {
    let mut acc = 0.0;
    for i in 1..=n {
        let k = x.sqrt() * x.ln();
        acc += i as f64 * k;
    }
    acc
}

#[inline(never)]
pub fn hoisted(n: u64, x: f64) -> f64 {
    let k = x.sqrt() * x.ln();
    let mut acc = 0.0;
    for i in 1..=n {
        acc += i as f64 * k;
    }
    acc
}

/// Inputs for one native invocation. Arguments and results go through
/// `black_box` so neither call folds to a constant.
#[derive(Debug, Clone, Copy)]
pub struct NativeWorkload {
    inner_loop: u64,
    input: f64,
}

impl NativeWorkload {
    pub fn new(inner_loop: u64, input: f64) -> Self {
        Self { inner_loop, input }
    }

    pub fn run_recompute(&self) {
        black_box(recompute(black_box(self.inner_loop), black_box(self.input)));
    }

    pub fn run_hoisted(&self) {
        black_box(hoisted(black_box(self.inner_loop), black_box(self.input)));
    }
}
