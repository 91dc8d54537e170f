//! Rendering of finished comparisons.
//!
//! Every ratio is computed before anything is written, so a failing ratio
//! leaves the output empty instead of half-printed.

use crate::config::BenchConfig;
use crate::error::BenchResult;
use crate::host::HostInfo;
use crate::measurement::{Comparison, Measurement, Verdict};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

pub fn write_text<W: Write>(out: &mut W, comparisons: &[Comparison]) -> BenchResult<()> {
    let verdicts = comparisons
        .iter()
        .map(Comparison::verdict)
        .collect::<BenchResult<Vec<_>>>()?;

    let with_headers = comparisons.len() > 1;
    for (comparison, verdict) in comparisons.iter().zip(&verdicts) {
        if with_headers {
            writeln!(out, "[{}]", comparison.runtime)?;
        }
        write_measurement(out, &comparison.recompute)?;
        write_measurement(out, &comparison.hoisted)?;
        write_verdict(out, verdict)?;
    }
    Ok(())
}

fn write_measurement<W: Write>(out: &mut W, m: &Measurement) -> BenchResult<()> {
    writeln!(out, "{}: {:.2}s", m.label(), m.elapsed_secs())?;
    Ok(())
}

fn write_verdict<W: Write>(out: &mut W, v: &Verdict<'_>) -> BenchResult<()> {
    writeln!(
        out,
        "{} is faster than {} by a factor of {:.2}",
        v.faster, v.slower, v.factor
    )?;
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct JsonResult<'a> {
    #[serde(flatten)]
    pub comparison: &'a Comparison,
    /// recompute / hoisted
    pub ratio: f64,
}

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub timestamp: DateTime<Utc>,
    pub host: HostInfo,
    pub config: &'a BenchConfig,
    pub results: Vec<JsonResult<'a>>,
}

impl<'a> JsonReport<'a> {
    pub fn new(
        config: &'a BenchConfig,
        host: HostInfo,
        comparisons: &'a [Comparison],
    ) -> BenchResult<Self> {
        let results = comparisons
            .iter()
            .map(|comparison| {
                Ok(JsonResult {
                    comparison,
                    ratio: comparison.ratio()?,
                })
            })
            .collect::<BenchResult<Vec<_>>>()?;

        Ok(Self {
            timestamp: Utc::now(),
            host,
            config,
            results,
        })
    }
}

pub fn write_json<W: Write>(out: &mut W, report: &JsonReport<'_>) -> BenchResult<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
