//! Console presentation of sorted runs

use crate::runner::SortRun;
use crate::shape::Shape;
use std::io::{self, Write};

const RULE: &str = "------------------------------------------------";

/// A sampled row: its label and its position in the sorted sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub label: String,
    pub index: usize,
}

/// Pick the first element, every `interval`-th element and the last one
pub fn sample_indices(len: usize, interval: usize) -> Vec<Sample> {
    if len == 0 {
        return Vec::new();
    }

    let mut samples = vec![Sample {
        label: "First".to_string(),
        index: 0,
    }];

    if interval > 0 {
        samples.extend(
            (interval..len - 1)
                .step_by(interval)
                .map(|index| Sample {
                    label: format!("{index}-th"),
                    index,
                }),
        );
    }

    if len > 1 {
        samples.push(Sample {
            label: "Last".to_string(),
            index: len - 1,
        });
    }

    samples
}

/// Write the sampled table and timing line for a single run
pub fn write_report<W: Write>(
    out: &mut W,
    file: &str,
    run: &SortRun,
    interval: usize,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "{:<10} {:<30} {:<15}", "Index", "FileName+Shape", run.metric)?;

    for sample in sample_indices(run.shapes.len(), interval) {
        let shape: &Shape = &run.shapes[sample.index];
        writeln!(
            out,
            "{:<10} {:<30} {:<15.4}",
            sample.label,
            format!("{}+{}", file, shape.kind()),
            run.metric.value(shape)
        )?;
    }

    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "Sorting algorithm: {} | Time taken: {:.4} milliseconds",
        run.algorithm,
        run.elapsed_ms()
    )?;
    Ok(())
}

/// Write one timing line per run for a full benchmark
pub fn write_summary<W: Write>(
    out: &mut W,
    file: &str,
    count: usize,
    runs: &[SortRun],
) -> io::Result<()> {
    writeln!(out, "Benchmark of {count} shapes from {file}")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "{:<12} {:<12} {:>15}", "Metric", "Algorithm", "Time (ms)")?;
    for run in runs {
        writeln!(
            out,
            "{:<12} {:<12} {:>15.4}",
            run.metric.to_string(),
            run.algorithm.name(),
            run.elapsed_ms()
        )?;
    }
    writeln!(out, "{RULE}")?;
    Ok(())
}
