//! Timed sort runs over private copies of the loaded shapes

use crate::algorithms::{is_sorted_by, SortAlgorithm};
use crate::config::{RunConfig, SortOrder};
use crate::error::{ShapeSortError, ShapeSortResult};
use crate::loader::load_shapes;
use crate::metric::Metric;
use crate::report;
use crate::shape::Shape;
use log::{debug, info};
use std::io::Write;
use std::time::{Duration, Instant};

/// One metric/algorithm run: the sorted copy and how long the sort took
#[derive(Debug, Clone)]
pub struct SortRun {
    pub metric: Metric,
    pub algorithm: SortAlgorithm,
    pub order: SortOrder,
    pub elapsed: Duration,
    pub shapes: Vec<Shape>,
}

impl SortRun {
    /// Sort a private copy of `shapes`, leaving the caller's slice untouched
    pub fn execute(
        shapes: &[Shape],
        metric: Metric,
        algorithm: SortAlgorithm,
        order: SortOrder,
    ) -> Self {
        let mut working = shapes.to_vec();
        let compare = metric.comparator(order);

        let start = Instant::now();
        algorithm.sort_by(&mut working, compare);
        let elapsed = start.elapsed();

        debug!(
            "{} sort by {} ({}) of {} shapes took {:?}",
            algorithm,
            metric,
            order,
            working.len(),
            elapsed
        );

        Self {
            metric,
            algorithm,
            order,
            elapsed,
            shapes: working,
        }
    }

    /// Elapsed time in fractional milliseconds
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// Whether the result is ordered under the run's metric and direction
    pub fn is_ordered(&self) -> bool {
        is_sorted_by(&self.shapes, self.metric.comparator(self.order))
    }

    /// Metric values of the sorted shapes, in order
    pub fn metric_values(&self) -> Vec<f64> {
        self.shapes.iter().map(|s| self.metric.value(s)).collect()
    }
}

/// Run every metric/algorithm combination, each on its own copy of `shapes`
pub fn run_all(shapes: &[Shape], order: SortOrder) -> Vec<SortRun> {
    Metric::ALL
        .into_iter()
        .flat_map(|metric| {
            SortAlgorithm::ALL
                .into_iter()
                .map(move |algorithm| SortRun::execute(shapes, metric, algorithm, order))
        })
        .collect()
}

/// Load the configured file, sort it and write the report to `out`
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> ShapeSortResult<Vec<SortRun>> {
    config.validate()?;

    let shapes = load_shapes(&config.file)?;
    if shapes.is_empty() {
        return Err(ShapeSortError::no_shapes(&config.file));
    }

    let runs = if config.run_all {
        let runs = run_all(&shapes, config.order);
        report::write_summary(out, &config.file, shapes.len(), &runs)?;
        runs
    } else {
        let (metric, algorithm) = config.selection()?;
        let run = SortRun::execute(&shapes, metric, algorithm, config.order);
        report::write_report(out, &config.file, &run, config.sample_interval)?;
        vec![run]
    };

    for run in &runs {
        info!(
            "{} sort by {}: {:.4} ms",
            run.algorithm,
            run.metric,
            run.elapsed_ms()
        );
        if config.debug && !run.is_ordered() {
            return Err(ShapeSortError::internal(&format!(
                "{} sort produced an unordered result",
                run.algorithm
            )));
        }
    }

    Ok(runs)
}
