//! Configuration management for sort runs

use crate::algorithms::SortAlgorithm;
use crate::error::{ShapeSortError, ShapeSortResult};
use crate::metric::Metric;
use std::fmt;

/// Default distance between sampled rows in the report
pub const DEFAULT_SAMPLE_INTERVAL: usize = 1000;

/// Sort order enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => f.write_str("ascending"),
            SortOrder::Descending => f.write_str("descending"),
        }
    }
}

/// Fully resolved configuration for one invocation
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Shape file to load
    pub file: String,
    /// Metric to rank by; `None` only when `run_all` is set
    pub metric: Option<Metric>,
    /// Algorithm to sort with; `None` only when `run_all` is set
    pub algorithm: Option<SortAlgorithm>,
    /// Direction applied to every comparison
    pub order: SortOrder,
    /// Print every Nth element between the first and the last
    pub sample_interval: usize,
    /// Time every metric/algorithm combination instead of a single run
    pub run_all: bool,
    /// Verbose diagnostics
    pub debug: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            file: String::new(),
            metric: None,
            algorithm: None,
            order: SortOrder::Ascending,
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
            run_all: false,
            debug: false,
        }
    }
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = Some(metric);
        self
    }

    pub fn with_algorithm(mut self, algorithm: SortAlgorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_sample_interval(mut self, interval: usize) -> Self {
        self.sample_interval = interval;
        self
    }

    /// Validate configuration for completeness
    pub fn validate(&self) -> ShapeSortResult<()> {
        if self.file.is_empty() {
            return Err(ShapeSortError::missing_option(
                "file name (-f). Please provide a valid file path",
            ));
        }

        if !self.run_all {
            if self.metric.is_none() {
                return Err(ShapeSortError::missing_option(
                    "comparison type (-t). Use 'H', 'A', or 'V'",
                ));
            }
            if self.algorithm.is_none() {
                return Err(ShapeSortError::missing_option(
                    "sorting method (-s). Use 'B', 'I', 'S', 'M', 'Q', or 'H'",
                ));
            }
        }

        if self.sample_interval == 0 {
            return Err(ShapeSortError::invalid_sample_interval(
                "interval must be positive",
            ));
        }

        Ok(())
    }

    /// The single metric/algorithm pair of a validated, non-`run_all` config
    pub fn selection(&self) -> ShapeSortResult<(Metric, SortAlgorithm)> {
        match (self.metric, self.algorithm) {
            (Some(metric), Some(algorithm)) => Ok((metric, algorithm)),
            (None, _) => Err(ShapeSortError::missing_option("comparison type (-t)")),
            (_, None) => Err(ShapeSortError::missing_option("sorting method (-s)")),
        }
    }
}

/// Builder pattern for creating configurations
pub struct RunConfigBuilder {
    config: RunConfig,
}

impl RunConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RunConfig::default(),
        }
    }

    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.config.file = file.into();
        self
    }

    pub fn metric(mut self, metric: Metric) -> Self {
        self.config.metric = Some(metric);
        self
    }

    pub fn algorithm(mut self, algorithm: SortAlgorithm) -> Self {
        self.config.algorithm = Some(algorithm);
        self
    }

    /// Sort largest first
    pub fn reverse(mut self) -> Self {
        self.config.order = SortOrder::Descending;
        self
    }

    pub fn sample_interval(mut self, interval: usize) -> Self {
        self.config.sample_interval = interval;
        self
    }

    pub fn run_all(mut self) -> Self {
        self.config.run_all = true;
        self
    }

    pub fn debug(mut self) -> Self {
        self.config.debug = true;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> ShapeSortResult<RunConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for RunConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RunConfig::default();
        assert_eq!(config.order, SortOrder::Ascending);
        assert_eq!(config.sample_interval, DEFAULT_SAMPLE_INTERVAL);
        assert!(config.metric.is_none());
        assert!(!config.run_all);
    }

    #[test]
    fn test_config_builder() {
        let config = RunConfigBuilder::new()
            .file("shapes.txt")
            .metric(Metric::Volume)
            .algorithm(SortAlgorithm::Quick)
            .reverse()
            .build()
            .expect("Failed to build test config");

        assert_eq!(config.file, "shapes.txt");
        assert_eq!(config.order, SortOrder::Descending);
        assert_eq!(
            config.selection().expect("Failed to read selection"),
            (Metric::Volume, SortAlgorithm::Quick)
        );
    }

    #[test]
    fn test_missing_options_rejected() {
        let missing_file = RunConfigBuilder::new()
            .metric(Metric::Height)
            .algorithm(SortAlgorithm::Bubble)
            .build();
        assert!(matches!(missing_file, Err(ShapeSortError::MissingOption { .. })));

        let missing_metric = RunConfigBuilder::new()
            .file("shapes.txt")
            .algorithm(SortAlgorithm::Bubble)
            .build();
        assert!(matches!(missing_metric, Err(ShapeSortError::MissingOption { .. })));

        let missing_algorithm = RunConfigBuilder::new()
            .file("shapes.txt")
            .metric(Metric::Height)
            .build();
        assert!(matches!(missing_algorithm, Err(ShapeSortError::MissingOption { .. })));
    }

    #[test]
    fn test_run_all_needs_only_file() {
        let config = RunConfigBuilder::new()
            .file("shapes.txt")
            .run_all()
            .build()
            .expect("Failed to build run-all config");
        assert!(config.run_all);
        assert!(config.selection().is_err());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = RunConfig::new()
            .with_file("shapes.txt")
            .with_metric(Metric::Height)
            .with_algorithm(SortAlgorithm::Heap)
            .with_sample_interval(0);
        assert!(matches!(
            config.validate(),
            Err(ShapeSortError::InvalidSampleInterval { .. })
        ));
    }
}
