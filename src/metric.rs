//! Metric selectors: stateless strategies comparing two shapes by one property

use crate::config::SortOrder;
use crate::error::ShapeSortError;
use crate::shape::{compare_f64, Shape};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The numeric property used to rank shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Natural ordering of shapes
    Height,
    BaseArea,
    Volume,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Height, Metric::BaseArea, Metric::Volume];

    /// The value a shape is ranked by under this metric
    #[inline]
    pub fn value(self, shape: &Shape) -> f64 {
        match self {
            Metric::Height => shape.height(),
            Metric::BaseArea => shape.base_area(),
            Metric::Volume => shape.volume(),
        }
    }

    /// Ascending comparison by this metric, exact on the underlying float
    #[inline]
    pub fn compare(self, a: &Shape, b: &Shape) -> Ordering {
        match self {
            Metric::Height => a.cmp_height(b),
            _ => compare_f64(self.value(a), self.value(b)),
        }
    }

    /// Comparison closure with the requested direction already applied
    pub fn comparator(self, order: SortOrder) -> impl Fn(&Shape, &Shape) -> Ordering + Copy {
        move |a, b| match order {
            SortOrder::Ascending => self.compare(a, b),
            SortOrder::Descending => self.compare(b, a),
        }
    }
}

impl FromStr for Metric {
    type Err = ShapeSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "h" | "height" => Ok(Metric::Height),
            "a" | "area" | "base-area" | "basearea" => Ok(Metric::BaseArea),
            "v" | "volume" => Ok(Metric::Volume),
            _ => Err(ShapeSortError::unknown_metric(s)),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Metric::Height => "Height",
            Metric::BaseArea => "Base Area",
            Metric::Volume => "Volume",
        };
        f.pad(label)
    }
}
