//! Geometric solids and their base area / volume formulas

use crate::error::ShapeSortError;
use std::cmp::Ordering;
use std::f64::consts::{PI, SQRT_2};
use std::fmt;
use std::str::FromStr;

/// Type tag for the seven supported solids, as spelled in shape files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Cylinder,
    Cone,
    Pyramid,
    SquarePrism,
    TriangularPrism,
    PentagonalPrism,
    OctagonalPrism,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::Pyramid,
        ShapeKind::SquarePrism,
        ShapeKind::TriangularPrism,
        ShapeKind::PentagonalPrism,
        ShapeKind::OctagonalPrism,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Cylinder => "Cylinder",
            ShapeKind::Cone => "Cone",
            ShapeKind::Pyramid => "Pyramid",
            ShapeKind::SquarePrism => "SquarePrism",
            ShapeKind::TriangularPrism => "TriangularPrism",
            ShapeKind::PentagonalPrism => "PentagonalPrism",
            ShapeKind::OctagonalPrism => "OctagonalPrism",
        }
    }

    /// Label of the second dimension: radius for round bases, edge length otherwise
    pub fn dimension_name(self) -> &'static str {
        match self {
            ShapeKind::Cylinder | ShapeKind::Cone => "Radius",
            _ => "Edge Length",
        }
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ShapeSortError::unknown_shape_kind(s))
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// An immutable solid. Every variant stores its height plus one base dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Cylinder { height: f64, radius: f64 },
    Cone { height: f64, radius: f64 },
    Pyramid { height: f64, edge: f64 },
    SquarePrism { height: f64, edge: f64 },
    TriangularPrism { height: f64, edge: f64 },
    PentagonalPrism { height: f64, edge: f64 },
    OctagonalPrism { height: f64, edge: f64 },
}

impl Shape {
    /// Build a shape from its kind, height and second dimension (radius or edge)
    pub fn new(kind: ShapeKind, height: f64, second: f64) -> Self {
        match kind {
            ShapeKind::Cylinder => Shape::Cylinder { height, radius: second },
            ShapeKind::Cone => Shape::Cone { height, radius: second },
            ShapeKind::Pyramid => Shape::Pyramid { height, edge: second },
            ShapeKind::SquarePrism => Shape::SquarePrism { height, edge: second },
            ShapeKind::TriangularPrism => Shape::TriangularPrism { height, edge: second },
            ShapeKind::PentagonalPrism => Shape::PentagonalPrism { height, edge: second },
            ShapeKind::OctagonalPrism => Shape::OctagonalPrism { height, edge: second },
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Cylinder { .. } => ShapeKind::Cylinder,
            Shape::Cone { .. } => ShapeKind::Cone,
            Shape::Pyramid { .. } => ShapeKind::Pyramid,
            Shape::SquarePrism { .. } => ShapeKind::SquarePrism,
            Shape::TriangularPrism { .. } => ShapeKind::TriangularPrism,
            Shape::PentagonalPrism { .. } => ShapeKind::PentagonalPrism,
            Shape::OctagonalPrism { .. } => ShapeKind::OctagonalPrism,
        }
    }

    pub fn height(&self) -> f64 {
        match *self {
            Shape::Cylinder { height, .. }
            | Shape::Cone { height, .. }
            | Shape::Pyramid { height, .. }
            | Shape::SquarePrism { height, .. }
            | Shape::TriangularPrism { height, .. }
            | Shape::PentagonalPrism { height, .. }
            | Shape::OctagonalPrism { height, .. } => height,
        }
    }

    /// Radius for cylinders and cones, edge length for every other solid
    pub fn second_dimension(&self) -> f64 {
        match *self {
            Shape::Cylinder { radius, .. } | Shape::Cone { radius, .. } => radius,
            Shape::Pyramid { edge, .. }
            | Shape::SquarePrism { edge, .. }
            | Shape::TriangularPrism { edge, .. }
            | Shape::PentagonalPrism { edge, .. }
            | Shape::OctagonalPrism { edge, .. } => edge,
        }
    }

    pub fn base_area(&self) -> f64 {
        match *self {
            Shape::Cylinder { radius, .. } | Shape::Cone { radius, .. } => PI * radius * radius,
            Shape::Pyramid { edge, .. } | Shape::SquarePrism { edge, .. } => edge * edge,
            Shape::TriangularPrism { edge, .. } => (3f64.sqrt() / 4.0) * edge * edge,
            Shape::PentagonalPrism { edge, .. } => {
                5.0 * edge * edge * 54f64.to_radians().tan() / 4.0
            }
            Shape::OctagonalPrism { edge, .. } => 2.0 * (1.0 + SQRT_2) * edge * edge,
        }
    }

    pub fn volume(&self) -> f64 {
        let prism = self.base_area() * self.height();
        match self {
            Shape::Cone { .. } | Shape::Pyramid { .. } => prism / 3.0,
            _ => prism,
        }
    }

    /// Natural ordering of shapes: ascending by height
    pub fn cmp_height(&self, other: &Shape) -> Ordering {
        compare_f64(self.height(), other.height())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.kind();
        write!(
            f,
            "{} [Height={}, {}={}, Base Area={:.4}, Volume={:.4}]",
            kind,
            self.height(),
            kind.dimension_name(),
            self.second_dimension(),
            self.base_area(),
            self.volume()
        )
    }
}

/// Exact comparison of two metric values. NaN sorts after every number so the
/// relation stays total.
#[inline]
pub fn compare_f64(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}
