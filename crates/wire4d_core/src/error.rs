//! Geometry error types

use std::fmt;

/// Invalid object topology found at ingestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// A line or polygon refers to a point that does not exist
    IndexOutOfRange { index: usize, len: usize },
    /// A polygon has fewer than three vertices
    DegeneratePolygon { polygon: usize, vertices: usize },
    /// A shape names an axis other than x, y or z
    InvalidAxis { axis: usize },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::IndexOutOfRange { index, len } => {
                write!(f, "Point index {} out of range for {} points", index, len)
            }
            GeometryError::DegeneratePolygon { polygon, vertices } => {
                write!(f, "Polygon {} has only {} vertices", polygon, vertices)
            }
            GeometryError::InvalidAxis { axis } => {
                write!(f, "Axis {} is not 0, 1 or 2", axis)
            }
        }
    }
}

impl std::error::Error for GeometryError {}
