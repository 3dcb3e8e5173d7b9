use std::fmt;

use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::metric::{self, Metric};
use crate::point::Point;

/// A line segment between two borrowed points of the same dimension.
///
/// The dimension check happens once in [`Segment::new`]; a `Segment` that
/// exists always pairs points of equal dimension, and the borrow keeps either
/// point from being reshaped while the segment is alive.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    start: &'a Point,
    end: &'a Point,
}

impl<'a> Segment<'a> {
    pub fn new(start: &'a Point, end: &'a Point) -> Result<Segment<'a>> {
        if start.dimension() != end.dimension() {
            return Err(GeometryError::DimensionMismatch {
                start: start.dimension(),
                end: end.dimension(),
            });
        }
        debug!(dimension = start.dimension(), "segment created");
        Ok(Segment { start, end })
    }

    pub fn start_point(&self) -> &'a Point {
        self.start
    }

    pub fn end_point(&self) -> &'a Point {
        self.end
    }

    pub fn dimension(&self) -> usize {
        self.start.dimension()
    }

    /// Distance between the two end points under `metric`.
    ///
    /// Pure in the stored points: calling it twice gives the same value.
    pub fn distance(&self, metric: Metric) -> Result<f64> {
        let distance = metric.distance(self.start.coordinates(), self.end.coordinates())?;
        debug!(%metric, distance, "segment distance");
        Ok(distance)
    }

    pub fn manhattan(&self) -> f64 {
        metric::manhattan(self.start.coordinates(), self.end.coordinates())
    }

    pub fn euclidean(&self) -> f64 {
        metric::euclidean(self.start.coordinates(), self.end.coordinates())
    }

    pub fn minkowski(&self, order: f64) -> Result<f64> {
        self.distance(Metric::minkowski(order)?)
    }

    pub fn canberra(&self) -> Result<f64> {
        self.distance(Metric::Canberra)
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line segment between {} and {}", self.start, self.end)
    }
}
