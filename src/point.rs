use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};

/// Points with more axes than this cannot be plotted.
pub const MAX_GRAPHABLE_DIMENSION: usize = 3;

/// Axis names accepted by [`Point::coordinate`], in index order.
const AXIS_NAMES: [&str; MAX_GRAPHABLE_DIMENSION] = ["x", "y", "z"];

/// An N-dimensional point.
///
/// The number of coordinates is fixed between calls to [`Point::set_coordinates`],
/// which replaces the whole sequence at once. A point is graphable when it has
/// between one and three coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point {
    coordinates: Vec<f64>,
}

impl Point {
    /// A zero-dimension point. It has no coordinates and is never graphable.
    pub fn new() -> Point {
        Point {
            coordinates: vec![],
        }
    }

    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_graphable(&self) -> bool {
        (1..=MAX_GRAPHABLE_DIMENSION).contains(&self.dimension())
    }

    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// Replaces every coordinate. Dimension and graphability follow the new sequence.
    pub fn set_coordinates(&mut self, coordinates: Vec<f64>) {
        self.coordinates = coordinates;
    }

    /// Looks up a single coordinate by axis name (`"x"`, `"Y"`, `'z'`) or by index.
    ///
    /// Negative indices are rejected rather than counted from the end, and
    /// floating point selectors are always an [`GeometryError::InvalidArgumentType`].
    ///
    /// ```
    /// use segment_metrics::Point;
    ///
    /// let p = Point::from(vec![1.0, 2.0, 3.0]);
    /// assert_eq!(p.coordinate("Y").unwrap(), 2.0);
    /// assert_eq!(p.coordinate(2).unwrap(), 3.0);
    /// assert!(p.coordinate(-1).is_err());
    /// ```
    pub fn coordinate<S>(&self, selector: S) -> Result<f64>
    where
        S: TryInto<CoordinateSelector, Error = GeometryError>,
    {
        self.select(&selector.try_into()?)
    }

    pub fn select(&self, selector: &CoordinateSelector) -> Result<f64> {
        let index = match selector {
            CoordinateSelector::Name(name) => axis_index(name)? as i128,
            CoordinateSelector::Index(index) => *index,
        };

        usize::try_from(index)
            .ok()
            .and_then(|idx| self.coordinates.get(idx).copied())
            .ok_or(GeometryError::IndexOutOfRange {
                index,
                dimension: self.dimension(),
            })
    }
}

fn axis_index(name: &str) -> Result<usize> {
    let name = name.to_lowercase();
    AXIS_NAMES
        .iter()
        .position(|axis| *axis == name)
        .ok_or(GeometryError::InvalidCoordinateName { name })
}

impl From<Vec<f64>> for Point {
    fn from(coordinates: Vec<f64>) -> Point {
        Point { coordinates }
    }
}

impl From<&[f64]> for Point {
    fn from(coordinates: &[f64]) -> Point {
        Point {
            coordinates: coordinates.to_vec(),
        }
    }
}

impl FromIterator<f64> for Point {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Point {
        Point {
            coordinates: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D point at {:?}", self.dimension(), self.coordinates)
    }
}

/// Picks one coordinate of a [`Point`], either by axis name or by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinateSelector {
    Name(String),
    /// Wide enough to hold any `usize` or signed index without clamping.
    Index(i128),
}

impl TryFrom<&str> for CoordinateSelector {
    type Error = GeometryError;

    fn try_from(name: &str) -> Result<Self> {
        Ok(CoordinateSelector::Name(name.to_string()))
    }
}

impl TryFrom<String> for CoordinateSelector {
    type Error = GeometryError;

    fn try_from(name: String) -> Result<Self> {
        Ok(CoordinateSelector::Name(name))
    }
}

impl TryFrom<char> for CoordinateSelector {
    type Error = GeometryError;

    fn try_from(name: char) -> Result<Self> {
        Ok(CoordinateSelector::Name(name.to_string()))
    }
}

macro_rules! index_selector {
    ($($int:ty),*) => {
        $(
            impl TryFrom<$int> for CoordinateSelector {
                type Error = GeometryError;

                fn try_from(index: $int) -> Result<Self> {
                    Ok(CoordinateSelector::Index(index as i128))
                }
            }
        )*
    };
}

index_selector!(i32, i64, isize, u32, usize);

macro_rules! rejected_selector {
    ($($float:ty),*) => {
        $(
            impl TryFrom<$float> for CoordinateSelector {
                type Error = GeometryError;

                fn try_from(value: $float) -> Result<Self> {
                    Err(GeometryError::InvalidArgumentType {
                        found: value.to_string(),
                    })
                }
            }
        )*
    };
}

rejected_selector!(f32, f64);

/// Parses command-line style selectors: `"x"`, `"2"`, `"-1"`.
/// Anything numeric that is not an integer, such as `"3.5"`, is rejected.
impl FromStr for CoordinateSelector {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(index) = s.parse::<i128>() {
            return Ok(CoordinateSelector::Index(index));
        }
        if s.parse::<f64>().is_ok() {
            return Err(GeometryError::InvalidArgumentType {
                found: s.to_string(),
            });
        }
        Ok(CoordinateSelector::Name(s.to_string()))
    }
}
