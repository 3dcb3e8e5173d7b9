use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::{GeometryError, Result};

/// Order used when `"minkowski"` is parsed without an explicit `:<p>` suffix.
pub const DEFAULT_MINKOWSKI_ORDER: f64 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Metric {
    /// L1, the sum of absolute differences.
    Manhattan,
    /// L2, the straight-line distance.
    Euclidean,
    /// Lp for a positive `order`. Build it with [`Metric::minkowski`] to validate the order up front.
    Minkowski { order: f64 },
    /// Sum of absolute differences, each normalised by the magnitudes of the pair.
    Canberra,
}

impl Metric {
    pub fn minkowski(order: f64) -> Result<Metric> {
        validate_order(order)?;
        Ok(Metric::Minkowski { order })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Metric::Manhattan => "manhattan",
            Metric::Euclidean => "euclidean",
            Metric::Minkowski { .. } => "minkowski",
            Metric::Canberra => "canberra",
        }
    }

    /// Distance between two coordinate sequences of equal length.
    ///
    /// Sequences of different lengths are a [`GeometryError::DimensionMismatch`].
    pub fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64> {
        if a.len() != b.len() {
            return Err(GeometryError::DimensionMismatch {
                start: a.len(),
                end: b.len(),
            });
        }

        match *self {
            Metric::Manhattan => Ok(manhattan(a, b)),
            Metric::Euclidean => Ok(euclidean(a, b)),
            Metric::Minkowski { order } => minkowski(a, b, order),
            Metric::Canberra => canberra(a, b),
        }
    }
}

fn validate_order(order: f64) -> Result<()> {
    if order.is_finite() && order > 0. {
        Ok(())
    } else {
        warn!(order, "rejecting minkowski order");
        Err(GeometryError::InvalidOrder { order })
    }
}

fn abs_diffs<'a>(a: &'a [f64], b: &'a [f64]) -> impl Iterator<Item = f64> + 'a {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs())
}

pub(crate) fn manhattan(a: &[f64], b: &[f64]) -> f64 {
    abs_diffs(a, b).sum()
}

pub(crate) fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    abs_diffs(a, b).map(|diff| diff.powi(2)).sum::<f64>().sqrt()
}

fn minkowski(a: &[f64], b: &[f64], order: f64) -> Result<f64> {
    validate_order(order)?;

    // keep the L1 and L2 cases bit-for-bit equal to the dedicated metrics
    if order == 1. {
        return Ok(manhattan(a, b));
    }
    if order == 2. {
        return Ok(euclidean(a, b));
    }

    // scale by the largest difference so high orders do not overflow
    let largest = abs_diffs(a, b).fold(0., f64::max);
    if largest == 0. {
        return Ok(0.);
    }

    Ok(largest
        * abs_diffs(a, b)
            .map(|diff| (diff / largest).powf(order))
            .sum::<f64>()
            .powf(order.recip()))
}

fn canberra(a: &[f64], b: &[f64]) -> Result<f64> {
    a.iter()
        .zip(b.iter())
        .enumerate()
        .map(|(index, (x, y))| {
            let denominator = x.abs() + y.abs();
            if denominator == 0. {
                warn!(index, "canberra pair is zero on both sides");
                return Err(GeometryError::DivisionByZero { index });
            }
            Ok((x - y).abs() / denominator)
        })
        .sum()
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Minkowski { order } => write!(f, "{}:{}", self.name(), order),
            _ => f.write_str(self.name()),
        }
    }
}

/// Accepts `manhattan`, `euclidean`, `canberra`, `minkowski` and `minkowski:<p>`,
/// ignoring case.
impl FromStr for Metric {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_lowercase();
        let (name, order) = match lowered.split_once(':') {
            Some((name, order)) => (name, Some(order)),
            None => (lowered.as_str(), None),
        };

        let unknown = || GeometryError::UnknownMetric {
            name: s.to_string(),
        };

        match (name, order) {
            ("manhattan", None) => Ok(Metric::Manhattan),
            ("euclidean", None) => Ok(Metric::Euclidean),
            ("canberra", None) => Ok(Metric::Canberra),
            ("minkowski", None) => Metric::minkowski(DEFAULT_MINKOWSKI_ORDER),
            ("minkowski", Some(order)) => {
                let order = order.trim().parse::<f64>().map_err(|_| {
                    GeometryError::InvalidArgumentType {
                        found: order.to_string(),
                    }
                })?;
                Metric::minkowski(order)
            }
            _ => Err(unknown()),
        }
    }
}
