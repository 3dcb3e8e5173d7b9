use thiserror::Error;

/// Errors raised while building points and segments or evaluating a metric.
///
/// Every variant is a deterministic validation failure; retrying with the same
/// input yields the same error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A selector or input value has the wrong kind, e.g. a float used as an index.
    #[error("argument '{found}' is not an axis name or an integer index")]
    InvalidArgumentType { found: String },

    #[error("'{name}' is not a valid coordinate name, try an index or one of x, y, z")]
    InvalidCoordinateName { name: String },

    #[error("index {index} is out of range for a point with {dimension} dimensions")]
    IndexOutOfRange { index: i128, dimension: usize },

    #[error("cannot build a segment between a {start}D point and a {end}D point")]
    DimensionMismatch { start: usize, end: usize },

    /// Both coordinates at `index` are zero, so the Canberra term has no denominator.
    #[error("canberra term at index {index} divides by zero")]
    DivisionByZero { index: usize },

    #[error("minkowski order must be a finite positive number, got {order}")]
    InvalidOrder { order: f64 },

    #[error("unknown metric '{name}'")]
    UnknownMetric { name: String },
}

pub type Result<T> = std::result::Result<T, GeometryError>;
