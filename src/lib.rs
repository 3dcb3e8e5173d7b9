pub mod error;
pub use error::*;

pub mod metric;
pub use metric::*;

pub mod point;
pub use point::*;

pub mod segment;
pub use segment::*;
