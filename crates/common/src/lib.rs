//! Shared value types used across the workspace.

pub mod error;
pub mod types;

pub use error::CoordinateError;
pub use types::{Axis, Bearing, GeoPoint};
