//! Domain error types.

use common::CoordinateError;
use thiserror::Error;

use crate::calendar::CalendarError;

/// Errors that can occur during domain operations.
///
/// Every variant describes bad client input; the message is meant to be
/// shown to the caller as-is.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A coordinate could not be read.
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),

    /// A date or timezone could not be resolved.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
