//! Place-argument errors.

use thiserror::Error;

/// Errors from loading PLACE arguments directly.
///
/// The textual parser validates shape before loading, so these only
/// surface when calling code hands over a bad argument list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("The place command requires arguments.")]
    PlaceArgsMissing,

    #[error("The arguments for place are invalid.")]
    PlaceArgsInvalid,
}
