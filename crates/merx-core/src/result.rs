//! Result type aliases for Merx.

use crate::MerxError;

/// A specialized `Result` type for Merx operations.
pub type MerxResult<T> = Result<T, MerxError>;
