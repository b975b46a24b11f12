use core::fmt;
#[cfg(feature = "std")]
use std::error::Error as StdError;

/// A wire value that could not be decoded.
///
/// Decoding a known-length integer only fails when the input is the wrong
/// length; an unrecognised *value* is never an error and decodes to the
/// type's `Unknown` variant instead.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMessage {
    /// Missing data for the named payload value
    MissingData(&'static str),
    /// Trailing data found for the named payload value
    TrailingData(&'static str),
}

impl fmt::Display for InvalidMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingData(what) => write!(f, "missing data for {what}"),
            Self::TrailingData(what) => write!(f, "trailing data after {what}"),
        }
    }
}

#[cfg(feature = "std")]
impl StdError for InvalidMessage {}
