//! Error types for fractional-seconds precision handling
//!
//! Covers the two failure modes of fraction parsing: a requested precision
//! outside the supported range, and a digit string that does not form a
//! number. Every variant records the source location that raised or
//! propagated it, so a failure deep inside a time-literal parser can be
//! traced back without string concatenation.

use std::num::{ParseFloatError, ParseIntError};
use std::panic::Location;
use thiserror::Error;

/// Errors that can occur while validating precision or parsing fraction text
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FspError {
    /// Requested precision is neither the unspecified sentinel nor in [0, 6]
    #[error("Invalid fsp {fsp} (at {location})")]
    InvalidFsp {
        fsp: i32,
        location: &'static Location<'static>,
    },

    /// Fraction text shorter than the precision is not a base-10 integer
    #[error("Invalid fraction digits '{input}' (at {location})")]
    MalformedInteger {
        input: String,
        #[source]
        source: ParseIntError,
        location: &'static Location<'static>,
    },

    /// Fraction text requiring rounding is not a decimal number
    #[error("Invalid fraction '{input}' (at {location})")]
    MalformedFloat {
        input: String,
        #[source]
        source: ParseFloatError,
        location: &'static Location<'static>,
    },

    /// Fraction text is a well-formed number too large for `f64`
    #[error("Fraction '{input}' out of range (at {location})")]
    FloatOutOfRange {
        input: String,
        location: &'static Location<'static>,
    },
}

impl FspError {
    /// Build an `InvalidFsp` annotated with the caller's location
    #[track_caller]
    pub fn invalid_fsp(fsp: i32) -> Self {
        Self::InvalidFsp {
            fsp,
            location: Location::caller(),
        }
    }

    #[track_caller]
    pub(crate) fn malformed_integer(input: &str, source: ParseIntError) -> Self {
        Self::MalformedInteger {
            input: input.to_string(),
            source,
            location: Location::caller(),
        }
    }

    #[track_caller]
    pub(crate) fn malformed_float(input: &str, source: ParseFloatError) -> Self {
        Self::MalformedFloat {
            input: input.to_string(),
            source,
            location: Location::caller(),
        }
    }

    #[track_caller]
    pub(crate) fn float_out_of_range(input: &str) -> Self {
        Self::FloatOutOfRange {
            input: input.to_string(),
            location: Location::caller(),
        }
    }

    /// Offending precision, if this is a precision error
    pub fn fsp(&self) -> Option<i32> {
        match self {
            Self::InvalidFsp { fsp, .. } => Some(*fsp),
            _ => None,
        }
    }

    /// True when the fraction text itself was malformed
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedInteger { .. }
                | Self::MalformedFloat { .. }
                | Self::FloatOutOfRange { .. }
        )
    }

    /// Source location that raised or last propagated this error
    pub fn location(&self) -> &'static Location<'static> {
        match self {
            Self::InvalidFsp { location, .. }
            | Self::MalformedInteger { location, .. }
            | Self::MalformedFloat { location, .. }
            | Self::FloatOutOfRange { location, .. } => location,
        }
    }
}
