//! Fractional Seconds Precision (fsp) Handling
//!
//! A time value keeps between 0 and 6 digits of sub-second precision,
//! mirroring MySQL's `TIME(fsp)` / `DATETIME(fsp)` column types.
//!
//! ## Precision Rules
//!
//! - **Range**: precision is always in `[MIN_FSP, MAX_FSP]` after validation
//! - **Unspecified**: the sentinel `UNSPECIFIED_FSP` maps to `DEFAULT_FSP`
//! - **Scale**: fractions are stored in millionths of a second regardless of
//!   the requested precision
//!
//! ## Example Usage
//!
//! ```rust
//! use types::precision::{check_fsp, Fsp, UNSPECIFIED_FSP};
//!
//! assert_eq!(check_fsp(3).unwrap().get(), 3);
//! assert_eq!(check_fsp(UNSPECIFIED_FSP).unwrap(), Fsp::default());
//! assert!(check_fsp(7).is_err());
//! ```

use std::fmt;

use crate::common::errors::FspError;

/// Unspecified fractional seconds part
pub const UNSPECIFIED_FSP: i32 = -1;

/// Maximum digits of fractional seconds part
pub const MAX_FSP: i32 = 6;

/// Minimum digits of fractional seconds part
pub const MIN_FSP: i32 = 0;

/// Default digits of fractional seconds part (MySQL uses 0)
pub const DEFAULT_FSP: i32 = 0;

pub type Result<T> = std::result::Result<T, FspError>;

/// Validated fractional seconds precision, always in `[MIN_FSP, MAX_FSP]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fsp(u8);

impl Fsp {
    /// Precision used when none is specified
    pub const DEFAULT: Self = Self(DEFAULT_FSP as u8);

    /// Largest supported precision (microseconds)
    pub const MAX: Self = Self(MAX_FSP as u8);

    /// Number of fractional digits
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// `10^fsp`, the exclusive upper bound of a fraction at this precision
    #[inline]
    pub const fn scale(self) -> u32 {
        10u32.pow(self.0 as u32)
    }

    /// `10^(6 - fsp)`, microseconds represented by one unit at this precision
    #[inline]
    pub const fn micros_per_unit(self) -> u32 {
        10u32.pow((MAX_FSP as u8 - self.0) as u32)
    }
}

impl Default for Fsp {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i32> for Fsp {
    type Error = FspError;

    #[track_caller]
    fn try_from(fsp: i32) -> Result<Self> {
        check_fsp(fsp)
    }
}

impl From<Fsp> for i32 {
    fn from(fsp: Fsp) -> Self {
        fsp.0 as i32
    }
}

impl fmt::Display for Fsp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validate a requested precision
///
/// `UNSPECIFIED_FSP` resolves to `DEFAULT_FSP`; anything else outside
/// `[MIN_FSP, MAX_FSP]` is rejected with the offending value. The error is
/// annotated with the caller's location.
#[track_caller]
pub fn check_fsp(fsp: i32) -> Result<Fsp> {
    if fsp == UNSPECIFIED_FSP {
        return Ok(Fsp::DEFAULT);
    }
    if !(MIN_FSP..=MAX_FSP).contains(&fsp) {
        tracing::debug!(fsp, "rejecting out-of-range fsp");
        return Err(FspError::invalid_fsp(fsp));
    }
    Ok(Fsp(fsp as u8))
}
