//! # Fractional Seconds Types
//!
//! Precision validation and fraction parsing for SQL time literals.
//!
//! ## Design Philosophy
//!
//! - **Scaled Integers**: fractions are millionths of a second, never floats
//! - **MySQL Rounding**: half-up at `.5` to the requested precision
//! - **Explicit Carry**: rounding overflow is an outcome, not an error
//! - **Traceable Errors**: every error records where it was raised
//!
//! ## Quick Start
//!
//! ```rust
//! use types::{align_frac, check_fsp, parse_frac, FracOutcome};
//!
//! assert_eq!(check_fsp(-1).unwrap().get(), 0);
//!
//! assert_eq!(parse_frac("1236", 3).unwrap(), FracOutcome::Value(124_000));
//! assert_eq!(parse_frac("999", 2).unwrap(), FracOutcome::Overflow);
//! assert!(parse_frac("12a3", 2).is_err());
//!
//! assert_eq!(align_frac("12", 5), "12000");
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use types::{FracConfig, FracOutcome, FracParser, ShortFractionScale};
//!
//! let parser = FracParser::new(FracConfig {
//!     short_fraction_scale: ShortFractionScale::Micros,
//!     ..FracConfig::default()
//! });
//! assert_eq!(parser.parse("12", 3).unwrap(), FracOutcome::Value(120_000));
//! ```

pub mod common;
pub mod precision;
pub mod settings;

pub use common::errors::FspError;
pub use common::fraction::{align_frac, parse_frac, FracOutcome, FracParser};
pub use precision::{check_fsp, Fsp, DEFAULT_FSP, MAX_FSP, MIN_FSP, UNSPECIFIED_FSP};
pub use settings::{FracConfig, ShortFractionScale};

pub type Result<T> = precision::Result<T>;
