//! Fractional seconds parsing
//!
//! Turns the digits after the decimal point of a time literal into a
//! fraction expressed in millionths of a second, rounding half-up to the
//! requested precision the way MySQL does.
//!
//! ```text
//!  "1236" fsp 3 -> 0.1236 -> 123.6 -> 124 -> 124000
//!  "0312" fsp 2 -> 0.0312 ->   3.12 ->   3 ->  30000
//!  "999"  fsp 2 -> 0.999  ->  99.9  -> 100 -> overflow
//! ```
//!
//! Overflow is not an error: the caller carries one second into the whole
//! seconds field and uses a zero fraction.

use crate::common::errors::FspError;
use crate::precision::{check_fsp, Fsp, Result, MAX_FSP};
use crate::settings::{FracConfig, ShortFractionScale};

/// Outcome of a successful fraction parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FracOutcome {
    /// Fraction fits the requested precision
    Value(u32),
    /// Rounding reached `10^fsp`; carry one into whole seconds
    Overflow,
}

impl FracOutcome {
    /// The fraction, or `None` on overflow
    pub fn value(self) -> Option<u32> {
        match self {
            Self::Value(v) => Some(v),
            Self::Overflow => None,
        }
    }

    pub fn is_overflow(self) -> bool {
        matches!(self, Self::Overflow)
    }

    /// Whole seconds to add to the enclosing time value
    pub fn carry(self) -> u32 {
        match self {
            Self::Value(_) => 0,
            Self::Overflow => 1,
        }
    }
}

/// Fraction parser bound to a configuration
#[derive(Debug, Clone, Default)]
pub struct FracParser {
    config: FracConfig,
}

impl FracParser {
    pub fn new(config: FracConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FracConfig {
        &self.config
    }

    /// Parse `text` at the requested precision
    ///
    /// Empty text is always a zero fraction, even when `fsp` is invalid.
    #[track_caller]
    pub fn parse(&self, text: &str, fsp: i32) -> Result<FracOutcome> {
        if text.is_empty() {
            return Ok(FracOutcome::Value(0));
        }

        let fsp = check_fsp(fsp)?;
        let len = text.len();

        if usize::from(fsp.get()) > len {
            tracing::trace!(text, %fsp, "filling short fraction");
            return self.fill_short(text, fsp);
        }

        tracing::trace!(text, %fsp, "rounding fraction");
        round_fraction(text, fsp)
    }

    /// Parse `text` at the configured default precision
    #[track_caller]
    pub fn parse_default(&self, text: &str) -> Result<FracOutcome> {
        self.parse(text, self.config.default_fsp)
    }

    #[track_caller]
    fn fill_short(&self, text: &str, fsp: Fsp) -> Result<FracOutcome> {
        let digits = match text.parse::<u32>() {
            Ok(digits) => digits,
            Err(e) => return Err(FspError::malformed_integer(text, e)),
        };

        // len < fsp <= 6, so the scaled value stays below 10^6
        let target = match self.config.short_fraction_scale {
            ShortFractionScale::Requested => u32::from(fsp.get()),
            ShortFractionScale::Micros => MAX_FSP as u32,
        };
        let pad = target - text.len() as u32;

        Ok(FracOutcome::Value(digits * 10u32.pow(pad)))
    }
}

#[track_caller]
fn round_fraction(text: &str, fsp: Fsp) -> Result<FracOutcome> {
    let parsed = if text.starts_with('.') || text.starts_with("0.") {
        text.parse::<f64>()
    } else {
        format!("0.{text}").parse::<f64>()
    };
    let frac = match parsed {
        Ok(frac) if frac.is_finite() => frac,
        Ok(_) => return Err(FspError::float_out_of_range(text)),
        Err(e) => return Err(FspError::malformed_float(text, e)),
    };

    let digit = frac * f64::from(fsp.scale());
    let rounded = if digit.fract() >= 0.5 {
        digit.ceil()
    } else {
        digit.floor()
    };

    if rounded >= f64::from(fsp.scale()) {
        tracing::debug!(text, %fsp, "fraction rounding overflowed into seconds");
        return Ok(FracOutcome::Overflow);
    }

    Ok(FracOutcome::Value(
        (rounded * f64::from(fsp.micros_per_unit())) as u32,
    ))
}

/// Parse fraction text with the default configuration
///
/// Returns the fraction in millionths of a second when rounding was needed.
/// Text shorter than `fsp` is scaled to `fsp` digits only; see
/// [`ShortFractionScale`].
#[track_caller]
pub fn parse_frac(text: &str, fsp: i32) -> Result<FracOutcome> {
    FracParser::default().parse(text, fsp)
}

/// Right-pad `text` with `'0'` to at least `len` characters, e.g. `100` -> `100000`
pub fn align_frac(text: &str, len: usize) -> String {
    format!("{text:0<len$}")
}
