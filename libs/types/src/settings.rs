//! Fraction Parsing Configuration
//!
//! Loads parser settings from an optional TOML file with environment
//! overrides (`FSP_` prefix), e.g. `FSP_SHORT_FRACTION_SCALE=micros`.

use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::precision::UNSPECIFIED_FSP;

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "FSP";

/// Scale applied to fraction text with fewer digits than the requested precision
///
/// Text that needs rounding is always scaled to millionths. Shorter text has
/// historically been scaled only to the requested precision, so `"12"` at
/// fsp 3 yields `120` rather than `120000`. `Micros` puts both paths on the
/// same scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortFractionScale {
    /// Scale to the requested precision (MySQL-compatible callers)
    #[default]
    Requested,
    /// Scale to six digits, like the rounding path
    Micros,
}

/// Fraction parser settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FracConfig {
    pub short_fraction_scale: ShortFractionScale,
    /// Precision used by `FracParser::parse_default`
    pub default_fsp: i32,
}

impl Default for FracConfig {
    fn default() -> Self {
        Self {
            short_fraction_scale: ShortFractionScale::default(),
            default_fsp: UNSPECIFIED_FSP,
        }
    }
}

impl FracConfig {
    /// Load configuration from an optional TOML file with environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            if path.exists() {
                info!("Loading fraction parser config: {:?}", path);
                builder = builder.add_source(File::from(path).format(FileFormat::Toml));
            } else {
                warn!("Fraction parser config not found: {:?}", path);
            }
        }

        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        let config = builder
            .build()
            .context("Failed to build fraction parser configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize fraction parser configuration")
    }

    /// Parse configuration from an embedded TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).context("Failed to parse fraction parser TOML")
    }
}
