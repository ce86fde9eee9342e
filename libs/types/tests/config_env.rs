//! Environment Override Tests
//!
//! Kept in a separate test binary since it mutates process environment.

use types::{FracConfig, FracOutcome, FracParser, ShortFractionScale};

#[test]
fn test_environment_overrides() {
    std::env::set_var("FSP_SHORT_FRACTION_SCALE", "micros");
    std::env::set_var("FSP_DEFAULT_FSP", "2");

    let config = FracConfig::load(None).unwrap();

    std::env::remove_var("FSP_SHORT_FRACTION_SCALE");
    std::env::remove_var("FSP_DEFAULT_FSP");

    assert_eq!(config.short_fraction_scale, ShortFractionScale::Micros);
    assert_eq!(config.default_fsp, 2);

    let parser = FracParser::new(config);
    assert_eq!(parser.parse_default("999").unwrap(), FracOutcome::Overflow);
}
