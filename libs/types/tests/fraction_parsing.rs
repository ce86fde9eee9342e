//! Fraction Parsing Integration Tests
//!
//! Exercises the public parsing surface the way a time-literal parser
//! drives it: split off the fraction digits, parse at the column
//! precision, then carry any overflow into whole seconds.

use std::error::Error as _;

use tracing_subscriber::EnvFilter;
use types::{
    align_frac, check_fsp, parse_frac, FracOutcome, FspError, MAX_FSP, MIN_FSP, UNSPECIFIED_FSP,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Split "SS.ffff" and return (seconds, micros) after carrying overflow
fn seconds_with_fraction(literal: &str, fsp: i32) -> Result<(u32, u32), FspError> {
    let (secs, frac) = literal.split_once('.').unwrap_or((literal, ""));
    let secs: u32 = secs.parse().expect("test literal has numeric seconds");

    Ok(match parse_frac(frac, fsp)? {
        FracOutcome::Value(micros) => (secs, micros),
        outcome @ FracOutcome::Overflow => (secs + outcome.carry(), 0),
    })
}

#[test]
fn test_check_fsp_contract() {
    init_tracing();

    for fsp in MIN_FSP..=MAX_FSP {
        assert_eq!(i32::from(check_fsp(fsp).unwrap()), fsp);
    }
    assert_eq!(i32::from(check_fsp(UNSPECIFIED_FSP).unwrap()), 0);
    assert!(check_fsp(-2).is_err());
    assert!(check_fsp(MAX_FSP + 1).is_err());
}

#[test]
fn test_documented_examples() {
    init_tracing();

    assert_eq!(parse_frac("12", 6).unwrap(), FracOutcome::Value(120_000));
    assert_eq!(parse_frac("1236", 3).unwrap(), FracOutcome::Value(124_000));
    assert_eq!(parse_frac("999", 2).unwrap(), FracOutcome::Overflow);
    assert_eq!(parse_frac("5", 6).unwrap(), FracOutcome::Value(500_000));
    assert_eq!(parse_frac("500000", 6).unwrap(), FracOutcome::Value(500_000));
}

#[test]
fn test_empty_fraction_ignores_precision() {
    for fsp in [-100, -2, UNSPECIFIED_FSP, 0, 3, 6, 7, i32::MAX] {
        assert_eq!(parse_frac("", fsp).unwrap(), FracOutcome::Value(0));
    }
}

#[test]
fn test_malformed_fraction_both_paths() {
    init_tracing();

    for fsp in [5, 6] {
        let err = parse_frac("12a3", fsp).unwrap_err();
        assert!(err.is_parse_error(), "fsp {fsp}: {err}");
        assert!(err.source().is_some());
    }
    for fsp in 0..=4 {
        let err = parse_frac("12a3", fsp).unwrap_err();
        assert!(err.is_parse_error(), "fsp {fsp}: {err}");
        assert!(err.source().is_some());
    }
}

#[test]
fn test_invalid_fsp_propagates() {
    match parse_frac("123", 10) {
        Err(FspError::InvalidFsp { fsp, location }) => {
            assert_eq!(fsp, 10);
            assert!(location.file().ends_with("fraction_parsing.rs"));
        }
        other => panic!("expected InvalidFsp, got {other:?}"),
    }
}

#[test]
fn test_parse_errors_record_call_site() {
    for (text, fsp) in [("12a3", 6), ("12a3", 2), ("1e999", 2)] {
        let err = parse_frac(text, fsp).unwrap_err();
        assert!(err.is_parse_error(), "{text} at fsp {fsp}: {err}");
        assert!(
            err.location().file().ends_with("fraction_parsing.rs"),
            "{text} at fsp {fsp}: {}",
            err.location()
        );
    }
}

#[test]
fn test_overflow_carries_into_seconds() {
    assert_eq!(seconds_with_fraction("59.999", 2).unwrap(), (60, 0));
    assert_eq!(seconds_with_fraction("12.5", 0).unwrap(), (13, 0));
    assert_eq!(seconds_with_fraction("12.4", 0).unwrap(), (12, 0));
    assert_eq!(seconds_with_fraction("7.1236", 3).unwrap(), (7, 124_000));
    assert_eq!(seconds_with_fraction("7", 3).unwrap(), (7, 0));
}

#[test]
fn test_align_frac_examples() {
    assert_eq!(align_frac("12", 5), "12000");
    assert_eq!(align_frac("12345", 3), "12345");
    assert_eq!(align_frac("1", 6), "100000");
}
