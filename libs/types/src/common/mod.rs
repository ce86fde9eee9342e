//! Common fractional-seconds types shared by time-literal parsers

pub mod errors;
pub mod fraction;
