// src/utils/mod.rs

pub mod dates;

/// Rounds to two decimal places, half away from zero.
pub fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
