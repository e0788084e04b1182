//! Numeric extraction from free-text spec values.
//!
//! Spec sheets encode quantities as `"5.0 GHz"`, `"1,000 W"`, `"DDR5-6000"`,
//! `"2 x 16GB"`, or plain numbers. Every extractor here degrades to `0` (or
//! `None` for the pattern helpers) instead of failing.

use std::sync::LazyLock;

use regex::Regex;

use super::SpecValue;

static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("static regex"));

static DDR_SPEED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ddr\s*\d\s*-\s*(\d{3,5})").expect("static regex"));

static MHZ_SPEED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d{3,5})\s*(?:mhz|mt/s)").expect("static regex"));

static DDR_GENERATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ddr\s*([345])").expect("static regex"));

static MODULE_KIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*[x×]\s*(\d+)\s*gb").expect("static regex")
});

static CAPACITY_GB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*gb").expect("static regex"));

static CAPACITY_TB_GB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(tb|gb)").expect("static regex")
});

/// First embedded decimal number of a spec value, thousands separators
/// stripped. Native numbers pass through unchanged; anything else is `0`.
pub fn parse_numeric(value: Option<&SpecValue>) -> f64 {
    match value {
        Some(SpecValue::Number(n)) => *n,
        Some(SpecValue::Text(s)) => parse_numeric_str(s),
        Some(SpecValue::Flag(_)) | None => 0.0,
    }
}

/// Text half of [`parse_numeric`].
pub fn parse_numeric_str(s: &str) -> f64 {
    let cleaned = s.replace(',', "");
    FIRST_NUMBER
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Memory speed from `DDR5-6000` or `3600 MHz` / `3600 MT/s` notation.
pub fn memory_speed(text: &str) -> Option<f64> {
    DDR_SPEED
        .captures(text)
        .or_else(|| MHZ_SPEED.captures(text))
        .and_then(|c| c[1].parse().ok())
}

/// DDR generation digit (3, 4 or 5) mentioned anywhere in `text`.
pub fn ddr_generation(text: &str) -> Option<u8> {
    DDR_GENERATION
        .captures(text)
        .and_then(|c| c[1].parse().ok())
}

/// Total capacity of a `N x M GB` module kit, computed as the product.
pub fn kit_capacity_gb(text: &str) -> Option<f64> {
    let caps = MODULE_KIT.captures(text)?;
    let count: f64 = caps[1].parse().ok()?;
    let size: f64 = caps[2].parse().ok()?;
    Some(count * size)
}

/// Plain `N GB` capacity.
pub fn capacity_gb(text: &str) -> Option<f64> {
    CAPACITY_GB.captures(text).and_then(|c| c[1].parse().ok())
}

/// `N TB` or `N GB` capacity normalized to GB (TB x 1000).
pub fn storage_capacity_gb(text: &str) -> Option<f64> {
    let caps = CAPACITY_TB_GB.captures(text)?;
    let amount: f64 = caps[1].parse().ok()?;
    if caps[2].eq_ignore_ascii_case("tb") {
        Some(amount * 1000.0)
    } else {
        Some(amount)
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
