//! Unit detection and conversion helpers.
//!
//! Values are read the lenient way stylesheets are usually written: a value
//! counts as pixels when a digit is directly followed by `px`, and its number
//! is the longest numeric prefix (`"15px"` reads as `15`). Anything else is
//! passed through untouched by the expander.

use std::sync::LazyLock;

use regex::Regex;

/// Number of decimal places conversions are rounded to.
pub const PRECISION: u32 = 5;

static PX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\dpx").expect("pixel pattern is a valid regex"));

static NUMBER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?")
        .expect("number pattern is a valid regex")
});

/// Returns `true` if the value is expressed in pixels.
pub fn is_px(value: &str) -> bool {
    PX_PATTERN.is_match(value)
}

/// Returns `true` if the value names a custom media query (`--name`).
pub fn is_custom_media(value: &str) -> bool {
    value.starts_with("--")
}

/// Read the leading number of a CSS value.
///
/// Leading whitespace is skipped and trailing units are ignored. Returns
/// `None` when the value does not start with a number.
pub fn parse_float(value: &str) -> Option<f64> {
    let found = NUMBER_PREFIX.find(value.trim_start())?;
    found.as_str().parse().ok()
}

/// Round half-up to a fixed number of decimal places.
pub fn to_decimal_places(num: f64, places: u32) -> f64 {
    let multiplier = 10f64.powi(places as i32);
    (num * multiplier + 0.5).floor() / multiplier
}

/// Ratio between two lengths, rounded to [`PRECISION`] places.
///
/// Returns `None` if either side has no number, the reference is zero, or
/// the result is not finite.
pub fn px_to_ratio(value: &str, reference: &str) -> Option<f64> {
    let value = parse_float(value)?;
    let reference = parse_float(reference)?;
    if reference == 0.0 {
        return None;
    }
    let ratio = to_decimal_places(value / reference, PRECISION);
    ratio.is_finite().then_some(ratio)
}

/// Convert a pixel length to `em` relative to `reference`.
pub fn px_to_em(value: &str, reference: &str) -> Option<String> {
    px_to_ratio(value, reference).map(|ratio| format!("{}em", format_number(ratio)))
}

/// Convert a pixel length to `rem` relative to the root font size.
pub fn px_to_rem(value: &str, root_size: &str) -> Option<String> {
    px_to_ratio(value, root_size).map(|ratio| format!("{}rem", format_number(ratio)))
}

/// Format a number in its shortest decimal form (`1.5`, `0.1`, `2`).
pub fn format_number(num: f64) -> String {
    if num == 0.0 {
        // Avoid printing `-0`.
        return "0".to_string();
    }
    num.to_string()
}
