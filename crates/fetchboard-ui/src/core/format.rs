//! Human-readable byte formatting for the downloads table.

/// Binary-prefix unit labels, 1024 apart.
const UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Default number of decimal places for [`format_bytes`].
const DEFAULT_DECIMALS: usize = 2;

/// Format a byte count with two decimal places.
///
/// See [`format_bytes_with`] for the full contract.
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    format_bytes_with(bytes, DEFAULT_DECIMALS)
}

/// Format a byte count as `"<value> <unit>"` using base-1024 units.
///
/// Zero is special-cased to `"0 B"`. The value is rounded (not truncated) to
/// `decimals` places and rendered without trailing zeros, so `1536` becomes
/// `"1.5 KB"` and `1024` becomes `"1 KB"`.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation
)]
pub fn format_bytes_with(bytes: u64, decimals: usize) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    let exponent = (bytes.ilog2() / 10).min(8);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);
    let formatted = format!("{value:.decimals$}");
    let rendered = trim_trailing_zeros(&formatted);
    format!("{rendered} {}", UNITS[exponent as usize])
}

/// Drop a trailing fractional part of zeros, mirroring how the table
/// historically rendered sizes (`1.50` → `1.5`, `1.00` → `1`).
fn trim_trailing_zeros(value: &str) -> &str {
    if value.contains('.') {
        value.trim_end_matches('0').trim_end_matches('.')
    } else {
        value
    }
}
