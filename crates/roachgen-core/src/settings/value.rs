//! Setting values and their display forms

use std::fmt::Write;
use std::time::Duration;

/// A typed setting value
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    ByteSize(u64),
    Duration(Duration),
    /// Ordinal of the current enumeration member
    Enum(i64),
}

const IEC_UNITS: [&str; 7] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

/// Format a byte count with IEC units, e.g. `64 MiB` or `2.0 MiB`
///
/// Values below ten units keep one decimal place.
pub fn format_byte_size(bytes: u64) -> String {
    if bytes < 10 {
        return format!("{} B", bytes);
    }

    let mut exp = 0usize;
    let mut base = 1u128;
    while exp + 1 < IEC_UNITS.len() && u128::from(bytes) >= base * 1024 {
        base *= 1024;
        exp += 1;
    }

    let val = ((bytes as f64) / (base as f64) * 10.0 + 0.5).floor() / 10.0;
    if val < 10.0 {
        format!("{:.1} {}", val, IEC_UNITS[exp])
    } else {
        format!("{:.0} {}", val, IEC_UNITS[exp])
    }
}

/// Format a duration as `1h2m3.5s`, `5m0s`, `250ms` or `0s`
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }

    if nanos < 1_000_000_000 {
        let (scale, unit) = if nanos < 1_000 {
            (1, "ns")
        } else if nanos < 1_000_000 {
            (1_000, "µs")
        } else {
            (1_000_000, "ms")
        };
        return format!("{}{}", fixed_point(nanos, scale), unit);
    }

    let total_secs = d.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = u128::from(total_secs % 60) * 1_000_000_000 + u128::from(d.subsec_nanos());

    let mut out = String::new();
    if hours > 0 {
        let _ = write!(out, "{}h", hours);
    }
    if hours > 0 || minutes > 0 {
        let _ = write!(out, "{}m", minutes);
    }
    let _ = write!(out, "{}s", fixed_point(secs, 1_000_000_000));
    out
}

/// Render `value / scale` without trailing zeros in the fraction
fn fixed_point(value: u128, scale: u128) -> String {
    let whole = value / scale;
    let rem = value % scale;
    if rem == 0 {
        return whole.to_string();
    }

    let width = scale.to_string().len() - 1;
    let frac = format!("{:0width$}", rem, width = width);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}
