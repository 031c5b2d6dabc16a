/*!
 * Timecode codec: conversion between display strings and seconds.
 *
 * The codec is deliberately asymmetric: `parse_timecode` accepts a lenient
 * duration grammar (anything from `H:MM` up to `D:HH:MM:SS.mmm`), while
 * `is_well_formed_timecode` enforces the strict canonical form used for
 * user-input validation. A value can be parseable yet rejected for direct
 * text-field entry.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::FormatError;

// @const: Strict canonical timecode check
static STRICT_TIMECODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+:[0-5]\d:[0-5]\d\.\d{3}$").unwrap()
});

// @const: SRT-style duration fragment check
static SRT_DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+\.\d{3}").unwrap()
});

/// Parse a duration expression to seconds.
///
/// Accepts colon-separated components, fractional part allowed on the last:
/// `H:MM`, `H:MM:SS.mmm`, `D:HH:MM:SS.mmm`. Precision is milliseconds.
/// Anything else is a `FormatError`.
pub fn parse_timecode(text: &str) -> Result<f64, FormatError> {
    let invalid = || FormatError::InvalidTimecode(text.to_string());

    let parts: Vec<&str> = text.trim().split(':').collect();
    let multipliers: &[u64] = match parts.len() {
        2 => &[3_600, 60],
        3 => &[3_600, 60, 1],
        4 => &[86_400, 3_600, 60, 1],
        _ => return Err(invalid()),
    };

    let mut total_ms: u64 = 0;
    for (idx, part) in parts.iter().enumerate() {
        let mult = multipliers[idx];

        // A fractional part is only meaningful on the smallest unit
        let (whole, frac) = match part.split_once('.') {
            Some((w, f)) if idx == parts.len() - 1 => (w, Some(f)),
            Some(_) => return Err(invalid()),
            None => (*part, None),
        };

        if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let value: u64 = whole.parse().map_err(|_| invalid())?;
        total_ms = value
            .checked_mul(mult * 1_000)
            .and_then(|ms| total_ms.checked_add(ms))
            .ok_or_else(invalid)?;

        if let Some(frac) = frac {
            if frac.is_empty() || !frac.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }
            let fraction: f64 = format!("0.{}", frac).parse().map_err(|_| invalid())?;
            total_ms += (fraction * mult as f64 * 1_000.0).round() as u64;
        }
    }

    Ok(total_ms as f64 / 1_000.0)
}

/// Format seconds as the canonical `HH:MM:SS.mmm` display string.
///
/// Fixed-width two-digit hour/minute/second fields and three millisecond
/// digits; leading zero components are never trimmed. Hours widen beyond
/// two digits as needed. The value is rounded to the nearest millisecond.
pub fn format_seconds(seconds: f64) -> String {
    let total_ms = (seconds * 1_000.0).round() as u64;

    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1_000;
    let millis = total_ms % 1_000;

    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, secs, millis)
}

/// Strict-format check for exactly `\d+:[0-5]\d:[0-5]\d\.\d{3}`.
///
/// Stricter than `parse_timecode`: used to validate user-edited timecode
/// fields before accepting them.
pub fn is_well_formed_timecode(text: &str) -> bool {
    STRICT_TIMECODE.is_match(text)
}

/// Check for a leading `digits.` + exactly three decimal digits.
///
/// A looser grammar used only to sanity-check intermediate SRT-style
/// duration fragments.
pub fn is_well_formed_srt_duration(text: &str) -> bool {
    SRT_DURATION.is_match(text)
}
