/*!
 * ASS to WebVTT conversion.
 *
 * Reads the `[Events]` section of an Advanced SubStation script and emits
 * one VTT cue block per dialogue line. Field positions come from the
 * section's `Format:` line, falling back to the standard ten-field event
 * order. Only the bold/italic/underline override subset is mapped to
 * inline tags; every other override block is stripped.
 */

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::FormatError;

// @const: ASS event timestamp, centisecond precision (`H:MM:SS.cc`)
static ASS_TIMESTAMP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+):([0-5]?\d):([0-5]?\d)[.:](\d{1,3})$").unwrap()
});

// @const: `{\x1}` style-on override
static STYLE_ON: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\\([ibu])1\}").unwrap());

// @const: `{\x0}` style-off override
static STYLE_OFF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\\([ibu])0\}").unwrap());

// @const: any remaining override block
static OVERRIDE_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[^}]*\}").unwrap());

/// Standard event field order used when a `Format:` line is absent.
const DEFAULT_EVENT_FORMAT: [&str; 10] = [
    "layer", "start", "end", "style", "name", "marginl", "marginr", "marginv", "effect", "text",
];

/// Convert ASS text to WebVTT text.
///
/// Returns a `FormatError` when the input has no `[Events]` section or no
/// parseable dialogue line; individually malformed dialogue lines are
/// skipped with a warning.
pub fn ass_to_vtt(ass: &str) -> Result<String, FormatError> {
    let mut in_events = false;
    let mut saw_events = false;
    let mut format_fields: Option<Vec<String>> = None;
    let mut blocks: Vec<String> = Vec::new();

    for line in ass.lines() {
        let line = line.trim();

        if line.starts_with('[') {
            in_events = line.eq_ignore_ascii_case("[events]");
            saw_events |= in_events;
            continue;
        }
        if !in_events {
            continue;
        }

        if let Some(rest) = line.strip_prefix("Format:") {
            format_fields = Some(
                rest.split(',')
                    .map(|field| field.trim().to_ascii_lowercase())
                    .collect(),
            );
            continue;
        }

        if let Some(rest) = line.strip_prefix("Dialogue:") {
            match convert_dialogue(rest, format_fields.as_deref(), blocks.len() + 1) {
                Some(block) => blocks.push(block),
                None => warn!("Skipping unparseable dialogue line: {}", line),
            }
        }
    }

    if !saw_events {
        return Err(FormatError::Unrecognized(
            "no [Events] section in ASS input".to_string(),
        ));
    }
    if blocks.is_empty() {
        return Err(FormatError::Unrecognized(
            "no dialogue events in ASS input".to_string(),
        ));
    }

    Ok(format!("WEBVTT\n\n{}", blocks.join("\n\n")))
}

/// Convert one dialogue line to a VTT cue block.
fn convert_dialogue(rest: &str, format_fields: Option<&[String]>, seq: usize) -> Option<String> {
    let names: Vec<&str> = match format_fields {
        Some(fields) => fields.iter().map(String::as_str).collect(),
        None => DEFAULT_EVENT_FORMAT.to_vec(),
    };

    // Text is the last field and may itself contain commas
    let values: Vec<&str> = rest.splitn(names.len(), ',').collect();

    let field = |name: &str| {
        names
            .iter()
            .position(|n| *n == name)
            .and_then(|pos| values.get(pos))
            .copied()
    };

    let start = ass_timestamp_to_vtt(field("start")?.trim())?;
    let end = ass_timestamp_to_vtt(field("end")?.trim())?;
    let text = convert_dialogue_text(field("text").unwrap_or(""));

    Some(format!("{}\n{} --> {}\n{}", seq, start, end, text))
}

/// Convert an ASS `H:MM:SS.cc` timestamp to VTT `HH:MM:SS.mmm`.
fn ass_timestamp_to_vtt(timestamp: &str) -> Option<String> {
    let caps = ASS_TIMESTAMP.captures(timestamp)?;

    let hours: u64 = caps[1].parse().ok()?;
    let minutes: u64 = caps[2].parse().ok()?;
    let seconds: u64 = caps[3].parse().ok()?;
    // Fraction is centiseconds in practice; scale whatever width appears
    let frac = &caps[4];
    let millis: u64 = frac.parse::<u64>().ok()? * 10u64.pow(3 - frac.len() as u32);

    Some(format!(
        "{:02}:{:02}:{:02}.{:03}",
        hours, minutes, seconds, millis
    ))
}

/// Map the bold/italic/underline override subset to inline tags, strip the
/// rest, and turn ASS line breaks into real ones.
fn convert_dialogue_text(text: &str) -> String {
    let text = STYLE_ON.replace_all(text, "<$1>");
    let text = STYLE_OFF.replace_all(&text, "</$1>");
    let text = OVERRIDE_BLOCK.replace_all(&text, "");
    text.replace("\\N", "\n").replace("\\n", "\n")
}
