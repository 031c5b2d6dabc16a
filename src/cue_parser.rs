/*!
 * Cue-parsing capability: turning a VTT source into raw cues.
 *
 * The core treats "parse VTT cues" as a host capability rather than a
 * responsibility of its own — in a browser this is the native track-cue
 * mechanism. The capability is a one-operation trait so any implementation
 * can be substituted without touching the rest of the library.
 * `WebVttCueParser` is the built-in stand-in.
 */

use async_trait::async_trait;
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::FormatError;

// @const: VTT cue timing line, hours optional
static CUE_TIMING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:(\d+):)?([0-5]\d):([0-5]\d)\.(\d{3})[ \t]+-->[ \t]+(?:(\d+):)?([0-5]\d):([0-5]\d)\.(\d{3})",
    )
    .unwrap()
});

/// One parsed cue as exposed by the capability: start/end in seconds and
/// the cue payload verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCue {
    /// Start position in seconds
    pub start_time: f64,

    /// End position in seconds
    pub end_time: f64,

    /// Cue payload text
    pub text: String,
}

/// The cue-parsing capability.
///
/// Given a WebVTT source, asynchronously yields the ordered cues it
/// contains. Implementations resolve or fail exactly once per call and
/// hold no state across calls.
#[async_trait]
pub trait CueParser: Send + Sync {
    /// Parse a VTT source into its ordered cues.
    async fn parse_cues(&self, source: &str) -> Result<Vec<RawCue>, FormatError>;
}

/// Built-in from-scratch WebVTT cue parser.
///
/// Line-oriented: skips the `WEBVTT` header line and NOTE/STYLE/REGION
/// blocks, reads timing lines (optional cue identifier before, optional
/// settings after), and accumulates payload lines until the next blank
/// line. Cue blocks whose timing line does not parse are skipped with a
/// warning, matching how browsers treat them.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebVttCueParser;

#[async_trait]
impl CueParser for WebVttCueParser {
    async fn parse_cues(&self, source: &str) -> Result<Vec<RawCue>, FormatError> {
        parse_vtt(source)
    }
}

fn parse_vtt(source: &str) -> Result<Vec<RawCue>, FormatError> {
    let text = source.trim_start_matches('\u{feff}');
    if !text.trim_start().starts_with("WEBVTT") {
        return Err(FormatError::Unrecognized(
            "missing WEBVTT header".to_string(),
        ));
    }

    let mut cues = Vec::new();
    let mut seen_header = false;
    let mut skipping_block = false;
    let mut current: Option<(f64, f64)> = None;
    let mut current_text = String::new();

    for line in text.lines() {
        if !seen_header {
            if line.trim_start().starts_with("WEBVTT") {
                seen_header = true;
            }
            continue;
        }

        let trimmed = line.trim();

        // Blank line ends the current block
        if trimmed.is_empty() {
            if let Some((start_time, end_time)) = current.take() {
                cues.push(RawCue {
                    start_time,
                    end_time,
                    text: std::mem::take(&mut current_text),
                });
            }
            skipping_block = false;
            continue;
        }
        if skipping_block {
            continue;
        }

        if current.is_some() {
            if !current_text.is_empty() {
                current_text.push('\n');
            }
            current_text.push_str(line);
            continue;
        }

        if trimmed.contains("-->") {
            match CUE_TIMING.captures(trimmed) {
                Some(caps) => {
                    let start_time = capture_ms(&caps, 1) as f64 / 1_000.0;
                    let end_time = capture_ms(&caps, 5) as f64 / 1_000.0;
                    current = Some((start_time, end_time));
                }
                None => {
                    warn!("Skipping cue with unparseable timing line: {}", trimmed);
                    skipping_block = true;
                }
            }
        } else if trimmed.starts_with("NOTE")
            || trimmed.starts_with("STYLE")
            || trimmed.starts_with("REGION")
        {
            skipping_block = true;
        }
        // Anything else here is a cue identifier; the model never uses it
    }

    if let Some((start_time, end_time)) = current {
        cues.push(RawCue {
            start_time,
            end_time,
            text: current_text,
        });
    }

    Ok(cues)
}

/// Read one timestamp's capture groups into milliseconds.
fn capture_ms(caps: &regex::Captures, start_idx: usize) -> u64 {
    let hours: u64 = caps
        .get(start_idx)
        .map_or(0, |m| m.as_str().parse().unwrap_or(0));
    let minutes: u64 = caps
        .get(start_idx + 1)
        .map_or(0, |m| m.as_str().parse().unwrap_or(0));
    let seconds: u64 = caps
        .get(start_idx + 2)
        .map_or(0, |m| m.as_str().parse().unwrap_or(0));
    let millis: u64 = caps
        .get(start_idx + 3)
        .map_or(0, |m| m.as_str().parse().unwrap_or(0));

    hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + millis
}
