/*!
 * Format converters: pure text-to-text subtitle transforms.
 *
 * The SRT path is a regex rewrite, not a structural parse. This is a
 * deliberate lightweight-compatibility choice: numbering lines, arrows and
 * cue blocks pass through unchanged, so malformed-but-common SRT variants
 * still convert. Only the override tags, the timestamp separators and any
 * leftover brace directives are touched.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::cue_list::CueList;
use crate::errors::FormatError;
use crate::timecode::format_seconds;

pub mod ass;

pub use ass::ass_to_vtt;

// @const: `{\x}` closing-style override
static OVERRIDE_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\\([ibu])\}").unwrap());

// @const: `{\x1}` "style continues" opening variant
static OVERRIDE_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\\([ibu])1\}").unwrap());

// @const: bare `{x}` opening tag
static BARE_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([ibu])\}").unwrap());

// @const: bare `{/x}` closing tag
static BARE_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{/([ibu])\}").unwrap());

// @const: comma millisecond separator in timestamps
static COMMA_TIMESTAMP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d\d:\d\d:\d\d),(\d\d\d)").unwrap()
});

// @const: any remaining brace-delimited directive, may span lines
static BRACE_DIRECTIVE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*?\}").unwrap());

/// Convert SRT text to WebVTT text.
///
/// Applies the substitutions as independent global passes, in order:
/// override tags (`{\x}`, `{\x1}`, `{x}`, `{/x}`) map to `</x>`/`<x>`,
/// comma millisecond separators become periods, and any remaining brace
/// directive is stripped. The output is framed with a CRLF `WEBVTT` header
/// and a trailing blank block; the body keeps its original line endings.
///
/// The `{\x1}` opening mapping is an observed subtitle-authoring
/// convention and is preserved as-is.
pub fn srt_to_vtt(srt: &str) -> String {
    let text = OVERRIDE_CLOSE.replace_all(srt, "</$1>");
    let text = OVERRIDE_OPEN.replace_all(&text, "<$1>");
    let text = BARE_OPEN.replace_all(&text, "<$1>");
    let text = BARE_CLOSE.replace_all(&text, "</$1>");
    let text = COMMA_TIMESTAMP.replace_all(&text, "${1}.${2}");
    let text = BRACE_DIRECTIVE.replace_all(&text, "");

    debug!("Converted SRT input ({} bytes) to VTT", srt.len());
    format!("WEBVTT \r\n\r\n{}\r\n\r\n", text)
}

/// Serialize a cue list to WebVTT text.
///
/// Emits a `WEBVTT` header followed by one block per cue in current list
/// order: a 1-based sequence number, the timing line, and the cue text.
/// Sequence numbers come from the cue's position in the list, not from its
/// stored `index` — the two diverge after reordering or deletion.
///
/// Start and end are re-canonicalized through the timecode codec, so a
/// lenient-but-parseable stored form serializes in canonical width and an
/// unparseable one is a `FormatError` rather than a bad block.
pub fn cues_to_vtt(list: &CueList) -> Result<String, FormatError> {
    let mut blocks = Vec::with_capacity(list.len());
    for (seq, cue) in list.iter().enumerate() {
        let start = format_seconds(cue.start_time()?);
        let end = format_seconds(cue.end_time()?);
        blocks.push(format!("{}\n{} --> {}\n{}", seq + 1, start, end, cue.text));
    }
    Ok(format!("WEBVTT\n\n{}", blocks.join("\n\n")))
}

/// Remove every brace-delimited `{...}` directive from `text`.
///
/// Non-greedy, spans lines, leaves surrounding text untouched and is
/// idempotent. Applied as a defensive normalization to sources that are
/// not SRT/ASS-typed (mislabeled or extension-less inputs).
pub fn strip_braces(text: &str) -> String {
    BRACE_DIRECTIVE.replace_all(text, "").into_owned()
}
