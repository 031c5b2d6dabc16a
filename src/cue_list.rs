/*!
 * Cue list model: an ordered, editable sequence of subtitle cues.
 *
 * Derived values (start/end seconds, duration, overlap) are accessor
 * methods recomputed from the stored fields on every call. Nothing derived
 * is stored, so reordering a list can never leave a stale overlap flag.
 */

use serde::{Deserialize, Serialize};

use crate::cue_parser::RawCue;
use crate::errors::FormatError;
use crate::timecode::{format_seconds, parse_timecode};

/// One subtitle cue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    /// Zero-based position in the owning list at creation time.
    /// Not renumbered on edits; serialization uses list position instead.
    pub index: usize,

    /// Start timecode string
    pub start: String,

    /// End timecode string
    pub end: String,

    /// Raw cue text, may contain `<b>`, `<i>`, `<u>` inline markup
    pub text: String,

    /// Transient UI flag, never persisted
    #[serde(skip)]
    pub editing: bool,

    /// Transient UI flag, never persisted
    #[serde(skip)]
    pub highlight: bool,
}

impl Cue {
    /// Create a cue from timecode strings.
    pub fn new(index: usize, start: String, end: String, text: String) -> Self {
        Cue {
            index,
            start,
            end,
            text,
            editing: false,
            highlight: false,
        }
    }

    /// Create a cue from second values, formatting them canonically.
    pub fn from_seconds(index: usize, start_time: f64, end_time: f64, text: String) -> Self {
        Cue::new(
            index,
            format_seconds(start_time),
            format_seconds(end_time),
            text,
        )
    }

    /// Start position in seconds, parsed from `start` on every call.
    pub fn start_time(&self) -> Result<f64, FormatError> {
        parse_timecode(&self.start)
    }

    /// End position in seconds, parsed from `end` on every call.
    pub fn end_time(&self) -> Result<f64, FormatError> {
        parse_timecode(&self.end)
    }

    /// Cue duration in seconds, formatted to three decimal places.
    pub fn duration(&self) -> Result<String, FormatError> {
        Ok(format!("{:.3}", self.end_time()? - self.start_time()?))
    }
}

/// Ordered sequence of cues; insertion order is display/playback order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CueList {
    cues: Vec<Cue>,
}

impl CueList {
    /// Create an empty cue list.
    pub fn new() -> Self {
        CueList { cues: Vec::new() }
    }

    /// Build a cue list from cues produced by a [`CueParser`].
    ///
    /// Each cue gets `editing = false`, `highlight = false`, `index` set to
    /// its zero-based position among the parsed cues, and start/end set to
    /// the canonical formatting of the parsed seconds.
    ///
    /// [`CueParser`]: crate::cue_parser::CueParser
    pub fn from_raw_cues(raw: Vec<RawCue>) -> Self {
        let cues = raw
            .into_iter()
            .enumerate()
            .map(|(index, cue)| Cue::from_seconds(index, cue.start_time, cue.end_time, cue.text))
            .collect();
        CueList { cues }
    }

    /// Whether the cue at `index` overlaps its predecessor.
    ///
    /// True iff a previous cue exists in the current list order and this
    /// cue starts strictly before the previous cue ends. Computed from list
    /// position on every call, never cached.
    pub fn overlapping(&self, index: usize) -> Result<bool, FormatError> {
        let Some(cue) = self.cues.get(index) else {
            return Ok(false);
        };
        match index.checked_sub(1).and_then(|prev| self.cues.get(prev)) {
            Some(prev) => Ok(cue.start_time()? < prev.end_time()?),
            None => Ok(false),
        }
    }

    /// Append a cue at the end of the list.
    pub fn push(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    /// Insert a cue at `index`, shifting later cues down.
    pub fn insert(&mut self, index: usize, cue: Cue) {
        self.cues.insert(index, cue);
    }

    /// Remove and return the cue at `index`.
    pub fn remove(&mut self, index: usize) -> Cue {
        self.cues.remove(index)
    }

    pub fn get(&self, index: usize) -> Option<&Cue> {
        self.cues.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Cue> {
        self.cues.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cue> {
        self.cues.iter()
    }
}

impl<'a> IntoIterator for &'a CueList {
    type Item = &'a Cue;
    type IntoIter = std::slice::Iter<'a, Cue>;

    fn into_iter(self) -> Self::IntoIter {
        self.cues.iter()
    }
}
