/*!
 * Mock cue parser for tests that need a canned capability implementation
 */

use async_trait::async_trait;
use subcue::cue_parser::{CueParser, RawCue};
use subcue::errors::FormatError;

/// A `CueParser` that returns a fixed set of cues regardless of input.
#[derive(Debug, Clone)]
pub struct FixedCueParser {
    cues: Vec<RawCue>,
}

impl FixedCueParser {
    pub fn new(cues: Vec<RawCue>) -> Self {
        FixedCueParser { cues }
    }
}

#[async_trait]
impl CueParser for FixedCueParser {
    async fn parse_cues(&self, _source: &str) -> Result<Vec<RawCue>, FormatError> {
        Ok(self.cues.clone())
    }
}
