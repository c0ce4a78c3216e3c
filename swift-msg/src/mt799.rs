//! MT799 tagged-field extraction from the text block.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::envelope::SwiftEnvelope;
use crate::error::{Error, Result};
use crate::field::FieldTag;
use crate::scanner::Scanner;

/// Reserved separator joining repeated `:79:` occurrences into the single
/// narrative value. `|` is outside the permitted character set, so the
/// separator cannot collide with field content.
pub const NARRATIVE_SEPARATOR: &str = "||";

/// The typed field payload of an MT799 text block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mt799Fields {
    /// Field 20, Transaction Reference Number (mandatory).
    pub reference: String,
    /// Field 21, Related Reference (optional).
    pub related_reference: Option<String>,
    /// Field 79, Narrative: every `:79:` occurrence joined in encounter
    /// order with [`NARRATIVE_SEPARATOR`].
    pub narrative: String,
}

impl Mt799Fields {
    /// Extract fields 20, 21, and 79 from the envelope's text block.
    ///
    /// Fails with [`Error::MissingTextBlock`] when the envelope has no
    /// Block 4.
    pub fn extract(envelope: &SwiftEnvelope) -> Result<Self> {
        match envelope.text_block.as_deref() {
            Some(text_block) => Self::from_text_block(text_block),
            None => {
                error!("Failed to parse MT799 message: text block is missing");
                Err(Error::MissingTextBlock)
            }
        }
    }

    /// Extract fields from bare text-block content.
    ///
    /// Fields 20 and 21 run from their tag to the first CRLF (or end of
    /// input). Field 20 is mandatory; field 21 absence leaves the value
    /// unset. At least one non-empty `:79:` occurrence must survive.
    pub fn from_text_block(text_block: &str) -> Result<Self> {
        let scanner = Scanner::new(text_block);

        let reference = match scanner.capture_between(FieldTag::TransactionReference.indicator(), "\r\n") {
            Some(value) => value.to_string(),
            None => {
                error!("Invalid MT799 message: mandatory field 20 is missing");
                return Err(Error::MissingMandatoryField(FieldTag::TransactionReference));
            }
        };

        let related_reference = scanner
            .capture_between(FieldTag::RelatedReference.indicator(), "\r\n")
            .map(str::to_string);

        let segments = extract_narrative_segments(text_block);
        if segments.is_empty() {
            error!("Invalid MT799 message: mandatory field 79 is missing");
            return Err(Error::MissingMandatoryField(FieldTag::Narrative));
        }

        Ok(Self {
            reference,
            related_reference,
            narrative: segments.join(NARRATIVE_SEPARATOR),
        })
    }

    /// The narrative split back into its original `:79:` occurrences.
    pub fn narrative_segments(&self) -> impl Iterator<Item = &str> {
        self.narrative.split(NARRATIVE_SEPARATOR)
    }
}

/// Every `:79:` occurrence in order, each running from just after its tag to
/// the next `:79:` tag or end-of-input. Segments left empty by trimming are
/// dropped.
fn extract_narrative_segments(text_block: &str) -> Vec<&str> {
    let scanner = Scanner::new(text_block);
    let indicator = FieldTag::Narrative.indicator();
    let mut segments = Vec::new();
    let mut position = 0;

    while let Some(found) = scanner.find_from(indicator, position) {
        let start = found + indicator.len();
        let end = scanner.find_from(indicator, start).unwrap_or(scanner.len());
        let segment = text_block[start..end].trim();
        if !segment.is_empty() {
            segments.push(segment);
        }
        position = end;
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_narrative_segments_are_dropped() {
        let segments = extract_narrative_segments(":79:\r\n:79:Kept\r\n:79:  ");
        assert_eq!(segments, vec!["Kept"]);
    }

    #[test]
    fn test_last_segment_runs_to_end_of_input() {
        let segments = extract_narrative_segments(":79:First\r\n:79:Second");
        assert_eq!(segments, vec!["First", "Second"]);
    }
}
