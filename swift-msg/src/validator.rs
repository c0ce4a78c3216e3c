//! Field-level validation rules for MT799 messages.
//!
//! Fields 20 and 21 share one rule set (length, slash placement, character
//! set). Field 79 rules apply per original `:79:` occurrence, recovered by
//! splitting the narrative on its reserved separator. Validation stops at
//! the first rule violation.

use tracing::error;

use crate::charset;
use crate::error::{Error, Result};
use crate::field::FieldTag;
use crate::mt799::{Mt799Fields, NARRATIVE_SEPARATOR};

/// Maximum length of fields 20 and 21.
pub const MAX_REFERENCE_LEN: usize = 16;
/// Maximum number of lines in one narrative segment.
pub const MAX_NARRATIVE_LINES: usize = 35;
/// Maximum length of one narrative line.
pub const MAX_NARRATIVE_LINE_LEN: usize = 50;
/// Maximum combined length of one narrative segment.
pub const MAX_NARRATIVE_LEN: usize = MAX_NARRATIVE_LINES * MAX_NARRATIVE_LINE_LEN;

/// Validate all MT799 fields, stopping at the first rule violation.
pub fn validate(fields: &Mt799Fields) -> Result<()> {
    let outcome = run_checks(fields);
    if let Err(err) = &outcome {
        error!("MT799 validation failed: {}", err);
    }
    outcome
}

fn run_checks(fields: &Mt799Fields) -> Result<()> {
    validate_reference(FieldTag::TransactionReference, &fields.reference)?;
    if let Some(related) = &fields.related_reference {
        validate_reference(FieldTag::RelatedReference, related)?;
    }
    validate_narrative(&fields.narrative)
}

fn validate_reference(field: FieldTag, value: &str) -> Result<()> {
    if value.chars().count() > MAX_REFERENCE_LEN {
        return Err(Error::FieldLengthExceeded {
            field,
            max: MAX_REFERENCE_LEN,
        });
    }
    if value.starts_with('/') || value.ends_with('/') || value.contains("//") {
        return Err(Error::FieldStructureInvalid(field));
    }
    validate_charset(field, value)
}

fn validate_narrative(narrative: &str) -> Result<()> {
    let field = FieldTag::Narrative;
    for segment in narrative.split(NARRATIVE_SEPARATOR) {
        if segment.chars().count() > MAX_NARRATIVE_LEN {
            return Err(Error::FieldLengthExceeded {
                field,
                max: MAX_NARRATIVE_LEN,
            });
        }
        let lines: Vec<&str> = segment.split("\r\n").collect();
        if lines.len() > MAX_NARRATIVE_LINES {
            return Err(Error::FieldLineCountExceeded {
                field,
                max: MAX_NARRATIVE_LINES,
            });
        }
        if lines
            .iter()
            .any(|line| line.chars().count() > MAX_NARRATIVE_LINE_LEN)
        {
            return Err(Error::FieldLineLengthExceeded {
                field,
                max: MAX_NARRATIVE_LINE_LEN,
            });
        }
        validate_charset(field, segment)?;
    }
    Ok(())
}

/// Character-by-character scan, left to right; the first non-conforming
/// character is reported with its zero-based position within the value
/// being checked.
fn validate_charset(field: FieldTag, value: &str) -> Result<()> {
    if let Some((position, character)) = charset::first_violation(value) {
        return Err(Error::FieldCharacterSetInvalid {
            field,
            character,
            position,
        });
    }
    Ok(())
}
