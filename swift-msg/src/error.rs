//! Error types for the swift-msg crate.

use std::result;
use thiserror::Error;

use crate::field::FieldTag;

/// Core MT799 parsing and validation error types.
///
/// Every validation variant names the offending field through its
/// [`FieldTag`], so callers can match on the error kind instead of parsing
/// messages.
#[derive(Debug, Error)]
pub enum Error {
    /// Mandatory Block 1 (Basic Header) could not be located.
    #[error("Invalid SWIFT message: Mandatory Block 1 (BasicHeader) is missing.")]
    MissingMandatoryBlock,

    /// Block 4 (Text Block) is absent, so no fields can be extracted.
    #[error("Failed to parse MT799 message: TextBlock is missing.")]
    MissingTextBlock,

    /// A mandatory field (20 or 79) is absent from the text block.
    #[error("Invalid MT799 message: Mandatory Field {0} is missing.")]
    MissingMandatoryField(FieldTag),

    /// A field exceeds its maximum length.
    #[error("Field {field} exceeds the maximum length of {max} characters.")]
    FieldLengthExceeded { field: FieldTag, max: usize },

    /// A field starts or ends with a slash, or contains a double slash.
    #[error("Field {0} cannot start or end with a slash, or contain double slashes.")]
    FieldStructureInvalid(FieldTag),

    /// A narrative segment has too many lines.
    #[error("Field {field} exceeds the maximum number of lines ({max}).")]
    FieldLineCountExceeded { field: FieldTag, max: usize },

    /// A narrative line is too long.
    #[error("Field {field} exceeds the maximum length of {max} characters per line.")]
    FieldLineLengthExceeded { field: FieldTag, max: usize },

    /// A field contains a character outside the permitted character set.
    #[error("Field {field} contains invalid character {character:?} at position {position}.")]
    FieldCharacterSetInvalid {
        field: FieldTag,
        character: char,
        position: usize,
    },
}

/// Custom Result type for swift-msg operations.
pub type Result<T> = result::Result<T, Error>;
