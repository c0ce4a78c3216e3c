//! The five-block decomposition of a raw SWIFT message.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::{Error, Result};
use crate::scanner::Scanner;

/// A raw SWIFT message split into its five curly-brace blocks.
///
/// Blocks 3 and 5 carry nested `{...}` sub-blocks in the real format and
/// close on a double brace; their captured value keeps the final `}` so the
/// stored text round-trips. The other blocks are captured without their
/// delimiters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwiftEnvelope {
    /// Block 1 `{1:...}`, Basic Header. Mandatory.
    pub basic_header: String,
    /// Block 2 `{2:...}`, Application Header.
    pub application_header: Option<String>,
    /// Block 3 `{3:...}}`, User Header.
    pub user_header: Option<String>,
    /// Block 4 `{4:...}`, Text Block.
    pub text_block: Option<String>,
    /// Block 5 `{5:...}}`, Trailer.
    pub trailer: Option<String>,
}

impl SwiftEnvelope {
    /// Split a raw message into its blocks.
    ///
    /// Only the first occurrence of each opening marker is used; duplicate
    /// blocks are not an error. A missing closing marker consumes the
    /// remainder of the message. Absence of Block 1 is the only hard
    /// failure.
    pub fn split(raw: &str) -> Result<Self> {
        let scanner = Scanner::new(raw);

        let basic_header = match scanner.capture_between("{1:", "}") {
            Some(block) => block.to_string(),
            None => {
                error!("Invalid SWIFT message: mandatory Block 1 (basic header) is missing");
                return Err(Error::MissingMandatoryBlock);
            }
        };
        let application_header = scanner.capture_between("{2:", "}").map(str::to_string);
        let user_header = scanner.capture_between("{3:", "}}").map(reattach_closing_brace);
        let text_block = scanner.capture_between("{4:", "}").map(str::to_string);
        let trailer = scanner.capture_between("{5:", "}}").map(reattach_closing_brace);

        Ok(Self {
            basic_header,
            application_header,
            user_header,
            text_block,
            trailer,
        })
    }
}

/// Blocks 3 and 5 close on `}}`: the inner `}` belongs to their last nested
/// sub-block and is restored after the trailing whitespace trim. The nested
/// content itself is not validated here.
fn reattach_closing_brace(block: &str) -> String {
    let mut owned = block.trim_end().to_string();
    owned.push('}');
    owned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_header_keeps_closing_brace() {
        let raw = "{1:F01}{3:{108:MT799}}{4:\r\n:20:REF\r\n-}";
        let envelope = SwiftEnvelope::split(raw).unwrap();
        assert_eq!(envelope.user_header.as_deref(), Some("{108:MT799}"));
    }

    #[test]
    fn test_trailer_keeps_closing_brace() {
        let raw = "{1:F01}{5:{CHK:123456789ABC}}";
        let envelope = SwiftEnvelope::split(raw).unwrap();
        assert_eq!(envelope.trailer.as_deref(), Some("{CHK:123456789ABC}"));
    }

    #[test]
    fn test_duplicate_block_first_occurrence_wins() {
        let raw = "{1:FIRST}{1:SECOND}";
        let envelope = SwiftEnvelope::split(raw).unwrap();
        assert_eq!(envelope.basic_header, "FIRST");
    }
}
