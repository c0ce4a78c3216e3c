//! Field tags for the MT799 text block.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The tagged fields an MT799 text block may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldTag {
    /// Field 20, Transaction Reference Number (mandatory).
    TransactionReference,
    /// Field 21, Related Reference (optional).
    RelatedReference,
    /// Field 79, Narrative (mandatory, repeatable).
    Narrative,
}

impl FieldTag {
    /// The tag indicator as it appears in the text block, e.g. `":20:"`.
    pub fn indicator(&self) -> &'static str {
        match self {
            FieldTag::TransactionReference => ":20:",
            FieldTag::RelatedReference => ":21:",
            FieldTag::Narrative => ":79:",
        }
    }
}

impl fmt::Display for FieldTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldTag::TransactionReference => write!(f, "20"),
            FieldTag::RelatedReference => write!(f, "21"),
            FieldTag::Narrative => write!(f, "79"),
        }
    }
}

impl TryFrom<&str> for FieldTag {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "20" => Ok(FieldTag::TransactionReference),
            "21" => Ok(FieldTag::RelatedReference),
            "79" => Ok(FieldTag::Narrative),
            _ => Err(format!("Invalid field tag: {}", value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_indicator_agree() {
        for tag in [
            FieldTag::TransactionReference,
            FieldTag::RelatedReference,
            FieldTag::Narrative,
        ] {
            assert_eq!(tag.indicator(), format!(":{}:", tag));
        }
    }

    #[test]
    fn test_try_from_round_trips() {
        for tag in [
            FieldTag::TransactionReference,
            FieldTag::RelatedReference,
            FieldTag::Narrative,
        ] {
            assert_eq!(FieldTag::try_from(tag.to_string().as_str()), Ok(tag));
        }
        assert!(FieldTag::try_from("99").is_err());
    }
}
