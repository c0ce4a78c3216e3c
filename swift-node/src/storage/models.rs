use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stored MT799 message: the envelope columns joined with the validated
/// field columns and the server-assigned identity.
///
/// `id` is the identifier callers use for retrieval; `swift_message_id`
/// points at the envelope row it was extracted from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mt799Record {
    pub id: i64,
    pub swift_message_id: i64,
    pub basic_header: String,
    pub application_header: Option<String>,
    pub user_header: Option<String>,
    pub text_block: Option<String>,
    pub trailer: Option<String>,
    /// Field 20, Transaction Reference Number.
    pub reference: String,
    /// Field 21, Related Reference.
    pub related_reference: Option<String>,
    /// Field 79, Narrative (repeated occurrences joined with `||`).
    pub narrative: String,
    /// Server-assigned creation timestamp (UTC).
    pub created_at: NaiveDateTime,
}
