//! Top-level MT799 parse orchestration.

use tracing::debug;

use crate::envelope::SwiftEnvelope;
use crate::error::Result;
use crate::mt799::Mt799Fields;

/// Split a raw message into its blocks and extract its MT799 fields in one
/// call.
///
/// The returned pair is not yet validated; run
/// [`validate`](crate::validator::validate) on the fields before persisting
/// them.
pub fn parse_mt799(raw: &str) -> Result<(SwiftEnvelope, Mt799Fields)> {
    let envelope = SwiftEnvelope::split(raw)?;
    let fields = Mt799Fields::extract(&envelope)?;
    debug!(reference = %fields.reference, "parsed MT799 message");
    Ok((envelope, fields))
}
