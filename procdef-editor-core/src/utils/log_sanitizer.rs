//! Log truncation for response payloads
//!
//! Highlight fragments and server error pages can be large; logs only get
//! the head of them.

use std::borrow::Cow;

/// Characters of a payload kept in a log line.
const LOG_PAYLOAD_CHARS: usize = 256;

/// Shorten `payload` to its first `LOG_PAYLOAD_CHARS` characters.
///
/// Borrowed when nothing is cut; otherwise the cut-off length is appended.
pub fn truncate_for_log(payload: &str) -> Cow<'_, str> {
    match payload.char_indices().nth(LOG_PAYLOAD_CHARS) {
        None => Cow::Borrowed(payload),
        Some((cut, _)) => Cow::Owned(format!(
            "{}... [+{} bytes]",
            &payload[..cut],
            payload.len() - cut
        )),
    }
}
