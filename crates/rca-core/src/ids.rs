//! ID prefix constants and formatting helpers.
//!
//! Turn IDs are `{prefix}-{sequence:06}` so lexical order matches creation
//! order within a conversation.

/// Prefix for chat turns.
pub const PREFIX_TURN: &str = "trn";

/// Prefix for conversations.
pub const PREFIX_CONVERSATION: &str = "cnv";

/// Format a sequenced ID, e.g. `format_id("trn", 7)` → `"trn-000007"`.
#[must_use]
pub fn format_id(prefix: &str, sequence: u64) -> String {
    format!("{prefix}-{sequence:06}")
}
