//! # Redaction Rules
//!
//! Soft-deleted content is replaced by a fixed placeholder when a stored row
//! becomes a `Detailed*` view. Nothing else ever calls into this module.

use crate::models::DeletionState;

/// Shown in place of a soft-deleted comment.
pub const DELETED_COMMENT_PLACEHOLDER: &str = "**komentar telah dihapus**";

/// Shown in place of a soft-deleted reply.
pub const DELETED_REPLY_PLACEHOLDER: &str = "**balasan telah dihapus**";

pub fn redact(content: &str, state: DeletionState, placeholder: &str) -> String {
    match state {
        DeletionState::Active => content.to_string(),
        DeletionState::Deleted => placeholder.to_string(),
    }
}

pub fn redact_comment(content: &str, state: DeletionState) -> String {
    redact(content, state, DELETED_COMMENT_PLACEHOLDER)
}

pub fn redact_reply(content: &str, state: DeletionState) -> String {
    redact(content, state, DELETED_REPLY_PLACEHOLDER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_iff_deleted() {
        assert_eq!(redact_comment("hi", DeletionState::Active), "hi");
        assert_eq!(redact_comment("hi", DeletionState::Deleted), "**komentar telah dihapus**");
        assert_eq!(redact_reply("yo", DeletionState::Active), "yo");
        assert_eq!(redact_reply("yo", DeletionState::Deleted), "**balasan telah dihapus**");
    }

    #[test]
    fn test_placeholders_are_distinct() {
        assert_ne!(DELETED_COMMENT_PLACEHOLDER, DELETED_REPLY_PLACEHOLDER);
    }
}
