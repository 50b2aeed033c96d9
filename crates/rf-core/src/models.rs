//! # Domain Models
//!
//! These structs represent the core entities of Rusty-Forum.
//! `New*` values flow into the ports, `Added*` values come back from them,
//! `*Record` values are stored rows, and `Detailed*` values are the
//! read-only projections assembled for the thread view.

use crate::error::ValidationError;
use crate::redaction::{redact_comment, redact_reply};
use crate::validation::{FromPayload, Payload};
use serde::Serialize;
use serde_json::Value;

/// Soft-delete state of a comment or reply. Moves `Active -> Deleted` once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum DeletionState {
    #[default]
    Active,
    Deleted,
}

impl DeletionState {
    pub fn is_deleted(self) -> bool {
        matches!(self, DeletionState::Deleted)
    }
}

impl From<bool> for DeletionState {
    fn from(is_deleted: bool) -> Self {
        if is_deleted {
            DeletionState::Deleted
        } else {
            DeletionState::Active
        }
    }
}

// ── Threads ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewThread {
    pub title: String,
    pub body: String,
    pub owner: String,
}

impl FromPayload for NewThread {
    const ENTITY: &'static str = "NEW_THREAD";

    fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let p = Payload::new(Self::ENTITY, payload).require(&["title", "body", "owner"])?;
        Ok(Self {
            title: p.string("title")?,
            body: p.string("body")?,
            owner: p.string("owner")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

impl FromPayload for AddedThread {
    const ENTITY: &'static str = "ADDED_THREAD";

    fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let p = Payload::new(Self::ENTITY, payload).require(&["id", "title", "owner"])?;
        Ok(Self {
            id: p.string("id")?,
            title: p.string("title")?,
            owner: p.string("owner")?,
        })
    }
}

/// A stored thread as read back for display. Threads are never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: String,
    /// Display name of the thread owner
    pub username: String,
}

// ── Comments ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub thread_id: String,
    pub content: String,
    pub owner: String,
}

impl FromPayload for NewComment {
    const ENTITY: &'static str = "NEW_COMMENT";

    fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let p = Payload::new(Self::ENTITY, payload).require(&["threadId", "content", "owner"])?;
        Ok(Self {
            thread_id: p.string("threadId")?,
            content: p.string("content")?,
            owner: p.string("owner")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl FromPayload for AddedComment {
    const ENTITY: &'static str = "ADDED_COMMENT";

    fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let p = Payload::new(Self::ENTITY, payload).require(&["id", "content", "owner"])?;
        Ok(Self {
            id: p.string("id")?,
            content: p.string("content")?,
            owner: p.string("owner")?,
        })
    }
}

/// A comment row as the comment port returns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    pub id: String,
    pub thread_id: String,
    pub owner: String,
    pub username: String,
    pub date: String,
    pub content: String,
    pub deletion: DeletionState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedComment {
    pub id: String,
    pub username: String,
    pub date: String,
    pub content: String,
    pub replies: Vec<DetailedReply>,
    pub like_count: u64,
}

impl DetailedComment {
    /// Projects a stored row into the view, redacting its content.
    pub fn from_record(record: &CommentRecord, replies: Vec<DetailedReply>, like_count: u64) -> Self {
        Self {
            id: record.id.clone(),
            username: record.username.clone(),
            date: record.date.clone(),
            content: redact_comment(&record.content, record.deletion),
            replies,
            like_count,
        }
    }
}

impl FromPayload for DetailedComment {
    const ENTITY: &'static str = "DETAILED_COMMENT";

    fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let p = Payload::new(Self::ENTITY, payload)
            .require(&["id", "username", "date", "content", "replies", "likeCount"])?;
        let replies = p
            .array("replies")?
            .iter()
            .map(DetailedReply::from_payload)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            id: p.string("id")?,
            username: p.string("username")?,
            date: p.string("date")?,
            content: p.string("content")?,
            replies,
            like_count: p.unsigned("likeCount")?,
        })
    }
}

// ── Replies ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReply {
    pub thread_id: String,
    pub comment_id: String,
    pub content: String,
    pub owner: String,
}

impl FromPayload for NewReply {
    const ENTITY: &'static str = "NEW_REPLY";

    fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let p = Payload::new(Self::ENTITY, payload)
            .require(&["threadId", "commentId", "content", "owner"])?;
        Ok(Self {
            thread_id: p.string("threadId")?,
            comment_id: p.string("commentId")?,
            content: p.string("content")?,
            owner: p.string("owner")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedReply {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl FromPayload for AddedReply {
    const ENTITY: &'static str = "ADDED_REPLY";

    fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let p = Payload::new(Self::ENTITY, payload).require(&["id", "content", "owner"])?;
        Ok(Self {
            id: p.string("id")?,
            content: p.string("content")?,
            owner: p.string("owner")?,
        })
    }
}

/// A reply row as the reply port returns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyRecord {
    pub id: String,
    pub comment_id: String,
    pub owner: String,
    pub username: String,
    pub date: String,
    pub content: String,
    pub deletion: DeletionState,
}

/// A reply as shown under its comment. The linking `comment_id` is not part
/// of the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailedReply {
    pub id: String,
    pub content: String,
    pub date: String,
    pub username: String,
}

impl DetailedReply {
    pub fn from_record(record: &ReplyRecord) -> Self {
        Self {
            id: record.id.clone(),
            content: redact_reply(&record.content, record.deletion),
            date: record.date.clone(),
            username: record.username.clone(),
        }
    }
}

impl FromPayload for DetailedReply {
    const ENTITY: &'static str = "DETAILED_REPLY";

    /// Accepts an optional boolean `isDeleted`; when true the content is redacted.
    fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let p = Payload::new(Self::ENTITY, payload).require(&["id", "content", "date", "username"])?;
        let deletion = DeletionState::from(p.optional_flag("isDeleted")?);
        Ok(Self {
            id: p.string("id")?,
            content: redact_reply(&p.string("content")?, deletion),
            date: p.string("date")?,
            username: p.string("username")?,
        })
    }
}

// ── Likes ───────────────────────────────────────────────────────────────────

/// The (comment, owner) pair a like is keyed on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLike {
    pub comment_id: String,
    pub owner: String,
}

impl FromPayload for NewLike {
    const ENTITY: &'static str = "NEW_LIKE";

    fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let p = Payload::new(Self::ENTITY, payload).require(&["commentId", "owner"])?;
        Ok(Self {
            comment_id: p.string("commentId")?,
            owner: p.string("owner")?,
        })
    }
}

/// A stored like. At most one exists per (comment_id, owner).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub id: String,
    pub comment_id: String,
    pub owner: String,
}

// ── Thread view ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailedThread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: String,
    pub username: String,
    pub comments: Vec<DetailedComment>,
}

impl DetailedThread {
    pub fn new(thread: Thread, comments: Vec<DetailedComment>) -> Self {
        Self {
            id: thread.id,
            title: thread.title,
            body: thread.body,
            date: thread.date,
            username: thread.username,
            comments,
        }
    }
}

impl FromPayload for DetailedThread {
    const ENTITY: &'static str = "DETAILED_THREAD";

    fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let p = Payload::new(Self::ENTITY, payload)
            .require(&["id", "title", "body", "date", "username", "comments"])?;
        let comments = p
            .array("comments")?
            .iter()
            .map(DetailedComment::from_payload)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            id: p.string("id")?,
            title: p.string("title")?,
            body: p.string("body")?,
            date: p.string("date")?,
            username: p.string("username")?,
            comments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationKind;
    use serde_json::json;

    fn kind<T: std::fmt::Debug>(result: Result<T, ValidationError>) -> (String, ValidationKind) {
        let err = result.unwrap_err();
        (err.entity.to_string(), err.kind)
    }

    #[test]
    fn test_new_comment_preserves_fields() {
        let payload = json!({ "threadId": "thread-123", "content": "some comment", "owner": "user-123" });
        let comment = NewComment::from_payload(&payload).unwrap();
        assert_eq!(comment.thread_id, "thread-123");
        assert_eq!(comment.content, "some comment");
        assert_eq!(comment.owner, "user-123");
        // No extra fields leak through serialization.
        assert_eq!(serde_json::to_value(&comment).unwrap(), payload);
    }

    #[test]
    fn test_new_comment_missing_property() {
        let payload = json!({ "content": "some comment", "threadId": "thread-123", "userId": "user-123" });
        assert_eq!(
            kind(NewComment::from_payload(&payload)),
            ("NEW_COMMENT".into(), ValidationKind::MissingProperty)
        );
    }

    #[test]
    fn test_new_comment_wrong_type() {
        let payload = json!({ "content": {}, "threadId": 123, "owner": 456 });
        assert_eq!(
            kind(NewComment::from_payload(&payload)),
            ("NEW_COMMENT".into(), ValidationKind::DataTypeMismatch)
        );
    }

    #[test]
    fn test_new_reply_codes() {
        let missing = json!({ "commentId": "comment-123", "owner": "user-123" });
        assert_eq!(
            kind(NewReply::from_payload(&missing)),
            ("NEW_REPLY".into(), ValidationKind::MissingProperty)
        );

        let mistyped = json!({ "threadId": "t", "commentId": 234, "content": {}, "owner": 123 });
        assert_eq!(
            kind(NewReply::from_payload(&mistyped)),
            ("NEW_REPLY".into(), ValidationKind::DataTypeMismatch)
        );

        let valid = json!({ "threadId": "thread-1", "commentId": "comment-1", "content": "some reply", "owner": "user-1" });
        let reply = NewReply::from_payload(&valid).unwrap();
        assert_eq!(serde_json::to_value(&reply).unwrap(), valid);
    }

    #[test]
    fn test_new_like() {
        assert_eq!(
            kind(NewLike::from_payload(&json!({ "commentId": "comment-123" }))),
            ("NEW_LIKE".into(), ValidationKind::MissingProperty)
        );
        assert_eq!(
            kind(NewLike::from_payload(&json!({ "commentId": 123, "owner": {} }))),
            ("NEW_LIKE".into(), ValidationKind::DataTypeMismatch)
        );

        let payload = json!({ "commentId": "comment-123", "owner": "user-123" });
        let like = NewLike::from_payload(&payload).unwrap();
        assert_eq!(like, NewLike { comment_id: "comment-123".into(), owner: "user-123".into() });
        assert_eq!(serde_json::to_value(&like).unwrap(), payload);
    }

    #[test]
    fn test_added_comment() {
        assert_eq!(
            kind(AddedComment::from_payload(&json!({ "id": "comment-123", "content": "c" }))),
            ("ADDED_COMMENT".into(), ValidationKind::MissingProperty)
        );
        assert_eq!(
            kind(AddedComment::from_payload(&json!({ "id": 123, "content": 145, "owner": {} }))),
            ("ADDED_COMMENT".into(), ValidationKind::DataTypeMismatch)
        );
    }

    #[test]
    fn test_detailed_reply_redacts_flagged_payload() {
        let mut payload = json!({
            "id": "reply-123",
            "content": "sebuah balasan",
            "date": "2025-08-08T07:22:33.555Z",
            "username": "dicoding",
            "isDeleted": true,
        });
        assert_eq!(DetailedReply::from_payload(&payload).unwrap().content, "**balasan telah dihapus**");

        payload["isDeleted"] = json!(false);
        assert_eq!(DetailedReply::from_payload(&payload).unwrap().content, "sebuah balasan");

        payload["isDeleted"] = json!("true");
        assert_eq!(
            kind(DetailedReply::from_payload(&payload)),
            ("DETAILED_REPLY".into(), ValidationKind::DataTypeMismatch)
        );
    }

    #[test]
    fn test_detailed_comment_requires_like_count() {
        let payload = json!({
            "id": "comment-123",
            "username": "dicoding",
            "date": "2021",
            "content": "some comment",
            "replies": [],
        });
        assert_eq!(
            kind(DetailedComment::from_payload(&payload)),
            ("DETAILED_COMMENT".into(), ValidationKind::MissingProperty)
        );

        let mut with_count = payload.clone();
        with_count["likeCount"] = json!(0);
        let comment = DetailedComment::from_payload(&with_count).unwrap();
        assert_eq!(comment.like_count, 0);

        with_count["likeCount"] = json!("bukan angka");
        assert_eq!(
            kind(DetailedComment::from_payload(&with_count)),
            ("DETAILED_COMMENT".into(), ValidationKind::DataTypeMismatch)
        );
    }

    #[test]
    fn test_detailed_thread_payload() {
        let payload = json!({
            "id": "thread-123",
            "title": "A sample thread",
            "body": "This is a sample body",
            "date": "2024-06-01",
            "username": "user-123",
        });
        assert_eq!(
            kind(DetailedThread::from_payload(&payload)),
            ("DETAILED_THREAD".into(), ValidationKind::MissingProperty)
        );

        let mut complete = payload.clone();
        complete["comments"] = json!([]);
        let thread = DetailedThread::from_payload(&complete).unwrap();
        assert_eq!(thread.id, "thread-123");
        assert!(thread.comments.is_empty());
    }

    #[test]
    fn test_detailed_comment_serializes_camel_case_without_comment_id() {
        let record = ReplyRecord {
            id: "reply-1".into(),
            comment_id: "comment-1".into(),
            owner: "user-1".into(),
            username: "dicoding".into(),
            date: "2025".into(),
            content: "yo".into(),
            deletion: DeletionState::Active,
        };
        let view = DetailedComment {
            id: "comment-1".into(),
            username: "dicoding".into(),
            date: "2025".into(),
            content: "hi".into(),
            replies: vec![DetailedReply::from_record(&record)],
            like_count: 2,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["likeCount"], 2);
        assert!(json["replies"][0].get("commentId").is_none());
        assert!(json["replies"][0].get("comment_id").is_none());
    }
}
