//! # Core Traits (Ports)
//!
//! Any storage plugin must implement these traits to be used by the binary.
//! Use cases depend only on these contracts.

use crate::error::Result;
use crate::models::{
    AddedComment, AddedReply, AddedThread, CommentRecord, NewComment, NewLike, NewReply, NewThread,
    ReplyRecord, Thread,
};
use async_trait::async_trait;

/// Thread persistence. Threads have no delete path.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    async fn add_thread(&self, new_thread: &NewThread) -> Result<AddedThread>;

    /// Fails `NotFound` if the thread does not exist.
    async fn verify_thread_availability(&self, thread_id: &str) -> Result<()>;

    async fn get_thread_by_id(&self, thread_id: &str) -> Result<Thread>;
}

/// Comment persistence, existence and ownership checks.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn add_comment(&self, new_comment: &NewComment) -> Result<AddedComment>;

    /// Fails `NotFound` if the comment is missing, soft-deleted, or not part of `thread_id`.
    async fn check_available_comment(&self, thread_id: &str, comment_id: &str) -> Result<()>;

    /// Fails `Authorization` if `owner_id` does not own the comment.
    async fn verify_comment_access(&self, comment_id: &str, owner_id: &str) -> Result<()>;

    /// Oldest first.
    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<CommentRecord>>;

    /// Marks the comment deleted. Succeeds on an already-deleted comment.
    async fn delete_comment_by_id(&self, comment_id: &str) -> Result<()>;
}

/// Reply persistence, existence and ownership checks.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    async fn add_reply(&self, new_reply: &NewReply) -> Result<AddedReply>;

    /// Every reply of every comment in the thread, oldest first.
    async fn get_replies_by_thread_id(&self, thread_id: &str) -> Result<Vec<ReplyRecord>>;

    /// Fails `NotFound` unless the reply exists, is not deleted, belongs to
    /// `comment_id`, and `comment_id` is live and belongs to `thread_id`.
    async fn check_available_reply(&self, thread_id: &str, comment_id: &str, reply_id: &str) -> Result<()>;

    async fn verify_reply_owner(&self, reply_id: &str, owner_id: &str) -> Result<()>;

    /// Fails `NotFound` if the reply is absent or already deleted.
    async fn delete_reply_by_id(&self, reply_id: &str) -> Result<()>;
}

/// Like persistence.
///
/// Uniqueness of (comment_id, owner) is the implementation's responsibility:
/// a second `add_like` for the same pair must not create a second row.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn check_available_like(&self, like: &NewLike) -> Result<bool>;

    async fn add_like(&self, like: &NewLike) -> Result<()>;

    async fn delete_like_by_comment_id_and_owner(&self, like: &NewLike) -> Result<()>;

    async fn get_like_count_by_comment_id(&self, comment_id: &str) -> Result<u64>;
}

/// Produces opaque unique identifiers. Callers add the entity prefix.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Produces ISO-8601 timestamps.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> String;
}

/// Random v4 UUIDs in simple (hyphen-less) form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }
}

/// Wall-clock UTC time with millisecond precision, e.g. `2025-12-12T12:12:12.123Z`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    }
}
