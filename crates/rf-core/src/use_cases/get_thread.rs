//! # Thread Aggregator
//!
//! Assembles one `DetailedThread` out of the thread, its comments, every
//! reply in the thread, and a like count per comment.
//!
//! Replies are fetched once for the whole thread and partitioned in memory.
//! Like counts are fetched one call per comment, concurrently.

use crate::error::Result;
use crate::models::{DetailedComment, DetailedReply, DetailedThread, ReplyRecord};
use crate::traits::{CommentRepository, LikeRepository, ReplyRepository, ThreadRepository};
use crate::validation::Payload;
use futures_util::future::try_join_all;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

const ENTITY: &str = "GET_THREAD_USE_CASE";

pub struct GetThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
    like_repository: Arc<dyn LikeRepository>,
}

impl GetThreadUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        reply_repository: Arc<dyn ReplyRepository>,
        like_repository: Arc<dyn LikeRepository>,
    ) -> Self {
        Self { thread_repository, comment_repository, reply_repository, like_repository }
    }

    pub async fn execute(&self, payload: &Value) -> Result<DetailedThread> {
        let thread_id = Payload::new(ENTITY, payload)
            .require(&["threadId"])?
            .string("threadId")?;

        // 1. Sole existence gate
        self.thread_repository.verify_thread_availability(&thread_id).await?;

        // 2. Fetch
        let thread = self.thread_repository.get_thread_by_id(&thread_id).await?;
        let comments = self.comment_repository.get_comments_by_thread_id(&thread_id).await?;
        let replies = self.reply_repository.get_replies_by_thread_id(&thread_id).await?;
        let like_counts = try_join_all(
            comments
                .iter()
                .map(|comment| self.like_repository.get_like_count_by_comment_id(&comment.id)),
        )
        .await?;

        // 3. Partition replies under their comments (redacted on the way)
        let mut replies_by_comment = group_replies(&replies);

        // 4. Build the comment views in fetched order
        let detailed_comments = comments
            .iter()
            .zip(like_counts)
            .map(|(comment, like_count)| {
                let replies = replies_by_comment.remove(comment.id.as_str()).unwrap_or_default();
                DetailedComment::from_record(comment, replies, like_count)
            })
            .collect::<Vec<_>>();

        if !replies_by_comment.is_empty() {
            tracing::debug!(
                %thread_id,
                orphaned = replies_by_comment.values().map(Vec::len).sum::<usize>(),
                "dropping replies whose comment is not in the thread"
            );
        }

        Ok(DetailedThread::new(thread, detailed_comments))
    }
}

/// Groups replies by `comment_id`, keeping their relative order.
fn group_replies(replies: &[ReplyRecord]) -> HashMap<&str, Vec<DetailedReply>> {
    let mut grouped: HashMap<&str, Vec<DetailedReply>> = HashMap::new();
    for reply in replies {
        grouped
            .entry(reply.comment_id.as_str())
            .or_default()
            .push(DetailedReply::from_record(reply));
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ForumError;
    use crate::models::{CommentRecord, DeletionState, Thread};
    use crate::traits::{
        MockCommentRepository, MockLikeRepository, MockReplyRepository, MockThreadRepository,
    };
    use serde_json::json;

    fn comment(id: &str, content: &str, deletion: DeletionState) -> CommentRecord {
        CommentRecord {
            id: id.into(),
            thread_id: "thread-123".into(),
            owner: "user-1".into(),
            username: "dicoding".into(),
            date: "2025".into(),
            content: content.into(),
            deletion,
        }
    }

    fn reply(id: &str, comment_id: &str, content: &str, deletion: DeletionState) -> ReplyRecord {
        ReplyRecord {
            id: id.into(),
            comment_id: comment_id.into(),
            owner: "user-2".into(),
            username: "johndoe".into(),
            date: "2026".into(),
            content: content.into(),
            deletion,
        }
    }

    fn thread_repository() -> MockThreadRepository {
        let mut threads = MockThreadRepository::new();
        threads
            .expect_verify_thread_availability()
            .withf(|thread_id| thread_id == "thread-123")
            .times(1)
            .returning(|_| Ok(()));
        threads.expect_get_thread_by_id().times(1).returning(|id| {
            Ok(Thread {
                id: id.to_string(),
                title: "some thread title".into(),
                body: "some thread body".into(),
                date: "2025".into(),
                username: "dicoding".into(),
            })
        });
        threads
    }

    fn use_case(
        comments: Vec<CommentRecord>,
        replies: Vec<ReplyRecord>,
        counts: fn(&str) -> u64,
    ) -> GetThreadUseCase {
        let mut comment_repo = MockCommentRepository::new();
        comment_repo
            .expect_get_comments_by_thread_id()
            .times(1)
            .returning(move |_| Ok(comments.clone()));
        let mut reply_repo = MockReplyRepository::new();
        reply_repo
            .expect_get_replies_by_thread_id()
            .times(1)
            .returning(move |_| Ok(replies.clone()));
        let mut like_repo = MockLikeRepository::new();
        like_repo
            .expect_get_like_count_by_comment_id()
            .returning(move |id| Ok(counts(id)));

        GetThreadUseCase::new(
            Arc::new(thread_repository()),
            Arc::new(comment_repo),
            Arc::new(reply_repo),
            Arc::new(like_repo),
        )
    }

    #[tokio::test]
    async fn test_deleted_reply_under_live_comment() {
        let use_case = use_case(
            vec![comment("c1", "hi", DeletionState::Active)],
            vec![reply("r1", "c1", "yo", DeletionState::Deleted)],
            |_| 5,
        );

        let thread = use_case.execute(&json!({ "threadId": "thread-123" })).await.unwrap();

        assert_eq!(thread.id, "thread-123");
        assert_eq!(thread.title, "some thread title");
        assert_eq!(thread.comments.len(), 1);
        let c1 = &thread.comments[0];
        assert_eq!(c1.id, "c1");
        assert_eq!(c1.content, "hi");
        assert_eq!(c1.like_count, 5);
        assert_eq!(
            c1.replies,
            vec![DetailedReply {
                id: "r1".into(),
                content: "**balasan telah dihapus**".into(),
                date: "2026".into(),
                username: "johndoe".into(),
            }]
        );
    }

    #[tokio::test]
    async fn test_replies_partitioned_in_order() {
        let use_case = use_case(
            vec![
                comment("C1", "first", DeletionState::Active),
                comment("C2", "second", DeletionState::Deleted),
            ],
            vec![
                reply("R1", "C1", "a", DeletionState::Active),
                reply("R2", "C2", "b", DeletionState::Active),
                reply("R3", "C1", "c", DeletionState::Active),
                reply("R4", "gone", "d", DeletionState::Active),
            ],
            |id| if id == "C1" { 2 } else { 0 },
        );

        let thread = use_case.execute(&json!({ "threadId": "thread-123" })).await.unwrap();

        let ids = |c: &DetailedComment| c.replies.iter().map(|r| r.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&thread.comments[0]), vec!["R1", "R3"]);
        assert_eq!(ids(&thread.comments[1]), vec!["R2"]);
        assert_eq!(thread.comments[0].like_count, 2);

        // A deleted comment is redacted but its replies and likes stay.
        assert_eq!(thread.comments[1].content, "**komentar telah dihapus**");
        assert_eq!(thread.comments[1].replies[0].content, "b");
    }

    #[tokio::test]
    async fn test_missing_thread_fetches_nothing() {
        let mut threads = MockThreadRepository::new();
        threads
            .expect_verify_thread_availability()
            .returning(|_| Err(ForumError::not_found("thread tidak ditemukan")));
        threads.expect_get_thread_by_id().never();
        let mut comments = MockCommentRepository::new();
        comments.expect_get_comments_by_thread_id().never();
        let mut replies = MockReplyRepository::new();
        replies.expect_get_replies_by_thread_id().never();

        let use_case = GetThreadUseCase::new(
            Arc::new(threads),
            Arc::new(comments),
            Arc::new(replies),
            Arc::new(MockLikeRepository::new()),
        );
        let err = use_case.execute(&json!({ "threadId": "thread-404" })).await.unwrap_err();
        assert!(matches!(err, ForumError::NotFound(_)));
    }

    #[test]
    fn test_group_replies_keeps_relative_order() {
        let replies = vec![
            reply("r1", "c1", "x", DeletionState::Active),
            reply("r2", "c2", "x", DeletionState::Active),
            reply("r3", "c1", "x", DeletionState::Deleted),
        ];
        let grouped = group_replies(&replies);
        let c1: Vec<_> = grouped["c1"].iter().map(|r| r.id.as_str()).collect();
        assert_eq!(c1, ["r1", "r3"]);
        assert_eq!(grouped["c1"][1].content, "**balasan telah dihapus**");
        assert_eq!(grouped["c2"].len(), 1);
    }
}
