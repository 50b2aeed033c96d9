use crate::error::Result;
use crate::models::{AddedReply, NewReply};
use crate::traits::{CommentRepository, ReplyRepository, ThreadRepository};
use crate::validation::FromPayload;
use serde_json::Value;
use std::sync::Arc;

pub struct AddReplyUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
}

impl AddReplyUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        reply_repository: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self { thread_repository, comment_repository, reply_repository }
    }

    pub async fn execute(&self, payload: &Value) -> Result<AddedReply> {
        let new_reply = NewReply::from_payload(payload)?;

        // 1. Thread, then the parent comment inside it
        self.thread_repository
            .verify_thread_availability(&new_reply.thread_id)
            .await?;
        self.comment_repository
            .check_available_comment(&new_reply.thread_id, &new_reply.comment_id)
            .await?;

        // 2. Persist
        let added = self.reply_repository.add_reply(&new_reply).await?;
        tracing::info!(comment_id = %new_reply.comment_id, reply_id = %added.id, "reply added");
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ForumError;
    use crate::traits::{MockCommentRepository, MockReplyRepository, MockThreadRepository};
    use mockall::Sequence;
    use serde_json::json;

    #[tokio::test]
    async fn test_add_reply_orchestration() {
        let mut seq = Sequence::new();
        let mut threads = MockThreadRepository::new();
        let mut comments = MockCommentRepository::new();
        let mut replies = MockReplyRepository::new();

        threads
            .expect_verify_thread_availability()
            .withf(|thread_id| thread_id == "thread-123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        comments
            .expect_check_available_comment()
            .withf(|thread_id, comment_id| thread_id == "thread-123" && comment_id == "comment-123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        replies
            .expect_add_reply()
            .withf(|r| {
                *r == NewReply {
                    thread_id: "thread-123".into(),
                    comment_id: "comment-123".into(),
                    content: "reply content".into(),
                    owner: "user-123".into(),
                }
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|r| {
                Ok(AddedReply { id: "reply-123".into(), content: r.content.clone(), owner: r.owner.clone() })
            });

        let use_case = AddReplyUseCase::new(Arc::new(threads), Arc::new(comments), Arc::new(replies));
        let added = use_case
            .execute(&json!({
                "content": "reply content",
                "threadId": "thread-123",
                "commentId": "comment-123",
                "owner": "user-123",
            }))
            .await
            .unwrap();

        assert_eq!(
            added,
            AddedReply { id: "reply-123".into(), content: "reply content".into(), owner: "user-123".into() }
        );
    }

    #[tokio::test]
    async fn test_deleted_parent_comment_rejects_reply() {
        let mut threads = MockThreadRepository::new();
        let mut comments = MockCommentRepository::new();
        let mut replies = MockReplyRepository::new();
        threads.expect_verify_thread_availability().returning(|_| Ok(()));
        comments
            .expect_check_available_comment()
            .returning(|_, _| Err(ForumError::not_found("komentar tidak ditemukan")));
        replies.expect_add_reply().never();

        let use_case = AddReplyUseCase::new(Arc::new(threads), Arc::new(comments), Arc::new(replies));
        let err = use_case
            .execute(&json!({ "content": "r", "threadId": "t", "commentId": "c", "owner": "u" }))
            .await
            .unwrap_err();
        assert!(matches!(err, ForumError::NotFound(_)));
    }
}
