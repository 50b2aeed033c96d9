use crate::error::Result;
use crate::models::{AddedComment, NewComment};
use crate::traits::{CommentRepository, ThreadRepository};
use crate::validation::FromPayload;
use serde_json::Value;
use std::sync::Arc;

pub struct AddCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl AddCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self { thread_repository, comment_repository }
    }

    pub async fn execute(&self, payload: &Value) -> Result<AddedComment> {
        let new_comment = NewComment::from_payload(payload)?;

        // 1. The thread must exist
        self.thread_repository
            .verify_thread_availability(&new_comment.thread_id)
            .await?;

        // 2. Persist
        let added = self.comment_repository.add_comment(&new_comment).await?;
        tracing::info!(thread_id = %new_comment.thread_id, comment_id = %added.id, "comment added");
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ForumError;
    use crate::traits::{MockCommentRepository, MockThreadRepository};
    use mockall::Sequence;
    use serde_json::json;

    #[tokio::test]
    async fn test_add_comment_orchestration() {
        let mut seq = Sequence::new();
        let mut threads = MockThreadRepository::new();
        let mut comments = MockCommentRepository::new();

        threads
            .expect_verify_thread_availability()
            .withf(|thread_id| thread_id == "thread-123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        comments
            .expect_add_comment()
            .withf(|c| {
                *c == NewComment {
                    thread_id: "thread-123".into(),
                    content: "comment content".into(),
                    owner: "user-123".into(),
                }
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|c| {
                Ok(AddedComment { id: "comment-123".into(), content: c.content.clone(), owner: c.owner.clone() })
            });

        let use_case = AddCommentUseCase::new(Arc::new(threads), Arc::new(comments));
        let added = use_case
            .execute(&json!({ "content": "comment content", "threadId": "thread-123", "owner": "user-123" }))
            .await
            .unwrap();

        assert_eq!(
            added,
            AddedComment { id: "comment-123".into(), content: "comment content".into(), owner: "user-123".into() }
        );
    }

    #[tokio::test]
    async fn test_missing_thread_stops_before_insert() {
        let mut threads = MockThreadRepository::new();
        let mut comments = MockCommentRepository::new();
        threads
            .expect_verify_thread_availability()
            .returning(|_| Err(ForumError::not_found("thread tidak ditemukan")));
        comments.expect_add_comment().never();

        let use_case = AddCommentUseCase::new(Arc::new(threads), Arc::new(comments));
        let err = use_case
            .execute(&json!({ "content": "c", "threadId": "thread-404", "owner": "user-123" }))
            .await
            .unwrap_err();
        assert!(matches!(err, ForumError::NotFound(_)));
    }
}
