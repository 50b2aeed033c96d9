use crate::error::Result;
use crate::traits::{CommentRepository, ThreadRepository};
use crate::validation::Payload;
use serde_json::Value;
use std::sync::Arc;

const ENTITY: &str = "DELETE_COMMENT_USE_CASE";

/// Soft-deletes a comment: thread, then comment availability, then ownership.
pub struct DeleteCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl DeleteCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self { thread_repository, comment_repository }
    }

    pub async fn execute(&self, payload: &Value) -> Result<()> {
        let p = Payload::new(ENTITY, payload).require(&["threadId", "commentId", "owner"])?;
        let thread_id = p.string("threadId")?;
        let comment_id = p.string("commentId")?;
        let owner = p.string("owner")?;

        self.thread_repository.verify_thread_availability(&thread_id).await?;
        self.comment_repository
            .check_available_comment(&thread_id, &comment_id)
            .await?;
        self.comment_repository
            .verify_comment_access(&comment_id, &owner)
            .await?;
        self.comment_repository.delete_comment_by_id(&comment_id).await?;

        tracing::info!(%thread_id, %comment_id, "comment deleted");
        Ok(())
    }
}
