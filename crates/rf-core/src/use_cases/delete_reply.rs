use crate::error::Result;
use crate::traits::{CommentRepository, ReplyRepository, ThreadRepository};
use crate::validation::Payload;
use serde_json::Value;
use std::sync::Arc;

const ENTITY: &str = "DELETE_REPLY_USE_CASE";

/// Soft-deletes a reply.
///
/// The order thread → comment → reply → owner is part of the contract: a
/// caller gets `NotFound` rather than `Authorization` when any parent is gone.
pub struct DeleteReplyUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
}

impl DeleteReplyUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        reply_repository: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self { thread_repository, comment_repository, reply_repository }
    }

    pub async fn execute(&self, payload: &Value) -> Result<()> {
        let p = Payload::new(ENTITY, payload)
            .require(&["threadId", "commentId", "replyId", "owner"])?;
        let thread_id = p.string("threadId")?;
        let comment_id = p.string("commentId")?;
        let reply_id = p.string("replyId")?;
        let owner = p.string("owner")?;

        // 1. Existence, coarsest first
        self.thread_repository.verify_thread_availability(&thread_id).await?;
        self.comment_repository
            .check_available_comment(&thread_id, &comment_id)
            .await?;
        self.reply_repository
            .check_available_reply(&thread_id, &comment_id, &reply_id)
            .await?;

        // 2. Ownership
        self.reply_repository.verify_reply_owner(&reply_id, &owner).await?;

        // 3. Mutation
        self.reply_repository.delete_reply_by_id(&reply_id).await?;

        tracing::info!(%comment_id, %reply_id, "reply deleted");
        Ok(())
    }
}
