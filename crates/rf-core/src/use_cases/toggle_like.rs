//! # Like Toggle Engine
//!
//! Flips the like state of one (comment, owner) pair.
//!
//! The check and the write are two separate port calls with no lock between
//! them. Two concurrent toggles by the same owner may both see "no like" and
//! both insert, or both see "like" and both delete. The like store's own
//! uniqueness on (comment_id, owner) keeps the row count at most one.

use crate::error::Result;
use crate::models::NewLike;
use crate::traits::{CommentRepository, LikeRepository};
use crate::validation::{FromPayload, Payload};
use serde_json::Value;
use std::sync::Arc;

const ENTITY: &str = "TOGGLE_LIKE_USE_CASE";

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeState {
    Liked,
    Unliked,
}

pub struct ToggleLikeUseCase {
    comment_repository: Arc<dyn CommentRepository>,
    like_repository: Arc<dyn LikeRepository>,
}

impl ToggleLikeUseCase {
    pub fn new(
        comment_repository: Arc<dyn CommentRepository>,
        like_repository: Arc<dyn LikeRepository>,
    ) -> Self {
        Self { comment_repository, like_repository }
    }

    pub async fn execute(&self, payload: &Value) -> Result<LikeState> {
        // Presence of every field before any type check
        let thread_id = Payload::new(ENTITY, payload)
            .require(&["threadId", "commentId", "owner"])?
            .string("threadId")?;
        let like = NewLike::from_payload(payload)?;

        // 1. Comment must be reachable from the thread
        self.comment_repository
            .check_available_comment(&thread_id, &like.comment_id)
            .await?;

        // 2. Flip
        let state = if self.like_repository.check_available_like(&like).await? {
            self.like_repository.delete_like_by_comment_id_and_owner(&like).await?;
            LikeState::Unliked
        } else {
            self.like_repository.add_like(&like).await?;
            LikeState::Liked
        };

        tracing::debug!(comment_id = %like.comment_id, owner = %like.owner, ?state, "like toggled");
        Ok(state)
    }
}
