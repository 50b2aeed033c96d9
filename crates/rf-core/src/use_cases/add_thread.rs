use crate::error::Result;
use crate::models::{AddedThread, NewThread};
use crate::traits::ThreadRepository;
use crate::validation::FromPayload;
use serde_json::Value;
use std::sync::Arc;

pub struct AddThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddThreadUseCase {
    pub fn new(thread_repository: Arc<dyn ThreadRepository>) -> Self {
        Self { thread_repository }
    }

    pub async fn execute(&self, payload: &Value) -> Result<AddedThread> {
        let new_thread = NewThread::from_payload(payload)?;
        let added = self.thread_repository.add_thread(&new_thread).await?;
        tracing::info!(thread_id = %added.id, owner = %added.owner, "thread created");
        Ok(added)
    }
}
