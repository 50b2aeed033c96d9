//! # Use Cases
//!
//! Each use case takes a keyed-field payload, validates it before any port
//! call, then runs a fixed fail-fast sequence of port calls. Failures are
//! propagated unchanged; there is no local recovery.

mod add_comment;
mod add_reply;
mod add_thread;
mod delete_comment;
mod delete_reply;
mod get_thread;
mod toggle_like;

pub use add_comment::AddCommentUseCase;
pub use add_reply::AddReplyUseCase;
pub use add_thread::AddThreadUseCase;
pub use delete_comment::DeleteCommentUseCase;
pub use delete_reply::DeleteReplyUseCase;
pub use get_thread::GetThreadUseCase;
pub use toggle_like::{LikeState, ToggleLikeUseCase};
