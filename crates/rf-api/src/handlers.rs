//! # rf-api Handlers
//!
//! This module coordinates the flow between HTTP requests and the core use
//! cases. Each handler merges path parameters and the acting owner into the
//! request body and hands the resulting payload to one use case.

use crate::error::ApiError;
use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{ready, Ready};
use rf_core::traits::{CommentRepository, LikeRepository, ReplyRepository, ThreadRepository};
use rf_core::use_cases::{
    AddCommentUseCase, AddReplyUseCase, AddThreadUseCase, DeleteCommentUseCase, DeleteReplyUseCase,
    GetThreadUseCase, ToggleLikeUseCase,
};
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Header carrying the authenticated user id, set by the upstream auth layer.
pub const OWNER_HEADER: &str = "X-Owner-Id";

/// State shared across all Actix-web workers.
pub struct AppState {
    pub add_thread: AddThreadUseCase,
    pub get_thread: GetThreadUseCase,
    pub add_comment: AddCommentUseCase,
    pub delete_comment: DeleteCommentUseCase,
    pub add_reply: AddReplyUseCase,
    pub delete_reply: DeleteReplyUseCase,
    pub toggle_like: ToggleLikeUseCase,
}

impl AppState {
    /// Wires every use case to the given ports.
    pub fn new(
        threads: Arc<dyn ThreadRepository>,
        comments: Arc<dyn CommentRepository>,
        replies: Arc<dyn ReplyRepository>,
        likes: Arc<dyn LikeRepository>,
    ) -> Self {
        Self {
            add_thread: AddThreadUseCase::new(threads.clone()),
            get_thread: GetThreadUseCase::new(threads.clone(), comments.clone(), replies.clone(), likes.clone()),
            add_comment: AddCommentUseCase::new(threads.clone(), comments.clone()),
            delete_comment: DeleteCommentUseCase::new(threads.clone(), comments.clone()),
            add_reply: AddReplyUseCase::new(threads.clone(), comments.clone(), replies.clone()),
            delete_reply: DeleteReplyUseCase::new(threads, comments.clone(), replies),
            toggle_like: ToggleLikeUseCase::new(comments, likes),
        }
    }
}

/// The acting user, extracted from `X-Owner-Id`.
pub struct Owner(pub String);

impl FromRequest for Owner {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let owner = req
            .headers()
            .get(OWNER_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(|value| Owner(value.to_string()));
        ready(owner.ok_or(ApiError::Unauthenticated))
    }
}

/// Merges `fields` over the JSON body. A missing or non-object body counts as empty.
fn payload_with(body: Option<web::Json<Value>>, fields: &[(&str, &str)]) -> Value {
    let mut payload = match body.map(web::Json::into_inner) {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    };
    for (key, value) in fields {
        payload.insert(key.to_string(), Value::String(value.to_string()));
    }
    Value::Object(payload)
}

fn success() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "success" }))
}

/// POST /threads
pub async fn post_thread(
    data: web::Data<AppState>,
    owner: Owner,
    body: Option<web::Json<Value>>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload_with(body, &[("owner", &owner.0)]);
    let added_thread = data.add_thread.execute(&payload).await?;

    Ok(HttpResponse::Created().json(json!({
        "status": "success",
        "data": { "addedThread": added_thread },
    })))
}

/// GET /threads/{thread_id}
pub async fn get_thread(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let thread_id = path.into_inner();
    let thread = data.get_thread.execute(&json!({ "threadId": thread_id })).await?;

    Ok(HttpResponse::Ok().json(json!({
        "status": "success",
        "data": { "thread": thread },
    })))
}

/// POST /threads/{thread_id}/comments
pub async fn post_comment(
    data: web::Data<AppState>,
    owner: Owner,
    path: web::Path<String>,
    body: Option<web::Json<Value>>,
) -> Result<HttpResponse, ApiError> {
    let thread_id = path.into_inner();
    let payload = payload_with(body, &[("threadId", &thread_id), ("owner", &owner.0)]);
    let added_comment = data.add_comment.execute(&payload).await?;

    Ok(HttpResponse::Created().json(json!({
        "status": "success",
        "data": { "addedComment": added_comment },
    })))
}

/// DELETE /threads/{thread_id}/comments/{comment_id}
pub async fn delete_comment(
    data: web::Data<AppState>,
    owner: Owner,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ApiError> {
    let (thread_id, comment_id) = path.into_inner();
    let payload = payload_with(
        None,
        &[("threadId", &thread_id), ("commentId", &comment_id), ("owner", &owner.0)],
    );
    data.delete_comment.execute(&payload).await?;
    Ok(success())
}

/// POST /threads/{thread_id}/comments/{comment_id}/replies
pub async fn post_reply(
    data: web::Data<AppState>,
    owner: Owner,
    path: web::Path<(String, String)>,
    body: Option<web::Json<Value>>,
) -> Result<HttpResponse, ApiError> {
    let (thread_id, comment_id) = path.into_inner();
    let payload = payload_with(
        body,
        &[("threadId", &thread_id), ("commentId", &comment_id), ("owner", &owner.0)],
    );
    let added_reply = data.add_reply.execute(&payload).await?;

    Ok(HttpResponse::Created().json(json!({
        "status": "success",
        "data": { "addedReply": added_reply },
    })))
}

/// DELETE /threads/{thread_id}/comments/{comment_id}/replies/{reply_id}
pub async fn delete_reply(
    data: web::Data<AppState>,
    owner: Owner,
    path: web::Path<(String, String, String)>,
) -> Result<HttpResponse, ApiError> {
    let (thread_id, comment_id, reply_id) = path.into_inner();
    let payload = payload_with(
        None,
        &[
            ("threadId", &thread_id),
            ("commentId", &comment_id),
            ("replyId", &reply_id),
            ("owner", &owner.0),
        ],
    );
    data.delete_reply.execute(&payload).await?;
    Ok(success())
}

/// PUT /threads/{thread_id}/comments/{comment_id}/likes
pub async fn put_like(
    data: web::Data<AppState>,
    owner: Owner,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ApiError> {
    let (thread_id, comment_id) = path.into_inner();
    let payload = payload_with(
        None,
        &[("threadId", &thread_id), ("commentId", &comment_id), ("owner", &owner.0)],
    );
    data.toggle_like.execute(&payload).await?;
    Ok(success())
}
