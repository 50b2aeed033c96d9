//! # rf-api
//!
//! The web routing and orchestration layer for Rusty-Forum.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod translator;

use actix_web::web;

/// Configures the thread, comment, reply and like routes.
///
/// Everything lives under a `/threads` scope so the binary can mount the
/// API under a different prefix if needed.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/threads")
            .route("", web::post().to(handlers::post_thread))
            .route("/{thread_id}", web::get().to(handlers::get_thread))
            .route("/{thread_id}/comments", web::post().to(handlers::post_comment))
            .route(
                "/{thread_id}/comments/{comment_id}",
                web::delete().to(handlers::delete_comment),
            )
            .route(
                "/{thread_id}/comments/{comment_id}/replies",
                web::post().to(handlers::post_reply),
            )
            .route(
                "/{thread_id}/comments/{comment_id}/replies/{reply_id}",
                web::delete().to(handlers::delete_reply),
            )
            .route(
                "/{thread_id}/comments/{comment_id}/likes",
                web::put().to(handlers::put_like),
            ),
    );
}
