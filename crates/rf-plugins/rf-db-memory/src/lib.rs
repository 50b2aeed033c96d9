//! # rf-db-memory Implementation
//!
//! In-process implementation of every `rf-core` repository port.
//! Rows live in `DashMap`s; listings are ordered by creation date, ties
//! broken by insertion order.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rf_core::error::{ForumError, Result};
use rf_core::models::{
    AddedComment, AddedReply, AddedThread, CommentRecord, DeletionState, Like, NewComment, NewLike,
    NewReply, NewThread, ReplyRecord, Thread,
};
use rf_core::traits::{
    Clock, CommentRepository, IdGenerator, LikeRepository, ReplyRepository, SystemClock,
    ThreadRepository, UuidGenerator,
};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

struct ThreadRow {
    seq: u64,
    title: String,
    body: String,
    owner: String,
    date: String,
}

struct CommentRow {
    seq: u64,
    thread_id: String,
    owner: String,
    content: String,
    date: String,
    deletion: DeletionState,
}

struct ReplyRow {
    seq: u64,
    comment_id: String,
    owner: String,
    content: String,
    date: String,
    deletion: DeletionState,
}

pub struct MemoryForumStore {
    threads: DashMap<String, ThreadRow>,
    comments: DashMap<String, CommentRow>,
    replies: DashMap<String, ReplyRow>,
    /// Keyed on (comment_id, owner): the map itself enforces one like per pair.
    likes: DashMap<(String, String), Like>,
    /// owner id -> display name
    users: DashMap<String, String>,
    sequence: AtomicU64,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl Default for MemoryForumStore {
    fn default() -> Self {
        Self::new(Arc::new(UuidGenerator), Arc::new(SystemClock))
    }
}

impl MemoryForumStore {
    pub fn new(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self {
            threads: DashMap::new(),
            comments: DashMap::new(),
            replies: DashMap::new(),
            likes: DashMap::new(),
            users: DashMap::new(),
            sequence: AtomicU64::new(0),
            ids,
            clock,
        }
    }

    /// Records the display name shown for `user_id`.
    pub fn register_user(&self, user_id: &str, username: &str) {
        self.users.insert(user_id.to_string(), username.to_string());
    }

    fn next_seq(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::Relaxed)
    }

    fn next_id(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.ids.generate())
    }

    /// Owners without a directory entry are shown by id.
    fn username_of(&self, owner: &str) -> String {
        self.users
            .get(owner)
            .map(|name| name.value().clone())
            .unwrap_or_else(|| owner.to_string())
    }
}

fn thread_not_found() -> ForumError {
    ForumError::not_found("thread tidak ditemukan")
}

fn comment_not_found() -> ForumError {
    ForumError::not_found("komentar tidak ditemukan")
}

fn reply_not_found() -> ForumError {
    ForumError::not_found("balasan tidak ditemukan")
}

#[async_trait]
impl ThreadRepository for MemoryForumStore {
    async fn add_thread(&self, new_thread: &NewThread) -> Result<AddedThread> {
        let id = self.next_id("thread");
        self.threads.insert(
            id.clone(),
            ThreadRow {
                seq: self.next_seq(),
                title: new_thread.title.clone(),
                body: new_thread.body.clone(),
                owner: new_thread.owner.clone(),
                date: self.clock.now(),
            },
        );
        tracing::debug!(thread_id = %id, "thread row inserted");

        Ok(AddedThread { id, title: new_thread.title.clone(), owner: new_thread.owner.clone() })
    }

    async fn verify_thread_availability(&self, thread_id: &str) -> Result<()> {
        if self.threads.contains_key(thread_id) {
            Ok(())
        } else {
            Err(thread_not_found())
        }
    }

    async fn get_thread_by_id(&self, thread_id: &str) -> Result<Thread> {
        let row = self.threads.get(thread_id).ok_or_else(thread_not_found)?;
        Ok(Thread {
            id: thread_id.to_string(),
            title: row.title.clone(),
            body: row.body.clone(),
            date: row.date.clone(),
            username: self.username_of(&row.owner),
        })
    }
}

#[async_trait]
impl CommentRepository for MemoryForumStore {
    async fn add_comment(&self, new_comment: &NewComment) -> Result<AddedComment> {
        let id = self.next_id("comment");
        self.comments.insert(
            id.clone(),
            CommentRow {
                seq: self.next_seq(),
                thread_id: new_comment.thread_id.clone(),
                owner: new_comment.owner.clone(),
                content: new_comment.content.clone(),
                date: self.clock.now(),
                deletion: DeletionState::Active,
            },
        );
        tracing::debug!(comment_id = %id, "comment row inserted");

        Ok(AddedComment { id, content: new_comment.content.clone(), owner: new_comment.owner.clone() })
    }

    async fn check_available_comment(&self, thread_id: &str, comment_id: &str) -> Result<()> {
        match self.comments.get(comment_id) {
            Some(row) if row.thread_id == thread_id && !row.deletion.is_deleted() => Ok(()),
            _ => Err(comment_not_found()),
        }
    }

    async fn verify_comment_access(&self, comment_id: &str, owner_id: &str) -> Result<()> {
        let row = self.comments.get(comment_id).ok_or_else(comment_not_found)?;
        if row.owner != owner_id {
            return Err(ForumError::authorization(
                "Anda tidak berhak melakukan aksi tersebut pada komentar ini",
            ));
        }
        Ok(())
    }

    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<CommentRecord>> {
        let mut rows: Vec<(u64, CommentRecord)> = self
            .comments
            .iter()
            .filter(|entry| entry.thread_id == thread_id)
            .map(|entry| {
                let row = entry.value();
                (
                    row.seq,
                    CommentRecord {
                        id: entry.key().clone(),
                        thread_id: row.thread_id.clone(),
                        owner: row.owner.clone(),
                        username: self.username_of(&row.owner),
                        date: row.date.clone(),
                        content: row.content.clone(),
                        deletion: row.deletion,
                    },
                )
            })
            .collect();

        rows.sort_by(|(a_seq, a), (b_seq, b)| a.date.cmp(&b.date).then(a_seq.cmp(b_seq)));
        Ok(rows.into_iter().map(|(_, record)| record).collect())
    }

    async fn delete_comment_by_id(&self, comment_id: &str) -> Result<()> {
        let mut row = self.comments.get_mut(comment_id).ok_or_else(comment_not_found)?;
        row.deletion = DeletionState::Deleted;
        Ok(())
    }
}

#[async_trait]
impl ReplyRepository for MemoryForumStore {
    async fn add_reply(&self, new_reply: &NewReply) -> Result<AddedReply> {
        let id = self.next_id("reply");
        self.replies.insert(
            id.clone(),
            ReplyRow {
                seq: self.next_seq(),
                comment_id: new_reply.comment_id.clone(),
                owner: new_reply.owner.clone(),
                content: new_reply.content.clone(),
                date: self.clock.now(),
                deletion: DeletionState::Active,
            },
        );
        tracing::debug!(reply_id = %id, "reply row inserted");

        Ok(AddedReply { id, content: new_reply.content.clone(), owner: new_reply.owner.clone() })
    }

    async fn get_replies_by_thread_id(&self, thread_id: &str) -> Result<Vec<ReplyRecord>> {
        // Collect the thread's comment ids first; never hold two map guards at once.
        let comment_ids: HashSet<String> = self
            .comments
            .iter()
            .filter(|entry| entry.thread_id == thread_id)
            .map(|entry| entry.key().clone())
            .collect();

        let mut rows: Vec<(u64, ReplyRecord)> = self
            .replies
            .iter()
            .filter(|entry| comment_ids.contains(&entry.comment_id))
            .map(|entry| {
                let row = entry.value();
                (
                    row.seq,
                    ReplyRecord {
                        id: entry.key().clone(),
                        comment_id: row.comment_id.clone(),
                        owner: row.owner.clone(),
                        username: self.username_of(&row.owner),
                        date: row.date.clone(),
                        content: row.content.clone(),
                        deletion: row.deletion,
                    },
                )
            })
            .collect();

        rows.sort_by(|(a_seq, a), (b_seq, b)| a.date.cmp(&b.date).then(a_seq.cmp(b_seq)));
        Ok(rows.into_iter().map(|(_, record)| record).collect())
    }

    async fn check_available_reply(&self, thread_id: &str, comment_id: &str, reply_id: &str) -> Result<()> {
        let reply_ok = match self.replies.get(reply_id) {
            Some(row) => row.comment_id == comment_id && !row.deletion.is_deleted(),
            None => false,
        };
        let comment_ok = reply_ok
            && self
                .comments
                .get(comment_id)
                .map(|row| row.thread_id == thread_id && !row.deletion.is_deleted())
                .unwrap_or(false);

        if comment_ok {
            Ok(())
        } else {
            Err(reply_not_found())
        }
    }

    async fn verify_reply_owner(&self, reply_id: &str, owner_id: &str) -> Result<()> {
        let row = self.replies.get(reply_id).ok_or_else(reply_not_found)?;
        if row.owner != owner_id {
            return Err(ForumError::authorization(
                "Anda tidak berhak melakukan aksi tersebut pada reply ini",
            ));
        }
        Ok(())
    }

    async fn delete_reply_by_id(&self, reply_id: &str) -> Result<()> {
        match self.replies.get_mut(reply_id) {
            Some(mut row) if !row.deletion.is_deleted() => {
                row.deletion = DeletionState::Deleted;
                Ok(())
            }
            _ => Err(ForumError::not_found("reply yang ingin Anda hapus tidak ada")),
        }
    }
}

#[async_trait]
impl LikeRepository for MemoryForumStore {
    async fn check_available_like(&self, like: &NewLike) -> Result<bool> {
        Ok(self.likes.contains_key(&(like.comment_id.clone(), like.owner.clone())))
    }

    /// Inserting an existing pair is a no-op, the in-memory analogue of a
    /// unique index with `ON CONFLICT DO NOTHING`.
    async fn add_like(&self, like: &NewLike) -> Result<()> {
        match self.likes.entry((like.comment_id.clone(), like.owner.clone())) {
            Entry::Occupied(_) => {
                tracing::debug!(comment_id = %like.comment_id, owner = %like.owner, "duplicate like rejected");
            }
            Entry::Vacant(slot) => {
                slot.insert(Like {
                    id: self.next_id("like"),
                    comment_id: like.comment_id.clone(),
                    owner: like.owner.clone(),
                });
            }
        }
        Ok(())
    }

    async fn delete_like_by_comment_id_and_owner(&self, like: &NewLike) -> Result<()> {
        self.likes.remove(&(like.comment_id.clone(), like.owner.clone()));
        Ok(())
    }

    async fn get_like_count_by_comment_id(&self, comment_id: &str) -> Result<u64> {
        Ok(self
            .likes
            .iter()
            .filter(|entry| entry.comment_id == comment_id)
            .count() as u64)
    }
}
