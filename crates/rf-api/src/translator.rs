//! # Domain Error Translator
//!
//! Fixed table from validation code to the message shown to users.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static MESSAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Thread
        ("NEW_THREAD.NOT_CONTAIN_NEEDED_PROPERTY", "tidak dapat membuat thread baru karena properti yang dibutuhkan tidak ada"),
        ("NEW_THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION", "tidak dapat membuat thread baru karena tipe data tidak sesuai"),
        ("ADDED_THREAD.NOT_CONTAIN_NEEDED_PROPERTY", "tidak dapat menambahkan thread karena properti yang dibutuhkan tidak ada"),
        ("ADDED_THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION", "tidak dapat menambahkan thread karena tipe data tidak sesuai"),
        ("DETAILED_THREAD.NOT_CONTAIN_NEEDED_PROPERTY", "tidak dapat mendapatkan detail thread karena properti yang dibutuhkan tidak ada"),
        ("DETAILED_THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION", "tidak dapat mendapatkan detail thread karena tipe data tidak sesuai"),
        ("GET_THREAD_USE_CASE.NOT_CONTAIN_NEEDED_PROPERTY", "harus mengirimkan id thread"),
        ("GET_THREAD_USE_CASE.NOT_MEET_DATA_TYPE_SPECIFICATION", "id thread harus string"),
        // Comment
        ("NEW_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY", "tidak dapat membuat comment baru karena properti yang dibutuhkan tidak ada"),
        ("NEW_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION", "tidak dapat membuat comment baru karena tipe data tidak sesuai"),
        ("ADDED_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY", "tidak dapat menambahkan comment karena properti yang dibutuhkan tidak ada"),
        ("ADDED_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION", "tidak dapat menambahkan comment karena tipe data tidak sesuai"),
        ("DETAILED_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY", "tidak dapat mendapatkan detail comment karena properti yang dibutuhkan tidak ada"),
        ("DETAILED_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION", "tidak dapat mendapatkan detail comment karena tipe data tidak sesuai"),
        ("DELETE_COMMENT_USE_CASE.NOT_CONTAIN_NEEDED_PROPERTY", "tidak dapat menghapus comment karena properti yang dibutuhkan tidak ada"),
        ("DELETE_COMMENT_USE_CASE.NOT_MEET_DATA_TYPE_SPECIFICATION", "tidak dapat menghapus comment karena tipe data tidak sesuai"),
        // Reply
        ("NEW_REPLY.NOT_CONTAIN_NEEDED_PROPERTY", "tidak dapat membuat reply baru karena properti yang dibutuhkan tidak ada"),
        ("NEW_REPLY.NOT_MEET_DATA_TYPE_SPECIFICATION", "tidak dapat membuat reply baru karena tipe data tidak sesuai"),
        ("ADDED_REPLY.NOT_CONTAIN_NEEDED_PROPERTY", "tidak dapat menambahkan reply karena properti yang dibutuhkan tidak ada"),
        ("ADDED_REPLY.NOT_MEET_DATA_TYPE_SPECIFICATION", "tidak dapat menambahkan reply karena tipe data tidak sesuai"),
        ("DETAILED_REPLY.NOT_CONTAIN_NEEDED_PROPERTY", "tidak dapat mendapatkan detail reply karena properti yang dibutuhkan tidak ada"),
        ("DETAILED_REPLY.NOT_MEET_DATA_TYPE_SPECIFICATION", "tidak dapat mendapatkan detail reply karena tipe data tidak sesuai"),
        ("DELETE_REPLY_USE_CASE.NOT_CONTAIN_NEEDED_PROPERTY", "tidak dapat menghapus reply karena properti yang dibutuhkan tidak ada"),
        ("DELETE_REPLY_USE_CASE.NOT_MEET_DATA_TYPE_SPECIFICATION", "tidak dapat menghapus reply karena tipe data tidak sesuai"),
        // Like
        ("NEW_LIKE.NOT_CONTAIN_NEEDED_PROPERTY", "tidak dapat menyukai comment karena properti yang dibutuhkan tidak ada"),
        ("NEW_LIKE.NOT_MEET_DATA_TYPE_SPECIFICATION", "tidak dapat menyukai comment karena tipe data tidak sesuai"),
        ("TOGGLE_LIKE_USE_CASE.NOT_CONTAIN_NEEDED_PROPERTY", "tidak dapat menyukai comment karena properti yang dibutuhkan tidak ada"),
        ("TOGGLE_LIKE_USE_CASE.NOT_MEET_DATA_TYPE_SPECIFICATION", "tidak dapat menyukai comment karena tipe data tidak sesuai"),
    ])
});

/// Returns the message for `code`, or the code itself when it has no entry.
pub fn translate(code: &str) -> &str {
    MESSAGES.get(code).copied().unwrap_or(code)
}
