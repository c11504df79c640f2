// In-memory list state shared across handlers. Nothing survives a restart.

pub mod chat_state;
pub mod entries;

pub use entries::Entry;

use std::collections::HashMap;
use std::sync::Arc;
use teloxide::types::MessageId;
use tokio::sync::Mutex;

#[derive(Default)]
struct ChatData {
    entries: Vec<Entry>,
    last_list_message_id: Option<MessageId>,
}

/// Per-chat offer state behind a single lock.
///
/// Handlers hold cheap clones of this handle; every mutation for a chat
/// serializes on the mutex, so a triggered operation always sees the list it
/// was issued against.
#[derive(Clone, Default)]
pub struct ListStore {
    chats: Arc<Mutex<HashMap<i64, ChatData>>>,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }
}
