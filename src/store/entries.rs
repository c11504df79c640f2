use teloxide::types::ChatId;

use super::ListStore;

/// One line item of the outgoing offer.
///
/// An empty `price` means the user did not name one, not that the item is
/// free; the formatter drops the price fragment entirely in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub price: String,
}

impl ListStore {
    /// Append an entry to the end of the chat's list. Duplicate names are
    /// allowed; the list is whatever the user typed, in the order they
    /// typed it.
    pub async fn append(&self, chat_id: ChatId, entry: Entry) {
        tracing::trace!(chat_id = chat_id.0, name = %entry.name, "Appending entry");
        let mut chats = self.chats.lock().await;
        chats.entry(chat_id.0).or_default().entries.push(entry);
    }

    /// Remove the entry at the given position, keeping the relative order of
    /// the rest. Indices come from the currently displayed list; anything
    /// out of range is stale and ignored.
    pub async fn remove_at(&self, chat_id: ChatId, index: usize) -> bool {
        let mut chats = self.chats.lock().await;
        let Some(data) = chats.get_mut(&chat_id.0) else {
            tracing::debug!(chat_id = chat_id.0, index, "Remove for unknown chat ignored");
            return false;
        };
        if index >= data.entries.len() {
            tracing::debug!(
                chat_id = chat_id.0,
                index,
                len = data.entries.len(),
                "Out-of-range remove ignored",
            );
            return false;
        }
        let removed = data.entries.remove(index);
        tracing::trace!(chat_id = chat_id.0, index, name = %removed.name, "Removed entry");
        true
    }

    /// Drop every entry for the chat.
    pub async fn clear(&self, chat_id: ChatId) {
        tracing::debug!(chat_id = chat_id.0, "Clearing entries");
        let mut chats = self.chats.lock().await;
        if let Some(data) = chats.get_mut(&chat_id.0) {
            data.entries.clear();
        }
    }

    /// Current ordered entries as an owned copy. Callers may mutate the
    /// returned vector freely without touching the store.
    pub async fn snapshot(&self, chat_id: ChatId) -> Vec<Entry> {
        let chats = self.chats.lock().await;
        chats
            .get(&chat_id.0)
            .map(|data| data.entries.clone())
            .unwrap_or_default()
    }
}
