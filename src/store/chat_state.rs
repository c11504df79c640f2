use teloxide::types::{ChatId, MessageId};

use super::ListStore;

// The bot re-sends the list after additions and edits it in place after
// removals; both need the id of the message currently showing the list.
impl ListStore {
    pub async fn get_last_list_message_id(&self, chat_id: ChatId) -> Option<MessageId> {
        let chats = self.chats.lock().await;
        chats.get(&chat_id.0).and_then(|data| data.last_list_message_id)
    }

    pub async fn update_last_list_message_id(&self, chat_id: ChatId, message_id: MessageId) {
        tracing::debug!(
            chat_id = chat_id.0,
            message_id = message_id.0,
            "Updating last list message id",
        );
        let mut chats = self.chats.lock().await;
        chats.entry(chat_id.0).or_default().last_list_message_id = Some(message_id);
    }

    pub async fn clear_last_list_message_id(&self, chat_id: ChatId) {
        tracing::debug!(chat_id = chat_id.0, "Clearing last list message id");
        let mut chats = self.chats.lock().await;
        if let Some(data) = chats.get_mut(&chat_id.0) {
            data.last_list_message_id = None;
        }
    }
}
