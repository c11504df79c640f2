use teloxide::{
    prelude::*,
    types::{ChatId, MessageId},
};

/// Default timeout in seconds for temporary messages.
pub const DEFAULT_DELETE_AFTER_TIMEOUT: u64 = 5;

/// Delete a message after the given delay in seconds.
pub fn delete_after(
    bot: Bot,
    chat_id: ChatId,
    message_id: MessageId,
    secs: u64,
) -> tokio::task::JoinHandle<()> {
    tracing::debug!(
        chat_id = chat_id.0,
        message_id = message_id.0,
        delay_secs = secs,
        "Scheduling message deletion"
    );
    tokio::spawn(async move {
        tokio::time::sleep(std::time::Duration::from_secs(secs)).await;
        if let Err(err) = bot.delete_message(chat_id, message_id).await {
            tracing::warn!(
                error = %err,
                chat_id = chat_id.0,
                message_id = message_id.0,
                "Failed to delete message",
            );
        }
    })
}

/// Attempt to delete a message and log a warning on failure. Used for
/// messages that may already be gone, like a superseded list message.
pub async fn try_delete_message(bot: &Bot, chat_id: ChatId, message_id: MessageId) {
    if let Err(err) = bot.delete_message(chat_id, message_id).await {
        tracing::warn!(
            error = %err,
            chat_id = chat_id.0,
            message_id = message_id.0,
            "Failed to delete message",
        );
    }
}
