use anyhow::Result;
use teloxide::prelude::*;

use crate::store::ListStore;

use super::list_service::ListService;

/// Handle taps on the per-entry remove buttons.
///
/// Callback data carries the entry's position at render time. The list
/// message is redrawn after every removal, so a live keyboard always carries
/// fresh indices; a stale tap falls out of range and is ignored.
pub async fn callback_handler(bot: Bot, q: CallbackQuery, store: ListStore) -> Result<()> {
    if let (Some(data), Some(msg)) = (q.data, q.message) {
        if let Some(index_str) = data.strip_prefix("remove_") {
            if let Ok(index) = index_str.parse::<usize>() {
                if store.remove_at(msg.chat().id, index).await {
                    ListService::new(&store)
                        .update_message(&bot, msg.chat().id, msg.id())
                        .await?;
                }
            }
        }
    }

    bot.answer_callback_query(q.id).await?;
    Ok(())
}
