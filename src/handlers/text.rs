use anyhow::Result;
use teloxide::prelude::*;

use crate::messages::HELP_TEXT;
use crate::store::ListStore;
use crate::text_utils::parse_offer_line;

use super::list_service::ListService;

pub async fn help(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, HELP_TEXT)
        .parse_mode(teloxide::types::ParseMode::Html)
        .await?;
    Ok(())
}

/// Treat every line of a plain message as one offer entry. A message with no
/// parsable line leaves the list untouched and stays silent.
pub async fn add_entries_from_text(bot: Bot, msg: Message, store: ListStore) -> Result<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let entries: Vec<_> = text.lines().filter_map(parse_offer_line).collect();
    if entries.is_empty() {
        tracing::trace!(chat_id = msg.chat.id.0, "No parsable lines in message");
        return Ok(());
    }

    let added = entries.len();
    for entry in entries {
        store.append(msg.chat.id, entry).await;
    }
    tracing::info!(chat_id = msg.chat.id.0, added, "Added entries via text message");

    ListService::new(&store).send_list(bot, msg.chat.id).await?;
    Ok(())
}
