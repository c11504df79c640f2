use anyhow::Result;
use teloxide::{
    prelude::*,
    types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup, Message, MessageId, ParseMode},
    utils::html,
};

use super::list::{format_entry_list, format_offer_message};
use crate::messages::{LIST_EMPTY, LIST_EMPTY_ADD_ENTRY, LIST_NOW_EMPTY, LIST_NUKED, PREVIEW_HEADER};
use crate::store::{Entry, ListStore};
use crate::utils::try_delete_message;

pub struct ListService<'a> {
    store: &'a ListStore,
}

impl<'a> ListService<'a> {
    pub fn new(store: &'a ListStore) -> Self {
        Self { store }
    }

    fn render(entries: &[Entry]) -> (String, InlineKeyboardMarkup) {
        let (list_text, keyboard) = format_entry_list(entries);
        let offer = format_offer_message(entries);
        // The preview sits in a <code> block so a tap copies it verbatim.
        let text = format!(
            "{}\n{}\n<code>{}</code>",
            html::escape(list_text.trim_end()),
            PREVIEW_HEADER,
            html::escape(&offer),
        );
        (text, keyboard)
    }

    /// Post a fresh list message, replacing the previous one.
    pub async fn send_list(&self, bot: Bot, chat_id: ChatId) -> Result<()> {
        if let Some(msg_id) = self.store.get_last_list_message_id(chat_id).await {
            try_delete_message(&bot, chat_id, msg_id).await;
        }

        let entries = self.store.snapshot(chat_id).await;
        if entries.is_empty() {
            let sent = bot.send_message(chat_id, LIST_EMPTY_ADD_ENTRY).await?;
            self.store.update_last_list_message_id(chat_id, sent.id).await;
            return Ok(());
        }

        let (text, keyboard) = Self::render(&entries);
        let sent = bot
            .send_message(chat_id, text)
            .parse_mode(ParseMode::Html)
            .reply_markup(keyboard)
            .await?;
        self.store.update_last_list_message_id(chat_id, sent.id).await;
        Ok(())
    }

    /// Edit the displayed list in place after a removal.
    pub async fn update_message(
        &self,
        bot: &Bot,
        chat_id: ChatId,
        message_id: MessageId,
    ) -> Result<()> {
        let entries = self.store.snapshot(chat_id).await;
        if entries.is_empty() {
            let _ = bot
                .edit_message_text(chat_id, message_id, LIST_NOW_EMPTY)
                .reply_markup(InlineKeyboardMarkup::new(
                    Vec::<Vec<InlineKeyboardButton>>::new(),
                ))
                .await;
            return Ok(());
        }

        let (text, keyboard) = Self::render(&entries);

        // Atomic text + keyboard edit so the buttons never flicker.
        let _ = bot
            .edit_message_text(chat_id, message_id, text)
            .parse_mode(ParseMode::Html)
            .reply_markup(keyboard)
            .await;
        Ok(())
    }

    /// Send the sell message alone, as plain text, so the copied message
    /// matches the canonical string byte for byte. Nothing is sent while the
    /// offer is empty.
    pub async fn share_offer(&self, bot: Bot, chat_id: ChatId) -> Result<()> {
        let entries = self.store.snapshot(chat_id).await;
        if entries.is_empty() {
            bot.send_message(chat_id, LIST_EMPTY).await?;
            return Ok(());
        }
        bot.send_message(chat_id, format_offer_message(&entries))
            .await?;
        Ok(())
    }

    /// Clear the offer and the displayed list. The confirmation cleans
    /// itself up after `delete_after_timeout` seconds.
    pub async fn nuke(&self, bot: Bot, msg: Message, delete_after_timeout: u64) -> Result<()> {
        try_delete_message(&bot, msg.chat.id, msg.id).await;
        if let Some(list_message_id) = self.store.get_last_list_message_id(msg.chat.id).await {
            try_delete_message(&bot, msg.chat.id, list_message_id).await;
        }
        self.store.clear(msg.chat.id).await;
        self.store.clear_last_list_message_id(msg.chat.id).await;

        let confirmation = bot.send_message(msg.chat.id, LIST_NUKED).await?;
        drop(crate::utils::delete_after(
            bot.clone(),
            confirmation.chat.id,
            confirmation.id,
            delete_after_timeout,
        ));
        Ok(())
    }
}
