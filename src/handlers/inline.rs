use anyhow::Result;
use teloxide::{
    prelude::*,
    types::{
        InlineQuery, InlineQueryResult, InlineQueryResultArticle, InputMessageContent,
        InputMessageContentText,
    },
};

use crate::catalog::Catalog;

/// Telegram caps inline answers at 50 results; a screenful is plenty here.
pub const MAX_SUGGESTIONS: usize = 25;

/// Offer catalog names matching the typed fragment. Picking one sends the
/// bare name into the chat, where it flows through the normal line parser.
/// While the catalog is still loading, or after its load failed, the answer
/// is simply empty.
pub async fn handle_inline_query(bot: Bot, q: InlineQuery, catalog: Catalog) -> Result<()> {
    let names = catalog.suggestions(&q.query, MAX_SUGGESTIONS).await;
    tracing::trace!(query = %q.query, count = names.len(), "Answering inline query");

    let results: Vec<InlineQueryResult> = names
        .into_iter()
        .enumerate()
        .map(|(index, name)| {
            InlineQueryResult::Article(InlineQueryResultArticle::new(
                index.to_string(),
                name.clone(),
                InputMessageContent::Text(InputMessageContentText::new(name)),
            ))
        })
        .collect();

    bot.answer_inline_query(q.id, results).await?;
    Ok(())
}
