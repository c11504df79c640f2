use anyhow::Result;
use teloxide::prelude::*;

pub mod catalog;
pub mod commands;
pub mod config;
pub mod handlers;
pub mod messages;
pub mod store;
pub mod system_info;
pub mod text_utils;
pub mod utils;

pub use commands::Command;
pub use config::Config;
pub use handlers::{
    add_entries_from_text, callback_handler, format_entry_list, format_offer_message,
    handle_inline_query, help, ListService,
};
pub use store::{Entry, ListStore};
pub use text_utils::parse_offer_line;
pub use utils::{delete_after, DEFAULT_DELETE_AFTER_TIMEOUT};

// ──────────────────────────────────────────────────────────────
// Main application setup
// ──────────────────────────────────────────────────────────────

pub async fn run() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting offer bot...");

    let config = Config::from_env();
    let bot = Bot::from_env();
    let store = ListStore::new();
    let catalog = catalog::Catalog::new();

    // The catalog only feeds suggestions; the bot never waits for it, and a
    // failed load leaves everything but suggestions working.
    match config.catalog {
        Some(catalog_config) => {
            tokio::spawn(catalog::load(catalog.clone(), catalog_config));
        }
        None => {
            tracing::warn!("CATALOG_URL is not set; name suggestions are disabled");
            catalog.set_failed().await;
        }
    }

    let handler = dptree::entry()
        .branch(Update::filter_callback_query().endpoint(callback_handler))
        .branch(Update::filter_inline_query().endpoint(handle_inline_query))
        .branch(
            Update::filter_message()
                .branch(dptree::entry().filter_command::<Command>().endpoint(
                    |bot: Bot, msg: Message, cmd: Command, store: ListStore| async move {
                        cmd.dispatch(bot, msg, store, DEFAULT_DELETE_AFTER_TIMEOUT)
                            .await
                    },
                ))
                .branch(dptree::endpoint(add_entries_from_text)),
        );

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![store, catalog])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
