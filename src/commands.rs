use anyhow::Result;
use teloxide::{prelude::*, utils::command::BotCommands};

use crate::handlers::{help, show_system_info, ListService};
use crate::store::ListStore;

#[derive(BotCommands, Clone)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub enum Command {
    #[command(description = "display this text.")]
    Start,
    #[command(description = "display this text.")]
    Help,
    #[command(description = "show the current offer and message preview.")]
    List,
    #[command(description = "send the sell message as plain text for copying.")]
    Share,
    #[command(description = "clear the current offer.")]
    Nuke,
    #[command(description = "show system information.")]
    Info,
}

impl Command {
    pub async fn dispatch(
        self,
        bot: Bot,
        msg: Message,
        store: ListStore,
        delete_after_timeout: u64,
    ) -> Result<()> {
        let service = ListService::new(&store);
        match self {
            Command::Start | Command::Help => help(bot, msg).await?,
            Command::List => service.send_list(bot, msg.chat.id).await?,
            Command::Share => service.share_offer(bot, msg.chat.id).await?,
            Command::Nuke => service.nuke(bot, msg, delete_after_timeout).await?,
            Command::Info => show_system_info(bot, msg).await?,
        }
        Ok(())
    }
}
