//! Shared text sent by the bot.
//!
//! Keep all user-facing strings in this module so they stay in one place and
//! are easy to update or translate.

pub const HELP_TEXT: &str =
    "Send me the items you want to sell, one per line, with an optional price \
             at the end - for example <code>Volt Prime Set 150</code>.\n\
             I collect them into a ready-to-paste sell message.\n\
             Tap the ✖ button next to an item to remove it.\n\n\
             <b>Commands:</b>\n\
             /list - Show the current offer and message preview.\n\
             /share - Send the sell message as plain text for copying.\n\
             /nuke - Clear the current offer.\n\
             /info - Show system information.\n\n\
             Type my name followed by part of an item name in any chat to \
             pick from known item names.";

pub const LIST_EMPTY_ADD_ENTRY: &str =
    "Your offer is empty! Send an item line like \"Volt Prime Set 150\" to add one.";
pub const LIST_EMPTY: &str = "Your offer is empty!";
pub const LIST_NOW_EMPTY: &str = "Offer is now empty!";
pub const LIST_NUKED: &str = "The offer has been cleared.";

pub const PREVIEW_HEADER: &str = "Message preview:";
