pub mod delete;
pub mod info;
pub mod inline;
pub mod keyboard;
pub mod list;
pub mod list_service;
pub mod text;

pub use delete::callback_handler;
pub use info::show_system_info;
pub use inline::handle_inline_query;
pub use list::{format_entry_list, format_offer_message};
pub use list_service::ListService;
pub use text::{add_entries_from_text, help};
