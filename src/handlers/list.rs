use teloxide::types::InlineKeyboardMarkup;

use crate::store::Entry;

use super::keyboard::build_entry_rows;

struct OfferFormatter;

impl OfferFormatter {
    /// The canonical outbound sell message. Recomputed in full from the
    /// current entries on every call; an empty list yields an empty string.
    fn format_offer_message(entries: &[Entry]) -> String {
        if entries.is_empty() {
            return String::new();
        }

        let fragments: Vec<String> = entries.iter().map(Self::format_fragment).collect();
        format!("VK {}", fragments.join(" "))
    }

    fn format_fragment(entry: &Entry) -> String {
        if entry.price.is_empty() {
            format!("[{}]", entry.name)
        } else {
            format!("[{}] {}p", entry.name, entry.price)
        }
    }

    fn format_entry_list(entries: &[Entry]) -> (String, InlineKeyboardMarkup) {
        let mut text = String::new();
        for entry in entries {
            text.push_str(&format!("• {}\n", Self::entry_label(entry)));
        }

        let rows = build_entry_rows(
            entries,
            |_, entry| format!("✖ {}", Self::entry_label(entry)),
            |index, _| format!("remove_{index}"),
        );

        (text, InlineKeyboardMarkup::new(rows))
    }

    fn entry_label(entry: &Entry) -> String {
        if entry.price.is_empty() {
            entry.name.clone()
        } else {
            format!("{} {}p", entry.name, entry.price)
        }
    }
}

/// Render the display list: one line and one remove-button row per entry,
/// callback data carrying the entry's current position.
pub fn format_entry_list(entries: &[Entry]) -> (String, InlineKeyboardMarkup) {
    OfferFormatter::format_entry_list(entries)
}

pub fn format_offer_message(entries: &[Entry]) -> String {
    OfferFormatter::format_offer_message(entries)
}
