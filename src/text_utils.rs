use tracing::trace;

use crate::store::Entry;

/// Parse a single sell-offer line from a user message.
///
/// The last whitespace-separated token becomes the asking price when it is a
/// strictly positive base-10 integer; everything before it is the item name.
/// The price keeps the exact text the user typed. A line without such a
/// trailing token becomes an entry with an empty price, and a line that is
/// empty after trimming yields `None`.
pub fn parse_offer_line(raw: &str) -> Option<Entry> {
    trace!(?raw, "Parsing offer line");
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        trace!("Line empty after trimming");
        return None;
    }

    let mut words: Vec<&str> = trimmed.split(' ').collect();
    if let Some(last) = words.last().copied() {
        if is_price_token(last) {
            words.pop();
            let name = words.join(" ").trim().to_string();
            // A bare price has no item to attach to; keep the whole line
            // as the name instead.
            if !name.is_empty() {
                let entry = Entry {
                    name,
                    price: last.to_string(),
                };
                trace!(name = %entry.name, price = %entry.price, "Parsed entry with price");
                return Some(entry);
            }
        }
    }

    let entry = Entry {
        name: trimmed.to_string(),
        price: String::new(),
    };
    trace!(name = %entry.name, "Parsed entry without price");
    Some(entry)
}

fn is_price_token(token: &str) -> bool {
    matches!(token.parse::<i64>(), Ok(n) if n > 0)
}
