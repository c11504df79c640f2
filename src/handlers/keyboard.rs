use teloxide::types::InlineKeyboardButton;

pub fn build_entry_rows<T, F, G>(
    items: &[T],
    label: F,
    callback: G,
) -> Vec<Vec<InlineKeyboardButton>>
where
    F: Fn(usize, &T) -> String,
    G: Fn(usize, &T) -> String,
{
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            vec![InlineKeyboardButton::callback(
                label(index, item),
                callback(index, item),
            )]
        })
        .collect()
}
