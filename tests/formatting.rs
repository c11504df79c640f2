use offerbot::{format_entry_list, format_offer_message, Entry};

fn sample_entries() -> Vec<Entry> {
    vec![
        Entry {
            name: "Volt Prime".to_string(),
            price: "150".to_string(),
        },
        Entry {
            name: "Ember Prime".to_string(),
            price: String::new(),
        },
    ]
}

#[test]
fn test_format_offer_message() {
    assert_eq!(
        format_offer_message(&sample_entries()),
        "VK [Volt Prime] 150p [Ember Prime]"
    );
}

#[test]
fn empty_list_formats_to_empty_string() {
    assert_eq!(format_offer_message(&[]), "");
}

#[test]
fn format_is_idempotent_for_stable_input() {
    let entries = sample_entries();
    assert_eq!(format_offer_message(&entries), format_offer_message(&entries));
}

#[test]
fn single_unpriced_entry_has_no_trailing_space() {
    let entries = vec![Entry {
        name: "A".to_string(),
        price: String::new(),
    }];
    assert_eq!(format_offer_message(&entries), "VK [A]");
}

#[test]
fn test_format_entry_list() {
    let (text, keyboard) = format_entry_list(&sample_entries());

    assert_eq!(text, "• Volt Prime 150p\n• Ember Prime\n");

    let labels: Vec<&str> = keyboard
        .inline_keyboard
        .iter()
        .map(|row| row[0].text.as_str())
        .collect();
    assert_eq!(labels, vec!["✖ Volt Prime 150p", "✖ Ember Prime"]);
}

#[test]
fn entry_list_callbacks_carry_positions() {
    use teloxide::types::InlineKeyboardButtonKind;

    let (_, keyboard) = format_entry_list(&sample_entries());
    let callbacks: Vec<String> = keyboard
        .inline_keyboard
        .iter()
        .map(|row| match &row[0].kind {
            InlineKeyboardButtonKind::CallbackData(data) => data.clone(),
            other => panic!("expected callback data, got {other:?}"),
        })
        .collect();
    assert_eq!(callbacks, vec!["remove_0".to_string(), "remove_1".to_string()]);
}
