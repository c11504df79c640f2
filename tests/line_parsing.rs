use offerbot::{parse_offer_line, Entry};

fn entry(name: &str, price: &str) -> Entry {
    Entry {
        name: name.to_string(),
        price: price.to_string(),
    }
}

#[test]
fn test_parse_offer_line() {
    // Name with trailing price
    assert_eq!(
        parse_offer_line("Volt Prime 150"),
        Some(entry("Volt Prime", "150"))
    );
    // Name only
    assert_eq!(parse_offer_line("Volt Prime"), Some(entry("Volt Prime", "")));
    // Extra whitespace around the line
    assert_eq!(
        parse_offer_line("  Ember Prime 90  "),
        Some(entry("Ember Prime", "90"))
    );
    // Empty and whitespace-only lines
    assert_eq!(parse_offer_line(""), None);
    assert_eq!(parse_offer_line("   "), None);
}

#[test]
fn non_positive_trailing_numbers_are_not_prices() {
    assert_eq!(
        parse_offer_line("Volt Prime 0"),
        Some(entry("Volt Prime 0", ""))
    );
    assert_eq!(
        parse_offer_line("Volt Prime -5"),
        Some(entry("Volt Prime -5", ""))
    );
}

#[test]
fn price_text_is_preserved_verbatim() {
    // Leading zeros and signs survive exactly as typed.
    assert_eq!(
        parse_offer_line("Volt Prime 0150"),
        Some(entry("Volt Prime", "0150"))
    );
    assert_eq!(
        parse_offer_line("Volt Prime +5"),
        Some(entry("Volt Prime", "+5"))
    );
}

#[test]
fn bare_price_token_keeps_whole_line_as_name() {
    assert_eq!(parse_offer_line("150"), Some(entry("150", "")));
    assert_eq!(parse_offer_line("  150  "), Some(entry("150", "")));
}

#[test]
fn suffixed_numbers_fold_into_the_name() {
    assert_eq!(
        parse_offer_line("Volt Prime 150p"),
        Some(entry("Volt Prime 150p", ""))
    );
}
