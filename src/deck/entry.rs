use crate::deck::types::DeckCard;

/// Parses one deck line such as `1 Sol Ring` or `29 Mountain`
///
/// The line is split on its first space. A prefix made only of ASCII digits
/// becomes the quantity and the rest becomes the name; any other line is
/// taken whole as the name with a quantity of 1. Never fails.
///
/// # Example
///
/// ```
/// use commander_harvest::deck::parse_deck_entry;
///
/// let card = parse_deck_entry("29 Mountain");
/// assert_eq!(card.name, "Mountain");
/// assert_eq!(card.quantity, 29);
///
/// let card = parse_deck_entry("Sol Ring");
/// assert_eq!(card.quantity, 1);
/// ```
pub fn parse_deck_entry(entry: &str) -> DeckCard {
    if let Some((prefix, rest)) = entry.split_once(' ') {
        if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) {
            // Overflowing counts fall through to the whole-line case
            if let Ok(quantity) = prefix.parse::<u32>() {
                return DeckCard::new(rest, quantity);
            }
        }
    }
    DeckCard::new(entry, 1)
}
