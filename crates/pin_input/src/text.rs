//! Character-level helpers for slot values.
//!
//! These functions are pure and operate on `char`s (Unicode scalar values),
//! never on byte offsets, so a slot always holds a whole character.

/// Parse a slot value: empty string is an empty slot, a single character is
/// that character, anything longer is rejected.
///
/// # Examples
///
/// ```
/// use pin_input::slot_from_str;
///
/// assert_eq!(slot_from_str(""), Some(None));
/// assert_eq!(slot_from_str("€"), Some(Some('€')));
/// assert_eq!(slot_from_str("12"), None);
/// ```
pub fn slot_from_str(s: &str) -> Option<Option<char>> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Some(None),
        (Some(c), None) => Some(Some(c)),
        _ => None,
    }
}

/// Render a slot as the string the rendering layer shows.
pub fn slot_to_string(slot: Option<char>) -> String {
    slot.map(String::from).unwrap_or_default()
}

/// Work out which character the user just typed into a slot.
///
/// The backing element keeps its previous character until overwritten, so a
/// change event may report two characters: the old one followed by the new
/// one (caret after the old char) or the new one followed by the old one
/// (caret before it). The old character is located without cursor
/// introspection:
///
/// - `existing` equals the first char: the second char is new. A single
///   unchanged char resolves to itself.
/// - `existing` equals the second char: the first char is new.
/// - otherwise the incoming value replaces the slot; if it still holds more
///   than one char the last one wins.
///
/// An empty `incoming` clears the slot.
///
/// # Examples
///
/// ```
/// use pin_input::resolve_next_char;
///
/// assert_eq!(resolve_next_char(None, "2"), Some('2'));
/// assert_eq!(resolve_next_char(Some('2'), "29"), Some('9'));
/// assert_eq!(resolve_next_char(Some('2'), "92"), Some('9'));
/// assert_eq!(resolve_next_char(Some('2'), "22"), Some('2'));
/// assert_eq!(resolve_next_char(Some('2'), ""), None);
/// ```
pub fn resolve_next_char(existing: Option<char>, incoming: &str) -> Option<char> {
    let mut chars = incoming.chars();
    let first = chars.next()?;
    let second = chars.next();

    match existing {
        Some(old) if old == first => Some(second.unwrap_or(first)),
        Some(old) if second == Some(old) => Some(first),
        _ => incoming.chars().next_back(),
    }
}

/// Characters a paste distributes across slots: the trimmed text, cut to at
/// most `num_of_fields` characters.
///
/// # Examples
///
/// ```
/// use pin_input::paste_chars;
///
/// assert_eq!(paste_chars(" 1234extra", 4), vec!['1', '2', '3', '4']);
/// assert_eq!(paste_chars("12", 4), vec!['1', '2']);
/// assert!(paste_chars("   ", 4).is_empty());
/// ```
pub fn paste_chars(text: &str, num_of_fields: usize) -> Vec<char> {
    text.trim().chars().take(num_of_fields).collect()
}
