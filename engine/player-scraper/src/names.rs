//! Player name normalization and season-table lookup keys

use deunicode::deunicode;

/// Transliterate a display name to ASCII and collapse its whitespace
pub fn ascii_name(raw: &str) -> String {
    deunicode(raw).split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First and last name used for lookups
///
/// Names of three or more words keep only the first two, so suffixes the stats
/// source leaves out ("Jr.", "III") do not break the match. Single-word names
/// have no last name and yield `None`.
pub fn split_name(name: &str) -> Option<(&str, &str)> {
    let mut words = name.split_whitespace();
    let first = words.next()?;
    let last = words.next()?;
    Some((first, last))
}

/// Season-table key in `"Last,First"` form
pub fn lookup_key(first: &str, last: &str) -> String {
    format!("{last},{first}")
}

/// Dotted form of a two-letter initials first name ("JJ" -> "J.J.")
///
/// Returns `None` unless the first name is exactly two uppercase letters.
pub fn dotted_initials(first: &str) -> Option<String> {
    let letters: Vec<char> = first.chars().collect();
    if letters.len() == 2 && letters.iter().all(|c| c.is_uppercase()) {
        Some(format!("{}.{}.", letters[0], letters[1]))
    } else {
        None
    }
}
