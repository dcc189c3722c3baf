//! Personal name normalization.

use super::error::ContactError;

/// Minimum accepted name length, in characters.
pub const NAME_MIN_CHARS: usize = 3;
/// Maximum accepted name length, in characters.
pub const NAME_MAX_CHARS: usize = 100;

/// Trim, collapse whitespace, and title-case a personal name.
///
/// Every whitespace-separated word gets an uppercase first letter and
/// lowercase remainder. The normalized name must have between
/// [`NAME_MIN_CHARS`] and [`NAME_MAX_CHARS`] characters.
pub fn normalize_name(input: &str) -> Result<String, ContactError> {
    let normalized = input
        .split_whitespace()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ");

    let len = normalized.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
        return Err(ContactError::NameLength {
            min: NAME_MIN_CHARS,
            max: NAME_MAX_CHARS,
            actual: len,
        });
    }
    Ok(normalized)
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
