//! Name and abbreviation rules.
//!
//! A name word is one uppercase letter followed by one or more lowercase
//! letters. Letter casing is Unicode-aware and lengths count characters.

/// Tests a name of an art (a name word longer than two characters).
pub fn valid_name(name: &str) -> bool {
    is_name_word(name) && name.chars().count() > 2
}

/// Tests an abbreviation of an art (a name word of exactly two characters).
pub fn valid_abbreviation(abbreviation: &str) -> bool {
    is_name_word(abbreviation) && abbreviation.chars().count() == 2
}

/// Abbreviation taken from the first two characters of a name.
pub fn derive_abbreviation(name: &str) -> String {
    name.chars().take(2).collect()
}

fn is_name_word(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => {}
        _ => return false,
    }
    let mut tail = 0usize;
    for c in chars {
        if !c.is_lowercase() {
            return false;
        }
        tail += 1;
    }
    tail > 0
}
