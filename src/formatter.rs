//! Joins word-part sequences back into a single identifier string.
//!
//! Inverse of the parser up to case normalization: each word's
//! capitalization is reset to the target format's rule, but only the first
//! character is touched for the camel variants, so acronym interiors
//! survive (`["my", "HTTP", "Server"]` renders to `myHTTPServer`).
//!
//! Case normalization means the parts-level round trip is exact only when
//! the parts already obey the target's rule: lowercase parts come back with
//! an added capital under the camel variants and fully uppercased under
//! SCREAMING_SNAKE, and only the all-lowercase delimited formats
//! (underscore, hyphen) reproduce them verbatim.

use crate::format::{CaseFormat, WordCaps};

/// Join `parts` under `target`'s separator and capitalization rule.
pub fn format<S: AsRef<str>>(parts: &[S], target: CaseFormat) -> String {
    let mut out = String::new();

    for (i, part) in parts.iter().enumerate() {
        let word = part.as_ref();

        if i > 0 {
            if let Some(separator) = target.separator() {
                out.push(separator);
            }
        }

        match target.word_caps() {
            WordCaps::Lower => out.push_str(&word.to_lowercase()),
            WordCaps::Upper => out.push_str(&word.to_uppercase()),
            WordCaps::Capitalize => {
                if i == 0 && target == CaseFormat::Camel {
                    out.push_str(&lower_first(word));
                } else {
                    out.push_str(&upper_first(word));
                }
            }
        }
    }

    out
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}
