//! Camel-case splitting. Shared by the plain-ASCII and extended-Latin
//! entry points in the parent module; only the character classifiers differ.

/// Split using ASCII A-Z as the uppercase class.
pub(super) fn split_ascii(raw: &str) -> Vec<String> {
    split(raw, |c| c.is_ascii_uppercase(), |c| c.is_ascii_lowercase())
}

/// Split classifying extended/accented Latin letters by their Unicode case,
/// so `überÜberSetzung` breaks at `Ü` just like `overOverride` breaks at `O`.
pub(super) fn split_extended(raw: &str) -> Vec<String> {
    split(raw, char::is_uppercase, char::is_lowercase)
}

/// True when splitting would actually produce more than one word, i.e. a
/// case transition exists somewhere past the first character.
pub(super) fn has_case_transition(raw: &str) -> bool {
    split_ascii(raw).len() > 1
}

/// Each uppercase letter begins a new word, except inside an uppercase run
/// (acronym): there only the last letter of the run starts the next word,
/// and only when lowercase follows. Digits never begin a word on their own;
/// they ride along with whatever word they appear in.
fn split<U, L>(raw: &str, is_upper: U, is_lower: L) -> Vec<String>
where
    U: Fn(char) -> bool,
    L: Fn(char) -> bool,
{
    let chars: Vec<char> = raw.chars().collect();
    let mut parts = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        let after_run = i > 0
            && is_upper(chars[i - 1])
            && chars.get(i + 1).is_some_and(|&next| is_lower(next));
        let after_word = i > 0 && !is_upper(chars[i - 1]);

        if is_upper(ch) && (after_word || after_run) && !current.is_empty() {
            parts.push(current.clone());
            current.clear();
        }
        current.push(ch);
    }

    if !current.is_empty() {
        parts.push(current);
    }

    parts
}
