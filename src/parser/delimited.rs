//! Separator-character splitting for underscore and hyphen formats.

/// Split on `separator`, collapsing runs and dropping empty edge parts.
pub(super) fn split(raw: &str, separator: char) -> Vec<String> {
    raw.split(separator)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
