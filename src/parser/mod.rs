mod camel;
mod delimited;

use crate::format::CaseFormat;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The format has no split rule (all-caps with no separator carries no
    /// recoverable word boundaries).
    #[error("no parsing rule for the '{0}' format")]
    UnsupportedFormat(CaseFormat),

    /// None of the attempted formats matched the identifier.
    #[error("none of the attempted case formats matched the identifier")]
    NoFormatMatched,
}

/// Wrap the whole string as a single part without parsing. Never fails,
/// even for the empty string (which becomes one empty part).
pub fn load(raw: &str) -> Vec<String> {
    vec![raw.to_string()]
}

/// Split `raw` according to `format`'s rule.
///
/// Pascal shares camel's rule (leading case does not affect splitting) and
/// SCREAMING_SNAKE shares the underscore rule. `Upper` is render-only and
/// yields `ParseError::UnsupportedFormat`.
pub fn parse(raw: &str, format: CaseFormat) -> Result<Vec<String>, ParseError> {
    match format {
        CaseFormat::Camel | CaseFormat::Pascal => Ok(parse_from_camel_case(raw)),
        CaseFormat::Underscore | CaseFormat::ScreamingSnake => Ok(parse_from_underscore(raw)),
        CaseFormat::Hyphen => Ok(parse_from_hyphen(raw)),
        CaseFormat::Upper => Err(ParseError::UnsupportedFormat(format)),
    }
}

/// Split on transitions to uppercase ASCII letters. An uppercase run stays
/// one word: `HTTPServer` becomes `["HTTP", "Server"]`. Digits attach to the
/// word they follow.
pub fn parse_from_camel_case(raw: &str) -> Vec<String> {
    camel::split_ascii(raw)
}

/// Same rule as [`parse_from_camel_case`], but uppercase is classified over
/// extended/accented Latin letters as well as plain A-Z.
pub fn parse_from_camel_case_extended(raw: &str) -> Vec<String> {
    camel::split_extended(raw)
}

/// Split on `_`, collapsing runs and dropping empty leading/trailing parts.
pub fn parse_from_underscore(raw: &str) -> Vec<String> {
    delimited::split(raw, '_')
}

/// Split on `-`, collapsing runs and dropping empty leading/trailing parts.
pub fn parse_from_hyphen(raw: &str) -> Vec<String> {
    delimited::split(raw, '-')
}

/// Try each format in order and split with the first one whose marker is
/// present in `raw`: its separator character for delimited formats, a case
/// transition for camel formats.
///
/// First match wins. The remainder is never re-split by later formats, so
/// `my_identifier-name` under `[Underscore, Hyphen]` splits only on `_`,
/// leaving `identifier-name` intact. Callers rely on this; do not make it
/// recursive.
pub fn parse_from_mixed_case(
    raw: &str,
    formats: &[CaseFormat],
) -> Result<Vec<String>, ParseError> {
    for &format in formats {
        if format_matches(raw, format) {
            return parse(raw, format);
        }
    }
    Err(ParseError::NoFormatMatched)
}

fn format_matches(raw: &str, format: CaseFormat) -> bool {
    if !format.parseable() {
        return false;
    }
    match format.separator() {
        Some(separator) => raw.contains(separator),
        None => camel::has_case_transition(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_never_parses() {
        assert_eq!(load("anything_at-All"), vec!["anything_at-All"]);
        assert_eq!(load(""), vec![""]);
    }

    #[test]
    fn test_parse_dispatches_per_format() {
        assert_eq!(
            parse("myName", CaseFormat::Camel).unwrap(),
            vec!["my", "Name"]
        );
        assert_eq!(
            parse("MyName", CaseFormat::Pascal).unwrap(),
            vec!["My", "Name"]
        );
        assert_eq!(
            parse("my_name", CaseFormat::Underscore).unwrap(),
            vec!["my", "name"]
        );
        assert_eq!(
            parse("my-name", CaseFormat::Hyphen).unwrap(),
            vec!["my", "name"]
        );
        assert_eq!(
            parse("MY_NAME", CaseFormat::ScreamingSnake).unwrap(),
            vec!["MY", "NAME"]
        );
    }

    #[test]
    fn test_parse_upper_is_unsupported() {
        assert_eq!(
            parse("MYNAME", CaseFormat::Upper),
            Err(ParseError::UnsupportedFormat(CaseFormat::Upper))
        );
    }

    #[test]
    fn test_no_internal_separators_single_word() {
        for s in ["word", "Word", "w0rd"] {
            assert_eq!(parse_from_underscore(s), vec![s]);
            assert_eq!(parse_from_hyphen(s), vec![s]);
        }
    }

    #[test]
    fn test_mixed_case_first_match_wins() {
        // Underscore matches first; the camel transition in the second
        // segment is deliberately left alone.
        assert_eq!(
            parse_from_mixed_case(
                "my_identifierName",
                &[CaseFormat::Underscore, CaseFormat::Camel]
            )
            .unwrap(),
            vec!["my", "identifierName"]
        );
        assert_eq!(
            parse_from_mixed_case(
                "my_identifier-name",
                &[CaseFormat::Underscore, CaseFormat::Hyphen]
            )
            .unwrap(),
            vec!["my", "identifier-name"]
        );
    }

    #[test]
    fn test_mixed_case_respects_supplied_order() {
        assert_eq!(
            parse_from_mixed_case(
                "my_identifier-name",
                &[CaseFormat::Hyphen, CaseFormat::Underscore]
            )
            .unwrap(),
            vec!["my_identifier", "name"]
        );
    }

    #[test]
    fn test_mixed_case_skips_non_matching_formats() {
        assert_eq!(
            parse_from_mixed_case(
                "plainCamel",
                &[CaseFormat::Underscore, CaseFormat::Hyphen, CaseFormat::Camel]
            )
            .unwrap(),
            vec!["plain", "Camel"]
        );
    }

    #[test]
    fn test_mixed_case_no_match_fails() {
        assert_eq!(
            parse_from_mixed_case("word", &[]),
            Err(ParseError::NoFormatMatched)
        );
        assert_eq!(
            parse_from_mixed_case("word", &[CaseFormat::Underscore, CaseFormat::Camel]),
            Err(ParseError::NoFormatMatched)
        );
        // Upper never matches, even for all-caps input.
        assert_eq!(
            parse_from_mixed_case("WORD", &[CaseFormat::Upper]),
            Err(ParseError::NoFormatMatched)
        );
    }

    #[test]
    fn test_empty_input_degrades_to_empty_sequence() {
        assert!(parse("", CaseFormat::Camel).unwrap().is_empty());
        assert!(parse("", CaseFormat::Underscore).unwrap().is_empty());
    }
}
