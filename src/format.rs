use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A naming convention: how words are separated and capitalized when joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseFormat {
    /// `myWordName`
    Camel,
    /// `MyWordName`
    Pascal,
    /// `my_word_name`
    Underscore,
    /// `my-word-name`
    Hyphen,
    /// `MY_WORD_NAME`
    ScreamingSnake,
    /// `MYWORDNAME` — render-only; carries no word boundaries to parse back
    Upper,
}

/// How each word is cased when the formatter joins a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCaps {
    /// Uppercase the first character, keep the rest
    Capitalize,
    /// Lowercase the whole word
    Lower,
    /// Uppercase the whole word
    Upper,
}

impl CaseFormat {
    pub const ALL: [CaseFormat; 6] = [
        CaseFormat::Camel,
        CaseFormat::Pascal,
        CaseFormat::Underscore,
        CaseFormat::Hyphen,
        CaseFormat::ScreamingSnake,
        CaseFormat::Upper,
    ];

    /// The character placed between words, if the format uses one.
    pub fn separator(&self) -> Option<char> {
        match self {
            CaseFormat::Underscore | CaseFormat::ScreamingSnake => Some('_'),
            CaseFormat::Hyphen => Some('-'),
            CaseFormat::Camel | CaseFormat::Pascal | CaseFormat::Upper => None,
        }
    }

    /// Capitalization applied to each word on rendering. Camel treats the
    /// first word specially (lowered), handled by the formatter.
    pub fn word_caps(&self) -> WordCaps {
        match self {
            CaseFormat::Camel | CaseFormat::Pascal => WordCaps::Capitalize,
            CaseFormat::Underscore | CaseFormat::Hyphen => WordCaps::Lower,
            CaseFormat::ScreamingSnake | CaseFormat::Upper => WordCaps::Upper,
        }
    }

    /// Whether the parser has a split rule for this format.
    pub fn parseable(&self) -> bool {
        !matches!(self, CaseFormat::Upper)
    }
}

impl FromStr for CaseFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" | "camelcase" => Ok(CaseFormat::Camel),
            "pascal" | "pascalcase" | "upper-camel" => Ok(CaseFormat::Pascal),
            "snake" | "snakecase" | "underscore" => Ok(CaseFormat::Underscore),
            "kebab" | "kebabcase" | "hyphen" => Ok(CaseFormat::Hyphen),
            "screaming" | "screaming-snake" | "upper-snake" => Ok(CaseFormat::ScreamingSnake),
            "upper" | "uppercase" => Ok(CaseFormat::Upper),
            _ => Err(format!("Unknown case format: {}", s)),
        }
    }
}

impl fmt::Display for CaseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseFormat::Camel => write!(f, "camel"),
            CaseFormat::Pascal => write!(f, "pascal"),
            CaseFormat::Underscore => write!(f, "snake"),
            CaseFormat::Hyphen => write!(f, "kebab"),
            CaseFormat::ScreamingSnake => write!(f, "screaming"),
            CaseFormat::Upper => write!(f, "upper"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("camel".parse::<CaseFormat>().unwrap(), CaseFormat::Camel);
        assert_eq!("snake".parse::<CaseFormat>().unwrap(), CaseFormat::Underscore);
        assert_eq!(
            "underscore".parse::<CaseFormat>().unwrap(),
            CaseFormat::Underscore
        );
        assert_eq!("kebab".parse::<CaseFormat>().unwrap(), CaseFormat::Hyphen);
        assert_eq!(
            "SCREAMING".parse::<CaseFormat>().unwrap(),
            CaseFormat::ScreamingSnake
        );
        assert!("spongebob".parse::<CaseFormat>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for format in CaseFormat::ALL {
            assert_eq!(format.to_string().parse::<CaseFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_separators() {
        assert_eq!(CaseFormat::Underscore.separator(), Some('_'));
        assert_eq!(CaseFormat::Hyphen.separator(), Some('-'));
        assert_eq!(CaseFormat::Camel.separator(), None);
        assert_eq!(CaseFormat::ScreamingSnake.separator(), Some('_'));
    }

    #[test]
    fn test_only_upper_is_unparseable() {
        for format in CaseFormat::ALL {
            assert_eq!(format.parseable(), format != CaseFormat::Upper);
        }
    }
}
