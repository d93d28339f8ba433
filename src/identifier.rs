//! The `Identifier` value type: an immutable, ordered sequence of word-parts
//! with constructors mirroring the parser operations one-to-one and
//! rendering delegated to the formatter.

use crate::format::CaseFormat;
use crate::formatter;
use crate::parser::{self, ParseError};

/// Declares the case format an identifier kind is written in by convention.
///
/// Each kind resolves its format at compile time through the associated
/// const; there is no runtime lookup.
pub trait NamedKind {
    const DEFAULT_FORMAT: CaseFormat;
}

/// Method names: `doSomething`
pub struct MethodKind;
/// Variable names: `someValue`
pub struct VariableKind;
/// Free function names: `do_something`
pub struct FunctionKind;
/// Class/type names: `SomeService`
pub struct ClassKind;
/// Constant names: `SOME_LIMIT`
pub struct ConstantKind;

impl NamedKind for MethodKind {
    const DEFAULT_FORMAT: CaseFormat = CaseFormat::Camel;
}

impl NamedKind for VariableKind {
    const DEFAULT_FORMAT: CaseFormat = CaseFormat::Camel;
}

impl NamedKind for FunctionKind {
    const DEFAULT_FORMAT: CaseFormat = CaseFormat::Underscore;
}

impl NamedKind for ClassKind {
    const DEFAULT_FORMAT: CaseFormat = CaseFormat::Pascal;
}

impl NamedKind for ConstantKind {
    const DEFAULT_FORMAT: CaseFormat = CaseFormat::ScreamingSnake;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    parts: Vec<String>,
}

impl Identifier {
    /// Bundle an already-split sequence of parts.
    pub fn from_parts(parts: Vec<String>) -> Self {
        Self { parts }
    }

    /// Wrap the whole string as a single part without parsing.
    pub fn load(raw: &str) -> Self {
        Self {
            parts: parser::load(raw),
        }
    }

    /// Parse `raw` under an explicit case format.
    pub fn parse(raw: &str, format: CaseFormat) -> Result<Self, ParseError> {
        Ok(Self {
            parts: parser::parse(raw, format)?,
        })
    }

    /// Parse `raw` under the default format declared by identifier kind `K`.
    pub fn parse_default<K: NamedKind>(raw: &str) -> Result<Self, ParseError> {
        Self::parse(raw, K::DEFAULT_FORMAT)
    }

    pub fn parse_from_camel_case(raw: &str) -> Self {
        Self {
            parts: parser::parse_from_camel_case(raw),
        }
    }

    pub fn parse_from_camel_case_extended(raw: &str) -> Self {
        Self {
            parts: parser::parse_from_camel_case_extended(raw),
        }
    }

    pub fn parse_from_underscore(raw: &str) -> Self {
        Self {
            parts: parser::parse_from_underscore(raw),
        }
    }

    pub fn parse_from_hyphen(raw: &str) -> Self {
        Self {
            parts: parser::parse_from_hyphen(raw),
        }
    }

    pub fn parse_from_mixed_case(raw: &str, formats: &[CaseFormat]) -> Result<Self, ParseError> {
        Ok(Self {
            parts: parser::parse_from_mixed_case(raw, formats)?,
        })
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.parts.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.parts.last().map(String::as_str)
    }

    /// Render the parts into a single string under `target`.
    pub fn render(&self, target: CaseFormat) -> String {
        formatter::format(&self.parts, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_wraps_whole_string() {
        let ident = Identifier::load("anything_at-All");
        assert_eq!(ident.parts(), ["anything_at-All"]);
        assert_eq!(ident.len(), 1);
    }

    #[test]
    fn test_constructors_mirror_parser() {
        assert_eq!(
            Identifier::parse_from_camel_case("HTTPServerName").parts(),
            ["HTTP", "Server", "Name"]
        );
        assert_eq!(
            Identifier::parse_from_underscore("my__identifier_name").parts(),
            ["my", "identifier", "name"]
        );
        assert_eq!(
            Identifier::parse_from_hyphen("-leading-hyphen-").parts(),
            ["leading", "hyphen"]
        );
        assert_eq!(
            Identifier::parse_from_camel_case_extended("naïveÉtude").parts(),
            ["naïve", "Étude"]
        );
    }

    #[test]
    fn test_parse_default_resolves_per_kind() {
        let method = Identifier::parse_default::<MethodKind>("doSomething").unwrap();
        assert_eq!(method.parts(), ["do", "Something"]);

        let function = Identifier::parse_default::<FunctionKind>("do_something").unwrap();
        assert_eq!(function.parts(), ["do", "something"]);

        let class = Identifier::parse_default::<ClassKind>("SomeService").unwrap();
        assert_eq!(class.parts(), ["Some", "Service"]);

        let constant = Identifier::parse_default::<ConstantKind>("SOME_LIMIT").unwrap();
        assert_eq!(constant.parts(), ["SOME", "LIMIT"]);
    }

    #[test]
    fn test_render_delegates_to_formatter() {
        let ident = Identifier::from_parts(vec!["my".into(), "word".into()]);
        assert_eq!(ident.render(CaseFormat::Camel), "myWord");
        assert_eq!(ident.render(CaseFormat::Hyphen), "my-word");
        assert_eq!(ident.render(CaseFormat::ScreamingSnake), "MY_WORD");
    }

    #[test]
    fn test_mixed_case_error_surfaces() {
        assert_eq!(
            Identifier::parse_from_mixed_case("word", &[]),
            Err(ParseError::NoFormatMatched)
        );
    }

    #[test]
    fn test_accessors() {
        let ident = Identifier::parse_from_underscore("alpha_beta_gamma");
        assert_eq!(ident.first(), Some("alpha"));
        assert_eq!(ident.last(), Some("gamma"));
        assert!(!ident.is_empty());
        assert!(Identifier::parse_from_underscore("").is_empty());
    }
}
