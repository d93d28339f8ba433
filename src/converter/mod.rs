use crate::format::CaseFormat;
use crate::identifier::Identifier;
use crate::parser::ParseError;
use crate::{Config, Conversion, ConvertFailure, ConvertResult};
use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Identifier-style strings: letters (accented included), digits,
    // underscores, hyphens. `\w` is Unicode-aware here, which keeps inputs
    // meant for the extended camel parser from tripping the warning.
    static ref IDENTIFIER_SHAPE: Regex = Regex::new(r"^[\w-]+$").unwrap();
}

/// Batch conversion engine behind the CLI: built once from [`Config`], then
/// applied to any number of raw identifiers.
pub struct Converter {
    target: CaseFormat,
    source: Option<CaseFormat>,
    detection_order: Vec<CaseFormat>,
    ignore_patterns: Vec<Regex>,
}

impl Converter {
    pub fn new(config: &Config) -> Result<Self> {
        // Compile ignore patterns
        let mut ignore_patterns = Vec::new();
        for pattern in &config.ignore_patterns {
            match Regex::new(pattern) {
                Ok(re) => ignore_patterns.push(re),
                Err(e) => eprintln!("Warning: Invalid regex pattern '{}': {}", pattern, e),
            }
        }

        Ok(Self {
            target: config.to,
            source: config.from,
            detection_order: config.source_formats.clone(),
            ignore_patterns,
        })
    }

    /// Convert a batch of identifiers, collecting per-item results and
    /// counts. Items that fail under an explicit source format land in
    /// `failures` without stopping the batch.
    pub fn convert_all(&self, inputs: &[String]) -> ConvertResult {
        let mut result = ConvertResult::default();

        for input in inputs {
            match self.convert(input) {
                Ok(conversion) => {
                    if conversion.skipped {
                        result.skipped_count += 1;
                    } else {
                        result.converted_count += 1;
                    }
                    result.conversions.push(conversion);
                }
                Err(error) => result.failures.push(ConvertFailure {
                    input: input.clone(),
                    error,
                }),
            }
        }

        result
    }

    /// Convert one identifier into the target format.
    ///
    /// Matching an ignore pattern passes the input through untouched. With
    /// no explicit source format, detection walks the configured format
    /// order; when nothing matches the identifier is loaded as a single
    /// word rather than rejected.
    pub fn convert(&self, raw: &str) -> Result<Conversion, ParseError> {
        if self.should_ignore(raw) {
            return Ok(Conversion {
                input: raw.to_string(),
                output: raw.to_string(),
                detected: None,
                skipped: true,
            });
        }

        if !IDENTIFIER_SHAPE.is_match(raw) {
            eprintln!("Warning: '{}' does not look like an identifier", raw);
        }

        let (identifier, detected) = match self.source {
            Some(format) => (Identifier::parse(raw, format)?, Some(format)),
            None => self.detect(raw),
        };

        Ok(Conversion {
            input: raw.to_string(),
            output: identifier.render(self.target),
            detected,
            skipped: false,
        })
    }

    fn detect(&self, raw: &str) -> (Identifier, Option<CaseFormat>) {
        for &format in &self.detection_order {
            if let Ok(identifier) = Identifier::parse_from_mixed_case(raw, &[format]) {
                return (identifier, Some(format));
            }
        }
        (Identifier::load(raw), None)
    }

    fn should_ignore(&self, raw: &str) -> bool {
        self.ignore_patterns.iter().any(|re| re.is_match(raw))
    }
}
