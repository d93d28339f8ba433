pub mod cli;
pub mod config;
pub mod converter;
pub mod format;
pub mod formatter;
pub mod identifier;
pub mod parser;

pub use config::Config;
pub use converter::Converter;
pub use format::CaseFormat;
pub use identifier::Identifier;
pub use parser::ParseError;

#[derive(Debug, Clone, Default)]
pub struct ConvertResult {
    pub converted_count: usize,
    pub skipped_count: usize,
    pub conversions: Vec<Conversion>,
    pub failures: Vec<ConvertFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub input: String,
    pub output: String,
    /// Format the input was split with; `None` when it was passed through
    /// unsplit (ignored, or no detection candidate matched).
    pub detected: Option<CaseFormat>,
    pub skipped: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertFailure {
    pub input: String,
    pub error: ParseError,
}
