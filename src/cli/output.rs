use crate::ConvertResult;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonConversion {
    input: String,
    output: String,
    detected: Option<String>,
    skipped: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonFailure {
    input: String,
    error: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    converted: usize,
    skipped: usize,
    failed: usize,
    conversions: Vec<JsonConversion>,
    failures: Vec<JsonFailure>,
}

pub fn print_conversions(result: &ConvertResult, colored_output: bool, format: &OutputFormat) {
    match format {
        OutputFormat::Text => print_text_conversions(result, colored_output),
        OutputFormat::Json => print_json_conversions(result),
    }
}

fn print_text_conversions(result: &ConvertResult, colored_output: bool) {
    for conversion in &result.conversions {
        if conversion.skipped {
            if colored_output {
                eprintln!(
                    "{} {} (ignored)",
                    "-".dimmed(),
                    conversion.input.dimmed()
                );
            } else {
                eprintln!("- {} (ignored)", conversion.input);
            }
            println!("{}", conversion.output);
            continue;
        }

        // Only the converted identifier goes to stdout so the output stays
        // pipe-friendly.
        println!("{}", conversion.output);
    }
}

fn print_json_conversions(result: &ConvertResult) {
    let conversions: Vec<JsonConversion> = result
        .conversions
        .iter()
        .map(|c| JsonConversion {
            input: c.input.clone(),
            output: c.output.clone(),
            detected: c.detected.map(|f| f.to_string()),
            skipped: c.skipped,
        })
        .collect();

    let failures: Vec<JsonFailure> = result
        .failures
        .iter()
        .map(|f| JsonFailure {
            input: f.input.clone(),
            error: f.error.to_string(),
        })
        .collect();

    let output = JsonOutput {
        converted: result.converted_count,
        skipped: result.skipped_count,
        failed: result.failures.len(),
        conversions,
        failures,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

pub fn print_summary(result: &ConvertResult, colored: bool) {
    let converted = result.converted_count;
    let skipped = result.skipped_count;
    let noun = if converted == 1 { "identifier" } else { "identifiers" };

    if colored {
        eprintln!(
            "{} {} {} converted, {} skipped",
            "✓".green().bold(),
            converted.to_string().green().bold(),
            noun,
            skipped
        );
    } else {
        eprintln!("✓ {} {} converted, {} skipped", converted, noun, skipped);
    }
}

pub fn print_parse_error(input: &str, error: &crate::ParseError, colored: bool) {
    if colored {
        eprintln!(
            "{} {}: {}",
            "✗".red().bold(),
            input.red().bold(),
            error
        );
    } else {
        eprintln!("✗ {}: {}", input, error);
    }
}
