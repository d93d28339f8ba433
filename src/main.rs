use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use recase::cli::output::{self, OutputFormat};
use recase::{CaseFormat, Config, Converter};
use std::io::{self, BufRead};

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(version, about = "Convert programming identifiers between case conventions", long_about = None)]
struct Cli {
    /// Identifiers to convert (read from stdin when omitted)
    #[arg(value_name = "IDENTIFIERS")]
    identifiers: Vec<String>,

    /// Target case format (camel, pascal, snake, kebab, screaming, upper)
    #[arg(short, long)]
    to: Option<CaseFormat>,

    /// Source case format; detected per identifier when omitted
    #[arg(short, long)]
    from: Option<CaseFormat>,

    /// Detection order when no source format is given
    #[arg(long, value_name = "FORMAT")]
    formats: Vec<CaseFormat>,

    /// Pattern to ignore (regex); matching identifiers pass through
    #[arg(long)]
    ignore_pattern: Vec<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if identifiers fail to parse
    #[arg(long)]
    no_fail: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Suppress the summary line
    #[arg(short, long)]
    quiet: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    // Load configuration
    let config = Config::load(
        cli.to,
        cli.from,
        cli.formats.clone(),
        cli.ignore_pattern.clone(),
    )?;

    // Gather inputs
    let identifiers = if cli.identifiers.is_empty() {
        read_stdin_identifiers()?
    } else {
        cli.identifiers.clone()
    };

    if identifiers.is_empty() {
        anyhow::bail!("No identifiers specified. Use --help for usage information.");
    }

    // Initialize converter and process the batch
    let converter = Converter::new(&config)?;
    let result = converter.convert_all(&identifiers);

    let colored = !cli.no_color;
    output::print_conversions(&result, colored, &cli.format);

    if matches!(cli.format, OutputFormat::Text) {
        for failure in &result.failures {
            output::print_parse_error(&failure.input, &failure.error, colored);
        }
        if !cli.quiet {
            output::print_summary(&result, colored);
        }
    }

    // Exit with appropriate code
    if !result.failures.is_empty() && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn read_stdin_identifiers() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut identifiers = Vec::new();

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            identifiers.push(trimmed.to_string());
        }
    }

    Ok(identifiers)
}
