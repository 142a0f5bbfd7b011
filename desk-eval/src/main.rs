//! desk-eval - Evaluate an arithmetic expression from the command line
//!
//! Reads an expression from the argument list or stdin, runs it through the
//! same sanitization pipeline as the interactive calculator, and prints the
//! result as text or JSON.

use std::io::Read;

use clap::Parser;
use libdeskcalc::display::{DisplaySink, WriteSink};
use libdeskcalc::error::{CalcError, Result};
use libdeskcalc::eval;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "desk-eval")]
#[command(about = "Evaluate an arithmetic expression", long_about = None)]
struct Cli {
    /// Expression to evaluate (reads from stdin if not provided)
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("error")
            .with_writer(std::io::stderr)
            .init();
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let raw = match cli.expression {
        Some(expr) => expr,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| CalcError::InvalidInput(format!("Failed to read stdin: {}", e)))?;
            buffer
        }
    };

    // Same pipeline as the interactive builder: tolerate a trailing
    // operator, map display glyphs, drop foreign characters.
    let trimmed = eval::strip_trailing_operators(raw.trim());
    let sanitized = eval::sanitize(trimmed);
    if sanitized.trim().is_empty() {
        return Err(CalcError::InvalidInput(
            "Expression is empty after sanitization".to_string(),
        ));
    }
    debug!(raw = %raw.trim(), sanitized = %sanitized, "evaluating expression");

    let value = eval::evaluate(&sanitized)?;
    let result = eval::format_result(value);

    match cli.format.as_str() {
        "json" => {
            let output = serde_json::json!({
                "expression": sanitized,
                "result": result,
                "value": value,
            });
            println!("{}", output);
        }
        "text" => {
            let mut sink = WriteSink::new(std::io::stdout());
            sink.render(&result)
                .map_err(|e| CalcError::InvalidInput(format!("Failed to write output: {}", e)))?;
        }
        other => {
            return Err(CalcError::InvalidInput(format!(
                "Unknown output format: '{}'. Valid options: text, json",
                other
            )));
        }
    }

    Ok(())
}
