//! Extract command - pull contact fields from a single file.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use pdex_core::{extract_from_text, DocumentExtractor, ExtractionError, ExtractionResult};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Treat the input as already extracted plain text
    #[arg(long)]
    text: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::config::load(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")?,
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Reading file...");

    let data = fs::read(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    pb.set_message("Extracting fields...");

    let result = if args.text {
        extract_from_text(&String::from_utf8_lossy(&data))
    } else {
        let extractor = DocumentExtractor::new().with_pdf_config(config.pdf.clone());
        match extractor.extract(&data) {
            Ok(result) => result,
            Err(ExtractionError::EmptyText) => {
                pb.finish_and_clear();
                anyhow::bail!(
                    "No text could be extracted from {} (scanned documents are not supported)",
                    args.input.display()
                );
            }
            Err(e) => {
                pb.finish_and_clear();
                return Err(e).with_context(|| format!("Failed to process {}", args.input.display()));
            }
        }
    };

    pb.finish_and_clear();

    let output = format_result(&result, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn format_result(result: &ExtractionResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_csv(result: &ExtractionResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let fields = result.fields();
    wtr.write_record(fields.iter().map(|(name, _)| *name))?;
    wtr.write_record(fields.iter().map(|(_, value)| *value))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &ExtractionResult) -> String {
    result
        .fields()
        .iter()
        .map(|(name, value)| format!("{:<8} {}", format!("{}:", name), value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExtractionResult {
        ExtractionResult {
            name: "Jane Doe".to_string(),
            address: "12 Main Street, Springfield".to_string(),
            phone: "555-123-4567".to_string(),
            email: "jane@example.com".to_string(),
            role: "Engineer".to_string(),
        }
    }

    #[test]
    fn test_format_csv_quotes_commas() {
        let csv = format_csv(&sample()).unwrap();
        assert_eq!(
            csv,
            "Name,Address,Phone,Email,Role\n\
             Jane Doe,\"12 Main Street, Springfield\",555-123-4567,jane@example.com,Engineer\n"
        );
    }

    #[test]
    fn test_format_text() {
        let text = format_text(&sample());
        assert!(text.starts_with("Name:    Jane Doe\n"));
        assert!(text.ends_with("Role:    Engineer"));
    }

    #[test]
    fn test_format_json_keys() {
        let json = format_result(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["Email"], "jane@example.com");
    }
}
