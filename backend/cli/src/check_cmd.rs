//! `cronguard check`: validate expressions from arguments or stdin.

use std::io::BufRead;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use tracing::info;

use cronguard_core::{check, CronOptions};

use crate::terminal_output::status_line;

/// Result output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Outcome for a single expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub expression: String,
    pub valid: bool,
    pub error: Option<String>,
}

impl CheckReport {
    pub fn new(expression: &str, options: CronOptions) -> Self {
        let result = check(expression, options);
        Self {
            expression: expression.to_string(),
            valid: result.is_ok(),
            error: result.err().map(|e| e.to_string()),
        }
    }
}

/// Read one expression per line, skipping blank lines and `#` comments.
pub fn read_expressions(reader: impl BufRead) -> Result<Vec<String>> {
    let mut expressions = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read expressions from stdin")?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        expressions.push(trimmed.to_string());
    }
    Ok(expressions)
}

pub fn render_text(reports: &[CheckReport], color: bool) -> String {
    reports
        .iter()
        .map(|r| status_line(r.valid, &r.expression, r.error.as_deref(), color) + "\n")
        .collect()
}

pub fn render_json(reports: &[CheckReport]) -> Result<String> {
    let mut out = String::new();
    for report in reports {
        out.push_str(&serde_json::to_string(report).context("Failed to serialize report")?);
        out.push('\n');
    }
    Ok(out)
}

/// Validate `expressions` and print the results. Returns whether all were valid.
pub fn run(
    expressions: &[String],
    options: CronOptions,
    format: OutputFormat,
    color: bool,
) -> Result<bool> {
    let reports: Vec<CheckReport> = expressions
        .iter()
        .map(|expr| CheckReport::new(expr, options))
        .collect();
    let invalid = reports.iter().filter(|r| !r.valid).count();
    info!(
        total = reports.len(),
        invalid,
        seconds = options.seconds,
        alias = options.alias,
        "Checked cron expressions"
    );

    let rendered = match format {
        OutputFormat::Text => render_text(&reports, color),
        OutputFormat::Json => render_json(&reports)?,
    };
    print!("{rendered}");

    Ok(invalid == 0)
}
