//! Output formatting module
//!
//! Key/value tables for status views, pretty JSON for backend payloads.

use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;
use tabled::{Table, Tabled};

use kitchen_core::ApiResponse;

/// Output format enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid format: {}. Use 'table' or 'json'", s)),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Key/value row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct FieldRow {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl FieldRow {
    pub fn new(key: &str, value: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            value: value.into(),
        }
    }
}

/// Print key/value rows in the specified format
pub fn print_fields(rows: &[FieldRow], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            let table = Table::new(rows).to_string();
            println!("{}", table);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(rows)?;
            println!("{}", json);
        }
    }
    Ok(())
}

/// Print a backend payload as pretty JSON
pub fn print_json(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a gateway response: JSON pretty-printed, anything else as text
pub fn print_response(response: &ApiResponse) -> anyhow::Result<()> {
    match response {
        ApiResponse::Json(value) => print_json(value),
        ApiResponse::Raw(raw) => {
            let text = raw.text();
            if !text.is_empty() {
                println!("{}", text);
            }
            Ok(())
        }
    }
}

/// Print a success message (respects quiet mode)
pub fn print_success(message: &str, quiet: bool) {
    if !quiet {
        println!("{}", colored::Colorize::green(message));
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}", colored::Colorize::red(message));
}

/// Print an info message (respects quiet mode)
pub fn print_info(message: &str, quiet: bool) {
    if !quiet {
        println!("{}", message);
    }
}
