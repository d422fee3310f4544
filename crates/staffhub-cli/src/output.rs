//! Rendering of command results as tables or JSON.

use serde::Serialize;
use tabled::{Table, Tabled};

/// `--format` values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON array
    Json,
}

/// Render rows in the chosen format.
pub fn render_rows<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) -> String {
    match format {
        OutputFormat::Table if rows.is_empty() => "No results found.".to_string(),
        OutputFormat::Table => Table::new(rows).to_string(),
        OutputFormat::Json => {
            serde_json::to_string_pretty(rows).unwrap_or_else(|_| "[]".to_string())
        }
    }
}

pub fn print_list<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) {
    println!("{}", render_rows(rows, format));
}

pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

pub fn print_warning(msg: &str) {
    eprintln!("⚠ {msg}");
}

pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Aligned `label: value` line
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<12} {value}", format!("{key}:"));
}
