//! Rendering of command results for the CLI

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::io::Write;

/// Output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

/// Write a command result in the requested format
pub fn render<T: Serialize, W: Write>(value: &T, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, value)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_csv(&serde_json::to_value(value)?, out)?,
    }
    Ok(())
}

fn write_csv<W: Write>(value: &Value, out: &mut W) -> Result<()> {
    match value {
        // One row per record, columns taken from the first record
        Value::Array(rows) => {
            let columns: Vec<&String> = match rows.first() {
                Some(Value::Object(first)) => first.keys().collect(),
                Some(_) => {
                    for row in rows {
                        writeln!(out, "{}", cell(row))?;
                    }
                    return Ok(());
                }
                None => return Ok(()),
            };

            let header: Vec<String> = columns.iter().map(|c| escape(c)).collect();
            writeln!(out, "{}", header.join(","))?;

            for row in rows {
                let line: Vec<String> = columns
                    .iter()
                    .map(|c| row.get(c.as_str()).map(cell).unwrap_or_default())
                    .collect();
                writeln!(out, "{}", line.join(","))?;
            }
        }
        // Plain maps become key/value pairs
        Value::Object(map) => {
            writeln!(out, "key,value")?;
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            for (key, value) in entries {
                writeln!(out, "{},{}", escape(key), cell(value))?;
            }
        }
        other => writeln!(out, "{}", cell(other))?,
    }
    Ok(())
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => escape(s),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        nested => escape(&nested.to_string()),
    }
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
