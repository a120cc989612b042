use crate::core::projector::ResumeData;
use crate::domain::model::{ResumeDocument, ResumeField};
use crate::utils::error::{ResumeError, Result};
use serde_json::{Map, Value};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = ResumeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ResumeError::InvalidValueError {
                field: "output".to_string(),
                value: s.to_string(),
                reason: "Valid formats: text, json, csv".to_string(),
            }),
        }
    }
}

/// Pretty JSON of the raw document.
pub fn write_document_json<W: Write>(document: &ResumeDocument, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, &document.to_json())?;
    writeln!(writer)?;
    Ok(())
}

/// Writes the selected projections; an empty `fields` slice means all six.
pub fn write_lists<W: Write>(
    data: &ResumeData,
    fields: &[ResumeField],
    format: OutputFormat,
    writer: W,
) -> Result<()> {
    let all = ResumeField::ALL;
    let fields: &[ResumeField] = if fields.is_empty() { &all } else { fields };

    match format {
        OutputFormat::Text => write_text(data, fields, writer),
        OutputFormat::Json => write_json(data, fields, writer),
        OutputFormat::Csv => write_csv(data, fields, writer),
    }
}

fn write_text<W: Write>(data: &ResumeData, fields: &[ResumeField], mut writer: W) -> Result<()> {
    for (index, company) in data.company_list().iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }
        writeln!(writer, "[{}] {}", index, company)?;
        for field in fields {
            if let Some(value) = data.value(index, *field) {
                writeln!(writer, "  {}: {}", field.label(), value)?;
            }
        }
    }
    Ok(())
}

fn write_json<W: Write>(data: &ResumeData, fields: &[ResumeField], mut writer: W) -> Result<()> {
    let rows: Vec<Value> = (0..data.len())
        .map(|index| {
            let mut row = Map::new();
            for field in fields {
                if let Some(value) = data.value(index, *field) {
                    row.insert(field.key().to_string(), Value::String(value.to_string()));
                }
            }
            Value::Object(row)
        })
        .collect();

    serde_json::to_writer_pretty(&mut writer, &rows)?;
    writeln!(writer)?;
    Ok(())
}

fn write_csv<W: Write>(data: &ResumeData, fields: &[ResumeField], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(fields.iter().map(|field| field.key()))?;

    for index in 0..data.len() {
        csv_writer.write_record(
            fields
                .iter()
                .map(|field| data.value(index, *field).unwrap_or_default()),
        )?;
    }

    csv_writer.flush()?;
    Ok(())
}
